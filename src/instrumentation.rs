//! Span timing for profiling the search.
//!
//! Only compiled with `--features instrumentation`. Functions marked with
//! `#[instrument]` are timed per thread and summed up at exit.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Instant;

use once_cell::sync::Lazy;
use thread_local::ThreadLocal;
use tracing::span;
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{EnvFilter, Layer};

/// Span name to (calls, total nanoseconds).
type Timings = HashMap<&'static str, (u64, u64)>;

static SPAN_TIMINGS: Lazy<ThreadLocal<Mutex<Timings>>> = Lazy::new(ThreadLocal::new);

struct SpanTimer;

impl<S> Layer<S> for SpanTimer
where
    S: tracing::Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_enter(&self, id: &span::Id, ctx: Context<'_, S>) {
        if let Some(span) = ctx.span(id) {
            span.extensions_mut().insert(Instant::now());
        }
    }

    fn on_exit(&self, id: &span::Id, ctx: Context<'_, S>) {
        let span = match ctx.span(id) {
            Some(span) => span,
            None => return,
        };
        let started = span.extensions_mut().remove::<Instant>();
        if let Some(started) = started {
            let nanos = started.elapsed().as_nanos() as u64;
            let cell = SPAN_TIMINGS.get_or(|| Mutex::new(HashMap::new()));
            if let Ok(mut timings) = cell.lock() {
                let entry = timings.entry(span.name()).or_insert((0, 0));
                entry.0 += 1;
                entry.1 += nanos;
            }
        }
    }
}

/// Installs the timing layer. With `RUST_LOG` unset or `off` spans are only
/// timed; otherwise span events are printed as well.
pub fn init_tracing() {
    let filter = std::env::var("RUST_LOG").unwrap_or_default();
    let quiet = filter.is_empty() || filter == "off";

    let result = if quiet {
        tracing::subscriber::set_global_default(
            tracing_subscriber::registry()
                .with(EnvFilter::new("trace"))
                .with(SpanTimer),
        )
    } else {
        tracing::subscriber::set_global_default(
            tracing_subscriber::registry()
                .with(EnvFilter::from_default_env())
                .with(SpanTimer)
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_target(false)
                        .compact(),
                ),
        )
    };

    if let Err(error) = result {
        eprintln!("tracing already initialized: {}", error);
    }
}

/// Prints call counts and time per span, slowest first, to stderr.
pub fn print_timing_statistics() {
    let mut totals: Timings = HashMap::new();
    for cell in SPAN_TIMINGS.iter() {
        if let Ok(timings) = cell.lock() {
            for (name, (calls, nanos)) in timings.iter() {
                let entry = totals.entry(*name).or_insert((0, 0));
                entry.0 += calls;
                entry.1 += nanos;
            }
        }
    }

    if totals.is_empty() {
        eprintln!("\nNo timing data collected.");
        return;
    }

    let mut rows: Vec<_> = totals.into_iter().collect();
    rows.sort_by_key(|(_, (_, nanos))| std::cmp::Reverse(*nanos));

    eprintln!("\n{:<32} {:>12} {:>12} {:>12}", "Span", "Calls", "Total (ms)", "Avg (µs)");
    eprintln!("{:-<72}", "");
    for (name, (calls, nanos)) in rows {
        eprintln!(
            "{:<32} {:>12} {:>12.2} {:>12.2}",
            name,
            calls,
            nanos as f64 / 1_000_000.0,
            nanos as f64 / calls.max(1) as f64 / 1_000.0
        );
    }
}
