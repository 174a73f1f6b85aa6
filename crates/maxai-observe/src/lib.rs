//! Observability setup for Max AI: tracing subscriber with fmt or JSON
//! output and optional OpenTelemetry span export.

pub mod tracing_setup;

pub use tracing_setup::{TracingOptions, init_tracing, shutdown_tracing};
