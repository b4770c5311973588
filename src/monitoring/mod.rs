/*!
 * Monitoring
 * Tracing setup for the library and the stress driver
 */

mod tracer;

pub use tracer::{init_tracing, try_init_tracing, PhaseSpan, TRACE_JSON_ENV};
