//! Observability for maldet.
//! `tracing` crate with `EnvFilter`, per-crate log levels.

pub mod events;
pub mod setup;

pub use setup::init_tracing;
