//! Observability: `tracing` with an `EnvFilter` read from `STAYZUP_LOG`.

pub mod setup;

pub use setup::init_tracing;
