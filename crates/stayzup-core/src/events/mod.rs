//! Progression event system: handler trait, payloads, and dispatcher.

pub mod dispatcher;
pub mod handler;
pub mod types;

pub use dispatcher::EventDispatcher;
pub use handler::ProgressionEventHandler;
pub use types::*;
