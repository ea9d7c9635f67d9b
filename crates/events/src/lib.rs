//! Station event bus.
//!
//! - [`EventBus`]: in-process publish/subscribe hub backed by
//!   `tokio::sync::broadcast`.
//! - [`StationEvent`]: the typed events pushed to listeners.

pub mod bus;

pub use bus::{EventBus, StationEvent};
