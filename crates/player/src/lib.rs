//! Headless listener for the radio station.
//!
//! - [`machine`]: the pure player state machine.
//! - [`client`]: HTTP and push-channel access to the station.
//! - [`sink`]: audio output abstraction and a timer-driven simulation.
//! - [`driver`]: the event loop wiring the three together.

pub mod client;
pub mod config;
pub mod driver;
pub mod machine;
pub mod sink;
pub mod track;
