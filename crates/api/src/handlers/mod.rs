//! Request handlers.
//!
//! Each submodule provides the async handler functions for one resource.
//! Handlers delegate to the repositories in `radio_db` (or to the
//! [`station`](crate::station) service) and map errors via
//! [`AppError`](crate::error::AppError).

pub mod headline;
pub mod station;
pub mod stream;
pub mod track;
