//! Domain building blocks for the radio station backend.
//!
//! Everything here is free of I/O: the advance rule, media path resolution,
//! request validation helpers, the DJ line generator and the shared error
//! taxonomy. Database and HTTP layers build on top of these.

pub mod dj;
pub mod error;
pub mod media;
pub mod playlist;
pub mod types;
pub mod validation;
