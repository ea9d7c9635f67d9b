//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` + `Validate` create payload, where the entity can be
//!   created over HTTP

pub mod headline;
pub mod like;
pub mod playlist;
pub mod track;
