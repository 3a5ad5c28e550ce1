//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - `Deserialize` + `Validate` form DTOs for inserts and updates

pub mod keyword;
pub mod project;
pub mod research;
pub mod task;
