//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `Serialize` entity struct as stored in its table
//! - A `Deserialize` + `Validate` create DTO
//! - A `Deserialize` + `Validate` update DTO (all `Option` fields) for patches

pub mod booking;
pub mod gallery;
pub mod membership;
pub mod product;
pub mod service;
pub mod stylist;
