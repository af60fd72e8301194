//! Domain types shared across Coursehub services.
//!
//! Pure types and validation rules with no framework dependencies.

pub mod email;
pub mod enrollment;
pub mod pagination;
pub mod validation;
