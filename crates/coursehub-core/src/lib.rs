//! Framework glue shared by Coursehub services.

pub mod config;
pub mod middleware;
pub mod sea_ext;
pub mod serde;
pub mod tracing;
