//! Domain layer: link records, ports, and error kinds. No I/O.

pub mod error;
pub mod model;
pub mod traits;
