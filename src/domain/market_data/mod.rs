//! Market data aggregate: time-series points and the identifiers used to request them.

pub mod entities;
pub mod value_objects;

pub use entities::*;
pub use value_objects::*;
