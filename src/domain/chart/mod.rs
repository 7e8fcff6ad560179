//! Chart aggregate: value objects, the area chart model and the engine ports.

pub mod entities;
pub mod ports;
pub mod value_objects;

pub use entities::*;
pub use ports::*;
pub use value_objects::*;
