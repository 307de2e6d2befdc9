pub mod error;
pub mod generator;
pub mod math;
pub mod shape;

pub use error::{Result, SpanvertError};
pub use generator::VertexGenerator;
pub use shape::{Cuboid, Rectangle};
