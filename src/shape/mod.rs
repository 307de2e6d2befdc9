pub mod cuboid;
pub mod rectangle;

pub use cuboid::Cuboid;
pub use rectangle::Rectangle;
