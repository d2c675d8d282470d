pub mod paint;
pub mod shape;
