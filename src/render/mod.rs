pub mod backend;
pub mod context;
pub mod renderer;
