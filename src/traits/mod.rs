pub mod renderer;

pub use renderer::{DrawMode, MeshRenderer};
