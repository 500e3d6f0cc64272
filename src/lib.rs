pub mod app;
pub mod cli;
pub mod input;
pub mod math;
pub mod mesh;
pub mod render;
pub mod scene;
pub mod traits;

pub use mesh::{Mesh, MeshLibrary, PrimitiveKind};
pub use scene::Scene;
pub use traits::{DrawMode, MeshRenderer};
