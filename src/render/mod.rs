mod gpu;
mod record;

pub use gpu::GpuRenderer;
pub use record::{DrawCall, RecordingRenderer};
