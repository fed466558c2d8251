// VIEW: GPU setup and rendering
pub mod render;
pub mod gpu_init;
pub mod texture;

pub use render::{RenderState, OverlayFrame, TransformResources, TextureResources};
pub use gpu_init::GpuContext;
