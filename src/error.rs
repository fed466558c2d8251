use std::path::PathBuf;

use thiserror::Error;

/// Failures while bringing a demo up. All but texture loading end the program.
#[derive(Debug, Error)]
pub enum DemoError {
    #[error("failed to create event loop: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),

    #[error("failed to create window: {0}")]
    Window(#[from] winit::error::OsError),

    #[error("failed to create surface: {0}")]
    Surface(#[from] wgpu::CreateSurfaceError),

    #[error("no suitable GPU adapter: {0}")]
    Adapter(#[from] wgpu::RequestAdapterError),

    #[error("failed to request device: {0}")]
    Device(#[from] wgpu::RequestDeviceError),

    #[error("surface is not supported by the adapter")]
    UnsupportedSurface,

    #[error("shader `{label}` failed validation: {message}")]
    Shader { label: &'static str, message: String },

    #[error("failed to load texture {}: {source}", .path.display())]
    Texture {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

pub type Result<T, E = DemoError> = std::result::Result<T, E>;
