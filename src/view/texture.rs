use std::path::Path;

use image::{Rgba, RgbaImage};

use crate::error::{DemoError, Result};

pub struct GpuTexture {
    pub texture: wgpu::Texture,
    pub view: wgpu::TextureView,
    pub sampler: wgpu::Sampler,
}

/// Decode an image from disk, flipped so the first row is the bottom edge
/// (texture coordinate v = 0 sits at the bottom of the quad).
pub fn load_image(path: &Path) -> Result<RgbaImage> {
    let img = image::open(path).map_err(|source| DemoError::Texture {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(img.flipv().to_rgba8())
}

/// Two-tone checkerboard used when the texture file cannot be read
pub fn checkerboard(size: u32, cells: u32) -> RgbaImage {
    let cell = (size / cells.max(1)).max(1);
    RgbaImage::from_fn(size, size, |x, y| {
        if ((x / cell) + (y / cell)) % 2 == 0 {
            Rgba([230, 230, 230, 255])
        } else {
            Rgba([200, 60, 160, 255])
        }
    })
}

pub fn white_pixel() -> RgbaImage {
    RgbaImage::from_pixel(1, 1, Rgba([255, 255, 255, 255]))
}

/// Load `path`, or fall back to a checkerboard with a warning
pub fn load_or_checkerboard(path: &Path) -> RgbaImage {
    match load_image(path) {
        Ok(img) => {
            tracing::info!(path = %path.display(), width = img.width(), height = img.height(), "loaded texture");
            img
        }
        Err(e) => {
            tracing::warn!("{e}; using a checkerboard instead");
            checkerboard(64, 8)
        }
    }
}

pub fn upload(device: &wgpu::Device, queue: &wgpu::Queue, img: &RgbaImage, label: &str) -> GpuTexture {
    let size = wgpu::Extent3d {
        width: img.width(),
        height: img.height(),
        depth_or_array_layers: 1,
    };
    let texture = device.create_texture(&wgpu::TextureDescriptor {
        label: Some(label),
        size,
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: wgpu::TextureFormat::Rgba8UnormSrgb,
        usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
        view_formats: &[],
    });

    queue.write_texture(
        wgpu::TexelCopyTextureInfo {
            texture: &texture,
            mip_level: 0,
            origin: wgpu::Origin3d::ZERO,
            aspect: wgpu::TextureAspect::All,
        },
        img.as_raw(),
        wgpu::TexelCopyBufferLayout {
            offset: 0,
            bytes_per_row: Some(4 * img.width()),
            rows_per_image: Some(img.height()),
        },
        size,
    );

    let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
    let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
        label: Some("texture_sampler"),
        address_mode_u: wgpu::AddressMode::Repeat,
        address_mode_v: wgpu::AddressMode::Repeat,
        address_mode_w: wgpu::AddressMode::Repeat,
        mag_filter: wgpu::FilterMode::Linear,
        min_filter: wgpu::FilterMode::Linear,
        ..Default::default()
    });

    GpuTexture { texture, view, sampler }
}
