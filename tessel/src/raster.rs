use crate::{Resolution, Result, Settings};

use image::{Rgba, RgbaImage};
use log::{debug, info};
use rayon::prelude::*;
use std::{path::Path, time::Instant};
use tessel_gpu::{
    Vertex,
    glam::{Vec3, Vec4},
    to_rgba8,
};

/// Color target of the CPU fragment stage, row-major with the top row first.
#[derive(Clone, Debug, PartialEq)]
pub struct Framebuffer {
    resolution: Resolution,
    pixels: Vec<Vec4>,
}

impl Framebuffer {
    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    pub fn pixels(&self) -> &[Vec4] {
        &self.pixels
    }

    pub fn get(&self, x: u32, y: u32) -> Option<Vec4> {
        let Resolution { width, height } = self.resolution;
        if x >= width || y >= height {
            return None;
        }
        self.pixels.get(y as usize * width as usize + x as usize).copied()
    }

    pub fn to_image(&self) -> RgbaImage {
        let Resolution { width, height } = self.resolution;
        RgbaImage::from_fn(width, height, |x, y| {
            let color = self.pixels[y as usize * width as usize + x as usize];
            Rgba(to_rgba8(color))
        })
    }

    /// Writes the framebuffer as an 8-bit image; the format follows the extension.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        self.to_image().save(path)?;
        info!("tessel::raster - wrote {}", path.display());
        Ok(())
    }
}

/// Corners of the visible ground-plane window: top-left, top-right,
/// bottom-left, bottom-right. The top edge is the far (+z) side.
pub fn ground_plane(settings: &Settings) -> [Vertex; 4] {
    let (min, max) = settings.bounds();
    let corner = |x: f32, z: f32| Vertex::new(Vec3::new(x, settings.height, z), Vec3::Y, tessel_gpu::WHITE);

    [
        corner(min.x, max.y),
        corner(max.x, max.y),
        corner(min.x, min.y),
        corner(max.x, min.y),
    ]
}

/// Interpolated vertex position at the center of pixel `(x, y)`.
pub fn fragment_position(plane: &[Vertex; 4], resolution: Resolution, x: u32, y: u32) -> Vec3 {
    let u = (x as f32 + 0.5) / resolution.width as f32;
    let v = (y as f32 + 0.5) / resolution.height as f32;

    let top = plane[0].position.lerp(plane[1].position, u);
    let bottom = plane[2].position.lerp(plane[3].position, u);
    top.lerp(bottom, v)
}

/// Runs `stage` once for every pixel of the window described by `settings`.
///
/// Rows are shaded in parallel; `stage` sees nothing but the fragment position.
pub fn render<F>(settings: &Settings, stage: F) -> Result<Framebuffer>
where
    F: Fn(Vec3) -> Vec4 + Sync,
{
    settings.validate()?;

    let resolution = settings.resolution;
    let plane = ground_plane(settings);
    info!(
        "tessel::raster - shading {}x{} fragments",
        resolution.width, resolution.height
    );

    let start = Instant::now();
    let mut pixels = vec![Vec4::ZERO; resolution.pixel_count()];
    pixels
        .par_chunks_mut(resolution.width as usize)
        .enumerate()
        .for_each(|(y, row)| {
            for (x, pixel) in row.iter_mut().enumerate() {
                *pixel = stage(fragment_position(&plane, resolution, x as u32, y as u32));
            }
        });
    debug!("tessel::raster - shaded in {:?}", start.elapsed());

    Ok(Framebuffer { resolution, pixels })
}

pub fn render_checker(settings: &Settings) -> Result<Framebuffer> {
    render(settings, tessel_gpu::evaluate)
}
