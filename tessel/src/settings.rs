use crate::{Error, Result};
use tessel_gpu::glam::Vec2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Resolution {
    pub width: u32,
    pub height: u32,
}

impl Default for Resolution {
    fn default() -> Self {
        Self { width: 1920, height: 1080 }
    }
}

impl Resolution {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

/// What the CPU fragment stage looks at: an axis-aligned window onto the
/// ground plane, seen from straight above.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Settings {
    pub resolution: Resolution,
    /// World-space width of the window along x. The z span follows the aspect ratio.
    pub extent: f32,
    /// The y every fragment position carries.
    pub height: f32,
    /// (x, z) at the image center.
    pub center: Vec2,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            resolution: Resolution::default(),
            extent: 8.0,
            height: 0.0,
            center: Vec2::ZERO,
        }
    }
}

impl Settings {
    pub fn resolution(mut self, resolution: Resolution) -> Self {
        self.resolution = resolution;
        self
    }

    pub fn extent(mut self, extent: f32) -> Self {
        self.extent = extent;
        self
    }

    pub fn height(mut self, height: f32) -> Self {
        self.height = height;
        self
    }

    pub fn center(mut self, center: Vec2) -> Self {
        self.center = center;
        self
    }

    /// World-space (x, z) size of the window.
    pub fn span(&self) -> Vec2 {
        let Resolution { width, height } = self.resolution;
        Vec2::new(self.extent, self.extent * (height as f32 / width as f32))
    }

    /// Lowest and highest (x, z) corners of the window.
    pub fn bounds(&self) -> (Vec2, Vec2) {
        let half = self.span() / 2.0;
        (self.center - half, self.center + half)
    }

    pub fn validate(&self) -> Result<()> {
        let Resolution { width, height } = self.resolution;
        if width == 0 || height == 0 {
            return Err(Error::InvalidSettings(format!(
                "resolution must be non-zero, got {width}x{height}"
            )));
        }
        if !self.extent.is_finite() || self.extent <= 0.0 {
            return Err(Error::InvalidSettings(format!(
                "extent must be finite and positive, got {}",
                self.extent
            )));
        }
        // Non-finite positions would reach the evaluator, which does not guard against them.
        if !self.height.is_finite() || !self.center.is_finite() {
            return Err(Error::InvalidSettings(format!(
                "height and center must be finite, got {} and {}",
                self.height, self.center
            )));
        }
        // Fragment positions interpolate between the corners, so their distance must stay finite too.
        let (min, max) = self.bounds();
        if !min.is_finite() || !max.is_finite() || !(max - min).is_finite() {
            return Err(Error::InvalidSettings(format!(
                "window overflows f32, corners {min} and {max}"
            )));
        }
        Ok(())
    }
}
