mod error;
pub mod pipeline;
pub mod raster;
pub mod settings;

pub use error::{Error, Result};
pub use raster::{Framebuffer, render, render_checker};
pub use settings::{Resolution, Settings};
pub use tessel_gpu as gpu;
