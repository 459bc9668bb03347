use std::path::PathBuf;

use clap::Parser;
use log::info;
use tessel::{Resolution, Settings, gpu::glam::Vec2};

/// Renders the checkerboard ground plane, seen from above, to an image.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    #[arg(long, default_value_t = 1920)]
    width: u32,

    #[arg(long, default_value_t = 1080)]
    height: u32,

    /// World-space width of the visible window along x.
    #[arg(long, default_value_t = 8.0)]
    extent: f32,

    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    center_x: f32,

    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    center_z: f32,

    /// The y every fragment carries; does not change the image.
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    plane_height: f32,

    #[arg(long, short, default_value = "checker.png")]
    output: PathBuf,
}

impl Args {
    fn settings(&self) -> Settings {
        Settings::default()
            .resolution(Resolution::new(self.width, self.height))
            .extent(self.extent)
            .height(self.plane_height)
            .center(Vec2::new(self.center_x, self.center_z))
    }
}

fn main() -> Result<(), tessel::Error> {
    env_logger::init();

    let args = Args::parse();
    let settings = args.settings();
    info!("preview - {settings:?}");

    let framebuffer = tessel::render_checker(&settings)?;
    framebuffer.save(&args.output)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_flags_onto_settings() {
        let args = Args::parse_from([
            "preview",
            "--width",
            "64",
            "--height",
            "32",
            "--extent",
            "4",
            "--center-x",
            "-1.5",
            "--center-z",
            "2",
            "--plane-height",
            "-7.25",
            "--output",
            "out.png",
        ]);
        let settings = args.settings();

        assert_eq!(settings.resolution, Resolution::new(64, 32));
        assert_eq!(settings.extent, 4.0);
        assert_eq!(settings.center, Vec2::new(-1.5, 2.0));
        assert_eq!(settings.height, -7.25);
        assert_eq!(args.output, PathBuf::from("out.png"));
    }

    #[test]
    fn defaults_match_settings() {
        let args = Args::parse_from(["preview"]);
        assert_eq!(args.settings(), Settings::default());
    }
}
