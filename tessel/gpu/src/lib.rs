#![cfg_attr(target_arch = "spirv", no_std)]

#[cfg(not(target_arch = "spirv"))]
use bytemuck::cast;

pub use spirv_std::glam;

use glam::{Vec3, Vec4};
#[allow(unused)]
use spirv_std::num_traits::Float;

/// Side length of one checkerboard tile along x and z.
pub const TILE_SIZE: f32 = 1.0;

pub const WHITE: Vec3 = Vec3::ONE;
pub const BLACK: Vec3 = Vec3::ZERO;

/// Cell index of a position on the x/z grid.
///
/// Both components are integer-valued; they stay `f32` because that is what
/// the fragment stage computes with.
#[derive(Clone, Copy)]
#[cfg_attr(not(target_arch = "spirv"), derive(Debug, PartialEq))]
pub struct Tile {
    pub x: f32,
    pub z: f32,
}

/// Tile containing `position`. The y axis does not take part in the tiling.
///
/// Boundaries are inclusive of their lower bound and negative coordinates
/// round toward negative infinity, so `x = 2.0` lands in tile 2 and
/// `x = -0.5` in tile -1.
pub fn tile(position: Vec3) -> Tile {
    let scaled = position / TILE_SIZE;
    Tile {
        x: scaled.x.floor(),
        z: scaled.z.floor(),
    }
}

/// `0.0` for tiles whose summed index is even, `1.0` for odd ones.
pub fn parity(tile: Tile) -> f32 {
    // `%` keeps the sign of the dividend; fold negatives back into [0, 2).
    let sum = tile.x + tile.z;
    ((sum % 2.0) + 2.0) % 2.0
}

pub fn shade(parity: f32) -> Vec3 {
    WHITE.lerp(BLACK, parity)
}

/// Opaque checkerboard color at `position`.
pub fn evaluate(position: Vec3) -> Vec4 {
    Vec4::from((shade(parity(tile(position))), 1.0))
}

#[cfg_attr(not(target_arch = "spirv"), derive(Default, Debug, Clone, Copy, PartialEq))]
#[repr(C)]
pub struct Vertex {
    pub position: Vec3,
    pub normal: Vec3,
    pub color: Vec3,
}

#[cfg(not(target_arch = "spirv"))]
impl Vertex {
    pub fn new(position: Vec3, normal: Vec3, color: Vec3) -> Self {
        Self { position, normal, color }
    }

    pub fn as_buffer(&self) -> [u8; VERTEX_SIZE as usize] {
        let floats: [f32; 9] = [
            self.position.x,
            self.position.y,
            self.position.z,
            self.normal.x,
            self.normal.y,
            self.normal.z,
            self.color.x,
            self.color.y,
            self.color.z,
        ];
        cast(floats)
    }
}

#[cfg(not(target_arch = "spirv"))]
pub const VERTEX_SIZE: u64 = size_of::<Vertex>() as u64;

/// Shader input location the interpolated position is read from.
#[cfg(not(target_arch = "spirv"))]
pub const POSITION_LOCATION: u32 = 0;

#[cfg(not(target_arch = "spirv"))]
pub const POSITION_OFFSET: u32 = core::mem::offset_of!(Vertex, position) as u32;

#[cfg(not(target_arch = "spirv"))]
pub const NORMAL_OFFSET: u32 = core::mem::offset_of!(Vertex, normal) as u32;

#[cfg(not(target_arch = "spirv"))]
pub const COLOR_OFFSET: u32 = core::mem::offset_of!(Vertex, color) as u32;

/// Quantizes a color to 8-bit RGBA, rounding to nearest. NaN channels map to 0.
#[cfg(not(target_arch = "spirv"))]
pub fn to_rgba8(color: Vec4) -> [u8; 4] {
    color
        .to_array()
        .map(|channel| (channel.clamp(0.0, 1.0) * 255.0).round() as u8)
}
