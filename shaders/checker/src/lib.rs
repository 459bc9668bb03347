#![cfg_attr(target_arch = "spirv", no_std)]

use spirv_std::{
    glam::{Vec3, Vec4},
    spirv,
};

#[spirv(fragment)]
pub fn main_fs(in_position: Vec3, output: &mut Vec4) {
    *output = tessel_gpu::evaluate(in_position);
}
