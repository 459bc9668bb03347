use crate::{Error, Result};

use ash::vk;
use log::debug;
use std::{ffi::CStr, io::Cursor};
use tessel_gpu::{POSITION_LOCATION, POSITION_OFFSET, VERTEX_SIZE};

#[cfg(feature = "spirv")]
pub const CHECKER_SHADER: &[u8] = include_bytes!(env!("checker.spv"));

pub const ENTRY_POINT: &CStr = c"main_fs";

const SPIRV_MAGIC: u32 = 0x0723_0203;

/// Decodes a SPIR-V module into native-endian words.
pub fn load_words(bytes: &[u8]) -> Result<Vec<u32>> {
    if bytes.is_empty() {
        return Err(Error::Shader("empty SPIR-V module".to_owned()));
    }

    let words = ash::util::read_spv(&mut Cursor::new(bytes))
        .map_err(|e| Error::Shader(format!("failed to decode SPIR-V: {e}")))?;

    // read_spv already swapped a foreign-endian module into native order.
    if words.first() != Some(&SPIRV_MAGIC) {
        return Err(Error::Shader("missing SPIR-V magic number".to_owned()));
    }

    debug!("tessel::pipeline - loaded {} SPIR-V words", words.len());
    Ok(words)
}

pub fn shader_module_info(words: &[u32]) -> vk::ShaderModuleCreateInfo<'_> {
    vk::ShaderModuleCreateInfo::default().code(words)
}

pub fn fragment_stage_info(module: vk::ShaderModule) -> vk::PipelineShaderStageCreateInfo<'static> {
    vk::PipelineShaderStageCreateInfo::default()
        .stage(vk::ShaderStageFlags::FRAGMENT)
        .module(module)
        .name(ENTRY_POINT)
}

pub fn vertex_binding(binding: u32) -> vk::VertexInputBindingDescription {
    vk::VertexInputBindingDescription::default()
        .binding(binding)
        .stride(VERTEX_SIZE as u32)
        .input_rate(vk::VertexInputRate::VERTEX)
}

/// The only vertex attribute the checker stage consumes.
pub fn position_attribute(binding: u32) -> vk::VertexInputAttributeDescription {
    vk::VertexInputAttributeDescription::default()
        .binding(binding)
        .location(POSITION_LOCATION)
        .format(vk::Format::R32G32B32_SFLOAT)
        .offset(POSITION_OFFSET)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn module_bytes(words: &[u32]) -> Vec<u8> {
        words.iter().flat_map(|word| word.to_le_bytes()).collect()
    }

    #[test]
    fn decodes_words() -> Result<()> {
        let bytes = module_bytes(&[SPIRV_MAGIC, 0x0001_0500, 0, 8, 0]);
        let words = load_words(&bytes)?;
        assert_eq!(words, [SPIRV_MAGIC, 0x0001_0500, 0, 8, 0]);
        Ok(())
    }

    #[test]
    fn swaps_big_endian_modules() -> Result<()> {
        let bytes: Vec<u8> = [SPIRV_MAGIC, 0x0001_0500]
            .iter()
            .flat_map(|word| word.to_be_bytes())
            .collect();
        assert_eq!(load_words(&bytes)?, [SPIRV_MAGIC, 0x0001_0500]);
        Ok(())
    }

    #[test]
    fn rejects_malformed_modules() {
        let magic = module_bytes(&[SPIRV_MAGIC]);
        let truncated = &magic[..3];
        let not_spirv = module_bytes(&[0xdead_beef, 1]);
        let empty: &[u8] = &[];

        for bytes in [empty, truncated, &not_spirv[..]] {
            assert!(matches!(load_words(bytes), Err(Error::Shader(_))));
        }
    }

    #[test]
    fn describes_fragment_stage() {
        let words = [SPIRV_MAGIC, 0x0001_0500];
        let module_info = shader_module_info(&words);
        assert_eq!(module_info.code_size, 8);

        let stage = fragment_stage_info(vk::ShaderModule::null());
        assert_eq!(stage.stage, vk::ShaderStageFlags::FRAGMENT);
        assert_eq!(unsafe { CStr::from_ptr(stage.p_name) }, ENTRY_POINT);
    }

    #[test]
    fn describes_position_input() {
        let binding = vertex_binding(0);
        assert_eq!(binding.stride, 36);

        let attribute = position_attribute(0);
        assert_eq!(attribute.location, 0);
        assert_eq!(attribute.offset, 0);
        assert_eq!(attribute.format, vk::Format::R32G32B32_SFLOAT);
    }

    #[cfg(feature = "spirv")]
    #[test]
    fn embedded_shader_loads() -> Result<()> {
        let words = load_words(CHECKER_SHADER)?;
        assert!(words.len() > 5);
        Ok(())
    }
}
