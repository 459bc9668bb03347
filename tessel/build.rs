fn main() -> Result<(), Box<dyn std::error::Error>> {
    #[cfg(feature = "spirv")]
    shaders::build()?;
    Ok(())
}

#[cfg(feature = "spirv")]
mod shaders {
    use glob::glob;
    use spirv_builder::{MetadataPrintout, SpirvBuilder};

    pub fn build() -> Result<(), Box<dyn std::error::Error>> {
        for path in glob("../shaders/*")?
            .filter_map(Result::ok)
            .filter(|path| path.is_dir())
        {
            SpirvBuilder::new(path.as_path().as_os_str(), "spirv-unknown-spv1.5")
                .print_metadata(MetadataPrintout::Full)
                .build()?;
        }
        Ok(())
    }
}
