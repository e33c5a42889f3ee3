use std::{fs, path::Path};

use crate::{GridWorld, GridWorldConfig, TabularMdp, error::Result};

/// Load a grid world config from YAML on disk.
pub fn load_yaml(path: impl AsRef<Path>) -> Result<GridWorldConfig> {
    GridWorldConfig::from_yaml_path(path)
}

/// Load a config from a YAML file and build the world it describes.
pub fn build_yaml(path: impl AsRef<Path>) -> Result<GridWorld> {
    let config = load_yaml(path)?;
    GridWorld::new(config)
}

/// Serialize and write a config to YAML.
pub fn save_yaml(path: impl AsRef<Path>, config: &GridWorldConfig) -> Result<()> {
    let yaml = serde_yaml::to_string(config)?;
    fs::write(path, yaml)?;
    Ok(())
}

/// Serialize and write a tabular export to YAML.
pub fn save_tabular_yaml(path: impl AsRef<Path>, table: &TabularMdp) -> Result<()> {
    let yaml = serde_yaml::to_string(table)?;
    fs::write(path, yaml)?;
    Ok(())
}
