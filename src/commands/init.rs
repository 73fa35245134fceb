//! Init command implementation: write a default config file.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::config::Config;

pub fn run(force: bool, config_path: &Path) -> Result<()> {
    if config_path.exists() && !force {
        anyhow::bail!(
            "Config file already exists: {:?}. Use --force to overwrite.",
            config_path
        );
    }

    if let Some(parent) = config_path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config directory: {:?}", parent))?;
    }

    fs::write(config_path, Config::generate_default_yaml())
        .with_context(|| format!("Failed to write config file: {:?}", config_path))?;

    println!("[OK] Wrote default config to {:?}", config_path);
    println!("     Edit it, then run 'hostsink blocklist' or 'hostsink allowlist'");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_writes_parseable_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("etc").join("config.yaml");

        run(false, &path).unwrap();

        let config = Config::load(&path).unwrap();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_init_refuses_overwrite_without_force() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");

        run(false, &path).unwrap();
        assert!(run(false, &path).is_err());
        assert!(run(true, &path).is_ok());
    }
}
