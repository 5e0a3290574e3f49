//! Configuration loading, parsing, and validation for gauntlet.
//!
//! - Schema definitions in [`schema`]
//! - File discovery, loading and validation in [`loader`]
//!
//! # Example
//!
//! ```
//! use gauntlet::config::load_config;
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! let dir = temp.path().join(".gauntlet");
//! fs::create_dir_all(&dir).unwrap();
//! fs::write(dir.join("config.yml"), "package: mylib").unwrap();
//!
//! let config = load_config(temp.path(), None).unwrap();
//! assert_eq!(config.package, Some("mylib".to_string()));
//! ```

pub mod loader;
pub mod schema;

pub use loader::{
    find_project_root, load_config, load_config_file, parse_config, resolve_package, validate,
    ConfigSource, CONFIG_DIR, CONFIG_FILE,
};
pub use schema::{CheckOverride, GauntletConfig, PrerequisiteConfig};
