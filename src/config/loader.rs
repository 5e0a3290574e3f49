//! Configuration file discovery and loading.
//!
//! Configuration is optional. Without a file every check uses its default
//! command and the Java prerequisite is probed.

use crate::config::schema::GauntletConfig;
use crate::error::{GauntletError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Directory holding gauntlet's project files.
pub const CONFIG_DIR: &str = ".gauntlet";

/// Config file name inside [`CONFIG_DIR`].
pub const CONFIG_FILE: &str = "config.yml";

/// Where configuration comes from for a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Given with `--config`; must exist.
    Explicit(PathBuf),
    /// Found at `.gauntlet/config.yml`.
    Discovered(PathBuf),
    /// No file; built-in defaults.
    Defaults,
}

impl ConfigSource {
    /// Pick the source for a project, preferring an explicit path.
    pub fn locate(project_root: &Path, explicit: Option<&Path>) -> Self {
        if let Some(path) = explicit {
            return Self::Explicit(path.to_path_buf());
        }

        let path = project_root.join(CONFIG_DIR).join(CONFIG_FILE);
        if path.exists() {
            Self::Discovered(path)
        } else {
            Self::Defaults
        }
    }
}

/// Find the project root by walking up from `start`.
///
/// Looks for:
/// 1. `.gauntlet` directory (primary indicator)
/// 2. `.git` directory (fallback)
pub fn find_project_root(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();

    loop {
        if current.join(CONFIG_DIR).is_dir() {
            return Some(current);
        }

        if current.join(".git").exists() {
            return Some(current);
        }

        if !current.pop() {
            return None;
        }
    }
}

/// Parse configuration from a YAML string.
pub fn parse_config(content: &str, path: &Path) -> Result<GauntletConfig> {
    // An empty file is a valid, empty config.
    if content.trim().is_empty() {
        return Ok(GauntletConfig::default());
    }

    serde_yaml::from_str(content).map_err(|e| GauntletError::ConfigParseError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load a single config file.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config_file(path: &Path) -> Result<GauntletConfig> {
    if !path.exists() {
        return Err(GauntletError::ConfigNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = fs::read_to_string(path)?;
    parse_config(&content, path)
}

/// Load and validate the configuration for a project.
pub fn load_config(project_root: &Path, explicit: Option<&Path>) -> Result<GauntletConfig> {
    let config = match ConfigSource::locate(project_root, explicit) {
        ConfigSource::Explicit(path) | ConfigSource::Discovered(path) => {
            tracing::debug!("Loading config from {}", path.display());
            load_config_file(&path)?
        }
        ConfigSource::Defaults => {
            tracing::debug!("No config file found; using defaults");
            GauntletConfig::default()
        }
    };

    validate(&config)?;
    Ok(config)
}

/// Validate a parsed configuration.
pub fn validate(config: &GauntletConfig) -> Result<()> {
    if let Some(package) = &config.package {
        if package.trim().is_empty() {
            return Err(invalid("package must not be empty"));
        }
    }

    let prerequisite = &config.prerequisite;
    if prerequisite.enabled {
        if matches!(&prerequisite.program, Some(p) if p.trim().is_empty()) {
            return Err(invalid("prerequisite.program must not be empty"));
        }
        if matches!(&prerequisite.marker, Some(m) if m.is_empty()) {
            return Err(invalid("prerequisite.marker must not be empty"));
        }
    }

    for (check, override_) in &config.checks {
        if matches!(&override_.command, Some(c) if c.trim().is_empty()) {
            return Err(invalid(&format!("checks.{}.command must not be empty", check)));
        }
    }

    Ok(())
}

fn invalid(message: &str) -> GauntletError {
    GauntletError::ConfigValidationError {
        message: message.to_string(),
    }
}

/// Resolve the package substituted into check commands.
///
/// Precedence: command line (or `GAUNTLET_PACKAGE`), then config, then the
/// project directory's name.
pub fn resolve_package(
    cli_package: Option<&str>,
    config: &GauntletConfig,
    project_root: &Path,
) -> String {
    cli_package
        .map(str::to_string)
        .or_else(|| config.package.clone())
        .or_else(|| {
            project_root
                .file_name()
                .map(|name| name.to_string_lossy().to_string())
        })
        .unwrap_or_else(|| ".".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::CheckName;
    use tempfile::TempDir;

    fn write_config(root: &Path, content: &str) -> PathBuf {
        let dir = root.join(CONFIG_DIR);
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join(CONFIG_FILE);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn missing_file_uses_defaults() {
        let temp = TempDir::new().unwrap();
        let config = load_config(temp.path(), None).unwrap();
        assert_eq!(config, GauntletConfig::default());
    }

    #[test]
    fn discovers_project_config() {
        let temp = TempDir::new().unwrap();
        write_config(temp.path(), "package: mylib\n");
        let config = load_config(temp.path(), None).unwrap();
        assert_eq!(config.package.as_deref(), Some("mylib"));
    }

    #[test]
    fn explicit_path_must_exist() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("nope.yml");
        let err = load_config(temp.path(), Some(&missing)).unwrap_err();
        assert!(matches!(err, GauntletError::ConfigNotFound { .. }));
    }

    #[test]
    fn explicit_path_wins_over_discovered() {
        let temp = TempDir::new().unwrap();
        write_config(temp.path(), "package: discovered\n");
        let explicit = temp.path().join("other.yml");
        fs::write(&explicit, "package: explicit\n").unwrap();

        let config = load_config(temp.path(), Some(&explicit)).unwrap();
        assert_eq!(config.package.as_deref(), Some("explicit"));
    }

    #[test]
    fn empty_file_is_default_config() {
        let temp = TempDir::new().unwrap();
        write_config(temp.path(), "   \n");
        let config = load_config(temp.path(), None).unwrap();
        assert_eq!(config, GauntletConfig::default());
    }

    #[test]
    fn invalid_yaml_reports_path() {
        let temp = TempDir::new().unwrap();
        let path = write_config(temp.path(), "checks: [oops\n");
        let err = load_config(temp.path(), None).unwrap_err();
        match err {
            GauntletError::ConfigParseError { path: p, .. } => assert_eq!(p, path),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn validate_rejects_empty_command() {
        let mut config = GauntletConfig::default();
        config.checks.insert(
            CheckName::Mypy,
            crate::config::schema::CheckOverride {
                command: Some("  ".to_string()),
            },
        );
        let err = validate(&config).unwrap_err();
        assert!(err.to_string().contains("checks.mypy.command"));
    }

    #[test]
    fn validate_rejects_empty_package() {
        let config = GauntletConfig {
            package: Some(String::new()),
            ..Default::default()
        };
        assert!(validate(&config).is_err());
    }

    #[test]
    fn validate_ignores_disabled_prerequisite() {
        let mut config = GauntletConfig::default();
        config.prerequisite.enabled = false;
        config.prerequisite.program = Some(String::new());
        assert!(validate(&config).is_ok());
    }

    #[test]
    fn find_project_root_walks_up_to_marker() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join(CONFIG_DIR)).unwrap();
        let nested = temp.path().join("a").join("b");
        fs::create_dir_all(&nested).unwrap();

        assert_eq!(find_project_root(&nested), Some(temp.path().to_path_buf()));
    }

    #[test]
    fn find_project_root_falls_back_to_git() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join(".git")).unwrap();
        let nested = temp.path().join("src");
        fs::create_dir_all(&nested).unwrap();

        assert_eq!(find_project_root(&nested), Some(temp.path().to_path_buf()));
    }

    #[test]
    fn package_precedence() {
        let root = Path::new("/work/allennlp");
        let config = GauntletConfig {
            package: Some("from_config".to_string()),
            ..Default::default()
        };

        assert_eq!(resolve_package(Some("cli"), &config, root), "cli");
        assert_eq!(resolve_package(None, &config, root), "from_config");
        assert_eq!(
            resolve_package(None, &GauntletConfig::default(), root),
            "allennlp"
        );
    }
}
