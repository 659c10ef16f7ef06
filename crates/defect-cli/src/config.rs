use crate::error::{CliError, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Optional TOML configuration carrying run defaults. CLI flags always win
/// over file values, which win over built-in defaults.
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    #[serde(default)]
    pub defect: DefectSection,
    #[serde(default)]
    pub io: IoSection,
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct DefectSection {
    /// Default target coordinate when `--target` is not given.
    pub target: Option<[f64; 3]>,
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct IoSection {
    /// Default input file when `--file` is not given.
    pub input: Option<PathBuf>,
    /// Directory the default-named output file is written into.
    pub output_dir: Option<PathBuf>,
}

impl FileConfig {
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid TOML for
    /// this schema.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: FileConfig = toml::from_str(&content)
            .map_err(|e| CliError::Config(format!("{}: {}", path.display(), e)))?;
        debug!(path = %path.display(), "Loaded configuration file");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_full_config() {
        let config: FileConfig = toml::from_str(
            r#"
            [defect]
            target = [0.25, 0.25, 0.25]

            [io]
            input = "CONTCAR"
            output-dir = "defects"
            "#,
        )
        .unwrap();

        assert_eq!(config.defect.target, Some([0.25, 0.25, 0.25]));
        assert_eq!(config.io.input, Some(PathBuf::from("CONTCAR")));
        assert_eq!(config.io.output_dir, Some(PathBuf::from("defects")));
    }

    #[test]
    fn all_sections_are_optional() {
        let config: FileConfig = toml::from_str("").unwrap();
        assert_eq!(config, FileConfig::default());

        let config: FileConfig = toml::from_str("[defect]\n").unwrap();
        assert_eq!(config.defect.target, None);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(toml::from_str::<FileConfig>("[defect]\nradius = 1.0\n").is_err());
        assert!(toml::from_str::<FileConfig>("[simulation]\n").is_err());
    }

    #[test]
    fn load_reports_missing_file_and_bad_toml() {
        let dir = tempfile::tempdir().unwrap();

        let missing = dir.path().join("absent.toml");
        assert!(matches!(
            FileConfig::load(&missing),
            Err(CliError::Io(_))
        ));

        let bad = dir.path().join("bad.toml");
        std::fs::write(&bad, "defect = nonsense").unwrap();
        assert!(matches!(
            FileConfig::load(&bad),
            Err(CliError::Config(_))
        ));
    }
}
