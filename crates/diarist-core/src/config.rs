use crate::error::{JournalError, JournalResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// File name looked up in the vault root when no config path is given.
pub const CONFIG_FILE_NAME: &str = ".diarist.yml";

/// Top-level configuration for Diarist
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiaristConfig {
    /// Journal directory, relative to the vault root unless absolute
    #[serde(default = "default_journals_folder")]
    pub journals_folder: PathBuf,
    #[serde(default)]
    pub unfold: UnfoldConfig,
}

/// Month -> day settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UnfoldConfig {
    /// Keep `yyyy-mm.md` after it has been split into daily files
    #[serde(default)]
    pub keep_month_files: bool,
}

fn default_journals_folder() -> PathBuf {
    PathBuf::from("journals")
}

impl Default for DiaristConfig {
    fn default() -> Self {
        Self {
            journals_folder: default_journals_folder(),
            unfold: UnfoldConfig::default(),
        }
    }
}

impl DiaristConfig {
    /// Load config from YAML text
    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(content)
    }

    /// Serialize to YAML
    pub fn to_yaml(&self) -> Result<String, serde_yaml::Error> {
        serde_yaml::to_string(self)
    }

    /// Load from an explicit file, or from `<vault>/.diarist.yml` when it
    /// exists, or fall back to defaults.
    pub fn load(vault_root: &Path, explicit: Option<&Path>) -> JournalResult<Self> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => {
                let candidate = vault_root.join(CONFIG_FILE_NAME);
                if !candidate.is_file() {
                    log::debug!("no {} in {}, using defaults", CONFIG_FILE_NAME, vault_root.display());
                    return Ok(Self::default());
                }
                candidate
            }
        };

        let content = std::fs::read_to_string(&path)
            .map_err(|e| JournalError::Config(format!("{}: {e}", path.display())))?;
        let config = Self::from_yaml(&content)
            .map_err(|e| JournalError::Config(format!("{}: {e}", path.display())))?;
        log::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Resolve the journal directory against the vault root.
    pub fn journals_dir(&self, vault_root: &Path) -> PathBuf {
        vault_root.join(&self.journals_folder)
    }
}
