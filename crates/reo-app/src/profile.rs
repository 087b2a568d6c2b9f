use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use reo_config::Config;
use serde::{Deserialize, Serialize};

const MAIN_PROFILE: &str = "main";

/// Represents a user profile
#[derive(Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub value: Config,
}

/// Profiles and custom definitions under one root folder
#[derive(Debug, Clone)]
pub struct ProfileStore {
    root: PathBuf,
}

impl ProfileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// `<user config dir>/reo`
    pub fn default_root() -> anyhow::Result<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join("reo"))
            .context("could not determine the user config directory")
    }

    fn profiles_dir(&self) -> PathBuf {
        self.root.join("profiles")
    }

    /// Folder holding `<term>.json` custom definitions
    pub fn cdef_dir(&self) -> PathBuf {
        self.root.join("cdef")
    }

    fn profile_path(&self, name: &str) -> PathBuf {
        self.profiles_dir().join(format!("{name}.json"))
    }

    /// Create the folders and the main profile if missing
    pub fn init(&self) -> anyhow::Result<()> {
        fs::create_dir_all(self.profiles_dir())
            .with_context(|| format!("creating {}", self.profiles_dir().display()))?;
        fs::create_dir_all(self.cdef_dir())
            .with_context(|| format!("creating {}", self.cdef_dir().display()))?;

        if !self.profile_path(MAIN_PROFILE).exists() {
            self.save(MAIN_PROFILE, &Config::default())?;
            tracing::info!("Created main profile in {}", self.root.display());
        }

        Ok(())
    }

    fn read(&self, path: &Path) -> anyhow::Result<Config> {
        let data =
            fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
        let profile: Profile = serde_json::from_str(&data)
            .with_context(|| format!("parsing profile {}", path.display()))?;
        Ok(profile.value)
    }

    /// Load a profile by name, falling back to main and then to defaults
    pub fn load(&self, name: &str) -> anyhow::Result<Config> {
        let profile_file = self.profile_path(name);
        if profile_file.exists() {
            return self.read(&profile_file);
        }

        tracing::warn!("Profile {name} not found, falling back to main profile or defaults");
        let main_file = self.profile_path(MAIN_PROFILE);
        if main_file.exists() {
            self.read(&main_file)
        } else {
            Ok(Config::default())
        }
    }

    pub fn save(&self, name: &str, config: &Config) -> anyhow::Result<PathBuf> {
        fs::create_dir_all(self.profiles_dir())?;
        let profile = Profile {
            name: name.into(),
            value: config.clone(),
        };
        let file = self.profile_path(name);
        fs::write(&file, serde_json::to_string_pretty(&profile)?)
            .with_context(|| format!("writing {}", file.display()))?;
        Ok(file)
    }
}
