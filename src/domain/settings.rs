//! Project settings loaded from `tailwind.toml` with environment overrides.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use url::Url;

use crate::domain::AppError;

/// Default settings file name, looked up in the working directory.
pub const SETTINGS_FILE: &str = "tailwind.toml";

pub const ENV_BASE_DIR: &str = "TAILWIND_BASE_DIR";
pub const ENV_CLI_PATH: &str = "TAILWIND_CLI_PATH";
pub const ENV_CLI_VERSION: &str = "TAILWIND_CLI_VERSION";
pub const ENV_SRC_CSS: &str = "TAILWIND_CLI_SRC_CSS";
pub const ENV_DIST_CSS: &str = "TAILWIND_CLI_DIST_CSS";
pub const ENV_CONFIG_FILE: &str = "TAILWIND_CLI_CONFIG_FILE";
pub const ENV_DOWNLOAD_URL: &str = "TAILWIND_CLI_DOWNLOAD_URL";

/// Raw settings document.
///
/// Paths stay as written; they are resolved against [`Settings::base_dir`]
/// when a [`crate::domain::Config`] is derived.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    /// Project root. Relative values are anchored at the settings file.
    pub base_dir: Option<String>,
    /// Static-file directories; the first one receives the compiled stylesheet.
    pub staticfiles_dirs: Option<Vec<String>>,
    /// Directory holding downloaded CLI binaries.
    pub cli_path: Option<String>,
    /// Tailwind CSS release to provision.
    pub cli_version: Option<String>,
    /// Source stylesheet, relative to the first static-files directory.
    pub src_css: Option<String>,
    /// Output stylesheet, relative to the first static-files directory.
    pub dist_css: Option<String>,
    /// Tailwind config file, relative to the project root.
    pub config_file: Option<String>,
    /// Base of the release download URL.
    pub download_url: Option<Url>,
    /// Project-level template directories.
    #[serde(default)]
    pub template_dirs: Vec<String>,
    /// Installed apps by name, each pointing at its app directory.
    #[serde(default)]
    pub apps: BTreeMap<String, String>,
    /// Development server integration.
    #[serde(default)]
    pub server: ServerSettings,

    #[serde(skip)]
    root: PathBuf,
}

/// Development server commands started by `runserver` and `runserver_plus`.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerSettings {
    #[serde(default = "default_server_command")]
    pub command: Vec<String>,
    pub plus_command: Option<Vec<String>>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self { command: default_server_command(), plus_command: None }
    }
}

fn default_server_command() -> Vec<String> {
    vec!["python".to_string(), "manage.py".to_string(), "runserver".to_string()]
}

impl Settings {
    /// Load settings for a project.
    ///
    /// Without an explicit path, a missing `tailwind.toml` yields default
    /// settings rooted at `cwd`. Environment overrides are applied last.
    pub fn load(explicit: Option<&Path>, cwd: &Path) -> Result<Self, AppError> {
        Self::load_with_env(explicit, cwd, |key| std::env::var(key).ok())
    }

    /// Same as [`Settings::load`] with an injectable environment lookup.
    pub fn load_with_env<F>(
        explicit: Option<&Path>,
        cwd: &Path,
        lookup: F,
    ) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let path = match explicit {
            Some(path) => cwd.join(path),
            None => cwd.join(SETTINGS_FILE),
        };

        let mut settings = if path.is_file() {
            let content = fs::read_to_string(&path)?;
            let root = path.parent().map(Path::to_path_buf).unwrap_or_else(|| cwd.to_path_buf());
            Self::parse(&content, &path)?.with_root(root)
        } else if explicit.is_some() {
            return Err(AppError::config_error(format!(
                "settings file not found: {}",
                path.display()
            )));
        } else {
            Self::default().with_root(cwd.to_path_buf())
        };

        settings.apply_env(lookup)?;
        tracing::debug!(
            settings = %path.display(),
            base_dir = %settings.base_dir().display(),
            "loaded settings"
        );
        Ok(settings)
    }

    /// Parse a settings document. `origin` is only used in error messages.
    pub fn parse(content: &str, origin: &Path) -> Result<Self, AppError> {
        toml::from_str(content).map_err(|e| AppError::SettingsParse {
            path: origin.display().to_string(),
            details: e.to_string(),
        })
    }

    /// Anchor relative `base_dir` values at `root`.
    pub fn with_root(mut self, root: PathBuf) -> Self {
        self.root = root;
        self
    }

    /// Apply `TAILWIND_*` overrides. Empty values count as unset.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        if let Some(value) = get(ENV_BASE_DIR) {
            self.base_dir = Some(value);
        }
        if let Some(value) = get(ENV_CLI_PATH) {
            self.cli_path = Some(value);
        }
        if let Some(value) = get(ENV_CLI_VERSION) {
            self.cli_version = Some(value);
        }
        if let Some(value) = get(ENV_SRC_CSS) {
            self.src_css = Some(value);
        }
        if let Some(value) = get(ENV_DIST_CSS) {
            self.dist_css = Some(value);
        }
        if let Some(value) = get(ENV_CONFIG_FILE) {
            self.config_file = Some(value);
        }
        if let Some(value) = get(ENV_DOWNLOAD_URL) {
            let url = Url::parse(&value).map_err(|e| AppError::InvalidSetting {
                key: ENV_DOWNLOAD_URL.to_string(),
                reason: e.to_string(),
            })?;
            self.download_url = Some(url);
        }
        Ok(())
    }

    /// Resolved project root.
    pub fn base_dir(&self) -> PathBuf {
        match &self.base_dir {
            Some(raw) => self.root.join(expand_home(raw)),
            None => self.root.clone(),
        }
    }

    /// Resolve a settings path against the project root.
    pub fn resolve(&self, raw: &str) -> PathBuf {
        self.base_dir().join(expand_home(raw))
    }
}

fn expand_home(raw: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(raw).as_ref())
}
