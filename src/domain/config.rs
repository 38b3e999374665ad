//! Resolved project configuration derived from [`Settings`].

use std::path::{Path, PathBuf};

use url::Url;

use crate::domain::{AppError, Platform, Settings};

pub const DEFAULT_CLI_VERSION: &str = "3.3.2";
pub const DEFAULT_DIST_CSS: &str = "css/tailwind.css";
pub const DEFAULT_CONFIG_FILE: &str = "tailwind.config.js";
pub const DEFAULT_CLI_DIR: &str = ".tailwind-cli";
pub const DEFAULT_DOWNLOAD_URL: &str =
    "https://github.com/tailwindlabs/tailwindcss/releases/download";

/// Immutable view of every path the commands touch.
///
/// Built fresh for each command invocation; two configs built from equal
/// settings on the same platform are equal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    base_dir: PathBuf,
    static_dir: PathBuf,
    version: String,
    src_css: Option<String>,
    dist_css: String,
    config_file: String,
    platform: Platform,
    download_base: Url,
    cli_filename: String,
    full_cli_path: PathBuf,
    full_config_file_path: PathBuf,
}

impl Config {
    /// Derive the configuration for the running platform.
    pub fn from_settings(settings: &Settings) -> Result<Self, AppError> {
        Self::for_platform(settings, Platform::current())
    }

    /// Derive the configuration for an explicit platform.
    pub fn for_platform(settings: &Settings, platform: Platform) -> Result<Self, AppError> {
        let static_dir = match settings.staticfiles_dirs.as_deref() {
            None => {
                return Err(AppError::config_error(
                    "staticfiles_dirs is not set; add at least one static-files directory",
                ));
            }
            Some([]) => {
                return Err(AppError::config_error(
                    "staticfiles_dirs is empty; add at least one static-files directory",
                ));
            }
            Some([first, ..]) => settings.resolve(first),
        };

        let base_dir = settings.base_dir();
        let cli_path = settings
            .cli_path
            .as_deref()
            .map(|raw| settings.resolve(raw))
            .unwrap_or_else(|| base_dir.join(DEFAULT_CLI_DIR));

        let version = normalize_version(settings.cli_version.as_deref())?;
        let src_css = settings.src_css.clone().filter(|value| !value.trim().is_empty());
        let dist_css = settings.dist_css.clone().unwrap_or_else(|| DEFAULT_DIST_CSS.to_string());
        let config_file =
            settings.config_file.clone().unwrap_or_else(|| DEFAULT_CONFIG_FILE.to_string());
        let download_base = match &settings.download_url {
            Some(url) => url.clone(),
            None => Url::parse(DEFAULT_DOWNLOAD_URL).map_err(|e| AppError::InvalidSetting {
                key: "download_url".to_string(),
                reason: e.to_string(),
            })?,
        };

        let cli_filename =
            format!("tailwindcss-{}-{}{}", platform.tag(), version, platform.extension());
        let full_cli_path = cli_path.join(&cli_filename);
        let full_config_file_path = base_dir.join(&config_file);

        Ok(Self {
            base_dir,
            static_dir,
            version,
            src_css,
            dist_css,
            config_file,
            platform,
            download_base,
            cli_filename,
            full_cli_path,
            full_config_file_path,
        })
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn config_file(&self) -> &str {
        &self.config_file
    }

    /// File name of the versioned CLI binary.
    pub fn cli_filename(&self) -> &str {
        &self.cli_filename
    }

    pub fn full_cli_path(&self) -> &Path {
        &self.full_cli_path
    }

    pub fn full_config_file_path(&self) -> &Path {
        &self.full_config_file_path
    }

    /// Compiled stylesheet inside the first static-files directory.
    pub fn full_dist_css_path(&self) -> PathBuf {
        self.static_dir.join(&self.dist_css)
    }

    /// Source stylesheet, present only when `src_css` is configured.
    pub fn full_src_css_path(&self) -> Option<PathBuf> {
        self.src_css.as_ref().map(|src| self.static_dir.join(src))
    }

    /// Release asset URL for this version and platform.
    pub fn download_url(&self) -> Result<Url, AppError> {
        let base = self.download_base.as_str().trim_end_matches('/');
        let raw = format!(
            "{}/v{}/tailwindcss-{}{}",
            base,
            self.version,
            self.platform.tag(),
            self.platform.extension()
        );
        Url::parse(&raw).map_err(|e| AppError::InvalidSetting {
            key: "download_url".to_string(),
            reason: e.to_string(),
        })
    }
}

fn normalize_version(raw: Option<&str>) -> Result<String, AppError> {
    let value = raw.unwrap_or(DEFAULT_CLI_VERSION).trim();
    let value = value.strip_prefix('v').unwrap_or(value);
    if value.is_empty() || value.contains('/') || value.contains('\\') {
        return Err(AppError::InvalidSetting {
            key: "cli_version".to_string(),
            reason: format!("'{}' is not a release version", raw.unwrap_or_default()),
        });
    }
    Ok(value.to_string())
}
