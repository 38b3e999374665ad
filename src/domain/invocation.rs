//! Command lines for the Tailwind CSS CLI and the development server.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::domain::Config;

/// Default Tailwind config file contents written on first use.
pub const DEFAULT_TAILWIND_CONFIG: &str = include_str!("../assets/tailwind.config.js");

/// A program, its arguments, and the directory it runs in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    program: OsString,
    args: Vec<String>,
    cwd: PathBuf,
}

impl Invocation {
    pub fn new(program: impl Into<OsString>, args: Vec<String>, cwd: impl Into<PathBuf>) -> Self {
        Self { program: program.into(), args, cwd: cwd.into() }
    }

    /// One-shot minified build of the production stylesheet.
    pub fn tailwind_build(config: &Config) -> Self {
        let mut args = output_args(config);
        args.push("--minify".to_string());
        args.extend(config_args(config));
        args.extend(input_args(config));
        Self::new(config.full_cli_path(), args, config.base_dir())
    }

    /// Continuous rebuild on template or source changes.
    pub fn tailwind_watch(config: &Config) -> Self {
        let mut args = output_args(config);
        args.push("--watch".to_string());
        args.extend(config_args(config));
        args.extend(input_args(config));
        Self::new(config.full_cli_path(), args, config.base_dir())
    }

    pub fn program(&self) -> &OsString {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    pub fn cwd(&self) -> &Path {
        &self.cwd
    }

    /// Program followed by its arguments, as it would be typed in a shell.
    pub fn command_line(&self) -> Vec<String> {
        std::iter::once(self.program.to_string_lossy().into_owned())
            .chain(self.args.iter().cloned())
            .collect()
    }
}

fn output_args(config: &Config) -> Vec<String> {
    vec!["--output".to_string(), config.full_dist_css_path().display().to_string()]
}

fn config_args(config: &Config) -> [String; 2] {
    ["--config".to_string(), config.full_config_file_path().display().to_string()]
}

fn input_args(config: &Config) -> Vec<String> {
    match config.full_src_css_path() {
        Some(src) => vec!["--input".to_string(), src.display().to_string()],
        None => Vec::new(),
    }
}
