//! Host platform naming as used by Tailwind CSS release assets.

use std::env;
use std::fmt;

/// Operating system and CPU architecture of a Tailwind CSS release asset.
///
/// Release assets are named `tailwindcss-{os}-{arch}[.exe]`, so Rust's
/// `std::env::consts` values are mapped onto Tailwind's vocabulary
/// (`x86_64` becomes `x64`, `aarch64` becomes `arm64`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Platform {
    os: String,
    arch: String,
}

impl Platform {
    /// Platform of the running process.
    pub fn current() -> Self {
        Self::from_parts(env::consts::OS, env::consts::ARCH)
    }

    /// Normalize raw OS/architecture identifiers.
    pub fn from_parts(os: &str, arch: &str) -> Self {
        let os = match os.to_ascii_lowercase().as_str() {
            "darwin" | "macos" => "macos".to_string(),
            other => other.to_string(),
        };
        let arch = match arch.to_ascii_lowercase().as_str() {
            "x86_64" | "amd64" => "x64".to_string(),
            "aarch64" | "arm64" => "arm64".to_string(),
            "arm" | "armv7" | "armv7l" => "armv7".to_string(),
            other => other.to_string(),
        };
        Self { os, arch }
    }

    pub fn os(&self) -> &str {
        &self.os
    }

    pub fn arch(&self) -> &str {
        &self.arch
    }

    /// Executable suffix for the platform.
    pub fn extension(&self) -> &'static str {
        if self.os == "windows" { ".exe" } else { "" }
    }

    /// `{os}-{arch}` tag used in asset and binary names.
    pub fn tag(&self) -> String {
        format!("{}-{}", self.os, self.arch)
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}
