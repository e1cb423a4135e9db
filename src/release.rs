//! Version bump and publish helpers
//!
//! Backs the `bitnet-release` binary: semantic-version handling, in-place
//! rewriting of the manifest version, and the cargo package/publish steps.

use regex::Regex;
use std::fmt;
use std::path::Path;
use std::process::Command;
use std::str::FromStr;
use tracing::info;

use crate::{Error, Result};

/// Which part of the version to increase
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum BumpPart {
    /// Breaking change; zeroes minor and patch
    Major,
    /// New functionality; zeroes patch
    Minor,
    /// Bug fix
    Patch,
}

impl fmt::Display for BumpPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            BumpPart::Major => "major",
            BumpPart::Minor => "minor",
            BumpPart::Patch => "patch",
        };
        f.write_str(s)
    }
}

/// Semantic version of the shape `major.minor.patch`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

impl Version {
    /// The version with the given part increased
    pub fn bumped(self, part: BumpPart) -> Self {
        match part {
            BumpPart::Major => Self {
                major: self.major + 1,
                minor: 0,
                patch: 0,
            },
            BumpPart::Minor => Self {
                major: self.major,
                minor: self.minor + 1,
                patch: 0,
            },
            BumpPart::Patch => Self {
                major: self.major,
                minor: self.minor,
                patch: self.patch + 1,
            },
        }
    }
}

impl FromStr for Version {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut parts = s.split('.');

        let mut next_part = |name: &str| -> Result<u64> {
            parts
                .next()
                .ok_or_else(|| Error::invalid_version(format!("{}: missing {} part", s, name)))?
                .parse()
                .map_err(|_| Error::invalid_version(format!("{}: bad {} part", s, name)))
        };

        let version = Version {
            major: next_part("major")?,
            minor: next_part("minor")?,
            patch: next_part("patch")?,
        };

        if parts.next().is_some() {
            return Err(Error::invalid_version(format!("{}: too many parts", s)));
        }

        Ok(version)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// Matches the line-anchored `version = "…"` key of a manifest.
///
/// Dependency tables spell their versions inline (`serde = { version = … }`),
/// so the first line-anchored match is the package version.
fn version_line() -> Regex {
    Regex::new(r#"(?m)^(version\s*=\s*)"([^"]+)""#).expect("version pattern is valid")
}

/// Read the package version from a manifest
pub fn manifest_version(path: &Path) -> Result<Version> {
    let content = std::fs::read_to_string(path)?;

    let captures = version_line().captures(&content).ok_or_else(|| {
        Error::release(format!("No version key found in {}", path.display()))
    })?;

    captures[2].parse()
}

/// Rewrite the package version in a manifest, leaving everything else intact
pub fn set_manifest_version(path: &Path, version: &Version) -> Result<()> {
    let content = std::fs::read_to_string(path)?;

    let updated = version_line()
        .replace(&content, format!("${{1}}\"{}\"", version))
        .into_owned();

    std::fs::write(path, updated)?;
    info!("Manifest version set to {}", version);
    Ok(())
}

/// Remove leftover package artifacts from a previous release
pub fn clean_artifacts(target_dir: &Path) -> Result<()> {
    let package_dir = target_dir.join("package");

    if package_dir.exists() {
        std::fs::remove_dir_all(&package_dir)?;
        info!("Removed {}", package_dir.display());
    }

    Ok(())
}

/// Run a cargo subcommand, capturing its output
fn run_cargo(args: &[&str]) -> Result<String> {
    info!("Running cargo {}", args.join(" "));

    let output = Command::new("cargo")
        .args(args)
        .output()
        .map_err(|e| Error::release(format!("Failed to spawn cargo: {}", e)))?;

    let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
    let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

    if !output.status.success() {
        return Err(Error::release(format!(
            "cargo {} failed: {}",
            args.join(" "),
            if stderr.is_empty() { stdout } else { stderr }
        )));
    }

    Ok(stdout)
}

/// Build and verify the distributable package
pub fn cargo_package() -> Result<String> {
    run_cargo(&["package", "--allow-dirty"])
}

/// Upload the package to the registry
pub fn cargo_publish(dry_run: bool) -> Result<String> {
    if dry_run {
        run_cargo(&["publish", "--dry-run", "--allow-dirty"])
    } else {
        run_cargo(&["publish"])
    }
}
