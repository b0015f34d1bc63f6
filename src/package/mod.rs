// Copyright (C) 2026 Checkmk GmbH - License: GNU General Public License v2
// This file is part of Checkmk (https://checkmk.com). It is subject to the terms and
// conditions defined in the file COPYING, which is part of this source code package.

//! Read-only views of the package under review: the spec file and the built RPMs.
//!
//! The review host parses the spec and unpacks the RPMs; checks only see the
//! [`SpecView`] and [`RpmView`] traits. [`ReviewPackage`] implements both from a
//! JSON snapshot exported by the host.

mod errors;
mod files;
mod glob;
mod rpm;
mod spec;

use regex::Regex;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::info;

pub use errors::{PackageError, PackageResult};
pub use files::PackageFiles;
pub use glob::Glob;
pub use rpm::{BuiltPackages, RpmPackage};
pub use spec::{Section, Spec, Subpackage};

/// Read-only view of a parsed spec file.
pub trait SpecView {
    fn name(&self) -> &str;

    fn version(&self) -> &str;

    /// Build requirements in declaration order.
    fn build_requires(&self) -> &[String];

    /// Runtime requirements computed for `package`, or for the main package if `None`.
    fn requires(&self, package: Option<&str>) -> &[String];

    /// Text of a named section (e.g. `%build`), either raw or macro-expanded.
    fn section(&self, name: &str, raw: bool) -> Option<&str>;

    /// Spec text split into lines.
    fn lines(&self) -> Vec<&str>;

    /// First spec line matched by `regex`.
    fn find_re(&self, regex: &Regex) -> Option<&str> {
        self.lines().into_iter().find(|line| regex.is_match(line))
    }

    /// Declared package names, main package first.
    fn packages(&self) -> Vec<&str>;

    /// Expanded value of `tag` for `package`.
    fn expand_tag(&self, tag: &str, package: &str) -> Option<&str>;
}

/// Installation scriptlets of one built package.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Scriptlets<'a> {
    pub post: Option<&'a str>,
    pub postun: Option<&'a str>,
}

impl<'a> Scriptlets<'a> {
    pub fn iter(&self) -> impl Iterator<Item = &'a str> {
        [self.post, self.postun].into_iter().flatten()
    }
}

/// Read-only view of the built binary packages.
pub trait RpmView {
    /// First file matching `glob` in `package`, or in any package if `None`.
    fn find(&self, glob: &Glob, package: Option<&str>) -> Option<&Path>;

    /// All files matching `glob` in `package`, or in any package if `None`.
    fn find_all(&self, glob: &Glob, package: Option<&str>) -> Vec<&Path>;

    fn scriptlets(&self, package: &str) -> Option<Scriptlets<'_>>;
}

/// The package under review as exported by the review host.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReviewPackage {
    spec: Spec,
    #[serde(default)]
    rpms: BuiltPackages,
}

impl ReviewPackage {
    #[must_use]
    pub fn new(spec: Spec, rpms: BuiltPackages) -> Self {
        Self { spec, rpms }
    }

    /// Load a review snapshot from a JSON file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or is not a valid snapshot.
    pub fn from_file(path: &Path) -> PackageResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| PackageError::ReadFailed {
            path: path.to_path_buf(),
            source: e,
        })?;
        let package = Self::parse(&content, &path.display().to_string())?;
        info!(
            snapshot = %path.display(),
            package = package.spec.name(),
            files = package.rpms.file_count(),
            "Loaded review snapshot"
        );
        Ok(package)
    }

    /// Load a review snapshot from a JSON string.
    ///
    /// # Errors
    /// Returns an error if the text is not a valid snapshot.
    pub fn from_json(json: &str) -> PackageResult<Self> {
        Self::parse(json, "<json>")
    }

    fn parse(json: &str, origin: &str) -> PackageResult<Self> {
        let package: Self = serde_json::from_str(json).map_err(|e| PackageError::ParseFailed {
            origin: origin.to_string(),
            source: e,
        })?;
        if package.spec.name().trim().is_empty() {
            return Err(PackageError::InvalidSnapshot {
                origin: origin.to_string(),
                reason: "spec name is missing".to_string(),
            });
        }
        Ok(package)
    }

    #[must_use]
    pub fn spec(&self) -> &Spec {
        &self.spec
    }

    #[must_use]
    pub fn rpms(&self) -> &BuiltPackages {
        &self.rpms
    }
}
