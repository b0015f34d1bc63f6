// Copyright (C) 2026 Checkmk GmbH - License: GNU General Public License v2
// This file is part of Checkmk (https://checkmk.com). It is subject to the terms and
// conditions defined in the file COPYING, which is part of this source code package.

//! Built RPM view: per-subpackage file lists and installation scriptlets.

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

use super::files::PackageFiles;
use super::glob::Glob;
use super::{RpmView, Scriptlets};

/// One built binary RPM.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RpmPackage {
    files: PackageFiles,
    post: Option<String>,
    postun: Option<String>,
}

impl RpmPackage {
    #[must_use]
    pub fn new(files: PackageFiles) -> Self {
        Self {
            files,
            ..Self::default()
        }
    }

    /// Set the `%post` scriptlet.
    #[must_use]
    pub fn with_post(mut self, script: impl Into<String>) -> Self {
        self.post = Some(script.into());
        self
    }

    /// Set the `%postun` scriptlet.
    #[must_use]
    pub fn with_postun(mut self, script: impl Into<String>) -> Self {
        self.postun = Some(script.into());
        self
    }
}

/// All binary RPMs built from the spec, keyed by package name.
// BTreeMap keeps searches across packages deterministic.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct BuiltPackages {
    packages: BTreeMap<String, RpmPackage>,
}

impl BuiltPackages {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_package(mut self, name: impl Into<String>, package: RpmPackage) -> Self {
        self.packages.insert(name.into(), package);
        self
    }

    /// Total number of files across all packages.
    #[must_use]
    pub fn file_count(&self) -> usize {
        self.packages.values().map(|p| p.files.len()).sum()
    }

    fn selected(&self, package: Option<&str>) -> Vec<&RpmPackage> {
        match package {
            Some(name) => self.packages.get(name).into_iter().collect(),
            None => self.packages.values().collect(),
        }
    }
}

impl RpmView for BuiltPackages {
    fn find(&self, glob: &Glob, package: Option<&str>) -> Option<&Path> {
        self.selected(package)
            .into_iter()
            .find_map(|rpm| rpm.files.first_match(glob))
    }

    fn find_all(&self, glob: &Glob, package: Option<&str>) -> Vec<&Path> {
        self.selected(package)
            .into_iter()
            .flat_map(|rpm| rpm.files.matching(glob))
            .collect()
    }

    fn scriptlets(&self, package: &str) -> Option<Scriptlets<'_>> {
        self.packages.get(package).map(|rpm| Scriptlets {
            post: rpm.post.as_deref(),
            postun: rpm.postun.as_deref(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_packages() -> BuiltPackages {
        BuiltPackages::new()
            .with_package(
                "foo",
                RpmPackage::new(PackageFiles::new([
                    "/usr/share/java/foo.jar",
                    "/usr/share/maven-poms/foo.pom",
                ]))
                .with_post("/usr/bin/update-alternatives --install"),
            )
            .with_package(
                "foo-javadoc",
                RpmPackage::new(PackageFiles::new([
                    "/usr/share/javadoc/foo/index.html",
                    "/usr/share/javadoc/foo/allclasses.html",
                ])),
            )
    }

    #[test]
    fn test_find_in_single_package() {
        let rpms = create_test_packages();
        let html = Glob::new("*.html").unwrap();
        assert_eq!(
            rpms.find(&html, Some("foo-javadoc")),
            Some(Path::new("/usr/share/javadoc/foo/index.html"))
        );
        assert_eq!(rpms.find(&html, Some("foo")), None);
        assert_eq!(rpms.find(&html, Some("missing")), None);
    }

    #[test]
    fn test_find_across_packages() {
        let rpms = create_test_packages();
        let pom = Glob::new("*.pom").unwrap();
        assert_eq!(
            rpms.find(&pom, None),
            Some(Path::new("/usr/share/maven-poms/foo.pom"))
        );
        let all = Glob::new("/usr/share/*").unwrap();
        assert_eq!(rpms.find_all(&all, None).len(), 4);
        assert_eq!(rpms.file_count(), 4);
    }

    #[test]
    fn test_scriptlets() {
        let rpms = create_test_packages();
        let foo = rpms.scriptlets("foo").unwrap();
        assert!(foo.post.is_some_and(|s| s.contains("update-alternatives")));
        assert_eq!(foo.postun, None);
        assert!(rpms.scriptlets("missing").is_none());
    }
}
