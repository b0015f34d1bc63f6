// Copyright (C) 2026 Checkmk GmbH - License: GNU General Public License v2
// This file is part of Checkmk (https://checkmk.com). It is subject to the terms and
// conditions defined in the file COPYING, which is part of this source code package.

//! Spec file view as exported by the review host: dependencies, sections, subpackages and raw text.

use serde::Deserialize;
use std::collections::HashMap;

use super::SpecView;

/// A named section of the spec file, e.g. `%build`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Section {
    pub raw: String,
    /// Macro-expanded text, when the host could provide it.
    #[serde(default)]
    pub processed: Option<String>,
}

/// A declared (sub)package with its expanded tag values.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Subpackage {
    pub name: String,
    #[serde(default)]
    pub tags: HashMap<String, String>,
}

impl Subpackage {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tags: HashMap::new(),
        }
    }

    #[must_use]
    pub fn with_tag(mut self, tag: impl Into<String>, value: impl Into<String>) -> Self {
        self.tags.insert(tag.into(), value.into());
        self
    }
}

/// Parsed spec file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Spec {
    name: String,
    version: String,
    build_requires: Vec<String>,
    requires: HashMap<String, Vec<String>>,
    packages: Vec<Subpackage>,
    sections: HashMap<String, Section>,
    text: String,
}

impl Spec {
    /// Create a spec view for package `name` with only its main package declared.
    #[must_use]
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            packages: vec![Subpackage::new(name.clone())],
            name,
            version: version.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_build_requires<I, S>(mut self, build_requires: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.build_requires
            .extend(build_requires.into_iter().map(Into::into));
        self
    }

    /// Add runtime requires computed for `package`.
    #[must_use]
    pub fn with_requires<I, S>(mut self, package: &str, requires: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.requires
            .entry(package.to_string())
            .or_default()
            .extend(requires.into_iter().map(Into::into));
        self
    }

    /// Declare a subpackage, replacing an existing declaration with the same name.
    #[must_use]
    pub fn with_package(mut self, package: Subpackage) -> Self {
        match self.packages.iter_mut().find(|p| p.name == package.name) {
            Some(existing) => *existing = package,
            None => self.packages.push(package),
        }
        self
    }

    #[must_use]
    pub fn with_section(mut self, name: impl Into<String>, raw: impl Into<String>) -> Self {
        self.sections.insert(
            name.into(),
            Section {
                raw: raw.into(),
                processed: None,
            },
        );
        self
    }

    /// Set the full spec text searched by [`SpecView::find_re`].
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    fn package(&self, name: &str) -> Option<&Subpackage> {
        self.packages.iter().find(|p| p.name == name)
    }
}

impl SpecView for Spec {
    fn name(&self) -> &str {
        &self.name
    }

    fn version(&self) -> &str {
        &self.version
    }

    fn build_requires(&self) -> &[String] {
        &self.build_requires
    }

    fn requires(&self, package: Option<&str>) -> &[String] {
        let package = package.unwrap_or(&self.name);
        self.requires
            .get(package)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    fn section(&self, name: &str, raw: bool) -> Option<&str> {
        let section = self.sections.get(name)?;
        if raw {
            return Some(&section.raw);
        }
        Some(section.processed.as_deref().unwrap_or(&section.raw))
    }

    fn lines(&self) -> Vec<&str> {
        self.text.lines().collect()
    }

    fn packages(&self) -> Vec<&str> {
        // The main package is always declared, even if the host only listed subpackages.
        if self.package(&self.name).is_none() {
            return std::iter::once(self.name.as_str())
                .chain(self.packages.iter().map(|p| p.name.as_str()))
                .collect();
        }
        self.packages.iter().map(|p| p.name.as_str()).collect()
    }

    fn expand_tag(&self, tag: &str, package: &str) -> Option<&str> {
        self.package(package)?
            .tags
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(tag))
            .map(|(_, value)| value.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use regex::Regex;

    fn create_test_spec() -> Spec {
        Spec::new("foo", "1.2")
            .with_build_requires(["maven-local", "mvn(junit:junit)"])
            .with_requires("foo", ["java-headless", "javapackages-tools"])
            .with_requires("foo-javadoc", ["jpackage-utils"])
            .with_package(Subpackage::new("foo").with_tag("arch", "noarch"))
            .with_package(Subpackage::new("foo-javadoc").with_tag("Arch", "noarch"))
            .with_section("%build", "# no tests\n%mvn_build -f\n")
            .with_text("Name: foo\n# %mvn_install\n%mvn_build -f\n")
    }

    #[test]
    fn test_requires_defaults_to_main_package() {
        let spec = create_test_spec();
        assert_eq!(spec.requires(None), ["java-headless", "javapackages-tools"]);
        assert_eq!(spec.requires(Some("foo-javadoc")), ["jpackage-utils"]);
        assert!(spec.requires(Some("foo-unknown")).is_empty());
    }

    #[test]
    fn test_packages_keep_declaration_order() {
        let spec = create_test_spec();
        assert_eq!(spec.packages(), ["foo", "foo-javadoc"]);
    }

    #[test]
    fn test_packages_include_main_package() {
        let spec: Spec = serde_json::from_str(
            r#"{"name": "bar", "version": "1", "packages": [{"name": "bar-javadoc"}]}"#,
        )
        .unwrap();
        assert_eq!(spec.packages(), ["bar", "bar-javadoc"]);
    }

    #[test]
    fn test_expand_tag_is_case_insensitive() {
        let spec = create_test_spec();
        assert_eq!(spec.expand_tag("arch", "foo-javadoc"), Some("noarch"));
        assert_eq!(spec.expand_tag("ARCH", "foo"), Some("noarch"));
        assert_eq!(spec.expand_tag("arch", "foo-unknown"), None);
    }

    #[test]
    fn test_section_falls_back_to_raw() {
        let spec = create_test_spec();
        assert_eq!(spec.section("%build", false), spec.section("%build", true));
        assert_eq!(spec.section("%install", true), None);
    }

    #[test]
    fn test_find_re_returns_first_matching_line() {
        let spec = create_test_spec();
        let regex = Regex::new("mvn_").unwrap();
        assert_eq!(spec.find_re(&regex), Some("# %mvn_install"));
        let regex = Regex::new("^%mvn_").unwrap();
        assert_eq!(spec.find_re(&regex), Some("%mvn_build -f"));
        let regex = Regex::new("ant").unwrap();
        assert_eq!(spec.find_re(&regex), None);
    }
}
