// Copyright (C) 2026 Checkmk GmbH - License: GNU General Public License v2
// This file is part of Checkmk (https://checkmk.com). It is subject to the terms and
// conditions defined in the file COPYING, which is part of this source code package.

//! File lists of built packages, normalized on load.

use path_clean::PathClean;
use serde::{Deserialize, Deserializer};
use std::path::{Path, PathBuf};

use super::glob::Glob;

/// Files shipped by one built package, in the order the host listed them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackageFiles(Vec<PathBuf>);

impl PackageFiles {
    /// Create a file list, lexically normalizing every path.
    #[must_use]
    pub fn new<I, P>(paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        Self(
            paths
                .into_iter()
                .map(|path| normalize(path.as_ref()))
                .collect(),
        )
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Path> {
        self.0.iter().map(PathBuf::as_path)
    }

    /// Files whose full path matches `glob`.
    #[must_use]
    pub fn matching(&self, glob: &Glob) -> Vec<&Path> {
        self.iter()
            .filter(|path| glob.is_match(&path.to_string_lossy()))
            .collect()
    }

    /// First file whose full path matches `glob`.
    #[must_use]
    pub fn first_match(&self, glob: &Glob) -> Option<&Path> {
        self.iter()
            .find(|path| glob.is_match(&path.to_string_lossy()))
    }
}

impl<'de> Deserialize<'de> for PackageFiles {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let paths = Vec::<PathBuf>::deserialize(deserializer)?;
        Ok(Self::new(paths))
    }
}

/// Paths inside a package are always absolute; `a/../b` and `./` segments are folded.
fn normalize(path: &Path) -> PathBuf {
    let cleaned = path.clean();
    if cleaned.is_absolute() {
        cleaned
    } else {
        Path::new("/").join(cleaned).clean()
    }
}
