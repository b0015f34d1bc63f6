// Copyright (C) 2026 Checkmk GmbH - License: GNU General Public License v2
// This file is part of Checkmk (https://checkmk.com). It is subject to the terms and
// conditions defined in the file COPYING, which is part of this source code package.

//! Guidelines that always need a human reviewer.

use super::patterns::{JAR_INSTALL_URL, JAVA_DOCS_URL, MAVEN_POM_URL, PREBUILT_URL};
use super::{CheckGroup, CheckMetadata, Severity};

pub(crate) const BUNDLED_JARS: CheckMetadata = CheckMetadata {
    name: "CheckBundledJars",
    group: CheckGroup::Guidelines,
    text: "If source tarball includes bundled JAR/class files these need to be removed prior to \
           building",
    url: PREBUILT_URL,
    severity: Severity::Must,
    automatic: false,
};

pub(crate) const JAR_FILENAME: CheckMetadata = CheckMetadata {
    name: "JarFilename",
    group: CheckGroup::Guidelines,
    text: "JAR files are named and installed according to guidelines",
    url: JAR_INSTALL_URL,
    severity: Severity::Must,
    automatic: false,
};

pub(crate) const POM_INSTALLED: CheckMetadata = CheckMetadata {
    name: "CheckPomInstalled",
    group: CheckGroup::Maven,
    text: "If package contains pom.xml files install it (including metadata) even when building \
           with ant",
    url: MAVEN_POM_URL,
    severity: Severity::Must,
    automatic: false,
};

pub(crate) const UPSTREAM_BUILD_METHOD: CheckMetadata = CheckMetadata {
    name: "CheckUpstremBuildMethod",
    group: CheckGroup::Guidelines,
    text: "Package uses upstream build method (ant/maven/etc.)",
    url: JAVA_DOCS_URL,
    severity: Severity::Should,
    automatic: false,
};
