// Copyright (C) 2026 Checkmk GmbH - License: GNU General Public License v2
// This file is part of Checkmk (https://checkmk.com). It is subject to the terms and
// conditions defined in the file COPYING, which is part of this source code package.

//! Textual patterns the Java packaging checks look for.

use regex::Regex;
use std::sync::LazyLock;

use crate::package::Glob;

/// Build requirement pulling in the local Maven build support.
pub const MAVEN_LOCAL: &str = "maven-local";

/// Suffix of the documentation subpackage.
pub const JAVADOC_SUFFIX: &str = "-javadoc";

/// Packaging tools that may appear in build requirements.
pub const JAVAPACKAGES_BR: [&str; 4] = [
    "javapackages-tools",
    "jpackage-utils",
    "javapackages-local",
    "gradle-local",
];

/// Packaging tools that may appear in runtime requirements.
pub const JAVAPACKAGES_R: [&str; 2] = ["javapackages-tools", "jpackage-utils"];

/// Token that must not appear in `%post`/`%postun` scriptlets.
pub const SCRIPTLET_TOOL: &str = "jpackage-utils";

/// Root of the installed API documentation.
pub const JAVADOC_DIR: &str = "/usr/share/javadoc";

pub const JAVA_DOCS_URL: &str = "https://docs.fedoraproject.org/en-US/packaging-guidelines/Java/";
pub const JAVADOC_INSTALL_URL: &str =
    "https://docs.fedoraproject.org/en-US/packaging-guidelines/Java/#_javadoc_installation";
pub const MAVEN_POM_URL: &str =
    "https://docs.fedoraproject.org/en-US/packaging-guidelines/Java/#_maven_pom_xml_files";
pub const PREBUILT_URL: &str =
    "https://docs.fedoraproject.org/en-US/packaging-guidelines/Java/#_pre_built_dependencies";
pub const JAR_INSTALL_URL: &str =
    "https://docs.fedoraproject.org/en-US/packaging-guidelines/Java/#_jar_file_installation";
pub const MAVEN_HOWTO_URL: &str =
    "https://docs.fedoraproject.org/en-US/java-packaging-howto/maven/";

fn regex(pattern: &str) -> Regex {
    Regex::new(pattern).expect("literal check pattern is valid")
}

fn glob(pattern: &str) -> Glob {
    Glob::new(pattern).expect("literal file pattern is valid")
}

/// `%mvn_build` or `%mvn_install` on a line that is not commented out.
pub static XMVN_MACRO: LazyLock<Regex> =
    LazyLock::new(|| regex(r"^[^#]*%\{?(mvn_build|mvn_install)\b"));

pub static OLD_MAVEN_DEPMAP: LazyLock<Regex> =
    LazyLock::new(|| regex(r"^\s*%add_to_maven_depmap\b"));

pub static ADD_MAVEN_DEPMAP_CALL: LazyLock<Regex> =
    LazyLock::new(|| regex(r"^[^#]*%\{?add_maven_depmap\b"));

pub static LEGACY_POM_DIR: LazyLock<Regex> =
    LazyLock::new(|| regex(r"%\{_datadir\}/maven2/poms"));

pub static UPDATE_MAVEN_DEPMAP: LazyLock<Regex> =
    LazyLock::new(|| regex(r"^\s*%update_maven_depmap\b"));

pub static MVN_RPMBUILD_CALL: LazyLock<Regex> = LazyLock::new(|| regex(r"^[^#]*mvn-rpmbuild"));

/// `-Dmaven.test.skip` passed to a Maven invocation.
pub static MAVEN_TEST_SKIP: LazyLock<Regex> =
    LazyLock::new(|| regex(r"\s-Dmaven\.test\.skip"));

/// XMvn invoked with forced build or skipped tests.
pub static XMVN_TEST_SKIP: LazyLock<Regex> = LazyLock::new(|| {
    regex(r"(%\{?mvn_build\}?|mvn-build)(\s+.*)?\s(-f|--force|--skip-tests)\b")
});

/// A command line that runs the Maven build.
pub static BUILD_INVOCATION: LazyLock<Regex> =
    LazyLock::new(|| regex(r"mvn-rpmbuild|mvn-build|%\{?mvn_build\b"));

pub static COMMENT_LINE: LazyLock<Regex> = LazyLock::new(|| regex(r"^\s*#"));

/// Spec macros that only Java packages use.
pub static JAVA_MACROS: LazyLock<Regex> = LazyLock::new(|| {
    regex(r"^[^#]*%\{?(_javadir|_jnidir|_mavenpomdir|mvn_build|mvn_install|add_maven_depmap)\b")
});

/// Build requirements that identify a Java package.
pub static JAVA_BUILD_REQUIRES: LazyLock<Regex> =
    LazyLock::new(|| regex(r"maven-local|javapackages|java-devel|\bant\b"));

pub static HTML_FILES: LazyLock<Glob> = LazyLock::new(|| glob("*.html"));

pub static POM_FILES: LazyLock<Glob> = LazyLock::new(|| glob("*.pom"));

pub static JAR_FILES: LazyLock<Glob> = LazyLock::new(|| glob("*.jar"));
