// Copyright (C) 2026 Checkmk GmbH - License: GNU General Public License v2
// This file is part of Checkmk (https://checkmk.com). It is subject to the terms and
// conditions defined in the file COPYING, which is part of this source code package.

//! Checks on the javadoc subpackage: presence, directory layout and requirements.

use super::patterns::{HTML_FILES, JAVADOC_DIR, JAVADOC_INSTALL_URL, JAVAPACKAGES_R, JAVA_DOCS_URL};
use super::predicates::{find_javadoc_subpackage, javadoc_subpackages};
use super::{CheckContext, CheckGroup, CheckMetadata, CheckState, Severity, Verdict};
use crate::package::{Glob, PackageResult};

pub(crate) const JAVADOC: CheckMetadata = CheckMetadata {
    name: "CheckJavadoc",
    group: CheckGroup::Guidelines,
    text: "Javadoc documentation files are generated and included in -javadoc subpackage",
    url: JAVADOC_INSTALL_URL,
    severity: Severity::Must,
    automatic: true,
};

pub(crate) const JAVADOC_DIR_NAME: CheckMetadata = CheckMetadata {
    name: "CheckJavadocdirName",
    group: CheckGroup::Guidelines,
    text: "Javadocs are placed in %{_javadocdir}/%{name} (no -%{version} symlink)",
    url: JAVADOC_INSTALL_URL,
    severity: Severity::Must,
    automatic: true,
};

pub(crate) const JAVADOC_JPACKAGE_REQUIRES: CheckMetadata = CheckMetadata {
    name: "CheckJavadocJPackageRequires",
    group: CheckGroup::Guidelines,
    text: "Javadoc subpackages should not have Requires: javapackages-tools (jpackage-utils)",
    url: JAVA_DOCS_URL,
    severity: Severity::Must,
    automatic: true,
};

pub(crate) fn check_javadoc(ctx: &CheckContext<'_>, state: &mut CheckState) {
    let Some(package) = find_javadoc_subpackage(ctx.spec) else {
        state.set(
            Verdict::Fail,
            Some(
                "No javadoc subpackage present. Note: Javadocs are optional for Fedora \
                 versions >= 21"
                    .to_string(),
            ),
        );
        return;
    };
    if ctx.rpms.find(&HTML_FILES, Some(package)).is_some() {
        state.set(Verdict::Pass, None);
    } else {
        state.set(
            Verdict::Fail,
            Some(format!("No javadoc html files found in {package}")),
        );
    }
}

pub(crate) fn check_javadoc_dir_name(
    ctx: &CheckContext<'_>,
    state: &mut CheckState,
) -> PackageResult<()> {
    let Some(package) = find_javadoc_subpackage(ctx.spec) else {
        state.set(
            Verdict::Fail,
            Some("No javadoc subpackage present".to_string()),
        );
        return Ok(());
    };
    let name = Glob::escape(ctx.spec.name());
    let version = Glob::escape(ctx.spec.version());

    let versioned = Glob::new(&format!("{JAVADOC_DIR}/{name}-{version}/*"))?;
    if !ctx.rpms.find_all(&versioned, Some(package)).is_empty() {
        state.set(
            Verdict::Fail,
            Some(format!(
                "Found deprecated versioned javadoc paths {}",
                versioned.as_str()
            )),
        );
        return Ok(());
    }

    let canonical = Glob::new(&format!("{JAVADOC_DIR}/{name}/*"))?;
    if ctx.rpms.find_all(&canonical, Some(package)).is_empty() {
        state.set(
            Verdict::Fail,
            Some(format!("No {JAVADOC_DIR}/{} found", ctx.spec.name())),
        );
        return Ok(());
    }
    state.set(Verdict::Pass, None);
    Ok(())
}

pub(crate) fn check_javadoc_requires(ctx: &CheckContext<'_>, state: &mut CheckState) {
    match javadoc_subpackages(ctx.spec).as_slice() {
        [] => {
            state.set(Verdict::NotApplicable, None);
        }
        [package] => {
            let requires = ctx.spec.requires(Some(*package));
            let found = JAVAPACKAGES_R
                .iter()
                .any(|tool| requires.iter().any(|r| r == tool));
            if found {
                state.set(
                    Verdict::Fail,
                    Some(
                        "javapackages-tools requires are automatically generated by the buildsystem"
                            .to_string(),
                    ),
                );
            } else {
                state.set(Verdict::Pass, None);
            }
        }
        _ => {
            state.set(
                Verdict::Pending,
                Some("More than one javadoc package".to_string()),
            );
        }
    }
}
