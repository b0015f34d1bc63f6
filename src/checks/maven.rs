// Copyright (C) 2026 Checkmk GmbH - License: GNU General Public License v2
// This file is part of Checkmk (https://checkmk.com). It is subject to the terms and
// conditions defined in the file COPYING, which is part of this source code package.

//! Checks on Maven packaging: depmap macros, POM locations, test skipping and XMvn usage.

use super::patterns::{
    ADD_MAVEN_DEPMAP_CALL, BUILD_INVOCATION, COMMENT_LINE, JAVA_DOCS_URL, LEGACY_POM_DIR,
    MAVEN_HOWTO_URL, MAVEN_POM_URL, MAVEN_TEST_SKIP, MVN_RPMBUILD_CALL, OLD_MAVEN_DEPMAP,
    POM_FILES, UPDATE_MAVEN_DEPMAP, XMVN_TEST_SKIP,
};
use super::predicates::{is_maven_package, is_xmvn_package, scan_backward_for_comment};
use super::{CheckContext, CheckGroup, CheckMetadata, CheckState, Severity, Verdict};
use regex::Regex;
use std::sync::LazyLock;

pub(crate) const NO_OLD_MAVEN_DEPMAP: CheckMetadata = CheckMetadata {
    name: "CheckNoOldMavenDepmap",
    group: CheckGroup::Maven,
    text: "Old add_to_maven_depmap macro is not being used",
    url: MAVEN_POM_URL,
    severity: Severity::Must,
    automatic: true,
};

pub(crate) const ADD_MAVEN_DEPMAP: CheckMetadata = CheckMetadata {
    name: "CheckAddMavenDepmap",
    group: CheckGroup::Maven,
    text: "POM files have correct Maven mapping",
    url: MAVEN_POM_URL,
    severity: Severity::Must,
    automatic: true,
};

pub(crate) const USE_MAVENPOMDIR_MACRO: CheckMetadata = CheckMetadata {
    name: "CheckUseMavenpomdirMacro",
    group: CheckGroup::Maven,
    text: "Packages use .mfiles file list instead of %{_datadir}/maven2/poms",
    url: MAVEN_POM_URL,
    severity: Severity::Must,
    automatic: true,
};

pub(crate) const UPDATE_DEPMAP: CheckMetadata = CheckMetadata {
    name: "CheckUpdateDepmap",
    group: CheckGroup::Maven,
    text: "Package DOES NOT use %update_maven_depmap in %post/%postun",
    url: MAVEN_POM_URL,
    severity: Severity::Must,
    automatic: true,
};

pub(crate) const TEST_SKIP: CheckMetadata = CheckMetadata {
    name: "CheckTestSkip",
    group: CheckGroup::Maven,
    text: "If tests are skipped during package build explain why it was needed in a comment",
    url: JAVA_DOCS_URL,
    severity: Severity::Must,
    automatic: true,
};

pub(crate) const MVN_RPMBUILD: CheckMetadata = CheckMetadata {
    name: "CheckMvnRpmbuild",
    group: CheckGroup::Maven,
    text: "mvn-rpmbuild is deprecated and will be removed in future releases",
    url: JAVA_DOCS_URL,
    severity: Severity::Must,
    automatic: true,
};

pub(crate) const NEW_STYLE_MAVEN: CheckMetadata = CheckMetadata {
    name: "CheckNewStyleMaven",
    group: CheckGroup::Maven,
    text: "Maven packages should use new style packaging",
    url: MAVEN_HOWTO_URL,
    severity: Severity::Must,
    automatic: true,
};

/// Either kind of test-skip flag.
static TEST_SKIP_TRIGGER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("{}|{}", MAVEN_TEST_SKIP.as_str(), XMVN_TEST_SKIP.as_str()))
        .expect("combined test skip pattern is valid")
});

fn ships_poms(ctx: &CheckContext<'_>) -> bool {
    ctx.rpms.find(&POM_FILES, None).is_some()
}

pub(crate) fn check_no_old_depmap(ctx: &CheckContext<'_>, state: &mut CheckState) {
    state.set_passed(ctx.spec.find_re(&OLD_MAVEN_DEPMAP).is_none());
}

pub(crate) fn check_add_maven_depmap(ctx: &CheckContext<'_>, state: &mut CheckState) {
    if !ships_poms(ctx) {
        state.set(Verdict::NotApplicable, None);
    } else if is_xmvn_package(ctx.spec) {
        state.set(Verdict::Pass, None);
    } else if ctx.spec.find_re(&ADD_MAVEN_DEPMAP_CALL).is_none() {
        state.set(
            Verdict::Fail,
            Some(
                "Old style Maven package found, no add_maven_depmap calls found but POM files \
                 present"
                    .to_string(),
            ),
        );
    } else {
        state.set(
            Verdict::Pending,
            Some(
                "Some add_maven_depmap calls found. Please check if they are correct or update to \
                 latest guidelines"
                    .to_string(),
            ),
        );
    }
}

pub(crate) fn check_mavenpomdir_macro(ctx: &CheckContext<'_>, state: &mut CheckState) {
    if !ships_poms(ctx) {
        state.set(Verdict::NotApplicable, None);
        return;
    }
    state.set_passed(ctx.spec.find_re(&LEGACY_POM_DIR).is_none());
}

pub(crate) fn check_update_depmap(ctx: &CheckContext<'_>, state: &mut CheckState) {
    if !ships_poms(ctx) {
        state.set(Verdict::NotApplicable, None);
        return;
    }
    state.set_passed(ctx.spec.find_re(&UPDATE_MAVEN_DEPMAP).is_none());
}

pub(crate) fn check_test_skip(ctx: &CheckContext<'_>, state: &mut CheckState) {
    let Some(build) = ctx.spec.section("%build", true) else {
        state.set(Verdict::NotApplicable, None);
        return;
    };
    if !MAVEN_TEST_SKIP.is_match(build) && !XMVN_TEST_SKIP.is_match(build) {
        state.set(Verdict::NotApplicable, None);
        return;
    }
    let lines: Vec<&str> = build.lines().collect();
    let justified = scan_backward_for_comment(
        &lines,
        &TEST_SKIP_TRIGGER,
        &BUILD_INVOCATION,
        &COMMENT_LINE,
        state,
    );
    if justified == Some(false) {
        return;
    }
    state.set(
        Verdict::Pending,
        Some(
            "Tests seem to be skipped. Verify there is a comment giving a reason for this"
                .to_string(),
        ),
    );
}

pub(crate) fn check_mvn_rpmbuild(ctx: &CheckContext<'_>, state: &mut CheckState) {
    if ctx.spec.find_re(&MVN_RPMBUILD_CALL).is_some() {
        state.set(
            Verdict::Fail,
            Some(
                "Convert the package to use %mvn_build instead of deprecated mvn-rpmbuild"
                    .to_string(),
            ),
        );
    } else {
        state.set(Verdict::NotApplicable, None);
    }
}

pub(crate) fn check_new_style_maven(ctx: &CheckContext<'_>, state: &mut CheckState) {
    if !is_maven_package(ctx.spec) {
        state.set(Verdict::NotApplicable, None);
    } else if is_xmvn_package(ctx.spec) {
        state.set(Verdict::Pass, None);
    } else {
        state.set(
            Verdict::Fail,
            Some("If possible update your package to latest guidelines".to_string()),
        );
    }
}
