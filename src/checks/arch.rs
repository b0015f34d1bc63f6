// Copyright (C) 2026 Checkmk GmbH - License: GNU General Public License v2
// This file is part of Checkmk (https://checkmk.com). It is subject to the terms and
// conditions defined in the file COPYING, which is part of this source code package.

//! Architecture policy: Java packages are noarch unless they ship JNI code.

use super::patterns::JAVA_DOCS_URL;
use super::{CheckContext, CheckGroup, CheckMetadata, CheckState, Severity, Verdict};

pub(crate) const NO_ARCH: CheckMetadata = CheckMetadata {
    name: "CheckNoArch",
    group: CheckGroup::Guidelines,
    text: "Packages are noarch unless they use JNI",
    url: JAVA_DOCS_URL,
    severity: Severity::Should,
    automatic: true,
};

pub(crate) fn check_noarch(ctx: &CheckContext<'_>, state: &mut CheckState) {
    let not_noarch = ctx.spec.packages().into_iter().find(|package| {
        !ctx.spec
            .expand_tag("arch", package)
            .is_some_and(|arch| arch.eq_ignore_ascii_case("noarch"))
    });
    match not_noarch {
        Some(package) => {
            state.set(
                Verdict::Pending,
                Some(format!(
                    "{package} subpackage is not noarch. Please verify manually"
                )),
            );
        }
        None => {
            state.set(Verdict::Pass, None);
        }
    }
}
