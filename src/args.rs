// Copyright (C) 2026 Checkmk GmbH - License: GNU General Public License v2
// This file is part of Checkmk (https://checkmk.com). It is subject to the terms and
// conditions defined in the file COPYING, which is part of this source code package.
use clap::{Parser, ValueEnum};
use java_guidelines::checks::Applicability;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "java_guidelines")]
#[command(version)]
#[command(about = "Checks RPM spec files and built packages against the Java packaging guidelines")]
pub(crate) struct Args {
    /// Path to the review snapshot (JSON) exported by the review host.
    pub snapshot: PathBuf,

    /// Path to the file to write the check results in JSON format.
    pub report: PathBuf,

    /// Name of a check to skip. May be given multiple times.
    #[arg(long = "exclude", value_name = "CHECK")]
    pub excluded: Vec<String>,

    #[arg(
        long,
        value_enum,
        default_value_t = JavaMode::Auto,
        long_help = "Whether the Java checks run.\n\
                auto runs them if the package looks like a Java package."
    )]
    pub java: JavaMode,

    /// Log filter, e.g. `debug` or `java_guidelines=trace`.
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum JavaMode {
    Auto,
    Enabled,
    Disabled,
}

impl From<JavaMode> for Applicability {
    fn from(mode: JavaMode) -> Self {
        match mode {
            JavaMode::Auto => Self::Auto,
            JavaMode::Enabled => Self::Enabled,
            JavaMode::Disabled => Self::Disabled,
        }
    }
}
