// Copyright (C) 2026 Checkmk GmbH - License: GNU General Public License v2
// This file is part of Checkmk (https://checkmk.com). It is subject to the terms and
// conditions defined in the file COPYING, which is part of this source code package.

//! Defines error types for loading review snapshots and compiling search patterns.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for package operations.
pub type PackageResult<T> = std::result::Result<T, PackageError>;

/// Errors that can occur while reading the host views.
#[derive(Debug, Error)]
pub enum PackageError {
    #[error("Failed to read review snapshot: {path:?}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse review snapshot: {origin}")]
    ParseFailed {
        origin: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("Invalid review snapshot {origin}: {reason}")]
    InvalidSnapshot { origin: String, reason: String },
    #[error("Invalid file pattern: {pattern}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },
}
