// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Error type for writing the report.

use thiserror::Error;

/// Failure while emitting the result line.
#[derive(Debug, Error)]
pub enum ReportError {
    /// The output sink rejected the write or flush (e.g. a closed pipe).
    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),
}
