// SPDX-FileCopyrightText: 2024 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

mod iri;
mod namespaces;

pub use iri::*;
pub use namespaces::*;

use oxiri::IriParseError;

// This tests rust code in the README with doc-tests.
// Though, It will not appear in the generated documentaton.
#[doc = include_str!("../README.md")]
#[cfg(doctest)]
pub struct ReadmeDoctests;

/// The key of the namespace table entry
/// that supplies the base IRI for bare local names.
pub const BASE_KEY: &str = "base";
/// The base IRI used for bare local names
/// if the namespace table has no [`BASE_KEY`] entry.
pub const DEFAULT_BASE: &str = "http://example.org/";

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Value to convert should be a non-empty string: {0}")]
    TypeConstraint(String),

    #[error("Prefix {prefix} not in namespace list (resolving '{token}').")]
    UnknownPrefix { prefix: String, token: String },

    #[error("Resolving '{token}' resulted in '{iri}', which is not a valid absolute IRI: {source}")]
    InvalidIri {
        token: String,
        iri: String,
        source: IriParseError,
    },
}
