// SPDX-FileCopyrightText: 2024 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Translates an application profile
//! (namespaces, shape metadata and property statements)
//! into a SHACL shapes graph.

mod assembler;
pub mod config;
pub mod constraint;
pub mod graph;
pub mod list;
pub mod model;
pub mod naming;

pub use assembler::{convert, Converter};
pub use config::Config;
pub use graph::ShaclGraph;
pub use model::{ApplicationProfile, PropertyStatement, ShapeInfo, Target, TargetKind};

use git_version::git_version;
use oxrdf::LanguageTagParseError;

// This tests rust code in the README with doc-tests.
// Though, It will not appear in the generated documentaton.
#[doc = include_str!("../README.md")]
#[cfg(doctest)]
pub struct ReadmeDoctests;

pub const VERSION: &str = git_version!(cargo_prefix = "", fallback = "unknown");

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Resolve(#[from] ap2shacl_iri::Error),

    #[error("Invalid input: {0}")]
    TypeConstraint(String),

    #[error("Node type '{kind}' unknown.")]
    UnsupportedNodeKind { kind: String },

    #[error("Unknown type of value constraint: '{kind}'")]
    UnknownConstraintKind { kind: String },

    #[error("Incompatible node kind(s) [{node_kinds}] and value constraint '{constraint}' (on property {property}).")]
    IncompatibleConstraint {
        constraint: String,
        node_kinds: String,
        property: String,
    },

    #[error("Failed to parse value constraint '{value}' as {expected}.")]
    ValueParse {
        value: String,
        expected: &'static str,
    },

    #[error("Severity not recognised: '{severity}'")]
    UnknownSeverity { severity: String },

    #[error("Target type not recognised: '{kind}' (for target '{target}')")]
    UnknownTargetKind { kind: String, target: String },

    #[error("Invalid language tag '{tag}': {source}")]
    InvalidLanguageTag {
        tag: String,
        source: LanguageTagParseError,
    },

    #[error("Can not bind prefix '{prefix}' to '{iri}': {reason}")]
    InvalidPrefix {
        prefix: String,
        iri: String,
        reason: String,
    },

    #[error("RDF syntax '{syntax}' is not supported for serialization.")]
    UnsupportedSyntax { syntax: String },

    /// Represents all cases of `std::io::Error`.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
