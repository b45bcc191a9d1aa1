// SPDX-FileCopyrightText: 2024 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Provides ready to use [`NamedNodeRef`](oxrdf::NamedNodeRef)s
//! for the vocabularies written by the converter.

pub mod sh;

use git_version::git_version;

// This tests rust code in the README with doc-tests.
// Though, It will not appear in the generated documentation.
#[doc = include_str!("../README.md")]
#[cfg(doctest)]
pub struct ReadmeDoctests;

pub const VERSION: &str = git_version!(cargo_prefix = "", fallback = "unknown");

#[macro_export]
macro_rules! named_node {
    ($const:ident, $base:expr, $node:literal, $doc:literal) => {
        #[doc=$doc]
        pub const $const: oxrdf::NamedNodeRef<'_> =
            oxrdf::NamedNodeRef::new_unchecked(const_format::concatcp!($base, $node));
    };
}

#[macro_export]
macro_rules! typed_literal {
    ($const:ident, $value:literal, $rdf_type:expr) => {
        pub static $const: LazyLock<TermRef<'_>> =
            LazyLock::new(|| TermRef::Literal(LiteralRef::new_typed_literal($value, $rdf_type)));
    };
}

pub mod basics {
    use oxrdf::{vocab::xsd, LiteralRef, TermRef};
    use std::sync::LazyLock;

    pub const NS_BASE_RDF: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";
    pub const NS_PREFERRED_PREFIX_RDF: &str = "rdf";
    pub const NS_BASE_XSD: &str = "http://www.w3.org/2001/XMLSchema#";
    pub const NS_PREFERRED_PREFIX_XSD: &str = "xsd";

    typed_literal!(BOOL_FALSE, "false", xsd::BOOLEAN);
    typed_literal!(BOOL_TRUE, "true", xsd::BOOLEAN);

    #[must_use]
    pub fn rdf_bool(arg: bool) -> TermRef<'static> {
        if arg {
            *BOOL_TRUE
        } else {
            *BOOL_FALSE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use oxrdf::vocab::{rdf, xsd};

    #[test]
    fn namespace_bases_match_oxrdf() {
        assert!(rdf::TYPE.as_str().starts_with(basics::NS_BASE_RDF));
        assert!(xsd::BOOLEAN.as_str().starts_with(basics::NS_BASE_XSD));
    }

    #[test]
    fn rdf_bool_is_typed() {
        let lit = basics::rdf_bool(false);
        let oxrdf::TermRef::Literal(lit) = lit else {
            panic!("expected a literal, got {lit}");
        };
        assert_eq!(lit.value(), "false");
        assert_eq!(lit.datatype(), xsd::BOOLEAN);
    }
}
