// SPDX-FileCopyrightText: 2024 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

use oxiri::IriParseError;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub type Iri = oxiri::Iri<String>;

/// Everything but `A-Z a-z 0-9 _ . - ~ /` gets percent-encoded
/// in local names appended to a namespace.
const LOCAL_NAME_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'_')
    .remove(b'.')
    .remove(b'-')
    .remove(b'~')
    .remove(b'/');

/// Percent-encodes a local name,
/// so it can safely be appended to a namespace IRI.
///
/// # Examples
///
/// - `"name"` -> \
///   `"name"`
/// - `"Email Length"` -> \
///   `"Email%20Length"`
/// - `"#Person"` -> \
///   `"%23Person"`
#[must_use]
pub fn encode_local(local: &str) -> String {
    utf8_percent_encode(local, LOCAL_NAME_ENCODE_SET).to_string()
}

/// Binds a short prefix to the namespace IRI it abbreviates,
/// as declared in the namespace table of an application profile.
///
/// # Examples (Turtle format):
///
/// ```turtle
/// @prefix rdf:      <http://www.w3.org/1999/02/22-rdf-syntax-ns#> .
/// @prefix sh:       <http://www.w3.org/ns/shacl#> .
/// @prefix xsd:      <http://www.w3.org/2001/XMLSchema#> .
/// @prefix schema:   <https://schema.org/> .
/// ```
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Prefix {
    /// The short form, e.g. `xsd` or `schema`;
    /// may be empty.
    pub prefix: String,
    /// The extended/full form,
    /// e.g. `http://www.w3.org/2001/XMLSchema#`
    /// or `https://schema.org/`.
    pub iri: Iri,
}

impl Prefix {
    /// Creates a new instance of `Prefix`.
    ///
    /// # Errors
    ///
    /// Returns an `IriParseError` if the given `iri` is not an absolute IRI.
    pub fn new(prefix_id: String, iri: String) -> Result<Self, IriParseError> {
        Ok(Self {
            prefix: prefix_id,
            iri: Iri::parse(iri)?,
        })
    }

    /// Whether this is the entry supplying the base IRI
    /// of the profile (compared case-insensitively).
    #[must_use]
    pub fn is_base(&self) -> bool {
        self.prefix.eq_ignore_ascii_case(crate::BASE_KEY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_local_keeps_unreserved() {
        assert_eq!(encode_local("personName"), "personName");
        assert_eq!(encode_local("a_b.c-d~e/f"), "a_b.c-d~e/f");
    }

    #[test]
    fn encode_local_escapes_reserved() {
        assert_eq!(encode_local("Email Length"), "Email%20Length");
        assert_eq!(encode_local("#Person"), "%23Person");
        assert_eq!(encode_local("a:b"), "a%3Ab");
        assert_eq!(encode_local("Größe"), "Gr%C3%B6%C3%9Fe");
    }

    #[test]
    fn prefix_requires_absolute_iri() {
        assert!(Prefix::new("schema".to_owned(), "https://schema.org/".to_owned()).is_ok());
        assert!(Prefix::new("rel".to_owned(), "shapes#".to_owned()).is_err());
    }

    #[test]
    fn base_prefix() {
        let prefix = Prefix::new(String::new(), "http://example.org/".to_owned()).unwrap();
        assert!(!prefix.is_base());
        let base = Prefix::new("BASE".to_owned(), "http://example.org/".to_owned()).unwrap();
        assert!(base.is_base());
    }
}
