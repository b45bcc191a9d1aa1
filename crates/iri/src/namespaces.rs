// SPDX-FileCopyrightText: 2024 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::collections::BTreeMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{encode_local, Error, Iri, Prefix, BASE_KEY, DEFAULT_BASE};

/// URI schemes that mark a token as already being an absolute IRI,
/// even though they look like a `prefix:local` pair.
const ABSOLUTE_SCHEMES: [&str; 2] = ["http", "https"];

/// The namespace table of an application profile:
/// maps prefixes (including the reserved [`BASE_KEY`]) to namespace IRIs.
///
/// Iteration is ordered by prefix,
/// which keeps everything derived from it reproducible.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct Namespaces {
    entries: BTreeMap<String, String>,
}

impl Namespaces {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Registers a namespace, replacing (and returning)
    /// the IRI previously registered for the same prefix.
    pub fn insert<P: Into<String>, I: Into<String>>(
        &mut self,
        prefix: P,
        iri: I,
    ) -> Option<String> {
        self.entries.insert(prefix.into(), iri.into())
    }

    #[must_use]
    pub fn get(&self, prefix: &str) -> Option<&str> {
        self.entries.get(prefix).map(String::as_str)
    }

    #[must_use]
    pub fn contains_prefix(&self, prefix: &str) -> bool {
        self.entries.contains_key(prefix)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(prefix, iri)| (prefix.as_str(), iri.as_str()))
    }

    /// Returns all entries as validated [`Prefix`]es.
    ///
    /// # Errors
    ///
    /// `Error::InvalidIri` if one of the namespace IRIs is not an absolute IRI.
    pub fn prefixes(&self) -> Result<Vec<Prefix>, Error> {
        self.iter()
            .map(|(prefix, iri)| {
                Prefix::new(prefix.to_owned(), iri.to_owned()).map_err(|source| {
                    Error::InvalidIri {
                        token: format!("{prefix}:"),
                        iri: iri.to_owned(),
                        source,
                    }
                })
            })
            .collect()
    }

    /// The IRI that bare local names get appended to:
    /// the [`BASE_KEY`] entry if present, [`DEFAULT_BASE`] otherwise.
    #[must_use]
    pub fn base(&self) -> &str {
        self.get(BASE_KEY).unwrap_or(DEFAULT_BASE)
    }

    /// Resolves a token from the profile into an absolute IRI.
    ///
    /// - `prefix:local` -> the namespace IRI of `prefix` followed by `local`
    /// - `http://...` or `https://...` -> unchanged
    /// - `local` -> the [base](Self::base) followed by the percent-encoded `local`;
    ///   a leading `#` is dropped if the base already ends with one
    ///
    /// # Errors
    ///
    /// - `Error::TypeConstraint` if `token` is empty
    /// - `Error::UnknownPrefix` if the prefix of `token` is not registered
    /// - `Error::InvalidIri` if the result is not a valid absolute IRI
    pub fn resolve(&self, token: &str) -> Result<Iri, Error> {
        if token.is_empty() {
            return Err(Error::TypeConstraint(format!("{token:?}")));
        }
        let resolved = if let Some((prefix, local)) = token.split_once(':') {
            if ABSOLUTE_SCHEMES.contains(&prefix) {
                token.to_owned()
            } else if let Some(namespace) = self.get(prefix) {
                format!("{namespace}{local}")
            } else {
                return Err(Error::UnknownPrefix {
                    prefix: prefix.to_owned(),
                    token: token.to_owned(),
                });
            }
        } else {
            let base = self.base();
            let local = if base.ends_with('#') {
                token.strip_prefix('#').unwrap_or(token)
            } else {
                token
            };
            format!("{base}{}", encode_local(local))
        };
        Iri::parse(resolved.clone()).map_err(|source| Error::InvalidIri {
            token: token.to_owned(),
            iri: resolved,
            source,
        })
    }
}

impl<P: Into<String>, I: Into<String>> FromIterator<(P, I)> for Namespaces {
    fn from_iter<T: IntoIterator<Item = (P, I)>>(iter: T) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(prefix, iri)| (prefix.into(), iri.into()))
                .collect(),
        }
    }
}

impl<P: Into<String>, I: Into<String>> Extend<(P, I)> for Namespaces {
    fn extend<T: IntoIterator<Item = (P, I)>>(&mut self, iter: T) {
        for (prefix, iri) in iter {
            self.insert(prefix, iri);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RDF: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";

    #[test]
    fn resolve_prefixed() {
        let ns = Namespaces::from_iter([("rdf", RDF)]);
        assert_eq!(
            ns.resolve("rdf:label").unwrap().as_str(),
            "http://www.w3.org/1999/02/22-rdf-syntax-ns#label"
        );
    }

    #[test]
    fn resolve_prefix_roundtrip() {
        let ns = Namespaces::from_iter([("schema", "https://schema.org/"), ("ex", "urn:ex:")]);
        for local in ["name", "age", "PostalAddress", ""] {
            assert_eq!(
                ns.resolve(&format!("schema:{local}")).unwrap().as_str(),
                format!("https://schema.org/{local}")
            );
        }
        assert_eq!(ns.resolve("ex:thing").unwrap().as_str(), "urn:ex:thing");
    }

    #[test]
    fn resolve_bare_with_base() {
        let ns = Namespaces::from_iter([("base", "https://schema.org/")]);
        assert_eq!(ns.resolve("name").unwrap().as_str(), "https://schema.org/name");
    }

    #[test]
    fn resolve_bare_default_base() {
        let ns = Namespaces::new();
        assert_eq!(ns.resolve("name").unwrap().as_str(), "http://example.org/name");
        assert_eq!(
            ns.resolve("Email Length").unwrap().as_str(),
            "http://example.org/Email%20Length"
        );
    }

    #[test]
    fn resolve_bare_strips_duplicate_hash() {
        let ns = Namespaces::from_iter([("base", "http://example.org/terms#")]);
        assert_eq!(
            ns.resolve("#name").unwrap().as_str(),
            "http://example.org/terms#name"
        );
        // only dropped when the base ends with one
        let ns = Namespaces::from_iter([("base", "http://example.org/terms/")]);
        assert_eq!(
            ns.resolve("#name").unwrap().as_str(),
            "http://example.org/terms/%23name"
        );
    }

    #[test]
    fn resolve_absolute_is_identity() {
        let ns = Namespaces::new();
        for iri in [
            "https://schema.org/description",
            "http://example.org/shapes#Person",
        ] {
            let resolved = ns.resolve(iri).unwrap();
            assert_eq!(resolved.as_str(), iri);
            assert_eq!(ns.resolve(resolved.as_str()).unwrap(), resolved);
        }
    }

    #[test]
    fn resolve_rejects_empty() {
        assert!(matches!(
            Namespaces::new().resolve(""),
            Err(Error::TypeConstraint(_))
        ));
    }

    #[test]
    fn resolve_unknown_prefix() {
        let err = Namespaces::new().resolve("ns:name").unwrap_err();
        assert!(matches!(err, Error::UnknownPrefix { ref prefix, .. } if prefix == "ns"));
        assert!(err.to_string().starts_with("Prefix ns not in namespace list"));
    }

    #[test]
    fn resolve_relative_base_is_invalid() {
        let ns = Namespaces::from_iter([("base", "shapes#")]);
        assert!(matches!(ns.resolve("Person"), Err(Error::InvalidIri { .. })));
    }

    #[test]
    fn base_lookup() {
        let mut ns = Namespaces::new();
        assert_eq!(ns.base(), DEFAULT_BASE);
        assert!(ns.insert("base", "http://example.org/shapes#").is_none());
        assert_eq!(ns.base(), "http://example.org/shapes#");
        assert_eq!(ns.len(), 1);
        assert!(ns.contains_prefix("base"));
    }

    #[test]
    fn prefixes_are_ordered_and_validated() {
        let ns = Namespaces::from_iter([
            ("xsd", "http://www.w3.org/2001/XMLSchema#"),
            ("rdf", RDF),
        ]);
        let prefixes = ns.prefixes().unwrap();
        let ids: Vec<_> = prefixes.iter().map(|prefix| prefix.prefix.as_str()).collect();
        assert_eq!(ids, ["rdf", "xsd"]);

        let broken = Namespaces::from_iter([("bad", "not an iri")]);
        assert!(matches!(
            broken.prefixes(),
            Err(Error::InvalidIri { ref token, .. }) if token == "bad:"
        ));
    }
}
