// SPDX-FileCopyrightText: 2024 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

//! The output of a conversion:
//! an append-only set of triples plus prefix bindings and a base IRI,
//! and its serialization into RDF syntaxes through `oxrdfio`.

use std::collections::BTreeMap;
use std::io::Write;

use ap2shacl_iri::Prefix;
use oxrdf::{Graph, GraphNameRef, NamedNode, QuadRef, Subject, Term, Triple, TripleRef};
use oxrdfio::{RdfFormat, RdfSerializer};

use crate::Error;

/// Maps common syntax names, file extensions
/// and media types to an `oxrdfio` format.
///
/// # Errors
///
/// `Error::UnsupportedSyntax` if the syntax is unknown.
pub fn syntax_format(syntax: &str) -> Result<RdfFormat, Error> {
    match syntax.to_lowercase().as_str() {
        "turtle" | "ttl" => Ok(RdfFormat::Turtle),
        "nt" | "ntriples" | "n-triples" => Ok(RdfFormat::NTriples),
        "nquads" | "n-quads" | "nq" => Ok(RdfFormat::NQuads),
        "trig" => Ok(RdfFormat::TriG),
        "n3" => Ok(RdfFormat::N3),
        "xml" | "pretty-xml" | "rdfxml" | "rdf/xml" | "rdf" => Ok(RdfFormat::RdfXml),
        other => RdfFormat::from_media_type(other)
            .or_else(|| RdfFormat::from_extension(other))
            .ok_or_else(|| Error::UnsupportedSyntax {
                syntax: syntax.to_owned(),
            }),
    }
}

const fn supports_comments(format: RdfFormat) -> bool {
    matches!(
        format,
        RdfFormat::Turtle
            | RdfFormat::TriG
            | RdfFormat::N3
            | RdfFormat::NTriples
            | RdfFormat::NQuads
    )
}

const fn supports_base(format: RdfFormat) -> bool {
    matches!(format, RdfFormat::Turtle | RdfFormat::TriG | RdfFormat::N3)
}

fn is_valid_prefix_name(prefix: &str) -> bool {
    let mut chars = prefix.chars();
    chars.next().is_none_or(char::is_alphabetic)
        && chars.all(|chr| chr.is_alphanumeric() || matches!(chr, '_' | '-' | '.'))
        && !prefix.ends_with('.')
}

/// Accumulates the SHACL triples of one conversion run.
///
/// Triples are only ever added, never removed;
/// adding a triple that is already present is a no-op.
#[derive(Clone, Debug, Default)]
pub struct ShaclGraph {
    graph: Graph,
    prefixes: BTreeMap<String, String>,
    base: Option<String>,
}

impl ShaclGraph {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a triple; returns `false` if it was already present.
    pub fn insert(
        &mut self,
        subject: impl Into<Subject>,
        predicate: impl Into<NamedNode>,
        object: impl Into<Term>,
    ) -> bool {
        self.graph.insert(&Triple::new(subject, predicate, object))
    }

    #[must_use]
    pub fn contains<'a>(&self, triple: impl Into<TripleRef<'a>>) -> bool {
        self.graph.contains(triple)
    }

    /// Binds `prefix` to the namespace `iri` for serialization,
    /// replacing a previous binding of the same prefix.
    ///
    /// # Errors
    ///
    /// `Error::InvalidPrefix` if `prefix` can not be used as a prefix name,
    /// or `iri` is not an absolute IRI.
    pub fn bind(&mut self, prefix: &str, iri: &str) -> Result<(), Error> {
        let validated =
            Prefix::new(prefix.to_owned(), iri.to_owned()).map_err(|err| Error::InvalidPrefix {
                prefix: prefix.to_owned(),
                iri: iri.to_owned(),
                reason: err.to_string(),
            })?;
        self.bind_prefix(validated)
    }

    /// Binds an already validated prefix, see [`Self::bind`].
    ///
    /// # Errors
    ///
    /// `Error::InvalidPrefix` if the prefix can not be used as a prefix name.
    pub fn bind_prefix(&mut self, prefix: Prefix) -> Result<(), Error> {
        let Prefix { prefix, iri } = prefix;
        let iri = iri.into_inner();
        if !is_valid_prefix_name(&prefix) {
            return Err(Error::InvalidPrefix {
                prefix,
                iri,
                reason: "not a valid prefix name".to_owned(),
            });
        }
        tracing::trace!("Binding prefix '{prefix}' to <{iri}>");
        self.prefixes.insert(prefix, iri);
        Ok(())
    }

    #[must_use]
    pub fn prefix(&self, prefix: &str) -> Option<&str> {
        self.prefixes.get(prefix).map(String::as_str)
    }

    /// Whether any prefix is bound to exactly this namespace IRI.
    #[must_use]
    pub fn is_namespace_bound(&self, iri: &str) -> bool {
        self.prefixes.values().any(|bound| bound == iri)
    }

    pub fn prefixes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.prefixes
            .iter()
            .map(|(prefix, iri)| (prefix.as_str(), iri.as_str()))
    }

    pub fn set_base<S: Into<String>>(&mut self, base: S) {
        self.base = Some(base.into());
    }

    #[must_use]
    pub fn base(&self) -> Option<&str> {
        self.base.as_deref()
    }

    #[must_use]
    pub const fn graph(&self) -> &Graph {
        &self.graph
    }

    #[must_use]
    pub fn into_graph(self) -> Graph {
        self.graph
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.graph.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.graph.is_empty()
    }

    /// Writes the graph in the given syntax to `writer`,
    /// preceded by `header` as a comment (if the syntax supports comments).
    ///
    /// # Errors
    ///
    /// - `Error::UnsupportedSyntax` if `syntax` is unknown
    /// - `Error::InvalidPrefix` if a bound prefix is rejected by the serializer
    /// - `Error::Io` if writing fails
    pub fn dump<W: Write>(
        &self,
        mut writer: W,
        syntax: &str,
        header: Option<&str>,
    ) -> Result<W, Error> {
        let format = syntax_format(syntax)?;
        if supports_comments(format) {
            if let Some(header) = header {
                for line in header.lines() {
                    writeln!(writer, "# {line}")?;
                }
            }
        }
        if supports_base(format) {
            if let Some(base) = &self.base {
                writeln!(writer, "@base <{base}> .")?;
            }
        }

        let mut serializer = RdfSerializer::from_format(format);
        for (prefix, iri) in &self.prefixes {
            serializer = serializer
                .with_prefix(prefix.as_str(), iri.as_str())
                .map_err(|err| Error::InvalidPrefix {
                    prefix: prefix.clone(),
                    iri: iri.clone(),
                    reason: err.to_string(),
                })?;
        }
        let mut serializer = serializer.for_writer(writer);
        for triple in &self.graph {
            serializer.serialize_quad(QuadRef::new(
                triple.subject,
                triple.predicate,
                triple.object,
                GraphNameRef::DefaultGraph,
            ))?;
        }
        Ok(serializer.finish()?)
    }

    /// Serializes the graph in the given syntax (e.g. `"turtle"`),
    /// without any header.
    ///
    /// # Errors
    ///
    /// See [`Self::dump`].
    pub fn serialize(&self, syntax: &str) -> Result<String, Error> {
        let buffer = self.dump(Vec::new(), syntax, None)?;
        Ok(String::from_utf8_lossy(&buffer).into_owned())
    }
}
