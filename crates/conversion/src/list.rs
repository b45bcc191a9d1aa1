// SPDX-FileCopyrightText: 2024 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Encodes sequences as RDF lists
//! (`rdf:first`/`rdf:rest` chains terminated by `rdf:nil`).

use std::fmt;
use std::str::FromStr;

use ap2shacl_iri::Namespaces;
use oxrdf::vocab::rdf;
use oxrdf::{BlankNode, Literal, NamedNode, Term};

use crate::{Error, ShaclGraph};

/// How the items of a list are to be interpreted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListKind {
    /// Every item becomes a literal.
    Literal,
    /// Every item already is an IRI or blank node.
    Resolved,
    /// Every item is a profile identifier that still needs resolving.
    AnyUri,
}

impl FromStr for ListKind {
    type Err = Error;

    fn from_str(kind: &str) -> Result<Self, Self::Err> {
        match kind.to_lowercase().as_str() {
            "literal" => Ok(Self::Literal),
            "uriref" | "resolved" => Ok(Self::Resolved),
            "anyuri" => Ok(Self::AnyUri),
            _ => Err(Error::UnsupportedNodeKind {
                kind: kind.to_owned(),
            }),
        }
    }
}

impl fmt::Display for ListKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Literal => "literal",
            Self::Resolved => "URIRef",
            Self::AnyUri => "anyURI",
        };
        f.write_str(name)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ListItem {
    Text(String),
    Integer(i64),
    Node(Term),
}

impl From<&str> for ListItem {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

impl From<String> for ListItem {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<i64> for ListItem {
    fn from(num: i64) -> Self {
        Self::Integer(num)
    }
}

impl From<NamedNode> for ListItem {
    fn from(node: NamedNode) -> Self {
        Self::Node(node.into())
    }
}

impl From<BlankNode> for ListItem {
    fn from(node: BlankNode) -> Self {
        Self::Node(node.into())
    }
}

impl From<Literal> for ListItem {
    fn from(lit: Literal) -> Self {
        Self::Node(lit.into())
    }
}

impl fmt::Display for ListItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => write!(f, "{text:?}"),
            Self::Integer(num) => write!(f, "{num}"),
            Self::Node(term) => write!(f, "{term}"),
        }
    }
}

fn item_term(item: &ListItem, kind: ListKind, namespaces: &Namespaces) -> Result<Term, Error> {
    match (kind, item) {
        (ListKind::Literal, ListItem::Text(text)) => {
            Ok(Literal::new_simple_literal(text.as_str()).into())
        }
        (ListKind::Literal, ListItem::Integer(num)) => Ok(Literal::from(*num).into()),
        (ListKind::Literal, ListItem::Node(term @ Term::Literal(_)))
        | (ListKind::Resolved | ListKind::AnyUri, ListItem::Node(term @ Term::NamedNode(_)))
        | (ListKind::Resolved, ListItem::Node(term @ Term::BlankNode(_))) => Ok(term.clone()),
        (ListKind::AnyUri, ListItem::Text(token)) => {
            let iri = namespaces.resolve(token)?;
            Ok(NamedNode::new_unchecked(iri.into_inner()).into())
        }
        _ => Err(Error::TypeConstraint(format!(
            "List item {item} can not be encoded as {kind}"
        ))),
    }
}

/// Derives a readable ID for the first node of a list from its first item,
/// so lists are recognizable (and reproducible) in the output.
fn root_id(graph: &ShaclGraph, first: &ListItem) -> Option<String> {
    let text = match first {
        ListItem::Integer(num) => return Some(num.to_string()),
        ListItem::Text(text) => text.as_str(),
        ListItem::Node(Term::NamedNode(node)) => node.as_str(),
        ListItem::Node(_) => return None,
    };
    let local = match graph.base() {
        Some(base) if !base.is_empty() && text.contains(base) => text.replace(base, ""),
        _ => text.replace(':', "_"),
    };
    let id: String = local
        .chars()
        .map(|chr| {
            if chr.is_ascii_alphanumeric() || chr == '_' || chr == '-' {
                chr
            } else {
                '_'
            }
        })
        .collect();
    Some(id)
}

/// The first node of a new list.
/// Uses the ID derived from `first` where possible,
/// and makes sure not to continue a list that is already in the graph.
fn root_node(graph: &ShaclGraph, first: &ListItem) -> BlankNode {
    let Some(id) = root_id(graph, first) else {
        return BlankNode::default();
    };
    let mut candidate_id = id.clone();
    let mut distinguishing_idx = 1;
    loop {
        let Ok(candidate) = BlankNode::new(candidate_id.as_str()) else {
            return BlankNode::default();
        };
        if graph
            .graph()
            .object_for_subject_predicate(&candidate, rdf::FIRST)
            .is_none()
        {
            return candidate;
        }
        distinguishing_idx += 1;
        candidate_id = format!("{id}_{distinguishing_idx}");
    }
}

/// Adds `items` to `graph` as an RDF list,
/// and returns the first node of that list,
/// to be used as the object of the triple the list belongs to.
///
/// # Errors
///
/// - `Error::TypeConstraint` if `items` is empty,
///   or one of them does not fit `kind`
/// - `Error::Resolve` if `kind` is [`ListKind::AnyUri`]
///   and an item can not be resolved
pub fn encode_list(
    graph: &mut ShaclGraph,
    items: &[ListItem],
    kind: ListKind,
    namespaces: &Namespaces,
) -> Result<BlankNode, Error> {
    let Some(first) = items.first() else {
        return Err(Error::TypeConstraint(
            "Can not encode an empty RDF list".to_owned(),
        ));
    };
    let terms = items
        .iter()
        .map(|item| item_term(item, kind, namespaces))
        .collect::<Result<Vec<_>, _>>()?;
    tracing::trace!("Encoding RDF list of {} {kind} items", terms.len());

    let root = root_node(graph, first);
    let mut current = root.clone();
    let mut terms = terms.into_iter().peekable();
    while let Some(term) = terms.next() {
        graph.insert(current.clone(), rdf::FIRST, term);
        if terms.peek().is_some() {
            let next = BlankNode::default();
            graph.insert(current, rdf::REST, next.clone());
            current = next;
        } else {
            graph.insert(current.clone(), rdf::REST, rdf::NIL.into_owned());
        }
    }
    Ok(root)
}
