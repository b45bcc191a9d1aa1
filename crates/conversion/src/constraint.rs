// SPDX-FileCopyrightText: 2024 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Maps the value constraints of a property statement
//! (node types, constraint type and values, severity)
//! onto SHACL constraint predicates and their objects.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use ap2shacl_iri::Namespaces;
use ap2shacl_vocab::sh;
use oxrdf::vocab::{rdf, xsd};
use oxrdf::{Literal, NamedNode, NamedNodeRef, Term};

use crate::list::{encode_list, ListItem, ListKind};
use crate::{Error, PropertyStatement, ShaclGraph};

/// The property token that turns a statement
/// into a type assertion on its shapes (see [`is_type_assertion`]).
pub const TYPE_TOKEN: &str = "rdf:type";

/// The range separator of length-range constraints, as in `6..1024`.
pub const RANGE_SEPARATOR: &str = "..";

pub type Constraint = (NamedNodeRef<'static>, Term);

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum NodeKind {
    Iri,
    BlankNode,
    Literal,
}

impl FromStr for NodeKind {
    type Err = Error;

    fn from_str(kind: &str) -> Result<Self, Self::Err> {
        match kind.to_lowercase().as_str() {
            "iri" => Ok(Self::Iri),
            "bnode" | "blanknode" => Ok(Self::BlankNode),
            "literal" => Ok(Self::Literal),
            _ => Err(Error::UnsupportedNodeKind {
                kind: kind.to_owned(),
            }),
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Iri => "IRI",
            Self::BlankNode => "BNode",
            Self::Literal => "Literal",
        };
        f.write_str(name)
    }
}

/// Parses the node types of a statement (e.g. `["IRI", "bnode"]`).
///
/// # Errors
///
/// `Error::UnsupportedNodeKind` if one of them is unknown.
pub fn parse_node_kinds<S: AsRef<str>>(node_types: &[S]) -> Result<BTreeSet<NodeKind>, Error> {
    node_types
        .iter()
        .map(|node_type| node_type.as_ref().parse())
        .collect()
}

/// The `sh:nodeKind` value for a set of permitted node kinds,
/// or `None` if all kinds are permitted.
///
/// # Errors
///
/// `Error::TypeConstraint` if `kinds` is empty.
pub fn node_kind_term(kinds: &BTreeSet<NodeKind>) -> Result<Option<NamedNodeRef<'static>>, Error> {
    let iri = kinds.contains(&NodeKind::Iri);
    let bnode = kinds.contains(&NodeKind::BlankNode);
    let literal = kinds.contains(&NodeKind::Literal);
    match (iri, bnode, literal) {
        (true, true, true) => Ok(None),
        (true, true, false) => Ok(Some(sh::BLANK_NODE_OR_IRI)),
        (true, false, true) => Ok(Some(sh::IRI_OR_LITERAL)),
        (false, true, true) => Ok(Some(sh::BLANK_NODE_OR_LITERAL)),
        (false, true, false) => Ok(Some(sh::BLANK_NODE)),
        (true, false, false) => Ok(Some(sh::IRI)),
        (false, false, true) => Ok(Some(sh::LITERAL)),
        (false, false, false) => Err(Error::TypeConstraint(
            "A node kind needs at least one permitted node type".to_owned(),
        )),
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Info,
    Warning,
    Violation,
}

impl Severity {
    /// Parses a severity as written in the profile (case-insensitive);
    /// a missing or empty severity yields `None`.
    ///
    /// # Errors
    ///
    /// `Error::UnknownSeverity` if it is none of `info`, `warning` or `violation`.
    pub fn parse_opt(severity: Option<&str>) -> Result<Option<Self>, Error> {
        match severity {
            None | Some("") => Ok(None),
            Some(severity) => severity.parse().map(Some),
        }
    }

    #[must_use]
    pub const fn term(self) -> NamedNodeRef<'static> {
        match self {
            Self::Info => sh::INFO,
            Self::Warning => sh::WARNING,
            Self::Violation => sh::VIOLATION,
        }
    }
}

impl FromStr for Severity {
    type Err = Error;

    fn from_str(severity: &str) -> Result<Self, Self::Err> {
        match severity.to_lowercase().as_str() {
            "info" => Ok(Self::Info),
            "warning" => Ok(Self::Warning),
            "violation" => Ok(Self::Violation),
            _ => Err(Error::UnknownSeverity {
                severity: severity.to_owned(),
            }),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConstraintKind {
    HasValue,
    PickList,
    Pattern,
    MinLength,
    MaxLength,
    LengthRange,
    Minimum,
    Maximum,
}

impl FromStr for ConstraintKind {
    type Err = Error;

    /// Tags compare case-insensitively, ignoring `-`, `_` and spaces,
    /// so `minLength`, `min-length` and `MINLENGTH` are the same.
    fn from_str(kind: &str) -> Result<Self, Self::Err> {
        let normalized: String = kind
            .chars()
            .filter(|chr| !matches!(chr, '-' | '_' | ' '))
            .flat_map(char::to_lowercase)
            .collect();
        match normalized.as_str() {
            "" | "hasvalue" => Ok(Self::HasValue),
            "picklist" => Ok(Self::PickList),
            "pattern" => Ok(Self::Pattern),
            "minlength" => Ok(Self::MinLength),
            "maxlength" => Ok(Self::MaxLength),
            "lengthrange" => Ok(Self::LengthRange),
            "minimum" => Ok(Self::Minimum),
            "maximum" => Ok(Self::Maximum),
            _ => Err(Error::UnknownConstraintKind {
                kind: kind.to_owned(),
            }),
        }
    }
}

fn parse_length(value: &str) -> Result<Term, Error> {
    let length = value.trim().parse::<u64>().map_err(|_| Error::ValueParse {
        value: value.to_owned(),
        expected: "a non-negative integer",
    })?;
    Ok(Literal::new_typed_literal(length.to_string(), xsd::INTEGER).into())
}

fn is_decimal(value: &str) -> bool {
    let unsigned = value.strip_prefix(['+', '-']).unwrap_or(value);
    let (int_part, frac_part) = unsigned.split_once('.').unwrap_or((unsigned, ""));
    (!int_part.is_empty() || !frac_part.is_empty())
        && int_part.chars().all(|chr| chr.is_ascii_digit())
        && frac_part.chars().all(|chr| chr.is_ascii_digit())
}

/// An `xsd:integer` literal if possible, an `xsd:decimal` one otherwise.
fn parse_number(value: &str) -> Result<Term, Error> {
    let trimmed = value.trim();
    if let Ok(num) = trimmed.parse::<i64>() {
        Ok(Literal::from(num).into())
    } else if is_decimal(trimmed) {
        Ok(Literal::new_typed_literal(trimmed, xsd::DECIMAL).into())
    } else {
        Err(Error::ValueParse {
            value: value.to_owned(),
            expected: "a number",
        })
    }
}

fn incompatible(
    kind: ConstraintKind,
    kinds: &BTreeSet<NodeKind>,
    statement: &PropertyStatement,
) -> Error {
    Error::IncompatibleConstraint {
        constraint: format!("{kind:?}"),
        node_kinds: kinds
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", "),
        property: statement.properties.join(" | "),
    }
}

fn resolve(namespaces: &Namespaces, token: &str) -> Result<NamedNode, Error> {
    Ok(NamedNode::new_unchecked(namespaces.resolve(token)?.into_inner()))
}

/// Translates the value constraint(s) of `statement`
/// into SHACL constraint predicates and their objects.
/// Lists (for `sh:in`) are added to `graph` directly.
///
/// # Errors
///
/// - `Error::TypeConstraint` if the statement has no constraint values
/// - `Error::UnsupportedNodeKind` for unknown node types
/// - `Error::UnknownConstraintKind` for unknown constraint types
/// - `Error::IncompatibleConstraint` if the constraint type
///   can not be applied to the permitted node kinds
/// - `Error::ValueParse` if a length or number does not parse
/// - `Error::Resolve` if an IRI value can not be resolved
pub fn translate(
    graph: &mut ShaclGraph,
    namespaces: &Namespaces,
    statement: &PropertyStatement,
) -> Result<Vec<Constraint>, Error> {
    let values = &statement.value_constraints;
    let Some(first) = values.first() else {
        return Err(Error::TypeConstraint(format!(
            "No value constraints to translate (on property {})",
            statement.properties.join(" | ")
        )));
    };
    let kinds = parse_node_kinds(&statement.value_node_types)?;
    // several values always enumerate, whatever the tag says
    let kind = statement.value_constraint_type.parse::<ConstraintKind>();
    if values.len() > 1 || matches!(kind, Ok(ConstraintKind::PickList)) {
        let list_kind = if kinds.contains(&NodeKind::Literal) {
            ListKind::Literal
        } else if kinds.contains(&NodeKind::Iri) {
            ListKind::AnyUri
        } else {
            return Err(incompatible(ConstraintKind::PickList, &kinds, statement));
        };
        let items: Vec<ListItem> = values.iter().map(|value| value.as_str().into()).collect();
        let list = encode_list(graph, &items, list_kind, namespaces)?;
        return Ok(vec![(sh::IN, list.into())]);
    }

    let kind = kind?;
    let constraints = match kind {
        ConstraintKind::HasValue | ConstraintKind::PickList => {
            if kinds.contains(&NodeKind::Literal) {
                vec![(sh::HAS_VALUE, Literal::new_simple_literal(first).into())]
            } else if kinds.contains(&NodeKind::Iri) {
                vec![(sh::HAS_VALUE, resolve(namespaces, first)?.into())]
            } else {
                return Err(incompatible(kind, &kinds, statement));
            }
        }
        ConstraintKind::Pattern => {
            vec![(sh::PATTERN, Literal::new_simple_literal(first).into())]
        }
        ConstraintKind::MinLength => vec![(sh::MIN_LENGTH, parse_length(first)?)],
        ConstraintKind::MaxLength => vec![(sh::MAX_LENGTH, parse_length(first)?)],
        ConstraintKind::LengthRange => {
            let (min, max) =
                first
                    .split_once(RANGE_SEPARATOR)
                    .ok_or_else(|| Error::ValueParse {
                        value: first.clone(),
                        expected: "a length range (e.g. \"6..1024\")",
                    })?;
            vec![
                (sh::MIN_LENGTH, parse_length(min)?),
                (sh::MAX_LENGTH, parse_length(max)?),
            ]
        }
        ConstraintKind::Minimum => vec![(sh::MIN_INCLUSIVE, parse_number(first)?)],
        ConstraintKind::Maximum => vec![(sh::MAX_INCLUSIVE, parse_number(first)?)],
    };
    Ok(constraints)
}

/// Whether `statement` asserts the type of the instances of its shapes,
/// instead of describing a property.
#[must_use]
pub fn is_type_assertion(statement: &PropertyStatement) -> bool {
    matches!(
        statement.properties.as_slice(),
        [property] if property == TYPE_TOKEN || property == rdf::TYPE.as_str()
    )
}

/// Adds one `sh:class` constraint per shape and value of a type assertion,
/// returning the number of triples added.
///
/// # Errors
///
/// `Error::Resolve` if a shape or class can not be resolved.
pub fn assert_types(
    graph: &mut ShaclGraph,
    namespaces: &Namespaces,
    statement: &PropertyStatement,
) -> Result<usize, Error> {
    let classes = statement
        .value_constraints
        .iter()
        .map(|class| resolve(namespaces, class))
        .collect::<Result<Vec<_>, _>>()?;
    let mut added = 0;
    for shape in &statement.shapes {
        let shape = resolve(namespaces, shape)?;
        for class in &classes {
            if graph.insert(shape.clone(), sh::CLASS, class.clone()) {
                added += 1;
            }
        }
    }
    Ok(added)
}
