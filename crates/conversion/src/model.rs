// SPDX-FileCopyrightText: 2024 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

//! The in-memory application profile,
//! as produced by an (external) loader.
//!
//! Values are kept as they were written in the profile
//! (prefixed names, constraint- and node-type tags as text);
//! they get interpreted during conversion only.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use ap2shacl_iri::Namespaces;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::Error;

/// The metadata key holding the default language of the profile.
pub const META_LANGUAGE: &str = "language";

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TargetKind {
    Class,
    Node,
    SubjectsOf,
    ObjectsOf,
}

impl TargetKind {
    /// Parses a target type as written in the profile,
    /// e.g. `"class"` or `"ObjectsOf"` (case-insensitive).
    ///
    /// # Errors
    ///
    /// `Error::UnknownTargetKind` if `kind` is none of
    /// `class`, `node`, `subjectsOf` or `objectsOf`.
    pub fn parse(kind: &str, target: &str) -> Result<Self, Error> {
        kind.parse().map_err(|()| Error::UnknownTargetKind {
            kind: kind.to_owned(),
            target: target.to_owned(),
        })
    }
}

impl FromStr for TargetKind {
    type Err = ();

    fn from_str(kind: &str) -> Result<Self, Self::Err> {
        match kind.to_lowercase().as_str() {
            "class" => Ok(Self::Class),
            "node" => Ok(Self::Node),
            "subjectsof" => Ok(Self::SubjectsOf),
            "objectsof" => Ok(Self::ObjectsOf),
            _ => Err(()),
        }
    }
}

impl fmt::Display for TargetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Class => "class",
            Self::Node => "node",
            Self::SubjectsOf => "subjectsOf",
            Self::ObjectsOf => "objectsOf",
        };
        f.write_str(name)
    }
}

/// What a node shape applies to.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Target {
    /// The (not yet resolved) identifier of the class, node or property.
    pub target: String,
    pub kind: TargetKind,
}

impl Target {
    #[must_use]
    pub fn new<S: Into<String>>(kind: TargetKind, target: S) -> Self {
        Self {
            target: target.into(),
            kind,
        }
    }
}

/// Metadata of one shape of the profile.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ShapeInfo {
    pub label: Option<String>,
    pub description: Option<String>,
    pub targets: Vec<Target>,
    /// `None` leaves `sh:closed` out entirely.
    pub closed: Option<bool>,
    /// Properties permitted on a closed shape,
    /// in addition to those of its property shapes.
    pub ignore_props: Vec<String>,
    pub severity: Option<String>,
}

/// One constraint rule of the profile,
/// about the values of one (or alternatively several) properties
/// of one or more shapes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PropertyStatement {
    /// An explicit identifier for the generated property shape;
    /// synthesized from shape and label if `None`.
    pub id: Option<String>,
    /// The shapes this statement belongs to.
    pub shapes: Vec<String>,
    /// The property paths.
    /// More then one means: the value may appear under any of them.
    pub properties: Vec<String>,
    /// Display labels, keyed by language tag.
    pub labels: BTreeMap<String, String>,
    /// Any of `iri`, `bnode`, `literal`.
    pub value_node_types: Vec<String>,
    pub value_data_types: Vec<String>,
    /// E.g. `pickList`, `pattern`, `minLength`, `lengthRange`,
    /// or empty for a plain "has value" constraint.
    pub value_constraint_type: String,
    pub value_constraints: Vec<String>,
    /// Shapes that the values themselves must conform to.
    pub value_shapes: Vec<String>,
    pub mandatory: bool,
    pub repeatable: bool,
    pub severity: Option<String>,
}

impl PropertyStatement {
    pub fn add_shape<S: Into<String>>(&mut self, shape: S) -> &mut Self {
        self.shapes.push(shape.into());
        self
    }

    pub fn add_property<S: Into<String>>(&mut self, property: S) -> &mut Self {
        self.properties.push(property.into());
        self
    }

    pub fn add_label<L: Into<String>, S: Into<String>>(&mut self, lang: L, label: S) -> &mut Self {
        self.labels.insert(lang.into(), label.into());
        self
    }

    pub fn add_value_node_type<S: Into<String>>(&mut self, node_type: S) -> &mut Self {
        self.value_node_types.push(node_type.into());
        self
    }

    pub fn add_value_data_type<S: Into<String>>(&mut self, data_type: S) -> &mut Self {
        self.value_data_types.push(data_type.into());
        self
    }

    pub fn add_value_constraint<S: Into<String>>(&mut self, constraint: S) -> &mut Self {
        self.value_constraints.push(constraint.into());
        self
    }

    pub fn add_value_shape<S: Into<String>>(&mut self, shape: S) -> &mut Self {
        self.value_shapes.push(shape.into());
        self
    }
}

/// A complete application profile.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ApplicationProfile {
    pub namespaces: Namespaces,
    /// Free-form metadata, e.g. `dct:title`
    /// or [`META_LANGUAGE`].
    pub metadata: BTreeMap<String, String>,
    /// Keyed by the (not yet resolved) shape identifier.
    pub shape_info: BTreeMap<String, ShapeInfo>,
    pub property_statements: Vec<PropertyStatement>,
}

impl ApplicationProfile {
    /// The language declared in the profile metadata, if any.
    #[must_use]
    pub fn language(&self) -> Option<&str> {
        self.metadata
            .get(META_LANGUAGE)
            .map(String::as_str)
            .filter(|lang| !lang.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_kind_parsing() {
        assert_eq!("class".parse::<TargetKind>(), Ok(TargetKind::Class));
        assert_eq!("Node".parse::<TargetKind>(), Ok(TargetKind::Node));
        assert_eq!("subjectsOf".parse::<TargetKind>(), Ok(TargetKind::SubjectsOf));
        assert_eq!("ObjectsOf".parse::<TargetKind>(), Ok(TargetKind::ObjectsOf));
        assert!(matches!(
            TargetKind::parse("instancesOf", "schema:Person"),
            Err(Error::UnknownTargetKind { ref kind, .. }) if kind == "instancesOf"
        ));
    }

    #[test]
    fn target_kind_display_parses_back() {
        for kind in [
            TargetKind::Class,
            TargetKind::Node,
            TargetKind::SubjectsOf,
            TargetKind::ObjectsOf,
        ] {
            assert_eq!(kind.to_string().parse::<TargetKind>(), Ok(kind));
        }
    }

    #[test]
    fn statement_builder() {
        let mut ps = PropertyStatement::default();
        ps.add_shape("#Person")
            .add_property("schema:name")
            .add_label("en", "Name")
            .add_value_node_type("literal")
            .add_value_data_type("xsd:string")
            .add_value_constraint("2");
        assert_eq!(ps.shapes, ["#Person"]);
        assert_eq!(ps.properties, ["schema:name"]);
        assert_eq!(ps.labels.get("en").map(String::as_str), Some("Name"));
        assert_eq!(ps.value_node_types, ["literal"]);
        assert_eq!(ps.value_data_types, ["xsd:string"]);
        assert_eq!(ps.value_constraints, ["2"]);
        assert!(!ps.mandatory);
        assert!(!ps.repeatable);
    }

    #[test]
    fn profile_language() {
        let mut ap = ApplicationProfile::default();
        assert_eq!(ap.language(), None);
        ap.metadata.insert(META_LANGUAGE.to_owned(), String::new());
        assert_eq!(ap.language(), None);
        ap.metadata.insert(META_LANGUAGE.to_owned(), "de".to_owned());
        assert_eq!(ap.language(), Some("de"));
    }
}
