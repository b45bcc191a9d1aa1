// SPDX-FileCopyrightText: 2024 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::borrow::Cow;

use ap2shacl_iri::{Namespaces, BASE_KEY};
use ap2shacl_vocab::{basics, sh};
use oxrdf::vocab::{rdf, xsd};
use oxrdf::{Literal, NamedNode, NamedNodeRef, Term};

use crate::constraint::{self, NodeKind, Severity};
use crate::list::{encode_list, ListItem, ListKind};
use crate::naming::{alternative_shape_name, property_shape_name};
use crate::{
    ApplicationProfile, Config, Error, PropertyStatement, ShaclGraph, ShapeInfo, TargetKind,
};

const fn target_predicate(kind: TargetKind) -> NamedNodeRef<'static> {
    match kind {
        TargetKind::Class => sh::TARGET_CLASS,
        TargetKind::Node => sh::TARGET_NODE,
        TargetKind::SubjectsOf => sh::TARGET_SUBJECTS_OF,
        TargetKind::ObjectsOf => sh::TARGET_OBJECTS_OF,
    }
}

fn count_one() -> Term {
    Literal::new_typed_literal("1", xsd::INTEGER).into()
}

fn lang_literal(value: &str, lang: &str) -> Result<Literal, Error> {
    if lang.is_empty() {
        return Ok(Literal::new_simple_literal(value));
    }
    Literal::new_language_tagged_literal(value, lang).map_err(|source| {
        Error::InvalidLanguageTag {
            tag: lang.to_owned(),
            source,
        }
    })
}

/// Builds the SHACL graph for one application profile.
///
/// Conversion runs in three passes over the profile:
/// namespaces, shapes, and finally property statements.
/// The first error aborts the whole conversion.
pub struct Converter<'a> {
    profile: &'a ApplicationProfile,
    config: &'a Config,
    /// The namespace table used for resolving,
    /// which always has a base.
    namespaces: Cow<'a, Namespaces>,
    graph: ShaclGraph,
}

impl<'a> Converter<'a> {
    #[must_use]
    pub fn new(profile: &'a ApplicationProfile, config: &'a Config) -> Self {
        let namespaces = if profile.namespaces.contains_prefix(BASE_KEY) {
            Cow::Borrowed(&profile.namespaces)
        } else {
            let base = profile
                .namespaces
                .iter()
                .find(|(prefix, _)| prefix.eq_ignore_ascii_case(BASE_KEY))
                .map_or(config.default_base.as_str(), |(_, iri)| iri);
            let mut namespaces = profile.namespaces.clone();
            namespaces.insert(BASE_KEY, base);
            Cow::Owned(namespaces)
        };
        Self {
            profile,
            config,
            namespaces,
            graph: ShaclGraph::new(),
        }
    }

    fn resolve(&self, token: &str) -> Result<NamedNode, Error> {
        Ok(NamedNode::new_unchecked(self.namespaces.resolve(token)?.into_inner()))
    }

    fn language(&self) -> &str {
        self.profile
            .language()
            .unwrap_or(self.config.default_language.as_str())
    }

    /// Runs all passes, and returns the finished graph.
    ///
    /// # Errors
    ///
    /// Whatever error the first failing pass produced.
    pub fn convert(mut self) -> Result<ShaclGraph, Error> {
        self.convert_namespaces()?;
        self.convert_shapes()?;
        self.convert_property_statements()?;
        tracing::info!(
            "Converted {} shapes and {} property statements into {} triples",
            self.profile.shape_info.len(),
            self.profile.property_statements.len(),
            self.graph.len()
        );
        Ok(self.graph)
    }

    /// Binds the namespaces of the profile to the graph,
    /// and sets its base.
    ///
    /// # Errors
    ///
    /// - `Error::Resolve` if a namespace IRI is not an absolute IRI
    /// - `Error::InvalidPrefix` if a prefix can not be used as a prefix name
    pub fn convert_namespaces(&mut self) -> Result<(), Error> {
        for prefix in self.profile.namespaces.prefixes()? {
            if prefix.is_base() {
                self.graph.set_base(prefix.iri.as_str());
            }
            self.graph.bind_prefix(prefix)?;
        }
        if self.graph.base().is_none() {
            self.graph.set_base(self.namespaces.base());
        }
        if self.config.bind_standard_prefixes {
            for (prefix, iri) in [
                (sh::NS_PREFERRED_PREFIX, sh::NS_BASE),
                (basics::NS_PREFERRED_PREFIX_RDF, basics::NS_BASE_RDF),
                (basics::NS_PREFERRED_PREFIX_XSD, basics::NS_BASE_XSD),
            ] {
                if self.graph.prefix(prefix).is_none() && !self.graph.is_namespace_bound(iri) {
                    self.graph.bind(prefix, iri)?;
                }
            }
        }
        Ok(())
    }

    /// Adds one node shape per shape of the profile.
    ///
    /// # Errors
    ///
    /// - `Error::Resolve` if an identifier can not be resolved
    /// - `Error::InvalidLanguageTag` if the profile language is not a valid tag
    /// - `Error::UnknownSeverity` for an unknown shape severity
    pub fn convert_shapes(&mut self) -> Result<(), Error> {
        let profile = self.profile;
        for (shape, info) in &profile.shape_info {
            tracing::debug!("Converting shape '{shape}' ...");
            self.convert_shape(shape, info)?;
        }
        Ok(())
    }

    fn convert_shape(&mut self, shape: &str, info: &ShapeInfo) -> Result<(), Error> {
        let shape_iri = self.resolve(shape)?;
        let lang = self.language().to_owned();
        self.graph.insert(shape_iri.clone(), rdf::TYPE, sh::NODE_SHAPE);
        if let Some(label) = info.label.as_deref().filter(|label| !label.is_empty()) {
            self.graph.insert(shape_iri.clone(), sh::NAME, lang_literal(label, &lang)?);
        }
        if let Some(description) = info.description.as_deref().filter(|desc| !desc.is_empty()) {
            self.graph.insert(
                shape_iri.clone(),
                sh::DESCRIPTION,
                lang_literal(description, &lang)?,
            );
        }
        for target in &info.targets {
            if target.target.is_empty() {
                tracing::warn!(
                    "Ignoring {} target without identifier on shape '{shape}'",
                    target.kind
                );
                continue;
            }
            let target_iri = self.resolve(&target.target)?;
            self.graph.insert(shape_iri.clone(), target_predicate(target.kind), target_iri);
        }
        if let Some(closed) = info.closed {
            self.graph.insert(shape_iri.clone(), sh::CLOSED, basics::rdf_bool(closed));
        }
        match info.ignore_props.as_slice() {
            [] => {}
            [single] => {
                let ignored = self.resolve(single)?;
                self.graph.insert(shape_iri.clone(), sh::IGNORED_PROPERTIES, ignored);
            }
            several => {
                let items: Vec<ListItem> = several
                    .iter()
                    .map(|prop| self.resolve(prop).map(ListItem::from))
                    .collect::<Result<_, _>>()?;
                let list =
                    encode_list(&mut self.graph, &items, ListKind::Resolved, &self.namespaces)?;
                self.graph.insert(shape_iri.clone(), sh::IGNORED_PROPERTIES, list);
            }
        }
        if let Some(severity) = Severity::parse_opt(info.severity.as_deref())? {
            self.graph.insert(shape_iri, sh::SEVERITY, severity.term());
        }
        Ok(())
    }

    /// Adds the property shapes (or class constraints)
    /// of all the property statements of the profile.
    ///
    /// # Errors
    ///
    /// The first error of any of the statements,
    /// see [`constraint::translate`] for the constraint related ones.
    pub fn convert_property_statements(&mut self) -> Result<(), Error> {
        let profile = self.profile;
        for statement in &profile.property_statements {
            tracing::debug!(
                "Converting property statement on [{}] about [{}] ...",
                statement.shapes.join(", "),
                statement.properties.join(", ")
            );
            if statement.properties.len() > 1 {
                self.convert_alternatives(statement)?;
            } else if constraint::is_type_assertion(statement) {
                if statement.value_constraints.is_empty() {
                    tracing::warn!(
                        "Type assertion on [{}] without any class; nothing to add",
                        statement.shapes.join(", ")
                    );
                }
                constraint::assert_types(&mut self.graph, &self.namespaces, statement)?;
            } else {
                self.convert_statement(statement)?;
            }
        }
        Ok(())
    }

    fn statement_name(statement: &PropertyStatement) -> String {
        statement
            .id
            .clone()
            .filter(|id| !id.is_empty())
            .unwrap_or_else(|| property_shape_name(statement))
    }

    fn add_cardinality(&mut self, shape: &NamedNode, statement: &PropertyStatement) {
        if statement.mandatory {
            self.graph.insert(shape.clone(), sh::MIN_COUNT, count_one());
        }
        if !statement.repeatable {
            self.graph.insert(shape.clone(), sh::MAX_COUNT, count_one());
        }
    }

    /// One property shape per alternative property,
    /// joined with `sh:or` on each of the owning shapes.
    fn convert_alternatives(&mut self, statement: &PropertyStatement) -> Result<(), Error> {
        let severity = Severity::parse_opt(statement.severity.as_deref())?;
        let name = Self::statement_name(statement);
        let mut alternatives = Vec::with_capacity(statement.properties.len());
        for property in &statement.properties {
            let alternative = self.resolve(&alternative_shape_name(&name, property))?;
            let path = self.resolve(property)?;
            self.graph.insert(alternative.clone(), rdf::TYPE, sh::PROPERTY_SHAPE);
            self.graph.insert(alternative.clone(), sh::PATH, path);
            self.add_cardinality(&alternative, statement);
            if let Some(severity) = severity {
                self.graph.insert(alternative.clone(), sh::SEVERITY, severity.term());
            }
            alternatives.push(ListItem::from(alternative));
        }
        let list = encode_list(
            &mut self.graph,
            &alternatives,
            ListKind::Resolved,
            &self.namespaces,
        )?;
        for shape in &statement.shapes {
            let shape_iri = self.resolve(shape)?;
            self.graph.insert(shape_iri, sh::OR, list.clone());
        }
        Ok(())
    }

    fn convert_statement(&mut self, statement: &PropertyStatement) -> Result<(), Error> {
        let severity = Severity::parse_opt(statement.severity.as_deref())?;
        let prop_shape = self.resolve(&Self::statement_name(statement))?;
        for shape in &statement.shapes {
            let shape_iri = self.resolve(shape)?;
            self.graph.insert(shape_iri, sh::PROPERTY, prop_shape.clone());
        }
        self.graph.insert(prop_shape.clone(), rdf::TYPE, sh::PROPERTY_SHAPE);
        for (lang, label) in &statement.labels {
            self.graph.insert(prop_shape.clone(), sh::NAME, lang_literal(label, lang)?);
        }
        for property in &statement.properties {
            let path = self.resolve(property)?;
            self.graph.insert(prop_shape.clone(), sh::PATH, path);
        }
        if let Some(severity) = severity {
            self.graph.insert(prop_shape.clone(), sh::SEVERITY, severity.term());
        }
        if !statement.value_node_types.is_empty() {
            let kinds = constraint::parse_node_kinds(&statement.value_node_types)?;
            if let Some(node_kind) = constraint::node_kind_term(&kinds)? {
                self.graph.insert(prop_shape.clone(), sh::NODE_KIND, node_kind);
            }
            if kinds.contains(&NodeKind::Literal) && !statement.value_shapes.is_empty() {
                tracing::warn!(
                    "Literal values can not conform to a node shape (property shape <{}>)",
                    prop_shape.as_str()
                );
            }
        }
        for data_type in &statement.value_data_types {
            let data_type_iri = self.resolve(data_type)?;
            self.graph.insert(prop_shape.clone(), sh::DATA_TYPE, data_type_iri);
        }
        if !statement.value_constraints.is_empty() {
            let constraints = constraint::translate(&mut self.graph, &self.namespaces, statement)?;
            for (predicate, object) in constraints {
                self.graph.insert(prop_shape.clone(), predicate, object);
            }
        }
        for value_shape in &statement.value_shapes {
            let value_shape_iri = self.resolve(value_shape)?;
            self.graph.insert(prop_shape.clone(), sh::NODE, value_shape_iri);
        }
        self.add_cardinality(&prop_shape, statement);
        Ok(())
    }
}

/// Converts `profile` into a SHACL shapes graph.
///
/// # Errors
///
/// See [`Converter::convert`].
pub fn convert(profile: &ApplicationProfile, config: &Config) -> Result<ShaclGraph, Error> {
    Converter::new(profile, config).convert()
}
