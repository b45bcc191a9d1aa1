// SPDX-FileCopyrightText: 2024 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Synthesizes local names for generated property shapes,
//! e.g. `personName` for the statement labeled "Name" on shape `#Person`.

use ap2shacl_iri::encode_local;
use uuid::Uuid;

use crate::PropertyStatement;

/// Stands in for the shape part of the name
/// of statements that do not belong to any shape.
pub const NO_SHAPE_MARKER: &str = "_";
/// Languages whose label is used for the name, in order of preference;
/// if none of them is available, the first label (by language tag) is used.
pub const PREFERRED_LANGUAGES: [&str; 2] = ["en", "en-US"];
/// Appended to the names of the shapes generated for alternative properties.
pub const ALTERNATIVE_SUFFIX: &str = "_opt";

/// The shape part of the name: the first shape, lower-cased.
fn shape_component(statement: &PropertyStatement) -> String {
    statement.shapes.first().map_or_else(
        || NO_SHAPE_MARKER.to_owned(),
        |shape| encode_local(&shape.replace(['#', ' '], "")).to_lowercase(),
    )
}

fn preferred_label(statement: &PropertyStatement) -> Option<&str> {
    PREFERRED_LANGUAGES
        .iter()
        .find_map(|lang| statement.labels.get(*lang))
        .or_else(|| statement.labels.values().next())
        .map(String::as_str)
        .filter(|label| !label.is_empty())
}

fn upper_first(text: &str) -> String {
    let mut chars = text.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

/// The local name of the property shape generated for `statement`.
///
/// This is deterministic if the statement has a label;
/// without labels, a random (UUID) suffix is used instead,
/// so every call yields a different name.
#[must_use]
pub fn property_shape_name(statement: &PropertyStatement) -> String {
    let shape = shape_component(statement);
    preferred_label(statement).map_or_else(
        || format!("{shape}{}", Uuid::new_v4()),
        |label| {
            let label = upper_first(label).replace(' ', "");
            format!("{shape}{}", encode_local(&label))
        },
    )
}

/// The local name of the shape for one of several alternative properties,
/// e.g. `personContact_schema_email_opt`
/// for the property `schema:email` of the statement named `personContact`.
#[must_use]
pub fn alternative_shape_name(statement_name: &str, property: &str) -> String {
    let property = encode_local(&property.replace('#', "").replace(':', "_"));
    format!("{statement_name}_{property}{ALTERNATIVE_SUFFIX}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_preference() {
        let mut ps = PropertyStatement::default();
        ps.add_label("fr", "Coleur");
        assert_eq!(property_shape_name(&ps), "_Coleur");
        ps.add_label("en-US", "Color Property");
        assert_eq!(property_shape_name(&ps), "_ColorProperty");
        ps.add_label("en", "Colour Property");
        assert_eq!(property_shape_name(&ps), "_ColourProperty");
    }

    #[test]
    fn shape_prefix() {
        let mut ps = PropertyStatement::default();
        ps.add_shape("#Person").add_shape("#Agent").add_label("en", "name");
        assert_eq!(property_shape_name(&ps), "personName");

        let mut ps = PropertyStatement::default();
        ps.add_shape("Postal Address").add_label("en", "Email Length");
        assert_eq!(property_shape_name(&ps), "postaladdressEmailLength");
    }

    #[test]
    fn deterministic_with_en_label() {
        let mut ps = PropertyStatement::default();
        ps.add_shape("#Person").add_label("en", "Given name");
        let name = property_shape_name(&ps);
        assert_eq!(name, "personGivenname");
        ps.add_label("de", "Vorname").add_label("es", "Nombre");
        assert_eq!(property_shape_name(&ps), name);
    }

    #[test]
    fn encodes_unsafe_label_chars() {
        let mut ps = PropertyStatement::default();
        ps.add_shape("#Book").add_label("en", "ISBN/EAN?");
        assert_eq!(property_shape_name(&ps), "bookISBN/EAN%3F");
        let mut ps = PropertyStatement::default();
        ps.add_label("de", "größe");
        assert_eq!(property_shape_name(&ps), "_Gr%C3%B6%C3%9Fe");
    }

    #[test]
    fn unlabeled_names_never_collide() {
        let mut ps = PropertyStatement::default();
        ps.add_shape("#Person");
        let first = property_shape_name(&ps);
        let second = property_shape_name(&ps);
        assert_ne!(first, second);
        assert!(first.starts_with("person"));
        assert!(second.starts_with("person"));
    }

    #[test]
    fn empty_label_counts_as_missing() {
        let mut ps = PropertyStatement::default();
        ps.add_label("en", "");
        let first = property_shape_name(&ps);
        assert!(first.starts_with(NO_SHAPE_MARKER));
        assert_ne!(first, property_shape_name(&ps));
    }

    #[test]
    fn alternative_names() {
        assert_eq!(
            alternative_shape_name("personContact", "schema:email"),
            "personContact_schema_email_opt"
        );
        assert_eq!(
            alternative_shape_name("personContact", "http://xmlns.com/foaf/0.1/#mbox"),
            "personContact_http_//xmlns.com/foaf/0.1/mbox_opt"
        );
    }
}
