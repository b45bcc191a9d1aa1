// SPDX-FileCopyrightText: 2024 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

use ap2shacl_iri::DEFAULT_BASE;

pub const DEFAULT_LANGUAGE: &str = "en";

#[derive(Clone, Debug)]
pub struct Config {
    /**
     * The language tag of shape names and descriptions,
     * used if the profile metadata does not declare a `"language"`.
     */
    pub default_language: String,
    /**
     * The base IRI of the output graph,
     * used if the namespace table has no `"base"` entry.
     */
    pub default_base: String,
    /**
     * Whether to also bind the `sh`, `rdf` and `xsd` prefixes,
     * if the namespace table does not bind them already.
     */
    pub bind_standard_prefixes: bool,
    /**
     * The text to insert on top of textual dumps of the graph,
     * as a comment.
     */
    pub header: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_language: DEFAULT_LANGUAGE.to_owned(),
            default_base: DEFAULT_BASE.to_owned(),
            bind_standard_prefixes: true,
            header: Some(format!(
                "SHACL generated by {} {}",
                env!("CARGO_PKG_NAME"),
                crate::VERSION
            )),
        }
    }
}
