//! Reading RDF documents into statements.
//!
//! The diagram code only needs an ordered statement set and the namespaces
//! the document declared; [`RdfParser`] is the seam to whatever library
//! provides them. [`rio_parser::RioParser`] is the implementation used by the
//! binary.

pub mod rio_parser;
pub mod statements;

use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

use crate::error::ParseError;

pub use rio_parser::RioParser;
pub use statements::StatementStore;

/// Supported input serializations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RdfFormat {
    RdfXml,
    NTriples,
    Turtle,
    /// RSS 1.0 feed, read as RDF/XML.
    RssTagSoup,
}

impl RdfFormat {
    pub const NAMES: [&'static str; 4] = ["rdfxml", "ntriples", "turtle", "rss-tag-soup"];

    pub fn name(self) -> &'static str {
        match self {
            RdfFormat::RdfXml => "rdfxml",
            RdfFormat::NTriples => "ntriples",
            RdfFormat::Turtle => "turtle",
            RdfFormat::RssTagSoup => "rss-tag-soup",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "rdfxml" => Some(RdfFormat::RdfXml),
            "ntriples" => Some(RdfFormat::NTriples),
            "turtle" => Some(RdfFormat::Turtle),
            "rss-tag-soup" => Some(RdfFormat::RssTagSoup),
            _ => None,
        }
    }

    /// Guess the format from the file extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "rdf" | "owl" => Some(RdfFormat::RdfXml),
            "nt" => Some(RdfFormat::NTriples),
            "ttl" => Some(RdfFormat::Turtle),
            "rss" => Some(RdfFormat::RssTagSoup),
            _ => None,
        }
    }
}

impl fmt::Display for RdfFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Source of statements for one document at a time.
pub trait RdfParser {
    /// Parse `path` as `format`, adding statements to `store` until the
    /// document ends or the store is full.
    fn parse_into(
        &mut self,
        path: &Path,
        format: RdfFormat,
        store: &mut StatementStore,
    ) -> Result<(), ParseError>;

    /// Prefix bindings declared by the last parsed document. The empty
    /// prefix stands for the document's default namespace.
    fn namespaces_seen(&self) -> BTreeMap<String, String>;
}
