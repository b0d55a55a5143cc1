//! [`RdfParser`] backed by the `rio` streaming parsers.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::{Path, PathBuf};

use oxiri::Iri;
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader as XmlReader;
use rio_api::model::{Literal as RioLiteral, Subject, Term as RioTerm, Triple as RioTriple};
use rio_api::parser::TriplesParser;
use rio_turtle::{NTriplesParser, TurtleParser};
use rio_xml::RdfXmlParser;
use tracing::{debug, warn};

use super::{RdfFormat, RdfParser, StatementStore};
use crate::error::ParseError;
use crate::model::term::{Literal, Term, Triple};

/// Characters that need percent-encoding in a `file:` IRI path.
/// `/` is kept so the path structure survives.
const FILE_PATH_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'[')
    .add(b']')
    .add(b'\\')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

/// Base IRI for relative references in a local document.
pub fn file_base_iri(path: &Path) -> Result<Iri<String>, ParseError> {
    let absolute: PathBuf = match path.canonicalize() {
        Ok(p) => p,
        Err(_) if path.is_absolute() => path.to_path_buf(),
        Err(_) => std::env::current_dir()?.join(path),
    };
    let text = absolute.to_string_lossy().replace('\\', "/");
    let encoded = utf8_percent_encode(&text, FILE_PATH_ENCODE_SET);
    let iri = if text.starts_with('/') {
        format!("file://{encoded}")
    } else {
        format!("file:///{encoded}")
    };
    Iri::parse(iri)
        .map_err(|e| ParseError::Init(format!("invalid base IRI for {}: {e}", path.display())))
}

/// Parses Turtle and N-Triples with `rio_turtle`, RDF/XML and RSS 1.0 with
/// `rio_xml`. Namespaces come from Turtle `@prefix` directives and from the
/// `xmlns` attributes of RDF/XML documents.
#[derive(Debug, Default)]
pub struct RioParser {
    namespaces: BTreeMap<String, String>,
}

impl RioParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse from any buffered reader.
    pub fn parse_reader<R: BufRead>(
        &mut self,
        mut reader: R,
        base_iri: Option<Iri<String>>,
        format: RdfFormat,
        store: &mut StatementStore,
    ) -> Result<(), ParseError> {
        self.namespaces.clear();
        match format {
            RdfFormat::Turtle => {
                let mut parser = TurtleParser::new(reader, base_iri);
                drain(&mut parser, store)?;
                self.namespaces = parser
                    .prefixes()
                    .iter()
                    .map(|(prefix, uri)| (prefix.clone(), uri.clone()))
                    .collect();
            }
            RdfFormat::NTriples => {
                drain(&mut NTriplesParser::new(reader), store)?;
            }
            RdfFormat::RdfXml | RdfFormat::RssTagSoup => {
                // rio_xml keeps its namespace scopes private, so scan them first.
                let mut document = Vec::new();
                reader.read_to_end(&mut document)?;
                self.namespaces = xml_namespaces(&document);
                drain(&mut RdfXmlParser::new(document.as_slice(), base_iri), store)?;
            }
        }
        Ok(())
    }
}

impl RdfParser for RioParser {
    fn parse_into(
        &mut self,
        path: &Path,
        format: RdfFormat,
        store: &mut StatementStore,
    ) -> Result<(), ParseError> {
        let base_iri = file_base_iri(path)?;
        let file = File::open(path)?;
        self.parse_reader(BufReader::new(file), Some(base_iri), format, store)
    }

    fn namespaces_seen(&self) -> BTreeMap<String, String> {
        self.namespaces.clone()
    }
}

/// Feed statements into `store` step by step, stopping early once it is full.
fn drain<P>(parser: &mut P, store: &mut StatementStore) -> Result<(), ParseError>
where
    P: TriplesParser,
    ParseError: From<P::Error>,
{
    while !parser.is_end() && !store.is_full() {
        parser.parse_step(&mut |t| {
            if store.is_full() {
                return Ok(());
            }
            let triple = convert_triple(t);
            debug!("statement {}: {triple}", store.len() + 1);
            match store.add(triple) {
                Err(e) if e.is_recoverable() => {
                    warn!("{e}");
                    Ok(())
                }
                other => other,
            }
        })?;
    }
    Ok(())
}

/// `xmlns` declarations anywhere in an XML document. The first binding of a
/// prefix wins and the default namespace is reported under the empty prefix.
/// Malformed XML ends the scan; the RDF/XML parser reports the error.
fn xml_namespaces(document: &[u8]) -> BTreeMap<String, String> {
    let mut namespaces = BTreeMap::new();
    let mut reader = XmlReader::from_reader(document);
    let mut buf = Vec::new();
    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) | Ok(Event::Empty(ref e)) => {
                collect_namespaces(e, &mut namespaces)
            }
            Ok(Event::Eof) | Err(_) => break,
            _ => {}
        }
        buf.clear();
    }
    namespaces
}

fn collect_namespaces(e: &BytesStart<'_>, namespaces: &mut BTreeMap<String, String>) {
    for attr in e.attributes().flatten() {
        let key = String::from_utf8_lossy(attr.key.as_ref());
        let prefix = if key == "xmlns" {
            ""
        } else if let Some(prefix) = key.strip_prefix("xmlns:") {
            prefix
        } else {
            continue;
        };
        namespaces
            .entry(prefix.to_string())
            .or_insert_with(|| String::from_utf8_lossy(&attr.value).into_owned());
    }
}

fn convert_triple(t: RioTriple<'_>) -> Triple {
    let subject = match t.subject {
        Subject::NamedNode(n) => Term::resource(n.iri),
        Subject::BlankNode(b) => Term::blank(b.id),
        // Quoted triples have no diagram counterpart; keep their text.
        other => Term::resource(other.to_string()),
    };
    let object = match t.object {
        RioTerm::NamedNode(n) => Term::resource(n.iri),
        RioTerm::BlankNode(b) => Term::blank(b.id),
        RioTerm::Literal(RioLiteral::Simple { value }) => Term::Literal(Literal::simple(value)),
        RioTerm::Literal(RioLiteral::LanguageTaggedString { value, language }) => {
            Term::Literal(Literal::lang(value, language))
        }
        RioTerm::Literal(RioLiteral::Typed { value, datatype }) => {
            Term::Literal(Literal::typed(value, datatype.iri))
        }
        other => Term::resource(other.to_string()),
    };
    Triple::new(subject, Term::resource(t.predicate.iri), object)
}
