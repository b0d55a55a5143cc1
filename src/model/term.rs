//! Statement terms and their classification for display.

use std::fmt;

use super::namespace::NamespaceTable;
use super::ontology::{standard, BLANK_NODE_PREFIX, TYPE_SYMBOL};

/// A literal value with its optional language tag and datatype IRI.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Literal {
    pub value: String,
    pub language: Option<String>,
    pub datatype: Option<String>,
}

impl Literal {
    pub fn simple(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            language: None,
            datatype: None,
        }
    }

    pub fn lang(value: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            language: Some(language.into()),
            datatype: None,
        }
    }

    pub fn typed(value: impl Into<String>, datatype: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            language: None,
            datatype: Some(datatype.into()),
        }
    }
}

/// One position of a statement.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Term {
    /// Full IRI.
    Resource(String),
    /// Document-scoped identifier, without the `_:` marker.
    BlankNode(String),
    Literal(Literal),
}

impl Term {
    pub fn resource(iri: impl Into<String>) -> Self {
        Term::Resource(iri.into())
    }

    pub fn blank(id: impl Into<String>) -> Self {
        Term::BlankNode(id.into())
    }

    pub fn is_literal(&self) -> bool {
        matches!(self, Term::Literal(_))
    }

    /// Raw text of the term: IRI, blank node id or lexical value.
    pub fn text(&self) -> &str {
        match self {
            Term::Resource(iri) => iri,
            Term::BlankNode(id) => id,
            Term::Literal(lit) => &lit.value,
        }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Resource(iri) => write!(f, "<{iri}>"),
            Term::BlankNode(id) => write!(f, "{BLANK_NODE_PREFIX}{id}"),
            Term::Literal(lit) => {
                write!(f, "\"{}\"", lit.value)?;
                if let Some(lang) = &lit.language {
                    write!(f, "@{lang}")?;
                }
                if let Some(dt) = &lit.datatype {
                    write!(f, "^^<{dt}>")?;
                }
                Ok(())
            }
        }
    }
}

/// An RDF statement as produced by the parser adapter.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Triple {
    pub subject: Term,
    pub predicate: Term,
    pub object: Term,
}

impl Triple {
    pub fn new(subject: Term, predicate: Term, object: Term) -> Self {
        Self {
            subject,
            predicate,
            object,
        }
    }

    /// Whether the predicate is `rdf:type`.
    pub fn is_type_statement(&self) -> bool {
        matches!(&self.predicate, Term::Resource(iri) if iri == standard::RDF_TYPE)
    }
}

impl fmt::Display for Triple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} .", self.subject, self.predicate, self.object)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TermKind {
    Resource,
    BlankNode,
    Literal,
}

/// A term reduced to what the diagram needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedTerm {
    pub display: String,
    pub kind: TermKind,
    pub language: Option<String>,
    pub datatype: Option<String>,
}

impl ClassifiedTerm {
    pub fn is_literal(&self) -> bool {
        self.kind == TermKind::Literal
    }

    pub fn is_blank(&self) -> bool {
        self.kind == TermKind::BlankNode
    }
}

/// Shorten a term against `table`; blank nodes get the `_:` marker.
///
/// Literal text goes through the resolver as well, so a literal spelling out
/// a known namespace IRI is displayed in prefixed form.
pub fn classify(term: &Term, table: &NamespaceTable) -> ClassifiedTerm {
    let shortened = table.shorten(term.text());
    match term {
        Term::Resource(_) => ClassifiedTerm {
            display: shortened,
            kind: TermKind::Resource,
            language: None,
            datatype: None,
        },
        Term::BlankNode(_) => ClassifiedTerm {
            display: format!("{BLANK_NODE_PREFIX}{shortened}"),
            kind: TermKind::BlankNode,
            language: None,
            datatype: None,
        },
        Term::Literal(lit) => ClassifiedTerm {
            display: shortened,
            kind: TermKind::Literal,
            language: lit.language.clone(),
            datatype: lit.datatype.clone(),
        },
    }
}

/// Like [`classify`], but `rdf:type` becomes `a`.
pub fn classify_predicate(term: &Term, table: &NamespaceTable) -> ClassifiedTerm {
    let mut classified = classify(term, table);
    if matches!(term, Term::Resource(iri) if iri == standard::RDF_TYPE) {
        classified.display = TYPE_SYMBOL.to_string();
    }
    classified
}
