//! Object model construction: groups statements into diagram objects with
//! attributes, and collects the associations between them.
//!
//! The [`GraphBuilder`] makes two passes over the same statement slice. The
//! first creates objects and attaches attributes; the second emits one
//! [`Edge`] per resource-valued, non-`rdf:type` statement, in input order.

use std::collections::HashMap;

use tracing::trace;

use crate::config::DiagramOptions;
use crate::model::namespace::NamespaceTable;
use crate::model::ontology::TYPE_SYMBOL;
use crate::model::term::{classify, classify_predicate, ClassifiedTerm, Triple};

use super::alias::{AliasCollision, AliasTable};

/// Blank nodes have no name worth showing.
const BLANK_LABEL: &str = " ";

// ---------------------------------------------------------------------------
// Object model
// ---------------------------------------------------------------------------

/// A resource shown as an object box.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagramObject {
    /// Shortened IRI or `_:`-prefixed blank node id.
    pub key: String,
    pub alias: String,
    pub blank: bool,
    /// Name declared for the alias, if the object gets a declaration line.
    pub label: Option<String>,
    /// Unique attribute lines in first-seen order.
    pub attributes: Vec<String>,
}

impl DiagramObject {
    /// Name to declare for the alias, or `None` when the bare alias is shown.
    pub fn display_name(&self) -> Option<&str> {
        self.label.as_deref()
    }

    fn add_attribute(&mut self, attribute: String) {
        if !self.attributes.contains(&attribute) {
            self.attributes.push(attribute);
        }
    }
}

/// Association between two objects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    pub from: String,
    pub predicate: String,
    pub to: String,
}

/// Objects and edges of one document.
#[derive(Debug, Clone, Default)]
pub struct ObjectDiagram {
    objects: Vec<DiagramObject>,
    index: HashMap<String, usize>,
    edges: Vec<Edge>,
    collisions: Vec<AliasCollision>,
}

impl ObjectDiagram {
    /// Objects in first-seen order.
    pub fn objects(&self) -> &[DiagramObject] {
        &self.objects
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn object(&self, key: &str) -> Option<&DiagramObject> {
        self.index.get(key).map(|&i| &self.objects[i])
    }

    /// Distinct resources that were drawn under the same alias.
    pub fn collisions(&self) -> &[AliasCollision] {
        &self.collisions
    }
}

// ---------------------------------------------------------------------------
// GraphBuilder
// ---------------------------------------------------------------------------

/// Turns a statement sequence into an [`ObjectDiagram`].
pub struct GraphBuilder<'a> {
    namespaces: &'a NamespaceTable,
    options: &'a DiagramOptions,
    aliases: AliasTable,
    objects: Vec<DiagramObject>,
    index: HashMap<String, usize>,
}

impl<'a> GraphBuilder<'a> {
    pub fn new(namespaces: &'a NamespaceTable, options: &'a DiagramOptions) -> Self {
        Self {
            namespaces,
            options,
            aliases: AliasTable::new(),
            objects: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Run both passes over `statements`.
    pub fn build(mut self, statements: &[Triple]) -> ObjectDiagram {
        for statement in statements {
            self.add_statement(statement);
        }

        let edges = statements
            .iter()
            .filter_map(|statement| self.edge(statement))
            .collect();

        ObjectDiagram {
            objects: self.objects,
            index: self.index,
            edges,
            collisions: self.aliases.collisions().to_vec(),
        }
    }

    // -----------------------------------------------------------------------
    // First pass: objects and attributes
    // -----------------------------------------------------------------------

    fn add_statement(&mut self, statement: &Triple) {
        let subject = classify(&statement.subject, self.namespaces);
        let predicate = classify_predicate(&statement.predicate, self.namespaces);
        let object = classify(&statement.object, self.namespaces);
        let is_type = statement.is_type_statement();

        let owner = self.object_entry(&subject);
        if !is_type && !object.is_literal() {
            self.object_entry(&object);
        }

        let attribute = if is_type {
            Some(format!("{TYPE_SYMBOL} {}", self.object_text(&object)))
        } else if object.is_literal() {
            self.literal_attribute(&predicate, &object)
        } else {
            None
        };

        if let Some(attribute) = attribute {
            trace!(object = %subject.display, %attribute, "attribute");
            self.objects[owner].add_attribute(attribute);
        }
    }

    /// Index of the object for `term`, created on first sight.
    fn object_entry(&mut self, term: &ClassifiedTerm) -> usize {
        if let Some(&i) = self.index.get(&term.display) {
            return i;
        }
        let alias = self.aliases.alias(&term.display);
        let label = if term.is_blank() {
            Some(BLANK_LABEL.to_string())
        } else if self.options.show_names && term.display != alias {
            Some(term.display.clone())
        } else {
            None
        };
        let i = self.objects.len();
        self.objects.push(DiagramObject {
            key: term.display.clone(),
            alias,
            blank: term.is_blank(),
            label,
            attributes: Vec::new(),
        });
        self.index.insert(term.display.clone(), i);
        i
    }

    fn object_text(&self, object: &ClassifiedTerm) -> String {
        if object.is_literal() {
            self.options.literals.format(&object.display)
        } else {
            object.display.clone()
        }
    }

    /// `pred "value"` with an optional `[datatype]`, or `None` when the
    /// language filter rejects the literal.
    fn literal_attribute(
        &self,
        predicate: &ClassifiedTerm,
        object: &ClassifiedTerm,
    ) -> Option<String> {
        if let (Some(wanted), Some(lang)) = (&self.options.language, &object.language) {
            if !lang.eq_ignore_ascii_case(wanted) {
                return None;
            }
        }

        let mut attribute = format!("{} \"{}\"", predicate.display, self.object_text(object));
        if self.options.include_datatype {
            if let Some(datatype) = &object.datatype {
                attribute.push_str(&format!(" [{}]", self.namespaces.shorten(datatype)));
            }
        }
        Some(attribute)
    }

    // -----------------------------------------------------------------------
    // Second pass: edges
    // -----------------------------------------------------------------------

    fn edge(&mut self, statement: &Triple) -> Option<Edge> {
        if statement.is_type_statement() || statement.object.is_literal() {
            return None;
        }
        let subject = classify(&statement.subject, self.namespaces);
        let predicate = classify_predicate(&statement.predicate, self.namespaces);
        let object = classify(&statement.object, self.namespaces);

        Some(Edge {
            from: self.aliases.alias(&subject.display),
            predicate: predicate.display,
            to: self.aliases.alias(&object.display),
        })
    }
}

/// Build the diagram for `statements` in one call.
pub fn build_diagram(
    statements: &[Triple],
    namespaces: &NamespaceTable,
    options: &DiagramOptions,
) -> ObjectDiagram {
    GraphBuilder::new(namespaces, options).build(statements)
}
