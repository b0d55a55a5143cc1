//! Render RDF graphs as PlantUML object diagrams.
//!
//! Statements are grouped by resource: literal-valued predicates and
//! `rdf:type` become attribute lines of the subject's object, every other
//! statement becomes an association arrow.
//!
//! ```
//! use rdf2uml::config::DiagramOptions;
//! use rdf2uml::diagram::build_diagram;
//! use rdf2uml::emitter::{emit_diagram, plantuml::PlantUmlEmitter};
//! use rdf2uml::model::namespace::NamespaceTable;
//! use rdf2uml::model::term::{Literal, Term, Triple};
//!
//! let mut namespaces = NamespaceTable::builtin();
//! namespaces.insert("ex", "http://example.org/");
//! let statements = vec![Triple::new(
//!     Term::resource("http://example.org/A"),
//!     Term::resource("http://example.org/name"),
//!     Term::Literal(Literal::simple("Alice")),
//! )];
//!
//! let diagram = build_diagram(&statements, &namespaces, &DiagramOptions::default());
//! let mut emitter = PlantUmlEmitter::new(Vec::new());
//! emit_diagram(&mut emitter, &diagram).unwrap();
//! let text = String::from_utf8(emitter.into_inner()).unwrap();
//! assert!(text.contains("ex:name \"Alice\""));
//! ```

pub mod config;
pub mod convert;
pub mod diagram;
pub mod emitter;
pub mod error;
pub mod model;
pub mod parsing;

pub use error::{ConfigError, Error, ParseError};
