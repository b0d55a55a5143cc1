pub mod alias;
pub mod builder;
pub mod literal;

pub use builder::{build_diagram, DiagramObject, Edge, GraphBuilder, ObjectDiagram};
