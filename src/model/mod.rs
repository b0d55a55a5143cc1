pub mod namespace;
pub mod ontology;
pub mod term;
