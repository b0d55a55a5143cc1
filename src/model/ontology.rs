//! RDF vocabulary constants and the built-in default namespace table.
//!
//! - `standard` -- the handful of IRIs the diagram builder needs to recognize
//! - `DEFAULT_NAMESPACES` -- prefixes used when neither the input document nor
//!   the namespace file binds them

/// Standard RDF/RDFS/XSD namespace URIs
pub mod standard {
    pub const RDF: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";
    pub const RDFS: &str = "http://www.w3.org/2000/01/rdf-schema#";
    pub const XSD: &str = "http://www.w3.org/2001/XMLSchema#";
    pub const RDF_TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";
    pub const XSD_STRING: &str = "http://www.w3.org/2001/XMLSchema#string";
    pub const XSD_INTEGER: &str = "http://www.w3.org/2001/XMLSchema#integer";
}

/// Symbol used in place of `rdf:type` in attribute lines.
pub const TYPE_SYMBOL: &str = "a";

/// Display name of the empty (`@prefix : <...>`) namespace.
pub const BASE_PREFIX: &str = "base";

/// Prefix every blank node key starts with.
pub const BLANK_NODE_PREFIX: &str = "_:";

/// Namespaces known without any configuration.
pub const DEFAULT_NAMESPACES: &[(&str, &str)] = &[
    ("dbo", "http://dbpedia.org/ontology/"),
    ("dbp", "http://dbpedia.org/property/"),
    ("dc", "http://purl.org/dc/elements/1.1/"),
    ("dcat", "http://www.w3.org/ns/dcat#"),
    ("dcterms", "http://purl.org/dc/terms/"),
    ("foaf", "http://xmlns.com/foaf/0.1/"),
    ("geo", "http://www.opengis.net/ont/geosparql#"),
    ("geonames", "http://www.geonames.org/ontology#"),
    ("gr", "http://purl.org/goodrelations/v1#"),
    ("org", "http://www.w3.org/ns/org#"),
    ("owl", "http://www.w3.org/2002/07/owl#"),
    ("rdf", standard::RDF),
    ("rdfs", standard::RDFS),
    ("sioc", "http://rdfs.org/sioc/ns#"),
    ("skos", "http://www.w3.org/2004/02/skos/core#"),
    ("skos-xl", "http://www.w3.org/2008/05/skos-xl#"),
    ("xml", "http://www.w3.org/XML/1998/namespace"),
    ("xsd", standard::XSD),
];
