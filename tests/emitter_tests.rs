use rdf2uml::config::DiagramOptions;
use rdf2uml::diagram::{build_diagram, DiagramObject, Edge};
use rdf2uml::emitter::plantuml::PlantUmlEmitter;
use rdf2uml::emitter::{emit_diagram, DiagramEmitter};
use rdf2uml::model::namespace::NamespaceTable;
use rdf2uml::model::ontology::standard;
use rdf2uml::model::term::{Literal, Term, Triple};

const EX: &str = "http://example.org/";

fn ex(local: &str) -> Term {
    Term::resource(format!("{EX}{local}"))
}

fn ns() -> NamespaceTable {
    let mut t = NamespaceTable::builtin();
    t.insert("ex", EX);
    t
}

fn render(statements: &[Triple], options: &DiagramOptions) -> String {
    let diagram = build_diagram(statements, &ns(), options);
    let mut buf = Vec::new();
    {
        let mut em = PlantUmlEmitter::new(&mut buf);
        emit_diagram(&mut em, &diagram).unwrap();
        em.flush().unwrap();
    }
    String::from_utf8(buf).unwrap()
}

fn person_statements() -> Vec<Triple> {
    vec![
        Triple::new(ex("A"), Term::resource(standard::RDF_TYPE), ex("Person")),
        Triple::new(ex("A"), ex("name"), Term::Literal(Literal::lang("Alice", "en"))),
        Triple::new(ex("A"), ex("knows"), ex("B")),
    ]
}

// ---------------------------------------------------------------------------
// Single elements
// ---------------------------------------------------------------------------

#[test]
fn object_with_attributes() {
    let mut buf = Vec::new();
    let mut em = PlantUmlEmitter::new(&mut buf);
    em.emit_object(&DiagramObject {
        key: "ex:A".to_string(),
        alias: "ex_A".to_string(),
        blank: false,
        label: None,
        attributes: vec!["a ex:Person".to_string(), "ex:name \"Alice\"".to_string()],
    })
    .unwrap();
    assert_eq!(em.object_count(), 1);
    let out = String::from_utf8(buf).unwrap();
    assert_eq!(out, "object ex_A {\n  a ex:Person\n  ex:name \"Alice\"\n}\n");
}

#[test]
fn labeled_object_without_attributes() {
    let mut buf = Vec::new();
    let mut em = PlantUmlEmitter::new(&mut buf);
    em.emit_object(&DiagramObject {
        key: "http://x.org/a".to_string(),
        alias: "http___x_org_a".to_string(),
        blank: false,
        label: Some("http://x.org/a".to_string()),
        attributes: Vec::new(),
    })
    .unwrap();
    let out = String::from_utf8(buf).unwrap();
    assert_eq!(out, "object \"http://x.org/a\" as http___x_org_a\n");
}

#[test]
fn bare_object_without_attributes_is_declared() {
    let mut buf = Vec::new();
    let mut em = PlantUmlEmitter::new(&mut buf);
    em.emit_object(&DiagramObject {
        key: "ex:B".to_string(),
        alias: "ex_B".to_string(),
        blank: false,
        label: None,
        attributes: Vec::new(),
    })
    .unwrap();
    assert_eq!(String::from_utf8(buf).unwrap(), "object ex_B\n");
}

#[test]
fn edge_line() {
    let mut buf = Vec::new();
    let mut em = PlantUmlEmitter::new(&mut buf);
    em.emit_edge(&Edge {
        from: "ex_A".to_string(),
        predicate: "ex:knows".to_string(),
        to: "ex_B".to_string(),
    })
    .unwrap();
    assert_eq!(em.edge_count(), 1);
    assert_eq!(String::from_utf8(buf).unwrap(), "ex_A --> ex_B : ex:knows\n");
}

// ---------------------------------------------------------------------------
// Whole diagrams
// ---------------------------------------------------------------------------

#[test]
fn person_diagram_exact_output() {
    let out = render(&person_statements(), &DiagramOptions::default());
    assert_eq!(
        out,
        "@startuml\n\
         object ex_A {\n\
         \x20 a ex:Person\n\
         \x20 ex:name \"Alice\"\n\
         }\n\
         object ex_B\n\
         ex_A --> ex_B : ex:knows\n\
         @enduml\n"
    );
    assert!(!out.contains("as ex_A"));
    assert!(!out.contains("as ex_B"));
}

#[test]
fn language_filter_removes_attribute_line() {
    let options = DiagramOptions {
        language: Some("de".to_string()),
        ..DiagramOptions::default()
    };
    let out = render(&person_statements(), &options);
    assert!(!out.contains("ex:name"));
    assert!(out.contains("  a ex:Person\n"));
    assert!(out.contains("ex_A --> ex_B : ex:knows\n"));
}

#[test]
fn blank_subject_declared_with_blank_name() {
    let statements = vec![
        Triple::new(Term::blank("b0"), ex("name"), Term::Literal(Literal::simple("anon"))),
        Triple::new(Term::blank("b0"), ex("knows"), ex("A")),
    ];
    let out = render(&statements, &DiagramOptions::default());
    assert!(out.contains("object \" \" as __b0\n"));
    assert!(out.contains("object __b0 {\n  ex:name \"anon\"\n}\n"));
    assert!(out.contains("__b0 --> ex_A : ex:knows\n"));
}

#[test]
fn show_names_declares_prefixed_names() {
    let options = DiagramOptions {
        show_names: true,
        ..DiagramOptions::default()
    };
    let out = render(&person_statements(), &options);
    assert!(out.contains("object \"ex:A\" as ex_A\n"));
    assert!(out.contains("object \"ex:B\" as ex_B\n"));
    // The name line already declares ex_B.
    assert!(!out.contains("object ex_B\n"));
}

#[test]
fn edge_target_without_attributes_is_declared() {
    let out = render(&person_statements(), &DiagramOptions::default());
    let declaration = out
        .lines()
        .position(|line| line == "object ex_B")
        .expect("no declaration for ex_B");
    let edge = out.lines().position(|line| line.starts_with("ex_A --> ex_B")).unwrap();
    assert!(declaration < edge);
}

#[test]
fn objects_precede_edges() {
    let statements = vec![
        Triple::new(ex("A"), ex("knows"), ex("B")),
        Triple::new(ex("B"), ex("name"), Term::Literal(Literal::simple("Bob"))),
    ];
    let out = render(&statements, &DiagramOptions::default());
    let object_pos = out.find("object ex_B {").unwrap();
    let edge_pos = out.find("ex_A --> ex_B").unwrap();
    assert!(object_pos < edge_pos);
}

#[test]
fn empty_diagram_has_frame_only() {
    let out = render(&[], &DiagramOptions::default());
    assert_eq!(out, "@startuml\n@enduml\n");
}

#[test]
fn counts_track_whole_diagram() {
    let diagram = build_diagram(&person_statements(), &ns(), &DiagramOptions::default());
    let mut em = PlantUmlEmitter::new(Vec::new());
    emit_diagram(&mut em, &diagram).unwrap();
    assert_eq!(em.object_count(), 2);
    assert_eq!(em.edge_count(), 1);
    let out = String::from_utf8(em.into_inner()).unwrap();
    assert!(out.starts_with("@startuml\n"));
    assert!(out.ends_with("@enduml\n"));
}
