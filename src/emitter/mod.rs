pub mod plantuml;

use std::io;

use crate::diagram::{DiagramObject, Edge, ObjectDiagram};

/// Trait for writing an object diagram in a textual diagram language.
pub trait DiagramEmitter {
    /// Open a diagram.
    fn begin(&mut self) -> io::Result<()>;
    /// Declare an object, with its alias and attributes.
    fn emit_object(&mut self, object: &DiagramObject) -> io::Result<()>;
    /// Emit an association between two declared objects.
    fn emit_edge(&mut self, edge: &Edge) -> io::Result<()>;
    /// Close the diagram.
    fn end(&mut self) -> io::Result<()>;
    /// Flush any buffered output.
    fn flush(&mut self) -> io::Result<()>;
    /// Number of objects emitted so far.
    fn object_count(&self) -> u64;
    /// Number of edges emitted so far.
    fn edge_count(&self) -> u64;
}

/// Write a whole diagram: objects in model order, then edges in statement order.
pub fn emit_diagram<E: DiagramEmitter + ?Sized>(
    emitter: &mut E,
    diagram: &ObjectDiagram,
) -> io::Result<()> {
    emitter.begin()?;
    for object in diagram.objects() {
        emitter.emit_object(object)?;
    }
    for edge in diagram.edges() {
        emitter.emit_edge(edge)?;
    }
    emitter.end()
}
