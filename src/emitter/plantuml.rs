use std::io::{self, Write};

use super::DiagramEmitter;
use crate::diagram::{DiagramObject, Edge};

/// PlantUML object diagram emitter. Streams `object` declarations and
/// `a --> b : pred` lines between `@startuml` and `@enduml`.
pub struct PlantUmlEmitter<W: Write> {
    writer: W,
    objects: u64,
    edges: u64,
}

impl<W: Write> PlantUmlEmitter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            objects: 0,
            edges: 0,
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> DiagramEmitter for PlantUmlEmitter<W> {
    fn begin(&mut self) -> io::Result<()> {
        writeln!(self.writer, "@startuml")
    }

    fn emit_object(&mut self, object: &DiagramObject) -> io::Result<()> {
        if let Some(name) = object.display_name() {
            writeln!(self.writer, "object \"{name}\" as {}", object.alias)?;
        }
        if !object.attributes.is_empty() {
            writeln!(self.writer, "object {} {{", object.alias)?;
            for attribute in &object.attributes {
                writeln!(self.writer, "  {attribute}")?;
            }
            writeln!(self.writer, "}}")?;
        } else if object.display_name().is_none() {
            writeln!(self.writer, "object {}", object.alias)?;
        }
        self.objects += 1;
        Ok(())
    }

    fn emit_edge(&mut self, edge: &Edge) -> io::Result<()> {
        writeln!(
            self.writer,
            "{} --> {} : {}",
            edge.from, edge.to, edge.predicate
        )?;
        self.edges += 1;
        Ok(())
    }

    fn end(&mut self) -> io::Result<()> {
        writeln!(self.writer, "@enduml")
    }

    fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }

    fn object_count(&self) -> u64 {
        self.objects
    }

    fn edge_count(&self) -> u64 {
        self.edges
    }
}
