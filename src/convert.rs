//! Per-file conversion: parse, resolve namespaces, build and emit.

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};
use walkdir::WalkDir;

use crate::config::ConvertOptions;
use crate::diagram::build_diagram;
use crate::emitter::{emit_diagram, DiagramEmitter};
use crate::error::Error;
use crate::model::namespace::NamespaceTable;
use crate::parsing::{RdfFormat, RdfParser, StatementStore};

/// What happened to one input file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertSummary {
    pub path: PathBuf,
    pub format: RdfFormat,
    pub statements: usize,
    pub objects: usize,
    pub edges: usize,
    pub alias_collisions: usize,
}

/// `format` when given, otherwise the format implied by the extension.
pub fn resolve_format(path: &Path, format: Option<RdfFormat>) -> Result<RdfFormat, Error> {
    format
        .or_else(|| RdfFormat::from_path(path))
        .ok_or_else(|| Error::UnknownFormat(path.to_path_buf()))
}

/// Convert one document and write its diagram to `emitter`.
///
/// The diagram is only written once the whole document has been read, so a
/// parse failure leaves the output untouched.
pub fn convert_file<P, E>(
    parser: &mut P,
    path: &Path,
    options: &ConvertOptions,
    defaults: &NamespaceTable,
    emitter: &mut E,
) -> Result<ConvertSummary, Error>
where
    P: RdfParser + ?Sized,
    E: DiagramEmitter + ?Sized,
{
    let format = resolve_format(path, options.parse.format)?;
    info!("Parsing file {} as {format}", path.display());

    let mut store = StatementStore::with_limit(options.parse.max_count);
    parser
        .parse_into(path, format, &mut store)
        .map_err(|e| Error::from_parse(path, e))?;
    info!("Found {} statements", store.len());

    let namespaces = NamespaceTable::merged(&parser.namespaces_seen(), defaults);
    for (prefix, uri) in namespaces.iter() {
        debug!("@prefix {prefix}: <{uri}> .");
    }

    let diagram = build_diagram(store.statements(), &namespaces, &options.diagram);
    emit_diagram(emitter, &diagram)?;
    emitter.flush()?;

    Ok(ConvertSummary {
        path: path.to_path_buf(),
        format,
        statements: store.len(),
        objects: diagram.objects().len(),
        edges: diagram.edges().len(),
        alias_collisions: diagram.collisions().len(),
    })
}

/// Expand the command line inputs into the files to convert.
///
/// Files are kept as given. Directories are walked in name order and
/// contribute files with a known RDF extension. Paths that do not exist are
/// reported and skipped.
pub fn resolve_inputs(inputs: &[PathBuf]) -> Result<Vec<PathBuf>, Error> {
    let mut files = Vec::new();
    for input in inputs {
        if input.is_file() {
            files.push(input.clone());
        } else if input.is_dir() {
            for entry in WalkDir::new(input).sort_by_file_name() {
                match entry {
                    Ok(entry) => {
                        let path = entry.path();
                        if entry.file_type().is_file() && RdfFormat::from_path(path).is_some() {
                            files.push(path.to_path_buf());
                        }
                    }
                    Err(e) => warn!("skipping unreadable entry under {}: {e}", input.display()),
                }
            }
        } else {
            warn!("no such file or directory: {}", input.display());
        }
    }

    if files.is_empty() {
        return Err(Error::NoInputMatched);
    }
    Ok(files)
}
