//! Conversion settings and default namespace loading.
//!
//! Everything that tunes a run is carried in [`ConvertOptions`] and passed
//! down explicitly; the default namespace table is loaded once and only read
//! afterwards.

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::model::namespace::NamespaceTable;
use crate::parsing::RdfFormat;

/// Wrap width for literal text.
pub const LITERAL_LINE_WIDTH: usize = 40;
/// Literal length kept when shortening is on.
pub const LITERAL_MAX_LEN: usize = 4 * LITERAL_LINE_WIDTH;
/// File name looked up next to the executable.
pub const DEFAULT_NAMESPACE_FILE: &str = "defns.json";

/// How literal text is laid out inside an object box.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiteralOptions {
    /// Truncate literals to `max_len` characters.
    pub shorten: bool,
    pub max_len: usize,
    pub line_width: usize,
}

impl Default for LiteralOptions {
    fn default() -> Self {
        Self {
            shorten: false,
            max_len: LITERAL_MAX_LEN,
            line_width: LITERAL_LINE_WIDTH,
        }
    }
}

/// Options controlling how statements become diagram objects.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiagramOptions {
    /// Keep only literals without a language tag or with this one.
    pub language: Option<String>,
    /// Append `[datatype]` to typed literal attributes.
    pub include_datatype: bool,
    /// Declare `object "ex:A" as ex_A` for resources whose alias differs
    /// from their name. Blank nodes are always declared.
    pub show_names: bool,
    pub literals: LiteralOptions,
}

/// Options controlling how input documents are read.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// Overrides detection from the file extension.
    pub format: Option<RdfFormat>,
    /// Stop after this many statements per file.
    pub max_count: Option<usize>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConvertOptions {
    pub parse: ParseOptions,
    pub diagram: DiagramOptions,
}

/// `defns.json` in the directory of the running executable.
pub fn default_namespace_path() -> Option<PathBuf> {
    let exe = std::env::current_exe().ok()?;
    Some(exe.parent()?.join(DEFAULT_NAMESPACE_FILE))
}

/// Load the default namespace table.
///
/// `explicit` is a user supplied file; without one the file next to the
/// executable is tried. Any failure falls back to [`NamespaceTable::builtin`].
pub fn load_default_namespaces(explicit: Option<&Path>) -> NamespaceTable {
    let (path, user_supplied) = match explicit {
        Some(path) => (path.to_path_buf(), true),
        None => match default_namespace_path() {
            Some(path) => (path, false),
            None => return NamespaceTable::builtin(),
        },
    };

    match NamespaceTable::load_json(&path) {
        Ok(table) => {
            info!("Read {} ({} namespaces)", path.display(), table.len());
            table
        }
        Err(e) if user_supplied => {
            warn!("{e}; using built-in namespaces");
            NamespaceTable::builtin()
        }
        Err(e) => {
            debug!("{e}; using built-in namespaces");
            NamespaceTable::builtin()
        }
    }
}
