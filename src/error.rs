//! Error types shared by the library and the binary.

use std::path::PathBuf;

use thiserror::Error;

use crate::model::term::Triple;

/// Failures while loading the default namespace table.
///
/// Never fatal: callers log it and fall back to the built-in table.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read namespace file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("namespace file {} is not a JSON object of prefix/URI strings: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Failures raised while turning an input document into statements.
#[derive(Debug, Error)]
pub enum ParseError {
    /// Parser could not be set up for the input.
    #[error("{0}")]
    Init(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Turtle(#[from] rio_turtle::TurtleError),
    #[error(transparent)]
    RdfXml(#[from] rio_xml::RdfXmlError),
    /// The statement is already in the store.
    #[error("adding statement failed, already present: {0}")]
    DuplicateStatement(Box<Triple>),
}

impl ParseError {
    /// Whether parsing can carry on after this error.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, ParseError::DuplicateStatement(_))
    }
}

/// Fatal errors of a conversion run.
#[derive(Debug, Error)]
pub enum Error {
    #[error("No files found")]
    NoInputMatched,
    #[error("cannot determine RDF format of {}; use --format", .0.display())]
    UnknownFormat(PathBuf),
    #[error("parser creation failed for {}", .path.display())]
    ParserInit {
        path: PathBuf,
        #[source]
        source: ParseError,
    },
    #[error("parse stream {}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: ParseError,
    },
    #[error("writing diagram failed")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Attach the input path to a parser failure, keeping setup errors apart
    /// from stream errors.
    pub fn from_parse(path: impl Into<PathBuf>, source: ParseError) -> Self {
        let path = path.into();
        match source {
            ParseError::Init(_) | ParseError::Io(_) => Error::ParserInit { path, source },
            other => Error::Parse {
                path,
                source: other,
            },
        }
    }
}
