//! In-memory statement set filled by the parser.

use std::collections::HashSet;

use crate::error::ParseError;
use crate::model::term::Triple;

/// Ordered set of statements with an optional size cap.
///
/// Insertion order is kept so diagram output follows the document. A
/// statement that is already present is rejected with the recoverable
/// [`ParseError::DuplicateStatement`].
#[derive(Debug, Default)]
pub struct StatementStore {
    statements: Vec<Triple>,
    seen: HashSet<Triple>,
    limit: Option<usize>,
}

impl StatementStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store that accepts at most `limit` statements.
    pub fn with_limit(limit: Option<usize>) -> Self {
        Self {
            limit,
            ..Self::default()
        }
    }

    pub fn add(&mut self, triple: Triple) -> Result<(), ParseError> {
        if self.seen.contains(&triple) {
            return Err(ParseError::DuplicateStatement(Box::new(triple)));
        }
        self.seen.insert(triple.clone());
        self.statements.push(triple);
        Ok(())
    }

    /// Whether the cap has been reached.
    pub fn is_full(&self) -> bool {
        self.limit.is_some_and(|limit| self.statements.len() >= limit)
    }

    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    pub fn statements(&self) -> &[Triple] {
        &self.statements
    }

    pub fn into_statements(self) -> Vec<Triple> {
        self.statements
    }
}
