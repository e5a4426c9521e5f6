//! Atomic propositions used as proof content

use serde::{Deserialize, Serialize};
use std::fmt;

/// An atomic textual proposition
///
/// Statements carry optional premise/conclusion tags and an optional
/// justification. They are immutable once created and are not required
/// to be unique within a proof.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Statement {
    /// The proposition text
    pub content: String,

    /// Whether this statement is offered as a premise
    pub is_premise: bool,

    /// Whether this statement is offered as a conclusion
    pub is_conclusion: bool,

    /// Optional justification for asserting the statement
    pub justification: Option<String>,
}

impl Statement {
    /// Create a plain statement with no tags
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            is_premise: false,
            is_conclusion: false,
            justification: None,
        }
    }

    /// Create a statement tagged as a premise
    pub fn premise(content: impl Into<String>) -> Self {
        Self {
            is_premise: true,
            ..Self::new(content)
        }
    }

    /// Create a statement tagged as a conclusion
    pub fn conclusion(content: impl Into<String>) -> Self {
        Self {
            is_conclusion: true,
            ..Self::new(content)
        }
    }

    /// Attach a justification (builder pattern)
    pub fn with_justification(mut self, justification: impl Into<String>) -> Self {
        self.justification = Some(justification.into());
        self
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.content)?;
        if let Some(justification) = &self.justification {
            write!(f, " ({})", justification)?;
        }
        Ok(())
    }
}

impl From<Statement> for String {
    fn from(statement: Statement) -> Self {
        statement.content
    }
}
