//! Proof-related error types

use thiserror::Error;

/// Errors raised while constructing a proof
///
/// Only the specialized builders raise errors, and only when a
/// caller-supplied verification predicate rejects a sample value.
/// Structural problems (dangling references, missing conclusion) are
/// never errors; `verify()` reports them as `false`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProofError {
    /// The base case predicate rejected the base case value
    #[error("base case verification failed for {variable} = {value}")]
    BaseCaseFailed {
        /// Inductive variable symbol
        variable: String,
        /// The base case value that was tested
        value: i64,
    },

    /// The inductive step predicate rejected one of the sample values
    #[error("inductive step verification failed for {variable} = {value}")]
    InductiveStepFailed {
        /// Inductive variable symbol
        variable: String,
        /// The first sample value the predicate rejected
        value: i64,
    },

    /// A strategy name could not be parsed
    #[error("unknown proof strategy: {0}")]
    UnknownStrategy(String),
}

/// Result type for proof construction operations
pub type ProofResult<T> = Result<T, ProofError>;

/// Errors raised during type inference in the Curry-Howard companion
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TypeError {
    /// Variable not bound in the typing context
    #[error("unbound variable: {0}")]
    UnboundVariable(String),

    /// A function was applied to an argument of the wrong type
    #[error("type mismatch: {function} cannot be applied to {argument}")]
    Mismatch {
        /// Rendered type of the function position
        function: String,
        /// Rendered type of the argument
        argument: String,
    },

    /// A linearly typed variable was not used exactly once
    #[error("linear variable {variable} must be used exactly once, found {uses} uses")]
    LinearityViolation {
        /// The offending variable
        variable: String,
        /// How many times it actually occurs free in the body
        uses: usize,
    },
}

/// Result type for type inference
pub type TypeResult<T> = Result<T, TypeError>;
