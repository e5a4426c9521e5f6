//! Extended Curry-Howard type system
//!
//! Propositions-as-types companion to the proof engine: a small typed
//! lambda calculus whose types double as logical propositions. Beyond
//! simple types it covers function types (implication), dependent
//! function types (Π-types), linear types (use exactly once), and
//! effect-tracking types.
//!
//! Inference here is structural type checking, not theorem proving:
//! [`TypeContext::infer`] assigns a type to a term or reports why it
//! has none.

use rustc_hash::FxHashMap;
use std::fmt;
use tracing::trace;

use crate::errors::{TypeError, TypeResult};

/// A type in the extended system
#[derive(Debug, Clone, PartialEq)]
pub enum Ty {
    /// Integer type
    Int,

    /// Boolean type; a classical proposition
    Bool,

    /// Function type; corresponds to implication
    Function {
        /// Parameter type
        input: Box<Ty>,
        /// Result type
        output: Box<Ty>,
    },

    /// Dependent function type (Π-type) mapping a value to a type
    ///
    /// `family` names the type produced for a given parameter; it is
    /// only consulted when rendering.
    Dependent {
        /// Bound parameter name
        param: String,
        /// Type of the parameter
        param_ty: Box<Ty>,
        /// Type family indexed by the parameter
        family: fn(&str) -> String,
    },

    /// Linear type: the value must be used exactly once
    Linear(Box<Ty>),

    /// Effect-tracking type (IO, mutation, ...)
    Effectful {
        /// Name of the tracked effect
        effect: String,
        /// Underlying type
        base: Box<Ty>,
    },
}

impl Ty {
    /// Build a function type
    pub fn function(input: Ty, output: Ty) -> Self {
        Self::Function {
            input: Box::new(input),
            output: Box::new(output),
        }
    }

    /// Build a dependent function type
    pub fn dependent(param: impl Into<String>, param_ty: Ty, family: fn(&str) -> String) -> Self {
        Self::Dependent {
            param: param.into(),
            param_ty: Box::new(param_ty),
            family,
        }
    }

    /// Build a linear type
    pub fn linear(base: Ty) -> Self {
        Self::Linear(Box::new(base))
    }

    /// Build an effect-tracking type
    pub fn effectful(effect: impl Into<String>, base: Ty) -> Self {
        Self::Effectful {
            effect: effect.into(),
            base: Box::new(base),
        }
    }
}

impl fmt::Display for Ty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int => write!(f, "Int"),
            Self::Bool => write!(f, "Bool"),
            Self::Function { input, output } => write!(f, "({} → {})", input, output),
            Self::Dependent {
                param,
                param_ty,
                family,
            } => write!(f, "(Π {}: {}. {})", param, param_ty, family(param)),
            Self::Linear(base) => write!(f, "Linear[{}]", base),
            Self::Effectful { effect, base } => write!(f, "Effect[{}, {}]", effect, base),
        }
    }
}

/// A term of the lambda calculus
#[derive(Debug, Clone, PartialEq)]
pub enum Term {
    /// Variable, typed via the context
    Var(String),

    /// Lambda abstraction
    Lambda {
        /// Bound parameter name
        param: String,
        /// Declared parameter type
        param_ty: Ty,
        /// Body of the abstraction
        body: Box<Term>,
    },

    /// Function application
    Apply {
        /// Function position
        func: Box<Term>,
        /// Argument position
        arg: Box<Term>,
    },

    /// Term wrapped with a tracked effect
    Effectful {
        /// Name of the effect
        effect: String,
        /// The wrapped term
        term: Box<Term>,
    },
}

impl Term {
    /// Build a variable term
    pub fn var(name: impl Into<String>) -> Self {
        Self::Var(name.into())
    }

    /// Build a lambda abstraction
    pub fn lambda(param: impl Into<String>, param_ty: Ty, body: Term) -> Self {
        Self::Lambda {
            param: param.into(),
            param_ty,
            body: Box::new(body),
        }
    }

    /// Build a function application
    pub fn apply(func: Term, arg: Term) -> Self {
        Self::Apply {
            func: Box::new(func),
            arg: Box::new(arg),
        }
    }

    /// Wrap a term with a tracked effect
    pub fn effectful(effect: impl Into<String>, term: Term) -> Self {
        Self::Effectful {
            effect: effect.into(),
            term: Box::new(term),
        }
    }

    /// Count free occurrences of `name` in this term
    fn free_occurrences(&self, name: &str) -> usize {
        match self {
            Self::Var(var) => usize::from(var == name),
            Self::Lambda { param, body, .. } => {
                if param == name {
                    0
                } else {
                    body.free_occurrences(name)
                }
            }
            Self::Apply { func, arg } => {
                func.free_occurrences(name) + arg.free_occurrences(name)
            }
            Self::Effectful { term, .. } => term.free_occurrences(name),
        }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Var(name) => write!(f, "{}", name),
            Self::Lambda {
                param,
                param_ty,
                body,
            } => write!(f, "(λ{}: {}. {})", param, param_ty, body),
            Self::Apply { func, arg } => write!(f, "({} {})", func, arg),
            Self::Effectful { effect, term } => write!(f, "[{}] {}", effect, term),
        }
    }
}

/// Typing context mapping variable names to types
#[derive(Debug, Clone, Default)]
pub struct TypeContext {
    bindings: FxHashMap<String, Ty>,
}

impl TypeContext {
    /// Create an empty context
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a variable to a type
    pub fn bind(&mut self, name: impl Into<String>, ty: Ty) {
        self.bindings.insert(name.into(), ty);
    }

    /// Bind a variable (builder pattern)
    pub fn with_binding(mut self, name: impl Into<String>, ty: Ty) -> Self {
        self.bind(name, ty);
        self
    }

    /// Look up a variable's type
    pub fn lookup(&self, name: &str) -> Option<&Ty> {
        self.bindings.get(name)
    }

    /// Infer the type of a term in this context
    ///
    /// Rules: variables are looked up in the context; a lambda has a
    /// function type from its declared parameter type to its body's
    /// type, with a `Linear` parameter additionally required to occur
    /// exactly once free in the body; an application requires the
    /// function's input type to equal the argument's type; wrapping a
    /// term with an effect wraps its type.
    pub fn infer(&self, term: &Term) -> TypeResult<Ty> {
        trace!("inferring type of {}", term);
        match term {
            Term::Var(name) => self
                .lookup(name)
                .cloned()
                .ok_or_else(|| TypeError::UnboundVariable(name.clone())),
            Term::Lambda {
                param,
                param_ty,
                body,
            } => {
                // linearity is checked before the body is typed so that a
                // miscounted linear variable is reported as such; using a
                // linear variable consumes it, so the body sees the base type
                let bound_ty = if let Ty::Linear(base) = param_ty {
                    let uses = body.free_occurrences(param);
                    if uses != 1 {
                        return Err(TypeError::LinearityViolation {
                            variable: param.clone(),
                            uses,
                        });
                    }
                    (**base).clone()
                } else {
                    param_ty.clone()
                };
                let inner = self.clone().with_binding(param.clone(), bound_ty);
                let body_ty = inner.infer(body)?;
                Ok(Ty::function(param_ty.clone(), body_ty))
            }
            Term::Apply { func, arg } => {
                let func_ty = self.infer(func)?;
                let arg_ty = self.infer(arg)?;
                match func_ty {
                    Ty::Function { input, output } if *input == arg_ty => Ok(*output),
                    other => Err(TypeError::Mismatch {
                        function: other.to_string(),
                        argument: arg_ty.to_string(),
                    }),
                }
            }
            Term::Effectful { effect, term } => {
                let base = self.infer(term)?;
                Ok(Ty::effectful(effect.clone(), base))
            }
        }
    }
}
