//! Error types for the abstract machine.
//!
//! # Structured Error Categories
//!
//! `EvalErrorKind` provides typed error categories. Factory functions
//! (e.g. `undefined_variable()`) are the public way to build errors; they
//! populate both `kind` and `message`.
//!
//! Every error is fatal: handlers return it, the driver stops the machine and
//! attaches the step number and the last machine snapshot before handing it
//! to the caller.

use std::fmt;

use crate::machine::Snapshot;

/// Result of a fallible machine operation.
pub type EvalResult<T = ()> = Result<T, EvalError>;

/// Typed error category.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EvalErrorKind {
    // Stack shape
    /// The value stack held the wrong kind of entry.
    ExpectedValue { expected: String, found: String },
    /// The value stack was empty.
    EmptyValueStack { expected: String },

    // Lookup
    UndefinedVariable { name: String },
    UndefinedStorageAddress { address: usize },

    // Semantic violations
    /// Assignment to a `cons` binding (anything not bound to a location).
    UnexpectedImmutableVariable { name: String },
    /// `&x` or `*x` where `x` (or the cell it points to) is not a location.
    ExpectedLocation { name: String },
    ExpectedFunctionIdentifier { name: String },
    MissingParametersInCall {
        name: String,
        expected: usize,
        got: usize,
    },
    ExcessParametersInCall {
        name: String,
        expected: usize,
        got: usize,
    },
    /// Operand types an operator does not accept (`==` on mixed types).
    UnexpectedType {
        op: String,
        left: String,
        right: String,
    },
    DivisionByZero,

    // Dispatch
    /// A control-stack entry that no handler accepts.
    UndefinedConstruct { construct: String },

    // Resources
    StepBudgetExceeded { limit: usize },
}

impl fmt::Display for EvalErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ExpectedValue { expected, found } => {
                write!(f, "expected {expected} on the value stack, found {found}")
            }
            Self::EmptyValueStack { expected } => {
                write!(f, "expected {expected} on the value stack, found nothing")
            }
            Self::UndefinedVariable { name } => write!(f, "undefined variable: {name}"),
            Self::UndefinedStorageAddress { address } => {
                write!(f, "undefined storage address: {address}")
            }
            Self::UnexpectedImmutableVariable { name } => {
                write!(f, "cannot assign to immutable variable: {name}")
            }
            Self::ExpectedLocation { name } => {
                write!(f, "expected a location for {name}")
            }
            Self::ExpectedFunctionIdentifier { name } => {
                write!(f, "{name} is not a function")
            }
            Self::MissingParametersInCall {
                name,
                expected,
                got,
            } => write!(
                f,
                "missing parameters in call to {name}: expected {expected}, got {got}"
            ),
            Self::ExcessParametersInCall {
                name,
                expected,
                got,
            } => write!(
                f,
                "too many parameters in call to {name}: expected {expected}, got {got}"
            ),
            Self::UnexpectedType { op, left, right } => {
                write!(f, "unexpected types for {op}: {left} and {right}")
            }
            Self::DivisionByZero => write!(f, "division by zero"),
            Self::UndefinedConstruct { construct } => {
                write!(f, "undefined construct: {construct}")
            }
            Self::StepBudgetExceeded { limit } => {
                write!(f, "step budget exceeded (limit: {limit})")
            }
        }
    }
}

/// Machine error.
#[derive(Clone, Debug)]
pub struct EvalError {
    /// Structured error category.
    pub kind: EvalErrorKind,
    /// Human-readable error message (equals `kind.to_string()`).
    pub message: String,
    /// Delta step that failed, set by the driver.
    pub step: Option<usize>,
    /// Machine state at the failing step, set by the driver.
    pub snapshot: Option<Box<Snapshot>>,
}

impl EvalError {
    /// Create an error from a structured kind.
    fn from_kind(kind: EvalErrorKind) -> Self {
        let message = kind.to_string();
        Self {
            kind,
            message,
            step: None,
            snapshot: None,
        }
    }

    /// Record the delta step the error happened in.
    #[must_use]
    pub fn at_step(mut self, step: usize) -> Self {
        self.step = Some(step);
        self
    }

    /// Attach the machine state at the error site.
    #[must_use]
    pub fn with_snapshot(mut self, snapshot: Snapshot) -> Self {
        self.snapshot = Some(Box::new(snapshot));
        self
    }
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.step {
            Some(step) => write!(f, "{} (at step {step})", self.message),
            None => write!(f, "{}", self.message),
        }
    }
}

impl std::error::Error for EvalError {}

impl PartialEq for EvalError {
    /// Errors compare by kind; step and snapshot are diagnostic context.
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind
    }
}

// Stack shape

#[cold]
pub fn expected_value(expected: &str, found: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::ExpectedValue {
        expected: expected.to_string(),
        found: found.to_string(),
    })
}

#[cold]
pub fn empty_value_stack(expected: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::EmptyValueStack {
        expected: expected.to_string(),
    })
}

// Lookup

#[cold]
pub fn undefined_variable(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UndefinedVariable {
        name: name.to_string(),
    })
}

#[cold]
pub fn undefined_storage_address(address: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UndefinedStorageAddress { address })
}

// Semantic violations

#[cold]
pub fn unexpected_immutable_variable(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UnexpectedImmutableVariable {
        name: name.to_string(),
    })
}

#[cold]
pub fn expected_location(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::ExpectedLocation {
        name: name.to_string(),
    })
}

#[cold]
pub fn expected_function_identifier(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::ExpectedFunctionIdentifier {
        name: name.to_string(),
    })
}

#[cold]
pub fn missing_parameters_in_call(name: &str, expected: usize, got: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::MissingParametersInCall {
        name: name.to_string(),
        expected,
        got,
    })
}

#[cold]
pub fn excess_parameters_in_call(name: &str, expected: usize, got: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::ExcessParametersInCall {
        name: name.to_string(),
        expected,
        got,
    })
}

#[cold]
pub fn unexpected_type(op: &str, left: &str, right: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UnexpectedType {
        op: op.to_string(),
        left: left.to_string(),
        right: right.to_string(),
    })
}

#[cold]
pub fn division_by_zero() -> EvalError {
    EvalError::from_kind(EvalErrorKind::DivisionByZero)
}

// Dispatch

#[cold]
pub fn undefined_construct(construct: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UndefinedConstruct {
        construct: construct.to_string(),
    })
}

// Resources

#[cold]
pub fn step_budget_exceeded(limit: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::StepBudgetExceeded { limit })
}
