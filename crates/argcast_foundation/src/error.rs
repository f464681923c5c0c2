//! Error types for argument coercion.
//!
//! Uses `thiserror` for ergonomic error definition with rich context. The
//! taxonomy separates caller gaps ([`ErrorKind::UnsupportedType`]) from bad
//! user input ([`ErrorKind::Parse`]) and from input naming something that
//! does not exist ([`ErrorKind::ReferenceNotFound`]).

use std::fmt;
use std::num::{ParseFloatError, ParseIntError};

use thiserror::Error;

use crate::types::TypeDescriptor;

/// The main error type for coercion operations.
#[derive(Debug, Error)]
#[error("{}{kind}", context_prefix(.context))]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Which argument failed, once known.
    pub context: Option<ErrorContext>,
}

fn context_prefix(context: &Option<ErrorContext>) -> String {
    context
        .as_ref()
        .map(|ctx| format!("{ctx}: "))
        .unwrap_or_default()
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates an unsupported type error.
    #[must_use]
    pub fn unsupported(descriptor: TypeDescriptor) -> Self {
        Self::new(ErrorKind::UnsupportedType { descriptor })
    }

    /// Creates a parse error for `token` read as `target`.
    #[must_use]
    pub fn parse(token: impl Into<String>, target: TypeDescriptor, cause: ParseFailure) -> Self {
        Self::new(ErrorKind::Parse {
            token: token.into(),
            target,
            cause,
        })
    }

    /// Creates a reference not found error.
    #[must_use]
    pub fn not_found(reference: Reference, name: impl Into<String>) -> Self {
        Self::new(ErrorKind::ReferenceNotFound {
            reference,
            name: name.into(),
        })
    }

    /// Creates an arity mismatch error.
    #[must_use]
    pub fn arity_mismatch(types: usize, tokens: usize) -> Self {
        Self::new(ErrorKind::ArityMismatch { types, tokens })
    }

    /// Creates an environment fault error.
    #[must_use]
    pub fn environment(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Environment(message.into()))
    }

    /// Returns the index of the failing argument, if known.
    #[must_use]
    pub fn index(&self) -> Option<usize> {
        self.context.as_ref().map(|ctx| ctx.index)
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// No handler exists for the requested type.
    #[error("input handling for type {descriptor} is not implemented")]
    UnsupportedType {
        /// The descriptor that was requested.
        descriptor: TypeDescriptor,
    },

    /// The token is not a valid literal of the target type.
    #[error("cannot read {token:?} as {target}: {cause}")]
    Parse {
        /// The offending token (or the offending part of it).
        token: String,
        /// The type being read.
        target: TypeDescriptor,
        /// The low-level failure.
        #[source]
        cause: ParseFailure,
    },

    /// The token names something the environment does not know.
    #[error("no {reference} named {name:?}")]
    ReferenceNotFound {
        /// What kind of thing was looked up.
        reference: Reference,
        /// The name that failed to resolve.
        name: String,
    },

    /// Fewer type descriptors than tokens were supplied.
    #[error("arity mismatch: {tokens} arguments but only {types} types")]
    ArityMismatch {
        /// Number of descriptors.
        types: usize,
        /// Number of tokens.
        tokens: usize,
    },

    /// The environment failed while answering a query.
    #[error("environment error: {0}")]
    Environment(String),
}

/// Low-level reasons a literal failed to parse.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseFailure {
    /// Integer parse failure.
    #[error(transparent)]
    Int(#[from] ParseIntError),

    /// Floating point parse failure.
    #[error(transparent)]
    Float(#[from] ParseFloatError),

    /// UUID parse failure.
    #[error(transparent)]
    Uuid(#[from] uuid::Error),

    /// No enumeration member has this name.
    #[error("{enumeration} has no member {member}")]
    UnknownMember {
        /// The enumeration searched.
        enumeration: &'static str,
        /// The normalized name that was looked up.
        member: String,
    },

    /// A required separator is absent.
    #[error("missing '{0}' separator")]
    MissingSeparator(char),

    /// The token is empty.
    #[error("empty input")]
    Empty,

    /// A comma separated literal has the wrong number of fields.
    #[error("expected {expected} comma separated fields, found {found}")]
    FieldCount {
        /// Required field count.
        expected: usize,
        /// Field count present.
        found: usize,
    },
}

/// What kind of named thing failed to resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reference {
    /// A loaded world.
    World,
    /// A material kind.
    Material,
    /// An entity class in the class namespaces.
    EntityClass,
}

impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::World => write!(f, "world"),
            Self::Material => write!(f, "material"),
            Self::EntityClass => write!(f, "entity class"),
        }
    }
}

/// Identifies the argument an error belongs to.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorContext {
    /// Position of the argument in the batch.
    pub index: usize,
    /// The whole token as supplied.
    pub token: String,
    /// The type it was being coerced into.
    pub target: TypeDescriptor,
}

impl ErrorContext {
    /// Creates a new context.
    #[must_use]
    pub fn new(index: usize, token: impl Into<String>, target: TypeDescriptor) -> Self {
        Self {
            index,
            token: token.into(),
            target,
        }
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "argument {} ({:?} as {})",
            self.index, self.token, self.target
        )
    }
}
