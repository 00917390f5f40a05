//! Error types for the composition engine.
//!
//! ## Error Hierarchy
//!
//! ```text
//! OojError (top-level wrapper)
//! ├── DefineError - Descriptor validation and type composition errors
//! └── CallError   - Construction and method invocation errors
//! ```
//!
//! Builders only ever return [`DefineError`]. Everything that happens once a
//! type exists (constructing instances, calling members, super dispatch)
//! reports a [`CallError`].

use thiserror::Error;

// ============================================================================
// Define Errors
// ============================================================================

/// Errors raised while building a class, interface or enum.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DefineError {
    /// The descriptor is malformed for the requested kind, or the kind tag
    /// itself is not recognised.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// `extend` was given a list of parents.
    #[error("Cannot extend multiple classes, only one.")]
    CannotExtendMultipleClasses,
}

impl DefineError {
    /// Shorthand for [`DefineError::InvalidArgument`].
    pub fn invalid(msg: impl Into<String>) -> Self {
        DefineError::InvalidArgument(msg.into())
    }
}

// ============================================================================
// Conversion Errors
// ============================================================================

/// A value did not have the shape a caller asked for.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    /// The value's type does not match the requested type.
    #[error("expected {expected}, found {actual}")]
    TypeMismatch {
        expected: &'static str,
        actual: &'static str,
    },

    /// An integer does not fit the requested width.
    #[error("integer {value} does not fit in {target_type}")]
    IntegerOverflow {
        value: i64,
        target_type: &'static str,
    },
}

// ============================================================================
// Call Errors
// ============================================================================

/// Errors raised while constructing instances or invoking members.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CallError {
    /// Construction was attempted on an interface.
    #[error("Interfaces cannot be instantiated. They must be extended.")]
    InterfacesCannotBeInstantiated,

    /// No member with this name exists on the receiver or its type.
    #[error("{lookup} has no member named '{method}'")]
    MethodNotFound {
        /// Where the lookup ran: `"instance"` or `"class statics"`.
        lookup: &'static str,
        /// The missing member.
        method: String,
    },

    /// The member exists but holds a non-callable value.
    #[error("member '{name}' is not callable (found {found})")]
    NotCallable {
        /// The member name.
        name: String,
        /// Type name of the value found.
        found: &'static str,
    },

    /// An interface stub was invoked while stubs are configured to fail.
    #[error("unimplemented capability '{method}'")]
    Unimplemented {
        /// The capability that was never implemented.
        method: String,
    },

    /// `call_super` was used by a method that does not override anything.
    #[error("no parent method available for super dispatch")]
    NoSuperMethod,

    /// A method needing `this` was called without a receiver.
    #[error("method requires a receiver but was called statically")]
    NoReceiver,

    /// An argument index was past the end of the argument list.
    #[error("argument index {index} out of bounds (count: {count})")]
    ArgumentIndexOutOfBounds { index: usize, count: usize },

    /// An argument could not be converted to the requested type.
    #[error("conversion error: {0}")]
    Conversion(#[from] ConversionError),

    /// A field write hit a frozen object (enum value-holders).
    #[error("cannot assign '{field}' on a frozen object")]
    Frozen {
        /// The field that was written.
        field: String,
    },

    /// A user callable failed.
    #[error("{0}")]
    Raised(String),
}

impl CallError {
    /// Create an error raised by user code.
    pub fn raised(msg: impl Into<String>) -> Self {
        CallError::Raised(msg.into())
    }
}

// ============================================================================
// Unified Error
// ============================================================================

/// Top-level error for callers that build and use types in one flow.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OojError {
    #[error(transparent)]
    Define(#[from] DefineError),

    #[error(transparent)]
    Call(#[from] CallError),
}

/// Result alias for builder operations.
pub type DefineResult<T> = Result<T, DefineError>;

/// Result alias for runtime operations.
pub type CallResult<T> = Result<T, CallError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_messages_match_library_wording() {
        assert_eq!(
            CallError::InterfacesCannotBeInstantiated.to_string(),
            "Interfaces cannot be instantiated. They must be extended."
        );
        assert_eq!(
            DefineError::CannotExtendMultipleClasses.to_string(),
            "Cannot extend multiple classes, only one."
        );
    }

    #[test]
    fn method_not_found_names_lookup() {
        let err = CallError::MethodNotFound {
            lookup: "instance",
            method: "walk".to_string(),
        };
        assert_eq!(err.to_string(), "instance has no member named 'walk'");
    }

    #[test]
    fn invalid_argument_carries_message() {
        let err = DefineError::invalid("Data must be an object");
        assert_eq!(err.to_string(), "invalid argument: Data must be an object");
    }

    #[test]
    fn conversion_error_wraps_into_call_error() {
        let err: CallError = ConversionError::TypeMismatch {
            expected: "int",
            actual: "string",
        }
        .into();
        assert!(matches!(err, CallError::Conversion(_)));
        assert_eq!(err.to_string(), "conversion error: expected int, found string");
    }

    #[test]
    fn unified_error_from_phases() {
        let define: OojError = DefineError::CannotExtendMultipleClasses.into();
        let call: OojError = CallError::NoSuperMethod.into();
        assert!(matches!(define, OojError::Define(_)));
        assert!(matches!(call, OojError::Call(_)));
        assert_eq!(call.to_string(), "no parent method available for super dispatch");
    }
}
