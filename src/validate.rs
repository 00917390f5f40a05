//! Descriptor validation.

use ooj_core::{DefineError, DefineResult, Record, Value};

use crate::Kind;

/// Initialisation logic of a class.
pub const CONSTRUCT: &str = "construct";
/// Single parent type of a class.
pub const EXTEND: &str = "extend";
/// Contract type(s) a class satisfies.
pub const IMPLEMENT: &str = "implement";
/// Members attached to a class itself.
pub const STATICS: &str = "statics";
/// Interface capability names, or enum shared behaviour.
pub const FUNCTIONS: &str = "functions";
/// Enum entries.
pub const VALUES: &str = "values";

/// Check whether a class descriptor field is consumed by the builder rather
/// than copied into the method table.
pub fn is_reserved(field: &str) -> bool {
    matches!(field, CONSTRUCT | EXTEND | IMPLEMENT | STATICS)
}

/// Check that `descriptor` is a record carrying what `kind` requires.
///
/// - every kind: the descriptor itself is a record
/// - interface: `functions` is a non-empty list of names
/// - enum: `values` is a non-empty list
pub fn validate(descriptor: &Value, kind: Kind) -> DefineResult<&Record> {
    let record = descriptor.as_record().ok_or_else(|| {
        DefineError::invalid(format!(
            "{} descriptor must be a record, found {}",
            kind,
            descriptor.type_name()
        ))
    })?;

    match kind {
        Kind::Class => {}
        Kind::Interface => {
            let functions = require_list(record, FUNCTIONS, kind)?;
            if let Some(bad) = functions.iter().find(|f| f.as_str().is_none()) {
                return Err(DefineError::invalid(format!(
                    "interface functions must be names, found {}",
                    bad.type_name()
                )));
            }
        }
        Kind::Enum => {
            require_list(record, VALUES, kind)?;
        }
    }

    Ok(record)
}

/// Fetch a required, non-empty list field.
fn require_list<'a>(record: &'a Record, field: &str, kind: Kind) -> DefineResult<&'a [Value]> {
    let items = record.get(field).and_then(Value::as_list).ok_or_else(|| {
        DefineError::invalid(format!(
            "In order to define an {}, you must define the \"{}\" property as an array.",
            kind.title(),
            field
        ))
    })?;
    if items.is_empty() {
        return Err(DefineError::invalid(format!(
            "the \"{}\" property of an {} must not be empty",
            field,
            kind.title()
        )));
    }
    Ok(items)
}

/// Normalise an optional single-or-list field into a list.
pub(crate) fn as_list(value: Option<&Value>) -> Vec<Value> {
    match value {
        None | Some(Value::Void) => Vec::new(),
        Some(Value::List(items)) => items.clone(),
        Some(other) => vec![other.clone()],
    }
}
