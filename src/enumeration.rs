//! Enum builder.

use ooj_core::{
    ClassEntry, ClassRef, DefineError, DefineResult, EnumSet, EnumValue, VALUE_FIELD, Value,
};

use crate::validate::{self, FUNCTIONS, VALUES};
use crate::{DefineOptions, Kind};

/// Build an enum from a descriptor with default options.
pub fn enumeration(descriptor: &Value) -> DefineResult<EnumSet> {
    enumeration_with(descriptor, &DefineOptions::default())
}

/// Build an enum set.
///
/// Entries are either bare names, which take the running counter (starting at
/// zero), or `[name, value]` pairs, which take `value` and, when it is
/// numeric, move the counter to `value + 1`. Every value is wrapped in a
/// frozen holder whose class carries the descriptor's `functions`.
///
/// Enums install no stubs, so nothing in `options` affects the result. The
/// parameter keeps the signature in line with the other `*_with` builders.
#[cfg_attr(feature = "profiling", profiling::function)]
pub fn enumeration_with(descriptor: &Value, _options: &DefineOptions) -> DefineResult<EnumSet> {
    let record = validate::validate(descriptor, Kind::Enum)?;
    let entries = record
        .get(VALUES)
        .and_then(Value::as_list)
        .unwrap_or_default();

    let holder_class = holder_class(record.get(FUNCTIONS));
    let mut set = EnumSet::new(holder_class.clone());
    let mut counter = Value::Int(0);

    for entry in entries {
        let (name, value) = match entry {
            Value::String(name) => {
                let value = counter.clone();
                counter = successor(&counter).unwrap_or(Value::Void);
                (name, value)
            }
            Value::List(pair) => match pair.as_slice() {
                [Value::String(name), explicit] => {
                    if let Some(next) = successor(explicit) {
                        counter = next;
                    }
                    (name, explicit.clone())
                }
                _ => {
                    return Err(DefineError::invalid(
                        "enum pairs must have the shape [name, value]",
                    ));
                }
            },
            other => {
                return Err(DefineError::invalid(format!(
                    "enum values must be names or [name, value] pairs, found {}",
                    other.type_name()
                )));
            }
        };

        set.insert(EnumValue::new(name.as_str(), holder(&holder_class, value)?));
    }

    log::debug!("defined enum with {} values", set.len());
    Ok(set)
}

/// The class every value-holder of one enum shares.
fn holder_class(functions: Option<&Value>) -> ClassRef {
    let mut entry = ClassEntry::new();
    if let Some(Value::Record(functions)) = functions {
        for (name, behaviour) in functions.iter() {
            entry.methods.insert(name, behaviour.clone());
        }
    }
    entry.finish()
}

fn holder(class: &ClassRef, value: Value) -> DefineResult<ooj_core::ObjectRef> {
    let object = class
        .instantiate()
        .map_err(|e| DefineError::invalid(e.to_string()))?;
    object
        .set(VALUE_FIELD, value)
        .map_err(|e| DefineError::invalid(e.to_string()))?;
    Ok(object)
}

/// Next counter value after a numeric value.
fn successor(value: &Value) -> Option<Value> {
    match value {
        Value::Int(v) => Some(Value::Int(v.saturating_add(1))),
        Value::Float(v) => Some(Value::Float(v + 1.0)),
        _ => None,
    }
}
