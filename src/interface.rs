//! Interface builder.

use ooj_core::{DefineResult, InterfaceEntry, InterfaceRef, Value};

use crate::validate::{self, FUNCTIONS};
use crate::{DefineOptions, Kind};

/// Build an interface from a descriptor with default options.
pub fn interface(descriptor: &Value) -> DefineResult<InterfaceRef> {
    interface_with(descriptor, &DefineOptions::default())
}

/// Build an interface whose table holds one stub per name in `functions`.
#[cfg_attr(feature = "profiling", profiling::function)]
pub fn interface_with(descriptor: &Value, options: &DefineOptions) -> DefineResult<InterfaceRef> {
    let record = validate::validate(descriptor, Kind::Interface)?;
    let functions = record
        .get(FUNCTIONS)
        .and_then(Value::as_list)
        .unwrap_or_default();

    let entry = functions
        .iter()
        .filter_map(Value::as_str)
        .fold(InterfaceEntry::new(), |entry, name| {
            entry.with_function(name, options.stub_policy)
        });

    log::debug!("defined interface requiring {:?}", entry.required);
    Ok(entry.finish())
}
