//! Enumerated value sets.

use std::fmt;

use rustc_hash::FxHashMap;

use crate::{CallResult, ClassRef, ObjectRef, Value};

/// Field every value-holder carries.
pub const VALUE_FIELD: &str = "value";

/// One named entry of an [`EnumSet`].
///
/// Wraps a frozen instance of the set's holder class, so the shared behaviour
/// can be called on it with the holder as receiver.
#[derive(Clone)]
pub struct EnumValue {
    name: String,
    holder: ObjectRef,
}

impl EnumValue {
    /// Wrap a holder instance. The holder is frozen.
    pub fn new(name: impl Into<String>, holder: ObjectRef) -> Self {
        holder.freeze();
        Self {
            name: name.into(),
            holder,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The held value.
    pub fn value(&self) -> Value {
        self.holder.field(VALUE_FIELD).unwrap_or_default()
    }

    /// Call shared behaviour on this value.
    pub fn call(&self, name: &str, args: &[Value]) -> CallResult<Value> {
        self.holder.call(name, args)
    }

    /// Check if shared behaviour named `name` exists.
    pub fn has(&self, name: &str) -> bool {
        self.holder.has(name)
    }

    /// The underlying holder instance.
    pub fn holder(&self) -> &ObjectRef {
        &self.holder
    }
}

impl PartialEq for EnumValue {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.value() == other.value()
    }
}

impl fmt::Debug for EnumValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={:?}", self.name, self.value())
    }
}

/// Ordered mapping from name to [`EnumValue`].
#[derive(Clone)]
pub struct EnumSet {
    class: ClassRef,
    index: FxHashMap<String, usize>,
    values: Vec<EnumValue>,
}

impl EnumSet {
    /// Create an empty set whose holders are instances of `class`.
    pub fn new(class: ClassRef) -> Self {
        Self {
            class,
            index: FxHashMap::default(),
            values: Vec::new(),
        }
    }

    /// Insert a value. A repeated name keeps its first position and takes
    /// the new value.
    pub fn insert(&mut self, value: EnumValue) {
        match self.index.get(value.name()) {
            Some(&slot) => self.values[slot] = value,
            None => {
                self.index.insert(value.name().to_string(), self.values.len());
                self.values.push(value);
            }
        }
    }

    /// The shared holder class.
    pub fn class(&self) -> &ClassRef {
        &self.class
    }

    pub fn get(&self, name: &str) -> Option<&EnumValue> {
        self.index.get(name).map(|&slot| &self.values[slot])
    }

    /// Look up a name by value.
    pub fn name_of(&self, value: &Value) -> Option<&str> {
        self.values
            .iter()
            .find(|v| v.value() == *value)
            .map(EnumValue::name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &EnumValue> {
        self.values.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.values.iter().map(EnumValue::name)
    }
}

impl PartialEq for EnumSet {
    fn eq(&self, other: &Self) -> bool {
        self.values == other.values
    }
}

impl fmt::Debug for EnumSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.values).finish()
    }
}
