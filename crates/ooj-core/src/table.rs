//! Method tables.

use std::fmt;

use crate::{Method, Record, Value};

/// Members shared by every instance of a type.
///
/// Holds callables and plain values alike, the way a prototype would. A name
/// counts as *defined* only when it holds something other than `Void`.
#[derive(Clone, Default, PartialEq)]
pub struct MethodTable {
    members: Record,
}

impl MethodTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.members.get(name)
    }

    /// Get a callable member.
    pub fn method(&self, name: &str) -> Option<&Method> {
        self.get(name).and_then(Value::as_function)
    }

    /// Check if a name holds a present value.
    pub fn defines(&self, name: &str) -> bool {
        self.get(name).is_some_and(Value::is_present)
    }

    /// Insert or replace a member.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.members.set(name, value);
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.members.names()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.members.iter()
    }

    /// Names of members that are interface stubs.
    pub fn stubs(&self) -> impl Iterator<Item = &str> {
        self.iter()
            .filter(|(_, value)| value.as_function().is_some_and(Method::is_stub))
            .map(|(name, _)| name)
    }
}

impl fmt::Debug for MethodTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.names()).finish()
    }
}
