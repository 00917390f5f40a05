//! Call context handed to method bodies.

use std::fmt;

use crate::convert::FromValue;
use crate::{CallError, CallResult, ClassRef, Method, ObjectRef, Value};

/// Context for a single method call.
///
/// Holds the receiver (absent for static calls), the arguments, and the
/// parent version of the method when the callee overrides one. The context
/// only lives for one call, so super dispatch never leaves state behind on
/// the receiver.
///
/// ## Typed Argument Access
///
/// ```ignore
/// let x: i64 = ctx.arg(0)?;
/// let name: String = ctx.arg(1)?;
/// ```
pub struct CallContext<'a> {
    this: Option<&'a ObjectRef>,
    args: &'a [Value],
    parent: Option<&'a Method>,
}

impl<'a> CallContext<'a> {
    /// Create a new call context.
    pub fn new(this: Option<&'a ObjectRef>, args: &'a [Value], parent: Option<&'a Method>) -> Self {
        Self { this, args, parent }
    }

    /// The receiver of this call.
    pub fn this(&self) -> CallResult<&'a ObjectRef> {
        self.this.ok_or(CallError::NoReceiver)
    }

    /// The receiver's class.
    pub fn class(&self) -> CallResult<&'a ClassRef> {
        self.this().map(ObjectRef::class)
    }

    pub fn args(&self) -> &'a [Value] {
        self.args
    }

    pub fn arg_count(&self) -> usize {
        self.args.len()
    }

    /// Get a raw reference to an argument.
    pub fn arg_slot(&self, index: usize) -> CallResult<&'a Value> {
        self.args
            .get(index)
            .ok_or(CallError::ArgumentIndexOutOfBounds {
                index,
                count: self.args.len(),
            })
    }

    /// Get a typed argument value.
    pub fn arg<T: FromValue>(&self, index: usize) -> CallResult<T> {
        let slot = self.arg_slot(index)?;
        T::from_value(slot).map_err(CallError::Conversion)
    }

    /// Read a member of the receiver (own field or class member).
    pub fn get(&self, name: &str) -> CallResult<Value> {
        Ok(self.this()?.get(name).unwrap_or_default())
    }

    /// Assign a field on the receiver.
    pub fn set(&self, name: impl Into<String>, value: impl Into<Value>) -> CallResult<()> {
        self.this()?.set(name, value)
    }

    /// Call another member on the receiver.
    pub fn call(&self, name: &str, args: &[Value]) -> CallResult<Value> {
        self.this()?.call(name, args)
    }

    /// Whether this call overrides a parent method.
    pub fn has_super(&self) -> bool {
        self.parent.is_some()
    }

    /// Run the overridden parent method with the same receiver and arguments.
    pub fn call_super(&self) -> CallResult<Value> {
        self.call_super_with(self.args)
    }

    /// Run the overridden parent method with different arguments.
    pub fn call_super_with(&self, args: &[Value]) -> CallResult<Value> {
        let parent = self.parent.ok_or(CallError::NoSuperMethod)?;
        parent.invoke(self.this, args)
    }
}

impl fmt::Debug for CallContext<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CallContext")
            .field("has_this", &self.this.is_some())
            .field("arg_count", &self.args.len())
            .field("has_super", &self.parent.is_some())
            .finish()
    }
}
