//! Shared callables and their flags.

use std::fmt;
use std::rc::Rc;

use bitflags::bitflags;

use crate::{CallContext, CallError, CallResult, ObjectRef, Value};

bitflags! {
    /// How a method ended up in a table.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct MethodFlags: u8 {
        /// Placeholder installed for a capability nobody implemented.
        const STUB = 1 << 0;
        /// Overrides a parent method and can reach it through `call_super`.
        const SUPER_AWARE = 1 << 1;
        /// Copied unchanged from a parent's table.
        const INHERITED = 1 << 2;
    }
}

/// What an interface stub does when it is invoked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StubPolicy {
    /// Log a warning and return `Void`.
    #[default]
    Silent,
    /// Fail with [`CallError::Unimplemented`].
    Fail,
}

/// Trait for callable method bodies.
///
/// The `call` method receives a [`CallContext`] exposing the receiver, the
/// arguments and, for overriding methods, the parent version.
pub trait NativeCallable {
    /// Call this function with the given context.
    fn call(&self, ctx: &mut CallContext<'_>) -> CallResult<Value>;
}

impl<F> NativeCallable for F
where
    F: Fn(&mut CallContext<'_>) -> CallResult<Value>,
{
    fn call(&self, ctx: &mut CallContext<'_>) -> CallResult<Value> {
        (self)(ctx)
    }
}

/// A callable stored in method tables, static tables and descriptors.
///
/// Cloning shares the underlying body. A method may carry the parent version
/// it overrides; invoking it hands that parent to the body through the call
/// context for the duration of the call only.
#[derive(Clone)]
pub struct Method {
    inner: Rc<dyn NativeCallable>,
    flags: MethodFlags,
    parent: Option<Rc<Method>>,
}

impl Method {
    /// Create a method from a closure.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&mut CallContext<'_>) -> CallResult<Value> + 'static,
    {
        Self::from_callable(f)
    }

    /// Create a method from any [`NativeCallable`].
    pub fn from_callable<C>(callable: C) -> Self
    where
        C: NativeCallable + 'static,
    {
        Self {
            inner: Rc::new(callable),
            flags: MethodFlags::empty(),
            parent: None,
        }
    }

    /// A method that does nothing and returns `Void`.
    pub fn noop() -> Self {
        Self::new(|_| Ok(Value::Void))
    }

    /// Placeholder for a required capability named `name`.
    pub fn stub(name: impl Into<String>, policy: StubPolicy) -> Self {
        let name = name.into();
        let mut method = Self::new(move |_| match policy {
            StubPolicy::Silent => {
                log::warn!("unimplemented capability '{}' invoked", name);
                Ok(Value::Void)
            }
            StubPolicy::Fail => Err(CallError::Unimplemented {
                method: name.clone(),
            }),
        });
        method.flags = MethodFlags::STUB;
        method
    }

    /// Wrap this method so its body can reach `parent` via
    /// [`CallContext::call_super`].
    pub fn with_super(mut self, parent: Method) -> Self {
        self.flags.insert(MethodFlags::SUPER_AWARE);
        self.flags.remove(MethodFlags::INHERITED);
        self.parent = Some(Rc::new(parent));
        self
    }

    /// Add flags to this method.
    pub fn with_flags(mut self, flags: MethodFlags) -> Self {
        self.flags.insert(flags);
        self
    }

    pub fn flags(&self) -> MethodFlags {
        self.flags
    }

    pub fn is_stub(&self) -> bool {
        self.flags.contains(MethodFlags::STUB)
    }

    /// The overridden parent version, if this method is super-aware.
    pub fn parent(&self) -> Option<&Method> {
        self.parent.as_deref()
    }

    /// Check whether two methods share the same body.
    pub fn ptr_eq(&self, other: &Method) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    /// Invoke this method against an optional receiver.
    ///
    /// The parent reference lives in the call context, so it is gone as soon
    /// as this returns, whether the body succeeded or failed.
    pub fn invoke(&self, this: Option<&ObjectRef>, args: &[Value]) -> CallResult<Value> {
        let mut ctx = CallContext::new(this, args, self.parent.as_deref());
        self.inner.call(&mut ctx)
    }
}

impl fmt::Debug for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Method")
            .field("flags", &self.flags)
            .field("has_parent", &self.parent.is_some())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn noop_returns_void() {
        assert_eq!(Method::noop().invoke(None, &[]), Ok(Value::Void));
    }

    #[test]
    fn silent_stub_returns_void() {
        let stub = Method::stub("eat", StubPolicy::Silent);
        assert!(stub.is_stub());
        assert_eq!(stub.invoke(None, &[]), Ok(Value::Void));
    }

    #[test]
    fn failing_stub_reports_capability() {
        let stub = Method::stub("eat", StubPolicy::Fail);
        assert_eq!(
            stub.invoke(None, &[]),
            Err(CallError::Unimplemented {
                method: "eat".to_string()
            })
        );
    }

    #[test]
    fn super_dispatch_reaches_parent() {
        let parent = Method::new(|_| Ok(Value::from("base")));
        let child = Method::new(|ctx| {
            let base = ctx.call_super()?;
            Ok(Value::from(format!("{}!", base.as_str().unwrap_or_default())))
        })
        .with_super(parent);

        assert!(child.flags().contains(MethodFlags::SUPER_AWARE));
        assert_eq!(child.invoke(None, &[]), Ok(Value::from("base!")));
    }

    #[test]
    fn super_without_parent_fails() {
        let method = Method::new(|ctx| ctx.call_super());
        assert_eq!(method.invoke(None, &[]), Err(CallError::NoSuperMethod));
    }

    #[test]
    fn super_receives_same_arguments() {
        let parent = Method::new(|ctx| Ok(Value::Int(ctx.arg::<i64>(0)? * 2)));
        let child = Method::new(|ctx| {
            let doubled: i64 = ctx.call_super()?.as_int().unwrap_or_default();
            Ok(Value::Int(doubled + 1))
        })
        .with_super(parent);

        assert_eq!(child.invoke(None, &[Value::Int(20)]), Ok(Value::Int(41)));
    }

    #[test]
    fn clones_share_body() {
        let a = Method::noop();
        let b = a.clone().with_flags(MethodFlags::INHERITED);
        assert!(a.ptr_eq(&b));
        assert!(!a.ptr_eq(&Method::noop()));
    }
}
