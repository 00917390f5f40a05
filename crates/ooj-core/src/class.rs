//! Class units.
//!
//! A [`ClassEntry`] is the mutable draft the engine fills in while composing
//! a class; [`ClassEntry::finish`] freezes it into a shared [`ClassRef`].
//! Only the static table stays writable afterwards.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::{
    AncestryPredicate, CallError, CallResult, Method, MethodTable, ObjectRef, Record, TypeRef,
    Value,
};

/// Construction routine run against a fresh instance.
#[derive(Clone)]
pub struct Constructor(Rc<dyn Fn(&ObjectRef, &[Value]) -> CallResult<()>>);

impl Constructor {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&ObjectRef, &[Value]) -> CallResult<()> + 'static,
    {
        Self(Rc::new(f))
    }

    /// A constructor that does nothing.
    pub fn noop() -> Self {
        Self::new(|_, _| Ok(()))
    }

    /// A constructor that always refuses, used for interfaces.
    pub fn rejecting() -> Self {
        Self::new(|_, _| Err(CallError::InterfacesCannotBeInstantiated))
    }

    /// Run a `construct` callable with the instance as receiver. Its return
    /// value is discarded.
    pub fn from_method(method: Method) -> Self {
        Self::new(move |this, args| method.invoke(Some(this), args).map(drop))
    }

    pub fn run(&self, this: &ObjectRef, args: &[Value]) -> CallResult<()> {
        (self.0)(this, args)
    }
}

impl Default for Constructor {
    fn default() -> Self {
        Self::noop()
    }
}

impl fmt::Debug for Constructor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Constructor").finish_non_exhaustive()
    }
}

/// Draft of a class under construction.
#[derive(Debug, Clone, Default)]
pub struct ClassEntry {
    /// Shared members.
    pub methods: MethodTable,
    /// Construction routine (already composed with the parent's, if any).
    pub constructor: Constructor,
    /// The single parent type.
    pub parent: Option<TypeRef>,
    /// Direct parent plus directly implemented contracts.
    pub ancestors: Vec<TypeRef>,
    /// Answers ancestry queries for this class.
    pub ancestry: AncestryPredicate,
    /// Members attached to the type itself.
    pub statics: Record,
    /// Static names a descendant should pick up.
    pub static_names: Vec<String>,
}

impl ClassEntry {
    /// Create an empty draft.
    pub fn new() -> Self {
        Self::default()
    }

    // === Builder Methods ===

    pub fn with_constructor(mut self, constructor: Constructor) -> Self {
        self.constructor = constructor;
        self
    }

    pub fn with_member(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.methods.insert(name, value);
        self
    }

    /// Add a static member and record its name for propagation.
    pub fn with_static(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.add_static(name, value);
        self
    }

    pub fn add_static(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        let name = name.into();
        if !self.static_names.contains(&name) {
            self.static_names.push(name.clone());
        }
        self.statics.set(name, value);
    }

    /// Freeze the draft into a shareable class.
    pub fn finish(self) -> ClassRef {
        ClassRef(Rc::new(ClassUnit {
            methods: self.methods,
            constructor: self.constructor,
            parent: self.parent,
            ancestors: self.ancestors,
            ancestry: self.ancestry,
            statics: RefCell::new(self.statics),
            static_names: self.static_names,
        }))
    }
}

/// A finished, constructible class.
pub struct ClassUnit {
    methods: MethodTable,
    constructor: Constructor,
    parent: Option<TypeRef>,
    ancestors: Vec<TypeRef>,
    ancestry: AncestryPredicate,
    statics: RefCell<Record>,
    static_names: Vec<String>,
}

/// Shared handle to a [`ClassUnit`]. Clones refer to the same class.
#[derive(Clone)]
pub struct ClassRef(Rc<ClassUnit>);

impl ClassRef {
    /// Create a new instance, running the construction chain parent-first.
    pub fn construct(&self, args: &[Value]) -> CallResult<ObjectRef> {
        let object = ObjectRef::new(self.clone());
        self.0.constructor.run(&object, args)?;
        Ok(object)
    }

    /// Shorthand for constructing without arguments.
    pub fn instantiate(&self) -> CallResult<ObjectRef> {
        self.construct(&[])
    }

    /// The class itself, as handed to its instances.
    pub fn self_type(&self) -> ClassRef {
        self.clone()
    }

    pub fn methods(&self) -> &MethodTable {
        &self.0.methods
    }

    pub fn constructor(&self) -> &Constructor {
        &self.0.constructor
    }

    pub fn parent(&self) -> Option<&TypeRef> {
        self.0.parent.as_ref()
    }

    /// Direct ancestry list: parent plus implemented contracts.
    pub fn ancestors(&self) -> &[TypeRef] {
        &self.0.ancestors
    }

    pub fn ancestry(&self) -> &AncestryPredicate {
        &self.0.ancestry
    }

    /// Type-level ancestry check.
    pub fn is_instance_of(&self, candidate: impl Into<TypeRef>) -> bool {
        self.0.ancestry.test(&candidate.into())
    }

    /// Check if this class directly implements `interface`.
    pub fn implements(&self, interface: &crate::InterfaceRef) -> bool {
        self.0
            .ancestors
            .iter()
            .filter_map(TypeRef::as_interface)
            .any(|i| i.ptr_eq(interface))
    }

    // === Statics ===

    pub fn get_static(&self, name: &str) -> Option<Value> {
        self.0.statics.borrow().get(name).cloned()
    }

    pub fn set_static(&self, name: impl Into<String>, value: impl Into<Value>) {
        self.0.statics.borrow_mut().set(name, value);
    }

    pub fn has_static(&self, name: &str) -> bool {
        self.0.statics.borrow().get(name).is_some_and(Value::is_present)
    }

    /// Recorded static names, own and inherited.
    pub fn static_names(&self) -> &[String] {
        &self.0.static_names
    }

    /// Invoke a static callable. The callee runs without a receiver.
    pub fn call_static(&self, name: &str, args: &[Value]) -> CallResult<Value> {
        match self.get_static(name) {
            Some(Value::Function(method)) => method.invoke(None, args),
            Some(other) if other.is_present() => Err(CallError::NotCallable {
                name: name.to_string(),
                found: other.type_name(),
            }),
            _ => Err(CallError::MethodNotFound {
                lookup: "class statics",
                method: name.to_string(),
            }),
        }
    }

    /// Reference identity.
    pub fn ptr_eq(&self, other: &ClassRef) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for ClassRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Class")
            .field("methods", &self.0.methods)
            .field("has_parent", &self.0.parent.is_some())
            .field("ancestors", &self.0.ancestors.len())
            .field("statics", &self.0.static_names)
            .finish()
    }
}
