//! Interface (contract) units.

use std::fmt;
use std::rc::Rc;

use crate::{CallError, CallResult, Method, MethodTable, ObjectRef, StubPolicy, Value};

/// Draft of an interface.
#[derive(Debug, Clone, Default)]
pub struct InterfaceEntry {
    /// Required capability names, first occurrence order.
    pub required: Vec<String>,
    /// One stub per required name.
    pub methods: MethodTable,
}

impl InterfaceEntry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Require a capability. Duplicate names collapse into one stub.
    pub fn with_function(mut self, name: impl Into<String>, policy: StubPolicy) -> Self {
        let name = name.into();
        if !self.methods.defines(&name) {
            self.methods.insert(name.clone(), Method::stub(name.clone(), policy));
            self.required.push(name);
        }
        self
    }

    pub fn finish(self) -> InterfaceRef {
        InterfaceRef(Rc::new(InterfaceUnit {
            required: self.required,
            methods: self.methods,
        }))
    }
}

/// A finished contract type. It can be implemented or extended but never
/// instantiated.
pub struct InterfaceUnit {
    required: Vec<String>,
    methods: MethodTable,
}

/// Shared handle to an [`InterfaceUnit`].
#[derive(Clone)]
pub struct InterfaceRef(Rc<InterfaceUnit>);

impl InterfaceRef {
    /// Always fails: interfaces cannot be instantiated.
    pub fn construct(&self, _args: &[Value]) -> CallResult<ObjectRef> {
        Err(CallError::InterfacesCannotBeInstantiated)
    }

    pub fn methods(&self) -> &MethodTable {
        &self.0.methods
    }

    /// Required capability names.
    pub fn required(&self) -> &[String] {
        &self.0.required
    }

    pub fn requires(&self, name: &str) -> bool {
        self.0.methods.defines(name)
    }

    pub fn ptr_eq(&self, other: &InterfaceRef) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for InterfaceRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Interface")
            .field("required", &self.0.required)
            .finish()
    }
}
