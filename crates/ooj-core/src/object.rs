//! Instances.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

use crate::{CallError, CallResult, ClassRef, Record, TypeRef, Value};

struct Object {
    class: ClassRef,
    fields: RefCell<Record>,
    frozen: Cell<bool>,
}

/// Shared handle to an instance.
///
/// Instances own only their fields and a back-reference to the class that
/// produced them; members are looked up in the class table at call time.
/// Field storage is not borrowed across member calls, so a method may freely
/// read and write its receiver while running. Calls on one instance are
/// expected to happen one at a time.
#[derive(Clone)]
pub struct ObjectRef(Rc<Object>);

impl ObjectRef {
    pub(crate) fn new(class: ClassRef) -> Self {
        Self(Rc::new(Object {
            class,
            fields: RefCell::new(Record::new()),
            frozen: Cell::new(false),
        }))
    }

    /// The class that produced this instance.
    pub fn class(&self) -> &ClassRef {
        &self.0.class
    }

    /// Own field only.
    pub fn field(&self, name: &str) -> Option<Value> {
        self.0.fields.borrow().get(name).cloned()
    }

    /// Own field, falling back to the class table.
    pub fn get(&self, name: &str) -> Option<Value> {
        self.field(name)
            .or_else(|| self.0.class.methods().get(name).cloned())
    }

    /// Check if a member is present on the instance or its class.
    pub fn has(&self, name: &str) -> bool {
        self.get(name).is_some_and(|v| v.is_present())
    }

    /// Assign an own field.
    pub fn set(&self, name: impl Into<String>, value: impl Into<Value>) -> CallResult<()> {
        let name = name.into();
        if self.0.frozen.get() {
            return Err(CallError::Frozen { field: name });
        }
        self.0.fields.borrow_mut().set(name, value);
        Ok(())
    }

    /// Own field names in assignment order.
    pub fn field_names(&self) -> Vec<String> {
        self.0.fields.borrow().names().map(str::to_string).collect()
    }

    /// Call a member with this instance as receiver.
    pub fn call(&self, name: &str, args: &[Value]) -> CallResult<Value> {
        match self.get(name) {
            Some(Value::Function(method)) => method.invoke(Some(self), args),
            Some(other) if other.is_present() => Err(CallError::NotCallable {
                name: name.to_string(),
                found: other.type_name(),
            }),
            _ => Err(CallError::MethodNotFound {
                lookup: "instance",
                method: name.to_string(),
            }),
        }
    }

    /// Instance-level ancestry check.
    pub fn is_instance_of(&self, candidate: impl Into<TypeRef>) -> bool {
        self.0.class.is_instance_of(candidate)
    }

    /// Reject all further field writes.
    pub fn freeze(&self) {
        self.0.frozen.set(true);
    }

    pub fn is_frozen(&self) -> bool {
        self.0.frozen.get()
    }

    pub fn ptr_eq(&self, other: &ObjectRef) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for ObjectRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Object")
            .field("fields", &self.field_names())
            .field("frozen", &self.0.frozen.get())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ClassEntry, Method};

    fn counter_class() -> ClassRef {
        ClassEntry::new()
            .with_member("label", "counter")
            .with_member(
                "bump",
                Method::new(|ctx| {
                    let next = ctx.get("n")?.as_int().unwrap_or(0) + 1;
                    ctx.set("n", next)?;
                    Ok(Value::Int(next))
                }),
            )
            .finish()
    }

    #[test]
    fn members_fall_back_to_class() {
        let object = counter_class().instantiate().unwrap();

        assert_eq!(object.get("label"), Some(Value::from("counter")));
        assert_eq!(object.field("label"), None);
        object.set("label", "mine").unwrap();
        assert_eq!(object.get("label"), Some(Value::from("mine")));
    }

    #[test]
    fn methods_mutate_receiver() {
        let object = counter_class().instantiate().unwrap();

        assert_eq!(object.call("bump", &[]), Ok(Value::Int(1)));
        assert_eq!(object.call("bump", &[]), Ok(Value::Int(2)));
        assert_eq!(object.field_names(), vec!["n".to_string()]);
    }

    #[test]
    fn call_errors() {
        let object = counter_class().instantiate().unwrap();

        assert!(matches!(
            object.call("label", &[]),
            Err(CallError::NotCallable { found: "string", .. })
        ));
        assert!(matches!(
            object.call("nothing", &[]),
            Err(CallError::MethodNotFound { lookup: "instance", .. })
        ));
    }

    #[test]
    fn frozen_rejects_writes() {
        let object = counter_class().instantiate().unwrap();
        object.set("n", 1).unwrap();
        object.freeze();

        assert!(object.is_frozen());
        assert_eq!(
            object.set("n", 2),
            Err(CallError::Frozen {
                field: "n".to_string()
            })
        );
        assert_eq!(object.get("n"), Some(Value::Int(1)));
    }
}
