//! Single inheritance.

use ooj_core::{
    ClassEntry, Constructor, DefineError, DefineResult, MethodFlags, TypeRef, Value,
};

/// Compose `entry` with `parent`.
///
/// - list parent: [`DefineError::CannotExtendMultipleClasses`].
/// - class or interface parent: see [`inherit`].
/// - anything else (including `Void`): `entry` is returned unchanged.
pub fn extend_class(entry: ClassEntry, parent: &Value) -> DefineResult<ClassEntry> {
    match parent {
        Value::List(_) => Err(DefineError::CannotExtendMultipleClasses),
        other => match other.as_type() {
            Some(parent) => Ok(inherit(entry, parent)),
            None => {
                if other.is_present() {
                    log::trace!("ignoring non-type parent ({})", other.type_name());
                }
                Ok(entry)
            }
        },
    }
}

/// Make `entry` a child of `parent`.
///
/// 1. The constructor becomes parent-then-child on the same instance.
/// 2. Parent members the child lacks (or only stubs) are copied in.
/// 3. Callables defined by both become super-aware child methods.
/// 4. Recorded parent statics the child lacks are copied onto the child.
pub fn inherit(mut entry: ClassEntry, parent: TypeRef) -> ClassEntry {
    let parent_constructor = parent.constructor();
    let own_constructor = std::mem::take(&mut entry.constructor);
    entry.constructor = Constructor::new(move |this, args| {
        parent_constructor.run(this, args)?;
        own_constructor.run(this, args)
    });

    for (name, inherited) in parent.methods().iter() {
        let own = entry.methods.get(name).cloned().unwrap_or_default();
        match (own, inherited) {
            (own, inherited) if !own.is_present() => {
                log::trace!("inheriting '{}'", name);
                entry.methods.insert(name, mark_inherited(inherited));
            }
            (Value::Function(own), inherited) if own.is_stub() && inherited.is_present() => {
                log::trace!("parent implementation replaces stub '{}'", name);
                entry.methods.insert(name, mark_inherited(inherited));
            }
            (Value::Function(own), Value::Function(parent_method)) => {
                log::trace!("wrapping '{}' for super dispatch", name);
                entry
                    .methods
                    .insert(name, own.with_super(parent_method.clone()));
            }
            _ => {}
        }
    }

    if let Some(parent_class) = parent.as_class() {
        for name in parent_class.static_names() {
            let present = entry.statics.get(name).is_some_and(Value::is_present);
            if present {
                continue;
            }
            if let Some(value) = parent_class.get_static(name) {
                entry.add_static(name.as_str(), value);
            }
        }
    }

    entry.parent = Some(parent);
    entry
}

fn mark_inherited(value: &Value) -> Value {
    match value {
        Value::Function(method) => Value::Function(method.clone().with_flags(MethodFlags::INHERITED)),
        other => other.clone(),
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use ooj_core::{CallError, InterfaceEntry, Method, StubPolicy};

    fn returning(text: &'static str) -> Method {
        Method::new(move |_| Ok(Value::from(text)))
    }

    #[test]
    fn no_parent_is_identity() {
        let entry = ClassEntry::new().with_member("m", 1);
        let entry = extend_class(entry, &Value::Void).unwrap();
        assert!(entry.parent.is_none());
        assert_eq!(entry.methods.len(), 1);
    }

    #[test]
    fn list_parent_rejected() {
        let parent = ClassEntry::new().finish();
        let err = extend_class(ClassEntry::new(), &Value::list([parent])).unwrap_err();
        assert_eq!(err, DefineError::CannotExtendMultipleClasses);
    }

    #[test]
    fn non_type_parent_is_ignored() {
        for parent in [Value::Int(5), Value::Bool(false), Value::from("Fruit")] {
            let entry = ClassEntry::new().with_member("m", 1);
            let entry = extend_class(entry, &parent).unwrap();
            assert!(entry.parent.is_none());
            assert_eq!(entry.methods.len(), 1);
        }
    }

    #[test]
    fn constructors_run_parent_first() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let parent_log = log.clone();
        let child_log = log.clone();

        let parent = ClassEntry::new()
            .with_constructor(Constructor::new(move |_, _| {
                parent_log.borrow_mut().push("parent");
                Ok(())
            }))
            .finish();
        let child = ClassEntry::new().with_constructor(Constructor::new(move |_, _| {
            child_log.borrow_mut().push("child");
            Ok(())
        }));

        let child = inherit(child, parent.into()).finish();
        child.instantiate().unwrap();
        assert_eq!(*log.borrow(), vec!["parent", "child"]);
    }

    #[test]
    fn merge_prefers_child_and_wraps_overrides() {
        let parent = ClassEntry::new()
            .with_member("shared", returning("p"))
            .with_member("only_parent", returning("op"))
            .with_member("value", 1)
            .finish();
        let child = ClassEntry::new()
            .with_member("shared", returning("c"))
            .with_member("value", 2);

        let entry = inherit(child, parent.into());

        let shared = entry.methods.method("shared").unwrap();
        assert!(shared.flags().contains(MethodFlags::SUPER_AWARE));
        assert_eq!(shared.invoke(None, &[]), Ok(Value::from("c")));
        assert_eq!(
            shared.parent().unwrap().invoke(None, &[]),
            Ok(Value::from("p"))
        );

        let only_parent = entry.methods.method("only_parent").unwrap();
        assert!(only_parent.flags().contains(MethodFlags::INHERITED));
        assert_eq!(entry.methods.get("value"), Some(&Value::Int(2)));
    }

    #[test]
    fn parent_implementation_replaces_stub() {
        let parent = ClassEntry::new().with_member("eat", returning("eaten")).finish();
        let child = ClassEntry::new().with_member("eat", Method::stub("eat", StubPolicy::Fail));

        let entry = inherit(child, parent.into());
        let eat = entry.methods.method("eat").unwrap();
        assert!(!eat.is_stub());
        assert_eq!(eat.invoke(None, &[]), Ok(Value::from("eaten")));
    }

    #[test]
    fn statics_propagate() {
        let parent = ClassEntry::new()
            .with_static("kind", "fruit")
            .with_static("shared", 1)
            .finish();
        let child = ClassEntry::new().with_static("shared", 2);

        let child = inherit(child, parent.into()).finish();
        assert_eq!(child.get_static("kind"), Some(Value::from("fruit")));
        assert_eq!(child.get_static("shared"), Some(Value::Int(2)));
        assert!(child.static_names().contains(&"kind".to_string()));
    }

    #[test]
    fn extending_an_interface_blocks_construction() {
        let interface = InterfaceEntry::new()
            .with_function("run", StubPolicy::Silent)
            .finish();
        let child = inherit(ClassEntry::new(), interface.into()).finish();

        assert!(child.methods().method("run").unwrap().is_stub());
        assert!(matches!(
            child.instantiate(),
            Err(CallError::InterfacesCannotBeInstantiated)
        ));
    }
}
