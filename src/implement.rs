//! Interface stub-filling.

use ooj_core::{ClassEntry, Method, StubPolicy, Value};

/// Install a stub on `entry` for every capability a listed interface requires
/// that the class does not define yet.
///
/// Entries that are not interfaces are ignored. This runs before inheritance
/// is applied, and the inheritance step lets a parent's real member replace
/// any stub installed here.
pub fn implement_interfaces(
    mut entry: ClassEntry,
    contracts: &[Value],
    policy: StubPolicy,
) -> ClassEntry {
    for interface in contracts.iter().filter_map(Value::as_interface) {
        for name in interface.methods().names() {
            if entry.methods.defines(name) {
                continue;
            }
            log::trace!("stubbing unimplemented capability '{}'", name);
            entry.methods.insert(name, Method::stub(name, policy));
        }
    }
    entry
}

#[cfg(test)]
mod tests {
    use super::*;
    use ooj_core::{ClassEntry, InterfaceEntry};

    #[test]
    fn fills_only_missing_names() {
        let interface = InterfaceEntry::new()
            .with_function("hasOne", StubPolicy::Silent)
            .with_function("hasTwo", StubPolicy::Silent)
            .finish();
        let real = Method::new(|_| Ok(Value::from("defined differently")));
        let entry = ClassEntry::new().with_member("hasOne", real.clone());

        let entry = implement_interfaces(entry, &[Value::from(interface)], StubPolicy::Silent);

        assert!(entry.methods.method("hasOne").unwrap().ptr_eq(&real));
        assert!(entry.methods.method("hasTwo").unwrap().is_stub());
    }

    #[test]
    fn void_member_is_replaced() {
        let interface = InterfaceEntry::new()
            .with_function("run", StubPolicy::Silent)
            .finish();
        let entry = ClassEntry::new().with_member("run", Value::Void);

        let entry = implement_interfaces(entry, &[Value::from(interface)], StubPolicy::Silent);
        assert!(entry.methods.method("run").unwrap().is_stub());
    }

    #[test]
    fn non_interfaces_ignored() {
        let class = ClassEntry::new().with_member("x", Method::noop()).finish();
        let entry = implement_interfaces(
            ClassEntry::new(),
            &[Value::from(class), Value::Int(1)],
            StubPolicy::Silent,
        );
        assert!(entry.methods.is_empty());
    }

    #[test]
    fn stubs_follow_policy() {
        let interface = InterfaceEntry::new()
            .with_function("run", StubPolicy::Silent)
            .finish();
        let entry = implement_interfaces(ClassEntry::new(), &[Value::from(interface)], StubPolicy::Fail);
        let stub = entry.methods.method("run").unwrap();

        assert!(stub.invoke(None, &[]).is_err());
    }
}
