//! Class builder.

use ooj_core::{ClassEntry, ClassRef, Constructor, DefineResult, Value};

use crate::ancestry::{collect_ancestors, generate_is_instance_of};
use crate::extend::extend_class;
use crate::implement::implement_interfaces;
use crate::validate::{self, CONSTRUCT, EXTEND, IMPLEMENT, STATICS};
use crate::{DefineOptions, Kind};

/// Build a class from a descriptor with default options.
pub fn class(descriptor: &Value) -> DefineResult<ClassRef> {
    class_with(descriptor, &DefineOptions::default())
}

/// Build a class from a descriptor.
///
/// Steps, in order:
/// 1. validate the descriptor is a record
/// 2. pick `construct` if it is callable, else a no-op
/// 3. copy every non-reserved field into the method table
/// 4. copy `statics` onto the type and record their names
/// 5. stub out capabilities required by `implement`
/// 6. inherit from `extend`
/// 7. attach the ancestry list and predicate
#[cfg_attr(feature = "profiling", profiling::function)]
pub fn class_with(descriptor: &Value, options: &DefineOptions) -> DefineResult<ClassRef> {
    let record = validate::validate(descriptor, Kind::Class)?;

    let constructor = match record.get(CONSTRUCT) {
        Some(Value::Function(construct)) => Constructor::from_method(construct.clone()),
        _ => Constructor::noop(),
    };
    let mut entry = ClassEntry::new().with_constructor(constructor);

    for (name, value) in record.iter() {
        if !validate::is_reserved(name) {
            entry.methods.insert(name, value.clone());
        }
    }

    if let Some(Value::Record(statics)) = record.get(STATICS) {
        for (name, value) in statics.iter() {
            entry.add_static(name, value.clone());
        }
    }

    let implement = validate::as_list(record.get(IMPLEMENT));
    let entry = implement_interfaces(entry, &implement, options.stub_policy);

    let extend = record.get(EXTEND).cloned().unwrap_or_default();
    let mut entry = extend_class(entry, &extend)?;

    entry.ancestors = collect_ancestors(&validate::as_list(Some(&extend)), &implement);
    entry.ancestry = generate_is_instance_of(entry.ancestors.clone());

    log::debug!(
        "defined class: {} members, {} statics, {} ancestors, parent: {}",
        entry.methods.len(),
        entry.static_names.len(),
        entry.ancestors.len(),
        entry.parent.is_some()
    );
    Ok(entry.finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ooj_core::{DefineError, Method, MethodFlags, Record};

    fn descriptor(record: Record) -> Value {
        Value::Record(record)
    }

    #[test]
    fn reserved_fields_stay_out_of_table() {
        let parent = class(&descriptor(Record::new())).unwrap();
        let class = class(&descriptor(
            Record::new()
                .with(CONSTRUCT, Method::noop())
                .with(EXTEND, parent)
                .with(IMPLEMENT, Value::Void)
                .with(STATICS, Record::new().with("x", 1))
                .with("getValue", Method::noop())
                .with("value", 10),
        ))
        .unwrap();

        let names: Vec<_> = class.methods().names().collect();
        assert_eq!(names, vec!["getValue", "value"]);
        assert_eq!(class.get_static("x"), Some(Value::Int(1)));
    }

    #[test]
    fn non_callable_construct_is_ignored() {
        let class = class(&descriptor(Record::new().with(CONSTRUCT, 5))).unwrap();
        let object = class.instantiate().unwrap();
        assert!(object.field_names().is_empty());
        assert!(class.methods().get(CONSTRUCT).is_none());
    }

    #[test]
    fn rejects_non_record() {
        assert!(matches!(
            class(&Value::from("Fruit")),
            Err(DefineError::InvalidArgument(_))
        ));
    }

    #[test]
    fn list_extend_rejected() {
        let a = class(&descriptor(Record::new())).unwrap();
        let b = class(&descriptor(Record::new())).unwrap();
        let err = class(&descriptor(Record::new().with(EXTEND, Value::list([a, b])))).unwrap_err();
        assert_eq!(err, DefineError::CannotExtendMultipleClasses);
    }

    #[test]
    fn scalar_extend_builds_without_parent() {
        for parent in [Value::Int(5), Value::Bool(false), Value::from("Fruit")] {
            let class = class(&descriptor(Record::new().with(EXTEND, parent))).unwrap();
            assert!(class.parent().is_none());
            assert!(class.ancestors().is_empty());
            assert!(class.instantiate().is_ok());
        }
    }

    #[test]
    fn own_member_wins_over_parent() {
        let parent = class(&descriptor(
            Record::new().with("getName", Method::new(|_| Ok(Value::from("Unnamed")))),
        ))
        .unwrap();
        let child = class(&descriptor(
            Record::new()
                .with(EXTEND, parent)
                .with("getName", Method::new(|_| Ok(Value::from("Apple")))),
        ))
        .unwrap();

        let method = child.methods().method("getName").unwrap();
        assert!(method.flags().contains(MethodFlags::SUPER_AWARE));
        let apple = child.instantiate().unwrap();
        assert_eq!(apple.call("getName", &[]), Ok(Value::from("Apple")));
    }
}
