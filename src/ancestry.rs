//! Ancestry testing.

use ooj_core::{AncestryPredicate, TypeRef, Value};

/// Build the direct ancestry list of a class: the union of its `extend` and
/// `implement` entries, in that order, without duplicates. Falsy entries and
/// anything that is not a type are dropped.
pub fn collect_ancestors(extend: &[Value], implement: &[Value]) -> Vec<TypeRef> {
    let mut ancestors: Vec<TypeRef> = Vec::new();
    for candidate in extend.iter().chain(implement) {
        if !candidate.is_truthy() {
            continue;
        }
        let Some(ty) = candidate.as_type() else {
            log::trace!("ignoring {} in ancestry list", candidate.type_name());
            continue;
        };
        if !ancestors.iter().any(|a| a.ptr_eq(&ty)) {
            ancestors.push(ty);
        }
    }
    ancestors
}

/// Generate the ancestry predicate for a type whose direct ancestors are
/// `list`.
///
/// A candidate matches when it is one of the direct ancestors, or when any
/// direct ancestor that has its own predicate matches it. Interfaces have no
/// predicate, so recursion stops there.
pub fn generate_is_instance_of(list: Vec<TypeRef>) -> AncestryPredicate {
    if list.is_empty() {
        return AncestryPredicate::never();
    }

    AncestryPredicate::new(move |candidate| {
        for ancestor in &list {
            if ancestor.ptr_eq(candidate) {
                return true;
            }
            if let Some(predicate) = ancestor.ancestry()
                && predicate.test(candidate)
            {
                return true;
            }
        }
        false
    })
}
