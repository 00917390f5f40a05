//! References to type units and the ancestry predicate.

use std::fmt;
use std::rc::Rc;

use crate::{ClassRef, Constructor, InterfaceRef, MethodTable};

/// Either kind of type unit. Ancestry lists and ancestry queries use this.
#[derive(Clone, Debug)]
pub enum TypeRef {
    Class(ClassRef),
    Interface(InterfaceRef),
}

impl TypeRef {
    pub fn methods(&self) -> &MethodTable {
        match self {
            TypeRef::Class(class) => class.methods(),
            TypeRef::Interface(interface) => interface.methods(),
        }
    }

    /// The construction routine run when something derives from this type.
    pub fn constructor(&self) -> Constructor {
        match self {
            TypeRef::Class(class) => class.constructor().clone(),
            TypeRef::Interface(_) => Constructor::rejecting(),
        }
    }

    pub fn is_interface(&self) -> bool {
        matches!(self, TypeRef::Interface(_))
    }

    pub fn as_class(&self) -> Option<&ClassRef> {
        match self {
            TypeRef::Class(class) => Some(class),
            TypeRef::Interface(_) => None,
        }
    }

    pub fn as_interface(&self) -> Option<&InterfaceRef> {
        match self {
            TypeRef::Interface(interface) => Some(interface),
            TypeRef::Class(_) => None,
        }
    }

    /// The type's own ancestry predicate. Interfaces have none.
    pub fn ancestry(&self) -> Option<&AncestryPredicate> {
        self.as_class().map(ClassRef::ancestry)
    }

    /// Reference identity.
    pub fn ptr_eq(&self, other: &TypeRef) -> bool {
        match (self, other) {
            (TypeRef::Class(a), TypeRef::Class(b)) => a.ptr_eq(b),
            (TypeRef::Interface(a), TypeRef::Interface(b)) => a.ptr_eq(b),
            _ => false,
        }
    }
}

impl PartialEq for TypeRef {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl From<ClassRef> for TypeRef {
    fn from(class: ClassRef) -> Self {
        TypeRef::Class(class)
    }
}

impl From<&ClassRef> for TypeRef {
    fn from(class: &ClassRef) -> Self {
        TypeRef::Class(class.clone())
    }
}

impl From<InterfaceRef> for TypeRef {
    fn from(interface: InterfaceRef) -> Self {
        TypeRef::Interface(interface)
    }
}

impl From<&InterfaceRef> for TypeRef {
    fn from(interface: &InterfaceRef) -> Self {
        TypeRef::Interface(interface.clone())
    }
}

impl From<&TypeRef> for TypeRef {
    fn from(ty: &TypeRef) -> Self {
        ty.clone()
    }
}

/// Predicate answering "is this candidate somewhere above me?".
#[derive(Clone)]
pub struct AncestryPredicate(Rc<dyn Fn(&TypeRef) -> bool>);

impl AncestryPredicate {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&TypeRef) -> bool + 'static,
    {
        Self(Rc::new(f))
    }

    /// A predicate for a type with no ancestors.
    pub fn never() -> Self {
        Self::new(|_| false)
    }

    pub fn test(&self, candidate: &TypeRef) -> bool {
        (self.0)(candidate)
    }
}

impl Default for AncestryPredicate {
    fn default() -> Self {
        Self::never()
    }
}

impl fmt::Debug for AncestryPredicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AncestryPredicate").finish_non_exhaustive()
    }
}
