//! Dynamic value type.
//!
//! [`Value`] is what descriptors, instance fields, call arguments and call
//! results are made of. Scalars compare by content; functions, types and
//! objects compare by reference, which is what ancestry testing relies on.

use std::fmt;

use crate::{ClassRef, InterfaceRef, Method, ObjectRef, Record, TypeRef};

/// A dynamically typed value.
#[derive(Clone, Default)]
pub enum Value {
    /// Absent value.
    #[default]
    Void,
    /// Boolean value
    Bool(bool),
    /// Integer value
    Int(i64),
    /// Floating point value
    Float(f64),
    /// String value (owned)
    String(String),
    /// Ordered list of values
    List(Vec<Value>),
    /// Named fields, e.g. a descriptor
    Record(Record),
    /// A callable
    Function(Method),
    /// A constructible class
    Class(ClassRef),
    /// A contract type
    Interface(InterfaceRef),
    /// An instance of a class
    Object(ObjectRef),
}

impl Value {
    /// Build a list value.
    pub fn list<I, V>(items: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Value::List(items.into_iter().map(Into::into).collect())
    }

    /// Build a `[name, value]` pair, the shape enum descriptors use for
    /// explicit values.
    pub fn pair(name: impl Into<String>, value: impl Into<Value>) -> Self {
        Value::List(vec![Value::String(name.into()), value.into()])
    }

    /// Get a human-readable name for this value's type.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Void => "void",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::String(_) => "string",
            Value::List(_) => "list",
            Value::Record(_) => "record",
            Value::Function(_) => "function",
            Value::Class(_) => "class",
            Value::Interface(_) => "interface",
            Value::Object(_) => "object",
        }
    }

    /// Check if this value is void.
    pub fn is_void(&self) -> bool {
        matches!(self, Value::Void)
    }

    /// A member "exists" when it holds anything other than `Void`.
    pub fn is_present(&self) -> bool {
        !self.is_void()
    }

    /// Truthiness used when compacting ancestry lists.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Void => false,
            Value::Bool(b) => *b,
            Value::Int(v) => *v != 0,
            Value::Float(v) => *v != 0.0 && !v.is_nan(),
            Value::String(s) => !s.is_empty(),
            _ => true,
        }
    }

    pub fn is_callable(&self) -> bool {
        matches!(self, Value::Function(_))
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, Value::Int(_) | Value::Float(_))
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// Get a float, widening integers.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(v) => Some(*v),
            Value::Int(v) => Some(*v as f64),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_record(&self) -> Option<&Record> {
        match self {
            Value::Record(record) => Some(record),
            _ => None,
        }
    }

    pub fn as_function(&self) -> Option<&Method> {
        match self {
            Value::Function(method) => Some(method),
            _ => None,
        }
    }

    pub fn as_class(&self) -> Option<&ClassRef> {
        match self {
            Value::Class(class) => Some(class),
            _ => None,
        }
    }

    pub fn as_interface(&self) -> Option<&InterfaceRef> {
        match self {
            Value::Interface(interface) => Some(interface),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&ObjectRef> {
        match self {
            Value::Object(object) => Some(object),
            _ => None,
        }
    }

    /// Get the type unit this value refers to, if it is a class or interface.
    pub fn as_type(&self) -> Option<TypeRef> {
        match self {
            Value::Class(class) => Some(TypeRef::Class(class.clone())),
            Value::Interface(interface) => Some(TypeRef::Interface(interface.clone())),
            _ => None,
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Void => write!(f, "Void"),
            Value::Bool(v) => write!(f, "Bool({})", v),
            Value::Int(v) => write!(f, "Int({})", v),
            Value::Float(v) => write!(f, "Float({})", v),
            Value::String(s) => write!(f, "String({:?})", s),
            Value::List(items) => f.debug_list().entries(items).finish(),
            Value::Record(record) => write!(f, "{:?}", record),
            Value::Function(method) => write!(f, "{:?}", method),
            Value::Class(class) => write!(f, "{:?}", class),
            Value::Interface(interface) => write!(f, "{:?}", interface),
            Value::Object(object) => write!(f, "{:?}", object),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Void, Value::Void) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::List(a), Value::List(b)) => a == b,
            (Value::Record(a), Value::Record(b)) => a == b,
            // Identity-carrying values compare by reference
            (Value::Function(a), Value::Function(b)) => a.ptr_eq(b),
            (Value::Class(a), Value::Class(b)) => a.ptr_eq(b),
            (Value::Interface(a), Value::Interface(b)) => a.ptr_eq(b),
            (Value::Object(a), Value::Object(b)) => a.ptr_eq(b),
            _ => false,
        }
    }
}

impl From<()> for Value {
    fn from(_: ()) -> Self {
        Value::Void
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(v as i64)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl From<Vec<Value>> for Value {
    fn from(v: Vec<Value>) -> Self {
        Value::List(v)
    }
}

impl From<Record> for Value {
    fn from(v: Record) -> Self {
        Value::Record(v)
    }
}

impl From<Method> for Value {
    fn from(v: Method) -> Self {
        Value::Function(v)
    }
}

impl From<ClassRef> for Value {
    fn from(v: ClassRef) -> Self {
        Value::Class(v)
    }
}

impl From<&ClassRef> for Value {
    fn from(v: &ClassRef) -> Self {
        Value::Class(v.clone())
    }
}

impl From<InterfaceRef> for Value {
    fn from(v: InterfaceRef) -> Self {
        Value::Interface(v)
    }
}

impl From<&InterfaceRef> for Value {
    fn from(v: &InterfaceRef) -> Self {
        Value::Interface(v.clone())
    }
}

impl From<ObjectRef> for Value {
    fn from(v: ObjectRef) -> Self {
        Value::Object(v)
    }
}

impl From<TypeRef> for Value {
    fn from(v: TypeRef) -> Self {
        match v {
            TypeRef::Class(class) => Value::Class(class),
            TypeRef::Interface(interface) => Value::Interface(interface),
        }
    }
}
