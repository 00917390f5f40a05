//! Core data model for the ooj object-composition engine.
//!
//! This crate holds everything the engine builds and everything callers work
//! with once a type exists:
//!
//! - [`Value`], [`Record`] - dynamic values and the descriptor shape
//! - [`Method`], [`CallContext`] - shared callables and their call context
//! - [`MethodTable`] - members shared by all instances of a type
//! - [`ClassRef`], [`InterfaceRef`], [`TypeRef`] - type units
//! - [`ObjectRef`] - instances
//! - [`EnumSet`], [`EnumValue`] - enumerated value sets
//! - [`DefineError`], [`CallError`], [`OojError`] - the error hierarchy
//!
//! Everything here is single-threaded (`Rc`-based); independent builds share
//! no state.

mod call_context;
mod class;
pub mod convert;
mod enum_set;
mod error;
mod interface;
mod method;
mod object;
mod record;
mod table;
mod type_ref;
mod value;

pub use call_context::CallContext;
pub use class::{ClassEntry, ClassRef, ClassUnit, Constructor};
pub use convert::FromValue;
pub use enum_set::{EnumSet, EnumValue, VALUE_FIELD};
pub use error::{
    CallError, CallResult, ConversionError, DefineError, DefineResult, OojError,
};
pub use interface::{InterfaceEntry, InterfaceRef, InterfaceUnit};
pub use method::{Method, MethodFlags, NativeCallable, StubPolicy};
pub use object::ObjectRef;
pub use record::Record;
pub use table::MethodTable;
pub use type_ref::{AncestryPredicate, TypeRef};
pub use value::Value;
