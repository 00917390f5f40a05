//! Composition engine for classes, interfaces and enums built from plain
//! descriptor records.
//!
//! A descriptor is a [`Record`] whose reserved fields (`construct`, `extend`,
//! `implement`, `statics`, `functions`, `values`) steer the build and whose
//! remaining fields become members shared by every instance.
//!
//! ```
//! use ooj::{Method, Record, Value, class, interface};
//!
//! let walker = interface(&Value::Record(
//!     Record::new().with("functions", Value::list(["walk"])),
//! ))
//! .unwrap();
//!
//! let dog = class(&Value::Record(
//!     Record::new()
//!         .with("implement", Value::list([&walker]))
//!         .with("walk", Method::new(|_| Ok(Value::from("trot")))),
//! ))
//! .unwrap();
//!
//! let rex = dog.construct(&[]).unwrap();
//! assert_eq!(rex.call("walk", &[]), Ok(Value::from("trot")));
//! assert!(rex.is_instance_of(&walker));
//! ```
//!
//! The building blocks ([`validate`], [`ancestry`], [`implement`],
//! [`extend`]) are public so hosts can assemble types by hand.

pub mod ancestry;
mod class;
mod define;
mod enumeration;
pub mod extend;
pub mod implement;
mod interface;
mod options;
pub mod validate;

pub use ooj_core::*;

pub use class::{class, class_with};
pub use define::{Defined, Kind, define, define_with};
pub use enumeration::{enumeration, enumeration_with};
pub use interface::{interface, interface_with};
pub use options::DefineOptions;
