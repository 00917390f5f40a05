//! Entry dispatcher.

use std::fmt;
use std::str::FromStr;

use ooj_core::{ClassRef, DefineError, DefineResult, EnumSet, InterfaceRef, Value};

use crate::{DefineOptions, class_with, enumeration_with, interface_with};

/// What a descriptor describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Class,
    Interface,
    Enum,
}

impl Kind {
    /// Lowercase tag, as accepted by [`define`].
    pub fn as_str(&self) -> &'static str {
        match self {
            Kind::Class => "class",
            Kind::Interface => "interface",
            Kind::Enum => "enum",
        }
    }

    /// Capitalised name for messages.
    pub fn title(&self) -> &'static str {
        match self {
            Kind::Class => "Class",
            Kind::Interface => "Interface",
            Kind::Enum => "Enum",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Kind {
    type Err = DefineError;

    /// Case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "class" => Ok(Kind::Class),
            "interface" => Ok(Kind::Interface),
            "enum" => Ok(Kind::Enum),
            other => Err(DefineError::invalid(format!(
                "Invalid type given, \"{}\" is not a valid type.",
                other
            ))),
        }
    }
}

/// The product of [`define`].
#[derive(Debug, Clone)]
pub enum Defined {
    Class(ClassRef),
    Interface(InterfaceRef),
    Enum(EnumSet),
}

impl Defined {
    pub fn kind(&self) -> Kind {
        match self {
            Defined::Class(_) => Kind::Class,
            Defined::Interface(_) => Kind::Interface,
            Defined::Enum(_) => Kind::Enum,
        }
    }

    pub fn as_class(&self) -> Option<&ClassRef> {
        match self {
            Defined::Class(class) => Some(class),
            _ => None,
        }
    }

    pub fn as_interface(&self) -> Option<&InterfaceRef> {
        match self {
            Defined::Interface(interface) => Some(interface),
            _ => None,
        }
    }

    pub fn as_enum(&self) -> Option<&EnumSet> {
        match self {
            Defined::Enum(set) => Some(set),
            _ => None,
        }
    }

    pub fn into_class(self) -> Option<ClassRef> {
        match self {
            Defined::Class(class) => Some(class),
            _ => None,
        }
    }

    pub fn into_interface(self) -> Option<InterfaceRef> {
        match self {
            Defined::Interface(interface) => Some(interface),
            _ => None,
        }
    }

    pub fn into_enum(self) -> Option<EnumSet> {
        match self {
            Defined::Enum(set) => Some(set),
            _ => None,
        }
    }
}

/// Build whatever `kind` names from `descriptor`, with default options.
///
/// ```
/// use ooj::{Record, Value, define};
///
/// let colors = define("ENUM", &Value::Record(
///     Record::new().with("values", Value::list(["Red", "Green"])),
/// ))
/// .unwrap();
/// assert_eq!(colors.as_enum().unwrap().len(), 2);
/// ```
pub fn define(kind: &str, descriptor: &Value) -> DefineResult<Defined> {
    define_with(kind, descriptor, &DefineOptions::default())
}

/// Build whatever `kind` names from `descriptor`.
pub fn define_with(kind: &str, descriptor: &Value, options: &DefineOptions) -> DefineResult<Defined> {
    match kind.parse::<Kind>()? {
        Kind::Class => class_with(descriptor, options).map(Defined::Class),
        Kind::Interface => interface_with(descriptor, options).map(Defined::Interface),
        Kind::Enum => enumeration_with(descriptor, options).map(Defined::Enum),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_parsing_ignores_case() {
        assert_eq!("class".parse::<Kind>(), Ok(Kind::Class));
        assert_eq!("ClAsS".parse::<Kind>(), Ok(Kind::Class));
        assert_eq!("INTERFACE".parse::<Kind>(), Ok(Kind::Interface));
        assert_eq!("Enum".parse::<Kind>(), Ok(Kind::Enum));
    }

    #[test]
    fn unknown_kind_rejected() {
        let err = "invalid".parse::<Kind>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid argument: Invalid type given, \"invalid\" is not a valid type."
        );
    }

    #[test]
    fn kind_display() {
        assert_eq!(Kind::Interface.to_string(), "interface");
        assert_eq!(Kind::Enum.title(), "Enum");
    }
}
