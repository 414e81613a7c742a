//! Enumerations shared across the declaration tree.
//!
//! - [`Accessibility`] - Access level of containers and members
//! - [`ParameterAttribute`] - Closure attributes carried by parameters

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Access level of a declaration.
///
/// Private declarations are never mocked; the generator omits them together
/// with their whole subtree.
///
/// ## Examples
///
/// ```
/// use std::str::FromStr;
/// use mimic_define::Accessibility;
///
/// let level = Accessibility::from_str("public").unwrap();
/// assert_eq!(level, Accessibility::Public);
/// assert_eq!(level.to_string(), "public");
/// assert!(Accessibility::Private.is_private());
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Accessibility {
    /// Visible outside the defining module.
    Public,
    /// Visible within the defining module (the language default).
    #[default]
    Internal,
    /// Visible only in the enclosing scope; never mocked.
    Private,
}

impl Accessibility {
    /// Returns the keyword used when re-declaring the node in generated code.
    pub fn source_name(self) -> &'static str {
        match self {
            Accessibility::Public => "public",
            Accessibility::Internal => "internal",
            Accessibility::Private => "private",
        }
    }

    /// Whether declarations at this level are omitted from generated output.
    pub fn is_private(self) -> bool {
        self == Accessibility::Private
    }
}

/// Attribute attached to a closure-typed parameter.
///
/// `Autoclosure` marks deferred evaluation, `Noescape` marks a closure that
/// cannot outlive the call, and `Escaping` explicitly lifts the implicit
/// non-escaping behavior of an autoclosure.
///
/// ## Examples
///
/// ```
/// use mimic_define::ParameterAttribute;
///
/// assert_eq!(ParameterAttribute::Noescape.to_string(), "noescape");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ParameterAttribute {
    /// Deferred evaluation: the argument expression is wrapped in a closure.
    Autoclosure,
    /// The closure must not escape the call it is passed to.
    Noescape,
    /// The closure is explicitly allowed to escape.
    Escaping,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn accessibility_round_trips_through_strings() {
        for level in Accessibility::iter() {
            let text = level.to_string();
            assert_eq!(Accessibility::from_str(&text).unwrap(), level);
            assert_eq!(text, level.source_name());
        }
    }

    #[test]
    fn only_private_is_private() {
        let private: Vec<_> = Accessibility::iter().filter(|a| a.is_private()).collect();
        assert_eq!(private, vec![Accessibility::Private]);
    }

    #[test]
    fn accessibility_defaults_to_internal() {
        assert_eq!(Accessibility::default(), Accessibility::Internal);
    }

    #[test]
    fn accessibility_serializes_lowercase() {
        let json = serde_json::to_string(&Accessibility::Public).unwrap();
        assert_eq!(json, "\"public\"");
    }

    #[test]
    fn parameter_attribute_parses_lowercase() {
        assert_eq!(
            ParameterAttribute::from_str("autoclosure").unwrap(),
            ParameterAttribute::Autoclosure
        );
        assert!(ParameterAttribute::from_str("inout").is_err());
    }
}
