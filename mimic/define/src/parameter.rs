//! Member parameters.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::types::ParameterAttribute;

/// A single parameter of a [`Member`](crate::Member).
///
/// The type is kept as opaque source text and copied verbatim into
/// generated code. A parameter's position is its index in the owning
/// member's parameter list.
///
/// ## Examples
///
/// ```
/// use mimic_define::{Parameter, ParameterAttribute};
///
/// let completion = Parameter::new("completion", "() -> Void")
///     .with_label("then")
///     .with_attribute(ParameterAttribute::Noescape);
///
/// assert!(completion.is_closure());
/// assert!(!completion.is_forwardable());
/// assert_eq!(completion.label.as_deref(), Some("then"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    /// External label used at call sites; `None` when the label is omitted.
    #[serde(default)]
    pub label: Option<String>,
    /// Name the parameter is bound to inside the member body.
    pub name: String,
    /// Parameter type as written in source.
    #[serde(rename = "type")]
    pub type_name: String,
    /// Closure attributes attached to the parameter.
    #[serde(default)]
    pub attributes: BTreeSet<ParameterAttribute>,
}

impl Parameter {
    /// Creates an unlabeled parameter with no attributes.
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            label: None,
            name: name.into(),
            type_name: type_name.into(),
            attributes: BTreeSet::new(),
        }
    }

    /// Sets the external label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Adds an attribute.
    pub fn with_attribute(mut self, attribute: ParameterAttribute) -> Self {
        self.attributes.insert(attribute);
        self
    }

    /// Whether the parameter carries the given attribute.
    pub fn has_attribute(&self, attribute: ParameterAttribute) -> bool {
        self.attributes.contains(&attribute)
    }

    /// Whether the parameter type is a function type.
    pub fn is_closure(&self) -> bool {
        self.type_name.contains("->")
    }

    /// Whether the argument may be captured beyond the call it is passed to.
    ///
    /// Non-escaping closures, and autoclosures not explicitly marked
    /// escaping, cannot be captured.
    pub fn is_forwardable(&self) -> bool {
        let noescape = self.has_attribute(ParameterAttribute::Noescape);
        let implicit_noescape = self.has_attribute(ParameterAttribute::Autoclosure)
            && !self.has_attribute(ParameterAttribute::Escaping);
        !(noescape || implicit_noescape)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_parameter_is_forwardable() {
        let param = Parameter::new("count", "Int");
        assert!(param.is_forwardable());
        assert!(!param.is_closure());
    }

    #[test]
    fn noescape_is_not_forwardable() {
        let param =
            Parameter::new("block", "() -> Void").with_attribute(ParameterAttribute::Noescape);
        assert!(!param.is_forwardable());
    }

    #[test]
    fn autoclosure_is_not_forwardable_unless_escaping() {
        let deferred =
            Parameter::new("value", "() -> Int").with_attribute(ParameterAttribute::Autoclosure);
        assert!(!deferred.is_forwardable());

        let escaping = deferred.with_attribute(ParameterAttribute::Escaping);
        assert!(escaping.is_forwardable());
    }

    #[test]
    fn escaping_does_not_lift_noescape() {
        let param = Parameter::new("block", "() -> Void")
            .with_attribute(ParameterAttribute::Noescape)
            .with_attribute(ParameterAttribute::Escaping);
        assert!(!param.is_forwardable());
    }

    #[test]
    fn deserializes_with_defaults() {
        let param: Parameter =
            serde_json::from_str(r#"{"name": "name", "type": "String"}"#).unwrap();
        assert_eq!(param, Parameter::new("name", "String"));
    }

    #[test]
    fn deserializes_attributes() {
        let param: Parameter = serde_json::from_str(
            r#"{"label": "with", "name": "block", "type": "() -> Void", "attributes": ["noescape"]}"#,
        )
        .unwrap();
        assert_eq!(param.label.as_deref(), Some("with"));
        assert!(param.has_attribute(ParameterAttribute::Noescape));
    }
}
