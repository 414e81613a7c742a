//! Error types for the mimic generator.

use thiserror::Error;

/// A member declaration that cannot be turned into a signature.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SignatureError {
    /// The member name has no parameter list.
    #[error("member name '{name}' has no parameter list")]
    MissingParameterList { name: String },

    /// The number of labels in the name does not match the parameters.
    #[error("member name '{name}' declares {labels} label(s) but has {parameters} parameter(s)")]
    LabelCountMismatch {
        name: String,
        labels: usize,
        parameters: usize,
    },

    /// A parameter has no bound name.
    #[error("parameter {position} of '{name}' has an empty name")]
    EmptyParameterName { name: String, position: usize },
}

/// Errors that can occur while generating mocks.
#[derive(Debug, Error)]
pub enum GeneratorError {
    /// A member of a container is malformed.
    ///
    /// Always names the enclosing container so the caller can point at the
    /// offending source location.
    #[error("Malformed member '{member}' in '{container}': {source}")]
    MalformedMember {
        container: String,
        member: String,
        #[source]
        source: SignatureError,
    },

    /// A container is malformed.
    ///
    /// `parent` is the enclosing container of a nested one, which is the only
    /// usable location when the container itself has no name.
    #[error("Malformed container '{container}'{}: {reason}", enclosed_in(.parent))]
    MalformedContainer {
        container: String,
        parent: Option<String>,
        reason: String,
    },

    /// Two members of one container share a canonical key.
    ///
    /// The runtime matches calls, stubs and verifications by this key, so the
    /// members would be indistinguishable.
    #[error("Container '{container}' declares more than one member with key '{key}'")]
    DuplicateMember { container: String, key: String },

    /// Two sibling containers would produce the same mock type.
    #[error("Mock type name '{name}' is generated more than once{}", enclosed_in(.parent))]
    DuplicateMockName { name: String, parent: Option<String> },

    /// Failed to read an input file.
    #[error("Failed to read input file '{path}': {source}")]
    ReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// An input file is not a valid declaration tree.
    #[error("Failed to parse declarations in '{path}': {source}")]
    ParseError {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// Failed to write the output file.
    #[error("Failed to write output file '{path}': {source}")]
    WriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Invalid configuration.
    #[error("Invalid configuration: {0}")]
    ConfigError(String),
}

impl GeneratorError {
    /// Wraps a signature error with the location of the offending member.
    pub fn malformed_member(container: &str, member: &str, source: SignatureError) -> Self {
        GeneratorError::MalformedMember {
            container: container.to_string(),
            member: member.to_string(),
            source,
        }
    }

    /// A malformed container, located by its enclosing container if nested.
    pub fn malformed_container(
        container: &str,
        parent: Option<&str>,
        reason: impl Into<String>,
    ) -> Self {
        GeneratorError::MalformedContainer {
            container: container.to_string(),
            parent: parent.map(str::to_string),
            reason: reason.into(),
        }
    }
}

/// Location suffix naming the enclosing container, if any.
fn enclosed_in(parent: &Option<String>) -> String {
    parent
        .as_ref()
        .map(|p| format!(" in '{}'", p))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_member_names_container_and_member() {
        let err = GeneratorError::malformed_member(
            "Greeter",
            "greet",
            SignatureError::MissingParameterList {
                name: "greet".to_string(),
            },
        );
        let message = err.to_string();
        assert!(message.contains("'greet'"));
        assert!(message.contains("'Greeter'"));
        assert!(message.contains("no parameter list"));
    }

    #[test]
    fn nested_malformed_container_names_parent() {
        let err = GeneratorError::malformed_container("", Some("Outer"), "container has no name");
        assert_eq!(
            err.to_string(),
            "Malformed container '' in 'Outer': container has no name"
        );
    }

    #[test]
    fn root_malformed_container_has_no_location_suffix() {
        let err = GeneratorError::malformed_container(" ", None, "container has no name");
        assert_eq!(err.to_string(), "Malformed container ' ': container has no name");
    }

    #[test]
    fn label_mismatch_reports_counts() {
        let err = SignatureError::LabelCountMismatch {
            name: "add(a:b:)".to_string(),
            labels: 2,
            parameters: 1,
        };
        assert_eq!(
            err.to_string(),
            "member name 'add(a:b:)' declares 2 label(s) but has 1 parameter(s)"
        );
    }
}
