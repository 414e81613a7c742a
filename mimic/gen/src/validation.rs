//! Validation of declaration trees.
//!
//! Runs before generation so that malformed input is reported with the
//! offending container and member instead of producing an inconsistent
//! artifact.
//!
//! ## Validation Checks
//!
//! - **Malformed members**: names without a parameter list, label counts that
//!   differ from parameter counts, unnamed parameters
//! - **Malformed containers**: containers without a name
//! - **Duplicate keys**: two members of one container with the same canonical
//!   key, which the runtime could not tell apart
//! - **Duplicate mock names**: two sibling containers generating the same mock
//!   type in one scope
//!
//! Private nodes are never emitted and therefore never validated.
//!
//! ## Examples
//!
//! ```
//! use mimic_define::{Accessibility, Container, Member, SourceFile};
//! use mimic_gen::validation::validate_source_file;
//!
//! let file = SourceFile {
//!     path: None,
//!     imports: vec![],
//!     declarations: vec![
//!         Container::protocol("Clock", Accessibility::Public)
//!             .with_child(Member::new("now()", Accessibility::Public).returning("-> Date"))
//!             .into(),
//!     ],
//! };
//!
//! assert!(validate_source_file(&file).is_ok());
//! ```

use std::collections::HashSet;

use mimic_define::{Container, Declaration, SourceFile};

use crate::errors::GeneratorError;
use crate::naming::mock_type_name;
use crate::signature::MethodSignature;

/// Validates every declaration of a source file.
///
/// ## Errors
///
/// Returns the first `MalformedContainer`, `MalformedMember`,
/// `DuplicateMember` or `DuplicateMockName` error found. A container's
/// members are checked before its nested containers.
pub fn validate_source_file(source: &SourceFile) -> Result<(), GeneratorError> {
    let roots = source.declarations.iter().filter_map(|declaration| match declaration {
        Declaration::Container(container) => Some(container),
        Declaration::Member(_) => None,
    });
    validate_siblings(roots, None)
}

/// Validates sibling containers, which share one scope for mock type names.
fn validate_siblings<'a>(
    containers: impl Iterator<Item = &'a Container>,
    parent: Option<&str>,
) -> Result<(), GeneratorError> {
    let mut mock_names = HashSet::new();

    for container in containers.filter(|c| !c.accessibility.is_private()) {
        validate_nested(container, parent)?;

        let mock_name = mock_type_name(&container.name);
        if !mock_names.insert(mock_name.clone()) {
            return Err(GeneratorError::DuplicateMockName {
                name: mock_name,
                parent: parent.map(str::to_string),
            });
        }
    }

    Ok(())
}

fn validate_nested(container: &Container, parent: Option<&str>) -> Result<(), GeneratorError> {
    if container.name.trim().is_empty() {
        return Err(GeneratorError::malformed_container(
            &container.name,
            parent,
            "container has no name",
        ));
    }

    let mut keys = HashSet::new();
    for member in container.members().filter(|m| !m.accessibility.is_private()) {
        let signature = MethodSignature::of(member)
            .map_err(|e| GeneratorError::malformed_member(&container.name, &member.name, e))?;
        if !keys.insert(signature.key().to_string()) {
            return Err(GeneratorError::DuplicateMember {
                container: container.name.clone(),
                key: signature.key().to_string(),
            });
        }
    }

    let nested = container.children.iter().filter_map(|child| match child {
        Declaration::Container(nested) => Some(nested),
        Declaration::Member(_) => None,
    });
    validate_siblings(nested, Some(&container.name))
}
