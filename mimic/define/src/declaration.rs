//! The declaration tree.
//!
//! A tree is built once by an external parser and is read-only afterwards.
//! Child order is significant: it is the emission order of generated code.

use serde::{Deserialize, Serialize};

use crate::parameter::Parameter;
use crate::types::Accessibility;

/// A method-like member of a [`Container`].
///
/// The name embeds colon-delimited parameter labels the way call sites spell
/// them (`greet(name:)`, `add(_:to:)`, `reset()`). The return signature keeps
/// everything after the parameter list as source text, including the error
/// propagation marker (`throws -> Int`, `-> String`, or empty for `Void`).
///
/// ## Examples
///
/// ```
/// use mimic_define::{Accessibility, Member, Parameter};
///
/// let member = Member::new("load(from:)", Accessibility::Public)
///     .returning("throws -> Data")
///     .with_parameter(Parameter::new("url", "URL").with_label("from"));
///
/// assert_eq!(member.parameters.len(), 1);
/// assert!(!member.overriding);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    /// Full name including label parts, e.g. `greet(name:)`.
    pub name: String,
    /// Access level; private members are never mocked.
    #[serde(default)]
    pub accessibility: Accessibility,
    /// Return signature text following the parameter list.
    #[serde(default)]
    pub return_signature: String,
    /// Parameters in declaration order.
    #[serde(default)]
    pub parameters: Vec<Parameter>,
    /// Whether the member redefines an inherited implementation.
    #[serde(default)]
    pub overriding: bool,
}

impl Member {
    /// Creates a member with no parameters and an empty return signature.
    pub fn new(name: impl Into<String>, accessibility: Accessibility) -> Self {
        Self {
            name: name.into(),
            accessibility,
            return_signature: String::new(),
            parameters: Vec::new(),
            overriding: false,
        }
    }

    /// Sets the return signature text.
    pub fn returning(mut self, return_signature: impl Into<String>) -> Self {
        self.return_signature = return_signature.into();
        self
    }

    /// Appends a parameter.
    pub fn with_parameter(mut self, parameter: Parameter) -> Self {
        self.parameters.push(parameter);
        self
    }

    /// Marks the member as a redefinition of an inherited member.
    pub fn overriding(mut self) -> Self {
        self.overriding = true;
        self
    }
}

/// A type whose members are mocked.
///
/// `implementation` distinguishes a concrete base type (a class, whose
/// members the mock must explicitly redefine) from a pure behavioral
/// contract (a protocol).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Container {
    /// Type name as declared.
    pub name: String,
    /// Access level; a private container drops its whole subtree.
    #[serde(default)]
    pub accessibility: Accessibility,
    /// Whether the container is a concrete implementation.
    #[serde(default)]
    pub implementation: bool,
    /// Child declarations in source order.
    #[serde(default)]
    pub children: Vec<Declaration>,
}

impl Container {
    /// Creates an empty behavioral contract.
    pub fn protocol(name: impl Into<String>, accessibility: Accessibility) -> Self {
        Self {
            name: name.into(),
            accessibility,
            implementation: false,
            children: Vec::new(),
        }
    }

    /// Creates an empty concrete base type.
    pub fn class(name: impl Into<String>, accessibility: Accessibility) -> Self {
        Self {
            implementation: true,
            ..Self::protocol(name, accessibility)
        }
    }

    /// Appends a child declaration.
    pub fn with_child(mut self, child: impl Into<Declaration>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Iterates over the direct member children, skipping nested containers.
    pub fn members(&self) -> impl Iterator<Item = &Member> {
        self.children.iter().filter_map(|child| match child {
            Declaration::Member(member) => Some(member),
            Declaration::Container(_) => None,
        })
    }
}

/// A node of the declaration tree.
///
/// Serialized with an internal `kind` tag:
///
/// ```
/// use mimic_define::Declaration;
///
/// let json = r#"{"kind": "member", "name": "reset()", "accessibility": "public"}"#;
/// let node: Declaration = serde_json::from_str(json).unwrap();
/// assert_eq!(node.name(), "reset()");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Declaration {
    /// A type with children.
    Container(Container),
    /// A method-like member.
    Member(Member),
}

impl Declaration {
    /// Returns the node name.
    pub fn name(&self) -> &str {
        match self {
            Declaration::Container(container) => &container.name,
            Declaration::Member(member) => &member.name,
        }
    }

    /// Returns the node access level.
    pub fn accessibility(&self) -> Accessibility {
        match self {
            Declaration::Container(container) => container.accessibility,
            Declaration::Member(member) => member.accessibility,
        }
    }

    /// Whether the node (and its subtree) is omitted from generated code.
    pub fn is_private(&self) -> bool {
        self.accessibility().is_private()
    }
}

impl From<Container> for Declaration {
    fn from(container: Container) -> Self {
        Declaration::Container(container)
    }
}

impl From<Member> for Declaration {
    fn from(member: Member) -> Self {
        Declaration::Member(member)
    }
}

/// Everything the parser extracted from one source file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceFile {
    /// Path of the parsed file, used in the generated header.
    #[serde(default)]
    pub path: Option<String>,
    /// Modules imported by the parsed file.
    #[serde(default)]
    pub imports: Vec<String>,
    /// Top-level declarations in source order.
    #[serde(default)]
    pub declarations: Vec<Declaration>,
}
