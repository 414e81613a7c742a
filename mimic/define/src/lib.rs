//! Mimic Declaration Library
//!
//! This crate provides the declaration tree consumed by the `mimic-gen`
//! generator. A parser (not part of this workspace) reads source files and
//! hands the resulting tree over, usually serialized as JSON.
//!
//! ## Core Types
//!
//! - [`SourceFile`] - All declarations found in one source file, plus its imports
//! - [`Declaration`] - A node of the tree: either a [`Container`] or a [`Member`]
//! - [`Container`] - A type (class or protocol) whose members get mocked
//! - [`Member`] - A method-like member with labels, parameters and a return signature
//! - [`Parameter`] - A single member parameter with its attributes
//! - [`Accessibility`] - Access level of a node (`public`, `internal`, `private`)
//! - [`ParameterAttribute`] - Closure attributes (`autoclosure`, `noescape`, `escaping`)
//!
//! ## Examples
//!
//! ```
//! use mimic_define::{Accessibility, Container, Declaration, Member, Parameter};
//!
//! let greeter = Container::protocol("Greeter", Accessibility::Public).with_child(
//!     Member::new("greet(name:)", Accessibility::Public)
//!         .returning("-> String")
//!         .with_parameter(Parameter::new("name", "String")),
//! );
//!
//! let root = Declaration::from(greeter);
//! assert_eq!(root.name(), "Greeter");
//! assert!(!root.is_private());
//! ```

pub mod declaration;
pub mod parameter;
pub mod prelude;
pub mod types;

// Re-export main types at crate root
pub use declaration::{Container, Declaration, Member, SourceFile};
pub use parameter::Parameter;
pub use types::{Accessibility, ParameterAttribute};
