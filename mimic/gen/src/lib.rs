//! Mimic mock generator library.
//!
//! This crate generates mock sources from declaration trees built with
//! `mimic-define`. For every container it emits three synchronized artifacts:
//!
//! - A mock type that records calls and can spy on a real instance
//! - A stubbing proxy for configuring canned results
//! - A verification proxy for asserting which calls occurred
//!
//! All three are keyed by the same canonical member key, derived in
//! [`signature`].
//!
//! ## Modules
//!
//! - [`signature`] - Canonical keys, forwarding expressions and matcher text
//! - [`codegen`] - The single traversal producing the three artifacts
//! - [`naming`] - Names of generated types
//! - [`output`] - Indentation, file assembly and atomic writes
//! - [`validation`] - Pre-generation checks on declaration trees
//! - [`config`] - Generator options
//! - [`errors`] - Error types for the generator
//!
//! ## Example Usage
//!
//! ```
//! use mimic_define::{Accessibility, Container, Member, Parameter, SourceFile};
//! use mimic_gen::config::GeneratorOptions;
//! use mimic_gen::output::assemble_file;
//!
//! let file = SourceFile {
//!     path: Some("Greeter.swift".to_string()),
//!     imports: vec![],
//!     declarations: vec![
//!         Container::protocol("Greeter", Accessibility::Public)
//!             .with_child(
//!                 Member::new("greet(name:)", Accessibility::Public)
//!                     .returning("-> String")
//!                     .with_parameter(Parameter::new("name", "String")),
//!             )
//!             .into(),
//!     ],
//! };
//!
//! let code = assemble_file(&file, &GeneratorOptions::default()).unwrap();
//! assert!(code.contains("public class MockGreeter: Greeter, Cuckoo.Mock {"));
//! ```

pub mod codegen;
pub mod config;
pub mod errors;
pub mod naming;
pub mod output;
pub mod signature;
pub mod validation;

#[cfg(test)]
pub(crate) mod test_utils;
