//! Convenient re-exports for building declaration trees.
//!
//! ```
//! use mimic_define::prelude::*;
//!
//! let file = SourceFile {
//!     path: Some("Sources/Greeter.swift".to_string()),
//!     imports: vec!["Foundation".to_string()],
//!     declarations: vec![Container::protocol("Greeter", Accessibility::Internal).into()],
//! };
//! assert_eq!(file.declarations.len(), 1);
//! ```

pub use crate::declaration::{Container, Declaration, Member, SourceFile};
pub use crate::parameter::Parameter;
pub use crate::types::{Accessibility, ParameterAttribute};
