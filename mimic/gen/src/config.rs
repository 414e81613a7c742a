//! Generator configuration.
//!
//! [`GeneratorOptions`] carries every knob that affects generated text. The
//! command-line driver fills it from flags; library callers start from
//! [`GeneratorOptions::default`] and adjust with the `with_*` methods.

use crate::errors::GeneratorError;

/// Name of the mocking runtime module used when none is configured.
pub const DEFAULT_RUNTIME_MODULE: &str = "Cuckoo";

/// Options controlling the generated output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorOptions {
    /// Module that provides the mocking runtime (`Cuckoo.Mock`, ...).
    pub runtime_module: String,
    /// Prefix added per nesting level.
    pub indentation: String,
    /// Extra modules imported by every generated file.
    pub imports: Vec<String>,
    /// Modules imported with `@testable`.
    pub testable_imports: Vec<String>,
    /// Whether to emit the file header comment.
    pub header: bool,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            runtime_module: DEFAULT_RUNTIME_MODULE.to_string(),
            indentation: "    ".to_string(),
            imports: Vec::new(),
            testable_imports: Vec::new(),
            header: true,
        }
    }
}

impl GeneratorOptions {
    /// Sets the runtime module name.
    pub fn with_runtime_module(mut self, module: impl Into<String>) -> Self {
        self.runtime_module = module.into();
        self
    }

    /// Uses `width` spaces per nesting level.
    pub fn with_indent_width(mut self, width: usize) -> Self {
        self.indentation = " ".repeat(width);
        self
    }

    /// Adds a plain import.
    pub fn with_import(mut self, module: impl Into<String>) -> Self {
        self.imports.push(module.into());
        self
    }

    /// Adds a `@testable` import.
    pub fn with_testable_import(mut self, module: impl Into<String>) -> Self {
        self.testable_imports.push(module.into());
        self
    }

    /// Enables or disables the file header.
    pub fn with_header(mut self, header: bool) -> Self {
        self.header = header;
        self
    }

    /// Qualifies a runtime identifier with the runtime module.
    ///
    /// ```
    /// use mimic_gen::config::GeneratorOptions;
    ///
    /// let options = GeneratorOptions::default();
    /// assert_eq!(options.runtime("Matchable"), "Cuckoo.Matchable");
    /// ```
    pub fn runtime(&self, identifier: &str) -> String {
        format!("{}.{}", self.runtime_module, identifier)
    }

    /// Validates the options.
    ///
    /// ## Errors
    ///
    /// Returns `GeneratorError::ConfigError` if the runtime module or an
    /// import is not a valid identifier, or if the indentation contains
    /// anything other than spaces and tabs.
    pub fn validate(&self) -> Result<(), GeneratorError> {
        if !is_identifier(&self.runtime_module) {
            return Err(GeneratorError::ConfigError(format!(
                "runtime module '{}' is not a valid identifier",
                self.runtime_module
            )));
        }

        if let Some(bad) = self
            .imports
            .iter()
            .chain(&self.testable_imports)
            .find(|module| !is_identifier(module))
        {
            return Err(GeneratorError::ConfigError(format!(
                "import '{}' is not a valid module name",
                bad
            )));
        }

        if !self.indentation.chars().all(|c| c == ' ' || c == '\t') {
            return Err(GeneratorError::ConfigError(
                "indentation must contain only spaces or tabs".to_string(),
            ));
        }

        Ok(())
    }
}

/// Letters, digits and underscores, not starting with a digit.
fn is_identifier(text: &str) -> bool {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) if first.is_alphabetic() || first == '_' => {
            chars.all(|c| c.is_alphanumeric() || c == '_')
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let options = GeneratorOptions::default();
        assert!(options.validate().is_ok());
        assert_eq!(options.runtime_module, "Cuckoo");
        assert_eq!(options.indentation, "    ");
        assert!(options.header);
    }

    #[test]
    fn builder_methods_apply() {
        let options = GeneratorOptions::default()
            .with_runtime_module("Mocks")
            .with_indent_width(2)
            .with_import("Foundation")
            .with_testable_import("App")
            .with_header(false);

        assert_eq!(options.runtime("Mock"), "Mocks.Mock");
        assert_eq!(options.indentation, "  ");
        assert_eq!(options.imports, vec!["Foundation"]);
        assert_eq!(options.testable_imports, vec!["App"]);
        assert!(!options.header);
    }

    #[test]
    fn rejects_invalid_runtime_module() {
        for bad in ["", "1Cuckoo", "Cuckoo.Core", "my module"] {
            let options = GeneratorOptions::default().with_runtime_module(bad);
            assert!(
                matches!(options.validate(), Err(GeneratorError::ConfigError(_))),
                "'{}' should be rejected",
                bad
            );
        }
    }

    #[test]
    fn rejects_invalid_import() {
        let options = GeneratorOptions::default().with_testable_import("My App");
        let err = options.validate().unwrap_err();
        assert!(err.to_string().contains("My App"));
    }

    #[test]
    fn rejects_non_whitespace_indentation() {
        let mut options = GeneratorOptions::default();
        options.indentation = "--".to_string();
        assert!(options.validate().is_err());
    }
}
