//! Output assembly and file writing for generated code.
//!
//! This module handles the final phase of generation: running the artifact
//! generator over every root container of a source file, prefixing nested
//! lines with indentation, adding the file header and imports, and writing
//! the result to disk atomically.
//!
//! ## Output Structure
//!
//! For each input file:
//!
//! ```text
//! // MARK: - Mocks generated from file: Sources/Greeter.swift
//! // This code was automatically generated by mimic-gen. Do not edit manually.
//!
//! import Cuckoo
//! import Foundation
//!
//! public class MockGreeter: Greeter, Cuckoo.Mock {
//!     ...
//!     public struct __StubbingProxy_Greeter: Cuckoo.StubbingProxy { ... }
//!
//!     public struct __VerificationProxy_Greeter: Cuckoo.VerificationProxy { ... }
//! }
//! ```
//!
//! Generation is deterministic: identical input yields byte-identical output.

use std::fs;
use std::path::{Path, PathBuf};

use mimic_define::{Declaration, SourceFile};
use tracing::{debug, info};

use crate::codegen::ArtifactGenerator;
use crate::config::GeneratorOptions;
use crate::errors::GeneratorError;
use crate::validation::validate_source_file;

/// Notice placed at the top of every generated file.
pub const GENERATED_NOTICE: &str =
    "// This code was automatically generated by mimic-gen. Do not edit manually.";

/// Prefixes every non-empty line with `prefix`.
///
/// Empty lines stay empty so generated files carry no trailing whitespace.
///
/// ```
/// use mimic_gen::output::indent;
///
/// let lines = vec!["a".to_string(), String::new()];
/// assert_eq!(indent(&lines, "  "), vec!["  a".to_string(), String::new()]);
/// ```
pub fn indent(lines: &[String], prefix: &str) -> Vec<String> {
    lines
        .iter()
        .map(|line| {
            if line.is_empty() {
                String::new()
            } else {
                format!("{}{}", prefix, line)
            }
        })
        .collect()
}

/// Generates the mock blocks of all root declarations.
///
/// Each non-private root container yields one block: the mock type with its
/// nested stubbing and verification proxies. Root members are not mockable
/// and are skipped.
///
/// ## Errors
///
/// Returns the first error raised by a malformed container or member.
pub fn generate_declarations(
    declarations: &[Declaration],
    options: &GeneratorOptions,
) -> Result<Vec<String>, GeneratorError> {
    let generator = ArtifactGenerator::new(options);
    let mut output = Vec::new();

    for declaration in declarations {
        match declaration {
            Declaration::Container(container) => {
                if let Some(artifacts) = generator.generate_container(container)? {
                    output.extend(artifacts.mock);
                }
            }
            Declaration::Member(member) => {
                debug!(member = %member.name, "skipping top-level member");
            }
        }
    }

    Ok(output)
}

/// Returns the import lines of a generated file.
///
/// The runtime module comes first, followed by the file's own imports and
/// the configured extra imports, without duplicates.
fn import_lines(source: &SourceFile, options: &GeneratorOptions) -> Vec<String> {
    let mut modules: Vec<&str> = vec![options.runtime_module.as_str()];
    for module in source.imports.iter().chain(&options.imports) {
        if !modules.contains(&module.as_str()) {
            modules.push(module.as_str());
        }
    }

    let mut lines: Vec<String> = modules
        .iter()
        .map(|module| format!("import {}", module))
        .collect();
    lines.extend(
        options
            .testable_imports
            .iter()
            .map(|module| format!("@testable import {}", module)),
    );
    lines
}

/// Assembles the generated code for one source file.
///
/// ## Errors
///
/// Returns an error if the options are invalid or the file fails
/// validation. No partial output is produced.
pub fn assemble_file(
    source: &SourceFile,
    options: &GeneratorOptions,
) -> Result<String, GeneratorError> {
    options.validate()?;
    validate_source_file(source)?;

    let mut lines = Vec::new();
    if options.header {
        if let Some(path) = &source.path {
            lines.push(format!("// MARK: - Mocks generated from file: {}", path));
        }
        lines.push(GENERATED_NOTICE.to_string());
        lines.push(String::new());
    }
    lines.extend(import_lines(source, options));
    lines.extend(generate_declarations(&source.declarations, options)?);

    let mut content = lines.join("\n");
    content.push('\n');
    Ok(content)
}

/// Reads a declaration file produced by the parser.
///
/// ## Errors
///
/// Returns `GeneratorError::ReadError` if the file cannot be read and
/// `GeneratorError::ParseError` if it is not a valid declaration tree.
pub fn read_source_file(path: &Path) -> Result<SourceFile, GeneratorError> {
    let content = fs::read_to_string(path).map_err(|e| GeneratorError::ReadError {
        path: path.display().to_string(),
        source: e,
    })?;

    serde_json::from_str(&content).map_err(|e| GeneratorError::ParseError {
        path: path.display().to_string(),
        source: e,
    })
}

/// Writes content to a file atomically using temp file + rename.
///
/// ## Errors
///
/// Returns `GeneratorError::WriteError` if parent directories cannot be
/// created, the temp file cannot be written, or the rename fails.
pub fn write_atomic(path: &Path, content: &str) -> Result<(), GeneratorError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|e| GeneratorError::WriteError {
            path: parent.display().to_string(),
            source: e,
        })?;
    }

    let temp_path = path.with_extension("tmp");
    fs::write(&temp_path, content).map_err(|e| GeneratorError::WriteError {
        path: temp_path.display().to_string(),
        source: e,
    })?;

    fs::rename(&temp_path, path).map_err(|e| GeneratorError::WriteError {
        path: path.display().to_string(),
        source: e,
    })?;

    Ok(())
}

/// Generates mocks for every input file and writes them to `output`.
///
/// The per-file blocks are concatenated in input order, separated by a blank
/// line. With `dry_run` the result is printed instead of written.
///
/// ## Returns
///
/// The generated text.
///
/// ## Errors
///
/// Returns an error if an input cannot be read or fails validation, if no
/// output path is given outside dry-run mode, or if writing fails.
pub fn generate_and_write(
    inputs: &[PathBuf],
    output: Option<&Path>,
    dry_run: bool,
    options: &GeneratorOptions,
) -> Result<String, GeneratorError> {
    if !dry_run && output.is_none() {
        return Err(GeneratorError::ConfigError(
            "an output file is required unless running in dry-run mode".to_string(),
        ));
    }

    let mut blocks = Vec::with_capacity(inputs.len());
    for input in inputs {
        info!("Generating mocks for {}", input.display());
        let source = read_source_file(input)?;
        blocks.push(assemble_file(&source, options)?);
    }
    let content = blocks.join("\n");

    match output {
        Some(path) if !dry_run => {
            write_atomic(path, &content)?;
            info!("Wrote mocks to {}", path.display());
        }
        _ => print!("{}", content),
    }

    Ok(content)
}
