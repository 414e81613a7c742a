//! Mimic Mock Generator
//!
//! Generates mock, stubbing and verification sources from declaration trees.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use mimic_gen::config::GeneratorOptions;
use mimic_gen::output::generate_and_write;

/// Mimic mock generator - turns parsed declarations into mocks
#[derive(Parser, Debug)]
#[command(name = "mimic-gen")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Declaration files (JSON) produced by the parser
    #[arg(value_name = "INPUT", required = true, num_args = 1..)]
    inputs: Vec<PathBuf>,

    /// Output file for generated mocks
    #[arg(short, long, required_unless_present = "dry_run")]
    output: Option<PathBuf>,

    /// Print generated code without writing files
    #[arg(long)]
    dry_run: bool,

    /// Module providing the mocking runtime
    #[arg(long, value_name = "NAME", default_value = mimic_gen::config::DEFAULT_RUNTIME_MODULE)]
    runtime: String,

    /// Spaces per indentation level
    #[arg(long, value_name = "N", default_value_t = 4)]
    indent: usize,

    /// Additional module to import (repeatable)
    #[arg(long = "import", value_name = "MODULE")]
    imports: Vec<String>,

    /// Module to import with @testable (repeatable)
    #[arg(long = "testable", value_name = "MODULE")]
    testable: Vec<String>,

    /// Omit the generated file header
    #[arg(long)]
    no_header: bool,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    /// Builds generator options from the flags.
    fn options(&self) -> GeneratorOptions {
        let mut options = GeneratorOptions::default()
            .with_runtime_module(&self.runtime)
            .with_indent_width(self.indent)
            .with_header(!self.no_header);
        options.imports = self.imports.clone();
        options.testable_imports = self.testable.clone();
        options
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let options = cli.options();
    match generate_and_write(&cli.inputs, cli.output.as_deref(), cli.dry_run, &options) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Installs the stderr subscriber.
///
/// `-v` flags pick the level; without them `RUST_LOG` applies, falling back
/// to warnings only.
fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
