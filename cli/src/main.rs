use std::fs::{self, File};
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use serde_json::Value;
use tracing::level_filters::LevelFilter;
use url::Url;

use jsonschema_codegen_core::{generate, EmitSort, GenerateOptions};
use jsonschema_codegen_elm::ElmEmitter;

#[derive(Parser)]
#[command(name = "jsonschema-codegen")]
#[command(
    about = "Generate typed Elm modules with JSON decoders and encoders from JSON Schema documents"
)]
#[command(version)]
struct Cli {
    /// Input JSON Schema files
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Output directory for the generated modules
    #[arg(short, long)]
    out: PathBuf,

    /// Root module prefix applied to every emitted module
    #[arg(short, long, default_value = "")]
    module: String,

    /// Order in which type declarations are emitted
    #[arg(long, value_enum, default_value_t = EmitSortArg::Lexicographic)]
    emit_sort: EmitSortArg,

    /// Treat warnings as errors
    #[arg(long, default_value_t = false)]
    strict: bool,

    /// Enable verbose logging (sets log level to debug)
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
enum EmitSortArg {
    Lexicographic,
    DeclarationOrder,
}

impl From<EmitSortArg> for EmitSort {
    fn from(val: EmitSortArg) -> Self {
        match val {
            EmitSortArg::Lexicographic => EmitSort::Lexicographic,
            EmitSortArg::DeclarationOrder => EmitSort::DeclarationOrder,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Logs go to stderr so stdout stays clean.
    let log_level = if cli.verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .init();

    match run(&cli) {
        Ok(0) => ExitCode::SUCCESS,
        Ok(error_count) => {
            eprintln!("generation finished with {} error(s)", error_count);
            ExitCode::from(1)
        }
        Err(error) => {
            eprintln!("error: {:#}", error);
            ExitCode::from(1)
        }
    }
}

fn run(cli: &Cli) -> Result<usize> {
    let mut documents: Vec<(Url, Value)> = Vec::new();
    for input in &cli.inputs {
        documents.push((document_uri(input)?, read_schema(input)?));
    }

    let options = GenerateOptions {
        root_module: cli.module.clone(),
        emit_sort: cli.emit_sort.into(),
        strict: cli.strict,
    };
    let result = generate(&documents, &ElmEmitter, &options);

    for warning in &result.warnings {
        eprintln!("warning: {}", warning);
    }
    for error in &result.errors {
        eprintln!("error: {}", error);
    }

    for (file_name, source) in &result.files {
        let path = cli.out.join(file_name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create output directory: {}", parent.display())
            })?;
        }
        fs::write(&path, source)
            .with_context(|| format!("Failed to write: {}", path.display()))?;
        eprintln!("wrote {}", path.display());
    }

    Ok(result.errors.len())
}

/// Read and parse a JSON Schema from a file path.
fn read_schema(input: &Path) -> Result<Value> {
    let file = File::open(input)
        .with_context(|| format!("Failed to open input file: {}", input.display()))?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader)
        .with_context(|| format!("Failed to parse schema from: {}", input.display()))
}

/// Document URI for an input file, used when the schema has no `id` field.
fn document_uri(input: &Path) -> Result<Url> {
    let absolute = fs::canonicalize(input)
        .with_context(|| format!("Failed to resolve input path: {}", input.display()))?;
    Url::from_file_path(&absolute).map_err(|_| {
        anyhow::anyhow!(
            "input path is not representable as a URL: {}",
            absolute.display()
        )
    })
}
