use anyhow::{Context, Result};
use clap::Parser;
use ie32_convert::{Converter, ConverterOptions, Size};
use ie_common::ConfigError;
use log::info;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[clap(
    name = "ie32to64",
    version,
    about = "Converts IE32 assembly source to IE64 assembly",
    after_help = "Examples:\n  ie32to64 assembler/rotozoomer.asm\n  ie32to64 -o assembler/rotozoomer_ie64.asm assembler/rotozoomer.asm\n  ie32to64 -s .q assembler/program.asm"
)]
struct Args {
    /// Input IE32 assembly file
    input: PathBuf,

    /// Output file (defaults to INPUT_ie64.asm)
    #[clap(short, long)]
    output: Option<PathBuf>,

    /// Default size suffix (.l or .q)
    #[clap(short, long, default_value = ".l", value_parser = parse_size)]
    size: Size,

    /// Omit header comment
    #[clap(long)]
    no_header: bool,

    /// Print conversion statistics
    #[clap(long)]
    stats: bool,

    /// Print statistics as JSON (implies --stats)
    #[clap(long)]
    json: bool,

    /// Verbose output
    #[clap(short, long)]
    verbose: bool,
}

fn parse_size(s: &str) -> Result<Size, ConfigError> {
    s.parse()
}

/// `foo.asm` becomes `foo_ie64.asm`; other names just get the suffix.
fn default_output_path(input: &Path) -> PathBuf {
    let input = input.to_string_lossy();
    let stem = input.strip_suffix(".asm").unwrap_or(&input);
    PathBuf::from(format!("{}_ie64.asm", stem))
}

fn count_lines(text: &str) -> usize {
    text.split('\n').count()
}

#[derive(Debug, Serialize)]
struct ConversionStats {
    input: String,
    output: String,
    input_lines: usize,
    output_lines: usize,
    errors: usize,
    warnings: usize,
}

impl ConversionStats {
    fn print(&self) {
        println!("Input:  {} ({} lines)", self.input, self.input_lines);
        println!("Output: {} ({} lines)", self.output, self.output_lines);
        if self.errors > 0 {
            println!("Errors: {} (search for '; ERROR:' in output)", self.errors);
        }
    }
}

/// Convert one file, returning the output path and the number of errors.
fn run(args: &Args) -> Result<(PathBuf, usize)> {
    let input = fs::read_to_string(&args.input)
        .with_context(|| format!("failed to read {}", args.input.display()))?;

    let output_path = args
        .output
        .clone()
        .unwrap_or_else(|| default_output_path(&args.input));

    let mut converter = Converter::new(ConverterOptions {
        size: args.size,
        emit_header: !args.no_header,
    })
    .with_filename(&args.input.to_string_lossy());

    let output = converter.convert_source(&input);
    info!(
        "{} -> {} ({}, size {})",
        args.input.display(),
        output_path.display(),
        converter.reporter().summary(),
        converter.options().size
    );

    fs::write(&output_path, &output)
        .with_context(|| format!("failed to write {}", output_path.display()))?;

    if args.verbose {
        converter.reporter().print_diagnostics();
    }

    if args.stats || args.json {
        let stats = ConversionStats {
            input: args.input.display().to_string(),
            output: output_path.display().to_string(),
            input_lines: count_lines(&input),
            output_lines: count_lines(&output),
            errors: converter.error_count(),
            warnings: converter.warning_count(),
        };
        if args.json {
            println!("{}", serde_json::to_string_pretty(&stats)?);
        } else {
            stats.print();
        }
    }

    Ok((output_path, converter.error_count()))
}

fn main() {
    let args = Args::parse();

    if args.verbose {
        env_logger::init();
    }

    match run(&args) {
        Ok((_, 0)) => {}
        Ok((output_path, errors)) => {
            eprintln!(
                "{} conversion error(s) - search for '; ERROR:' in {}",
                errors,
                output_path.display()
            );
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("error: {:#}", e);
            std::process::exit(1);
        }
    }
}
