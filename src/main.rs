//! stegscan CLI
//!
//! Command-line front end: loads configuration, resolves one input, runs the
//! enabled detectors and writes the report.

use anyhow::Context;
use clap::Parser;
use stegscan::config::{ConfigLoader, DEFAULT_CONFIG_FILE};
use stegscan::report::{render_console, Report, ReportWriter};
use stegscan::{analyze, input, logging};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::error;

/// Inspect an image or file for statistical traces of hidden data.
#[derive(Parser, Debug)]
#[command(name = "stegscan")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// File to analyze (prompted for when omitted)
    input: Option<PathBuf>,

    /// Configuration file
    #[arg(short, long, default_value = DEFAULT_CONFIG_FILE, env = "STEGSCAN_CONFIG")]
    config: PathBuf,

    /// Override the report output directory
    #[arg(short, long)]
    output_dir: Option<String>,

    /// Override enabled image methods (comma separated)
    #[arg(long, value_delimiter = ',')]
    image_methods: Option<Vec<String>>,

    /// Override enabled file methods (comma separated)
    #[arg(long, value_delimiter = ',')]
    file_methods: Option<Vec<String>>,

    /// Embed per-channel histograms in the report
    #[arg(long)]
    include_histograms: bool,

    /// Write bit planes as PNG files next to the report
    #[arg(long)]
    export_bit_planes: bool,

    /// Save the effective configuration back to the configuration file
    #[arg(long)]
    write_config: bool,

    /// Emit logs as JSON
    #[arg(long)]
    json_log: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();
    logging::init_logging(args.json_log);

    match run(&args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn prompt_for_path() -> anyhow::Result<PathBuf> {
    print!("Enter the path to the file you want to analyze: ");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("failed to read input path")?;
    let trimmed = line.trim();
    anyhow::ensure!(!trimmed.is_empty(), "no input path given");
    Ok(PathBuf::from(trimmed))
}

fn run(args: &Args) -> anyhow::Result<ExitCode> {
    let loaded = ConfigLoader::load(&args.config);
    if let Some(reason) = &loaded.fallback_reason {
        eprintln!("{reason}. Using default configuration.");
    }

    let mut config = loaded.config;
    if let Some(dir) = &args.output_dir {
        config.report_output_dir = dir.clone();
    }
    if let Some(methods) = &args.image_methods {
        config.default_image_methods = methods.clone();
    }
    if let Some(methods) = &args.file_methods {
        config.default_file_methods = methods.clone();
    }
    config.include_histograms |= args.include_histograms;
    config.export_bit_planes |= args.export_bit_planes;

    if args.write_config {
        if let Err(e) = ConfigLoader::save(&config, &args.config) {
            eprintln!("Error saving configuration: {e}");
        } else {
            println!("Configuration saved to {}", args.config.display());
        }
    }

    let input_path = match &args.input {
        Some(path) => path.clone(),
        None => prompt_for_path()?,
    };
    println!("Analyzing: {}", input_path.display());

    let resolved = match input::resolve(&input_path, config.io_limits()) {
        Ok(resolved) => resolved,
        Err(e) => {
            error!(error = %e, "Input could not be loaded");
            eprintln!("Error: {e}");
            return Ok(ExitCode::FAILURE);
        }
    };

    let record = analyze(&resolved.input, &config);
    let report = Report::new(&input_path, &record);
    let writer = ReportWriter::from_config(&config);

    match writer.write(&report) {
        Ok(path) => println!("Report saved to: {}", path.display()),
        Err(e) => eprintln!("Error saving report: {e}"),
    }
    if config.export_bit_planes {
        match writer.export_bit_planes(&report) {
            Ok(paths) if !paths.is_empty() => {
                println!("Bit planes saved to: {}", writer.output_dir().display())
            }
            Ok(_) => {}
            Err(e) => eprintln!("Error saving bit planes: {e}"),
        }
    }

    println!("{}", render_console(&report)?);
    println!("Analysis complete. Report generated.");
    Ok(ExitCode::SUCCESS)
}
