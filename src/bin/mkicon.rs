//! Generate buddy icons from user names.
//!
//! Usage: mkicon [--font PATH] [--size N] [--output DIR] NAME...

use std::path::PathBuf;
use std::process::ExitCode;

use buddy_icon::{GeneratorConfig, IconGenerator, MAX_SIZE};
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "mkicon", about = "Generate buddy icons from user names.")]
struct Args {
    /// The name(s) to use.
    #[arg(required = true)]
    names: Vec<String>,

    /// Path to (TrueType or OpenType) font to use.
    #[arg(short, long, value_name = "PATH")]
    font: Option<PathBuf>,

    /// Size of buddy icons to produce.
    #[arg(short, long, value_name = "N", value_parser = clap::value_parser!(u32).range(1..=i64::from(MAX_SIZE)))]
    size: Option<u32>,

    /// Directory in which to place files.
    #[arg(short, long, value_name = "DIR")]
    output: Option<PathBuf>,

    /// JSON file with default settings; other flags override it.
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Generate icons on all cores.
    #[arg(short = 'j', long)]
    parallel: bool,

    /// Log derived colors and written files.
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn into_config(self) -> buddy_icon::Result<(GeneratorConfig, Vec<String>)> {
        let mut config = match &self.config {
            Some(path) => GeneratorConfig::from_file(path)?,
            None => GeneratorConfig::default(),
        };
        if let Some(font) = self.font {
            config.font = font;
        }
        if let Some(size) = self.size {
            config.size = size;
        }
        if let Some(output) = self.output {
            config.output = output;
        }
        if self.parallel {
            config.parallel = true;
        }
        Ok((config, self.names))
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    let (config, names) = match args.into_config() {
        Ok(parts) => parts,
        Err(e) => {
            eprintln!("mkicon: {e}");
            return ExitCode::FAILURE;
        }
    };

    let generator = match IconGenerator::from_config(config) {
        Ok(generator) => generator,
        Err(e) => {
            eprintln!("mkicon: {e}");
            return ExitCode::FAILURE;
        }
    };

    let report = generator.generate_all(&names);
    for (name, error) in report.failures() {
        eprintln!("mkicon: {name:?}: {error}");
    }

    if report.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
