//! markdown2html - Convert a Markdown file to HTML
//!
//! Usage:
//!   markdown2html README.md README.html
//!   markdown2html README.md README.html --standalone --title "Read me"
//!   markdown2html README.md README.html --report report.json

use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;

use clap::{Parser as ClapParser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use log::LevelFilter;

use markdown2html::io::{ensure_input_file, read_lines, write_output};
use markdown2html::options;
use markdown2html::renderer::{HtmlRenderer, Renderer};
use markdown2html::report::ConversionReport;
use markdown2html::Error;

#[derive(ValueEnum, Clone, Debug)]
enum ReportFormat {
    /// JSON format
    Json,
    /// Human-readable text
    Text,
}

#[derive(ClapParser)]
#[command(version, about = "Convert a Markdown file to HTML", long_about = None)]
struct Cli {
    /// Markdown file to read
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// HTML file to write
    #[arg(value_name = "OUTPUT")]
    output: PathBuf,

    /// Wrap the output in a complete HTML document
    #[arg(long)]
    standalone: bool,

    /// Document title for standalone output
    #[arg(long, value_name = "TITLE")]
    title: Option<String>,

    /// TOML configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Write a conversion report
    #[arg(long, value_name = "REPORT_FILE")]
    report: Option<PathBuf>,

    /// Report format
    #[arg(long, value_enum, default_value = "json")]
    report_format: ReportFormat,

    /// debug log file
    #[arg(short, long, value_name = "FILE")]
    debuglogfile: Option<PathBuf>,

    #[command(flatten)]
    verbose: Verbosity<WarnLevel>,
}

fn init_logger(filter_level: LevelFilter, logfile: Option<&Path>) -> std::io::Result<()> {
    let mut loggers: Vec<Box<dyn simplelog::SharedLogger>> = vec![simplelog::TermLogger::new(
        filter_level,
        simplelog::Config::default(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )];
    if let Some(filename) = logfile {
        loggers.push(simplelog::WriteLogger::new(
            filter_level.max(LevelFilter::Debug),
            simplelog::Config::default(),
            File::create(filename)?,
        ) as Box<dyn simplelog::SharedLogger>);
    }
    if simplelog::CombinedLogger::init(loggers).is_err() {
        log::warn!("logger already initialized");
    }
    Ok(())
}

fn run(args: &Cli) -> Result<(), Error> {
    let start_time = Instant::now();

    ensure_input_file(&args.input)?;

    let mut render_options = options::load_config(args.config.as_deref())?;
    if args.standalone {
        render_options = render_options.with_standalone(true);
    }
    if let Some(title) = &args.title {
        render_options = render_options.with_title(title.as_str());
    }
    log::debug!("render options: {:?}", render_options);

    let input = read_lines(&args.input)?;
    let renderer = HtmlRenderer::new(render_options);
    let statistics = write_output(&args.output, |writer| renderer.format(&input, writer))?;

    log::info!(
        "converted {} to {} ({} -> {} lines)",
        args.input.display(),
        args.output.display(),
        statistics.total_lines,
        statistics.output_lines
    );

    if let Some(report_path) = &args.report {
        let report = ConversionReport::new(
            &args.input.display().to_string(),
            &args.output.display().to_string(),
            statistics,
        )
        .with_duration(start_time.elapsed());
        let content = match args.report_format {
            ReportFormat::Json => report.to_json()?,
            ReportFormat::Text => report.to_text(),
        };
        fs::write(report_path, content).map_err(|source| Error::Write {
            source,
            path: report_path.clone(),
        })?;
        log::info!("report written to {}", report_path.display());
    }

    Ok(())
}

fn main() -> ExitCode {
    let args = Cli::parse();
    if let Err(err) = init_logger(
        args.verbose.log_level_filter(),
        args.debuglogfile.as_deref(),
    ) {
        eprintln!("cannot create debug log file: {}", err);
        return ExitCode::FAILURE;
    }

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", err);
            ExitCode::FAILURE
        }
    }
}
