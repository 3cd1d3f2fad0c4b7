use std::path::PathBuf;
use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use clap_complete::{generate, Shell};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use miette::{miette, Result};
use tracing::info;

mod analysis;
mod config;
mod discovery;
mod parser;
mod report;
mod resolve;
mod syntax;

use analysis::Analyzer;
use config::{UnusedResultConfig, DEFAULT_FUNCS, DEFAULT_STRING_METHODS};
use discovery::FileFinder;
use report::{ReportOptions, Reporter};

/// unusedresult - flag Go calls whose side-effect-free result is discarded
#[derive(Parser, Debug)]
#[command(name = "unusedresult")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the Go package or file to analyze
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Comma-separated list of functions whose results must be used
    /// [default: errors.New,fmt.Errorf,fmt.Sprintf,fmt.Sprint,sort.Reverse]
    #[arg(long, value_name = "LIST")]
    unused_funcs: Option<String>,

    /// Comma-separated list of names of methods of type func() string
    /// whose results must be used [default: Error,String]
    #[arg(long, value_name = "LIST")]
    unused_string_methods: Option<String>,

    /// Path to a .unusedresult.toml configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Skip _test.go files
    #[arg(long)]
    skip_tests: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value = "terminal")]
    format: OutputFormat,

    /// Output file (for json format)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Quiet mode - only output results
    #[arg(short, long)]
    quiet: bool,

    /// Generate shell completions
    #[arg(long, value_name = "SHELL")]
    completions: Option<Shell>,
}

#[derive(clap::ValueEnum, Clone, Debug, Default)]
enum OutputFormat {
    #[default]
    Terminal,
    Compact,
    Json,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Handle shell completions
    if let Some(shell) = cli.completions {
        let mut cmd = Cli::command();
        let name = cmd.get_name().to_string();
        generate(shell, &mut cmd, name, &mut std::io::stdout());
        return ExitCode::SUCCESS;
    }

    init_logging(cli.verbose, cli.quiet);

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}: {:?}", "Configuration error".red(), e);
            return ExitCode::from(2);
        }
    };

    match run_analysis(&config, &cli) {
        Ok(findings) if findings == 0 => ExitCode::SUCCESS,
        Ok(_) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("{}: {:?}", "Analysis error".red(), e);
            ExitCode::from(2)
        }
    }
}

fn init_logging(verbose: bool, quiet: bool) {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = if quiet {
        EnvFilter::new("error")
    } else if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt().with_env_filter(filter).with_target(false).init();
}

fn load_config(cli: &Cli) -> Result<UnusedResultConfig> {
    // An explicit config file wins; otherwise any list flag given on the
    // command line is authoritative, even when its value spells out the
    // default list. A project file is only consulted when neither flag
    // appeared at all.
    if let Some(config_path) = &cli.config {
        return UnusedResultConfig::from_file(config_path).map_err(|e| miette!("{}", e));
    }
    if cli.unused_funcs.is_none() && cli.unused_string_methods.is_none() {
        return UnusedResultConfig::from_default_locations(&cli.path).map_err(|e| miette!("{}", e));
    }
    UnusedResultConfig::from_lists(
        cli.unused_funcs.as_deref().unwrap_or(DEFAULT_FUNCS),
        cli.unused_string_methods
            .as_deref()
            .unwrap_or(DEFAULT_STRING_METHODS),
    )
    .map_err(|e| miette!("{}", e))
}

fn run_analysis(config: &UnusedResultConfig, cli: &Cli) -> Result<usize> {
    use std::time::Instant;

    let start_time = Instant::now();

    info!("unusedresult v{}", env!("CARGO_PKG_VERSION"));
    info!(
        "checking {} configured functions, {} configured methods",
        config.func_count(),
        config.method_count()
    );

    let finder = if cli.skip_tests {
        FileFinder::new().without_tests()
    } else {
        FileFinder::new()
    };
    let files = finder.find_files(&cli.path);

    if files.is_empty() {
        if !cli.quiet {
            println!("{}", "No Go files found.".yellow());
        }
        return Ok(0);
    }

    info!("Found {} files to analyze", files.len());

    let mut analyzer = Analyzer::new().map_err(|e| miette!("{}", e))?;

    let pb = if cli.quiet {
        ProgressBar::hidden()
    } else {
        let pb = ProgressBar::new(files.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template(
                    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})",
                )
                .map_err(|e| miette!("{}", e))?
                .progress_chars("#>-"),
        );
        pb
    };

    for file in &files {
        analyzer.add_file(file).map_err(|e| miette!("{}", e))?;
        pb.inc(1);
    }
    pb.finish_and_clear();

    let findings = analyzer.run(config);

    let report_format = match cli.format {
        OutputFormat::Terminal => report::ReportFormat::Terminal,
        OutputFormat::Compact => report::ReportFormat::Compact,
        OutputFormat::Json => report::ReportFormat::Json,
    };
    let options = ReportOptions {
        output_path: cli.output.clone(),
        base_path: cli.path.is_dir().then(|| cli.path.clone()),
    };
    let reporter = Reporter::with_options(report_format, options);
    reporter.report(&findings)?;

    let elapsed = start_time.elapsed();
    info!(
        "Analyzed {} files in {:.2}s",
        files.len(),
        elapsed.as_secs_f64()
    );

    Ok(findings.len())
}
