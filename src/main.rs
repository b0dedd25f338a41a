//! Codelens: code quality analyzer CLI

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use codelens::analyzer::{AnalysisEngine, FileAnalysis};
use codelens::config::{
    build_ignore_set, default_config_json, is_ignored, load_config, Config, CONFIG_FILENAME,
};
use codelens::debugging::DebuggingAssistant;
use codelens::reporter::{ConsoleReporter, JsonReporter};
use colored::Colorize;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use walkdir::WalkDir;

const STDIN_PATH: &str = "-";

/// Codelens: heuristic code quality analyzer for JavaScript
#[derive(Parser, Debug)]
#[command(name = "codelens")]
#[command(author, version, about, long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
#[command(subcommand_negates_reqs = true)]
struct Args {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Source file, directory, or "-" for stdin (omit when using a subcommand)
    #[arg(required = true)]
    path: Option<PathBuf>,

    /// Output format as JSON
    #[arg(long, short)]
    json: bool,

    /// Minimum score threshold (exit 1 if below)
    #[arg(long, short)]
    threshold: Option<u8>,

    /// Quiet mode (minimal output)
    #[arg(long, short)]
    quiet: bool,

    /// Verbose output (also enables debug logging)
    #[arg(long, short)]
    verbose: bool,

    /// Path to config file (default: search .codelensrc.json in current dir and parents)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print debugging tips and suggested test inputs for a source file
    Debug {
        /// Source file or "-" for stdin
        path: PathBuf,

        /// Error message to tailor the tips to
        #[arg(long, short)]
        error: Option<String>,

        /// Output format as JSON
        #[arg(long, short)]
        json: bool,
    },

    /// Create .codelensrc.json with sensible defaults
    Init {
        /// Minimum score threshold (e.g. 70)
        #[arg(long)]
        threshold: Option<u8>,

        /// Directory in which to create config (default: current)
        #[arg(long)]
        dir: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", "Error".red().bold(), e);
            ExitCode::from(2)
        }
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .try_init();
}

fn run() -> Result<ExitCode> {
    let args = Args::parse();
    init_logging(args.verbose);
    if args.no_color {
        colored::control::set_override(false);
    }

    if let Some(cmd) = args.command {
        return match cmd {
            Commands::Debug { path, error, json } => run_debug(&path, error.as_deref(), json),
            Commands::Init { threshold, dir } => run_init(threshold, dir.as_deref()),
        };
    }

    let path = args
        .path
        .clone()
        .context("A path is required when not using a subcommand")?;

    let work_dir = if path.as_os_str() == STDIN_PATH || path.is_file() {
        path.parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or(Path::new("."))
            .to_path_buf()
    } else {
        path.clone()
    };

    // CLI flags override config file
    let config = load_config(&work_dir, args.config.as_deref())?.merge_with_cli(args.threshold);

    let engine = AnalysisEngine::new();
    let results = if path.as_os_str() == STDIN_PATH {
        vec![analyze_stdin(&engine, &config)?]
    } else {
        let files = collect_source_files(&path, &config)?;
        if files.is_empty() {
            eprintln!("{}: No source files found", "Warning".yellow());
            return Ok(ExitCode::from(2));
        }
        analyze_files(&engine, &files, &config, args.quiet)
    };

    if results.is_empty() {
        eprintln!("{}: All files failed to analyze", "Error".red());
        return Ok(ExitCode::from(2));
    }

    let stats = AnalysisEngine::aggregate_stats(&results);

    if args.json {
        let reporter = JsonReporter::new().pretty();
        if results.len() == 1 {
            println!("{}", reporter.report(&results[0]));
        } else {
            println!("{}", reporter.report_with_summary(&results, &stats));
        }
    } else {
        let mut reporter = ConsoleReporter::new();
        if args.no_color {
            reporter = reporter.without_colors();
        }
        if args.verbose {
            reporter = reporter.verbose();
        }

        if args.quiet {
            for analysis in &results {
                reporter.report_quiet(analysis);
            }
        } else if results.len() == 1 {
            reporter.report(&results[0]);
        } else {
            reporter.report_many(&results, &stats);
        }
    }

    let failing: Vec<&FileAnalysis> = results.iter().filter(|r| r.below_threshold()).collect();
    if !failing.is_empty() {
        if !args.quiet {
            for analysis in &failing {
                eprintln!(
                    "{}: {} scored {} (threshold {})",
                    "Below threshold".red(),
                    analysis.file_path.display(),
                    analysis.result.score,
                    analysis.threshold.unwrap_or_default()
                );
            }
        }
        return Ok(ExitCode::from(1));
    }

    Ok(ExitCode::SUCCESS)
}

fn read_source(path: &Path) -> Result<String> {
    if path.as_os_str() == STDIN_PATH {
        let mut source = String::new();
        std::io::stdin()
            .read_to_string(&mut source)
            .context("Failed to read source from stdin")?;
        Ok(source)
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read source file: {}", path.display()))
    }
}

fn analyze_stdin(engine: &AnalysisEngine, config: &Config) -> Result<FileAnalysis> {
    let virtual_path = PathBuf::from("<stdin>");
    let source = read_source(Path::new(STDIN_PATH))?;
    let effective = config.effective_for_file(&virtual_path);
    let result = engine.analyze_with_config(&source, Some(&effective));
    Ok(FileAnalysis {
        file_path: virtual_path,
        threshold: effective.threshold,
        result,
    })
}

fn analyze_files(
    engine: &AnalysisEngine,
    files: &[PathBuf],
    config: &Config,
    quiet: bool,
) -> Vec<FileAnalysis> {
    let outcomes = if files.len() > 1 {
        engine.analyze_parallel(files, Some(config))
    } else {
        engine.analyze_many(files, Some(config))
    };

    let mut results = Vec::with_capacity(outcomes.len());
    for (path, outcome) in files.iter().zip(outcomes) {
        match outcome {
            Ok(analysis) => results.push(analysis),
            Err(e) => {
                log::warn!("skipping {}: {:#}", path.display(), e);
                if !quiet {
                    eprintln!("{}: {:#}", "Warning".yellow(), e);
                }
            }
        }
    }
    results
}

fn collect_source_files(path: &Path, config: &Config) -> Result<Vec<PathBuf>> {
    let ignore_set = if config.ignore.is_empty() {
        None
    } else {
        Some(build_ignore_set(&config.ignore)?)
    };
    let ignored = |p: &Path| ignore_set.as_ref().is_some_and(|set| is_ignored(p, set));

    if path.is_file() {
        if ignored(path) {
            return Ok(vec![]);
        }
        return Ok(vec![path.to_path_buf()]);
    }

    if !path.is_dir() {
        anyhow::bail!("Path does not exist: {}", path.display());
    }

    let extensions = config.get_extensions();
    let mut files: Vec<PathBuf> = WalkDir::new(path)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| e.into_path())
        .filter(|p| has_extension(p, &extensions) && !ignored(p))
        .collect();

    // Sort for consistent output
    files.sort();

    Ok(files)
}

fn has_extension(path: &Path, extensions: &[&str]) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| extensions.iter().any(|x| x.eq_ignore_ascii_case(ext)))
}

fn run_debug(path: &Path, error: Option<&str>, json: bool) -> Result<ExitCode> {
    let source = read_source(path)?;
    let guidance = DebuggingAssistant::new(&source).guidance(error);

    if json {
        println!("{}", JsonReporter::new().pretty().report_guidance(&guidance));
    } else {
        ConsoleReporter::new().report_guidance(&guidance);
    }
    Ok(ExitCode::SUCCESS)
}

fn run_init(threshold: Option<u8>, dir: Option<&Path>) -> Result<ExitCode> {
    let cwd = std::env::current_dir().context("Failed to get current directory")?;
    let dir = dir.unwrap_or(&cwd);
    let config_path = dir.join(CONFIG_FILENAME);

    if config_path.exists() {
        eprintln!(
            "{}: {} already exists; use --dir to write elsewhere or remove it first",
            "Warning".yellow(),
            config_path.display()
        );
        return Ok(ExitCode::SUCCESS);
    }

    let json = default_config_json(threshold)?;
    std::fs::write(&config_path, json + "\n")
        .with_context(|| format!("Failed to write {}", config_path.display()))?;
    println!("{} {}", "Created".green(), config_path.display());
    Ok(ExitCode::SUCCESS)
}
