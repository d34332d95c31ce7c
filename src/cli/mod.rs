//! CLI command definitions and handlers

mod analyze;
mod init;
mod refactor;
mod testgen;

use crate::config::{load_config_file, load_project_config, ProjectConfig};
use crate::parsers::Language;
use crate::reporters::{report_with_format, OutputFormat, Report};
use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// codescope - regex-driven code analysis
///
/// Structure, quality and security reports for a single source file,
/// with rule-based fixes and generated test skeletons.
#[derive(Parser, Debug)]
#[command(name = "codescope")]
#[command(
    version,
    about = "Regex-driven structure, quality and security analysis for Python, JavaScript and Java",
    after_help = "\
Examples:
  codescope structure app.py                   Functions, classes, imports, comments
  codescope quality app.py --format json       Quality score as JSON
  codescope security app.js --fixes            Vulnerabilities plus suggested fixes
  codescope refactor app.py --security -o out.py   Apply fixes and write the result
  codescope tests app.py --kind quality        Generate placeholder tests"
)]
pub struct Cli {
    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "warn", value_parser = ["error", "warn", "info", "debug", "trace"])]
    pub log_level: String,

    /// Config file (default: ./codescope.toml when present)
    #[arg(long, global = true, env = "CODESCOPE_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Arguments shared by every analysis subcommand
#[derive(Args, Debug, Clone)]
pub struct SourceArgs {
    /// Source file to analyze
    pub file: PathBuf,

    /// Language tag (python, javascript, java, ...); inferred from the extension when omitted
    #[arg(long, short = 'l')]
    pub language: Option<String>,

    /// Output format: text, json
    #[arg(long, short = 'f', value_parser = ["text", "txt", "terminal", "json"])]
    pub format: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write an example codescope.toml to the current directory
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },

    /// Extract functions, classes, imports and comments
    Structure(SourceArgs),

    /// Score code quality (0-100) with issues and recommendations
    Quality(SourceArgs),

    /// Scan for vulnerability patterns and compute a security score
    Security {
        #[command(flatten)]
        source: SourceArgs,

        /// Also suggest a fix for every finding
        #[arg(long)]
        fixes: bool,
    },

    /// Apply style and best-practice rewrites to the file
    Refactor {
        #[command(flatten)]
        source: SourceArgs,

        /// Scan first and apply the suggested security fixes
        #[arg(long)]
        security: bool,

        /// Write the refactored code to this path
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },

    /// Recommend unit, integration and API tests
    Recommend(SourceArgs),

    /// Generate placeholder test cases
    Tests {
        #[command(flatten)]
        source: SourceArgs,

        /// Analysis kind driving generation (function_detection, basic, class_detection, quality, test_recommendations)
        #[arg(long, default_value = "quality")]
        kind: String,

        /// Project the test cases belong to
        #[arg(long, default_value = "default")]
        project: String,
    },
}

/// Run the parsed command line
pub fn run(cli: Cli) -> Result<()> {
    let config = load_config(cli.config.as_deref());

    match cli.command {
        Commands::Init { force } => init::run(Path::new("."), force),
        Commands::Structure(source) => analyze::structure(&Source::load(&source, &config)?),
        Commands::Quality(source) => analyze::quality(&Source::load(&source, &config)?, &config),
        Commands::Security { source, fixes } => {
            analyze::security(&Source::load(&source, &config)?, &config, fixes)
        }
        Commands::Refactor {
            source,
            security,
            output,
        } => refactor::run(
            &Source::load(&source, &config)?,
            &config,
            security,
            output.as_deref(),
        ),
        Commands::Recommend(source) => analyze::recommend(&Source::load(&source, &config)?),
        Commands::Tests {
            source,
            kind,
            project,
        } => testgen::run(&Source::load(&source, &config)?, &kind, &project),
    }
}

/// Explicit `--config` path, else `./codescope.toml`, else defaults
fn load_config(path: Option<&Path>) -> ProjectConfig {
    match path {
        Some(path) => match load_config_file(path) {
            Ok(config) => {
                debug!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                warn!("{}; using defaults", e);
                ProjectConfig::default()
            }
        },
        None => load_project_config(Path::new(".")),
    }
}

/// A source file loaded and resolved against CLI flags and config
pub(crate) struct Source {
    pub path: PathBuf,
    pub text: String,
    pub language: Language,
    pub format: OutputFormat,
}

impl Source {
    fn load(args: &SourceArgs, config: &ProjectConfig) -> Result<Self> {
        let text = std::fs::read_to_string(&args.file)
            .with_context(|| format!("Failed to read {}", args.file.display()))?;

        let format_name = args
            .format
            .as_deref()
            .or(config.defaults.format.as_deref())
            .unwrap_or("text");
        let format = format_name
            .parse::<OutputFormat>()
            .with_context(|| format!("Invalid output format in {}", crate::config::CONFIG_FILE_NAME))?;

        Ok(Self {
            language: resolve_language(args, config),
            path: args.file.clone(),
            text,
            format,
        })
    }

    /// Path as given on the command line, with forward slashes
    pub fn display_path(&self) -> String {
        self.path.to_string_lossy().replace('\\', "/")
    }
}

/// `--language`, then a recognized extension, then the configured default
fn resolve_language(args: &SourceArgs, config: &ProjectConfig) -> Language {
    if let Some(tag) = &args.language {
        return Language::parse(tag);
    }
    match Language::from_path(&args.file) {
        Language::Other(ext) => match &config.defaults.language {
            Some(tag) => Language::parse(tag),
            None => Language::Other(ext),
        },
        known => known,
    }
}

/// Render and print to stdout
pub(crate) fn emit(report: Report<'_>, format: OutputFormat) -> Result<()> {
    let rendered = report_with_format(report, format)?;
    println!("{}", rendered.trim_end_matches('\n'));
    Ok(())
}
