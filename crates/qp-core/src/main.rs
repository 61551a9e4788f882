//! qp-core: turn a questionnaire export folder into a printable HTML file.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use qp_core::config::load_config;
use qp_core::exit_codes::ExitCode;
use qp_core::logging::{generate_run_id, init_logging, LogConfig, LogFormat, LogLevel};
use qp_core::output::OutputFormat;
use qp_core::pipeline::{self, RenderRequest};
use qp_core::workspace::ExportFolder;
use qp_core::CliError;
use qp_report::ComponentRegistry;
use tracing::error;

/// Printable questionnaire renderer
#[derive(Parser)]
#[command(name = "qp-core")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[command(flatten)]
    global: GlobalOpts,
}

/// Global options available to all commands
#[derive(Args, Debug)]
struct GlobalOpts {
    /// Render configuration file (JSON); falls back to $QP_CONFIG
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(long, short = 'f', global = true, value_enum, default_value_t = OutputFormat::Human)]
    format: OutputFormat,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Log format on stderr
    #[arg(long, global = true, value_enum)]
    log_format: Option<LogFormat>,

    /// Omit timestamps from human-readable log lines
    #[arg(long, global = true)]
    no_log_timestamps: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Render an export folder to a printable HTML document
    Render(RenderArgs),

    /// Check an export folder for the required files
    Check(CheckArgs),

    /// List the component kinds with a dedicated layout
    Kinds,
}

#[derive(Args, Debug)]
struct RenderArgs {
    /// Folder containing spec.json, metadata.json, and manifest.json
    folder: PathBuf,

    /// Questionnaire title, used for the heading and the output file name;
    /// defaults to the config file's title
    #[arg(long, short = 't')]
    title: Option<String>,

    /// Write the document here instead of into the export folder
    #[arg(long, short = 'o')]
    output: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct CheckArgs {
    /// Folder to check
    folder: PathBuf,
}

fn main() {
    let cli = Cli::parse();

    let cli_level = if cli.global.quiet {
        Some(LogLevel::Error)
    } else {
        match cli.global.verbose {
            0 => None,
            1 => Some(LogLevel::Info),
            2 => Some(LogLevel::Debug),
            _ => Some(LogLevel::Trace),
        }
    };
    let mut log_config = LogConfig::from_env(cli_level, cli.global.log_format);
    log_config.timestamps = !cli.global.no_log_timestamps;
    init_logging(&log_config);

    let exit_code = match &cli.command {
        Commands::Render(args) => run_render(&cli.global, args),
        Commands::Check(args) => run_check(&cli.global, args),
        Commands::Kinds => run_kinds(&cli.global),
    };

    std::process::exit(exit_code.as_i32());
}

fn report_failure(global: &GlobalOpts, command: &str, err: &CliError) -> ExitCode {
    let code = err.exit_code();
    error!(command, error = %err, code = %code, "Command failed");
    match global.format {
        OutputFormat::Json => {
            let response = serde_json::json!({
                "command": command,
                "status": "error",
                "code": code.code_name(),
                "error": err.to_string(),
            });
            println!("{}", response);
        }
        OutputFormat::Human | OutputFormat::Summary => {}
    }
    eprintln!("Error: {}", err);
    code
}

fn run_render(global: &GlobalOpts, args: &RenderArgs) -> ExitCode {
    let config = match load_config(global.config.as_deref()) {
        Ok((config, _source)) => config,
        Err(e) => return report_failure(global, "render", &e),
    };

    let request = RenderRequest {
        folder: args.folder.clone(),
        title: args.title.clone(),
        output: args.output.clone(),
        config,
    };

    match pipeline::run(&request, &generate_run_id()) {
        Ok(outcome) => {
            match global.format {
                OutputFormat::Json => {
                    let response = serde_json::json!({
                        "command": "render",
                        "status": "ok",
                        "generated_at": chrono::Utc::now().to_rfc3339(),
                        "output": outcome.output.display().to_string(),
                        "title": outcome.title,
                        "questions": outcome.questions,
                        "bytes": outcome.bytes,
                    });
                    match serde_json::to_string_pretty(&response) {
                        Ok(text) => println!("{}", text),
                        Err(_) => println!("{}", response),
                    }
                }
                OutputFormat::Summary => {
                    println!(
                        "{} questions -> {}",
                        outcome.questions,
                        outcome.output.display()
                    );
                }
                OutputFormat::Human => {
                    println!("Saved to: {}", outcome.output.display());
                }
            }
            ExitCode::Clean
        }
        Err(e) => report_failure(global, "render", &e),
    }
}

fn run_check(global: &GlobalOpts, args: &CheckArgs) -> ExitCode {
    if !args.folder.is_dir() {
        return report_failure(global, "check", &CliError::NotADirectory(args.folder.clone()));
    }

    let check = ExportFolder::check(&args.folder);
    match global.format {
        OutputFormat::Json => {
            let response = serde_json::json!({
                "command": "check",
                "status": if check.all_found() { "ok" } else { "missing" },
                "folder": check.folder.display().to_string(),
                "files": check.files,
                "missing": check.missing(),
            });
            match serde_json::to_string_pretty(&response) {
                Ok(text) => println!("{}", text),
                Err(_) => println!("{}", response),
            }
        }
        OutputFormat::Summary => {
            let status = if check.all_found() { "OK" } else { "MISSING" };
            println!("[{}] {}", status, check.folder.display());
        }
        OutputFormat::Human => {
            for file in &check.files {
                let symbol = if file.found { "✅" } else { "❌" };
                println!("{}: {}", file.name, symbol);
            }
            println!("{}", check.status_line());
        }
    }

    if check.all_found() {
        ExitCode::Clean
    } else {
        ExitCode::MissingInput
    }
}

fn run_kinds(global: &GlobalOpts) -> ExitCode {
    let registry = ComponentRegistry::builtin();
    let tags = registry.tags();
    match global.format {
        OutputFormat::Json => println!("{}", serde_json::json!({ "kinds": tags })),
        OutputFormat::Summary => println!("{} kinds", tags.len()),
        OutputFormat::Human => {
            for tag in tags {
                println!("{}", tag);
            }
        }
    }
    ExitCode::Clean
}
