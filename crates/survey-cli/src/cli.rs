//! CLI argument definitions for the survey report generator.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "survey-report",
    version,
    about = "Survey report generator - Convert questionnaire exports to XLSX",
    long_about = "Convert a normalized questionnaire export into a single XLSX report.\n\n\
                  Reads the response, response_detail, response_option and section CSV\n\
                  files from a data folder and writes one worksheet with three header\n\
                  rows, one row per respondent and one column block per question."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Build the questionnaire workbook from a data folder.
    Export(ExportArgs),

    /// List the questions found in a data folder without writing a workbook.
    Questions(QuestionsArgs),
}

#[derive(Parser)]
pub struct ExportArgs {
    /// Path to the folder containing the exported CSV files.
    #[arg(value_name = "DATA_FOLDER")]
    pub data_folder: PathBuf,

    /// Output file path (default: <DATA_FOLDER>/gen_z_questionnaire_data.xlsx).
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Write a JSON run summary to the given path.
    #[arg(long = "summary-json", value_name = "PATH")]
    pub summary_json: Option<PathBuf>,
}

#[derive(Parser)]
pub struct QuestionsArgs {
    /// Path to the folder containing the exported CSV files.
    #[arg(value_name = "DATA_FOLDER")]
    pub data_folder: PathBuf,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
