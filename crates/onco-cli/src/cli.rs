//! CLI argument definitions.
//!
//! Numeric and categorical values are taken as raw text and parsed by the
//! calculators' input boundary, so a bad value is reported with the field it
//! belongs to.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "onco",
    version,
    about = "Oncology clinical calculators",
    long_about = "Oncology clinical decision-support calculators.\n\n\
                  Dosing and body metrics, renal and hepatic function, hematology,\n\
                  cardiac safety, simplified TNM staging and toxicity grading."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format.
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

    /// Result output format.
    #[arg(long = "format", value_enum, default_value = "table", global = true)]
    pub format: OutputFormatArg,
}

#[derive(Subcommand)]
pub enum Command {
    /// List all calculators by category.
    List,
    /// Body surface area (Mosteller).
    Bsa(BsaArgs),
    /// Body mass index.
    Bmi(BmiArgs),
    /// Absolute neutrophil count.
    Anc(AncArgs),
    /// Carboplatin dose (Calvert).
    Calvert(CalvertArgs),
    /// Child-Pugh liver function score.
    ChildPugh(ChildPughArgs),
    /// Creatinine clearance (Cockcroft-Gault).
    Crcl(CrclArgs),
    /// Corrected QT interval (Bazett).
    Qtc(QtcArgs),
    /// Simplified AJCC TNM stage group.
    Stage(StageArgs),
    /// CTCAE adverse event grade (1-5).
    Toxicity(GradeArgs),
    /// ECOG performance status (0-5).
    Ecog(GradeArgs),
}

#[derive(Args)]
pub struct BsaArgs {
    /// Height in centimeters.
    #[arg(long, value_name = "CM", allow_hyphen_values = true)]
    pub height: String,
    /// Weight in kilograms.
    #[arg(long, value_name = "KG", allow_hyphen_values = true)]
    pub weight: String,
}

#[derive(Args)]
pub struct BmiArgs {
    /// Weight in kilograms.
    #[arg(long, value_name = "KG", allow_hyphen_values = true)]
    pub weight: String,
    /// Height in centimeters.
    #[arg(long, value_name = "CM", allow_hyphen_values = true)]
    pub height: String,
}

#[derive(Args)]
pub struct AncArgs {
    /// White blood cell count in 10^3/uL.
    #[arg(long, value_name = "K_PER_UL", allow_hyphen_values = true)]
    pub wbc: String,
    /// Segmented neutrophils, percent.
    #[arg(long, value_name = "PERCENT", allow_hyphen_values = true)]
    pub neutrophils: String,
    /// Band forms, percent (default 0).
    #[arg(long, value_name = "PERCENT", allow_hyphen_values = true)]
    pub bands: Option<String>,
}

#[derive(Args)]
pub struct CalvertArgs {
    /// Target AUC in mg/mL*min.
    #[arg(long, value_name = "AUC", allow_hyphen_values = true)]
    pub auc: String,
    /// GFR or creatinine clearance in mL/min.
    #[arg(long, value_name = "ML_MIN", allow_hyphen_values = true)]
    pub gfr: String,
    /// Cap GFR before dosing (125 mL/min when no limit is given).
    ///
    /// Without this flag the supplied GFR is used unchanged.
    #[arg(
        long = "cap-gfr",
        value_name = "ML_MIN",
        num_args = 0..=1,
        default_missing_value = "125"
    )]
    pub cap_gfr: Option<String>,
}

#[derive(Args)]
pub struct ChildPughArgs {
    /// Total bilirubin in mg/dL.
    #[arg(long, value_name = "MG_DL", allow_hyphen_values = true)]
    pub bilirubin: String,
    /// Serum albumin in g/dL.
    #[arg(long, value_name = "G_DL", allow_hyphen_values = true)]
    pub albumin: String,
    /// International normalized ratio.
    #[arg(long, allow_hyphen_values = true)]
    pub inr: String,
    /// Ascites: none, slight, moderate.
    #[arg(long, default_value = "none")]
    pub ascites: String,
    /// Encephalopathy: none, grade1-2, grade3-4.
    #[arg(long, default_value = "none")]
    pub encephalopathy: String,
}

#[derive(Args)]
pub struct CrclArgs {
    /// Age in years.
    #[arg(long, value_name = "YEARS", allow_hyphen_values = true)]
    pub age: String,
    /// Weight in kilograms.
    #[arg(long, value_name = "KG", allow_hyphen_values = true)]
    pub weight: String,
    /// Serum creatinine in mg/dL.
    #[arg(long, value_name = "MG_DL", allow_hyphen_values = true)]
    pub creatinine: String,
    /// Sex: male or female.
    #[arg(long, default_value = "male")]
    pub sex: String,
}

#[derive(Args)]
pub struct QtcArgs {
    /// Measured QT interval in milliseconds.
    #[arg(long, value_name = "MS", allow_hyphen_values = true)]
    pub qt: String,
    /// Heart rate in beats per minute.
    #[arg(long = "heart-rate", value_name = "BPM", allow_hyphen_values = true)]
    pub heart_rate: String,
}

#[derive(Args)]
pub struct StageArgs {
    /// Primary tumor category (T1-T4).
    #[arg(short = 't', long = "tumor")]
    pub tumor: Option<String>,
    /// Regional node category (N0-N3).
    #[arg(short = 'n', long = "node")]
    pub node: Option<String>,
    /// Distant metastasis category (M0, M1).
    #[arg(short = 'm', long = "metastasis")]
    pub metastasis: Option<String>,
}

#[derive(Args)]
pub struct GradeArgs {
    /// Selected grade.
    #[arg(long, allow_hyphen_values = true)]
    pub grade: String,
}

/// Result output choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormatArg {
    Table,
    Json,
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
