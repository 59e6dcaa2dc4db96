use crate::export::ExportFormat;
use crate::models::parameters::{Frequency, Scope};
use clap::{Parser, Subcommand};

/// Command-line interface definition for rAttendance
/// CLI client for the attendance reporting service
#[derive(Parser)]
#[command(
    name = "rattendance",
    version = env!("CARGO_PKG_VERSION"),
    about = "Upload attendance sheets and generate daily or monthly attendance reports",
    long_about = None
)]
pub struct Cli {
    /// Use a custom configuration file
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    /// Override the service base URL (e.g. http://localhost:8000/api)
    #[arg(global = true, long = "api", value_name = "URL")]
    pub api: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the configuration file with default values
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Upload an attendance sheet and generate a report from it
    Generate {
        /// Attendance sheet (.csv, .xls or .xlsx)
        file: String,

        #[arg(long, value_enum, help = "Report frequency (default from config)")]
        frequency: Option<Frequency>,

        #[arg(long, value_enum, help = "Report scope (default from config)")]
        scope: Option<Scope>,

        #[arg(long, value_name = "YYYY-MM-DD", help = "Target date (default: today)")]
        date: Option<String>,

        #[arg(long, value_name = "YYYY-MM", help = "Target month (default: current month)")]
        month: Option<String>,

        #[arg(long = "employee", value_name = "ID", help = "Employee id (required with --scope employee)")]
        employee: Option<String>,

        #[arg(
            long,
            short = 'o',
            value_name = "PATH",
            help = "Where to save a downloaded document (file or directory)"
        )]
        output: Option<String>,

        #[arg(long, value_name = "FILE", help = "Export a tabular report to FILE")]
        export: Option<String>,

        #[arg(long, value_enum, help = "Export format (default: from --export extension, else csv)")]
        format: Option<ExportFormat>,

        #[arg(long, short = 'f', help = "Overwrite existing files without asking")]
        force: bool,

        #[arg(long, short = 'i', help = "Offer to retry after a failed submission")]
        interactive: bool,
    },

    /// Upload an attendance CSV to the dashboard store
    Upload {
        /// CSV file to upload
        file: String,
    },

    /// Show the daily attendance report
    Daily {
        #[arg(long, value_name = "YYYY-MM-DD", help = "Day to show (default: today)")]
        date: Option<String>,

        #[arg(long, value_name = "FILE", help = "Export the report to FILE")]
        export: Option<String>,

        #[arg(long, value_enum)]
        format: Option<ExportFormat>,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Show the monthly attendance summary
    Monthly {
        #[arg(long, value_name = "YYYY-MM", help = "Month to show (default: current month)")]
        month: Option<String>,

        #[arg(long, value_name = "FILE", help = "Export the report to FILE")]
        export: Option<String>,

        #[arg(long, value_enum)]
        format: Option<ExportFormat>,

        #[arg(long, short = 'f')]
        force: bool,
    },
}
