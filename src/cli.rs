// src/cli.rs

use clap::{Args, Parser};
#[cfg(feature = "web")]
use clap::Subcommand;

/// Rebrand an automation template packed as a ZIP archive.
///
/// template-rebrand extracts the template, replaces the template's process name
/// in every file name, folder name, and text file, then packs the result into
/// `<NAME>.zip`. Spreadsheets are copied untouched. Any input not given as a
/// flag is asked for interactively.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[cfg(feature = "web")]
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[command(flatten)]
    pub run: RunArgs,

    /// Do not show the progress bar.
    #[arg(short, long, global = true, action = clap::ArgAction::SetTrue)]
    pub quiet: bool,
}

/// The four inputs of a run.
#[derive(Args, Debug, Clone, Default)]
pub struct RunArgs {
    /// Folder where the template is extracted and rewritten (created if absent).
    #[arg(short = 'x', long, value_name = "DIR")]
    pub extract_dir: Option<String>,

    /// Path of the template archive (.zip).
    #[arg(short = 't', long, value_name = "ZIP")]
    pub template: Option<String>,

    /// Process name that replaces the template name.
    #[arg(short = 'n', long, value_name = "NAME")]
    pub name: Option<String>,

    /// Folder where `<NAME>.zip` is written.
    #[arg(short = 'd', long, value_name = "DIR")]
    pub dest: Option<String>,
}

#[cfg(feature = "web")]
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Serve the form in the browser instead of prompting.
    Serve {
        /// Port to listen on (127.0.0.1 only).
        #[arg(short, long, default_value_t = 8484)]
        port: u16,

        /// Do not open the browser automatically.
        #[arg(long, action = clap::ArgAction::SetTrue)]
        no_open: bool,
    },
}
