// src/prompt.rs

//! Interactive prompting for inputs not supplied on the command line.

use crate::config::ConfigBuilder;
use crate::cli::RunArgs;
use std::io::{self, BufRead, Write};

pub const EXTRACT_DIR_PROMPT: &str = "Enter the folder path where the files will be extracted: ";
pub const TEMPLATE_PROMPT: &str = "Type the path of the current template (.zip): ";
pub const NAME_PROMPT: &str = "Enter the process name (for renaming the files and folders): ";
pub const DEST_PROMPT: &str = "Destination folder path (where the .zip will be located): ";

/// Asks for every input missing from `args` and returns a builder with all of them set.
///
/// Prompts go to `output`, answers are read line by line from `input` and
/// trimmed. End of input yields an empty answer, which `ConfigBuilder::build`
/// later rejects.
pub fn complete_args(
    mut args: RunArgs,
    input: &mut dyn BufRead,
    output: &mut dyn Write,
) -> io::Result<ConfigBuilder> {
    if args.extract_dir.is_none() {
        args.extract_dir = Some(ask(EXTRACT_DIR_PROMPT, input, output)?);
    }
    if args.template.is_none() {
        args.template = Some(ask(TEMPLATE_PROMPT, input, output)?);
    }
    if args.name.is_none() {
        args.name = Some(ask(NAME_PROMPT, input, output)?);
    }
    if args.dest.is_none() {
        args.dest = Some(ask(DEST_PROMPT, input, output)?);
    }
    Ok(ConfigBuilder::from_cli(args))
}

fn ask(prompt: &str, input: &mut dyn BufRead, output: &mut dyn Write) -> io::Result<String> {
    write!(output, "{}", prompt)?;
    output.flush()?;
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().to_string())
}
