// src/main.rs

use anyhow::Result;
use clap::Parser;
use std::io::Write;
#[cfg(feature = "web")]
use template_rebrand::cli::Commands;
use template_rebrand::cli::Cli;
use template_rebrand::constants::MISSING_FIELDS_MESSAGE;
use template_rebrand::output::write_report;
#[cfg(feature = "progress")]
use template_rebrand::progress::IndicatifProgress;
use template_rebrand::prompt::complete_args;
use template_rebrand::report::{LogSink, ReportSink};
use template_rebrand::run;
use template_rebrand::signal::setup_signal_handler;

#[cfg(feature = "web")]
use template_rebrand::web;

fn main() -> Result<()> {
    // Initialize logging. Default to 'info' if RUST_LOG is not set.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(
                if cfg!(debug_assertions) {
                    "template_rebrand=debug".parse()?
                } else {
                    "template_rebrand=info".parse()?
                },
            ),
        )
        .init();

    log::info!("Starting template-rebrand v{}...", env!("CARGO_PKG_VERSION"));
    log::debug!("Raw arguments: {:?}", std::env::args().collect::<Vec<_>>());

    // Panic hook to keep build paths out of user-facing messages
    std::panic::set_hook(Box::new(|info| {
        let msg = match info.payload().downcast_ref::<&str>() {
            Some(s) => *s,
            None => "Box<Any>",
        };
        eprintln!(
            "Application Error: {}",
            msg.replace(env!("CARGO_MANIFEST_DIR"), "<redacted>")
                .replace(std::path::MAIN_SEPARATOR, "/")
        );
    }));

    // --- Setup ---
    let cli = Cli::parse();

    // --- Handle Subcommands (Web Form) ---
    #[cfg(feature = "web")]
    if let Some(Commands::Serve { port, no_open }) = &cli.command {
        let rt = tokio::runtime::Runtime::new()?;
        return rt.block_on(web::start_server(*port, !*no_open));
    }

    setup_signal_handler()?;

    // --- Inputs ---
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    let builder = complete_args(cli.run, &mut stdin.lock(), &mut stdout)?;
    println!("{}", template_rebrand::constants::REPORT_RULE);

    let config = match builder.build() {
        Ok(config) => config,
        Err(e) => {
            log::debug!("Validation failed: {}", e);
            eprintln!("{}", MISSING_FIELDS_MESSAGE);
            eprintln!("{}", e);
            return Ok(());
        }
    };

    // Decide whether to show a progress bar. Show it if stderr is a TTY.
    let sink: Box<dyn ReportSink> = {
        #[cfg(feature = "progress")]
        {
            if !cli.quiet && IndicatifProgress::is_visible() {
                Box::new(IndicatifProgress::new())
            } else {
                Box::new(LogSink)
            }
        }
        #[cfg(not(feature = "progress"))]
        {
            Box::new(LogSink)
        }
    };

    // --- Execution ---
    let report = match run(&config, sink.as_ref()) {
        Ok(report) => report,
        Err(e) => {
            sink.finish();
            log::error!("Unexpected error: {}", e);
            eprintln!("Error: {}", e);
            return Ok(());
        }
    };

    // The statuses are part of the printed report, not of the exit code.
    write_report(&report, &mut stdout)?;
    stdout.flush()?;
    Ok(())
}
