use crate::cli::Cli;
use anyhow::Context;
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use md2html_lib::config::Config;
use md2html_lib::convert::default_output_dir;
use md2html_lib::error::Md2HtmlError;
use md2html_lib::prompt::{OverwritePolicy, TerminalPrompt};
use md2html_lib::{ConversionRequest, Outcome};
use std::io;

pub fn run() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let request = build_request(&cli);

    let config = Config::resolve(cli.config.as_deref()).context("Failed to load configuration")?;
    log::debug!("Using render endpoint {}", config.render_url);

    let mut prompt = TerminalPrompt::stdio();
    let outcome = md2html_lib::run(&request, &config, &mut prompt, &mut io::stdout())
        .map_err(report_remote_failure)
        .with_context(|| format!("Failed to convert {}", request.source.display()))?;

    if outcome == Outcome::Skipped {
        log::info!("Nothing written for {}", request.source.display());
    }
    Ok(())
}

/// Remote failures get a one-line diagnostic on stdout, next to the prompt
/// and status lines, before the error chain reaches stderr.
fn report_remote_failure(err: Md2HtmlError) -> Md2HtmlError {
    if matches!(
        err,
        Md2HtmlError::RenderFailed { .. }
            | Md2HtmlError::FetchFailed { .. }
            | Md2HtmlError::Http(_)
    ) {
        println!("md2html: {err}");
    }
    err
}

/// Validates the parsed arguments, exiting with clap's usage error (code 2)
/// when the input or output location is unusable.
fn build_request(cli: &Cli) -> ConversionRequest {
    if !cli.input.exists() {
        invalid_argument(&format!(
            "invalid input: '{}' does not exist",
            cli.input.display()
        ));
    }
    if cli.input.is_dir() {
        invalid_argument(&format!(
            "invalid input: '{}' is a directory, expected a Markdown file",
            cli.input.display()
        ));
    }

    let output_dir = match &cli.output {
        Some(dir) if dir.is_dir() => dir.clone(),
        Some(dir) => invalid_argument(&format!(
            "invalid output: '{}' is not a directory",
            dir.display()
        )),
        None => default_output_dir(&cli.input),
    };

    ConversionRequest {
        source: cli.input.clone(),
        output_dir,
        overwrite: if cli.force {
            OverwritePolicy::Always
        } else {
            OverwritePolicy::Ask
        },
        embed_css: cli.embed,
        verbose: cli.verbose,
    }
}

fn invalid_argument(message: &str) -> ! {
    Cli::command()
        .error(ErrorKind::ValueValidation, message)
        .exit()
}
