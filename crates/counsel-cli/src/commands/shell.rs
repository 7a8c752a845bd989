use std::io::{BufRead, IsTerminal, Write};

use anyhow::{Context, bail};
use clap::Parser;
use clap::error::ErrorKind;

use crate::cli::{Cli, Commands, GlobalFlags, OutputFormat};
use crate::commands::dispatch::dispatch;
use crate::context::AppContext;

#[derive(Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// Handle `counsel shell`.
///
/// Reads one command per line and runs it against the same store, so changes
/// made by earlier lines stay visible. A failing line prints its error and the
/// session goes on.
pub fn handle(ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let stdin = std::io::stdin();
    let interactive = stdin.is_terminal();
    if interactive && !flags.quiet {
        eprintln!("counsel shell: enter commands such as `lead list --status new`; `exit` to leave");
    }

    let mut line = String::new();
    loop {
        if interactive {
            eprint!("counsel> ");
            std::io::stderr().flush().context("failed to flush prompt")?;
        }

        line.clear();
        let read = stdin
            .lock()
            .read_line(&mut line)
            .context("failed to read shell input")?;
        if read == 0 {
            break;
        }

        match run_line(&line, ctx, flags.format) {
            Ok(Flow::Continue) => {}
            Ok(Flow::Exit) => break,
            Err(error) => eprintln!("counsel error: {error:#}"),
        }
    }

    tracing::debug!(revision = ctx.store.revision(), "shell closed");
    Ok(())
}

fn run_line(line: &str, ctx: &mut AppContext, default_format: OutputFormat) -> anyhow::Result<Flow> {
    let words = shell_words::split(line).context("invalid shell input")?;
    match words.first().map(String::as_str) {
        None => return Ok(Flow::Continue),
        Some("exit" | "quit") => return Ok(Flow::Exit),
        Some(_) => {}
    }

    let cli = match Cli::try_parse_from(std::iter::once("counsel".to_string()).chain(words)) {
        Ok(cli) => cli,
        Err(error) if matches!(error.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            print!("{error}");
            return Ok(Flow::Continue);
        }
        Err(error) => return Err(error.into()),
    };

    if matches!(cli.command, Commands::Shell) {
        bail!("already in a shell");
    }
    let flags = cli.global_flags(default_format);
    if flags.empty {
        tracing::warn!("--empty only applies when the store is created; ignoring it");
    }
    if flags.verbose {
        tracing::warn!("log level is fixed when the shell starts; use COUNSEL_LOG instead");
    }

    dispatch(cli.command, ctx, &flags)?;
    Ok(Flow::Continue)
}
