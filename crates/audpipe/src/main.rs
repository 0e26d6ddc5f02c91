mod cmd;
mod exit;
mod logging;
mod output;

use std::path::PathBuf;

use audpipe_transport::{PipeEndpoints, FROM_PIPE_ENV, TO_PIPE_ENV};
use clap::Parser;

use crate::cmd::{Command, Context};
use crate::logging::{init_logging, LogFormat, LogLevel};
use crate::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "audpipe", version, about = "Drive Audacity through mod-script-pipe")]
struct Cli {
    /// Output format.
    #[arg(long, value_name = "FORMAT", global = true)]
    format: Option<OutputFormat>,

    /// Log output format (stderr).
    #[arg(long, value_name = "FORMAT", default_value = "text", global = true)]
    log_format: LogFormat,

    /// Minimum log level (stderr).
    #[arg(
        long,
        value_name = "LEVEL",
        default_value = "warn",
        env = "AUDPIPE_LOG_LEVEL",
        global = true
    )]
    log_level: LogLevel,

    /// Pipe that carries commands to Audacity.
    #[arg(long, value_name = "PATH", env = TO_PIPE_ENV, global = true)]
    to_pipe: Option<PathBuf>,

    /// Pipe that carries replies from Audacity.
    #[arg(long, value_name = "PATH", env = FROM_PIPE_ENV, global = true)]
    from_pipe: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

impl Cli {
    fn endpoints(&self) -> PipeEndpoints {
        let defaults = PipeEndpoints::platform_default();
        PipeEndpoints::new(
            self.to_pipe
                .clone()
                .unwrap_or_else(|| defaults.to_host().to_path_buf()),
            self.from_pipe
                .clone()
                .unwrap_or_else(|| defaults.from_host().to_path_buf()),
        )
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.log_format, cli.log_level);

    let ctx = Context {
        endpoints: cli.endpoints(),
        format: cli.format.unwrap_or_else(OutputFormat::default_for_stdout),
    };
    let result = cmd::run(cli.command, &ctx);

    match result {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(err.code);
        }
    }
}
