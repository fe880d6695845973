use std::env;
use std::io::{ self, Write };
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::EnvFilter;
use pdfscan::{ Command, ConfigError, USAGE };


fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}


fn cmd_help() -> ExitCode {
    println!("{USAGE}");

    0.into()
}

fn cmd_error(err: ConfigError) -> ExitCode {
    eprintln!("ERROR: {err}");
    if err.wants_usage() {
        eprintln!();
        eprintln!("{USAGE}");
    }

    1.into()
}

fn cmd_dispatch(cmd: Command) -> ExitCode {
    info!(command = cmd.name(), config = cmd.config().unwrap_or_default(), "handing off command");

    let json = match serde_json::to_string_pretty(&cmd) {
        Ok(json) => json,
        Err(err) => {
            eprintln!("ERROR: failed to serialize command: {err}");
            return 2.into()
        }
    };

    let mut stdout = io::stdout().lock();
    if let Err(err) = writeln!(stdout, "{json}") {
        eprintln!("ERROR: failed to write command: {err}");
        return 3.into()
    }

    0.into()
}


fn main() -> ExitCode {
    init_logging();

    match pdfscan::parse_options(env::args_os()) {
        Ok(Command::Help) => cmd_help(),
        Ok(cmd) => cmd_dispatch(cmd),
        Err(err) => cmd_error(err),
    }
}
