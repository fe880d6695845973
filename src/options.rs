use std::ffi::OsString;
use clap::Parser;
use tracing::{ debug, trace };
use crate::{ Command, ConfigError, HumanCommand, InfoCommand, OutputCommand, PageCommand };


/// Flags as they appear on the command line, before any validation.
///
/// Every value-taking option is an `Option` so that "not given" stays
/// distinguishable from "given with a bad value".
#[derive(Parser, Debug, Default, Clone)]
#[command(
    name = "pdfscan",
    disable_help_flag = true,
    disable_version_flag = true,
    allow_negative_numbers = true,
    infer_long_args = true
)]
pub struct RawOptions {
    #[arg(long)]
    pub help: bool,
    #[arg(short = 'c', long)]
    pub config: Option<String>,
    #[arg(short = 'h', long)]
    pub human: bool,
    #[arg(short = 'S', long = "single_page")]
    pub single_page: Option<String>,
    #[arg(short = 'o', long)]
    pub output: Option<String>,
    #[arg(short = 'i', long)]
    pub info: Option<String>,
    #[arg(short = 's', long)]
    pub start: Option<i64>,
    #[arg(short = 'e', long)]
    pub end: Option<i64>,
    #[arg(short = 'p', long)]
    pub page: Option<i64>,
}


fn trimmed(value: Option<String>) -> String {
    value.map(|s| s.trim().to_string()).unwrap_or_default()
}

fn page_index(value: Option<i64>) -> Result<Option<u32>, ConfigError> {
    value.map(|v| u32::try_from(v).map_err(|_| ConfigError::InvalidRange)).transpose()
}


impl RawOptions {
    /// Reduce the flags to exactly one command.
    pub fn into_command(self) -> Result<Command, ConfigError> {
        if self.help {
            return Ok(Command::Help)
        }

        let config = trimmed(self.config);
        if config.is_empty() {
            return Err(ConfigError::NoConfig)
        }

        let requested = |value: &Option<String>| value.as_deref().is_some_and(|s| !s.is_empty());
        if !(requested(&self.output) || self.human || requested(&self.single_page) || requested(&self.info)) {
            return Err(ConfigError::NoAction)
        }

        let start = page_index(self.start)?;
        let end = page_index(self.end)?;
        let page = page_index(self.page)?;
        let ranged = start.is_some() || end.is_some();
        trace!(?start, ?end, ?page, "page selection validated");

        // info is handed on verbatim
        let single_page = trimmed(self.single_page);
        let output = trimmed(self.output);
        let info = self.info.unwrap_or_default();

        if !single_page.is_empty() {
            if ranged {
                return Err(ConfigError::RangeWithSinglePage)
            }
            debug!(path = %single_page, "single page requested");
            return Ok(Command::Page(PageCommand { config, path: single_page, page }))
        }

        if !info.is_empty() {
            debug!(path = %info, "document info requested");
            return Ok(Command::Info(InfoCommand { config, path: info }))
        }

        if ranged && page.is_some() {
            return Err(ConfigError::RangeWithPage)
        }

        if self.human {
            debug!("main routine, human readable");
            Ok(Command::Human(HumanCommand { config, start, end, page }))
        } else {
            debug!(path = %output, "main routine, structured output");
            Ok(Command::Output(OutputCommand { config, path: output, start, end, page }))
        }
    }
}


/// Parse a full argument list (program name first, as `std::env::args` gives it).
///
/// An empty list, or `--help` anywhere in it, yields [`Command::Help`] without
/// looking at the other flags.
pub fn parse_options<I, T>(args: I) -> Result<Command, ConfigError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let args: Vec<OsString> = args.into_iter().map(Into::into).collect();

    if args.len() <= 1 || args.iter().skip(1).any(|a| a.as_os_str() == "--help") {
        debug!("help requested");
        return Ok(Command::Help)
    }

    let raw = RawOptions::try_parse_from(args)?;
    trace!(?raw, "arguments parsed");
    raw.into_command()
}
