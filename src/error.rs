use thiserror::Error;


#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("no configuration file set")]
    NoConfig,
    #[error("must specify an output file, the human flag, the info or the single_page parameter")]
    NoAction,
    #[error("invalid start or end range or page")]
    InvalidRange,
    #[error("start and end are invalid parameters for single_page")]
    RangeWithSinglePage,
    #[error("start and/or end and page cannot be used at the same time")]
    RangeWithPage,
    #[error("{0}")]
    Arguments(String),
}

impl ConfigError {
    /// Whether the driver should follow the message with the usage text.
    pub fn wants_usage(&self) -> bool {
        matches!(self, Self::NoConfig | Self::NoAction | Self::Arguments(_))
    }
}

impl From<clap::Error> for ConfigError {
    fn from(err: clap::Error) -> Self {
        // clap renders "error: <what>\n\nUsage: ...\n"; keep only the first line
        let rendered = err.to_string();
        let line = rendered.lines().next().unwrap_or_default();
        let line = line.strip_prefix("error: ").unwrap_or(line);
        Self::Arguments(line.trim().to_string())
    }
}
