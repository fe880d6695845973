use serde::Serialize;


/// Render one page of the document as an image.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct PageCommand {
    pub config: String,
    pub path: String,
    pub page: Option<u32>,
}

/// Write the document info to `path`.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct InfoCommand {
    pub config: String,
    pub path: String,
}

/// Process the document and print the result for humans.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct HumanCommand {
    pub config: String,
    pub start: Option<u32>,
    pub end: Option<u32>,
    pub page: Option<u32>,
}

/// Process the document and save the structured result at `path`.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct OutputCommand {
    pub config: String,
    pub path: String,
    pub start: Option<u32>,
    pub end: Option<u32>,
    pub page: Option<u32>,
}


/// The single request a command line resolves to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum Command {
    Help,
    Page(PageCommand),
    Info(InfoCommand),
    Human(HumanCommand),
    Output(OutputCommand),
}

impl Command {
    pub fn config(&self) -> Option<&str> {
        match self {
            Command::Help => None,
            Command::Page(c) => Some(&c.config),
            Command::Info(c) => Some(&c.config),
            Command::Human(c) => Some(&c.config),
            Command::Output(c) => Some(&c.config),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Command::Help => "help",
            Command::Page(_) => "page",
            Command::Info(_) => "info",
            Command::Human(_) => "human",
            Command::Output(_) => "output",
        }
    }
}
