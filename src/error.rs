use std::fmt;
use std::path::PathBuf;

/// An external tool that could not be found on the execution path.
#[derive(Debug, Clone, PartialEq)]
pub struct MissingTool {
    pub program: String,
    pub install_hints: Vec<String>,
}

impl fmt::Display for MissingTool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} not found", self.program)
    }
}

#[derive(thiserror::Error, Debug)]
pub enum ReencodeError {
    #[error("required tools missing: {}", list_programs(.0))]
    ToolsMissing(Vec<MissingTool>),
    #[error("directory not found: {0}")]
    DirectoryNotFound(PathBuf),
    #[error("failed to run {program}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
    #[error("directory walk error")]
    Walk(#[from] walkdir::Error),
    #[error("I/O error")]
    Io(#[from] std::io::Error),
}

fn list_programs(tools: &[MissingTool]) -> String {
    tools
        .iter()
        .map(|tool| tool.program.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
