pub mod audio;
pub mod backup;
pub mod discovery;
pub mod engines;
pub mod error;
pub mod prompt;
pub mod session;

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

pub use error::{MissingTool, ReencodeError};

/// Extension of the files eligible for re-encoding.
pub const EXTENSION: &str = "ogg";
/// Suffix appended to an original's file name to form its backup.
pub const BACKUP_SUFFIX: &str = ".bak";
/// Sample rate the decoder resamples to.
pub const SAMPLE_RATE: u32 = 44_100;
/// Vorbis quality passed to the encoder (oggenc's -1..10 scale).
pub const QUALITY: u8 = 6;

/// A file selected for re-encoding.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    pub path: PathBuf,
    /// Path shown to the operator: relative to the root in recursive mode, the file name otherwise.
    pub display: String,
}

/// Pipeline step a candidate failed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Setup,
    Decode,
    Encode,
    Backup,
    Replace,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Stage::Setup => "scratch setup",
            Stage::Decode => "ffmpeg decode",
            Stage::Encode => "oggenc encode",
            Stage::Backup => "backup",
            Stage::Replace => "replace",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum CandidateOutcome {
    Reencoded { backup_created: bool },
    Failed { stage: Stage, reason: String },
}

impl CandidateOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, CandidateOutcome::Reencoded { .. })
    }
}

/// Counters accumulated over one run.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RunSummary {
    pub total: usize,
    pub succeeded: usize,
    pub failed: usize,
}

impl RunSummary {
    pub fn record(&mut self, outcome: &CandidateOutcome) {
        if outcome.is_success() {
            self.succeeded += 1;
        } else {
            self.failed += 1;
        }
    }
}

/// Exit status of one external tool invocation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToolRun {
    pub success: bool,
    pub code: Option<i32>,
}

impl ToolRun {
    pub fn ok() -> Self {
        Self {
            success: true,
            code: Some(0),
        }
    }

    pub fn failed(code: Option<i32>) -> Self {
        Self {
            success: false,
            code,
        }
    }
}

impl From<std::process::ExitStatus> for ToolRun {
    fn from(status: std::process::ExitStatus) -> Self {
        Self {
            success: status.success(),
            code: status.code(),
        }
    }
}

/// The two external steps applied to every candidate.
///
/// Implementations write their result to `output`; the caller decides success by
/// inspecting the returned status together with the output file.
pub trait Transcoder {
    fn decode(&mut self, input: &Path, output: &Path) -> Result<ToolRun, ReencodeError>;
    fn encode(&mut self, input: &Path, output: &Path) -> Result<ToolRun, ReencodeError>;
}
