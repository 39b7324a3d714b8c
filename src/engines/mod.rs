//! External tools driven by the re-encoder.
//!
//! Nothing in this crate touches audio data directly. Every candidate goes through
//! two opaque subprocesses:
//!
//! ## ffmpeg
//!
//! - **Role**: decode the original to an uncompressed WAV
//! - **Settings**: resampled to 44100 Hz
//! - **Install**: `winget install ffmpeg`, `sudo apt install ffmpeg`, `brew install ffmpeg`
//!
//! ## oggenc
//!
//! - **Role**: encode the WAV back to Ogg Vorbis
//! - **Settings**: quality 6, which yields comment headers the X-Ray engine accepts
//! - **Install**: vorbis-tools (`sudo apt install vorbis-tools`, `brew install vorbis-tools`)
//!
//! # Usage
//!
//! ```rust,no_run
//! use std::path::Path;
//! use ogg_reencode::{Transcoder, engines::{preflight, ExternalTool, ToolchainTranscoder}};
//!
//! preflight(&[ExternalTool::ffmpeg(), ExternalTool::oggenc()])?;
//!
//! let mut transcoder = ToolchainTranscoder::new();
//! transcoder.decode(Path::new("music.ogg"), Path::new("/tmp/decoded.wav"))?;
//! transcoder.encode(Path::new("/tmp/decoded.wav"), Path::new("/tmp/encoded.ogg"))?;
//! # Ok::<(), ogg_reencode::ReencodeError>(())
//! ```

pub mod ffmpeg;
pub mod oggenc;

use std::io;
use std::path::Path;
use std::process::{Command, Stdio};

use crate::{MissingTool, ReencodeError, ToolRun, Transcoder};

pub use ffmpeg::{DecodeParams, FfmpegDecoder};
pub use oggenc::{EncodeParams, OggencEncoder};

/// A program that has to be resolvable on `PATH` before a run starts.
#[derive(Debug, Clone)]
pub struct ExternalTool {
    pub program: String,
    pub probe_arg: String,
    pub install_hints: Vec<String>,
}

impl ExternalTool {
    pub fn new(program: &str, probe_arg: &str, install_hints: &[&str]) -> Self {
        Self {
            program: program.to_string(),
            probe_arg: probe_arg.to_string(),
            install_hints: install_hints.iter().map(|hint| hint.to_string()).collect(),
        }
    }

    pub fn ffmpeg() -> Self {
        Self::new(
            ffmpeg::PROGRAM,
            "-version",
            &[
                "Windows: winget install ffmpeg",
                "Linux:   sudo apt install ffmpeg",
                "macOS:   brew install ffmpeg",
            ],
        )
    }

    pub fn oggenc() -> Self {
        Self::new(
            oggenc::PROGRAM,
            "--version",
            &[
                "Windows: https://www.rarewares.org/ogg-oggenc.php",
                "Linux:   sudo apt install vorbis-tools",
                "macOS:   brew install vorbis-tools",
            ],
        )
    }

    /// Spawns the program once with its probe argument.
    ///
    /// Any exit status counts as present; only a failure to spawn because the
    /// program does not exist reports it missing.
    pub fn probe(&self) -> Result<(), ReencodeError> {
        let mut command = Command::new(&self.program);
        command.arg(&self.probe_arg);

        match run_silent(&mut command) {
            Ok(status) => {
                log::debug!("{} probe exited with {:?}", self.program, status.code);
                Ok(())
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                Err(ReencodeError::ToolsMissing(vec![self.missing()]))
            }
            Err(err) => Err(ReencodeError::Spawn {
                program: self.program.clone(),
                source: err,
            }),
        }
    }

    fn missing(&self) -> MissingTool {
        MissingTool {
            program: self.program.clone(),
            install_hints: self.install_hints.clone(),
        }
    }
}

/// Probes every tool and reports all missing ones together.
pub fn preflight(tools: &[ExternalTool]) -> Result<(), ReencodeError> {
    let mut missing = Vec::new();

    for tool in tools {
        match tool.probe() {
            Ok(()) => {}
            Err(ReencodeError::ToolsMissing(mut tools)) => missing.append(&mut tools),
            Err(other) => return Err(other),
        }
    }

    if missing.is_empty() {
        Ok(())
    } else {
        Err(ReencodeError::ToolsMissing(missing))
    }
}

/// Runs `command` to completion with every standard stream discarded.
pub(crate) fn run_silent(command: &mut Command) -> io::Result<ToolRun> {
    let status = command
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()?;
    Ok(ToolRun::from(status))
}

pub(crate) fn spawn_error(program: &str, source: io::Error) -> ReencodeError {
    ReencodeError::Spawn {
        program: program.to_string(),
        source,
    }
}

/// The production pairing: ffmpeg decodes, oggenc encodes.
#[derive(Debug, Clone, Default)]
pub struct ToolchainTranscoder {
    decoder: FfmpegDecoder,
    encoder: OggencEncoder,
}

impl ToolchainTranscoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tools() -> Vec<ExternalTool> {
        vec![ExternalTool::ffmpeg(), ExternalTool::oggenc()]
    }
}

impl Transcoder for ToolchainTranscoder {
    fn decode(&mut self, input: &Path, output: &Path) -> Result<ToolRun, ReencodeError> {
        self.decoder.run(input, output)
    }

    fn encode(&mut self, input: &Path, output: &Path) -> Result<ToolRun, ReencodeError> {
        self.encoder.run(input, output)
    }
}
