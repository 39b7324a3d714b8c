use std::path::Path;
use std::process::Command;

use crate::{ReencodeError, ToolRun, SAMPLE_RATE};

pub const PROGRAM: &str = "ffmpeg";

#[derive(Debug, Clone)]
pub struct DecodeParams {
    pub sample_rate: u32,
}

impl Default for DecodeParams {
    fn default() -> Self {
        Self {
            sample_rate: SAMPLE_RATE,
        }
    }
}

/// Decodes any input ffmpeg understands to a WAV file.
#[derive(Debug, Clone, Default)]
pub struct FfmpegDecoder {
    params: DecodeParams,
}

impl FfmpegDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// `ffmpeg -y -i <input> -ar <rate> <output>`
    pub fn command(&self, input: &Path, output: &Path) -> Command {
        let mut command = Command::new(PROGRAM);
        command
            .arg("-y")
            .arg("-i")
            .arg(input)
            .arg("-ar")
            .arg(self.params.sample_rate.to_string())
            .arg(output);
        command
    }

    pub fn run(&self, input: &Path, output: &Path) -> Result<ToolRun, ReencodeError> {
        log::trace!("Decoding {} -> {}", input.display(), output.display());
        let mut command = self.command(input, output);
        super::run_silent(&mut command).map_err(|err| super::spawn_error(PROGRAM, err))
    }
}
