use std::path::Path;
use std::process::Command;

use crate::{ReencodeError, ToolRun, QUALITY};

pub const PROGRAM: &str = "oggenc";

#[derive(Debug, Clone)]
pub struct EncodeParams {
    pub quality: u8,
}

impl Default for EncodeParams {
    fn default() -> Self {
        Self { quality: QUALITY }
    }
}

/// Encodes a WAV file to Ogg Vorbis with oggenc's stock comment header.
#[derive(Debug, Clone, Default)]
pub struct OggencEncoder {
    params: EncodeParams,
}

impl OggencEncoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// `oggenc <input> -q <quality> -o <output>`
    pub fn command(&self, input: &Path, output: &Path) -> Command {
        let mut command = Command::new(PROGRAM);
        command
            .arg(input)
            .arg("-q")
            .arg(self.params.quality.to_string())
            .arg("-o")
            .arg(output);
        command
    }

    pub fn run(&self, input: &Path, output: &Path) -> Result<ToolRun, ReencodeError> {
        log::trace!("Encoding {} -> {}", input.display(), output.display());
        let mut command = self.command(input, output);
        super::run_silent(&mut command).map_err(|err| super::spawn_error(PROGRAM, err))
    }
}
