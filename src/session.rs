use std::error::Error;
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use tempfile::TempDir;

use crate::{
    audio, backup, discovery, prompt, Candidate, CandidateOutcome, ReencodeError, RunSummary,
    Stage, ToolRun, Transcoder, BACKUP_SUFFIX, EXTENSION,
};

const RULE: &str = "--------------------------------------------------";
const RUN_DIR_PREFIX: &str = "ogg-reencode-";
const DECODED_NAME: &str = "decoded.wav";
const ENCODED_NAME: &str = "encoded.ogg";

/// Settings for one batch run.
#[derive(Debug, Clone)]
pub struct BatchOptions {
    pub root: PathBuf,
    pub recursive: bool,
    /// Skip the confirmation prompt.
    pub assume_yes: bool,
    /// Where the per-run temporary directory is created. `None` uses the platform temp root.
    pub temp_root: Option<PathBuf>,
}

impl BatchOptions {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            recursive: false,
            assume_yes: false,
            temp_root: None,
        }
    }
}

/// How a run ended.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RunReport {
    NoCandidates,
    Cancelled { candidates: usize },
    Completed(RunSummary),
}

/// Drives the decode, encode, backup and replace steps over every candidate, one at a time.
pub struct BatchSession<T: Transcoder> {
    transcoder: T,
    options: BatchOptions,
}

impl<T: Transcoder> BatchSession<T> {
    pub fn new(transcoder: T, options: BatchOptions) -> Self {
        Self {
            transcoder,
            options,
        }
    }

    pub fn options(&self) -> &BatchOptions {
        &self.options
    }

    /// Runs the whole batch, reading the confirmation from `input` and writing
    /// operator-facing progress to `output`.
    ///
    /// Per-candidate failures are counted, never returned. Errors only come from
    /// enumeration, the console streams, or creating the run's temporary directory.
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        input: R,
        mut output: W,
    ) -> Result<RunReport, ReencodeError> {
        let candidates = discovery::find_candidates(&self.options.root, self.options.recursive)?;

        if candidates.is_empty() {
            writeln!(
                output,
                "No .{} files found in {}",
                EXTENSION,
                self.options.root.display()
            )?;
            return Ok(RunReport::NoCandidates);
        }

        writeln!(
            output,
            "Found {} .{} file(s) to process",
            candidates.len(),
            EXTENSION
        )?;

        if !self.options.assume_yes && !prompt::confirm(input, &mut output, candidates.len())? {
            writeln!(output, "Cancelled.")?;
            return Ok(RunReport::Cancelled {
                candidates: candidates.len(),
            });
        }

        let run_dir = self.create_run_dir()?;
        log::debug!("Using temporary directory {}", run_dir.path().display());

        writeln!(output, "{}", RULE)?;
        let mut summary = RunSummary {
            total: candidates.len(),
            ..RunSummary::default()
        };

        for (index, candidate) in candidates.iter().enumerate() {
            writeln!(
                output,
                "[{}/{}] {}",
                index + 1,
                candidates.len(),
                candidate.display
            )?;

            let outcome = self.process_candidate(candidate, run_dir.path());
            match &outcome {
                CandidateOutcome::Reencoded { .. } => writeln!(output, "  [OK] Re-encoded")?,
                CandidateOutcome::Failed { stage, reason } => {
                    log::info!("{} failed for {}: {}", stage, candidate.path.display(), reason);
                    writeln!(output, "  [ERROR] {} failed: {}", stage, reason)?
                }
            }
            summary.record(&outcome);
        }

        release(run_dir);
        self.write_summary(&mut output, &summary)?;
        log::info!(
            "Run finished: {} re-encoded, {} failed",
            summary.succeeded,
            summary.failed
        );

        Ok(RunReport::Completed(summary))
    }

    /// Re-encodes one candidate inside its own scratch directory under `scratch_parent`.
    ///
    /// The scratch directory and both intermediate files are removed before this
    /// returns, whatever the outcome.
    pub fn process_candidate(
        &mut self,
        candidate: &Candidate,
        scratch_parent: &Path,
    ) -> CandidateOutcome {
        let scratch = match tempfile::Builder::new()
            .prefix("candidate-")
            .tempdir_in(scratch_parent)
        {
            Ok(dir) => dir,
            Err(err) => {
                return CandidateOutcome::Failed {
                    stage: Stage::Setup,
                    reason: format!("could not create scratch directory: {}", err),
                }
            }
        };

        let outcome = self.reencode_in(candidate, scratch.path());
        release(scratch);
        outcome
    }

    fn reencode_in(&mut self, candidate: &Candidate, scratch: &Path) -> CandidateOutcome {
        let decoded = scratch.join(DECODED_NAME);
        let encoded = scratch.join(ENCODED_NAME);

        let decode = self.transcoder.decode(&candidate.path, &decoded);
        if let Err(reason) = check_stage(decode, &decoded) {
            return CandidateOutcome::Failed {
                stage: Stage::Decode,
                reason,
            };
        }
        audio::log_decoded(&decoded);

        let encode = self.transcoder.encode(&decoded, &encoded);
        if let Err(reason) = check_stage(encode, &encoded) {
            return CandidateOutcome::Failed {
                stage: Stage::Encode,
                reason,
            };
        }

        let backup_created = match backup::ensure_backup(&candidate.path) {
            Ok(created) => created,
            Err(err) => {
                return CandidateOutcome::Failed {
                    stage: Stage::Backup,
                    reason: err.to_string(),
                }
            }
        };

        if let Err(err) = backup::replace_original(&encoded, &candidate.path) {
            return CandidateOutcome::Failed {
                stage: Stage::Replace,
                reason: err.to_string(),
            };
        }

        CandidateOutcome::Reencoded { backup_created }
    }

    fn create_run_dir(&self) -> io::Result<TempDir> {
        let mut builder = tempfile::Builder::new();
        builder.prefix(RUN_DIR_PREFIX);
        match &self.options.temp_root {
            Some(root) => builder.tempdir_in(root),
            None => builder.tempdir(),
        }
    }

    fn write_summary<W: Write>(&self, output: &mut W, summary: &RunSummary) -> io::Result<()> {
        writeln!(output, "{}", RULE)?;
        writeln!(
            output,
            "Done! Re-encoded: {}, Failed: {}",
            summary.succeeded, summary.failed
        )?;

        if summary.succeeded > 0 {
            let pattern = format!("*.{}{}", EXTENSION, BACKUP_SUFFIX);
            let depth = if self.options.recursive {
                ""
            } else {
                " -maxdepth 1"
            };
            writeln!(output)?;
            writeln!(output, "Backups saved as {} files", pattern)?;
            writeln!(
                output,
                "Once everything works, remove them with: find \"{}\"{} -iname '{}' -delete",
                self.options.root.display(),
                depth,
                pattern
            )?;
        }
        Ok(())
    }
}

/// A stage passed if the tool exited successfully and left a non-empty artifact.
fn check_stage(result: Result<ToolRun, ReencodeError>, artifact: &Path) -> Result<(), String> {
    let run = result.map_err(|err| describe(&err))?;

    if !run.success {
        return Err(match run.code {
            Some(code) => format!("exited with status {}", code),
            None => "terminated by signal".to_string(),
        });
    }

    match fs::metadata(artifact) {
        Ok(meta) if meta.len() > 0 => Ok(()),
        Ok(_) => Err("produced an empty file".to_string()),
        Err(_) => Err("produced no output file".to_string()),
    }
}

fn describe(err: &ReencodeError) -> String {
    match err.source() {
        Some(source) => format!("{}: {}", err, source),
        None => err.to_string(),
    }
}

// Cleanup is best-effort: failures are logged and never counted.
fn release(dir: TempDir) {
    let path = dir.path().to_path_buf();
    if let Err(err) = dir.close() {
        log::debug!("Could not remove {}: {}", path.display(), err);
    }
}
