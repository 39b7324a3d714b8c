//! Inspection of the intermediate WAV produced by the decode step.
//!
//! The re-encoder never reads or rewrites audio samples itself. This module only
//! reads the header of the decoded artifact so that a run can log what the
//! decoder actually produced.

use std::path::Path;

/// Header facts about a decoded WAV file.
#[derive(Debug, Clone, PartialEq)]
pub struct WavInfo {
    pub sample_rate: u32,
    pub channels: u16,
    pub bits_per_sample: u16,
    pub duration_secs: f64,
}

/// Read the header of a WAV file.
///
/// # Arguments
///
/// * `wav_path` - Path to the WAV file to inspect
///
/// # Returns
///
/// The sample rate, channel count, bit depth and duration of the file. The
/// duration is derived from the frame count in the header, no samples are decoded.
///
/// # Errors
///
/// This function will return an error if:
/// - The file cannot be opened or read
/// - The file is not a RIFF/WAVE file hound understands
///
/// # Examples
///
/// ```rust,no_run
/// use ogg_reencode::audio::inspect_wav;
/// use std::path::Path;
///
/// let info = inspect_wav(Path::new("decoded.wav"))?;
/// println!("{} Hz, {} channel(s), {:.2}s", info.sample_rate, info.channels, info.duration_secs);
/// # Ok::<(), hound::Error>(())
/// ```
pub fn inspect_wav(wav_path: &Path) -> Result<WavInfo, hound::Error> {
    let reader = hound::WavReader::open(wav_path)?;
    let spec = reader.spec();

    let duration_secs = if spec.sample_rate == 0 {
        0.0
    } else {
        reader.duration() as f64 / spec.sample_rate as f64
    };

    Ok(WavInfo {
        sample_rate: spec.sample_rate,
        channels: spec.channels,
        bits_per_sample: spec.bits_per_sample,
        duration_secs,
    })
}

/// Logs the decoded artifact's header at debug level. Never fails.
pub fn log_decoded(wav_path: &Path) {
    if !log::log_enabled!(log::Level::Debug) {
        return;
    }

    match inspect_wav(wav_path) {
        Ok(info) => log::debug!(
            "Decoded {}: {} Hz, {} channel(s), {}-bit, {:.2}s",
            wav_path.display(),
            info.sample_rate,
            info.channels,
            info.bits_per_sample,
            info.duration_secs
        ),
        Err(err) => log::debug!(
            "Could not read WAV header of {}: {}",
            wav_path.display(),
            err
        ),
    }
}
