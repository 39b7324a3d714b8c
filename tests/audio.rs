use std::error::Error;

use ogg_reencode::audio::inspect_wav;

#[test]
fn inspect_wav_reports_header_and_duration() -> Result<(), Box<dyn Error>> {
    let temp_dir = tempfile::tempdir()?;
    let wav_path = temp_dir.path().join("decoded.wav");

    let spec = hound::WavSpec {
        channels: 2,
        sample_rate: 44_100,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };

    {
        let mut writer = hound::WavWriter::create(&wav_path, spec)?;
        for _ in 0..44_100 {
            writer.write_sample(i16::MAX)?;
            writer.write_sample(i16::MIN)?;
        }
        writer.finalize()?;
    }

    let info = inspect_wav(&wav_path)?;
    assert_eq!(info.sample_rate, 44_100);
    assert_eq!(info.channels, 2);
    assert_eq!(info.bits_per_sample, 16);
    assert!((info.duration_secs - 1.0).abs() < f64::EPSILON);

    Ok(())
}

#[test]
fn inspect_wav_rejects_non_wav_data() -> Result<(), Box<dyn Error>> {
    let temp_dir = tempfile::tempdir()?;
    let path = temp_dir.path().join("not-a.wav");
    std::fs::write(&path, b"OggS this is not a riff header")?;

    assert!(inspect_wav(&path).is_err());
    Ok(())
}
