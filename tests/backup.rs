use std::error::Error;
use std::fs;

use ogg_reencode::backup::{backup_path, ensure_backup, replace_original};

#[test]
fn backup_path_sits_next_to_the_original() {
    let original = std::path::Path::new("music/ambient/wind.ogg");
    assert_eq!(
        backup_path(original),
        std::path::Path::new("music/ambient/wind.ogg.bak")
    );
}

#[test]
fn existing_backup_is_never_overwritten() -> Result<(), Box<dyn Error>> {
    let temp_dir = tempfile::tempdir()?;
    let original = temp_dir.path().join("wind.ogg");
    fs::write(&original, b"first original")?;

    assert!(ensure_backup(&original)?);
    fs::write(&original, b"already re-encoded")?;
    assert!(!ensure_backup(&original)?);

    assert_eq!(fs::read(backup_path(&original))?, b"first original");
    Ok(())
}

#[test]
fn replace_original_copies_encoded_bytes() -> Result<(), Box<dyn Error>> {
    let temp_dir = tempfile::tempdir()?;
    let original = temp_dir.path().join("wind.ogg");
    let encoded = temp_dir.path().join("encoded.ogg");
    fs::write(&original, b"old")?;
    fs::write(&encoded, b"new")?;

    replace_original(&encoded, &original)?;

    assert_eq!(fs::read(&original)?, b"new");
    assert!(encoded.exists());
    Ok(())
}
