use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use tempfile::NamedTempFile;

use rental_types::Result;

/// Create the store directory and return the path of `file_name` inside it
pub(crate) fn store_file(store_dir: &Path, file_name: &str) -> Result<PathBuf> {
    fs::create_dir_all(store_dir)?;
    Ok(store_dir.join(file_name))
}

/// Read a JSON document, `None` if the file does not exist yet
pub(crate) fn load<T: DeserializeOwned>(path: &Path) -> Result<Option<T>> {
    if !path.exists() {
        return Ok(None);
    }
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    Ok(Some(serde_json::from_reader(reader)?))
}

/// Write to a temp file next to `path`, then rename over it. A failed save
/// leaves the previous file in place.
pub(crate) fn save<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let mut temp_file = NamedTempFile::new_in(path.parent().unwrap_or_else(|| Path::new(".")))?;
    {
        let mut writer = BufWriter::new(temp_file.as_file_mut());
        serde_json::to_writer_pretty(&mut writer, value)?;
        writer.flush()?;
    }
    temp_file.persist(path).map_err(|e| e.error)?;
    Ok(())
}
