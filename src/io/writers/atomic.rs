use std::io::Write;
use std::path::Path;

use tracing::debug;

/// Write `data` to `output`, replacing any existing file only once every byte
/// is on disk. On failure the destination is left untouched.
pub fn write_atomic(output: &Path, data: &[u8]) -> std::io::Result<()> {
    let dir = match output.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut tmp = tempfile::Builder::new()
        .prefix(".barcode-creator-")
        .tempfile_in(dir)?;
    tmp.write_all(data)?;
    tmp.as_file().sync_all()?;
    tmp.persist(output).map_err(|e| e.error)?;
    debug!("Wrote {} bytes to {:?}", data.len(), output);
    Ok(())
}
