//! File and hex helpers.

use anyhow::Context;
use std::fs;
use std::path::Path;
use zeroize::Zeroizing;

/// Read a whole file.
pub fn read_file(path: &Path) -> anyhow::Result<Vec<u8>> {
    fs::read(path).with_context(|| format!("failed to read {}", path.display()))
}

/// Write `data`, replacing any existing file.
pub fn write_file(path: &Path, data: &[u8]) -> anyhow::Result<()> {
    fs::write(path, data).with_context(|| format!("failed to write {}", path.display()))
}

/// Read a file of hex text. Surrounding whitespace is ignored.
pub fn read_hex_file(path: &Path) -> anyhow::Result<Zeroizing<Vec<u8>>> {
    let text = Zeroizing::new(read_file(path)?);
    let text = std::str::from_utf8(&text)
        .with_context(|| format!("{} is not valid hex text", path.display()))?;
    let bytes = hex::decode(text.trim())
        .with_context(|| format!("{} is not valid hex text", path.display()))?;
    Ok(Zeroizing::new(bytes))
}

/// Write `data` as lowercase hex.
pub fn write_hex_file(path: &Path, data: &[u8]) -> anyhow::Result<()> {
    let text = Zeroizing::new(hex::encode(data));
    write_file(path, text.as_bytes())
}

/// Decode an optional hex command-line value.
pub fn decode_hex_arg(name: &str, value: Option<&str>) -> anyhow::Result<Option<Vec<u8>>> {
    value
        .map(|v| hex::decode(v).with_context(|| format!("--{} must be hex", name)))
        .transpose()
}
