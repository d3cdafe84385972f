use crate::error::{CoreError, CoreResult};
use sha2::{Digest, Sha256};
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;
use zip::write::{FileOptions, ZipWriter};
use zip::CompressionMethod;

// Deterministic OOXML container:
// - entries sorted lexicographically by part name
// - fixed timestamps (DOS epoch equivalent)
// - fixed compression method/level
// - fixed permissions
// - empty zip comment
// Identical parts therefore produce byte-identical packages.
pub fn write_docx_package(out_path: &Path, parts: &[(String, String)]) -> CoreResult<String> {
    let mut entries: Vec<&(String, String)> = parts.iter().collect();
    entries.sort_by(|a, b| a.0.cmp(&b.0));

    let f = File::create(out_path)?;
    let mut zw = ZipWriter::new(f);

    // DOS epoch (zip format): earliest representable time is 1980-01-01.
    let fixed_time = zip::DateTime::from_date_and_time(1980, 1, 1, 0, 0, 0)
        .map_err(|_| CoreError::Zip("failed to create fixed zip datetime".to_string()))?;

    let opts = FileOptions::<()>::default()
        .compression_method(CompressionMethod::Deflated)
        .compression_level(Some(9))
        .last_modified_time(fixed_time)
        .unix_permissions(0o644);

    for (name, content) in entries {
        zw.start_file(name.as_str(), opts)
            .map_err(|e| CoreError::Zip(e.to_string()))?;
        zw.write_all(content.as_bytes())?;
    }

    zw.set_comment("");
    zw.finish().map_err(|e| CoreError::Zip(e.to_string()))?;

    // Digest of the written package, reported in the run log.
    let mut zf = File::open(out_path)?;
    let mut h = Sha256::new();
    let mut buf = [0u8; 8192];
    loop {
        let n = zf.read(&mut buf)?;
        if n == 0 {
            break;
        }
        h.update(&buf[..n]);
    }
    Ok(hex::encode(h.finalize()))
}
