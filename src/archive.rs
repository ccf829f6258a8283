//! In-memory zip assembly for the archive export.

use crate::error::Result;
use std::collections::HashSet;
use std::io::{Cursor, Write};
use std::sync::Arc;
use zip::write::FileOptions;

/// Packs `(entry name, content)` pairs into a single zip payload.
///
/// Duplicate entry names are disambiguated with `-2`, `-3`, … stem
/// suffixes so no entry silently overwrites another.
pub fn pack(entries: &[(String, Arc<Vec<u8>>)]) -> Result<Vec<u8>> {
    let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
    let options = FileOptions::default().compression_method(zip::CompressionMethod::Deflated);
    let mut names = HashSet::<String>::new();

    for (name, bytes) in entries {
        let entry_name = unique_entry_name(name, &mut names);
        writer.start_file(entry_name, options)?;
        writer
            .write_all(bytes)
            .map_err(|e| crate::error::AppError::ArchiveExport(e.to_string()))?;
    }

    let cursor = writer.finish()?;
    Ok(cursor.into_inner())
}

fn unique_entry_name(wanted: &str, names: &mut HashSet<String>) -> String {
    if names.insert(wanted.to_string()) {
        return wanted.to_string();
    }

    let (stem, ext) = match wanted.rfind('.') {
        Some(dot) if dot > 0 => (&wanted[..dot], Some(&wanted[dot + 1..])),
        _ => (wanted, None),
    };

    let mut idx = 2usize;
    loop {
        let candidate = match ext {
            Some(ext) if !ext.is_empty() => format!("{}-{}.{}", stem, idx, ext),
            _ => format!("{}-{}", stem, idx),
        };
        if names.insert(candidate.clone()) {
            return candidate;
        }
        idx += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;

    fn entry(name: &str, content: &[u8]) -> (String, Arc<Vec<u8>>) {
        (name.to_string(), Arc::new(content.to_vec()))
    }

    fn entry_names_and_contents(payload: Vec<u8>) -> Vec<(String, Vec<u8>)> {
        let mut archive = zip::ZipArchive::new(Cursor::new(payload)).unwrap();
        (0..archive.len())
            .map(|i| {
                let mut file = archive.by_index(i).unwrap();
                let mut content = Vec::new();
                file.read_to_end(&mut content).unwrap();
                (file.name().to_string(), content)
            })
            .collect()
    }

    #[test]
    fn pack_round_trips_entries_under_their_original_names() {
        let payload = pack(&[entry("a.jpg", b"alpha"), entry("c.png", b"gamma")]).unwrap();

        let entries = entry_names_and_contents(payload);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0], ("a.jpg".to_string(), b"alpha".to_vec()));
        assert_eq!(entries[1], ("c.png".to_string(), b"gamma".to_vec()));
    }

    #[test]
    fn duplicate_entry_names_are_uniquified() {
        let payload = pack(&[
            entry("dup.jpg", b"one"),
            entry("dup.jpg", b"two"),
            entry("dup.jpg", b"three"),
        ])
        .unwrap();

        let names: Vec<String> = entry_names_and_contents(payload)
            .into_iter()
            .map(|(name, _)| name)
            .collect();
        assert_eq!(names, vec!["dup.jpg", "dup-2.jpg", "dup-3.jpg"]);
    }

    #[test]
    fn extensionless_duplicates_get_plain_suffixes() {
        let payload = pack(&[entry("raw", b"one"), entry("raw", b"two")]).unwrap();

        let names: Vec<String> = entry_names_and_contents(payload)
            .into_iter()
            .map(|(name, _)| name)
            .collect();
        assert_eq!(names, vec!["raw", "raw-2"]);
    }

    #[test]
    fn packing_no_entries_yields_an_empty_archive() {
        let payload = pack(&[]).unwrap();
        assert!(entry_names_and_contents(payload).is_empty());
    }
}
