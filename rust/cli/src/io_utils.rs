//! File helpers shared by the commands.
//!
//! Hand histories may be plain `.jsonl` or zstd-compressed `.jsonl.zst`;
//! [`read_text_auto`] picks the right reader from the extension.

use std::io;
use std::path::Path;

// Upper bound for a decompressed history file held in memory.
const MAX_DECOMPRESSED: usize = 64 * 1024 * 1024;

/// Reads a text file, decompressing `.zst` files and dropping a UTF-8 BOM.
pub fn read_text_auto(path: &Path) -> io::Result<String> {
    let mut content = if path.extension().is_some_and(|e| e == "zst") {
        let compressed = std::fs::read(path)?;
        let raw = zstd::bulk::decompress(&compressed, MAX_DECOMPRESSED)?;
        String::from_utf8(raw).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?
    } else {
        std::fs::read_to_string(path)?
    };
    strip_utf8_bom(&mut content);
    Ok(content)
}

/// True for files `stats` should pick up when walking a directory.
pub fn is_history_file(path: &Path) -> bool {
    path.file_name()
        .and_then(|f| f.to_str())
        .is_some_and(|f| f.ends_with(".jsonl") || f.ends_with(".jsonl.zst"))
}

/// Creates the directory that will hold `path` if it is missing.
pub fn ensure_parent_dir(path: &Path) -> io::Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => std::fs::create_dir_all(parent),
        _ => Ok(()),
    }
}

fn strip_utf8_bom(s: &mut String) {
    const UTF8_BOM: &str = "\u{feff}";
    if s.starts_with(UTF8_BOM) {
        s.drain(..UTF8_BOM.len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn bom_is_stripped() {
        let mut s = "\u{feff}{}".to_string();
        strip_utf8_bom(&mut s);
        assert_eq!(s, "{}");
    }

    #[test]
    fn reads_compressed_and_plain_files() {
        let dir = tempdir().unwrap();
        let plain = dir.path().join("a.jsonl");
        std::fs::write(&plain, "{\"x\":1}\n").unwrap();
        let packed = dir.path().join("b.jsonl.zst");
        std::fs::write(&packed, zstd::bulk::compress(b"{\"x\":1}\n", 3).unwrap()).unwrap();

        assert_eq!(read_text_auto(&plain).unwrap(), read_text_auto(&packed).unwrap());
        assert!(is_history_file(&packed));
        assert!(!is_history_file(&dir.path().join("gamelog.txt")));
    }

    #[test]
    fn parent_dir_is_created() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("runs").join("hands.jsonl");
        ensure_parent_dir(&nested).unwrap();
        assert!(dir.path().join("runs").is_dir());
        ensure_parent_dir(Path::new("file.txt")).unwrap();
    }
}
