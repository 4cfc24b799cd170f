use crate::models::file_status::{EntryKind, FileStatus};
use anyhow::{Context, Result};
use std::fs::File;
use std::os::unix::fs::FileExt;
use std::os::unix::io::AsRawFd;
use std::path::Path;

/// Acquire a read-only handle for the target path.
pub fn open_entry(path: &Path) -> Result<File> {
    log::debug!("opening {}", path.display());
    File::open(path).with_context(|| format!("cannot open '{}'", path.display()))
}

/// Query the metadata record for an open handle.
///
/// The checksum is derived here too: regular files have their content
/// streamed through the same handle; other kinds report 0.
pub fn query_status(file: &File) -> Result<FileStatus> {
    let st = nix::sys::stat::fstat(file.as_raw_fd()).context("cannot query file status")?;
    let kind = EntryKind::from_mode(st.st_mode);
    log::debug!(
        "fstat: mode={:o} dev={} ino={} nlink={} size={}",
        st.st_mode, st.st_dev, st.st_ino, st.st_nlink, st.st_size
    );

    let checksum = if kind == EntryKind::Regular {
        content_checksum(file).context("cannot read content for checksum")?
    } else {
        0
    };

    Ok(FileStatus {
        kind,
        dev:      st.st_dev as u64,
        ino:      st.st_ino as u64,
        nlink:    st.st_nlink as u64,
        size:     st.st_size as u64,
        checksum,
    })
}

/// Wrapping 32-bit sum of every content byte, read at explicit offsets so
/// the handle's cursor is left untouched.
fn content_checksum(file: &File) -> Result<u32> {
    let mut buf = [0u8; 8192];
    let mut sum: u32 = 0;
    let mut off: u64 = 0;
    loop {
        let n = file.read_at(&mut buf, off)?;
        if n == 0 { break; }
        for &b in &buf[..n] {
            sum = sum.wrapping_add(b as u32);
        }
        off += n as u64;
    }
    Ok(sum)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("stat-test-{}-{}", std::process::id(), name))
    }

    #[test]
    fn regular_file_snapshot() {
        let path = temp_path("regular");
        fs::write(&path, b"abc").unwrap();

        let handle = open_entry(&path).unwrap();
        let st = query_status(&handle).unwrap();

        assert_eq!(st.kind, EntryKind::Regular);
        assert_eq!(st.size, 3);
        assert_eq!(st.nlink, 1);
        assert_eq!(st.checksum, (b'a' as u32) + (b'b' as u32) + (b'c' as u32));

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn empty_file_checksum_is_zero() {
        let path = temp_path("empty");
        fs::write(&path, b"").unwrap();

        let handle = open_entry(&path).unwrap();
        let st = query_status(&handle).unwrap();
        assert_eq!(st.size, 0);
        assert_eq!(st.checksum, 0);

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn directory_snapshot_has_no_checksum() {
        let handle = open_entry(&std::env::temp_dir()).unwrap();
        let st = query_status(&handle).unwrap();
        assert_eq!(st.kind, EntryKind::Directory);
        assert_eq!(st.checksum, 0);
        assert!(st.nlink >= 1);
    }

    #[test]
    fn repeated_queries_are_identical() {
        let path = temp_path("stable");
        fs::write(&path, b"same content every time").unwrap();

        let first = query_status(&open_entry(&path).unwrap()).unwrap();
        let second = query_status(&open_entry(&path).unwrap()).unwrap();
        assert_eq!(first, second);

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn missing_path_fails_to_open() {
        let path = temp_path("does-not-exist");
        let err = open_entry(&path).unwrap_err();
        assert!(err.to_string().contains("cannot open"));
    }

    #[test]
    fn checksum_sums_across_buffered_reads() {
        let path = temp_path("wrap");
        // 16 KiB of 0xff exercises the buffered loop across reads.
        fs::write(&path, vec![0xffu8; 16 * 1024]).unwrap();

        let handle = open_entry(&path).unwrap();
        let st = query_status(&handle).unwrap();
        assert_eq!(st.size, 16 * 1024);
        assert_eq!(st.checksum, 0xff * 16 * 1024);

        fs::remove_file(&path).unwrap();
    }
}
