use std::borrow::Cow;
use std::fs::File;
use std::path::Path;

use bstr::ByteSlice;
use log::debug;
use memmap::Mmap;

use crate::parser::GraphResult;

/// A whole input file, memory-mapped. Empty files are not mapped
/// and read as empty input.
pub struct MappedInput {
    mmap: Option<Mmap>,
}

impl MappedInput {
    pub fn open<P: AsRef<Path>>(path: P) -> GraphResult<Self> {
        let file = File::open(path.as_ref())?;
        let len = file.metadata()?.len();
        debug!("Mapping {} ({} bytes)", path.as_ref().display(), len);

        let mmap = if len == 0 {
            None
        } else {
            Some(unsafe { Mmap::map(&file)? })
        };
        Ok(Self { mmap })
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.mmap.as_ref().map_or(&[][..], |m| &m[..])
    }

    pub fn is_empty(&self) -> bool {
        self.as_bytes().is_empty()
    }

    /// The file contents as text; invalid UTF-8 is replaced rather
    /// than rejected, parsers skip whatever lines it lands in.
    pub fn text(&self) -> Cow<'_, str> {
        self.as_bytes().to_str_lossy()
    }

    pub fn lines(&self) -> impl Iterator<Item = &[u8]> + '_ {
        self.as_bytes().lines()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn maps_file_contents() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "S\t1\tACGT\nL\t1\t+\t1\t-\t0M\n").unwrap();
        file.flush().unwrap();

        let input = MappedInput::open(file.path()).unwrap();
        assert!(!input.is_empty());
        assert_eq!(input.lines().count(), 2);
        assert!(input.text().starts_with("S\t1"));
    }

    #[test]
    fn empty_and_missing_files() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let input = MappedInput::open(file.path()).unwrap();
        assert!(input.is_empty());
        assert_eq!(input.text(), "");

        let dir = tempfile::tempdir().unwrap();
        assert!(MappedInput::open(dir.path().join("missing.gfa")).is_err());
    }
}
