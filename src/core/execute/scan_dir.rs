use crate::error::PathError;
use crate::fs::{AbsPath, Directory, PathSuffix};
use error_stack::{Result, ResultExt};

/// List the direct entries of `dir`, partitioned into files whose suffix
/// is in `extensions` and subdirectories. Entries that are neither (or
/// files with a non-matching suffix) are ignored.
pub fn scan_dir(dir: &AbsPath, extensions: &[String]) -> Result<Directory, PathError> {
    let dir_path = dir.as_path_buf();
    let entries = dir_path
        .read_dir()
        .change_context_lazy(|| PathError::from(&dir_path))
        .attach_printable("failed to read directory")?;

    let mut directory = Directory::new();

    for entry in entries {
        let entry = entry
            .change_context_lazy(|| PathError::from(&dir_path))
            .attach_printable("failed to read directory entry")?;
        let path = entry.path();

        if path.is_file() {
            if path.has_suffix_in(extensions) {
                directory.files.push(dir.share_base(path));
            }
        } else if path.is_dir() {
            directory.subdirs.push(dir.share_base(path));
        }
    }

    Ok(directory)
}
