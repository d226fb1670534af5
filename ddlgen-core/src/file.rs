use std::{
    fs::OpenOptions,
    io::{self, Write},
    path::Path,
};

/// Create the parent directory tree of every given path.
///
/// Already-existing directories are a no-op. Paths without a parent
/// component (bare file names) are skipped.
pub fn ensure_parent_dirs<'a>(paths: impl IntoIterator<Item = &'a Path>) -> io::Result<()> {
    for path in paths {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

/// Write generated script content to a file, replacing any prior content.
pub fn write_script(path: &Path, content: &str) -> io::Result<()> {
    std::fs::write(path, content)
}

/// Append a block of text to an existing script file.
///
/// The file is created if it does not exist yet, so appending to a script
/// whose generation step produced no file still succeeds.
pub fn append_block(path: &Path, block: &str) -> io::Result<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    file.write_all(block.as_bytes())
}
