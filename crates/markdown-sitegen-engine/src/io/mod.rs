use relative_path::{RelativePath, RelativePathBuf};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid directory: {0}")]
    InvalidDirectory(String),
    #[error("Path {0} is not inside {1}")]
    OutsideRoot(PathBuf, PathBuf),
}

/// Reads the file at `relative_path` below `root`; a missing file is `NotFound`.
pub fn read_file(relative_path: &RelativePath, root: &Path) -> Result<String, IoError> {
    let absolute_path = relative_path.to_path(root);
    if !absolute_path.exists() {
        return Err(IoError::NotFound(absolute_path));
    }
    fs::read_to_string(&absolute_path).map_err(IoError::Io)
}

/// Write content to a file below `root`, creating parent directories
pub fn write_file(relative_path: &RelativePath, root: &Path, content: &str) -> Result<(), IoError> {
    let absolute_path = relative_path.to_path(root);
    if let Some(parent) = absolute_path.parent() {
        fs::create_dir_all(parent).map_err(IoError::Io)?;
    }

    fs::write(&absolute_path, content).map_err(IoError::Io)
}

/// Path of `path` relative to `root`, using forward slashes on every platform.
pub fn relative_to(path: &Path, root: &Path) -> Result<RelativePathBuf, IoError> {
    path.strip_prefix(root)
        .ok()
        .and_then(|p| RelativePathBuf::from_path(p).ok())
        .ok_or_else(|| IoError::OutsideRoot(path.to_path_buf(), root.to_path_buf()))
}

/// Scan for markdown files below `root`, sorted
pub fn scan_markdown_files(root: &Path) -> Result<Vec<PathBuf>, IoError> {
    validate_dir(root)?;

    let mut files = Vec::new();
    scan_directory_recursive(root, &mut files)?;
    files.sort();
    Ok(files)
}

fn scan_directory_recursive(dir: &Path, files: &mut Vec<PathBuf>) -> Result<(), IoError> {
    let entries = fs::read_dir(dir).map_err(IoError::Io)?;

    for entry in entries {
        let entry = entry.map_err(IoError::Io)?;
        let path = entry.path();

        if path.is_dir() {
            scan_directory_recursive(&path, files)?;
        } else if let Some(ext) = path.extension()
            && ext == "md"
        {
            files.push(path);
        }
    }

    Ok(())
}

/// Replace `dest` with a copy of the `src` directory tree.
///
/// Returns the number of files copied. `dest` may not be `src`, one of its
/// ancestors or a directory inside it.
pub fn copy_dir_recursive(src: &Path, dest: &Path) -> Result<usize, IoError> {
    validate_dir(src)?;

    let src_abs = absolute(src)?;
    let dest_abs = absolute(dest)?;
    if src_abs.starts_with(&dest_abs) || dest_abs.starts_with(&src_abs) {
        return Err(IoError::InvalidDirectory(format!(
            "cannot copy {} into overlapping {}",
            src.display(),
            dest.display()
        )));
    }

    if dest.exists() {
        log::debug!("Removing existing {}", dest.display());
        fs::remove_dir_all(dest).map_err(IoError::Io)?;
    }

    copy_directory_contents(src, dest)
}

fn copy_directory_contents(src: &Path, dest: &Path) -> Result<usize, IoError> {
    fs::create_dir_all(dest).map_err(IoError::Io)?;

    let mut copied = 0;
    for entry in fs::read_dir(src).map_err(IoError::Io)? {
        let entry = entry.map_err(IoError::Io)?;
        let from = entry.path();
        let to = dest.join(entry.file_name());

        if from.is_dir() {
            copied += copy_directory_contents(&from, &to)?;
        } else {
            log::debug!("Copying {} -> {}", from.display(), to.display());
            fs::copy(&from, &to).map_err(IoError::Io)?;
            copied += 1;
        }
    }

    Ok(copied)
}

// Canonical form of a path whose last component may not exist yet
fn absolute(path: &Path) -> Result<PathBuf, IoError> {
    if path.exists() {
        return path.canonicalize().map_err(IoError::Io);
    }
    match (path.parent(), path.file_name()) {
        (Some(parent), Some(name)) if !parent.as_os_str().is_empty() => {
            Ok(absolute(parent)?.join(name))
        }
        _ => std::path::absolute(path).map_err(IoError::Io),
    }
}

pub fn validate_dir(path: &Path) -> Result<(), IoError> {
    if !path.exists() || !path.is_dir() {
        return Err(IoError::InvalidDirectory(format!(
            "{} does not exist or is not a directory",
            path.display()
        )));
    }

    Ok(())
}
