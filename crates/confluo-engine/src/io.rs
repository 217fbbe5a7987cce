use relative_path::RelativePath;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid wiki directory: {0}")]
    InvalidWikiDir(String),
}

/// File extension of wiki source pages.
pub const WIKI_EXTENSION: &str = "wiki";

/// Read a wiki page and return its content
pub fn read_file(relative_path: &RelativePath, wiki_root: &Path) -> Result<String, IoError> {
    let absolute_path = relative_path.to_path(wiki_root);
    if !absolute_path.exists() {
        return Err(IoError::NotFound(absolute_path));
    }
    fs::read_to_string(&absolute_path).map_err(IoError::Io)
}

/// Write rendered output next to the sources, creating parent directories
/// as needed
pub fn write_file(
    relative_path: &RelativePath,
    wiki_root: &Path,
    content: &str,
) -> Result<(), IoError> {
    let absolute_path = relative_path.to_path(wiki_root);

    if let Some(parent) = absolute_path.parent() {
        fs::create_dir_all(parent).map_err(IoError::Io)?;
    }

    fs::write(&absolute_path, content).map_err(IoError::Io)
}

/// Scan for wiki pages under the root, sorted for stable conversion order
pub fn scan_wiki_files(wiki_root: &Path) -> Result<Vec<PathBuf>, IoError> {
    if !wiki_root.exists() {
        return Err(IoError::InvalidWikiDir("wiki directory not found".to_string()));
    }

    let mut files = Vec::new();
    scan_directory_recursive(wiki_root, &mut files)?;
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
            && ext == WIKI_EXTENSION
        {
            files.push(path);
        }
    }

    Ok(())
}

pub fn validate_wiki_dir(path: &Path) -> Result<(), IoError> {
    if !path.exists() || !path.is_dir() {
        return Err(IoError::InvalidWikiDir(
            "Directory does not exist".to_string(),
        ));
    }

    Ok(())
}
