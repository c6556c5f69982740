use crate::error::MarkdownError;
use crate::models::PageSource;
use crate::render::render_page;
use crate::template::Template;
use relative_path::RelativePathBuf;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid directory: {0}")]
    InvalidDirectory(PathBuf),
    #[error("Path is not inside the content directory: {0}")]
    InvalidPath(PathBuf),
    #[error("Failed to convert {path}: {source}")]
    Markdown {
        path: PathBuf,
        source: MarkdownError,
    },
}

/// Scan for markdown files under a directory, sorted by path
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
        } else if PageSource::is_markdown(&path) {
            files.push(path);
        }
    }

    Ok(())
}

pub fn validate_dir(path: &Path) -> Result<(), IoError> {
    if !path.is_dir() {
        return Err(IoError::InvalidDirectory(path.to_path_buf()));
    }

    Ok(())
}

/// Recursively copy every file under `source` into `dest`, creating
/// directories as needed. Returns the number of files copied.
pub fn copy_dir_recursive(source: &Path, dest: &Path) -> Result<usize, IoError> {
    validate_dir(source)?;
    fs::create_dir_all(dest)?;

    let mut entries = fs::read_dir(source)?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<Result<Vec<_>, _>>()?;
    entries.sort();

    let mut copied = 0;
    for source_path in entries {
        let Some(name) = source_path.file_name() else {
            continue;
        };
        let dest_path = dest.join(name);
        if source_path.is_file() {
            log::debug!(
                "Copy {} to {}",
                source_path.display(),
                dest_path.display()
            );
            fs::copy(&source_path, &dest_path)?;
            copied += 1;
        } else {
            copied += copy_dir_recursive(&source_path, &dest_path)?;
        }
    }

    Ok(copied)
}

/// Convert one Markdown file through a template and write the page to `dest`.
pub fn generate_page(from: &Path, template_path: &Path, dest: &Path) -> Result<(), IoError> {
    for input in [from, template_path] {
        if !input.is_file() {
            return Err(IoError::NotFound(input.to_path_buf()));
        }
    }

    log::info!(
        "Generate page from {} to {} using {}",
        from.display(),
        dest.display(),
        template_path.display()
    );

    let markdown = fs::read_to_string(from)?;
    let template = Template::new(fs::read_to_string(template_path)?);
    let page = render_page(&markdown, &template).map_err(|source| IoError::Markdown {
        path: from.to_path_buf(),
        source,
    })?;

    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(dest, page)?;
    Ok(())
}

/// Generate a page for every `.md` file under `content_dir`, mirroring the
/// directory structure under `dest_dir` with `.html` extensions.
///
/// Stops at the first failing page.
pub fn generate_pages_recursive(
    content_dir: &Path,
    template_path: &Path,
    dest_dir: &Path,
) -> Result<Vec<PageSource>, IoError> {
    let files = scan_markdown_files(content_dir)?;
    if files.is_empty() {
        log::warn!("No markdown files found in {}", content_dir.display());
    }

    let mut pages = Vec::with_capacity(files.len());
    for file in files {
        let relative = file
            .strip_prefix(content_dir)
            .ok()
            .and_then(|rel| RelativePathBuf::from_path(rel).ok())
            .ok_or_else(|| IoError::InvalidPath(file.clone()))?;
        let page = PageSource::new(relative);

        generate_page(
            &page.relative_path().to_path(content_dir),
            template_path,
            &page.output_path().to_path(dest_dir),
        )?;
        pages.push(page);
    }

    Ok(pages)
}
