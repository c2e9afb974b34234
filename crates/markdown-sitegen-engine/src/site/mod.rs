//! # Site Generation
//!
//! Renders every Markdown file of a content tree through an HTML template
//! into a mirrored output tree: `content/blog/post.md` becomes
//! `public/blog/post.html`.

use std::path::{Path, PathBuf};

use relative_path::{RelativePath, RelativePathBuf};
use thiserror::Error;

use crate::{
    io::{self, IoError},
    page::{TitleError, extract_title, render_page},
    parsing::{ParseError, markdown_to_html_node},
};

#[derive(Debug, Error)]
pub enum SiteError {
    #[error("Failed to read or write {path}: {source}")]
    Io { path: PathBuf, source: IoError },

    #[error("Failed to parse {path}: {source}")]
    Parse { path: PathBuf, source: ParseError },

    #[error("Failed to render {path}: {source}")]
    Title { path: PathBuf, source: TitleError },
}

/// A page written by [`generate_site`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPage {
    pub source: PathBuf,
    pub output: PathBuf,
    pub title: String,
}

/// Renders `markdown` into `template`, returning the title and the full page.
///
/// `source` is only used to label errors.
pub fn render_markdown_page(
    markdown: &str,
    template: &str,
    source: &Path,
) -> Result<(String, String), SiteError> {
    let root = markdown_to_html_node(markdown).map_err(|e| SiteError::Parse {
        path: source.to_path_buf(),
        source: e,
    })?;
    let title = extract_title(&root).map_err(|e| SiteError::Title {
        path: source.to_path_buf(),
        source: e,
    })?;
    let page = render_page(template, &title, &root.to_html());
    Ok((title, page))
}

/// Generates one page from `source` into `dest` using the template at `template_path`.
pub fn generate_page(
    source: &Path,
    template_path: &Path,
    dest: &Path,
) -> Result<GeneratedPage, SiteError> {
    log::info!(
        "Generating page from {} to {} using {}",
        source.display(),
        dest.display(),
        template_path.display()
    );
    let template = read_template(template_path)?;
    let (content_root, source) = split_root(source)?;
    let (output_root, dest) = split_root(dest)?;
    render_file(&source, content_root, &template, &dest, output_root)
}

/// Generates a page for every Markdown file below `content_root`.
///
/// Pages are written in sorted source order and generation stops at the
/// first failing page.
pub fn generate_site(
    content_root: &Path,
    template_path: &Path,
    output_root: &Path,
) -> Result<Vec<GeneratedPage>, SiteError> {
    let template = read_template(template_path)?;
    let sources = io::scan_markdown_files(content_root).map_err(|source| SiteError::Io {
        path: content_root.to_path_buf(),
        source,
    })?;

    let mut pages = Vec::with_capacity(sources.len());
    for source in sources {
        let relative = relative_to(&source, content_root)?;
        let dest = output_path(&relative);
        log::info!("Generating {relative} -> {dest}");
        pages.push(render_file(
            &relative,
            content_root,
            &template,
            &dest,
            output_root,
        )?);
    }

    log::info!("Generated {} pages into {}", pages.len(), output_root.display());
    Ok(pages)
}

/// Maps a content-relative Markdown path to its `.html` output path.
pub fn output_path(source: &RelativePath) -> RelativePathBuf {
    source.with_extension("html")
}

fn render_file(
    source: &RelativePath,
    content_root: &Path,
    template: &str,
    dest: &RelativePath,
    output_root: &Path,
) -> Result<GeneratedPage, SiteError> {
    let source_path = source.to_path(content_root);
    let markdown = io::read_file(source, content_root).map_err(|e| SiteError::Io {
        path: source_path.clone(),
        source: e,
    })?;
    let (title, page) = render_markdown_page(&markdown, template, &source_path)?;

    let output = dest.to_path(output_root);
    io::write_file(dest, output_root, &page).map_err(|e| SiteError::Io {
        path: output.clone(),
        source: e,
    })?;

    Ok(GeneratedPage {
        source: source_path,
        output,
        title,
    })
}

fn read_template(template_path: &Path) -> Result<String, SiteError> {
    let (root, template) = split_root(template_path)?;
    io::read_file(&template, root).map_err(|e| SiteError::Io {
        path: template_path.to_path_buf(),
        source: e,
    })
}

// Addresses a lone file as its parent directory plus its file name
fn split_root(path: &Path) -> Result<(&Path, RelativePathBuf), SiteError> {
    let root = path.parent().unwrap_or(Path::new(""));
    Ok((root, relative_to(path, root)?))
}

fn relative_to(path: &Path, root: &Path) -> Result<RelativePathBuf, SiteError> {
    io::relative_to(path, root).map_err(|e| SiteError::Io {
        path: path.to_path_buf(),
        source: e,
    })
}

impl SiteError {
    /// The file the error relates to.
    pub fn path(&self) -> &Path {
        match self {
            SiteError::Io { path, .. }
            | SiteError::Parse { path, .. }
            | SiteError::Title { path, .. } => path,
        }
    }
}
