use std::{
    fs, io,
    path::{Path, PathBuf},
};

use log::debug;

use crate::{
    document::{self, Stats},
    error::{Error, Result},
};

/// Returns the path if it names an existing regular file, following
/// symlinks.
fn existing_file(path: &Path) -> Result<&Path> {
    match fs::metadata(path) {
        Ok(metadata) if metadata.is_file() => Ok(path),
        _ => Err(Error::NotFound(path.to_path_buf())),
    }
}

pub struct MarkdownFile {
    path: PathBuf,
    pub content: String,
}

impl MarkdownFile {
    pub fn at_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = existing_file(path.as_ref())?.to_path_buf();
        let content = fs::read_to_string(&path).map_err(|source| match source.kind() {
            io::ErrorKind::InvalidData => Error::Encoding { path: path.clone() },
            _ => Error::Read {
                path: path.clone(),
                source,
            },
        })?;
        Ok(Self { path, content })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub fn to_html(&self) -> HtmlFile {
        let (content, stats) = document::convert_with_stats(&self.content);
        HtmlFile { content, stats }
    }
}

pub struct HtmlFile {
    pub content: String,
    pub stats: Stats,
}

impl HtmlFile {
    /// Creates or truncates `path` and writes the whole document at once.
    pub fn write(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        fs::write(path, &self.content).map_err(|source| Error::Write {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Converts the markdown file at `input` and writes the html to `output`.
///
/// The output is only touched once the input has been fully read and
/// converted, so a missing or undecodable input leaves it as it was.
pub fn convert_file(input: impl AsRef<Path>, output: impl AsRef<Path>) -> Result<Stats> {
    let markdown = MarkdownFile::at_path(input)?;
    debug!(
        "Read {} bytes from {}",
        markdown.content.len(),
        markdown.path().display()
    );
    let html = markdown.to_html();
    html.write(output)?;
    Ok(html.stats)
}
