use std::fs;
use std::path::Path;

use super::AssetError;

/// A block of text art, one entry per terminal row
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Artwork {
    lines: Vec<String>,
}

impl Artwork {
    pub fn load(path: &Path) -> Result<Self, AssetError> {
        let text = fs::read_to_string(path).map_err(|source| AssetError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::from_text(&text))
    }

    pub fn from_text(text: &str) -> Self {
        Self {
            lines: text.lines().map(|line| line.trim_end().to_string()).collect(),
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn width(&self) -> usize {
        self.lines
            .iter()
            .map(|line| line.chars().count())
            .max()
            .unwrap_or(0)
    }

    pub fn height(&self) -> usize {
        self.lines.len()
    }

    /// Characters at a given row and column span, padded with spaces
    pub fn slice(&self, row: usize, column: usize, len: usize) -> String {
        let line = self.lines.get(row).map(String::as_str).unwrap_or("");
        let mut text: String = line.chars().skip(column).take(len).collect();
        let missing = len - text.chars().count();
        text.extend(std::iter::repeat(' ').take(missing));
        text
    }
}
