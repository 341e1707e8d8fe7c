//! Widget identities, values and rendered control states.

use crate::error::ShowcaseError;
use chrono::NaiveDate;
use std::fs;
use std::path::Path;

/// Stable identity of every stateful primitive on the page.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, strum::Display)]
pub enum WidgetId {
    ClickMe,
    Agree,
    Choice,
    Item,
    Items,
    Value,
    Name,
    Number,
    Date,
    Upload,
    Tabs,
    Expander,
    DataGrid,
    Celebrate,
}

/// A value held in the session widget store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WidgetValue {
    Bool(bool),
    Index(usize),
    Indices(Vec<usize>),
    Number(i64),
    Text(String),
    Date(NaiveDate),
    File(Option<UploadedFile>),
}

/// Handle to a file picked in the uploader. Contents are never read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedFile {
    pub name: String,
    pub size_bytes: u64,
}

impl UploadedFile {
    /// Build a handle from a path on disk, keeping only its name and size.
    pub fn from_path(path: &Path) -> Result<Self, ShowcaseError> {
        let metadata = fs::metadata(path).map_err(|source| ShowcaseError::Upload {
            path: path.to_path_buf(),
            source,
        })?;
        if !metadata.is_file() {
            return Err(ShowcaseError::Upload {
                path: path.to_path_buf(),
                source: std::io::Error::new(std::io::ErrorKind::InvalidInput, "not a file"),
            });
        }
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Ok(Self {
            name,
            size_bytes: metadata.len(),
        })
    }
}

/// An interactive primitive as it appears in one render pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Control {
    pub id: WidgetId,
    pub label: String,
    pub state: ControlState,
}

/// Domain and current value of a rendered control.
#[derive(Debug, Clone, PartialEq)]
pub enum ControlState {
    Button,
    Checkbox(bool),
    Radio {
        options: Vec<String>,
        selected: usize,
    },
    Selectbox {
        options: Vec<String>,
        selected: usize,
    },
    Multiselect {
        options: Vec<String>,
        selected: Vec<usize>,
        cursor: usize,
    },
    Slider {
        min: i64,
        max: i64,
        value: i64,
    },
    TextInput(String),
    NumberInput {
        min: i64,
        max: i64,
        value: i64,
    },
    DateInput(NaiveDate),
    FileUploader(Option<UploadedFile>),
}

impl ControlState {
    /// Whether typed characters should go to this control.
    pub fn accepts_text(&self) -> bool {
        matches!(self, ControlState::TextInput(_))
    }
}

/// Format a list of strings the way the echo text shows it: `['a', 'b']`.
pub fn format_list<S: AsRef<str>>(items: &[S]) -> String {
    let quoted: Vec<String> = items
        .iter()
        .map(|item| format!("'{}'", item.as_ref()))
        .collect();
    format!("[{}]", quoted.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn test_format_list() {
        assert_eq!(format_list::<&str>(&[]), "[]");
        assert_eq!(format_list(&["Item 1", "Item 3"]), "['Item 1', 'Item 3']");
    }

    #[test]
    fn test_uploaded_file_keeps_name_and_size() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("report.csv");
        let mut file = fs::File::create(&path).unwrap();
        write!(file, "a,b\n1,2\n").unwrap();

        let uploaded = UploadedFile::from_path(&path).unwrap();
        assert_eq!(uploaded.name, "report.csv");
        assert_eq!(uploaded.size_bytes, 8);
    }

    #[test]
    fn test_upload_of_missing_file_fails() {
        let dir = tempdir().unwrap();
        let result = UploadedFile::from_path(&dir.path().join("missing.txt"));
        assert!(matches!(result, Err(ShowcaseError::Upload { .. })));
    }

    #[test]
    fn test_upload_of_directory_fails() {
        let dir = tempdir().unwrap();
        assert!(UploadedFile::from_path(dir.path()).is_err());
    }
}
