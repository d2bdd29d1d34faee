use crate::normalization::domain::{Ecosystem, RawPackage};
use crate::ports::outbound::{PackageList, PackageListReader};
use crate::shared::error::NormalizerError;
use crate::shared::security::{validate_file_size, validate_regular_file, MAX_FILE_SIZE};
use crate::shared::Result;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Object form: packages under `packages` with an optional ecosystem tag.
#[derive(Debug, Deserialize)]
struct TaggedDocument {
    #[serde(default)]
    ecosystem: Option<Ecosystem>,
    packages: Vec<RawPackage>,
}

/// Top-level shape of a package list document.
///
/// Resolved from the parsed value tree before decoding, so the records are
/// deserialized straight from the source text. Untagged decoding would
/// buffer YAML plain scalars as numbers and turn `version: 0.12` into a
/// type mismatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DocumentShape {
    Bare,
    Tagged,
}

const SHAPE_ERROR: &str = "expected a list of packages or an object with a `packages` field";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum InputFormat {
    Json,
    Yaml,
    Toml,
}

impl InputFormat {
    fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_lowercase();
        match extension.as_str() {
            "json" => Some(InputFormat::Json),
            "yml" | "yaml" => Some(InputFormat::Yaml),
            "toml" => Some(InputFormat::Toml),
            _ => None,
        }
    }
}

/// FileSystemReader adapter for reading package lists from the file system
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }

    /// Safely read a file: no symlinks, regular files only, size-limited
    fn safe_read_file(&self, path: &Path) -> Result<String> {
        validate_regular_file(path, "package list")?;

        let metadata = fs::metadata(path).map_err(|e| NormalizerError::FileReadError {
            path: path.to_path_buf(),
            details: e.to_string(),
        })?;
        validate_file_size(metadata.len(), path, MAX_FILE_SIZE)?;

        fs::read_to_string(path).map_err(|e| {
            NormalizerError::FileReadError {
                path: path.to_path_buf(),
                details: e.to_string(),
            }
            .into()
        })
    }

    fn detect_shape(
        format: InputFormat,
        content: &str,
    ) -> std::result::Result<DocumentShape, String> {
        let shape = match format {
            InputFormat::Json => {
                let value: serde_json::Value =
                    serde_json::from_str(content).map_err(|e| e.to_string())?;
                match value {
                    serde_json::Value::Array(_) => Some(DocumentShape::Bare),
                    serde_json::Value::Object(_) => Some(DocumentShape::Tagged),
                    _ => None,
                }
            }
            InputFormat::Yaml => {
                let value: serde_yaml_ng::Value =
                    serde_yaml_ng::from_str(content).map_err(|e| e.to_string())?;
                match value {
                    serde_yaml_ng::Value::Sequence(_) => Some(DocumentShape::Bare),
                    serde_yaml_ng::Value::Mapping(_) => Some(DocumentShape::Tagged),
                    _ => None,
                }
            }
            // TOML documents are always tables
            InputFormat::Toml => Some(DocumentShape::Tagged),
        };
        shape.ok_or_else(|| SHAPE_ERROR.to_string())
    }

    fn decode<T: DeserializeOwned>(
        format: InputFormat,
        content: &str,
    ) -> std::result::Result<T, String> {
        match format {
            InputFormat::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
            InputFormat::Yaml => serde_yaml_ng::from_str(content).map_err(|e| e.to_string()),
            InputFormat::Toml => toml::from_str(content).map_err(|e| e.to_string()),
        }
    }

    fn parse(path: &Path, format: InputFormat, content: &str) -> Result<PackageList> {
        let parsed = Self::detect_shape(format, content).and_then(|shape| match shape {
            DocumentShape::Bare => Self::decode::<Vec<RawPackage>>(format, content)
                .map(|packages| PackageList::new(None, packages)),
            DocumentShape::Tagged => Self::decode::<TaggedDocument>(format, content)
                .map(|document| PackageList::new(document.ecosystem, document.packages)),
        });

        parsed.map_err(|details| {
            NormalizerError::InputParseError {
                path: path.to_path_buf(),
                details,
            }
            .into()
        })
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl PackageListReader for FileSystemReader {
    fn read_package_list(&self, path: &Path) -> Result<PackageList> {
        if !path.exists() {
            return Err(NormalizerError::InputNotFound {
                path: path.to_path_buf(),
                suggestion: "Check the path passed with --input".to_string(),
            }
            .into());
        }

        let format = InputFormat::from_path(path).ok_or_else(|| {
            NormalizerError::UnsupportedInputFormat {
                path: path.to_path_buf(),
            }
        })?;

        let content = self.safe_read_file(path)?;
        Self::parse(path, format, &content)
    }
}
