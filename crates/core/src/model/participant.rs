use std::fmt;
use std::hash::{Hash, Hasher};
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Image extensions accepted when enumerating participants.
pub const SUPPORTED_EXTENSIONS: [&str; 3] = ["jpg", "jpeg", "png"];

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParticipantError {
    #[error("file name has no usable stem: {file_name}")]
    MissingStem { file_name: String },

    #[error("unsupported image extension: {file_name}")]
    UnsupportedExtension { file_name: String },
}

/// A person in the pairing pool, backed by a portrait image file.
///
/// Identity is the image file name. The display name is derived from the
/// file stem with underscores replaced by spaces, so `Marie_Curie.png`
/// shows as "Marie Curie".
#[derive(Debug, Clone, Eq)]
pub struct Participant {
    file_name: String,
    display_name: String,
    image_path: PathBuf,
}

impl Participant {
    /// Builds a participant from an image path.
    ///
    /// # Errors
    ///
    /// Returns `ParticipantError::UnsupportedExtension` unless the path ends
    /// in one of `SUPPORTED_EXTENSIONS` (case-insensitive), and
    /// `ParticipantError::MissingStem` when no display name can be derived.
    pub fn from_image_path(path: impl Into<PathBuf>) -> Result<Self, ParticipantError> {
        let image_path = path.into();
        let file_name = image_path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();

        let supported = image_path
            .extension()
            .map(|ext| ext.to_string_lossy().to_ascii_lowercase())
            .is_some_and(|ext| SUPPORTED_EXTENSIONS.contains(&ext.as_str()));
        if !supported {
            return Err(ParticipantError::UnsupportedExtension { file_name });
        }

        let stem = image_path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .filter(|stem| !stem.trim().is_empty())
            .ok_or(ParticipantError::MissingStem {
                file_name: file_name.clone(),
            })?;

        Ok(Self {
            file_name,
            display_name: stem.replace('_', " "),
            image_path,
        })
    }

    #[must_use]
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    #[must_use]
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    #[must_use]
    pub fn image_path(&self) -> &Path {
        &self.image_path
    }
}

impl PartialEq for Participant {
    fn eq(&self, other: &Self) -> bool {
        self.file_name == other.file_name
    }
}

impl Hash for Participant {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.file_name.hash(state);
    }
}

impl fmt::Display for Participant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_name)
    }
}
