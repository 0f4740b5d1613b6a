use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

use crate::error::SoundError;

/// The shuffle sound, embedded as a `data:` URI so the webview can autoplay
/// it without any asset serving.
#[derive(Debug, Clone)]
pub struct ShuffleSound {
    data_uri: String,
}

impl ShuffleSound {
    /// Loads and encodes the sound file.
    ///
    /// # Errors
    ///
    /// Returns `SoundError::Missing` when the file does not exist and
    /// `SoundError::Io` for other read failures.
    pub fn load(path: &Path) -> Result<Self, SoundError> {
        let bytes = fs::read(path).map_err(|err| {
            if err.kind() == ErrorKind::NotFound {
                SoundError::Missing {
                    path: path.to_path_buf(),
                }
            } else {
                SoundError::Io(err)
            }
        })?;

        let mime = match path
            .extension()
            .map(|ext| ext.to_string_lossy().to_ascii_lowercase())
            .as_deref()
        {
            Some("mp3") => "audio/mpeg",
            Some("ogg") => "audio/ogg",
            _ => "audio/wav",
        };

        Ok(Self {
            data_uri: format!("data:{mime};base64,{}", STANDARD.encode(bytes)),
        })
    }

    /// Like `load`, but the sound is decorative: failures are logged as a
    /// warning and the draw proceeds silently.
    #[must_use]
    pub fn load_optional(path: &Path) -> Option<Self> {
        match Self::load(path) {
            Ok(sound) => Some(sound),
            Err(err) => {
                tracing::warn!(path = %path.display(), %err, "shuffle sound unavailable");
                None
            }
        }
    }

    #[must_use]
    pub fn data_uri(&self) -> &str {
        &self.data_uri
    }
}
