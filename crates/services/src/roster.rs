use std::fs;
use std::path::Path;

use binome_core::model::Participant;

use crate::error::RosterError;

/// Enumerates participants from a folder of portrait images.
///
/// Non-image entries are skipped. The result is sorted by file name so
/// startup is deterministic regardless of directory iteration order.
///
/// # Errors
///
/// Returns `RosterError::MissingFolder` when the folder does not exist and
/// `RosterError::Io` when it cannot be read.
pub fn load_roster(dir: &Path) -> Result<Vec<Participant>, RosterError> {
    if !dir.is_dir() {
        return Err(RosterError::MissingFolder {
            path: dir.to_path_buf(),
        });
    }

    let mut participants = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        if let Ok(participant) = Participant::from_image_path(path) {
            participants.push(participant);
        }
    }

    participants.sort_by(|a, b| a.file_name().cmp(b.file_name()));
    Ok(participants)
}
