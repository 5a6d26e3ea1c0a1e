//! Conversation summary storage
//!
//! One pretty-printed JSON file per conversation under the data dir, plus
//! first-run seeding so the app opens with something to show.

use std::fs;
use std::path::{Path, PathBuf};

use crate::storage::{get_data_dir, StorageError};
use crate::types::{ConversationKind, ConversationSummary, StoriesState};

fn get_conversations_dir() -> Result<PathBuf, StorageError> {
    Ok(get_data_dir()?.join("conversations"))
}

fn summary_path(dir: &Path, id: &str) -> PathBuf {
    dir.join(format!("{}.json", id))
}

/// Save a summary to disk
pub fn save_summary(summary: &ConversationSummary) -> Result<(), StorageError> {
    save_summary_in(&get_conversations_dir()?, summary)
}

pub(crate) fn save_summary_in(
    dir: &Path,
    summary: &ConversationSummary,
) -> Result<(), StorageError> {
    let json = serde_json::to_string_pretty(summary)?;
    fs::write(summary_path(dir, &summary.id), json)?;
    tracing::debug!("Saved conversation: {}", summary.id);
    Ok(())
}

/// Load a single summary from disk
pub fn load_summary(id: &str) -> Result<ConversationSummary, StorageError> {
    load_summary_in(&get_conversations_dir()?, id)
}

pub(crate) fn load_summary_in(dir: &Path, id: &str) -> Result<ConversationSummary, StorageError> {
    let path = summary_path(dir, id);

    if !path.exists() {
        return Err(StorageError::ConversationNotFound(id.to_string()));
    }

    let json = fs::read_to_string(&path)?;
    let summary: ConversationSummary = serde_json::from_str(&json)?;
    tracing::debug!("Loaded conversation: {}", id);
    Ok(summary)
}

/// List all summaries, official chat first, then the self-chat, then the
/// rest by display name
pub fn list_summaries() -> Result<Vec<ConversationSummary>, StorageError> {
    list_summaries_in(&get_conversations_dir()?)
}

pub(crate) fn list_summaries_in(dir: &Path) -> Result<Vec<ConversationSummary>, StorageError> {
    if !dir.exists() {
        return Ok(vec![]);
    }

    let mut summaries = vec![];

    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();

        if path.extension().and_then(|s| s.to_str()) == Some("json") {
            match fs::read_to_string(&path) {
                Ok(json) => match serde_json::from_str::<ConversationSummary>(&json) {
                    Ok(summary) => summaries.push(summary),
                    Err(e) => {
                        tracing::warn!("Failed to parse conversation file {:?}: {}", path, e);
                        continue;
                    }
                },
                Err(e) => {
                    tracing::warn!("Failed to read conversation file {:?}: {}", path, e);
                    continue;
                }
            }
        }
    }

    summaries.sort_by_key(|summary| {
        let rank = match summary.kind {
            ConversationKind::Official => 0u8,
            ConversationKind::NoteToSelf => 1,
            ConversationKind::Direct | ConversationKind::Group => 2,
        };
        let name = summary
            .display_name()
            .unwrap_or_default()
            .to_lowercase();
        (rank, name)
    });

    Ok(summaries)
}

/// Write the starter conversations if the directory holds none.
///
/// Returns true when seeding happened.
pub fn seed_if_empty() -> Result<bool, StorageError> {
    let dir = get_conversations_dir()?;
    fs::create_dir_all(&dir)?;

    if !list_summaries_in(&dir)?.is_empty() {
        return Ok(false);
    }

    for summary in seed_summaries() {
        save_summary_in(&dir, &summary)?;
    }
    Ok(true)
}

/// Starter set covering each conversation kind
fn seed_summaries() -> Vec<ConversationSummary> {
    let official = ConversationSummary::new(ConversationKind::Official, "Perch");

    // Title is ignored for the self-chat; the hero renders the fixed label.
    let mut note_to_self = ConversationSummary::new(ConversationKind::NoteToSelf, "Note to Self");
    note_to_self.title = None;

    let mut maya = ConversationSummary::new(ConversationKind::Direct, "Maya Okafor");
    maya.phone_number = Some("+15555550123".to_string());
    maya.about = Some("Probably out climbing".to_string());

    let mut lena = ConversationSummary::new(ConversationKind::Direct, "Lena");
    lena.accepted_message_request = false;
    lena.from_or_added_by_trusted_contact = false;
    lena.profile_name = Some("lena.v".to_string());
    lena.avatar_url = Some("assets/avatars/lena.png".to_string());

    let mut sam = ConversationSummary::new(ConversationKind::Direct, "Sam Whitfield");
    sam.shared_group_names = vec!["Weekend Riders".to_string(), "Book Club".to_string()];
    sam.stories = Some(StoriesState::Unread);

    let mut riders = ConversationSummary::new(ConversationKind::Group, "Weekend Riders");
    riders.group_description = Some("Saturday morning rides, all paces welcome".to_string());
    riders.members_count = Some(12);

    vec![official, note_to_self, maya, lena, sam, riders]
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempdir().unwrap();
        let summary = ConversationSummary::new(ConversationKind::Direct, "Ada");

        save_summary_in(dir.path(), &summary).unwrap();
        let loaded = load_summary_in(dir.path(), &summary.id).unwrap();
        assert_eq!(loaded, summary);
    }

    #[test]
    fn test_load_missing_summary() {
        let dir = tempdir().unwrap();
        let result = load_summary_in(dir.path(), "nope");
        assert!(matches!(result, Err(StorageError::ConversationNotFound(_))));
    }

    #[test]
    fn test_list_skips_malformed_files() {
        let dir = tempdir().unwrap();
        let summary = ConversationSummary::new(ConversationKind::Group, "Weekend Riders");
        save_summary_in(dir.path(), &summary).unwrap();
        fs::write(dir.path().join("broken.json"), "{ not json").unwrap();

        let listed = list_summaries_in(dir.path()).unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, summary.id);
    }

    #[test]
    fn test_list_order_puts_official_first() {
        let dir = tempdir().unwrap();
        for summary in seed_summaries() {
            save_summary_in(dir.path(), &summary).unwrap();
        }

        let listed = list_summaries_in(dir.path()).unwrap();
        assert_eq!(listed[0].kind, ConversationKind::Official);
        assert_eq!(listed[1].kind, ConversationKind::NoteToSelf);
    }

    #[test]
    fn test_seed_covers_each_kind() {
        let seeds = seed_summaries();
        for kind in [
            ConversationKind::Direct,
            ConversationKind::Group,
            ConversationKind::NoteToSelf,
            ConversationKind::Official,
        ] {
            assert!(seeds.iter().any(|s| s.kind == kind));
        }
    }
}
