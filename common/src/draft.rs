//! The lesson draft state machine: the bridge between what the user is
//! typing and what the server has, for exactly one lesson at a time.
//!
//! States and transitions:
//!
//! ```text
//! NoSelection -> Clean        selection lands on a lesson
//! Clean       -> Editing      any local field change
//! Editing     -> Persisting   blur / explicit save / toggle change
//! Persisting  -> Clean        success; draft overwritten with the server lesson
//! Persisting  -> Editing      failure; the local edit is retained
//! ```
//!
//! The tagged representation makes the illegal combinations (a draft with
//! no selected lesson, a persist with no draft) unrepresentable. While a
//! request is in flight the editor's `saving` flag blocks further edits,
//! so `Persisting` never has to absorb a concurrent change.

use serde_json::Value;

use crate::model::curriculum::{Lesson, LessonType};
use crate::requests::LessonFieldPatch;

/// Transient, UI-local copy of the active lesson's editable fields.
/// `duration` and `resource` hold raw input text; coercion happens at
/// persist time in `LessonFieldPatch::payload`.
#[derive(Debug, Clone, PartialEq)]
pub struct LessonDraft {
    pub lesson_id: String,
    pub title: String,
    pub lesson_type: LessonType,
    pub duration: String,
    pub is_preview: bool,
    pub resource: String,
}

impl LessonDraft {
    pub fn from_lesson(lesson: &Lesson) -> Self {
        Self {
            lesson_id: lesson.id.clone(),
            title: lesson.title.clone(),
            lesson_type: lesson.lesson_type,
            duration: lesson.duration_minutes.to_string(),
            is_preview: lesson.is_preview,
            resource: lesson.display_url().unwrap_or_default().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DraftState {
    /// No lessons exist, or none is selected.
    NoSelection,
    /// Draft mirrors the last known server state of the active lesson.
    Clean { draft: LessonDraft },
    /// At least one field differs locally and has not been sent yet.
    Editing { draft: LessonDraft },
    /// A field-level update request is in flight.
    Persisting { draft: LessonDraft },
}

impl DraftState {
    /// Entry transition on selection change. Always rebuilds the draft from
    /// the selected lesson, so unsaved edits of the previous lesson never
    /// leak into the new one.
    pub fn select(lesson: Option<&Lesson>) -> DraftState {
        match lesson {
            Some(lesson) => DraftState::Clean {
                draft: LessonDraft::from_lesson(lesson),
            },
            None => DraftState::NoSelection,
        }
    }

    pub fn draft(&self) -> Option<&LessonDraft> {
        match self {
            DraftState::NoSelection => None,
            DraftState::Clean { draft }
            | DraftState::Editing { draft }
            | DraftState::Persisting { draft } => Some(draft),
        }
    }

    pub fn is_persisting(&self) -> bool {
        matches!(self, DraftState::Persisting { .. })
    }

    /// Applies a local field change: Clean -> Editing (Editing stays put).
    /// Ignored with no selection or while a request is in flight; returns
    /// whether the draft changed.
    pub fn edit(&mut self, apply: impl FnOnce(&mut LessonDraft)) -> bool {
        match std::mem::replace(self, DraftState::NoSelection) {
            DraftState::Clean { mut draft } | DraftState::Editing { mut draft } => {
                apply(&mut draft);
                *self = DraftState::Editing { draft };
                true
            }
            other => {
                *self = other;
                false
            }
        }
    }

    /// Starts persisting one field: Clean|Editing -> Persisting. Returns
    /// the target lesson id and the shaped wire payload, or `None` when
    /// there is nothing to persist (no selection, or already in flight).
    pub fn begin_persist(&mut self, field: &LessonFieldPatch) -> Option<(String, Value)> {
        match std::mem::replace(self, DraftState::NoSelection) {
            DraftState::Clean { draft } | DraftState::Editing { draft } => {
                let payload = field.payload(draft.lesson_type);
                let lesson_id = draft.lesson_id.clone();
                *self = DraftState::Persisting { draft };
                Some((lesson_id, payload))
            }
            other => {
                *self = other;
                None
            }
        }
    }

    /// Success: the server's lesson object overwrites the draft wholesale,
    /// re-deriving the display URL. Persisting -> Clean.
    pub fn persist_ok(&mut self, server_lesson: &Lesson) {
        if let DraftState::Persisting { .. } = self {
            *self = DraftState::Clean {
                draft: LessonDraft::from_lesson(server_lesson),
            };
        }
    }

    /// Failure: the locally entered value is retained so no typed input is
    /// silently lost. Persisting -> Editing.
    pub fn persist_failed(&mut self) {
        *self = match std::mem::replace(self, DraftState::NoSelection) {
            DraftState::Persisting { draft } => DraftState::Editing { draft },
            other => other,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lesson(id: &str, title: &str) -> Lesson {
        Lesson {
            id: id.into(),
            title: title.into(),
            lesson_type: LessonType::Text,
            duration_minutes: 15,
            is_preview: false,
            order: 1,
            video_url: None,
            video_source: None,
            resource_url: Some("https://example.com/doc.pdf".into()),
        }
    }

    #[test]
    fn selection_builds_a_clean_mirror_of_the_lesson() {
        let state = DraftState::select(Some(&lesson("l1", "Reading")));
        let draft = state.draft().unwrap();
        assert_eq!(draft.lesson_id, "l1");
        assert_eq!(draft.title, "Reading");
        assert_eq!(draft.duration, "15");
        assert_eq!(draft.resource, "https://example.com/doc.pdf");
        assert_eq!(DraftState::select(None), DraftState::NoSelection);
    }

    #[test]
    fn switching_selection_discards_unsaved_edits() {
        let mut state = DraftState::select(Some(&lesson("l1", "Reading")));
        state.edit(|d| d.title = "Half-typed chang".into());
        let state = DraftState::select(Some(&lesson("l2", "Quiz time")));
        let draft = state.draft().unwrap();
        assert_eq!(draft.lesson_id, "l2");
        assert_eq!(draft.title, "Quiz time");
    }

    #[test]
    fn edit_moves_clean_to_editing() {
        let mut state = DraftState::select(Some(&lesson("l1", "Reading")));
        assert!(state.edit(|d| d.title = "Reading v2".into()));
        assert!(matches!(state, DraftState::Editing { .. }));
        assert_eq!(state.draft().unwrap().title, "Reading v2");
    }

    #[test]
    fn edit_without_selection_is_ignored() {
        let mut state = DraftState::NoSelection;
        assert!(!state.edit(|d| d.title = "x".into()));
        assert_eq!(state, DraftState::NoSelection);
    }

    #[test]
    fn begin_persist_shapes_the_payload_and_locks_the_draft() {
        let mut state = DraftState::select(Some(&lesson("l1", "Reading")));
        state.edit(|d| d.title = "Reading v2".into());
        let (lesson_id, payload) = state
            .begin_persist(&LessonFieldPatch::Title("Reading v2".into()))
            .unwrap();
        assert_eq!(lesson_id, "l1");
        assert_eq!(payload["title"], "Reading v2");
        assert!(state.is_persisting());
        // A second persist while in flight yields nothing.
        assert!(
            state
                .begin_persist(&LessonFieldPatch::Title("again".into()))
                .is_none()
        );
    }

    #[test]
    fn persist_ok_returns_to_clean_with_the_server_lesson() {
        let mut state = DraftState::select(Some(&lesson("l1", "Reading")));
        state.begin_persist(&LessonFieldPatch::Title("Reading v2".into()));
        let mut server = lesson("l1", "Reading v2");
        server.duration_minutes = 20;
        state.persist_ok(&server);
        assert!(matches!(state, DraftState::Clean { .. }));
        let draft = state.draft().unwrap();
        assert_eq!(draft.title, "Reading v2");
        assert_eq!(draft.duration, "20");
    }

    #[test]
    fn persist_failure_keeps_the_local_edit() {
        let mut state = DraftState::select(Some(&lesson("l1", "Reading")));
        state.edit(|d| d.title = "Reading v2".into());
        state.begin_persist(&LessonFieldPatch::Title("Reading v2".into()));
        state.persist_failed();
        assert!(matches!(state, DraftState::Editing { .. }));
        assert_eq!(state.draft().unwrap().title, "Reading v2");
    }

    #[test]
    fn edits_are_blocked_while_persisting() {
        let mut state = DraftState::select(Some(&lesson("l1", "Reading")));
        state.begin_persist(&LessonFieldPatch::Preview(true));
        assert!(!state.edit(|d| d.title = "nope".into()));
        assert!(state.is_persisting());
    }
}
