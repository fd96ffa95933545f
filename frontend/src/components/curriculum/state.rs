//! State for the two-pane curriculum editor.
//!
//! `sections` is the canonical in-memory tree (authoritative copy of the
//! last server responses), `draft` is the lesson draft machine, and the
//! `active_*` pair is the cursor into the tree. `saving` is the single
//! concurrency guard: while any mutating request is outstanding, further
//! mutating actions are ignored.

use common::draft::DraftState;
use common::model::curriculum::{Lesson, LessonType, Section};
use yew::prelude::*;

pub struct CurriculumEditor {
    /// Header title, filled in once `GET /courses/:id` resolves.
    pub course_title: String,
    pub sections: Vec<Section>,
    pub active_section_id: Option<String>,
    pub active_lesson_id: Option<String>,
    pub draft: DraftState,

    pub loading: bool,
    pub saving: bool,
    /// Banner text for the last failed request; dismissed explicitly.
    pub error: Option<String>,
    /// Inline validation message under the resource field.
    pub resource_error: Option<String>,

    // add-section dialog
    pub new_section_title: String,
    pub section_dialog_ref: NodeRef,

    // add-lesson dialog (targets the active section)
    pub new_lesson_title: String,
    pub new_lesson_type: LessonType,
    pub lesson_dialog_ref: NodeRef,

    /// Inline rename in progress: `(section id, edited title)`.
    pub renaming_section: Option<(String, String)>,

    /// Guard for the one-time fetch on first render.
    pub loaded: bool,
}

impl CurriculumEditor {
    pub fn new() -> Self {
        Self {
            course_title: String::new(),
            sections: Vec::new(),
            active_section_id: None,
            active_lesson_id: None,
            draft: DraftState::NoSelection,
            loading: true,
            saving: false,
            error: None,
            resource_error: None,
            new_section_title: String::new(),
            section_dialog_ref: Default::default(),
            new_lesson_title: String::new(),
            new_lesson_type: LessonType::default(),
            lesson_dialog_ref: Default::default(),
            renaming_section: None,
            loaded: false,
        }
    }

    pub fn active_section(&self) -> Option<&Section> {
        let id = self.active_section_id.as_deref()?;
        self.sections.iter().find(|s| s.id == id)
    }

    pub fn active_lesson(&self) -> Option<&Lesson> {
        let section = self.active_section()?;
        let id = self.active_lesson_id.as_deref()?;
        section.lessons.iter().find(|l| l.id == id)
    }

    /// Re-resolves the cursor after any tree change: the active section
    /// falls back to the first section, the active lesson to the first
    /// lesson of the active section, else none. The draft is rebuilt only
    /// when the resolved lesson actually changed, so in-progress edits of
    /// a still-selected lesson survive unrelated tree updates.
    pub fn reconcile_selection(&mut self) {
        self.active_section_id = self
            .active_section_id
            .take()
            .filter(|id| self.sections.iter().any(|s| s.id == *id))
            .or_else(|| self.sections.first().map(|s| s.id.clone()));

        let sibling_ids: Vec<String> = self
            .active_section()
            .map(|s| s.lessons.iter().map(|l| l.id.clone()).collect())
            .unwrap_or_default();
        self.active_lesson_id = if self.active_section_id.is_some() {
            self.active_lesson_id
                .take()
                .filter(|id| sibling_ids.contains(id))
                .or_else(|| sibling_ids.first().cloned())
        } else {
            None
        };

        let drafted = self.draft.draft().map(|d| d.lesson_id.clone());
        if drafted != self.active_lesson_id {
            let lesson = self.active_lesson().cloned();
            self.draft = DraftState::select(lesson.as_ref());
            self.resource_error = None;
        }
    }

    /// Writes a server-returned lesson into the canonical tree wherever it
    /// currently lives.
    pub fn apply_server_lesson(&mut self, lesson: &Lesson) {
        for section in &mut self.sections {
            if let Some(slot) = section.lessons.iter_mut().find(|l| l.id == lesson.id) {
                *slot = lesson.clone();
                return;
            }
        }
    }
}
