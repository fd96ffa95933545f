//! Update function for the curriculum editor, Elm style: receives the
//! current state and a `Msg`, mutates, returns whether to re-render.
//!
//! Every network call follows the same pattern: set `saving`, spawn the
//! request, and resolve it into a follow-up message that clears `saving`
//! on both paths, so the in-flight guard can never stick. Reorders are
//! optimistic: the tree changes immediately and is NOT rolled back when
//! the bulk order persistence partially fails; the backend stays the
//! source of truth and the failure is surfaced in the banner.

use common::draft::DraftState;
use common::ordering;
use common::requests::{CreateLessonRequest, CreateSectionRequest, LessonFieldPatch};
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api;
use crate::components::notify::show_toast;
use crate::components::top_sheet::{close_top_sheet, open_top_sheet};
use crate::components::validate::looks_like_url;

use super::messages::Msg;
use super::state::CurriculumEditor;

pub fn update(
    component: &mut CurriculumEditor,
    ctx: &Context<CurriculumEditor>,
    msg: Msg,
) -> bool {
    match msg {
        Msg::CourseLoaded(course) => {
            component.course_title = course.title;
            true
        }
        Msg::Loaded(mut sections) => {
            sections.sort_by_key(|s| s.order);
            for section in &mut sections {
                section.lessons.sort_by_key(|l| l.order);
            }
            component.sections = sections;
            component.loading = false;
            component.reconcile_selection();
            true
        }
        Msg::LoadFailed(message) => {
            component.loading = false;
            component.error = Some(message);
            true
        }

        Msg::Select {
            section_id,
            lesson_id,
        } => {
            if component.saving {
                return false;
            }
            component.active_section_id = Some(section_id);
            component.active_lesson_id = lesson_id;
            component.reconcile_selection();
            true
        }

        Msg::MoveSection(section_id, direction) => {
            if component.saving {
                return false;
            }
            if !ordering::move_sibling(&mut component.sections, &section_id, direction) {
                return false;
            }
            persist_section_orders(component, ctx);
            true
        }
        Msg::MoveLesson {
            section_id,
            lesson_id,
            direction,
        } => {
            if component.saving {
                return false;
            }
            let Some(section) = component.sections.iter_mut().find(|s| s.id == section_id)
            else {
                return false;
            };
            if !ordering::move_sibling(&mut section.lessons, &lesson_id, direction) {
                return false;
            }
            let lessons = section.lessons.clone();
            component.saving = true;
            let client = ctx.props().client.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                match api::curriculum::persist_lesson_orders(&client, &lessons).await {
                    Ok(()) => link.send_message(Msg::OrdersPersisted),
                    Err(err) => link.send_message(Msg::OrdersPersistFailed(err.to_string())),
                }
            });
            true
        }
        Msg::OrdersPersisted => {
            component.saving = false;
            true
        }
        Msg::OrdersPersistFailed(message) => {
            component.saving = false;
            component.error = Some(format!(
                "The new order was not fully saved; reload to see the stored order. ({message})"
            ));
            true
        }

        Msg::OpenSectionDialog => {
            open_top_sheet(component.section_dialog_ref.clone());
            false
        }
        Msg::CloseSectionDialog => {
            close_top_sheet(component.section_dialog_ref.clone());
            component.new_section_title.clear();
            true
        }
        Msg::NewSectionTitle(title) => {
            component.new_section_title = title;
            true
        }
        Msg::SubmitNewSection => {
            if component.saving {
                return false;
            }
            let title = component.new_section_title.trim().to_string();
            if title.is_empty() {
                show_toast("Section title is required.");
                return false;
            }
            let request = CreateSectionRequest {
                title,
                order: component.sections.len() as u32 + 1,
            };
            component.saving = true;
            let client = ctx.props().client.clone();
            let course_id = ctx.props().course_id.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                match api::curriculum::create_section(&client, &course_id, &request).await {
                    Ok(section) => link.send_message(Msg::SectionCreated(section)),
                    Err(err) => link.send_message(Msg::RequestFailed(err.to_string())),
                }
            });
            true
        }
        Msg::SectionCreated(section) => {
            component.saving = false;
            component.active_section_id = Some(section.id.clone());
            component.active_lesson_id = None;
            component.sections.push(section);
            close_top_sheet(component.section_dialog_ref.clone());
            component.new_section_title.clear();
            component.reconcile_selection();
            show_toast("Section created.");
            true
        }

        Msg::StartRenameSection(section_id) => {
            if component.saving {
                return false;
            }
            let title = component
                .sections
                .iter()
                .find(|s| s.id == section_id)
                .map(|s| s.title.clone())
                .unwrap_or_default();
            component.renaming_section = Some((section_id, title));
            true
        }
        Msg::RenameTitle(title) => {
            if let Some((_, edited)) = &mut component.renaming_section {
                *edited = title;
            }
            true
        }
        Msg::CancelRenameSection => {
            component.renaming_section = None;
            true
        }
        Msg::SubmitRenameSection => {
            if component.saving {
                return false;
            }
            let Some((section_id, title)) = component.renaming_section.clone() else {
                return false;
            };
            let title = title.trim().to_string();
            if title.is_empty() {
                component.renaming_section = None;
                return true;
            }
            component.saving = true;
            let client = ctx.props().client.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                match api::curriculum::rename_section(&client, &section_id, &title).await {
                    Ok(section) => link.send_message(Msg::SectionRenamed(section)),
                    Err(err) => link.send_message(Msg::RequestFailed(err.to_string())),
                }
            });
            true
        }
        Msg::SectionRenamed(section) => {
            component.saving = false;
            component.renaming_section = None;
            if let Some(slot) = component.sections.iter_mut().find(|s| s.id == section.id) {
                slot.title = section.title;
            }
            true
        }

        Msg::DeleteSection(section_id) => {
            if component.saving {
                return false;
            }
            component.saving = true;
            let client = ctx.props().client.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                match api::curriculum::delete_section(&client, &section_id).await {
                    Ok(()) => link.send_message(Msg::SectionDeleted(section_id)),
                    Err(err) => link.send_message(Msg::RequestFailed(err.to_string())),
                }
            });
            true
        }
        Msg::SectionDeleted(section_id) => {
            component.saving = false;
            component.sections.retain(|s| s.id != section_id);
            ordering::renumber(&mut component.sections);
            component.reconcile_selection();
            show_toast("Section deleted.");
            true
        }

        Msg::OpenLessonDialog => {
            if component.active_section().is_none() {
                show_toast("Create a section first.");
                return false;
            }
            open_top_sheet(component.lesson_dialog_ref.clone());
            false
        }
        Msg::CloseLessonDialog => {
            close_top_sheet(component.lesson_dialog_ref.clone());
            component.new_lesson_title.clear();
            true
        }
        Msg::NewLessonTitle(title) => {
            component.new_lesson_title = title;
            true
        }
        Msg::NewLessonType(lesson_type) => {
            component.new_lesson_type = lesson_type;
            true
        }
        Msg::SubmitNewLesson => {
            if component.saving {
                return false;
            }
            let Some(section) = component.active_section() else {
                return false;
            };
            let title = component.new_lesson_title.trim().to_string();
            if title.is_empty() {
                show_toast("Lesson title is required.");
                return false;
            }
            let request = CreateLessonRequest {
                title,
                lesson_type: component.new_lesson_type,
                duration_minutes: 0,
                is_preview: false,
                order: section.lessons.len() as u32 + 1,
            };
            let section_id = section.id.clone();
            component.saving = true;
            let client = ctx.props().client.clone();
            let course_id = ctx.props().course_id.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                match api::curriculum::create_lesson(&client, &course_id, &section_id, &request)
                    .await
                {
                    Ok(lesson) => link.send_message(Msg::LessonCreated { section_id, lesson }),
                    Err(err) => link.send_message(Msg::RequestFailed(err.to_string())),
                }
            });
            true
        }
        Msg::LessonCreated { section_id, lesson } => {
            component.saving = false;
            component.active_section_id = Some(section_id.clone());
            component.active_lesson_id = Some(lesson.id.clone());
            if let Some(section) = component.sections.iter_mut().find(|s| s.id == section_id) {
                section.lessons.push(lesson);
            }
            close_top_sheet(component.lesson_dialog_ref.clone());
            component.new_lesson_title.clear();
            component.reconcile_selection();
            show_toast("Lesson created.");
            true
        }

        Msg::DeleteLesson(lesson_id) => {
            if component.saving {
                return false;
            }
            component.saving = true;
            let client = ctx.props().client.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                match api::curriculum::delete_lesson(&client, &lesson_id).await {
                    Ok(()) => link.send_message(Msg::LessonDeleted(lesson_id)),
                    Err(err) => link.send_message(Msg::RequestFailed(err.to_string())),
                }
            });
            true
        }
        Msg::LessonDeleted(lesson_id) => {
            component.saving = false;
            for section in &mut component.sections {
                if section.lessons.iter().any(|l| l.id == lesson_id) {
                    section.lessons.retain(|l| l.id != lesson_id);
                    ordering::renumber(&mut section.lessons);
                    break;
                }
            }
            component.reconcile_selection();
            show_toast("Lesson deleted.");
            true
        }

        Msg::DraftTitle(title) => component.draft.edit(|d| d.title = title),
        Msg::DraftDuration(duration) => component.draft.edit(|d| d.duration = duration),
        Msg::DraftResource(resource) => {
            component.resource_error = None;
            component.draft.edit(|d| d.resource = resource)
        }
        Msg::DraftType(lesson_type) => {
            if component.draft.edit(|d| d.lesson_type = lesson_type) {
                persist_field(component, ctx, LessonFieldPatch::Type(lesson_type))
            } else {
                false
            }
        }
        Msg::TogglePreview(preview) => {
            if component.draft.edit(|d| d.is_preview = preview) {
                persist_field(component, ctx, LessonFieldPatch::Preview(preview))
            } else {
                false
            }
        }
        Msg::PersistField(field) => {
            if let LessonFieldPatch::Resource(raw) = &field {
                let trimmed = raw.trim();
                if !trimmed.is_empty() && !looks_like_url(trimmed) {
                    component.resource_error =
                        Some("Enter a full URL starting with http:// or https://".into());
                    return true;
                }
            }
            persist_field(component, ctx, field)
        }
        Msg::LessonPersisted(lesson) => {
            component.saving = false;
            component.draft.persist_ok(&lesson);
            component.apply_server_lesson(&lesson);
            true
        }
        Msg::LessonPersistFailed(message) => {
            component.saving = false;
            component.draft.persist_failed();
            component.error = Some(message);
            true
        }

        Msg::RequestFailed(message) => {
            component.saving = false;
            component.error = Some(message);
            true
        }
        Msg::DismissError => {
            component.error = None;
            true
        }
    }
}

/// Fans out one PATCH per section with its renumbered order, all in
/// parallel, and reports the settled outcome as a single message.
fn persist_section_orders(component: &mut CurriculumEditor, ctx: &Context<CurriculumEditor>) {
    component.saving = true;
    let client = ctx.props().client.clone();
    let sections = component.sections.clone();
    let link = ctx.link().clone();
    spawn_local(async move {
        match api::curriculum::persist_section_orders(&client, &sections).await {
            Ok(()) => link.send_message(Msg::OrdersPersisted),
            Err(err) => link.send_message(Msg::OrdersPersistFailed(err.to_string())),
        }
    });
}

/// Starts persisting one draft field. Only an `Editing` draft is sent:
/// blur on an untouched field is a no-op.
fn persist_field(
    component: &mut CurriculumEditor,
    ctx: &Context<CurriculumEditor>,
    field: LessonFieldPatch,
) -> bool {
    if component.saving {
        return false;
    }
    if !matches!(component.draft, DraftState::Editing { .. }) {
        return false;
    }
    let Some((lesson_id, payload)) = component.draft.begin_persist(&field) else {
        return false;
    };
    component.saving = true;
    let client = ctx.props().client.clone();
    let link = ctx.link().clone();
    spawn_local(async move {
        match api::curriculum::patch_lesson(&client, &lesson_id, &payload).await {
            Ok(lesson) => link.send_message(Msg::LessonPersisted(lesson)),
            Err(err) => link.send_message(Msg::LessonPersistFailed(err.to_string())),
        }
    });
    true
}
