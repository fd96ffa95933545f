//! View rendering for the curriculum editor.
//!
//! Layout: a header with back/add-section controls, a metrics strip
//! summed from the in-memory tree on every render, the section/lesson
//! tree with inline rename/reorder/delete controls, and the detail form
//! bound to the lesson draft. Two top-sheet dialogs host the add-section
//! and add-lesson forms.

use common::model::curriculum::{CurriculumSummary, Lesson, LessonType, Section};
use common::ordering::MoveDirection;
use common::requests::LessonFieldPatch;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::html::Scope;
use yew::prelude::*;

use crate::components::top_sheet::TopSheet;

use super::helpers::{format_minutes, parse_lesson_type};
use super::messages::Msg;
use super::state::CurriculumEditor;

pub fn view(component: &CurriculumEditor, ctx: &Context<CurriculumEditor>) -> Html {
    let link = ctx.link();
    let on_back = ctx.props().on_back.clone();

    html! {
        <div class="curriculum-root">
            <div class="curriculum-header">
                <button class="link-btn" onclick={Callback::from(move |_| on_back.emit(()))}>
                    {"< Courses"}
                </button>
                <h2>
                    { if component.course_title.is_empty() { "Course" } else { component.course_title.as_str() } }
                </h2>
                {
                    if component.saving {
                        html! { <span class="saving-hint">{"Saving..."}</span> }
                    } else {
                        html! {}
                    }
                }
                { icon_button("add", "Add section", link.callback(|_| Msg::OpenSectionDialog), component.saving) }
            </div>
            { error_banner(component, link) }
            {
                if component.loading {
                    html! { <div class="loading-hint">{"Loading curriculum..."}</div> }
                } else {
                    html! {
                        <div class="curriculum-panes">
                            { metrics_pane(component) }
                            <div class="tree-pane">
                                { for component.sections.iter().map(|s| section_block(component, link, s)) }
                                {
                                    if component.sections.is_empty() {
                                        html! { <p class="empty-hint">{"No sections yet. Add the first one."}</p> }
                                    } else {
                                        html! {}
                                    }
                                }
                            </div>
                            <div class="detail-pane">
                                { detail_form(component, link) }
                            </div>
                        </div>
                    }
                }
            }
            { section_dialog(component, link) }
            { lesson_dialog(component, link) }
        </div>
    }
}

fn error_banner(component: &CurriculumEditor, link: &Scope<CurriculumEditor>) -> Html {
    match &component.error {
        Some(message) => html! {
            <div class="error-banner">
                <span>{ message.as_str() }</span>
                <button class="link-btn" onclick={link.callback(|_| Msg::DismissError)}>
                    {"Dismiss"}
                </button>
            </div>
        },
        None => html! {},
    }
}

/// Left pane: figures summed over the tree on every render.
fn metrics_pane(component: &CurriculumEditor) -> Html {
    let summary = CurriculumSummary::from_sections(&component.sections);
    html! {
        <div class="metrics-pane">
            { metric_row("Sections", summary.sections.to_string()) }
            { metric_row("Lessons", summary.lessons.to_string()) }
            { metric_row("Duration", format_minutes(summary.total_minutes)) }
            { metric_row("Previews", summary.previews.to_string()) }
        </div>
    }
}

fn metric_row(label: &str, value: String) -> Html {
    html! {
        <div class="metric-row">
            <span class="metric-label">{ label }</span>
            <span class="metric-value">{ value }</span>
        </div>
    }
}

fn section_block(
    component: &CurriculumEditor,
    link: &Scope<CurriculumEditor>,
    section: &Section,
) -> Html {
    let sid = section.id.clone();
    let is_active = component.active_section_id.as_deref() == Some(section.id.as_str());
    let renaming = component
        .renaming_section
        .as_ref()
        .filter(|(id, _)| *id == section.id);

    let select = {
        let sid = sid.clone();
        link.callback(move |_| Msg::Select {
            section_id: sid.clone(),
            lesson_id: None,
        })
    };
    let add_lesson = {
        let sid = sid.clone();
        link.batch_callback(move |_| {
            vec![
                Msg::Select {
                    section_id: sid.clone(),
                    lesson_id: None,
                },
                Msg::OpenLessonDialog,
            ]
        })
    };

    html! {
        <div class={classes!("section-block", if is_active { "active" } else { "" })}>
            <div class="section-header">
                {
                    match renaming {
                        Some((_, edited)) => html! {
                            <>
                                <input
                                    class="rename-input"
                                    value={edited.clone()}
                                    oninput={link.callback(|e: InputEvent| {
                                        Msg::RenameTitle(e.target_unchecked_into::<HtmlInputElement>().value())
                                    })}
                                    onkeydown={link.batch_callback(|e: KeyboardEvent| {
                                        match e.key().as_str() {
                                            "Enter" => vec![Msg::SubmitRenameSection],
                                            "Escape" => vec![Msg::CancelRenameSection],
                                            _ => vec![],
                                        }
                                    })}
                                />
                                { icon_button("check", "Save", link.callback(|_| Msg::SubmitRenameSection), component.saving) }
                                { icon_button("close", "Cancel", link.callback(|_| Msg::CancelRenameSection), false) }
                            </>
                        },
                        None => html! {
                            <span class="section-title" onclick={select}>
                                { format!("{}. {}", section.order, section.title) }
                            </span>
                        },
                    }
                }
                <div class="section-controls">
                    { move_section_button(link, &sid, MoveDirection::Up, component.saving) }
                    { move_section_button(link, &sid, MoveDirection::Down, component.saving) }
                    {{
                        let sid = sid.clone();
                        icon_button("edit", "Rename", link.callback(move |_| Msg::StartRenameSection(sid.clone())), component.saving)
                    }}
                    { icon_button("playlist_add", "Add lesson", add_lesson, component.saving) }
                    {{
                        let sid = sid.clone();
                        icon_button("delete", "Delete", link.callback(move |_| Msg::DeleteSection(sid.clone())), component.saving)
                    }}
                </div>
            </div>
            <ul class="lesson-list">
                { for section.lessons.iter().map(|l| lesson_row(component, link, section, l)) }
            </ul>
        </div>
    }
}

fn move_section_button(
    link: &Scope<CurriculumEditor>,
    section_id: &str,
    direction: MoveDirection,
    disabled: bool,
) -> Html {
    let icon = match direction {
        MoveDirection::Up => "arrow_upward",
        MoveDirection::Down => "arrow_downward",
    };
    let label = match direction {
        MoveDirection::Up => "Move up",
        MoveDirection::Down => "Move down",
    };
    let sid = section_id.to_string();
    icon_button(
        icon,
        label,
        link.callback(move |_| Msg::MoveSection(sid.clone(), direction)),
        disabled,
    )
}

fn lesson_row(
    component: &CurriculumEditor,
    link: &Scope<CurriculumEditor>,
    section: &Section,
    lesson: &Lesson,
) -> Html {
    let is_active = component.active_lesson_id.as_deref() == Some(lesson.id.as_str());
    let select = {
        let sid = section.id.clone();
        let lid = lesson.id.clone();
        link.callback(move |_| Msg::Select {
            section_id: sid.clone(),
            lesson_id: Some(lid.clone()),
        })
    };
    let move_button = |direction: MoveDirection| {
        let icon = match direction {
            MoveDirection::Up => "arrow_upward",
            MoveDirection::Down => "arrow_downward",
        };
        let sid = section.id.clone();
        let lid = lesson.id.clone();
        icon_button(
            icon,
            "",
            link.callback(move |_| Msg::MoveLesson {
                section_id: sid.clone(),
                lesson_id: lid.clone(),
                direction,
            }),
            component.saving,
        )
    };
    let delete = {
        let lid = lesson.id.clone();
        icon_button(
            "delete",
            "",
            link.callback(move |_| Msg::DeleteLesson(lid.clone())),
            component.saving,
        )
    };

    html! {
        <li class={classes!("lesson-row", if is_active { "active" } else { "" })}>
            <span class="lesson-title" onclick={select}>
                { format!("{}. {}", lesson.order, lesson.title) }
            </span>
            <span class="lesson-type-badge">{ lesson.lesson_type.as_str() }</span>
            <span class="lesson-duration">{ format_minutes(lesson.duration_minutes) }</span>
            {
                if lesson.is_preview {
                    html! { <span class="preview-badge" title="Free preview">{"preview"}</span> }
                } else {
                    html! {}
                }
            }
            { move_button(MoveDirection::Up) }
            { move_button(MoveDirection::Down) }
            { delete }
        </li>
    }
}

/// Detail form bound to the lesson draft; each field persists on blur,
/// the type select and preview toggle persist immediately on change.
fn detail_form(component: &CurriculumEditor, link: &Scope<CurriculumEditor>) -> Html {
    let Some(draft) = component.draft.draft() else {
        return html! { <p class="empty-hint">{"Select a lesson to edit it."}</p> };
    };

    let title_value = draft.title.clone();
    let duration_value = draft.duration.clone();
    let resource_value = draft.resource.clone();
    let resource_label = if draft.lesson_type == LessonType::Video {
        "Video URL"
    } else {
        "Resource URL"
    };

    html! {
        <div class="lesson-form">
            <label>{"Title"}</label>
            <input
                value={draft.title.clone()}
                oninput={link.callback(|e: InputEvent| {
                    Msg::DraftTitle(e.target_unchecked_into::<HtmlInputElement>().value())
                })}
                onblur={link.callback(move |_: FocusEvent| {
                    Msg::PersistField(LessonFieldPatch::Title(title_value.clone()))
                })}
            />

            <label>{"Type"}</label>
            <select onchange={link.callback(|e: Event| {
                let value = e.target_unchecked_into::<HtmlSelectElement>().value();
                Msg::DraftType(parse_lesson_type(&value))
            })}>
                { for [LessonType::Video, LessonType::Pdf, LessonType::Text, LessonType::Quiz]
                    .iter()
                    .map(|t| html! {
                        <option value={t.as_str()} selected={draft.lesson_type == *t}>
                            { t.as_str() }
                        </option>
                    })
                }
            </select>

            <label>{"Duration (minutes)"}</label>
            <input
                type="number"
                min="0"
                value={draft.duration.clone()}
                oninput={link.callback(|e: InputEvent| {
                    Msg::DraftDuration(e.target_unchecked_into::<HtmlInputElement>().value())
                })}
                onblur={link.callback(move |_: FocusEvent| {
                    Msg::PersistField(LessonFieldPatch::Duration(duration_value.clone()))
                })}
            />

            <label>{ resource_label }</label>
            <input
                value={draft.resource.clone()}
                placeholder="https://..."
                oninput={link.callback(|e: InputEvent| {
                    Msg::DraftResource(e.target_unchecked_into::<HtmlInputElement>().value())
                })}
                onblur={link.callback(move |_: FocusEvent| {
                    Msg::PersistField(LessonFieldPatch::Resource(resource_value.clone()))
                })}
            />
            {
                match &component.resource_error {
                    Some(message) => html! { <span class="field-error">{ message.as_str() }</span> },
                    None => html! {},
                }
            }

            <label class="checkbox-label">
                <input
                    type="checkbox"
                    checked={draft.is_preview}
                    disabled={component.saving}
                    onchange={link.callback(|e: Event| {
                        Msg::TogglePreview(e.target_unchecked_into::<HtmlInputElement>().checked())
                    })}
                />
                {"Free preview"}
            </label>
        </div>
    }
}

fn section_dialog(component: &CurriculumEditor, link: &Scope<CurriculumEditor>) -> Html {
    html! {
        <TopSheet node_ref={component.section_dialog_ref.clone()}>
            <div class="dialog-body">
                <h3>{"New section"}</h3>
                <input
                    placeholder="Section title"
                    value={component.new_section_title.clone()}
                    oninput={link.callback(|e: InputEvent| {
                        Msg::NewSectionTitle(e.target_unchecked_into::<HtmlInputElement>().value())
                    })}
                />
                <div class="dialog-actions">
                    <button
                        disabled={component.saving}
                        onclick={link.callback(|_| Msg::SubmitNewSection)}
                    >
                        {"Create"}
                    </button>
                    <button class="link-btn" onclick={link.callback(|_| Msg::CloseSectionDialog)}>
                        {"Cancel"}
                    </button>
                </div>
            </div>
        </TopSheet>
    }
}

fn lesson_dialog(component: &CurriculumEditor, link: &Scope<CurriculumEditor>) -> Html {
    html! {
        <TopSheet node_ref={component.lesson_dialog_ref.clone()}>
            <div class="dialog-body">
                <h3>{"New lesson"}</h3>
                <input
                    placeholder="Lesson title"
                    value={component.new_lesson_title.clone()}
                    oninput={link.callback(|e: InputEvent| {
                        Msg::NewLessonTitle(e.target_unchecked_into::<HtmlInputElement>().value())
                    })}
                />
                <select onchange={link.callback(|e: Event| {
                    let value = e.target_unchecked_into::<HtmlSelectElement>().value();
                    Msg::NewLessonType(parse_lesson_type(&value))
                })}>
                    { for [LessonType::Video, LessonType::Pdf, LessonType::Text, LessonType::Quiz]
                        .iter()
                        .map(|t| html! {
                            <option value={t.as_str()} selected={component.new_lesson_type == *t}>
                                { t.as_str() }
                            </option>
                        })
                    }
                </select>
                <div class="dialog-actions">
                    <button
                        disabled={component.saving}
                        onclick={link.callback(|_| Msg::SubmitNewLesson)}
                    >
                        {"Create"}
                    </button>
                    <button class="link-btn" onclick={link.callback(|_| Msg::CloseLessonDialog)}>
                        {"Cancel"}
                    </button>
                </div>
            </div>
        </TopSheet>
    }
}

/// Toolbar button with a Material icon and an optional label.
fn icon_button(icon_name: &str, label: &str, on_click: Callback<MouseEvent>, disabled: bool) -> Html {
    html! {
        <button class="icon-btn" onclick={on_click} {disabled} title={label.to_string()}>
            <i class="material-icons">{ icon_name }</i>
            {
                if label.is_empty() {
                    html! {}
                } else {
                    html! { <span class="icon-label">{ label }</span> }
                }
            }
        </button>
    }
}
