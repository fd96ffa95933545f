//! View rendering for the course list page: filter toolbar, category
//! summary strip, the course table, pagination, and the top-sheet form.

use common::model::course::{Course, CourseStatus, KNOWN_CATEGORIES, summarize_by_category};
use num_format::{Locale, ToFormattedString};
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::html::Scope;
use yew::prelude::*;

use crate::components::top_sheet::TopSheet;

use super::helpers::{form_md5, format_price, status_options};
use super::messages::{FormField, Msg};
use super::state::CoursesPage;

pub fn view(component: &CoursesPage, ctx: &Context<CoursesPage>) -> Html {
    let link = ctx.link();

    html! {
        <div class="courses-root">
            { toolbar(component, link) }
            { summary_strip(component) }
            { error_banner(component, link) }
            {
                if component.loading {
                    html! { <div class="loading-hint">{"Loading courses..."}</div> }
                } else if component.courses.is_empty() {
                    html! { <p class="empty-hint">{"No courses match the current filters."}</p> }
                } else {
                    course_table(component, ctx)
                }
            }
            { pagination(component, link) }
            { form_dialog(component, link) }
        </div>
    }
}

fn toolbar(component: &CoursesPage, link: &Scope<CoursesPage>) -> Html {
    html! {
        <div class="courses-toolbar">
            <input
                class="search-input"
                placeholder="Search courses"
                value={component.search.clone()}
                oninput={link.callback(|e: InputEvent| {
                    Msg::SetSearch(e.target_unchecked_into::<HtmlInputElement>().value())
                })}
                onkeydown={link.batch_callback(|e: KeyboardEvent| {
                    if e.key() == "Enter" { vec![Msg::Search] } else { vec![] }
                })}
            />
            <select onchange={link.callback(|e: Event| {
                Msg::SetStatusFilter(e.target_unchecked_into::<HtmlSelectElement>().value())
            })}>
                <option value="" selected={component.status_filter.is_empty()}>{"All statuses"}</option>
                { for status_options().iter().map(|s| html! {
                    <option value={s.as_str()} selected={component.status_filter == s.as_str()}>
                        { s.as_str() }
                    </option>
                }) }
            </select>
            <button onclick={link.callback(|_| Msg::OpenCreate)} disabled={component.saving}>
                {"New course"}
            </button>
        </div>
    }
}

/// Grouped summary derived from the flat list in memory; nothing extra is
/// fetched for this strip.
fn summary_strip(component: &CoursesPage) -> Html {
    let summaries = summarize_by_category(&component.courses);
    if summaries.is_empty() {
        return html! {};
    }
    html! {
        <div class="category-strip">
            { for summaries.iter().map(|s| html! {
                <span class="category-chip">
                    <b>{ s.category.as_str() }</b>
                    { format!(": {} ({} published, {} free)", s.courses, s.published, s.free) }
                </span>
            }) }
        </div>
    }
}

fn error_banner(component: &CoursesPage, link: &Scope<CoursesPage>) -> Html {
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

fn course_table(component: &CoursesPage, ctx: &Context<CoursesPage>) -> Html {
    let link = ctx.link();
    html! {
        <table class="courses-table">
            <thead>
                <tr>
                    <th>{"Title"}</th>
                    <th>{"Category"}</th>
                    <th>{"Status"}</th>
                    <th>{"Approval"}</th>
                    <th>{"Price"}</th>
                    <th></th>
                </tr>
            </thead>
            <tbody>
                { for component.courses.iter().map(|c| course_row(component, ctx, link, c)) }
            </tbody>
        </table>
    }
}

fn course_row(
    component: &CoursesPage,
    ctx: &Context<CoursesPage>,
    link: &Scope<CoursesPage>,
    course: &Course,
) -> Html {
    let open_curriculum = {
        let on_open = ctx.props().on_open_curriculum.clone();
        let course = course.clone();
        Callback::from(move |_| on_open.emit(course.clone()))
    };
    let edit = {
        let id = course.id.clone();
        link.callback(move |_| Msg::OpenEdit(id.clone()))
    };
    let delete = {
        let id = course.id.clone();
        link.callback(move |_| Msg::Delete(id.clone()))
    };

    html! {
        <tr>
            <td>{ course.title.as_str() }</td>
            <td>{ if course.category.is_empty() { "-" } else { course.category.as_str() } }</td>
            <td><span class={format!("status-badge {}", course.status.as_str())}>{ course.status.as_str() }</span></td>
            <td>{ course.approval.as_str() }</td>
            <td>{ format_price(course.price, course.is_free) }</td>
            <td class="row-actions">
                <button class="link-btn" onclick={open_curriculum}>{"Curriculum"}</button>
                <button class="link-btn" onclick={edit} disabled={component.saving}>{"Edit"}</button>
                <button class="link-btn" onclick={delete} disabled={component.saving}>{"Delete"}</button>
            </td>
        </tr>
    }
}

fn pagination(component: &CoursesPage, link: &Scope<CoursesPage>) -> Html {
    html! {
        <div class="pagination">
            <button
                disabled={component.page <= 1 || component.loading}
                onclick={link.callback(|_| Msg::PrevPage)}
            >
                {"Prev"}
            </button>
            <span>
                { format!(
                    "Page {} of {} - {} courses",
                    component.page,
                    component.page_count(),
                    component.total.to_formatted_string(&Locale::en)
                ) }
            </span>
            <button
                disabled={component.page >= component.page_count() || component.loading}
                onclick={link.callback(|_| Msg::NextPage)}
            >
                {"Next"}
            </button>
        </div>
    }
}

fn form_dialog(component: &CoursesPage, link: &Scope<CoursesPage>) -> Html {
    let form = &component.form;
    let dirty = component
        .original_md5
        .as_ref()
        .map_or(false, |orig| orig != &form_md5(form));
    let heading = if component.editing_id.is_some() {
        "Edit course"
    } else {
        "New course"
    };

    html! {
        <TopSheet node_ref={component.form_dialog_ref.clone()}>
            <div class="dialog-body course-form">
                <h3 style="position: relative;">
                    { heading }
                    {
                        if dirty {
                            html! { <span class="dirty-dot" title="Unsaved changes" /> }
                        } else {
                            html! {}
                        }
                    }
                </h3>

                <label>{"Title"}</label>
                <input
                    value={form.title.clone()}
                    oninput={link.callback(|e: InputEvent| {
                        Msg::Field(FormField::Title(e.target_unchecked_into::<HtmlInputElement>().value()))
                    })}
                />
                { field_error(component, "title") }

                <label>{"Category"}</label>
                <select onchange={link.callback(|e: Event| {
                    Msg::Field(FormField::Category(e.target_unchecked_into::<HtmlSelectElement>().value()))
                })}>
                    { for KNOWN_CATEGORIES.iter().map(|c| html! {
                        <option value={*c} selected={form.category == *c}>{ *c }</option>
                    }) }
                    <option value="other" selected={form.category == "other"}>{"other"}</option>
                </select>
                {
                    if form.category == "other" {
                        html! {
                            <input
                                placeholder="Category name"
                                value={form.category_other.clone()}
                                oninput={link.callback(|e: InputEvent| {
                                    Msg::Field(FormField::CategoryOther(e.target_unchecked_into::<HtmlInputElement>().value()))
                                })}
                            />
                        }
                    } else {
                        html! {}
                    }
                }
                { field_error(component, "category") }

                <label>{"Status"}</label>
                <select onchange={link.callback(|e: Event| {
                    let value = e.target_unchecked_into::<HtmlSelectElement>().value();
                    let status = match value.as_str() {
                        "published" => CourseStatus::Published,
                        "archived" => CourseStatus::Archived,
                        _ => CourseStatus::Draft,
                    };
                    Msg::Field(FormField::Status(status))
                })}>
                    { for status_options().iter().map(|s| html! {
                        <option value={s.as_str()} selected={form.status == *s}>{ s.as_str() }</option>
                    }) }
                </select>

                <label class="checkbox-label">
                    <input
                        type="checkbox"
                        checked={form.is_free}
                        onchange={link.callback(|e: Event| {
                            Msg::Field(FormField::IsFree(e.target_unchecked_into::<HtmlInputElement>().checked()))
                        })}
                    />
                    {"Free course"}
                </label>

                {
                    if !form.is_free {
                        html! {
                            <>
                                <label>{"Price"}</label>
                                <input
                                    type="number"
                                    min="0"
                                    step="0.01"
                                    value={form.price.clone()}
                                    oninput={link.callback(|e: InputEvent| {
                                        Msg::Field(FormField::Price(e.target_unchecked_into::<HtmlInputElement>().value()))
                                    })}
                                />
                                { field_error(component, "price") }

                                <label>{"Discount %"}</label>
                                <input
                                    type="number"
                                    min="0"
                                    max="100"
                                    value={form.discount.clone()}
                                    oninput={link.callback(|e: InputEvent| {
                                        Msg::Field(FormField::Discount(e.target_unchecked_into::<HtmlInputElement>().value()))
                                    })}
                                />
                                { field_error(component, "discount") }
                            </>
                        }
                    } else {
                        html! {}
                    }
                }

                <label>{"Short description"}</label>
                <input
                    value={form.short_description.clone()}
                    oninput={link.callback(|e: InputEvent| {
                        Msg::Field(FormField::ShortDescription(e.target_unchecked_into::<HtmlInputElement>().value()))
                    })}
                />

                <label>{"Description"}</label>
                <textarea
                    value={form.description.clone()}
                    oninput={link.callback(|e: InputEvent| {
                        Msg::Field(FormField::Description(e.target_unchecked_into::<HtmlTextAreaElement>().value()))
                    })}
                />

                <label>{"Thumbnail URL"}</label>
                <input
                    placeholder="https://..."
                    value={form.thumbnail_url.clone()}
                    oninput={link.callback(|e: InputEvent| {
                        Msg::Field(FormField::ThumbnailUrl(e.target_unchecked_into::<HtmlInputElement>().value()))
                    })}
                />
                { field_error(component, "thumbnail") }

                <div class="dialog-actions">
                    <button disabled={component.saving} onclick={link.callback(|_| Msg::Submit)}>
                        { if component.saving { "Saving..." } else { "Save" } }
                    </button>
                    <button class="link-btn" onclick={link.callback(|_| Msg::CloseForm)}>
                        {"Cancel"}
                    </button>
                </div>
            </div>
        </TopSheet>
    }
}

fn field_error(component: &CoursesPage, field: &str) -> Html {
    match component.form_error(field) {
        Some(message) => html! { <span class="field-error">{ message }</span> },
        None => html! {},
    }
}
