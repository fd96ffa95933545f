//! Update function for the course list page.

use yew::platform::spawn_local;
use yew::prelude::*;

use common::requests::ListQuery;

use crate::api;
use crate::components::notify::show_toast;
use crate::components::top_sheet::{close_top_sheet, open_top_sheet};

use super::helpers;
use super::messages::{FormField, Msg};
use super::state::{CourseForm, CoursesPage};

pub fn update(component: &mut CoursesPage, ctx: &Context<CoursesPage>, msg: Msg) -> bool {
    match msg {
        Msg::Load => {
            component.loading = true;
            let mut query = ListQuery::new(component.page, component.limit);
            query.status = Some(component.status_filter.clone());
            query.q = Some(component.search.clone());
            let client = ctx.props().client.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                match api::courses::list(&client, &query).await {
                    Ok(page) => link.send_message(Msg::Loaded(page)),
                    Err(err) => link.send_message(Msg::LoadFailed(err.to_string())),
                }
            });
            true
        }
        Msg::Loaded(page) => {
            component.loading = false;
            component.courses = page.items;
            component.total = page.total;
            component.page = page.page.max(1);
            if page.limit > 0 {
                component.limit = page.limit;
            }
            true
        }
        Msg::LoadFailed(message) => {
            component.loading = false;
            component.error = Some(message);
            true
        }

        Msg::SetStatusFilter(status) => {
            component.status_filter = status;
            component.page = 1;
            ctx.link().send_message(Msg::Load);
            true
        }
        Msg::SetSearch(search) => {
            component.search = search;
            true
        }
        Msg::Search => {
            component.page = 1;
            ctx.link().send_message(Msg::Load);
            true
        }
        Msg::PrevPage => {
            if component.page <= 1 {
                return false;
            }
            component.page -= 1;
            ctx.link().send_message(Msg::Load);
            true
        }
        Msg::NextPage => {
            if component.page >= component.page_count() {
                return false;
            }
            component.page += 1;
            ctx.link().send_message(Msg::Load);
            true
        }

        Msg::OpenCreate => {
            component.editing_id = None;
            component.form = CourseForm::new();
            component.form_errors.clear();
            component.original_md5 = Some(helpers::form_md5(&component.form));
            open_top_sheet(component.form_dialog_ref.clone());
            true
        }
        Msg::OpenEdit(course_id) => {
            let Some(course) = component.courses.iter().find(|c| c.id == course_id) else {
                return false;
            };
            component.form = CourseForm::from_course(course);
            component.editing_id = Some(course_id);
            component.form_errors.clear();
            component.original_md5 = Some(helpers::form_md5(&component.form));
            open_top_sheet(component.form_dialog_ref.clone());
            true
        }
        Msg::CloseForm => {
            close_top_sheet(component.form_dialog_ref.clone());
            true
        }
        Msg::Field(field) => {
            apply_field(&mut component.form, &mut component.form_errors, field);
            true
        }
        Msg::Submit => {
            if component.saving {
                return false;
            }
            let errors = helpers::validate(&component.form);
            if !errors.is_empty() {
                component.form_errors = errors;
                return true;
            }
            component.form_errors.clear();
            component.saving = true;
            let client = ctx.props().client.clone();
            let link = ctx.link().clone();
            match component.editing_id.clone() {
                Some(course_id) => {
                    let request = helpers::to_update_request(&component.form);
                    spawn_local(async move {
                        match api::courses::update(&client, &course_id, &request).await {
                            Ok(course) => link.send_message(Msg::Saved(course)),
                            Err(err) => link.send_message(Msg::SaveFailed(err.to_string())),
                        }
                    });
                }
                None => {
                    let request = helpers::to_create_request(&component.form);
                    spawn_local(async move {
                        match api::courses::create(&client, &request).await {
                            Ok(course) => link.send_message(Msg::Saved(course)),
                            Err(err) => link.send_message(Msg::SaveFailed(err.to_string())),
                        }
                    });
                }
            }
            true
        }
        Msg::Saved(course) => {
            component.saving = false;
            match component.editing_id.take() {
                Some(_) => {
                    if let Some(slot) = component.courses.iter_mut().find(|c| c.id == course.id) {
                        *slot = course;
                    }
                    show_toast("Course updated.");
                }
                None => {
                    component.courses.insert(0, course);
                    component.total += 1;
                    show_toast("Course created.");
                }
            }
            close_top_sheet(component.form_dialog_ref.clone());
            true
        }
        Msg::SaveFailed(message) => {
            component.saving = false;
            component.error = Some(message);
            true
        }

        Msg::Delete(course_id) => {
            if component.saving {
                return false;
            }
            component.saving = true;
            let client = ctx.props().client.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                match api::courses::remove(&client, &course_id).await {
                    Ok(()) => link.send_message(Msg::Deleted(course_id)),
                    Err(err) => link.send_message(Msg::RequestFailed(err.to_string())),
                }
            });
            true
        }
        Msg::Deleted(course_id) => {
            component.saving = false;
            component.courses.retain(|c| c.id != course_id);
            component.total = component.total.saturating_sub(1);
            show_toast("Course deleted.");
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

/// Writes one edited field into the form and clears that field's inline
/// error so the user sees it disappear as they fix it.
fn apply_field(
    form: &mut CourseForm,
    errors: &mut Vec<(&'static str, String)>,
    field: FormField,
) {
    let cleared = match field {
        FormField::Title(value) => {
            form.title = value;
            "title"
        }
        FormField::Category(value) => {
            form.category = value;
            "category"
        }
        FormField::CategoryOther(value) => {
            form.category_other = value;
            "category"
        }
        FormField::Status(value) => {
            form.status = value;
            "status"
        }
        FormField::IsFree(value) => {
            form.is_free = value;
            "price"
        }
        FormField::Price(value) => {
            form.price = value;
            "price"
        }
        FormField::Discount(value) => {
            form.discount = value;
            "discount"
        }
        FormField::Description(value) => {
            form.description = value;
            "description"
        }
        FormField::ShortDescription(value) => {
            form.short_description = value;
            "description"
        }
        FormField::ThumbnailUrl(value) => {
            form.thumbnail_url = value;
            "thumbnail"
        }
    };
    errors.retain(|(name, _)| *name != cleared);
}
