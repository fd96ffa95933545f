//! Validation, payload building, and display formatting for the course
//! form and table.

use common::model::course::CourseStatus;
use common::requests::{CreateCourseRequest, UpdateCourseRequest};
use num_format::{Locale, ToFormattedString};

use crate::components::validate::looks_like_url;

use super::state::CourseForm;

/// Pre-submission checks; a non-empty result blocks the request and is
/// rendered inline under the offending fields.
pub fn validate(form: &CourseForm) -> Vec<(&'static str, String)> {
    let mut errors = Vec::new();
    if form.title.trim().is_empty() {
        errors.push(("title", "Title is required.".to_string()));
    }
    if form.category == "other" && form.category_other.trim().is_empty() {
        errors.push(("category", "Name the category.".to_string()));
    }
    if !form.is_free {
        match form.price.trim().parse::<f64>() {
            Ok(price) if price >= 0.0 => {}
            _ => errors.push(("price", "Enter a price of 0 or more.".to_string())),
        }
    }
    if !form.discount.trim().is_empty() {
        match form.discount.trim().parse::<f64>() {
            Ok(discount) if (0.0..=100.0).contains(&discount) => {}
            _ => errors.push(("discount", "Discount must be between 0 and 100.".to_string())),
        }
    }
    let thumbnail = form.thumbnail_url.trim();
    if !thumbnail.is_empty() && !looks_like_url(thumbnail) {
        errors.push(("thumbnail", "Enter a full URL or leave it empty.".to_string()));
    }
    errors
}

/// Builds the create payload from a validated form.
pub fn to_create_request(form: &CourseForm) -> CreateCourseRequest {
    CreateCourseRequest {
        title: form.title.trim().to_string(),
        category: form.effective_category(),
        status: form.status,
        is_free: form.is_free,
        price: parsed_price(form),
        discount_percentage: form.discount.trim().parse().unwrap_or(0.0),
        description: non_empty(&form.description),
        short_description: non_empty(&form.short_description),
        thumbnail_url: non_empty(&form.thumbnail_url),
    }
}

/// Builds the edit payload; the form edits every field, so all of them go
/// on the wire (the PATCH stays partial with respect to fields the form
/// does not own, like approval).
pub fn to_update_request(form: &CourseForm) -> UpdateCourseRequest {
    UpdateCourseRequest {
        title: Some(form.title.trim().to_string()),
        category: Some(form.effective_category()),
        status: Some(form.status),
        approval: None,
        is_free: Some(form.is_free),
        price: Some(parsed_price(form)),
        discount_percentage: Some(form.discount.trim().parse().unwrap_or(0.0)),
        description: Some(form.description.trim().to_string()),
        short_description: Some(form.short_description.trim().to_string()),
        thumbnail_url: Some(form.thumbnail_url.trim().to_string()),
    }
}

fn parsed_price(form: &CourseForm) -> f64 {
    if form.is_free {
        0.0
    } else {
        form.price.trim().parse().unwrap_or(0.0)
    }
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Fingerprint of the form's outgoing payload, used for the
/// unsaved-changes dot on the form header.
pub fn form_md5(form: &CourseForm) -> String {
    let payload = to_create_request(form);
    let serialized = serde_json::to_string(&payload).unwrap_or_default();
    format!("{:x}", md5::compute(serialized))
}

pub fn format_price(price: f64, is_free: bool) -> String {
    if is_free {
        return "Free".to_string();
    }
    let cents = (price * 100.0).round() as i64;
    let whole = (cents / 100).to_formatted_string(&Locale::en);
    format!("${}.{:02}", whole, (cents % 100).abs())
}

pub fn status_options() -> [CourseStatus; 3] {
    [
        CourseStatus::Draft,
        CourseStatus::Published,
        CourseStatus::Archived,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> CourseForm {
        CourseForm {
            title: "Intro to Rust".into(),
            category: "development".into(),
            price: "49.99".into(),
            ..CourseForm::new()
        }
    }

    #[test]
    fn valid_form_passes() {
        assert!(validate(&valid_form()).is_empty());
    }

    #[test]
    fn missing_title_and_bad_price_are_reported_per_field() {
        let mut form = valid_form();
        form.title = "  ".into();
        form.price = "-5".into();
        let errors = validate(&form);
        assert!(errors.iter().any(|(field, _)| *field == "title"));
        assert!(errors.iter().any(|(field, _)| *field == "price"));
    }

    #[test]
    fn free_courses_skip_the_price_check() {
        let mut form = valid_form();
        form.is_free = true;
        form.price = "not a number".into();
        assert!(validate(&form).is_empty());
        assert_eq!(to_create_request(&form).price, 0.0);
    }

    #[test]
    fn other_category_uses_the_free_text() {
        let mut form = valid_form();
        form.category = "other".into();
        form.category_other = " photography ".into();
        assert_eq!(to_create_request(&form).category, "photography");
    }

    #[test]
    fn price_formats_with_separators() {
        assert_eq!(format_price(1234.5, false), "$1,234.50");
        assert_eq!(format_price(0.0, true), "Free");
    }

    #[test]
    fn form_fingerprint_tracks_edits() {
        let form = valid_form();
        let before = form_md5(&form);
        let mut edited = form.clone();
        edited.title = "Intro to Rust, 2nd edition".into();
        assert_ne!(before, form_md5(&edited));
        assert_eq!(before, form_md5(&form.clone()));
    }
}
