//! State for the course list page and its create/edit form.

use common::model::course::{Course, CourseStatus, KNOWN_CATEGORIES};
use yew::prelude::*;

pub struct CoursesPage {
    pub courses: Vec<Course>,
    pub total: u64,
    pub page: u64,
    pub limit: u64,
    pub status_filter: String,
    pub search: String,

    pub loading: bool,
    pub saving: bool,
    pub error: Option<String>,

    pub form: CourseForm,
    /// Inline validation messages keyed by field name.
    pub form_errors: Vec<(&'static str, String)>,
    /// `Some(course id)` while editing, `None` while creating.
    pub editing_id: Option<String>,
    /// Hash of the form payload at open time, for the unsaved-changes dot.
    pub original_md5: Option<String>,
    pub form_dialog_ref: NodeRef,

    pub loaded: bool,
}

/// Local form state; numeric fields hold raw input text until submit.
#[derive(Clone, Default)]
pub struct CourseForm {
    pub title: String,
    pub category: String,
    pub category_other: String,
    pub status: CourseStatus,
    pub is_free: bool,
    pub price: String,
    pub discount: String,
    pub description: String,
    pub short_description: String,
    pub thumbnail_url: String,
}

impl CourseForm {
    pub fn new() -> Self {
        Self {
            category: KNOWN_CATEGORIES[0].to_string(),
            ..Default::default()
        }
    }

    pub fn from_course(course: &Course) -> Self {
        let (category, category_other) = if KNOWN_CATEGORIES.contains(&course.category.as_str()) {
            (course.category.clone(), String::new())
        } else if course.category.is_empty() {
            (KNOWN_CATEGORIES[0].to_string(), String::new())
        } else {
            ("other".to_string(), course.category.clone())
        };
        Self {
            title: course.title.clone(),
            category,
            category_other,
            status: course.status,
            is_free: course.is_free,
            price: course.price.to_string(),
            discount: course.discount_percentage.to_string(),
            description: course.description.clone().unwrap_or_default(),
            short_description: course.short_description.clone().unwrap_or_default(),
            thumbnail_url: course.thumbnail_url.clone().unwrap_or_default(),
        }
    }

    /// The category that goes on the wire: the free-text value when the
    /// "other" escape hatch is selected.
    pub fn effective_category(&self) -> String {
        if self.category == "other" {
            self.category_other.trim().to_string()
        } else {
            self.category.clone()
        }
    }
}

impl CoursesPage {
    pub fn new() -> Self {
        Self {
            courses: Vec::new(),
            total: 0,
            page: 1,
            limit: 20,
            status_filter: String::new(),
            search: String::new(),
            loading: true,
            saving: false,
            error: None,
            form: CourseForm::new(),
            form_errors: Vec::new(),
            editing_id: None,
            original_md5: None,
            form_dialog_ref: Default::default(),
            loaded: false,
        }
    }

    pub fn form_error(&self, field: &str) -> Option<&str> {
        self.form_errors
            .iter()
            .find(|(name, _)| *name == field)
            .map(|(_, message)| message.as_str())
    }

    pub fn page_count(&self) -> u64 {
        let limit = self.limit.max(1);
        ((self.total + limit - 1) / limit).max(1)
    }
}
