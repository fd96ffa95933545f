use serde::{Deserialize, Serialize};

/// Categories offered in the authoring form dropdown. The backend stores
/// category as free text, so anything outside this list is legal and lands
/// in the "other" bucket of the form.
pub const KNOWN_CATEGORIES: &[&str] = &[
    "development",
    "business",
    "design",
    "marketing",
    "language",
    "science",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub status: CourseStatus,
    #[serde(default)]
    pub approval: ApprovalState,
    #[serde(default)]
    pub is_free: bool,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub discount_percentage: f64,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub short_description: Option<String>,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CourseStatus {
    #[default]
    Draft,
    Published,
    Archived,
}

impl CourseStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            CourseStatus::Draft => "draft",
            CourseStatus::Published => "published",
            CourseStatus::Archived => "archived",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ApprovalState {
    #[default]
    Pending,
    Approved,
    Rejected,
    InReview,
}

impl ApprovalState {
    pub fn as_str(self) -> &'static str {
        match self {
            ApprovalState::Pending => "pending",
            ApprovalState::Approved => "approved",
            ApprovalState::Rejected => "rejected",
            ApprovalState::InReview => "in-review",
        }
    }
}

/// One row of the category strip above the course table: a grouped view
/// derived from the flat course list, nothing is fetched for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySummary {
    pub category: String,
    pub courses: u32,
    pub published: u32,
    pub free: u32,
}

/// Groups a flat course list by category, preserving first-seen order.
/// Courses with a blank category are grouped under "uncategorized".
pub fn summarize_by_category(courses: &[Course]) -> Vec<CategorySummary> {
    let mut summaries: Vec<CategorySummary> = Vec::new();
    for course in courses {
        let category = if course.category.trim().is_empty() {
            "uncategorized"
        } else {
            course.category.trim()
        };
        let entry = match summaries.iter_mut().find(|s| s.category == category) {
            Some(existing) => existing,
            None => {
                summaries.push(CategorySummary {
                    category: category.to_string(),
                    courses: 0,
                    published: 0,
                    free: 0,
                });
                summaries.last_mut().unwrap()
            }
        };
        entry.courses += 1;
        if course.status == CourseStatus::Published {
            entry.published += 1;
        }
        if course.is_free {
            entry.free += 1;
        }
    }
    summaries
}

#[cfg(test)]
mod tests {
    use super::*;

    fn course(category: &str, status: CourseStatus, is_free: bool) -> Course {
        Course {
            id: "c1".into(),
            title: "A course".into(),
            category: category.into(),
            status,
            approval: ApprovalState::Approved,
            is_free,
            price: 25.0,
            discount_percentage: 0.0,
            description: None,
            short_description: None,
            thumbnail_url: None,
        }
    }

    #[test]
    fn summary_groups_by_category_in_first_seen_order() {
        let courses = vec![
            course("design", CourseStatus::Published, false),
            course("development", CourseStatus::Draft, true),
            course("design", CourseStatus::Draft, true),
        ];
        let summary = summarize_by_category(&courses);
        assert_eq!(summary.len(), 2);
        assert_eq!(summary[0].category, "design");
        assert_eq!(summary[0].courses, 2);
        assert_eq!(summary[0].published, 1);
        assert_eq!(summary[0].free, 1);
        assert_eq!(summary[1].category, "development");
        assert_eq!(summary[1].courses, 1);
    }

    #[test]
    fn blank_category_lands_in_uncategorized() {
        let courses = vec![course("  ", CourseStatus::Draft, false)];
        let summary = summarize_by_category(&courses);
        assert_eq!(summary[0].category, "uncategorized");
    }

    #[test]
    fn approval_state_uses_kebab_case_on_the_wire() {
        let state: ApprovalState = serde_json::from_str("\"in-review\"").unwrap();
        assert_eq!(state, ApprovalState::InReview);
        assert_eq!(serde_json::to_string(&state).unwrap(), "\"in-review\"");
    }
}
