//! Request payloads sent to the platform API, including the type-aware
//! shaping of lesson field updates.

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::model::course::{ApprovalState, CourseStatus};
use crate::model::curriculum::{LessonType, VideoSource};

/// Title written in place of an empty one so a lesson never persists blank.
pub const DEFAULT_LESSON_TITLE: &str = "Untitled lesson";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCourseRequest {
    pub title: String,
    pub category: String,
    pub status: CourseStatus,
    pub is_free: bool,
    pub price: f64,
    pub discount_percentage: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub short_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
}

/// Partial course update; only the fields actually present go on the wire.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCourseRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<CourseStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approval: Option<ApprovalState>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_free: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_percentage: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub short_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateSectionRequest {
    pub title: String,
    pub order: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateLessonRequest {
    pub title: String,
    #[serde(rename = "type")]
    pub lesson_type: LessonType,
    pub duration_minutes: u32,
    pub is_preview: bool,
    pub order: u32,
}

/// Query parameters shared by every list endpoint.
#[derive(Debug, Clone, Default)]
pub struct ListQuery {
    pub page: u64,
    pub limit: u64,
    pub status: Option<String>,
    pub q: Option<String>,
}

impl ListQuery {
    pub fn new(page: u64, limit: u64) -> Self {
        Self {
            page,
            limit,
            ..Default::default()
        }
    }

    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("page", self.page.to_string()),
            ("limit", self.limit.to_string()),
        ];
        if let Some(status) = self.status.as_deref().filter(|s| !s.is_empty()) {
            pairs.push(("status", status.to_string()));
        }
        if let Some(q) = self.q.as_deref().map(str::trim).filter(|q| !q.is_empty()) {
            pairs.push(("q", q.to_string()));
        }
        pairs
    }
}

/// One editable lesson field together with the raw value the user entered.
///
/// `payload` turns it into the exact JSON the backend expects. The resource
/// field is the subtle one: its wire shape depends on the lesson's CURRENT
/// type, and the client always writes the full resource pair so a stale
/// value of the other representation cannot survive a type switch.
#[derive(Debug, Clone, PartialEq)]
pub enum LessonFieldPatch {
    Title(String),
    /// Raw text from the duration input; coerced to an integer, blank -> 0.
    Duration(String),
    Type(LessonType),
    /// The unified resource field of the editor.
    Resource(String),
    Preview(bool),
}

impl LessonFieldPatch {
    pub fn payload(&self, current_type: LessonType) -> Value {
        match self {
            LessonFieldPatch::Title(raw) => {
                let title = if raw.trim().is_empty() {
                    DEFAULT_LESSON_TITLE
                } else {
                    raw.as_str()
                };
                json!({ "title": title })
            }
            LessonFieldPatch::Duration(raw) => {
                let minutes: u32 = raw.trim().parse().unwrap_or(0);
                json!({ "durationMinutes": minutes })
            }
            LessonFieldPatch::Type(lesson_type) => json!({ "type": lesson_type }),
            LessonFieldPatch::Resource(raw) => {
                let trimmed = raw.trim();
                if current_type == LessonType::Video {
                    // videoUrl is an empty string (not null) when cleared;
                    // resourceUrl is explicitly dropped.
                    json!({
                        "videoUrl": trimmed,
                        "videoSource": VideoSource::detect(trimmed),
                        "resourceUrl": Value::Null,
                    })
                } else {
                    // videoSource must never appear here, not even as null;
                    // the backend rejects the request otherwise.
                    let resource = if trimmed.is_empty() {
                        Value::Null
                    } else {
                        Value::String(trimmed.to_string())
                    };
                    json!({
                        "resourceUrl": resource,
                        "videoUrl": Value::Null,
                    })
                }
            }
            LessonFieldPatch::Preview(preview) => json!({ "isPreview": preview }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_title_is_coerced_to_the_placeholder() {
        let payload = LessonFieldPatch::Title("   ".into()).payload(LessonType::Text);
        assert_eq!(payload, json!({ "title": DEFAULT_LESSON_TITLE }));
        let payload = LessonFieldPatch::Title("Welcome".into()).payload(LessonType::Text);
        assert_eq!(payload, json!({ "title": "Welcome" }));
    }

    #[test]
    fn duration_coerces_to_integer_with_zero_fallback() {
        assert_eq!(
            LessonFieldPatch::Duration(" 45 ".into()).payload(LessonType::Video),
            json!({ "durationMinutes": 45 })
        );
        assert_eq!(
            LessonFieldPatch::Duration("".into()).payload(LessonType::Video),
            json!({ "durationMinutes": 0 })
        );
        assert_eq!(
            LessonFieldPatch::Duration("abc".into()).payload(LessonType::Video),
            json!({ "durationMinutes": 0 })
        );
    }

    #[test]
    fn video_resource_tags_youtube_and_clears_resource_url() {
        let payload =
            LessonFieldPatch::Resource("https://youtu.be/abc ".into()).payload(LessonType::Video);
        assert_eq!(payload["videoUrl"], "https://youtu.be/abc");
        assert_eq!(payload["videoSource"], "youtube");
        assert_eq!(payload["resourceUrl"], Value::Null);
    }

    #[test]
    fn video_resource_defaults_to_upload_source() {
        let payload = LessonFieldPatch::Resource("https://cdn.example.com/v.mp4".into())
            .payload(LessonType::Video);
        assert_eq!(payload["videoSource"], "upload");
    }

    #[test]
    fn cleared_video_resource_sends_empty_string_not_null() {
        let payload = LessonFieldPatch::Resource("".into()).payload(LessonType::Video);
        assert_eq!(payload["videoUrl"], "");
        assert_eq!(payload["resourceUrl"], Value::Null);
    }

    #[test]
    fn non_video_resource_never_carries_video_source() {
        let payload = LessonFieldPatch::Resource("https://example.com/doc.pdf".into())
            .payload(LessonType::Text);
        assert_eq!(payload["resourceUrl"], "https://example.com/doc.pdf");
        assert_eq!(payload["videoUrl"], Value::Null);
        assert!(payload.as_object().unwrap().get("videoSource").is_none());
    }

    #[test]
    fn cleared_non_video_resource_sends_null() {
        let payload = LessonFieldPatch::Resource("   ".into()).payload(LessonType::Pdf);
        assert_eq!(payload["resourceUrl"], Value::Null);
        assert!(payload.as_object().unwrap().get("videoSource").is_none());
    }

    #[test]
    fn type_switch_only_changes_the_type_field() {
        let payload = LessonFieldPatch::Type(LessonType::Quiz).payload(LessonType::Video);
        assert_eq!(payload, json!({ "type": "quiz" }));
    }

    #[test]
    fn create_lesson_request_round_trips_through_the_wire_shape() {
        use crate::envelope::decode_entity;
        use crate::model::curriculum::Lesson;

        let request = CreateLessonRequest {
            title: "Intro".into(),
            lesson_type: LessonType::Video,
            duration_minutes: 0,
            is_preview: false,
            order: 2,
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["type"], "video");
        assert_eq!(value["durationMinutes"], 0);
        assert_eq!(value["order"], 2);

        // A server echoing these fields back (with its own _id) parses into
        // the canonical lesson with the same title/type/order.
        let mut echoed = value;
        echoed["_id"] = json!("l1");
        let lesson: Lesson = decode_entity(echoed).unwrap();
        assert_eq!(lesson.id, "l1");
        assert_eq!(lesson.title, "Intro");
        assert_eq!(lesson.lesson_type, LessonType::Video);
        assert_eq!(lesson.order, 2);
    }

    #[test]
    fn list_query_skips_blank_filters() {
        let mut query = ListQuery::new(2, 20);
        query.status = Some(String::new());
        query.q = Some("  rust  ".into());
        assert_eq!(
            query.to_pairs(),
            vec![
                ("page", "2".to_string()),
                ("limit", "20".to_string()),
                ("q", "rust".to_string()),
            ]
        );
    }
}
