//! Curriculum tree: sections owned by a course, lessons owned by a section.
//!
//! The `order` field of both sections and lessons is 1-based and dense
//! within its sibling set (exactly `{1..N}`, no gaps, no duplicates). The
//! ordering engine renumbers the full sibling set after every move so the
//! invariant holds even if stored values had drifted.
//!
//! A lesson carries exactly one meaningful resource representation selected
//! by its type: `video_url` + `video_source` for video lessons,
//! `resource_url` for everything else. `display_url` resolves the pair into
//! the single value the editor shows.

use serde::{Deserialize, Serialize};

/// Values of `resource_url` starting with this prefix are local-only stubs
/// written by the uploader before a real URL exists; they are never shown
/// in the editor's resource field.
pub const LOCAL_RESOURCE_PREFIX: &str = "local://";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub order: u32,
    #[serde(default)]
    pub lessons: Vec<Lesson>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lesson {
    pub id: String,
    pub title: String,
    #[serde(rename = "type", default)]
    pub lesson_type: LessonType,
    #[serde(default)]
    pub duration_minutes: u32,
    #[serde(default)]
    pub is_preview: bool,
    #[serde(default)]
    pub order: u32,
    #[serde(default)]
    pub video_url: Option<String>,
    #[serde(default)]
    pub video_source: Option<VideoSource>,
    #[serde(default)]
    pub resource_url: Option<String>,
}

impl Lesson {
    /// The single resource value shown in the editor, resolved type-aware:
    /// video lessons prefer `video_url`; everything else falls back to
    /// `resource_url` unless it is a local-only stub.
    pub fn display_url(&self) -> Option<&str> {
        if self.lesson_type == LessonType::Video {
            if let Some(url) = self.video_url.as_deref() {
                if !url.is_empty() {
                    return Some(url);
                }
            }
        }
        match self.resource_url.as_deref() {
            Some(url) if !url.is_empty() && !url.starts_with(LOCAL_RESOURCE_PREFIX) => Some(url),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LessonType {
    #[default]
    Video,
    Pdf,
    Text,
    Quiz,
}

impl LessonType {
    pub fn as_str(self) -> &'static str {
        match self {
            LessonType::Video => "video",
            LessonType::Pdf => "pdf",
            LessonType::Text => "text",
            LessonType::Quiz => "quiz",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VideoSource {
    Youtube,
    Upload,
}

impl VideoSource {
    /// Tags a video URL by host: YouTube domains map to `Youtube`, anything
    /// else (including unparsable values) to the platform's own `Upload`
    /// source.
    pub fn detect(url: &str) -> VideoSource {
        let rest = url
            .trim()
            .strip_prefix("https://")
            .or_else(|| url.trim().strip_prefix("http://"))
            .unwrap_or(url.trim());
        let host = rest.split(['/', '?']).next().unwrap_or("");
        let host = host.strip_prefix("www.").unwrap_or(host);
        let host = host.strip_prefix("m.").unwrap_or(host);
        if host == "youtube.com" || host == "youtu.be" || host.ends_with(".youtube.com") {
            VideoSource::Youtube
        } else {
            VideoSource::Upload
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            VideoSource::Youtube => "youtube",
            VideoSource::Upload => "upload",
        }
    }
}

/// Figures shown in the editor's metrics pane. Recomputed by summing over
/// the in-memory tree on every render; trees are tens of items, not
/// thousands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CurriculumSummary {
    pub sections: u32,
    pub lessons: u32,
    pub total_minutes: u32,
    pub previews: u32,
}

impl CurriculumSummary {
    pub fn from_sections(sections: &[Section]) -> Self {
        let mut summary = CurriculumSummary {
            sections: sections.len() as u32,
            ..Default::default()
        };
        for section in sections {
            for lesson in &section.lessons {
                summary.lessons += 1;
                summary.total_minutes += lesson.duration_minutes;
                if lesson.is_preview {
                    summary.previews += 1;
                }
            }
        }
        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lesson(lesson_type: LessonType) -> Lesson {
        Lesson {
            id: "l1".into(),
            title: "Intro".into(),
            lesson_type,
            duration_minutes: 10,
            is_preview: false,
            order: 1,
            video_url: None,
            video_source: None,
            resource_url: None,
        }
    }

    #[test]
    fn detect_recognizes_youtube_hosts() {
        assert_eq!(
            VideoSource::detect("https://www.youtube.com/watch?v=abc"),
            VideoSource::Youtube
        );
        assert_eq!(VideoSource::detect("https://youtu.be/abc"), VideoSource::Youtube);
        assert_eq!(
            VideoSource::detect("http://m.youtube.com/watch?v=abc"),
            VideoSource::Youtube
        );
        assert_eq!(
            VideoSource::detect("https://music.youtube.com/watch?v=abc"),
            VideoSource::Youtube
        );
    }

    #[test]
    fn detect_defaults_to_upload() {
        assert_eq!(
            VideoSource::detect("https://cdn.example.com/video.mp4"),
            VideoSource::Upload
        );
        assert_eq!(VideoSource::detect("not a url"), VideoSource::Upload);
        // Lookalike domain must not match the host check.
        assert_eq!(
            VideoSource::detect("https://notyoutube.com/v/abc"),
            VideoSource::Upload
        );
    }

    #[test]
    fn display_url_prefers_video_url_for_video_lessons() {
        let mut l = lesson(LessonType::Video);
        l.video_url = Some("https://youtu.be/abc".into());
        l.resource_url = Some("https://example.com/old.pdf".into());
        assert_eq!(l.display_url(), Some("https://youtu.be/abc"));
    }

    #[test]
    fn display_url_falls_back_to_resource_url() {
        let mut l = lesson(LessonType::Text);
        l.video_url = Some("https://youtu.be/stale".into());
        l.resource_url = Some("https://example.com/doc.pdf".into());
        assert_eq!(l.display_url(), Some("https://example.com/doc.pdf"));
    }

    #[test]
    fn display_url_hides_local_stubs() {
        let mut l = lesson(LessonType::Pdf);
        l.resource_url = Some("local://pending-upload/doc.pdf".into());
        assert_eq!(l.display_url(), None);
    }

    #[test]
    fn summary_sums_over_the_tree() {
        let mut a = lesson(LessonType::Video);
        a.is_preview = true;
        a.duration_minutes = 12;
        let mut b = lesson(LessonType::Text);
        b.duration_minutes = 8;
        let sections = vec![
            Section {
                id: "s1".into(),
                title: "One".into(),
                order: 1,
                lessons: vec![a],
            },
            Section {
                id: "s2".into(),
                title: "Two".into(),
                order: 2,
                lessons: vec![b],
            },
        ];
        let summary = CurriculumSummary::from_sections(&sections);
        assert_eq!(summary.sections, 2);
        assert_eq!(summary.lessons, 2);
        assert_eq!(summary.total_minutes, 20);
        assert_eq!(summary.previews, 1);
    }

    #[test]
    fn lesson_type_rides_the_type_wire_field() {
        let json = serde_json::json!({
            "id": "l9",
            "title": "Reading",
            "type": "pdf",
            "durationMinutes": 5
        });
        let l: Lesson = serde_json::from_value(json).unwrap();
        assert_eq!(l.lesson_type, LessonType::Pdf);
        assert_eq!(l.duration_minutes, 5);
    }
}
