//! Small pure helpers for the curriculum editor views.

use common::model::curriculum::LessonType;

/// Maps a `<select>` value back to a lesson type; unknown values fall
/// back to video, the first option.
pub fn parse_lesson_type(value: &str) -> LessonType {
    match value {
        "pdf" => LessonType::Pdf,
        "text" => LessonType::Text,
        "quiz" => LessonType::Quiz,
        _ => LessonType::Video,
    }
}

pub fn format_minutes(total: u32) -> String {
    if total >= 60 {
        format!("{}h {:02}m", total / 60, total % 60)
    } else {
        format!("{total}m")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minutes_format_rolls_over_hours() {
        assert_eq!(format_minutes(45), "45m");
        assert_eq!(format_minutes(60), "1h 00m");
        assert_eq!(format_minutes(135), "2h 15m");
    }
}
