//! Curriculum endpoints: sections, lessons, and the bulk order fan-out.

use common::envelope::{decode_entity, normalize_entity};
use common::model::curriculum::{Lesson, Section};
use common::requests::{CreateLessonRequest, CreateSectionRequest};
use futures_util::future::join_all;
use serde_json::{Value, json};

use super::{ApiClient, ApiError};

/// `GET /courses/:id/curriculum` returns `{sections: [{..., lessons}]}`,
/// possibly wrapped in `data`, occasionally a bare section array.
pub async fn fetch(client: &ApiClient, course_id: &str) -> Result<Vec<Section>, ApiError> {
    let body = client
        .get(&format!("/courses/{course_id}/curriculum"), &[])
        .await?;
    let entity = normalize_entity(body);
    let sections = match entity {
        Value::Array(_) => entity,
        other => other
            .get("sections")
            .cloned()
            .unwrap_or_else(|| Value::Array(Vec::new())),
    };
    serde_json::from_value(sections).map_err(|err| ApiError::Shape(err.to_string()))
}

pub async fn create_section(
    client: &ApiClient,
    course_id: &str,
    request: &CreateSectionRequest,
) -> Result<Section, ApiError> {
    let body = client
        .post(&format!("/courses/{course_id}/sections"), request)
        .await?;
    Ok(decode_entity(body)?)
}

pub async fn rename_section(
    client: &ApiClient,
    section_id: &str,
    title: &str,
) -> Result<Section, ApiError> {
    let body = client
        .patch(&format!("/sections/{section_id}"), &json!({ "title": title }))
        .await?;
    Ok(decode_entity(body)?)
}

pub async fn delete_section(client: &ApiClient, section_id: &str) -> Result<(), ApiError> {
    client.delete(&format!("/sections/{section_id}")).await
}

pub async fn create_lesson(
    client: &ApiClient,
    course_id: &str,
    section_id: &str,
    request: &CreateLessonRequest,
) -> Result<Lesson, ApiError> {
    let body = client
        .post(
            &format!("/courses/{course_id}/sections/{section_id}/lessons"),
            request,
        )
        .await?;
    Ok(decode_entity(body)?)
}

/// One field-level lesson update; the payload comes pre-shaped from
/// `LessonFieldPatch::payload`.
pub async fn patch_lesson(
    client: &ApiClient,
    lesson_id: &str,
    payload: &Value,
) -> Result<Lesson, ApiError> {
    let body = client
        .patch(&format!("/lessons/{lesson_id}"), payload)
        .await?;
    Ok(decode_entity(body)?)
}

pub async fn delete_lesson(client: &ApiClient, lesson_id: &str) -> Result<(), ApiError> {
    client.delete(&format!("/lessons/{lesson_id}")).await
}

/// Persists the ENTIRE renumbered section set after a move, one PATCH per
/// sibling, all in parallel. Waits for every call to settle; the first
/// failure (if any) is reported, local state is not rolled back.
pub async fn persist_section_orders(
    client: &ApiClient,
    sections: &[Section],
) -> Result<(), ApiError> {
    let calls = sections.iter().map(|section| {
        let path = format!("/sections/{}", section.id);
        let payload = json!({ "order": section.order });
        async move { client.patch(&path, &payload).await }
    });
    first_failure(join_all(calls).await)
}

/// Same fan-out for the lessons of one section.
pub async fn persist_lesson_orders(client: &ApiClient, lessons: &[Lesson]) -> Result<(), ApiError> {
    let calls = lessons.iter().map(|lesson| {
        let path = format!("/lessons/{}", lesson.id);
        let payload = json!({ "order": lesson.order });
        async move { client.patch(&path, &payload).await }
    });
    first_failure(join_all(calls).await)
}

fn first_failure(results: Vec<Result<Value, ApiError>>) -> Result<(), ApiError> {
    for result in results {
        result?;
    }
    Ok(())
}
