//! Course endpoints: thin pass-throughs returning gateway-normalized types.

use common::envelope::{decode_entity, decode_list};
use common::model::course::Course;
use common::model::page::Page;
use common::requests::{CreateCourseRequest, ListQuery, UpdateCourseRequest};

use super::{ApiClient, ApiError};

pub async fn list(client: &ApiClient, query: &ListQuery) -> Result<Page<Course>, ApiError> {
    let body = client.get("/courses", &query.to_pairs()).await?;
    Ok(decode_list(body)?)
}

pub async fn get(client: &ApiClient, course_id: &str) -> Result<Course, ApiError> {
    let body = client.get(&format!("/courses/{course_id}"), &[]).await?;
    Ok(decode_entity(body)?)
}

pub async fn create(client: &ApiClient, request: &CreateCourseRequest) -> Result<Course, ApiError> {
    let body = client.post("/courses", request).await?;
    Ok(decode_entity(body)?)
}

pub async fn update(
    client: &ApiClient,
    course_id: &str,
    request: &UpdateCourseRequest,
) -> Result<Course, ApiError> {
    let body = client.patch(&format!("/courses/{course_id}"), request).await?;
    Ok(decode_entity(body)?)
}

pub async fn remove(client: &ApiClient, course_id: &str) -> Result<(), ApiError> {
    client.delete(&format!("/courses/{course_id}")).await
}
