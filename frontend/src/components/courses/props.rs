use common::model::course::Course;
use yew::prelude::*;

use crate::api::ApiClient;

#[derive(Properties, PartialEq, Clone)]
pub struct CoursesProps {
    /// API handle carrying the session's bearer token.
    pub client: ApiClient,
    /// Fired when the user opens a course's curriculum editor.
    pub on_open_curriculum: Callback<Course>,
}
