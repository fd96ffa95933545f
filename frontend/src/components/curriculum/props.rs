use yew::prelude::*;

use crate::api::ApiClient;

#[derive(Properties, PartialEq, Clone)]
pub struct CurriculumProps {
    /// API handle carrying the session's bearer token.
    pub client: ApiClient,
    /// Course whose curriculum is being edited; the course itself is
    /// fetched on first render for the header.
    pub course_id: String,
    /// Fired by the back button.
    pub on_back: Callback<()>,
}
