use common::model::course::Course;
use gloo_console::warn;
use yew::{Component, Context, Html, html};

use crate::api::ApiClient;
use crate::auth::{self, AuthSession};
use crate::components::courses::CoursesPage;
use crate::components::curriculum::CurriculumEditor;

/// The console's two surfaces; navigation is plain in-memory state, there
/// is no URL router.
pub enum Page {
    Courses,
    Curriculum { course_id: String },
}

pub enum Msg {
    OpenCurriculum(Course),
    BackToCourses,
    Logout,
}

pub struct App {
    session: Option<AuthSession>,
    client: Option<ApiClient>,
    page: Page,
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    /// The auth context is produced exactly once here; a missing session
    /// or a non-admin role bounces straight to the sign-in screen.
    fn create(_ctx: &Context<Self>) -> Self {
        let session = match AuthSession::load() {
            Some(session) if session.is_allowed() => Some(session),
            Some(session) => {
                warn!(format!(
                    "role {:?} is not allowed into the console",
                    session.user.role
                ));
                auth::redirect_to_login();
                None
            }
            None => {
                auth::redirect_to_login();
                None
            }
        };
        let client = session.as_ref().map(|s| ApiClient::new(&s.token));
        Self {
            session,
            client,
            page: Page::Courses,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::OpenCurriculum(course) => {
                self.page = Page::Curriculum {
                    course_id: course.id,
                };
                true
            }
            Msg::BackToCourses => {
                self.page = Page::Courses;
                true
            }
            Msg::Logout => {
                auth::logout();
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let (Some(session), Some(client)) = (&self.session, &self.client) else {
            return html! {
                <div class="signed-out">{"Redirecting to sign-in..."}</div>
            };
        };
        let link = ctx.link();

        html! {
            <div class="console-root">
                <header class="console-header">
                    <h1>{"Course Admin"}</h1>
                    <div class="console-user">
                        <span>{format!("{} ({})", session.user.name, role_label(session))}</span>
                        <button class="link-btn" onclick={link.callback(|_| Msg::Logout)}>
                            {"Sign out"}
                        </button>
                    </div>
                </header>
                {
                    match &self.page {
                        Page::Courses => html! {
                            <CoursesPage
                                client={client.clone()}
                                on_open_curriculum={link.callback(Msg::OpenCurriculum)}
                            />
                        },
                        Page::Curriculum { course_id } => html! {
                            <CurriculumEditor
                                client={client.clone()}
                                course_id={course_id.clone()}
                                on_back={link.callback(|_| Msg::BackToCourses)}
                            />
                        },
                    }
                }
            </div>
        }
    }
}

fn role_label(session: &AuthSession) -> &'static str {
    use common::model::user::Role;
    match session.user.role {
        Role::Admin => "admin",
        Role::Manager => "manager",
        Role::Instructor => "instructor",
        Role::Student => "student",
    }
}
