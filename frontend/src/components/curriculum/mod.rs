//! Curriculum editor: root module wiring the Yew `Component` implementation
//! with submodules for state, update logic, view rendering, and helpers.
//!
//! The editor shows one course's section/lesson tree next to a detail form
//! for the selected lesson. All mutations go straight to the backend; the
//! in-memory tree is updated optimistically for reorders and from server
//! responses for everything else.

use gloo_console::error;
use yew::platform::spawn_local;
use yew::prelude::*;

mod helpers;
mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::CurriculumProps;
pub use state::CurriculumEditor;

use crate::api;

impl Component for CurriculumEditor {
    type Message = Msg;
    type Properties = CurriculumProps;

    fn create(_ctx: &Context<Self>) -> Self {
        CurriculumEditor::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.loaded {
            self.loaded = true;

            let client = ctx.props().client.clone();
            let course_id = ctx.props().course_id.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                // The header tolerates a failed course fetch; the tree does not.
                match api::courses::get(&client, &course_id).await {
                    Ok(course) => link.send_message(Msg::CourseLoaded(course)),
                    Err(err) => error!(format!("course load failed: {err}")),
                }
                match api::curriculum::fetch(&client, &course_id).await {
                    Ok(sections) => link.send_message(Msg::Loaded(sections)),
                    Err(err) => {
                        error!(format!("curriculum load failed: {err}"));
                        link.send_message(Msg::LoadFailed(err.to_string()));
                    }
                }
            });
        }
    }
}
