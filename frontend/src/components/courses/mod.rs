//! Course list page: root module wiring the Yew `Component` implementation
//! with submodules for state, update logic, view rendering, and helpers.
//!
//! The page is a thin pass-through over the course endpoints: paged list
//! with status/search filters, a derived category summary strip, and a
//! top-sheet create/edit form.

use yew::prelude::*;

mod helpers;
mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::CoursesProps;
pub use state::CoursesPage;

impl Component for CoursesPage {
    type Message = Msg;
    type Properties = CoursesProps;

    fn create(_ctx: &Context<Self>) -> Self {
        CoursesPage::new()
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
            ctx.link().send_message(Msg::Load);
        }
    }
}
