use crate::app::App;

mod api;
mod app;
mod auth;
mod components;

fn main() {
    yew::Renderer::<App>::new().render();
}
