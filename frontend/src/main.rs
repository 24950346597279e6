use crate::app::App;

mod app;
mod components;
mod pages;
mod router;

fn main() {
    yew::Renderer::<App>::new().render();
}
