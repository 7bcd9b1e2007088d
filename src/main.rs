mod app;
mod client;
mod components;
mod config;
mod dom;
mod error;
mod form;
mod model;
mod report;
mod task_list;

fn main() {
    yew::Renderer::<app::App>::new().render();
}
