use std::rc::Rc;
use yew::prelude::*;
use yew_router::prelude::*;
use log::info;

mod config;
mod error;
mod observer;
mod scroll;
mod slider;
mod components {
    pub mod lazy_image;
    pub mod modal;
    pub mod nav;
    pub mod operations;
    pub mod reveal;
    pub mod testimonials;
}
mod pages {
    pub mod home;
    pub mod not_found;
}

use config::SiteContent;
use pages::{home::Home, not_found::NotFound};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        },
    }
}

#[derive(Properties, PartialEq)]
struct AppProps {
    site: Rc<SiteContent>,
}

#[function_component]
fn App(props: &AppProps) -> Html {
    html! {
        <ContextProvider<Rc<SiteContent>> context={props.site.clone()}>
            <BrowserRouter>
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </ContextProvider<Rc<SiteContent>>>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    let site = config::site_content().unwrap_or_else(|err| error::fail_fast(err));
    info!(
        "Loaded site content: {} features, {} tabs, {} slides",
        site.features.len(),
        site.operations.len(),
        site.testimonials.len()
    );
    yew::Renderer::<App>::with_props(AppProps { site: Rc::new(site) }).render();
}
