use yew::prelude::*;
use yew_router::prelude::*;

pub mod config;

pub mod analytics {
    pub mod events;
    pub mod tracker;
}
pub mod components {
    pub mod before_after;
    pub mod contact_form;
    pub mod footer;
    pub mod lazy_image;
    pub mod navbar;
    pub mod page;
}
pub mod contact {
    pub mod submit;
    pub mod validation;
}
pub mod effects {
    pub mod page;
    pub mod reveal;
    pub mod viewport;
}
pub mod images {
    pub mod format;
    pub mod lazy;
    pub mod probe;
}
pub mod pages {
    pub mod contact;
    pub mod home;
    pub mod not_found;
    pub mod services;
}
pub mod slider {
    pub mod comparison;
    pub mod state;
}
pub mod utils {
    pub mod listener;
    pub mod timing;
}

use analytics::tracker::Analytics;
use components::footer::Footer;
use components::navbar::Navbar;
use pages::{contact::Contact, home::Home, not_found::NotFound, services::Services};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/services")]
    Services,
    #[at("/contact")]
    Contact,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => html! { <Home /> },
        Route::Services => html! { <Services /> },
        Route::Contact => html! { <Contact /> },
        Route::NotFound => html! { <NotFound /> },
    }
}

#[function_component]
pub fn App() -> Html {
    let analytics = use_state(Analytics::default);

    html! {
        <ContextProvider<Analytics> context={(*analytics).clone()}>
            <BrowserRouter>
                <Navbar />
                <Switch<Route> render={switch} />
                <Footer />
            </BrowserRouter>
        </ContextProvider<Analytics>>
    }
}

pub fn run() {
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    wasm_logger::init(wasm_logger::Config::new(level));
    log::info!("Starting {} frontend", config::BUSINESS_NAME);
    yew::Renderer::<App>::new().render();
}
