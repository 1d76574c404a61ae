use yew::prelude::*;
use yew_router::prelude::*;
use log::info;

mod config;
mod consent;
mod inquiry;
mod components {
    pub mod icons;
    pub mod consent_marker;
    pub mod gated_button;
}
mod pages {
    pub mod inquiry;
    pub mod legal;
}

use pages::{
    inquiry::InquiryPage,
    legal::{LegalPage, PRIVACY_POLICY, TERMS},
};


#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Inquiry,
    #[at("/privacy")]
    Privacy,
    #[at("/terms")]
    Terms,
    #[not_found]
    #[at("/404")]
    NotFound,
}


fn switch(routes: Route) -> Html {
    match routes {
        Route::Inquiry => {
            info!("Rendering Inquiry page");
            html! { <InquiryPage /> }
        },
        Route::Privacy => {
            info!("Rendering Privacy page");
            html! { <LegalPage doc={&PRIVACY_POLICY} /> }
        },
        Route::Terms => {
            info!("Rendering Terms page");
            html! { <LegalPage doc={&TERMS} /> }
        },
        Route::NotFound => {
            info!("Unknown route, rendering Inquiry page");
            html! { <InquiryPage /> }
        },
    }
}


#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::get_log_level()).expect("error initializing log");

    info!("Starting clinic site");
    yew::Renderer::<App>::new().render();
}
