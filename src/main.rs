use yew::prelude::*;
use log::info;

mod config;
mod content;
mod dom;
mod contact {
    pub mod form;
    pub mod submit;
}
mod components {
    pub mod carousel;
    pub mod contact_form;
    pub mod modals;
    pub mod nav;
}
mod pages {
    pub mod landing;
    pub mod landing_state;
    pub mod sections;
}

use config::LandingConfig;
use contact::submit::SubmitterHandle;
use pages::landing::Landing;


#[function_component]
fn App() -> Html {
    let config = use_state(LandingConfig::default);
    // Nothing is sent anywhere; the submitter only waits and reports success.
    let submitter = use_state(|| SubmitterHandle::simulated(config.submit_delay_ms));

    html! {
        <ContextProvider<LandingConfig> context={(*config).clone()}>
            <Landing submitter={(*submitter).clone()} />
        </ContextProvider<LandingConfig>>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting landing page");
    yew::Renderer::<App>::new().render();
}
