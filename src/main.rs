use log::info;
use yew::prelude::*;

use bright_beginnings::components::language::LanguageProvider;
use bright_beginnings::config;
use bright_beginnings::observer::RevealContext;
use bright_beginnings::pages::landing::Landing;

#[function_component]
fn App() -> Html {
    // One reveal engine for the whole page, created on first render.
    let reveal = use_memo(|_| RevealContext::new(), ());

    html! {
        <LanguageProvider>
            <ContextProvider<RevealContext> context={(*reveal).clone()}>
                <Landing />
            </ContextProvider<RevealContext>>
        </LanguageProvider>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
