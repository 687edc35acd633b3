use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::contact_form::use_simulated_submit;
use crate::components::language::use_i18n;

#[function_component(NewsletterForm)]
pub fn newsletter_form() -> Html {
    let i18n = use_i18n();
    let email = use_state(String::new);

    let oninput = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };
    let on_reset = {
        let email = email.clone();
        Callback::from(move |_: ()| email.set(String::new()))
    };
    let (submitted, onsubmit) = use_simulated_submit("Newsletter signup", on_reset);

    html! {
        <div class="footer-newsletter">
            <h3>{ i18n.t("stayConnected") }</h3>
            <p>{ i18n.t("newsletterSubtitle") }</p>
            if submitted {
                <p class="newsletter-thanks" role="status">{ i18n.t("subscribed") }</p>
            } else {
                <form class="newsletter-form" onsubmit={onsubmit}>
                    <input type="email" required=true
                        aria-label={i18n.t("emailAddress").to_string()}
                        placeholder={i18n.t("emailPlaceholder").to_string()}
                        value={(*email).clone()} oninput={oninput} />
                    <button type="submit" class="primary-button">{ i18n.t("subscribe") }</button>
                </form>
            }
        </div>
    }
}
