use gloo_timers::callback::Timeout;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::language::use_i18n;
use crate::config;

/// Submit handling for the site's forms. Nothing is sent anywhere: the
/// returned flag turns on at submit and back off after
/// `CONTACT_RESET_MS`, when `on_reset` runs too. A second submit restarts
/// the delay.
#[hook]
pub fn use_simulated_submit(form: &'static str, on_reset: Callback<()>) -> (bool, Callback<SubmitEvent>) {
    let submitted = use_state(|| false);
    let reset_timer = use_mut_ref(|| None::<Timeout>);

    let onsubmit = {
        let submitted = submitted.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            log::info!("{} submitted (simulated)", form);
            submitted.set(true);
            let submitted = submitted.clone();
            let on_reset = on_reset.clone();
            // Replacing the handle cancels an earlier reset.
            *reset_timer.borrow_mut() = Some(Timeout::new(config::CONTACT_RESET_MS, move || {
                submitted.set(false);
                on_reset.emit(());
            }));
        })
    };

    (*submitted, onsubmit)
}

#[derive(Clone, Default, PartialEq)]
struct ContactFields {
    name: String,
    email: String,
    message: String,
}

/// Contact form. Submitting shows a thank-you note for a few seconds and
/// clears the fields.
#[function_component(ContactForm)]
pub fn contact_form() -> Html {
    let i18n = use_i18n();
    let fields = use_state(ContactFields::default);

    let on_name = {
        let fields = fields.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            fields.set(ContactFields { name: input.value(), ..(*fields).clone() });
        })
    };
    let on_email = {
        let fields = fields.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            fields.set(ContactFields { email: input.value(), ..(*fields).clone() });
        })
    };
    let on_message = {
        let fields = fields.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            fields.set(ContactFields { message: input.value(), ..(*fields).clone() });
        })
    };

    let on_reset = {
        let fields = fields.clone();
        Callback::from(move |_: ()| fields.set(ContactFields::default()))
    };
    let (submitted, onsubmit) = use_simulated_submit("Contact form", on_reset);

    if submitted {
        return html! {
            <div class="contact-card sent">
                <h3>{ i18n.t("messageSent") }</h3>
                <p>{ i18n.t("messageSentBody") }</p>
            </div>
        };
    }

    html! {
        <form class="contact-card" onsubmit={onsubmit}>
            <h3>{ i18n.t("getInTouch") }</h3>
            <label for="contact-name">{ i18n.t("yourName") }</label>
            <input id="contact-name" type="text" required=true
                value={fields.name.clone()} oninput={on_name} />
            <label for="contact-email">{ i18n.t("emailAddress") }</label>
            <input id="contact-email" type="email" required=true
                value={fields.email.clone()} oninput={on_email} />
            <label for="contact-message">{ i18n.t("yourMessage") }</label>
            <textarea id="contact-message" rows="5" required=true
                value={fields.message.clone()} oninput={on_message} />
            <button type="submit" class="primary-button">{ i18n.t("sendMessage") }</button>
        </form>
    }
}
