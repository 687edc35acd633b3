use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::contact_form::use_simulated_submit;
use crate::components::language::use_i18n;

/// Who is asking for books.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrganizationType {
    School,
    Nonprofit,
    Community,
    Other,
}

impl OrganizationType {
    pub const ALL: [OrganizationType; 4] = [
        OrganizationType::School,
        OrganizationType::Nonprofit,
        OrganizationType::Community,
        OrganizationType::Other,
    ];

    pub fn label_key(self) -> &'static str {
        match self {
            OrganizationType::School => "school",
            OrganizationType::Nonprofit => "nonprofitType",
            OrganizationType::Community => "communityEvent",
            OrganizationType::Other => "other",
        }
    }
}

/// What every request gets, shown next to the form.
pub const BENEFIT_KEYS: [&str; 4] = [
    "brandNewBooksNoCost",
    "ageAppropriateSelections",
    "flexibleDelivery",
    "supportForLiteracy",
];

#[derive(Clone, Default, PartialEq)]
struct BookRequestFields {
    organization_type: Option<OrganizationType>,
    organization_name: String,
    contact_name: String,
    email: String,
    event_date: String,
    expected_children: String,
    address: String,
    message: String,
}

fn bind_input(
    fields: &UseStateHandle<BookRequestFields>,
    apply: fn(&mut BookRequestFields, String),
) -> Callback<InputEvent> {
    let fields = fields.clone();
    Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        let mut next = (*fields).clone();
        apply(&mut next, input.value());
        fields.set(next);
    })
}

/// Book request form for schools and events. Like the contact form it only
/// pretends to send, then clears itself after a few seconds.
#[function_component(BookRequestForm)]
pub fn book_request_form() -> Html {
    let i18n = use_i18n();
    let fields = use_state(BookRequestFields::default);

    let on_message = {
        let fields = fields.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            fields.set(BookRequestFields { message: input.value(), ..(*fields).clone() });
        })
    };

    let on_reset = {
        let fields = fields.clone();
        Callback::from(move |_: ()| fields.set(BookRequestFields::default()))
    };
    let (submitted, onsubmit) = use_simulated_submit("Book request", on_reset);

    if submitted {
        return html! {
            <div class="request-card sent">
                <h3>{ i18n.t("requestSubmitted") }</h3>
                <p>{ i18n.t("requestReceivedMessage") }</p>
            </div>
        };
    }

    let type_buttons = OrganizationType::ALL.iter().map(|&kind| {
        let selected = fields.organization_type == Some(kind);
        let onclick = {
            let fields = fields.clone();
            Callback::from(move |_: MouseEvent| {
                fields.set(BookRequestFields {
                    organization_type: Some(kind),
                    ..(*fields).clone()
                });
            })
        };
        html! {
            <button
                type="button"
                class={classes!("org-type", selected.then_some("selected"))}
                aria-pressed={selected.to_string()}
                onclick={onclick}
            >
                { i18n.t(kind.label_key()) }
            </button>
        }
    });

    html! {
        <form class="request-card" onsubmit={onsubmit}>
            <span class="field-label">{ i18n.t("organizationType") }</span>
            <div class="org-types">{ for type_buttons }</div>

            <label for="request-organization">{ i18n.t("organizationName") }</label>
            <input id="request-organization" type="text" required=true
                placeholder={i18n.t("enterOrganizationName").to_string()}
                value={fields.organization_name.clone()}
                oninput={bind_input(&fields, |f, v| f.organization_name = v)} />

            <div class="field-pair">
                <div>
                    <label for="request-contact">{ i18n.t("contactName") }</label>
                    <input id="request-contact" type="text" required=true
                        placeholder={i18n.t("yourNamePlaceholder").to_string()}
                        value={fields.contact_name.clone()}
                        oninput={bind_input(&fields, |f, v| f.contact_name = v)} />
                </div>
                <div>
                    <label for="request-email">{ i18n.t("email") }</label>
                    <input id="request-email" type="email" required=true
                        placeholder={i18n.t("emailPlaceholder").to_string()}
                        value={fields.email.clone()}
                        oninput={bind_input(&fields, |f, v| f.email = v)} />
                </div>
            </div>

            <div class="field-pair">
                <div>
                    <label for="request-date">{ i18n.t("eventDate") }</label>
                    <input id="request-date" type="date" required=true
                        value={fields.event_date.clone()}
                        oninput={bind_input(&fields, |f, v| f.event_date = v)} />
                </div>
                <div>
                    <label for="request-children">{ i18n.t("expectedChildren") }</label>
                    <input id="request-children" type="number" min="1" required=true
                        placeholder="100"
                        value={fields.expected_children.clone()}
                        oninput={bind_input(&fields, |f, v| f.expected_children = v)} />
                </div>
            </div>

            <label for="request-address">{ i18n.t("eventLocationAddress") }</label>
            <input id="request-address" type="text" required=true
                placeholder={i18n.t("fullAddress").to_string()}
                value={fields.address.clone()}
                oninput={bind_input(&fields, |f, v| f.address = v)} />

            <label for="request-message">{ i18n.t("tellUsAboutEvent") }</label>
            <textarea id="request-message" rows="4"
                placeholder={i18n.t("describeEvent").to_string()}
                value={fields.message.clone()} oninput={on_message} />

            <button type="submit" class="primary-button">{ i18n.t("submitRequest") }</button>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{Locale, TranslationService};

    #[test]
    fn every_label_is_translated() {
        let keys = OrganizationType::ALL
            .iter()
            .map(|kind| kind.label_key())
            .chain(BENEFIT_KEYS);
        for key in keys {
            for locale in Locale::ALL {
                let i18n = TranslationService::bundled().with_locale(locale);
                assert_ne!(i18n.t(key), key, "'{}' has no {} text", key, locale);
            }
        }
    }

    #[test]
    fn organization_labels_are_distinct() {
        let mut keys: Vec<&str> = OrganizationType::ALL.iter().map(|k| k.label_key()).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), OrganizationType::ALL.len());
    }
}
