use yew::prelude::*;

use crate::i18n::{Locale, TranslationService};

/// What every section reads localized text from.
#[derive(Clone, PartialEq)]
pub struct I18nContext {
    pub service: TranslationService,
    pub set_locale: Callback<Locale>,
}

impl I18nContext {
    pub fn t<'a>(&'a self, key: &'a str) -> &'a str {
        self.service.t(key)
    }

    pub fn locale(&self) -> Locale {
        self.service.get_locale()
    }

    pub fn toggle(&self) {
        self.set_locale.emit(self.locale().toggled());
    }
}

#[hook]
pub fn use_i18n() -> I18nContext {
    match use_context::<I18nContext>() {
        Some(context) => context,
        None => {
            log::warn!("use_i18n called outside LanguageProvider, locale changes will be ignored");
            I18nContext {
                service: TranslationService::bundled(),
                set_locale: Callback::noop(),
            }
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct LanguageProviderProps {
    #[prop_or_default]
    pub children: Children,
}

/// Owns the site's single `TranslationService`. Changing the locale swaps the
/// whole handle, which re-renders every consumer.
#[function_component(LanguageProvider)]
pub fn language_provider(props: &LanguageProviderProps) -> Html {
    let service = use_state(TranslationService::bundled);

    let set_locale = {
        let service = service.clone();
        Callback::from(move |locale: Locale| {
            if service.get_locale() != locale {
                service.set(service.with_locale(locale));
            }
        })
    };

    let context = I18nContext {
        service: (*service).clone(),
        set_locale,
    };

    // Screen readers and hyphenation follow the page language.
    {
        let locale = context.locale();
        use_effect_with_deps(
            move |locale| {
                if let Some(root) = web_sys::window()
                    .and_then(|w| w.document())
                    .and_then(|d| d.document_element())
                {
                    let _ = root.set_attribute("lang", locale.code());
                }
                || ()
            },
            locale,
        );
    }

    html! {
        <ContextProvider<I18nContext> context={context}>
            { for props.children.iter() }
        </ContextProvider<I18nContext>>
    }
}

#[function_component(LanguageToggle)]
pub fn language_toggle() -> Html {
    let i18n = use_i18n();
    let locale = i18n.locale();

    let onclick = {
        let i18n = i18n.clone();
        Callback::from(move |_: MouseEvent| i18n.toggle())
    };

    let label_class = |option: Locale| {
        if option == locale {
            "lang-option active"
        } else {
            "lang-option"
        }
    };

    html! {
        <button
            class="language-toggle"
            onclick={onclick}
            aria-label={i18n.t("switchLanguage").to_string()}
            title={locale.toggled().native_name()}
        >
            <span class={label_class(Locale::En)}>{"EN"}</span>
            <span class="lang-divider">{"|"}</span>
            <span class={label_class(Locale::Es)}>{"ES"}</span>
        </button>
    }
}
