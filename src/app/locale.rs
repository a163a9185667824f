use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use codee::string::JsonSerdeWasmCodec;
#[cfg(feature = "hydrate")]
use leptos_use::storage::use_local_storage;

use crate::locale::Locale;
#[cfg(feature = "hydrate")]
use crate::locale::{initial_locale, LOCALE_STORAGE_KEY};

/// Makes the active locale available to every section. The server always
/// renders English; the browser switches to the visitor's language once
/// mounted and keeps the document attributes and stored preference in step.
pub fn provide_locale() -> RwSignal<Locale> {
    let locale = RwSignal::new(Locale::default());

    #[cfg(feature = "hydrate")]
    {
        let (stored, set_stored, _) =
            use_local_storage::<String, JsonSerdeWasmCodec>(LOCALE_STORAGE_KEY);

        Effect::new(move |initialized: Option<bool>| {
            if initialized.is_none() {
                let detected = super::browser::navigator_language();
                locale.set(initial_locale(&stored.get_untracked(), detected.as_deref()));
            }
            let current = locale.get();
            set_stored.set(current.code().to_string());
            super::browser::apply_document_locale(current);
            true
        });
    }

    provide_context(locale);
    locale
}

pub fn use_locale() -> RwSignal<Locale> {
    expect_context::<RwSignal<Locale>>()
}
