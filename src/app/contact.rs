use std::time::Duration;

use leptos::{either::*, ev::SubmitEvent, prelude::*};

use super::{
    browser::{copy_to_clipboard, open_link, scroll_to_section},
    loader::use_profile,
    locale::use_locale,
    notify::use_notifier,
};
use crate::{
    config::build_year,
    contact::{mailto_link, tel_link, whatsapp_link, ContactForm, FormField},
    content::PersonalProfile,
    i18n::Msg,
    locale::Locale,
};

const COPIED_RESET: Duration = Duration::from_millis(2000);

struct ContactCard {
    label: Msg,
    value: String,
    action: Option<String>,
}

fn contact_cards(p: &PersonalProfile, locale: Locale) -> Vec<ContactCard> {
    let personal = &p.personal;
    vec![
        ContactCard {
            label: Msg::Email,
            value: personal.email.clone(),
            action: Some(mailto_link(&personal.email)),
        },
        ContactCard {
            label: Msg::Phone,
            value: personal.phone.clone(),
            action: Some(tel_link(&personal.phone)),
        },
        ContactCard {
            label: Msg::WhatsApp,
            value: personal.whatsapp.clone(),
            action: Some(whatsapp_link(&personal.whatsapp)),
        },
        ContactCard {
            label: Msg::Location,
            value: personal.location.resolve(locale).to_string(),
            action: None,
        },
    ]
}

#[component]
pub fn Contact() -> impl IntoView {
    let locale = use_locale();
    let profile = use_profile();
    let copied = RwSignal::new(None::<Msg>);

    let details = move || {
        let locale = locale.get();
        profile
            .get()
            .loaded()
            .map(|p| contact_details(&p, locale, copied))
    };

    view! {
        <section id="contact" class="py-24">
            <div class="max-w-6xl mx-auto px-4">
                <div class="text-center mb-16">
                    <h2 class="text-4xl md:text-5xl font-bold mb-6">
                        {move || Msg::ContactTitle.tr(locale.get())}
                    </h2>
                    <p class="text-lg text-muted-foreground max-w-2xl mx-auto">
                        {move || Msg::ContactDescription.tr(locale.get())}
                    </p>
                </div>
                <Show when=move || profile.with(|state| state.loaded().is_some())>
                    <div class="grid grid-cols-1 lg:grid-cols-2 gap-12 items-start">
                        <div class="space-y-6">{details}</div>
                        <MessageForm />
                    </div>
                    <ContactFooter />
                </Show>
            </div>
        </section>
    }
}

fn contact_details(
    p: &PersonalProfile,
    locale: Locale,
    copied: RwSignal<Option<Msg>>,
) -> impl IntoView {
    let notifier = use_notifier();

    let cards = contact_cards(p, locale)
        .into_iter()
        .map(|ContactCard { label, value, action }| {
            let actions = action.map(|href| {
                let copy_value = value.clone();
                view! {
                    <div class="flex gap-2 w-full">
                        <button
                            class="flex-1 px-3 py-2 rounded-xl border border-primary/20 hover:border-primary/50 text-sm"
                            on:click=move |_| open_link(&href)
                        >
                            {Msg::Open.tr(locale)}
                        </button>
                        <button
                            class="px-3 py-2 rounded-xl text-sm hover:bg-muted/20"
                            on:click=move |_| {
                                copy_to_clipboard(&copy_value);
                                copied.set(Some(label));
                                notifier.success(Msg::CopiedToast);
                                set_timeout(
                                    move || {
                                        copied.update(|c| {
                                            if *c == Some(label) {
                                                *c = None;
                                            }
                                        })
                                    },
                                    COPIED_RESET,
                                );
                            }
                        >
                            {move || {
                                if copied.get() == Some(label) {
                                    Either::Left(
                                        view! {
                                            <span class="text-green">{Msg::Copied.tr(locale)}</span>
                                        },
                                    )
                                } else {
                                    Either::Right(Msg::Copy.tr(locale))
                                }
                            }}
                        </button>
                    </div>
                }
            });
            view! {
                <div class="p-6 rounded-2xl border border-muted/30 flex flex-col items-center text-center gap-4">
                    <div>
                        <p class="text-xs text-muted-foreground mb-1 uppercase tracking-wider">
                            {label.tr(locale)}
                        </p>
                        <p class="text-sm font-bold break-all">{value}</p>
                    </div>
                    {actions}
                </div>
            }
        })
        .collect_view();

    let mut socials = p
        .social
        .links()
        .into_iter()
        .map(|(name, link)| (name, link.url.clone()))
        .collect::<Vec<_>>();
    if !p.personal.email.is_empty() {
        socials.push(("Email", mailto_link(&p.personal.email)));
    }
    let socials = socials
        .into_iter()
        .map(|(name, href)| {
            view! {
                <a
                    href=href
                    target="_blank"
                    rel="noopener noreferrer"
                    class="px-4 py-3 rounded-2xl border border-muted/40 hover:border-primary hover:text-primary transition-colors"
                >
                    {name}
                </a>
            }
        })
        .collect_view();

    view! {
        <div class="grid grid-cols-1 sm:grid-cols-2 gap-4">{cards}</div>
        <div class="p-8 rounded-3xl border border-muted/30">
            <h3 class="text-xl font-bold mb-6">{Msg::Socials.tr(locale)}</h3>
            <div class="flex flex-wrap gap-4">{socials}</div>
        </div>
    }
}

/// Hands the message to the visitor's mail client. Values survive a
/// language switch because only the labels are reactive.
#[component]
fn MessageForm() -> impl IntoView {
    let locale = use_locale();
    let profile = use_profile();
    let notifier = use_notifier();
    let form = RwSignal::new(ContactForm::default());

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let recipient = profile
            .with_untracked(|state| state.loaded().map(|p| p.personal.email.clone()))
            .unwrap_or_default();
        match form.with_untracked(|f| f.mailto(&recipient)) {
            Ok(uri) => {
                open_link(&uri);
                notifier.success(Msg::OpeningMail);
            }
            Err(err) => {
                log::debug!("contact form rejected: {err}");
                notifier.error(Msg::RequiredFields);
            }
        }
    };

    view! {
        <div class="rounded-3xl border border-muted/30 p-8 shadow-2xl">
            <form class="space-y-6" on:submit=on_submit>
                <div class="grid grid-cols-1 sm:grid-cols-2 gap-6">
                    <FormInput
                        form
                        field=FormField::Name
                        label=Msg::FormName
                        placeholder=Msg::FormNamePlaceholder
                        input_type="text"
                    />
                    <FormInput
                        form
                        field=FormField::Email
                        label=Msg::FormEmail
                        placeholder=Msg::FormEmailPlaceholder
                        input_type="email"
                    />
                </div>
                <FormInput
                    form
                    field=FormField::Subject
                    label=Msg::FormSubject
                    placeholder=Msg::FormSubjectPlaceholder
                    input_type="text"
                />
                <div class="space-y-2">
                    <label class="text-sm font-medium text-muted-foreground">
                        {move || Msg::FormMessage.tr(locale.get())}
                    </label>
                    <textarea
                        rows="5"
                        name="message"
                        class=INPUT_CLASS
                        placeholder=move || Msg::FormMessagePlaceholder.tr(locale.get())
                        prop:value=move || form.with(|f| f.message.clone())
                        on:input=move |ev| form.update(|f| f.message = event_target_value(&ev))
                    ></textarea>
                </div>
                <button
                    type="submit"
                    class="w-full py-4 rounded-xl bg-primary text-background font-bold text-lg hover:opacity-90"
                >
                    {move || Msg::FormSend.tr(locale.get())}
                </button>
            </form>
        </div>
    }
}

const INPUT_CLASS: &str = "w-full bg-background border border-muted/40 rounded-xl px-4 py-3 focus:outline-none focus:border-primary/50 focus:ring-2 focus:ring-primary/10";

#[component]
fn FormInput(
    form: RwSignal<ContactForm>,
    field: FormField,
    label: Msg,
    placeholder: Msg,
    input_type: &'static str,
) -> impl IntoView {
    let locale = use_locale();
    view! {
        <div class="space-y-2">
            <label class="text-sm font-medium text-muted-foreground">
                {move || label.tr(locale.get())}
            </label>
            <input
                type=input_type
                name=field.to_string()
                class=INPUT_CLASS
                placeholder=move || placeholder.tr(locale.get())
                prop:value=move || form.with(|f| f.field(field).to_string())
                on:input=move |ev| form.update(|f| *f.field_mut(field) = event_target_value(&ev))
            />
        </div>
    }
}

#[component]
fn ContactFooter() -> impl IntoView {
    let locale = use_locale();
    let profile = use_profile();
    let year = build_year().map(|y| y.to_string()).unwrap_or_default();

    let owner = move || {
        profile
            .get()
            .loaded()
            .map(|p| p.personal.name.resolve(locale.get()).to_string())
            .unwrap_or_default()
    };

    view! {
        <footer class="mt-24 pt-12 border-t border-muted/30">
            <div class="flex flex-col md:flex-row justify-between items-center gap-8">
                <p class="text-muted-foreground">{move || Msg::Footer.tr(locale.get())}</p>
                <button
                    class="px-4 py-2 rounded-full border border-muted/40 hover:border-primary"
                    on:click=move |_| scroll_to_section("hero")
                >
                    {move || Msg::BackToTop.tr(locale.get())}
                </button>
            </div>
            <p class="text-center text-sm text-muted-foreground mt-8">
                "© " {year} " " {owner} ". " {move || Msg::RightsReserved.tr(locale.get())}
            </p>
        </footer>
    }
}
