use leptos::{either::*, prelude::*};

use super::{
    browser::scroll_to_section, loader::use_profile, locale::use_locale, LoadingPlaceholder,
};
use crate::{
    config::SiteConfig,
    contact::{mailto_link, whatsapp_link},
    content::{PersonalProfile, SectionState},
    i18n::Msg,
    locale::Locale,
};

#[component]
pub fn Hero() -> impl IntoView {
    let locale = use_locale();
    let profile = use_profile();
    let config = expect_context::<SiteConfig>();

    view! {
        <section id="hero" class="min-h-[calc(100vh-4rem)] flex flex-col justify-center">
            {move || {
                let locale = locale.get();
                match profile.get() {
                    SectionState::Loading => {
                        EitherOf3::A(view! { <LoadingPlaceholder message=Msg::LoadingPortfolio /> })
                    }
                    SectionState::Empty => EitherOf3::B(()),
                    SectionState::Loaded(p) => EitherOf3::C(hero_content(&p, locale, &config)),
                }
            }}
        </section>
    }
}

fn hero_content(p: &PersonalProfile, locale: Locale, config: &SiteConfig) -> impl IntoView {
    let personal = &p.personal;
    let image = config.asset_url(&personal.profile_image);
    let name = personal.name.resolve(locale).to_string();

    let mut links = p
        .social
        .links()
        .into_iter()
        .filter(|(label, _)| *label != "Facebook")
        .map(|(label, link)| (label, link.url.clone()))
        .collect::<Vec<_>>();
    if !personal.email.is_empty() {
        links.push(("Email", mailto_link(&personal.email)));
    }
    if !personal.whatsapp.is_empty() {
        links.push(("WhatsApp", whatsapp_link(&personal.whatsapp)));
    }

    view! {
        <div class="max-w-6xl mx-auto px-4 grid lg:grid-cols-2 gap-12 items-center">
            <div class="space-y-6 text-center lg:text-start">
                <span class="inline-flex items-center gap-2 px-3 py-1 rounded-full border border-green/40 text-green text-sm">
                    <span class="w-2 h-2 rounded-full bg-green animate-pulse"></span>
                    {Msg::Available.tr(locale)}
                </span>
                <h1 class="text-4xl md:text-6xl font-bold">{name.clone()}</h1>
                <h2 class="text-xl md:text-2xl text-primary">
                    {personal.title.resolve(locale).to_string()}
                </h2>
                <p class="text-lg text-muted-foreground leading-relaxed">
                    {personal.bio.resolve(locale).to_string()}
                </p>
                <p class="text-sm text-muted-foreground">
                    "📍 " {personal.location.resolve(locale).to_string()} " · "
                    {Msg::RemoteWork.tr(locale)}
                </p>
                <div class="flex flex-wrap gap-4 justify-center lg:justify-start">
                    <button
                        class="px-6 py-3 rounded-md bg-primary text-background font-medium hover:opacity-90"
                        on:click=move |_| scroll_to_section("contact")
                    >
                        {Msg::CtaContact.tr(locale)}
                    </button>
                    <a
                        href=config.cv_url()
                        download=""
                        class="px-6 py-3 rounded-md border border-primary text-primary font-medium hover:bg-primary/10"
                    >
                        {Msg::CtaCv.tr(locale)}
                    </a>
                </div>
                <div class="flex flex-wrap gap-3 justify-center lg:justify-start">
                    {links
                        .into_iter()
                        .map(|(label, href)| {
                            let target = href.starts_with("http").then_some("_blank");
                            view! {
                                <a
                                    href=href
                                    target=target
                                    rel="noreferrer"
                                    class="px-3 py-1 rounded-md border border-muted/40 text-sm hover:text-primary"
                                >
                                    {label}
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
            <div class="flex justify-center">
                {if image.is_empty() {
                    Either::Left(
                        view! {
                            <div class="w-64 h-64 rounded-full bg-primary/20 flex items-center justify-center text-6xl font-bold text-primary">
                                {personal.initials()}
                            </div>
                        },
                    )
                } else {
                    Either::Right(
                        view! {
                            <img
                                src=image
                                alt=name
                                class="w-64 h-64 md:w-80 md:h-80 rounded-full object-cover border-4 border-primary/30 shadow-2xl"
                            />
                        },
                    )
                }}
            </div>
        </div>
        <button
            class="mx-auto mt-12 flex flex-col items-center text-sm text-muted-foreground hover:text-primary"
            on:click=move |_| scroll_to_section("about")
        >
            {Msg::ScrollExplore.tr(locale)}
            <span class="animate-bounce">"↓"</span>
        </button>
    }
}
