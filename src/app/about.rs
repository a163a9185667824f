use leptos::{either::*, prelude::*};

use super::{loader::use_profile, locale::use_locale};
use crate::{
    content::PersonalProfile,
    i18n::Msg,
    locale::Locale,
};

#[component]
pub fn About() -> impl IntoView {
    let locale = use_locale();
    let profile = use_profile();

    view! {
        <section id="about" class="py-20">
            <div class="max-w-6xl mx-auto px-4">
                <h2 class="text-3xl font-bold text-center mb-12">
                    {move || Msg::AboutTitle.tr(locale.get())}
                </h2>
                {move || {
                    let locale = locale.get();
                    profile.get().loaded().map(|p| about_content(&p, locale))
                }}
            </div>
        </section>
    }
}

fn about_content(p: &PersonalProfile, locale: Locale) -> impl IntoView {
    let education = p
        .education
        .iter()
        .map(|edu| {
            let college = edu.college.resolve(locale).to_string();
            view! {
                <div class="border-s-4 border-primary ps-4 mb-4">
                    <h4 class="font-semibold">{edu.degree.resolve(locale).to_string()}</h4>
                    <p class="text-sm">{edu.university.resolve(locale).to_string()}</p>
                    {(!college.is_empty())
                        .then(|| view! { <p class="text-sm text-muted-foreground">{college}</p> })}
                    <p class="text-xs text-muted-foreground mt-1">
                        {Msg::Graduation.tr(locale)} ": " {edu.graduation_date.clone()}
                    </p>
                </div>
            }
        })
        .collect_view();

    let languages = p
        .languages
        .iter()
        .map(|lang| {
            let percent = lang.percent();
            view! {
                <div class="mb-4">
                    <div class="flex justify-between text-sm mb-1">
                        <span class="font-medium">{lang.name.resolve(locale).to_string()}</span>
                        <span class="text-muted-foreground">
                            {lang.note.resolve(locale).to_string()}
                        </span>
                    </div>
                    <div class="h-2 rounded-full bg-muted/30 overflow-hidden">
                        <div
                            class="h-full rounded-full bg-primary"
                            style=format!("width: {percent}%")
                        ></div>
                    </div>
                </div>
            }
        })
        .collect_view();

    let certificates = p
        .certificates
        .iter()
        .map(|cert| {
            view! {
                <div class="p-4 rounded-md border border-muted/30 mb-3 flex justify-between items-start gap-4">
                    <div>
                        <h4 class="font-semibold">{cert.title.resolve(locale).to_string()}</h4>
                        <p class="text-sm text-muted-foreground">
                            {cert.issuer.resolve(locale).to_string()} " · " {cert.date.clone()}
                        </p>
                    </div>
                    {match cert.link.clone().filter(|l| !l.trim().is_empty()) {
                        Some(link) => {
                            Either::Left(
                                view! {
                                    <a
                                        href=link
                                        target="_blank"
                                        rel="noreferrer"
                                        class="text-sm text-primary hover:underline shrink-0"
                                    >
                                        {Msg::ViewCertificate.tr(locale)}
                                    </a>
                                },
                            )
                        }
                        None => Either::Right(()),
                    }}
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="grid lg:grid-cols-2 gap-8">
            <div class="p-6 rounded-lg bg-muted/10">
                <h3 class="text-xl font-semibold mb-4">{Msg::AboutIntro.tr(locale)}</h3>
                <p class="leading-relaxed whitespace-pre-line">
                    {p.personal.about_me.resolve(locale).to_string()}
                </p>
            </div>
            <div class="p-6 rounded-lg bg-muted/10">
                <h3 class="text-xl font-semibold mb-4">{Msg::AboutEducation.tr(locale)}</h3>
                {education}
            </div>
            <div class="p-6 rounded-lg bg-muted/10">
                <h3 class="text-xl font-semibold mb-4">{Msg::AboutLanguages.tr(locale)}</h3>
                {languages}
            </div>
            <div class="p-6 rounded-lg bg-muted/10">
                <h3 class="text-xl font-semibold mb-4">{Msg::AboutCertificates.tr(locale)}</h3>
                {certificates}
            </div>
        </div>
    }
}
