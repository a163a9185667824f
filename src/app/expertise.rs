use leptos::{either::*, prelude::*};

use super::{loader::use_profile, locale::use_locale};
use crate::{
    content::{profile::Expertise as ExpertiseArea, PersonalProfile},
    i18n::Msg,
    locale::Locale,
};

#[component]
pub fn Expertise() -> impl IntoView {
    let locale = use_locale();
    let profile = use_profile();

    view! {
        <section id="expertise" class="py-20">
            {move || {
                let locale = locale.get();
                profile.get().loaded().map(|p| expertise_content(&p, locale))
            }}
        </section>
    }
}

fn expertise_content(p: &PersonalProfile, locale: Locale) -> impl IntoView {
    let areas = [
        (p.ai_expertise.as_ref(), Msg::AiExpertise),
        (p.network_expertise.as_ref(), Msg::NetworkExpertise),
    ]
    .into_iter()
    .map(|(area, fallback)| area_card(area, fallback, locale))
    .collect_view();

    let education = p.education.first().map(|edu| {
        view! {
            <h4 class="text-lg font-bold">{edu.degree.resolve(locale).to_string()}</h4>
            <p class="text-primary font-medium">{edu.university.resolve(locale).to_string()}</p>
            <p class="text-sm text-muted-foreground">{edu.college.resolve(locale).to_string()}</p>
            <p class="text-sm text-muted-foreground mt-2">
                {Msg::ExpectedGraduation.tr(locale)} " " {edu.graduation_date.clone()}
            </p>
        }
    });

    let languages = p
        .languages
        .iter()
        .map(|lang| {
            let percent = lang.percent();
            view! {
                <div class="space-y-2">
                    <div class="flex justify-between text-sm font-medium">
                        <span>{lang.name.resolve(locale).to_string()}</span>
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

    let certifications = if p.certificates.is_empty() {
        Either::Left(
            view! {
                <p class="text-center text-muted-foreground italic">
                    {Msg::CertificationsSoon.tr(locale)}
                </p>
            },
        )
    } else {
        Either::Right(
            view! {
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                    {p
                        .certificates
                        .iter()
                        .map(|cert| {
                            view! {
                                <div class="flex items-start gap-4 p-4 border border-muted/30 rounded-2xl">
                                    <span class="text-primary">"✔"</span>
                                    <div>
                                        <h4 class="font-bold">
                                            {cert.title.resolve(locale).to_string()}
                                        </h4>
                                        <p class="text-sm text-muted-foreground">
                                            {cert.issuer.resolve(locale).to_string()}
                                        </p>
                                        <p class="text-xs text-muted-foreground mt-1">
                                            {cert.date.clone()}
                                        </p>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            },
        )
    };

    view! {
        <div class="max-w-6xl mx-auto px-4">
            <div class="grid grid-cols-1 lg:grid-cols-2 gap-12">
                <div class="space-y-8">{areas}</div>
                <div class="space-y-8">
                    <div class="p-8 rounded-3xl border border-muted/30">
                        <h3 class="text-2xl font-bold mb-6">{Msg::Education.tr(locale)}</h3>
                        {education}
                    </div>
                    <div class="p-8 rounded-3xl border border-muted/30">
                        <h3 class="text-2xl font-bold mb-6">{Msg::Languages.tr(locale)}</h3>
                        <div class="space-y-6">{languages}</div>
                    </div>
                </div>
            </div>
            <div class="mt-12 p-8 rounded-3xl border border-muted/30">
                <h3 class="text-2xl font-bold mb-8">{Msg::Certifications.tr(locale)}</h3>
                {certifications}
            </div>
        </div>
    }
}

/// The card keeps its heading even when the profile has no entry for the area.
fn area_card(area: Option<&ExpertiseArea>, fallback: Msg, locale: Locale) -> impl IntoView {
    let title = area
        .map(|a| a.title.resolve(locale))
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| fallback.tr(locale))
        .to_string();
    let description = area
        .map(|a| a.description.resolve(locale).to_string())
        .unwrap_or_default();
    let libraries = area
        .map(|a| a.libraries.clone())
        .unwrap_or_default()
        .into_iter()
        .map(|lib| {
            view! {
                <span class="px-3 py-1 border border-muted/40 rounded-full text-xs font-medium text-primary">
                    {lib}
                </span>
            }
        })
        .collect_view();

    view! {
        <div class="p-8 rounded-3xl border border-muted/30 shadow-sm">
            <h3 class="text-2xl font-bold mb-6">{title}</h3>
            <p class="text-muted-foreground mb-6">{description}</p>
            <div class="flex flex-wrap gap-2">{libraries}</div>
        </div>
    }
}
