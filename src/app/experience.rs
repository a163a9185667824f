use leptos::{either::*, prelude::*};

use super::{loader::use_profile, locale::use_locale, LoadingPlaceholder};
use crate::{
    content::{
        profile::{Education, Experience as Entry},
        BilingualText, PersonalProfile, SectionState,
    },
    i18n::Msg,
    locale::Locale,
};

#[component]
pub fn Experience() -> impl IntoView {
    let locale = use_locale();
    let profile = use_profile();

    view! {
        <section id="experience" class="py-20">
            <div class="max-w-6xl mx-auto px-4">
                <div class="text-center mb-20">
                    <h2 class="text-4xl md:text-5xl font-bold mb-6">
                        {move || Msg::ExperienceTitle.tr(locale.get())}
                    </h2>
                    <p class="text-lg text-muted-foreground max-w-2xl mx-auto">
                        {move || Msg::ExperienceSubtitle.tr(locale.get())}
                    </p>
                </div>
                {move || {
                    let locale = locale.get();
                    match profile.get() {
                        SectionState::Loading => {
                            EitherOf3::A(
                                view! { <LoadingPlaceholder message=Msg::LoadingExperience /> },
                            )
                        }
                        SectionState::Empty => EitherOf3::B(()),
                        SectionState::Loaded(p) => EitherOf3::C(timeline(&p, locale)),
                    }
                }}
            </div>
        </section>
    }
}

/// Entries in document order, closed by the first education entry.
fn timeline(p: &PersonalProfile, locale: Locale) -> impl IntoView {
    let entries = p
        .experience
        .iter()
        .enumerate()
        .map(|(index, entry)| experience_card(entry, index, locale))
        .collect_view();
    let education = p.education.first().map(|edu| education_card(edu, locale));
    let achievements =
        (!p.achievements.is_empty()).then(|| achievement_grid(&p.achievements, locale));

    view! {
        <div class="relative max-w-4xl mx-auto">
            <div class="absolute start-1/2 -translate-x-1/2 rtl:translate-x-1/2 h-full w-0.5 bg-primary/30 hidden md:block"></div>
            <div class="space-y-12">{entries} {education}</div>
        </div>
        {achievements}
    }
}

fn experience_card(entry: &Entry, index: usize, locale: Locale) -> impl IntoView {
    let row = if index % 2 == 0 {
        "md:flex-row"
    } else {
        "md:flex-row-reverse"
    };
    let highlights = entry
        .highlights
        .iter()
        .map(|h| {
            view! {
                <li class="flex gap-2 items-start text-xs text-muted-foreground">
                    <span class="text-primary">"✔"</span>
                    <span>{h.resolve(locale).to_string()}</span>
                </li>
            }
        })
        .collect_view();

    view! {
        <div
            data-entry=entry.id.to_string()
            class=format!("relative flex items-center justify-between md:justify-normal gap-8 {row}")
        >
            <div class="w-full md:w-[45%] rounded-2xl border border-muted/30 p-6">
                <p class="text-sm text-primary font-bold mb-2">
                    {entry.duration.resolve(locale).to_string()}
                </p>
                <h4 class="text-xl font-bold mb-1">{entry.title.resolve(locale).to_string()}</h4>
                <p class="font-semibold mb-4">{entry.company.resolve(locale).to_string()}</p>
                <p class="text-muted-foreground text-sm mb-4 leading-relaxed">
                    {entry.description.resolve(locale).to_string()}
                </p>
                <ul class="space-y-2">{highlights}</ul>
            </div>
        </div>
    }
}

fn education_card(edu: &Education, locale: Locale) -> impl IntoView {
    let coursework = edu
        .relevant_coursework
        .iter()
        .map(|course| {
            view! {
                <span class="px-3 py-1 rounded-full text-xs font-medium bg-primary/10 text-primary">
                    {course.resolve(locale).to_string()}
                </span>
            }
        })
        .collect_view();

    view! {
        <div class="relative flex items-center justify-between md:justify-normal gap-8 md:flex-row-reverse">
            <div class="w-full md:w-[45%] rounded-2xl border border-muted/30 p-6">
                <p class="text-sm font-bold mb-2">{edu.graduation_date.clone()}</p>
                <h4 class="text-xl font-bold mb-1">{edu.degree.resolve(locale).to_string()}</h4>
                <p class="text-primary font-semibold mb-4">
                    {edu.university.resolve(locale).to_string()}
                </p>
                <div class="flex flex-wrap gap-2">{coursework}</div>
            </div>
        </div>
    }
}

fn achievement_grid(items: &[BilingualText], locale: Locale) -> impl IntoView {
    view! {
        <div class="mt-20 max-w-4xl mx-auto rounded-3xl border border-primary/20 p-8">
            <h4 class="text-2xl font-bold mb-6">{Msg::KeyAchievements.tr(locale)}</h4>
            <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                {items
                    .iter()
                    .map(|item| {
                        view! {
                            <div class="flex gap-3 items-start">
                                <span class="text-primary">"★"</span>
                                <p class="text-sm">{item.resolve(locale).to_string()}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
