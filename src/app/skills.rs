use leptos::prelude::*;

use super::{loader::use_profile, locale::use_locale};
use crate::{
    content::profile::{PersonalProfile, Skill},
    i18n::Msg,
    locale::Locale,
};

#[component]
pub fn Skills() -> impl IntoView {
    let locale = use_locale();
    let profile = use_profile();

    view! {
        <section id="skills" class="py-20">
            <div class="max-w-6xl mx-auto px-4">
                <h2 class="text-3xl md:text-4xl font-bold text-center mb-12">
                    {move || Msg::SkillsTitle.tr(locale.get())}
                </h2>
                {move || {
                    let locale = locale.get();
                    profile.get().loaded().map(|p| skill_categories(&p, locale))
                }}
            </div>
        </section>
    }
}

fn skill_categories(p: &PersonalProfile, locale: Locale) -> impl IntoView {
    let cards = p
        .skills
        .categories()
        .into_iter()
        .map(|(key, skills)| {
            let title = Msg::skill_category(key)
                .map(|msg| msg.tr(locale).to_string())
                .unwrap_or_else(|| key.to_string());
            view! {
                <div class="p-6 rounded-2xl border border-muted/30">
                    <h3 class="text-xl font-semibold mb-6">{title}</h3>
                    <div class="space-y-4">
                        {skills.iter().map(|skill| skill_bar(skill, locale)).collect_view()}
                    </div>
                </div>
            }
        })
        .collect_view();

    view! { <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">{cards}</div> }
}

fn skill_bar(skill: &Skill, locale: Locale) -> impl IntoView {
    let progress = skill.progress();
    let style = match skill.color.as_deref().filter(|c| !c.trim().is_empty()) {
        Some(color) => format!("width: {progress}%; background-color: {color}"),
        None => format!("width: {progress}%"),
    };

    view! {
        <div>
            <div class="flex justify-between text-sm mb-1">
                <span class="font-medium">{skill.name.clone()}</span>
                <span class="text-muted-foreground">{skill.level.resolve(locale).to_string()}</span>
            </div>
            <div class="h-2 rounded-full bg-muted/30 overflow-hidden">
                <div class="h-full rounded-full bg-primary transition-all" style=style></div>
            </div>
        </div>
    }
}
