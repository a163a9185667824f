use std::sync::Arc;

use leptos::{either::*, prelude::*};

use super::{loader::use_projects, locale::use_locale, LoadingPlaceholder};
use crate::{
    content::{
        project::{filter_projects, format_display_date, tag_badge_class, tag_buttons, TagCount},
        Project, SectionState,
    },
    i18n::Msg,
    locale::Locale,
};

#[component]
pub fn Projects() -> impl IntoView {
    let locale = use_locale();
    let projects = use_projects();
    // survive the gallery re-rendering when the document settles
    let search = RwSignal::new(String::new());
    let selected = RwSignal::new(None::<String>);

    view! {
        <section id="projects" class="py-20">
            <div class="max-w-6xl mx-auto px-4">
                <div class="text-center mb-16">
                    <h2 class="text-4xl md:text-5xl font-bold mb-6">
                        {move || Msg::ProjectsTitle.tr(locale.get())}
                    </h2>
                    <p class="text-lg text-muted-foreground max-w-2xl mx-auto">
                        {move || Msg::ProjectsSubtitle.tr(locale.get())}
                    </p>
                </div>
                {move || match projects.get() {
                    SectionState::Loading => {
                        EitherOf3::A(view! { <LoadingPlaceholder message=Msg::LoadingProjects /> })
                    }
                    SectionState::Empty => EitherOf3::B(()),
                    SectionState::Loaded(list) => {
                        EitherOf3::C(view! { <ProjectGallery projects=list search selected /> })
                    }
                }}
            </div>
        </section>
    }
}

#[component]
fn ProjectGallery(
    projects: Arc<Vec<Project>>,
    search: RwSignal<String>,
    selected: RwSignal<Option<String>>,
) -> impl IntoView {
    let locale = use_locale();
    let total = projects.len();

    let tags = tag_buttons(&projects)
        .into_iter()
        .map(|TagCount { tag, count }| {
            let label = format!("{tag} ({count})");
            let active = {
                let tag = tag.clone();
                move || selected.get().as_deref() == Some(tag.as_str())
            };
            view! {
                <button
                    class=move || filter_button_class(active())
                    on:click=move |_| selected.set(Some(tag.clone()))
                >
                    {label}
                </button>
            }
        })
        .collect_view();

    let grid = move || {
        let locale = locale.get();
        let search = search.get();
        let tag = selected.get();
        let shown = filter_projects(&projects, &search, tag.as_deref(), locale);
        if shown.is_empty() {
            Either::Left(
                view! {
                    <p class="text-center text-muted-foreground py-12">
                        {Msg::NoProjects.tr(locale)}
                    </p>
                },
            )
        } else {
            Either::Right(
                view! {
                    <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">
                        {shown.into_iter().map(|p| project_card(p, locale)).collect_view()}
                    </div>
                },
            )
        }
    };

    view! {
        <div class="mb-12 space-y-6">
            <div class="max-w-2xl mx-auto">
                <input
                    type="text"
                    bind:value=search
                    placeholder=move || Msg::SearchProjects.tr(locale.get())
                    class="w-full px-4 py-3 rounded-xl border border-muted/40 bg-background text-foreground focus:outline-none focus:ring-2 focus:ring-primary/30"
                />
            </div>
            <div class="flex flex-wrap gap-2 justify-center">
                <button
                    class=move || filter_button_class(selected.get().is_none())
                    on:click=move |_| selected.set(None)
                >
                    {move || format!("{} ({total})", Msg::AllProjects.tr(locale.get()))}
                </button>
                {tags}
            </div>
        </div>
        {grid}
    }
}

fn filter_button_class(active: bool) -> &'static str {
    if active {
        "px-4 py-2 rounded-full bg-primary text-background"
    } else {
        "px-4 py-2 rounded-full border border-muted/40 hover:border-primary"
    }
}

fn project_card(p: &Project, locale: Locale) -> impl IntoView {
    let badges = p
        .tags()
        .map(|tag| {
            view! {
                <span class=format!(
                    "px-3 py-1 rounded-full text-[10px] font-bold uppercase tracking-wider {}",
                    tag_badge_class(tag),
                )>{tag.to_string()}</span>
            }
        })
        .collect_view();
    let live = p.homepage().map(|href| {
        view! {
            <a
                href=href.to_string()
                target="_blank"
                rel="noopener noreferrer"
                class="flex-1 text-center px-3 py-2 rounded-xl bg-primary text-background text-sm"
            >
                {Msg::Live.tr(locale)}
            </a>
        }
    });

    view! {
        <div class="h-full rounded-2xl border border-muted/30 overflow-hidden flex flex-col hover:border-primary/50 transition-colors">
            <div class="p-6 border-b border-muted/20">
                <h3 class="text-xl font-bold mb-3">{p.name.clone()}</h3>
                <div class="flex flex-wrap gap-2">{badges}</div>
            </div>
            <div class="p-6 flex-1">
                <p class="text-muted-foreground line-clamp-3 text-sm leading-relaxed">
                    {p.description.resolve(locale).to_string()}
                </p>
            </div>
            <div class="px-6 py-4 border-t border-muted/20 flex gap-4 text-xs text-muted-foreground">
                <span>"★ " {p.stars}</span>
                <span>"⑂ " {p.forks}</span>
                <span class="ms-auto">{format_display_date(&p.updated_at, locale)}</span>
            </div>
            <div class="px-6 py-4 border-t border-muted/20 flex gap-3">
                <a
                    href=p.url.clone()
                    target="_blank"
                    rel="noopener noreferrer"
                    class="flex-1 text-center px-3 py-2 rounded-xl border border-muted/40 text-sm hover:border-primary"
                >
                    {Msg::Code.tr(locale)}
                </a>
                {live}
            </div>
        </div>
    }
}
