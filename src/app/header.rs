use leptos::prelude::*;

use super::{browser::scroll_to_section, loader::use_profile, locale::use_locale};
use crate::i18n::Msg;

const NAV_ITEMS: [(&str, Msg); 5] = [
    ("about", Msg::NavAbout),
    ("projects", Msg::NavProjects),
    ("skills", Msg::NavSkills),
    ("experience", Msg::NavExperience),
    ("contact", Msg::NavContact),
];

#[component]
pub fn Header() -> impl IntoView {
    let locale = use_locale();
    let profile = use_profile();
    let (menu_open, set_menu_open) = signal(false);

    let brand = move || {
        profile
            .get()
            .loaded()
            .map(|p| p.personal.initials())
            .filter(|initials| !initials.is_empty())
            .unwrap_or_else(|| "~".to_string())
    };

    let nav_links = move |mobile: bool| {
        NAV_ITEMS
            .into_iter()
            .map(|(id, label)| {
                let class = if mobile {
                    "block px-4 py-2 hover:text-primary"
                } else {
                    "px-3 py-2 hover:text-primary transition-colors"
                };
                view! {
                    <a
                        href=format!("#{id}")
                        class=class
                        on:click=move |ev| {
                            ev.prevent_default();
                            set_menu_open.set(false);
                            scroll_to_section(id);
                        }
                    >
                        {move || label.tr(locale.get())}
                    </a>
                }
            })
            .collect_view()
    };

    view! {
        <header class="fixed top-0 inset-x-0 z-40 bg-background/90 backdrop-blur shadow-lg">
            <div class="max-w-6xl mx-auto px-4 sm:px-6 lg:px-8 h-16 flex items-center justify-between">
                <a
                    href="#hero"
                    class="text-2xl font-bold text-primary"
                    on:click=move |ev| {
                        ev.prevent_default();
                        scroll_to_section("hero");
                    }
                >
                    {brand}
                </a>
                <nav class="hidden md:flex items-center gap-2">{nav_links(false)}</nav>
                <div class="flex items-center gap-2">
                    <button
                        class="px-3 py-1 rounded-md border border-primary/40 hover:bg-primary/10"
                        on:click=move |_| locale.update(|l| *l = l.toggle())
                    >
                        {move || Msg::SwitchLanguage.tr(locale.get())}
                    </button>
                    <button
                        class="md:hidden px-2 py-1"
                        aria-label="menu"
                        on:click=move |_| set_menu_open.update(|open| *open = !*open)
                    >
                        "☰"
                    </button>
                </div>
            </div>
            <Show when=move || menu_open.get()>
                <nav class="md:hidden border-t border-primary/20 py-2">{nav_links(true)}</nav>
            </Show>
        </header>
    }
}
