mod about;
mod browser;
mod contact;
mod experience;
mod expertise;
mod header;
mod hero;
mod loader;
mod locale;
mod notify;
mod projects;
mod skills;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::{config::SiteConfig, i18n::Msg};

use about::About;
use contact::Contact;
use experience::Experience;
use expertise::Expertise;
use header::Header;
use hero::Hero;
use loader::provide_documents;
use locale::{provide_locale, use_locale};
use notify::{provide_notifier, ToastOutlet};
use projects::Projects;
use skills::Skills;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en" dir="ltr">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="bg-background text-foreground">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    provide_context(SiteConfig::from_build());
    provide_locale();
    provide_documents();
    provide_notifier();

    let locale = use_locale();

    view! {
        <Title text=move || Msg::SiteTitle.tr(locale.get()) />

        // one page, whatever path it is hosted under
        <Router>
            <Header />
            <main class="pt-16">
                <Routes fallback=|| view! { <HomePage /> }>
                    <Route path=path!("/") view=HomePage />
                </Routes>
            </main>
            <ToastOutlet />
        </Router>
    }
}

#[component]
fn HomePage() -> impl IntoView {
    view! {
        <Hero />
        <About />
        <Expertise />
        <Projects />
        <Skills />
        <Experience />
        <Contact />
    }
}

/// Spinner shown while a section's document is still on its way.
#[component]
fn LoadingPlaceholder(message: Msg) -> impl IntoView {
    let locale = use_locale();
    view! {
        <section class="py-20">
            <div class="text-center">
                <div class="w-12 h-12 border-4 border-primary/20 border-t-primary rounded-full animate-spin mx-auto mb-4"></div>
                <p class="text-muted-foreground">{move || message.tr(locale.get())}</p>
            </div>
        </section>
    }
}
