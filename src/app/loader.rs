use leptos::prelude::*;
use serde::de::DeserializeOwned;

#[cfg(feature = "hydrate")]
use crate::config::SiteConfig;
use crate::{
    config::{PROFILE_DOCUMENT, PROJECTS_DOCUMENT},
    content::{ContentCache, LoadToken, PersonalProfile, Project, SectionState},
};

/// Both documents are shared page-wide so every section reading the profile
/// waits on the same request.
#[derive(Clone, Copy)]
pub struct Documents {
    profile: StoredValue<ContentCache<PersonalProfile>, LocalStorage>,
    projects: StoredValue<ContentCache<Vec<Project>>, LocalStorage>,
}

pub fn provide_documents() {
    provide_context(Documents {
        profile: StoredValue::new_local(ContentCache::new()),
        projects: StoredValue::new_local(ContentCache::new()),
    });
}

pub fn use_profile() -> ReadSignal<SectionState<PersonalProfile>> {
    let docs = expect_context::<Documents>();
    use_cached_document(docs.profile, PROFILE_DOCUMENT)
}

pub fn use_projects() -> ReadSignal<SectionState<Vec<Project>>> {
    let docs = expect_context::<Documents>();
    use_cached_document(docs.projects, PROJECTS_DOCUMENT)
}

/// Starts (or joins) the load of `name` and reports it into a signal owned
/// by the calling section. The signal stays `Loading` on the server.
fn use_cached_document<T>(
    cache: StoredValue<ContentCache<T>, LocalStorage>,
    name: &'static str,
) -> ReadSignal<SectionState<T>>
where
    T: DeserializeOwned + Send + Sync + 'static,
{
    let (state, set_state) = signal(SectionState::Loading);
    let token = LoadToken::new();
    on_cleanup({
        let token = token.clone();
        move || token.cancel()
    });

    #[cfg(feature = "hydrate")]
    {
        let url = expect_context::<SiteConfig>().resource_url(name);
        let load = cache.with_value(|c| c.load(&url, super::browser::fetch_document));
        leptos::task::spawn_local(async move {
            let result = load.await;
            token.publish(SectionState::from(result), |s| set_state.set(s));
        });
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = (cache, name, token, set_state);

    state
}
