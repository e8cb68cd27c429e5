//! Discover page: popular movies, one API page at a time.

use leptos::prelude::*;

use crate::components::title_card::TitleCard;
use crate::net::types::{MediaType, Paged, TitleSummary};
use crate::state::remote::Remote;

#[component]
pub fn DiscoverPage() -> impl IntoView {
    let state = RwSignal::new(Remote::<Paged<TitleSummary>>::default());
    let page = RwSignal::new(1_u32);

    #[cfg(feature = "csr")]
    {
        let api = crate::net::api::use_api();
        Effect::new(move || {
            let requested = page.get();
            state.update(Remote::begin);
            let api = api.clone();
            leptos::task::spawn_local(async move {
                let result = crate::net::movies::discover(&api, requested).await;
                state.update(|s| s.finish(result));
            });
        });
    }

    let total_pages = move || state.get().data.and_then(|p| p.total_pages).unwrap_or(1);

    view! {
        <section class="discover-page">
            <h1>"Discover"</h1>
            <Show when=move || state.get().error.is_some()>
                <p class="page-error">{move || state.get().error.unwrap_or_default()}</p>
            </Show>
            <Show when=move || !state.get().loading fallback=|| view! { <p>"Loading movies..."</p> }>
                <div class="title-grid">
                    {move || {
                        state
                            .get()
                            .data
                            .map(|p| p.results)
                            .unwrap_or_default()
                            .into_iter()
                            .map(|title| view! { <TitleCard title=title media=MediaType::Movie/> })
                            .collect::<Vec<_>>()
                    }}
                </div>
            </Show>
            <div class="pager">
                <button
                    class="button"
                    disabled=move || page.get() <= 1
                    on:click=move |_| page.update(|p| *p = p.saturating_sub(1).max(1))
                >
                    "Previous"
                </button>
                <span class="pager__label">{move || format!("Page {} of {}", page.get(), total_pages())}</span>
                <button
                    class="button"
                    disabled=move || page.get() >= total_pages()
                    on:click=move |_| page.update(|p| *p += 1)
                >
                    "Next"
                </button>
            </div>
        </section>
    }
}
