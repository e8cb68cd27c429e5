//! Genres page: genre list, and titles for the selected genre.

use leptos::prelude::*;

use crate::components::title_card::TitleCard;
use crate::net::types::{GenreList, MediaType, Paged, TitleSummary};
use crate::state::remote::Remote;

#[component]
pub fn GenresPage() -> impl IntoView {
    let genres = RwSignal::new(Remote::<GenreList>::default());
    let titles = RwSignal::new(Remote::<Paged<TitleSummary>>::default());
    let selected = RwSignal::new(None::<u64>);
    let media = RwSignal::new(MediaType::Movie);

    #[cfg(feature = "csr")]
    {
        let api = crate::net::api::use_api();
        {
            let api = api.clone();
            genres.update(Remote::begin);
            leptos::task::spawn_local(async move {
                let result = crate::net::movies::genres(&api).await;
                genres.update(|s| s.finish(result));
            });
        }
        Effect::new(move || {
            let Some(genre_id) = selected.get() else {
                return;
            };
            let media_type = media.get();
            titles.update(Remote::begin);
            let api = api.clone();
            leptos::task::spawn_local(async move {
                let result = crate::net::movies::titles_by_genre(&api, genre_id, media_type).await;
                titles.update(|s| s.finish(result));
            });
        });
    }

    view! {
        <section class="genres-page">
            <h1>"Genres"</h1>
            <Show when=move || genres.get().error.is_some()>
                <p class="page-error">{move || genres.get().error.unwrap_or_default()}</p>
            </Show>
            <div class="genre-list">
                {move || {
                    genres
                        .get()
                        .data
                        .map(|list| list.genres)
                        .unwrap_or_default()
                        .into_iter()
                        .map(|genre| {
                            let id = genre.id;
                            view! {
                                <button
                                    class="genre-chip"
                                    class:genre-chip--active=move || selected.get() == Some(id)
                                    on:click=move |_| selected.set(Some(id))
                                >
                                    {genre.name}
                                </button>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </div>
            <div class="media-toggle">
                <button
                    class:media-toggle--active=move || media.get() == MediaType::Movie
                    on:click=move |_| media.set(MediaType::Movie)
                >
                    "Movies"
                </button>
                <button
                    class:media-toggle--active=move || media.get() == MediaType::Tv
                    on:click=move |_| media.set(MediaType::Tv)
                >
                    "TV"
                </button>
            </div>
            <Show when=move || titles.get().error.is_some()>
                <p class="page-error">{move || titles.get().error.unwrap_or_default()}</p>
            </Show>
            <Show when=move || !titles.get().loading fallback=|| view! { <p>"Loading titles..."</p> }>
                <div class="title-grid">
                    {move || {
                        let media_type = media.get();
                        titles
                            .get()
                            .data
                            .map(|p| p.results)
                            .unwrap_or_default()
                            .into_iter()
                            .map(|title| view! { <TitleCard title=title media=media_type/> })
                            .collect::<Vec<_>>()
                    }}
                </div>
            </Show>
        </section>
    }
}
