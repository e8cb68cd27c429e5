//! Title detail pages for `/movie/:id`, `/tv/:id`, and `/detail/:type/:id`.
//!
//! All three render the same view; they differ only in where the media type
//! comes from.

#[cfg(test)]
#[path = "detail_test.rs"]
mod detail_test;

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::net::types::{MediaType, TitleDetail};
use crate::routes::match_path;
use crate::state::remote::Remote;

/// Validate route params into a fetch target.
fn detail_target(media: Option<&str>, id: Option<&str>) -> Option<(MediaType, String)> {
    let media = MediaType::parse(media?)?;
    let id = id?.trim();
    if id.is_empty() || !id.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
        return None;
    }
    Some((media, id.to_owned()))
}

fn format_runtime(minutes: u32) -> String {
    match (minutes / 60, minutes % 60) {
        (0, m) => format!("{m}m"),
        (h, 0) => format!("{h}h"),
        (h, m) => format!("{h}h {m}m"),
    }
}

#[component]
fn TitleDetailView(#[prop(into)] target: Signal<Option<(MediaType, String)>>) -> impl IntoView {
    let state = RwSignal::new(Remote::<TitleDetail>::default());

    #[cfg(feature = "csr")]
    {
        let api = crate::net::api::use_api();
        Effect::new(move || {
            let Some((media, id)) = target.get() else {
                return;
            };
            state.update(Remote::begin);
            let api = api.clone();
            leptos::task::spawn_local(async move {
                let result = crate::net::movies::title_detail(&api, media, &id).await;
                state.update(|s| s.finish(result));
            });
        });
    }

    view! {
        <section class="detail-page">
            <Show when=move || target.get().is_none()>
                <p class="page-error">"Unknown title."</p>
            </Show>
            <Show when=move || state.get().error.is_some()>
                <p class="page-error">{move || state.get().error.unwrap_or_default()}</p>
            </Show>
            <Show when=move || !state.get().loading fallback=|| view! { <p>"Loading..."</p> }>
                {move || {
                    state
                        .get()
                        .data
                        .map(|detail| {
                            let genres = detail
                                .genres
                                .iter()
                                .map(|g| g.name.as_str())
                                .collect::<Vec<_>>()
                                .join(", ");
                            view! {
                                <article class="detail">
                                    <h1>{detail.title}</h1>
                                    <p class="detail__meta">
                                        {detail.release_date.unwrap_or_default()}
                                        " "
                                        {detail.runtime.map(format_runtime).unwrap_or_default()}
                                        " "
                                        {detail.vote_average.map(|v| format!("{v:.1}")).unwrap_or_default()}
                                    </p>
                                    <p class="detail__genres">{genres}</p>
                                    <p class="detail__overview">{detail.overview}</p>
                                </article>
                            }
                        })
                }}
            </Show>
        </section>
    }
}

/// Fetch target from the current path's route parameters. `media` overrides
/// the `:type` parameter for routes that fix it.
fn target_for_path(path: &str, media: Option<&str>) -> Option<(MediaType, String)> {
    let matched = match_path(path)?;
    detail_target(media.or_else(|| matched.param("type")), matched.param("id"))
}

#[component]
pub fn MovieDetailPage() -> impl IntoView {
    let pathname = use_location().pathname;
    let target = Signal::derive(move || target_for_path(&pathname.get(), Some("movie")));
    view! { <TitleDetailView target=target/> }
}

#[component]
pub fn TvDetailPage() -> impl IntoView {
    let pathname = use_location().pathname;
    let target = Signal::derive(move || target_for_path(&pathname.get(), Some("tv")));
    view! { <TitleDetailView target=target/> }
}

#[component]
pub fn GenresDetailPage() -> impl IntoView {
    let pathname = use_location().pathname;
    let target = Signal::derive(move || target_for_path(&pathname.get(), None));
    view! { <TitleDetailView target=target/> }
}
