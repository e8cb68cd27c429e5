//! Card for a movie or show in discover and genre listings.

#[cfg(test)]
#[path = "title_card_test.rs"]
mod title_card_test;

use leptos::prelude::*;

use crate::net::types::{MediaType, TitleSummary};
use crate::routes::find_by_name;

const POSTER_BASE_URL: &str = "https://image.tmdb.org/t/p/w342";

/// Detail-page link for a title, built from the named route.
fn detail_href(media: MediaType, id: u64) -> String {
    let id = id.to_string();
    find_by_name("GenresDetail")
        .and_then(|route| route.href(&[("type", media.as_str()), ("id", id.as_str())]).ok())
        .unwrap_or_else(|| format!("/detail/{}/{id}", media.as_str()))
}

fn poster_url(poster_path: Option<&str>) -> Option<String> {
    poster_path
        .map(str::trim)
        .filter(|path| !path.is_empty())
        .map(|path| {
            if path.starts_with("http://") || path.starts_with("https://") {
                path.to_owned()
            } else {
                format!("{POSTER_BASE_URL}/{}", path.trim_start_matches('/'))
            }
        })
}

fn release_year(date: Option<&str>) -> Option<&str> {
    date.and_then(|d| d.get(..4)).filter(|y| y.chars().all(|c| c.is_ascii_digit()))
}

#[component]
pub fn TitleCard(title: TitleSummary, media: MediaType) -> impl IntoView {
    let href = detail_href(media, title.id);
    let poster = poster_url(title.poster_path.as_deref());
    let year = release_year(title.release_date.as_deref()).map(str::to_owned);
    let rating = title.vote_average.map(|v| format!("{v:.1}"));
    let name = title.title.clone();

    view! {
        <a class="title-card" href=href>
            {poster.map(|src| view! { <img class="title-card__poster" src=src alt=name/> })}
            <span class="title-card__name">{title.title}</span>
            <span class="title-card__meta">
                {year.unwrap_or_default()}
                {rating.map(|r| view! { <span class="title-card__rating">{r}</span> })}
            </span>
        </a>
    }
}
