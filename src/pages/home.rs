//! Public landing page.

use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <section class="home-page">
            <h1>"Movizio"</h1>
            <p class="home-page__tagline">"Find something to watch tonight."</p>
            <div class="home-page__actions">
                <a class="button" href="/discover">"Discover movies"</a>
                <a class="button button--secondary" href="/genres">"Browse genres"</a>
            </div>
        </section>
    }
}
