//! Top navigation bar with sign-in / sign-out and the auth notice.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::{AuthState, sign_out};
use crate::state::session::use_session;

#[component]
pub fn SiteHeader() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let session = use_session();
    let navigate = use_navigate();

    let on_sign_out = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        auth.set(sign_out(&session));
        navigate("/", NavigateOptions::default());
    };

    view! {
        <header class="site-header">
            <a class="site-header__brand" href="/">"Movizio"</a>
            <nav class="site-header__nav">
                <a href="/discover">"Discover"</a>
                <a href="/genres">"Genres"</a>
                <a href="/about">"About"</a>
            </nav>
            <div class="site-header__auth" class:hidden=move || auth.get().signed_in>
                <a href="/login">"Sign in"</a>
                <a href="/register">"Register"</a>
            </div>
            <div class="site-header__auth" class:hidden=move || !auth.get().signed_in>
                <button class="site-header__signout" on:click=on_sign_out>
                    "Sign out"
                </button>
            </div>
            <Show when=move || auth.get().notice.is_some()>
                <p class="site-header__notice">
                    {move || auth.get().notice.unwrap_or_default()}
                    <button
                        class="site-header__dismiss"
                        on:click=move |_| auth.update(|state| state.notice = None)
                    >
                        "Dismiss"
                    </button>
                </p>
            </Show>
        </header>
    }
}
