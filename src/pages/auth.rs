//! Sign-in and sign-up pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Both forms exchange their input for a session token, hand it to
//! `Session::sign_in`, and land on the home page. This is the only place the
//! token is written.

use leptos::prelude::*;
#[cfg(feature = "csr")]
use leptos_router::NavigateOptions;

use crate::state::auth::AuthState;
use crate::util::input::{validate_credentials, validate_registration};

/// Store `token`, publish the signed-in state, and go home. A storage
/// notice travels in `AuthState` so the header shows it after navigation.
#[cfg(feature = "csr")]
fn finish_sign_in<F>(
    session: &crate::state::session::Session,
    token: &str,
    auth: RwSignal<AuthState>,
    navigate: F,
) where
    F: Fn(&str, NavigateOptions),
{
    auth.set(crate::state::auth::complete_sign_in(session, token));
    navigate("/", NavigateOptions::default());
}

#[component]
pub fn SigninPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    #[cfg(feature = "csr")]
    let (api, session, navigate) = (
        crate::net::api::use_api(),
        crate::state::session::use_session(),
        leptos_router::hooks::use_navigate(),
    );

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if auth.get_untracked().loading {
            return;
        }
        let credentials = match validate_credentials(&email.get_untracked(), &password.get_untracked()) {
            Ok(credentials) => credentials,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        auth.update(|state| state.loading = true);
        info.set("Signing in...".to_owned());

        #[cfg(feature = "csr")]
        {
            let (api, session, navigate) = (api.clone(), session.clone(), navigate.clone());
            leptos::task::spawn_local(async move {
                match crate::net::movies::login(&api, &credentials).await {
                    Ok(token) => finish_sign_in(&session, &token, auth, navigate),
                    Err(err) => {
                        info.set(format!("Sign in failed: {}", crate::state::remote::error_message(&err)));
                        auth.update(|state| state.loading = false);
                    }
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = credentials;
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Sign in"</h1>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="auth-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="button" type="submit" disabled=move || auth.get().loading>
                        "Sign in"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="auth-message">{move || info.get()}</p>
                </Show>
                <p class="auth-card__switch">
                    "No account? " <a href="/register">"Register"</a>
                </p>
            </div>
        </div>
    }
}

#[component]
pub fn SignupPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    #[cfg(feature = "csr")]
    let (api, session, navigate) = (
        crate::net::api::use_api(),
        crate::state::session::use_session(),
        leptos_router::hooks::use_navigate(),
    );

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if auth.get_untracked().loading {
            return;
        }
        let registration = match validate_registration(
            &name.get_untracked(),
            &email.get_untracked(),
            &password.get_untracked(),
            &confirm.get_untracked(),
        ) {
            Ok(registration) => registration,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        auth.update(|state| state.loading = true);
        info.set("Creating account...".to_owned());

        #[cfg(feature = "csr")]
        {
            let (api, session, navigate) = (api.clone(), session.clone(), navigate.clone());
            leptos::task::spawn_local(async move {
                match crate::net::movies::register(&api, &registration).await {
                    Ok(token) => finish_sign_in(&session, &token, auth, navigate),
                    Err(err) => {
                        info.set(format!("Registration failed: {}", crate::state::remote::error_message(&err)));
                        auth.update(|state| state.loading = false);
                    }
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = registration;
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Create account"</h1>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="auth-input"
                        type="text"
                        placeholder="Name"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="password"
                        placeholder="Confirm password"
                        prop:value=move || confirm.get()
                        on:input=move |ev| confirm.set(event_target_value(&ev))
                    />
                    <button class="button" type="submit" disabled=move || auth.get().loading>
                        "Register"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="auth-message">{move || info.get()}</p>
                </Show>
                <p class="auth-card__switch">
                    "Already registered? " <a href="/login">"Sign in"</a>
                </p>
            </div>
        </div>
    }
}
