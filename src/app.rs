//! Root application component with routing and context providers.
//!
//! SYSTEM CONTEXT
//! ==============
//! `leptos_router` owns history and the current location; which page renders
//! is decided by `routes::ROUTES` through `util::guard::resolve_outlet`, so
//! the route table and the guard can never disagree with the router.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::hooks::use_location;
use leptos_router::path;

use crate::components::site_header::SiteHeader;
use crate::config::AppConfig;
use crate::net::api::{ApiClient, provide_api};
use crate::pages::about::AboutPage;
use crate::pages::auth::{SigninPage, SignupPage};
use crate::pages::detail::{GenresDetailPage, MovieDetailPage, TvDetailPage};
use crate::pages::discover::DiscoverPage;
use crate::pages::genres::GenresPage;
use crate::pages::home::HomePage;
use crate::pages::not_found::NotFoundPage;
use crate::routes::Page;
use crate::state::auth::AuthState;
use crate::state::session::{Session, provide_session, use_session};
use crate::util::guard::{GuardPolicy, NavigationGuard, Outlet, resolve_outlet};

/// View for a route table page.
pub fn render(page: Page) -> AnyView {
    match page {
        Page::Home => view! { <HomePage/> }.into_any(),
        Page::Signin => view! { <SigninPage/> }.into_any(),
        Page::About => view! { <AboutPage/> }.into_any(),
        Page::Signup => view! { <SignupPage/> }.into_any(),
        Page::Discover => view! { <DiscoverPage/> }.into_any(),
        Page::Genres => view! { <GenresPage/> }.into_any(),
        Page::MovieDetail => view! { <MovieDetailPage/> }.into_any(),
        Page::TvDetail => view! { <TvDetailPage/> }.into_any(),
        Page::GenresDetail => view! { <GenresDetailPage/> }.into_any(),
    }
}

/// Renders the route-table page for the current path, or nothing while a
/// blocked navigation is redirected.
#[component]
fn RouteOutlet() -> impl IntoView {
    let session = use_session();
    let policy = use_context::<GuardPolicy>().unwrap_or_default();
    let pathname = use_location().pathname;

    move || match resolve_outlet(&pathname.get(), session.has_token(), policy) {
        Outlet::Page(page) => render(page),
        Outlet::Blocked => ().into_any(),
        Outlet::NotFound => view! { <NotFoundPage/> }.into_any(),
    }
}

/// Root application component.
///
/// Builds the session and API client once, provides them as context, and
/// mounts the navigation guard inside the router.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = AppConfig::load();
    let session = Session::browser();
    let auth = RwSignal::new(AuthState::from_session(&session));
    provide_api(ApiClient::new(&config, session.clone()));
    provide_session(session);
    provide_context(auth);
    provide_context(config.guard_policy);

    view! {
        <Title text="Movizio"/>

        <Router>
            <NavigationGuard policy=config.guard_policy/>
            <SiteHeader/>
            <main class="site-main">
                <Routes fallback=|| view! { <NotFoundPage/> }>
                    <Route path=path!("/") view=RouteOutlet/>
                    <Route path=path!("/*any") view=RouteOutlet/>
                </Routes>
            </main>
        </Router>
    }
}
