use leptos::prelude::*;

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <section class="about-page">
            <h1>"About Movizio"</h1>
            <p>
                "Movizio lists popular movies and shows, grouped by genre, with "
                "details for each title. Data is served by the Movizio API."
            </p>
        </section>
    }
}
