use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

#[component]
pub fn NotFound() -> impl IntoView {
    // Real 404 status during server render
    #[cfg(feature = "ssr")]
    {
        if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
            response.set_status(axum::http::StatusCode::NOT_FOUND);
        }
    }

    view! {
        <Title text="404" />
        <main class="not-found">
            <h1>"404"</h1>
            <p>"Halaman tidak ditemukan."</p>
            <A href="/">"← kembali ke beranda"</A>
        </main>
    }
}
