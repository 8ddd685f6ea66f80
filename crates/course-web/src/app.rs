use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::{SsrMode, path};

use crate::pages::{BootcampPage, HomePage, NotFound, WebinarPage};

/// HTML document the server renders around the app
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="id">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <MetaTags />
            </head>
            <body>
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/course-web.css" />
        <Router>
            <Routes fallback=|| view! { <NotFound /> }>
                <Route path=path!("/") view=HomePage />
                // Async so a missing slug can still set the 404 status
                <Route path=path!("/bootcamp/:slug") view=BootcampPage ssr=SsrMode::Async />
                <Route path=path!("/webinar/:slug") view=WebinarPage ssr=SsrMode::Async />
            </Routes>
        </Router>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;

    #[test]
    fn test_detail_routes_render_async() {
        let routes = leptos_axum::generate_route_list(App);
        let details: Vec<_> = routes
            .iter()
            .filter(|r| r.path().starts_with("/bootcamp/") || r.path().starts_with("/webinar/"))
            .collect();

        assert!(details.iter().any(|r| r.path().starts_with("/bootcamp/")));
        assert!(details.iter().any(|r| r.path().starts_with("/webinar/")));
        assert!(details.iter().all(|r| matches!(r.mode(), SsrMode::Async)));

        let home = routes.iter().find(|r| r.path() == "/").unwrap();
        assert!(!matches!(home.mode(), SsrMode::Async));
    }
}
