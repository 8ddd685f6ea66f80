#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use std::path::PathBuf;
    use std::sync::Arc;

    use anyhow::Context;
    use axum::Router;
    use course_web::app::{App, shell};
    use course_web::catalog::{Catalog, DEFAULT_CATALOG_PATH};
    use leptos::prelude::*;
    use leptos_axum::{LeptosRoutes, generate_route_list};

    course_web::logging::init_server_logger();

    let catalog_path =
        std::env::var("CATALOG_PATH").map_or_else(|_| PathBuf::from(DEFAULT_CATALOG_PATH), PathBuf::from);
    let catalog = Catalog::load(&catalog_path)
        .inspect_err(|err| tracing::error!("{err:#}"))
        .map(Arc::new)?;
    tracing::info!(path = %catalog_path.display(), "catalog loaded");

    let conf = get_configuration(None).context("Failed to read leptos configuration")?;
    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;
    let routes = generate_route_list(App);

    let app = Router::new()
        .leptos_routes_with_context(
            &leptos_options,
            routes,
            {
                let catalog = Arc::clone(&catalog);
                move || provide_context(Arc::clone(&catalog))
            },
            {
                let leptos_options = leptos_options.clone();
                move || shell(leptos_options.clone())
            },
        )
        .fallback(leptos_axum::file_and_error_handler(shell))
        .with_state(leptos_options);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("listening on http://{addr}");

    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}

#[cfg(not(feature = "ssr"))]
fn main() {
    // Client entry is `hydrate` in lib.rs; the binary only serves with `ssr`.
}
