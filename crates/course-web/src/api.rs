//! Server functions that hand catalog data to pages

use leptos::prelude::*;

use crate::models::{Course, CourseKind, ProgramStats};

#[cfg(feature = "ssr")]
fn catalog() -> Result<std::sync::Arc<crate::catalog::Catalog>, ServerFnError> {
    use_context::<std::sync::Arc<crate::catalog::Catalog>>().ok_or_else(|| {
        tracing::error!("catalog missing from request context");
        ServerFnError::new("catalog unavailable")
    })
}

#[cfg(feature = "ssr")]
fn lookup(kind: CourseKind, slug: &str) -> Result<Option<Course>, ServerFnError> {
    let course = catalog()?.course(kind, slug).cloned();
    if course.is_none() {
        tracing::info!(kind = kind.label(), slug, "course not found");
    }
    Ok(course)
}

#[server]
pub async fn get_stats() -> Result<ProgramStats, ServerFnError> {
    Ok(catalog()?.stats().clone())
}

#[server]
pub async fn get_bootcamp(slug: String) -> Result<Option<Course>, ServerFnError> {
    lookup(CourseKind::Bootcamp, &slug)
}

#[server]
pub async fn get_webinar(slug: String) -> Result<Option<Course>, ServerFnError> {
    lookup(CourseKind::Webinar, &slug)
}

/// Listing cards for the home page
#[server]
pub async fn get_courses(kind: CourseKind) -> Result<Vec<Course>, ServerFnError> {
    Ok(catalog()?.courses(kind).to_vec())
}

/// Fetch one course of the given kind
pub async fn get_course(kind: CourseKind, slug: String) -> Result<Option<Course>, ServerFnError> {
    match kind {
        CourseKind::Bootcamp => get_bootcamp(slug).await,
        CourseKind::Webinar => get_webinar(slug).await,
    }
}
