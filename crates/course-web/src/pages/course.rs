use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;
use shared::CONFIG;

use crate::api::get_course;
use crate::assets::storage_url;
use crate::components::{BenefitsSection, CtaSection, RequirementsSection, ToolsSection};
use crate::models::{Course, CourseKind};
use crate::pages::NotFound;

#[component]
pub fn BootcampPage() -> impl IntoView {
    view! { <CoursePage kind=CourseKind::Bootcamp /> }
}

#[component]
pub fn WebinarPage() -> impl IntoView {
    view! { <CoursePage kind=CourseKind::Webinar /> }
}

/// Detail page for one bootcamp or webinar, looked up by the `:slug` param
#[component]
fn CoursePage(kind: CourseKind) -> impl IntoView {
    let params = use_params_map();
    let slug = move || params.read().get("slug").unwrap_or_default();
    let course = Resource::new(slug, move |slug| get_course(kind, slug));

    view! {
        <Suspense fallback=move || view! { <div class="loading">"Memuat..."</div> }>
            {move || {
                course.get().map(|result| match result {
                    Ok(Some(course)) => view! { <CourseDetail course=course kind=kind /> }.into_any(),
                    Ok(None) => view! { <NotFound /> }.into_any(),
                    Err(err) => {
                        leptos::logging::error!("failed to load {}: {err}", kind.label());
                        view! {
                            <main class="unavailable">
                                <p>"Halaman ini sedang tidak dapat dimuat. Silakan coba lagi nanti."</p>
                                <A href="/">"← kembali ke beranda"</A>
                            </main>
                        }.into_any()
                    }
                })
            }}
        </Suspense>
    }
}

#[component]
fn CourseDetail(course: Course, kind: CourseKind) -> impl IntoView {
    let page_title = format!("{} · {}", course.title, CONFIG.name);
    let image = storage_url(course.image.as_deref());
    let alt = course.title.clone();
    let cta_title = course.title.clone();

    view! {
        <Title text=page_title />
        <main>
            <header class="course-hero">
                <div class="course-hero-text">
                    <span class="course-kind">{kind.label()}</span>
                    <h1 class="course-title">{course.title}</h1>
                    {course.subtitle.map(|s| view! { <p class="course-subtitle">{s}</p> })}
                    <div class="course-meta">
                        {course.schedule.map(|s| view! { <span>{s}</span> })}
                        {course.price.map(|p| view! { <strong>{p}</strong> })}
                    </div>
                </div>
                <img class="course-hero-image" src=image alt=alt />
            </header>

            <BenefitsSection benefits=course.benefits />
            <RequirementsSection requirements=course.requirements />
            <ToolsSection tools=course.tools />
            <CtaSection course_title=cta_title />

            <footer class="course-footer">
                <A href="/">"← kembali ke beranda"</A>
            </footer>
        </main>
    }
}
