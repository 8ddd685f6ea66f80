use leptos::prelude::*;
use leptos_meta::Title;
use shared::CONFIG;

use crate::api::{get_courses, get_stats};
use crate::assets::storage_url;
use crate::components::{AboutSection, ContactSection, CtaSection, ProgramSection, Section};
use crate::models::{Course, CourseKind, ProgramStats};

#[component]
pub fn HomePage() -> impl IntoView {
    let stats = Resource::new(|| (), |_| get_stats());

    view! {
        <Title text=CONFIG.name />
        <main>
            <header class="hero">
                <h1 class="hero-title">{CONFIG.name}</h1>
                <p class="hero-tagline">{CONFIG.tagline}</p>
                <a class="hero-button" href="#program">"Lihat program"</a>
            </header>

            <AboutSection />

            <Suspense fallback=move || view! { <div class="loading">"Memuat program..."</div> }>
                {move || {
                    stats.get().map(|result| match result {
                        Ok(stats) => view! { <ProgramSection stats=stats /> }.into_any(),
                        Err(err) => {
                            leptos::logging::warn!("program stats unavailable: {err}");
                            view! { <ProgramSection stats=ProgramStats::default() /> }.into_any()
                        }
                    })
                }}
            </Suspense>

            <CourseList kind=CourseKind::Bootcamp />
            <CourseList kind=CourseKind::Webinar />

            <ContactSection />
            <CtaSection />
        </main>
    }
}

/// Listing of every course of one kind
#[component]
fn CourseList(kind: CourseKind) -> impl IntoView {
    let courses = Resource::new(|| (), move |_| get_courses(kind));
    let id = kind.label().to_lowercase();

    view! {
        <Section id=id title=kind.label()>
            <Suspense fallback=move || view! { <div class="loading">"Memuat..."</div> }>
                {move || {
                    courses.get().map(|result| match result {
                        Ok(list) if !list.is_empty() => view! {
                            <div class="course-grid">
                                {list.into_iter().map(|course| view! { <CourseCard course=course kind=kind /> }).collect_view()}
                            </div>
                        }.into_any(),
                        Ok(_) => view! {
                            <p class="empty">"Belum ada jadwal " {kind.label()} " terbaru."</p>
                        }.into_any(),
                        Err(err) => {
                            leptos::logging::warn!("{} list unavailable: {err}", kind.label());
                            view! { <p class="empty">"Daftar program belum dapat dimuat."</p> }.into_any()
                        }
                    })
                }}
            </Suspense>
        </Section>
    }
}

#[component]
fn CourseCard(course: Course, kind: CourseKind) -> impl IntoView {
    let href = course.href(kind);
    let image = storage_url(course.image.as_deref());
    let alt = course.title.clone();

    view! {
        <a class="course-card" href=href>
            <img class="course-card-image" src=image alt=alt loading="lazy" />
            <h3 class="course-card-title">{course.title}</h3>
            {course.schedule.map(|s| view! { <p class="course-card-schedule">{s}</p> })}
            {course.price.map(|p| view! { <p class="course-card-price">{p}</p> })}
        </a>
    }
}
