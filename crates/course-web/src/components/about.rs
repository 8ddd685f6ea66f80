use leptos::prelude::*;
use shared::CONFIG;

use crate::assets::image_url;
use crate::components::Section;

#[component]
pub fn AboutSection() -> impl IntoView {
    view! {
        <Section id="about" title="Tentang Kami">
            <div class="about-grid">
                <img class="about-image" src=image_url("about.svg") alt=CONFIG.name loading="lazy" />
                <div>
                    <p class="about-lead">
                        <strong>{CONFIG.name}</strong>
                        " adalah tempat belajar pemrograman yang fokus pada kebutuhan industri. "
                        {CONFIG.tagline}
                        "."
                    </p>
                    <ul class="about-highlights">
                        {CONFIG.highlights.iter().map(|h| view! {
                            <li>
                                <h3>{h.title}</h3>
                                <p>{h.body}</p>
                            </li>
                        }).collect_view()}
                    </ul>
                </div>
            </div>
        </Section>
    }
}
