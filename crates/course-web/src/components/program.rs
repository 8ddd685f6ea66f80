use leptos::prelude::*;

use crate::components::{AnimatedCounter, Section};
use crate::models::ProgramStats;

/// Program section - headline counters
#[component]
pub fn ProgramSection(stats: ProgramStats) -> impl IntoView {
    view! {
        <Section id="program" title="Program Kami" subtitle="Bootcamp intensif dan webinar singkat untuk semua level">
            <div class="stats-grid">
                <div class="stat">
                    <AnimatedCounter target=stats.students duration=stats.duration suffix="+" />
                    <div class="stat-label">"Alumni"</div>
                </div>
                <div class="stat">
                    <AnimatedCounter target=stats.partners duration=stats.duration suffix="+" />
                    <div class="stat-label">"Mitra perusahaan"</div>
                </div>
            </div>
        </Section>
    }
}
