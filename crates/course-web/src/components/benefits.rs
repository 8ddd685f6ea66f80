use leptos::prelude::*;

use crate::components::{ListCards, Section, list_cards};

/// What participants get, parsed from the course's benefits rich text
#[component]
pub fn BenefitsSection(benefits: Option<String>) -> impl IntoView {
    let cards = list_cards(benefits.as_deref());

    view! {
        <Section id="benefits" title="Benefit" subtitle="Yang kamu dapatkan selama program">
            <ListCards cards=cards marker="✓" />
        </Section>
    }
}
