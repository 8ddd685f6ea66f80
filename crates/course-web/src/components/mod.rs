mod about;
mod benefits;
mod cards;
mod contact;
mod counter;
mod cta;
mod program;
mod requirements;
mod section;
mod tools;

pub use about::AboutSection;
pub use benefits::BenefitsSection;
pub use cards::{ListCard, ListCards, list_cards};
pub use contact::ContactSection;
pub use counter::{AnimatedCounter, counter_value, format_count};
pub use cta::{CtaSection, whatsapp_link};
pub use program::ProgramSection;
pub use requirements::RequirementsSection;
pub use section::Section;
pub use tools::{ToolCard, ToolsSection, tool_cards};
