//! Page data records supplied by the catalog

use serde::{Deserialize, Serialize};

/// Headline counters shown on the Program section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgramStats {
    pub students: u64,
    pub partners: u64,
    /// Seconds the counter animation runs for
    #[serde(default = "default_duration")]
    pub duration: f64,
}

fn default_duration() -> f64 {
    2.0
}

impl Default for ProgramStats {
    fn default() -> Self {
        Self {
            students: 0,
            partners: 0,
            duration: default_duration(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CourseKind {
    Bootcamp,
    Webinar,
}

impl CourseKind {
    pub fn label(self) -> &'static str {
        match self {
            CourseKind::Bootcamp => "Bootcamp",
            CourseKind::Webinar => "Webinar",
        }
    }

    /// Route prefix for detail pages of this kind
    pub fn path_prefix(self) -> &'static str {
        match self {
            CourseKind::Bootcamp => "/bootcamp",
            CourseKind::Webinar => "/webinar",
        }
    }
}

/// A bootcamp or webinar
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub slug: String,
    pub title: String,
    #[serde(default)]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub schedule: Option<String>,
    #[serde(default)]
    pub price: Option<String>,
    /// Rich text holding `<li>` items
    #[serde(default)]
    pub benefits: Option<String>,
    /// Rich text holding `<li>` items
    #[serde(default)]
    pub requirements: Option<String>,
    #[serde(default)]
    pub tools: Vec<Tool>,
}

impl Course {
    pub fn href(&self, kind: CourseKind) -> String {
        format!("{}/{}", kind.path_prefix(), self.slug)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tool {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
}
