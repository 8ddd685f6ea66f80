//! Course catalog loaded from content/catalog.toml

use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use thiserror::Error;

use crate::models::{Course, CourseKind, ProgramStats};

/// Default location of the catalog, relative to the working directory
pub const DEFAULT_CATALOG_PATH: &str = "content/catalog.toml";

#[derive(Debug, Error, PartialEq)]
pub enum CatalogError {
    #[error("{kind} with empty slug (title: {title:?})")]
    EmptySlug { kind: &'static str, title: String },
    #[error("duplicate {kind} slug: {slug}")]
    DuplicateSlug { kind: &'static str, slug: String },
    #[error("{slug}: duplicate tool name {name:?}")]
    DuplicateTool { slug: String, name: String },
}

/// All page data served by the site
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    stats: ProgramStats,
    #[serde(default)]
    bootcamps: Vec<Course>,
    #[serde(default)]
    webinars: Vec<Course>,
}

impl Catalog {
    /// Load and validate a catalog from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read catalog file: {}", path.display()))?;

        Self::from_toml_str(&content).with_context(|| format!("Invalid catalog: {}", path.display()))
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let catalog: Catalog = toml::from_str(content).context("Failed to parse catalog TOML")?;
        catalog.validate()?;
        Ok(catalog)
    }

    fn validate(&self) -> Result<(), CatalogError> {
        validate_courses(CourseKind::Bootcamp, &self.bootcamps)?;
        validate_courses(CourseKind::Webinar, &self.webinars)
    }

    pub fn stats(&self) -> &ProgramStats {
        &self.stats
    }

    pub fn bootcamp(&self, slug: &str) -> Option<&Course> {
        self.bootcamps.iter().find(|c| c.slug == slug)
    }

    pub fn webinar(&self, slug: &str) -> Option<&Course> {
        self.webinars.iter().find(|c| c.slug == slug)
    }

    pub fn course(&self, kind: CourseKind, slug: &str) -> Option<&Course> {
        match kind {
            CourseKind::Bootcamp => self.bootcamp(slug),
            CourseKind::Webinar => self.webinar(slug),
        }
    }

    pub fn courses(&self, kind: CourseKind) -> &[Course] {
        match kind {
            CourseKind::Bootcamp => &self.bootcamps,
            CourseKind::Webinar => &self.webinars,
        }
    }
}

fn validate_courses(kind: CourseKind, courses: &[Course]) -> Result<(), CatalogError> {
    let label = kind.label();
    let mut slugs = HashSet::new();

    for course in courses {
        if course.slug.trim().is_empty() {
            return Err(CatalogError::EmptySlug {
                kind: label,
                title: course.title.clone(),
            });
        }
        if !slugs.insert(course.slug.as_str()) {
            return Err(CatalogError::DuplicateSlug {
                kind: label,
                slug: course.slug.clone(),
            });
        }

        let mut names = HashSet::new();
        for tool in &course.tools {
            if !names.insert(tool.name.as_str()) {
                return Err(CatalogError::DuplicateTool {
                    slug: course.slug.clone(),
                    name: tool.name.clone(),
                });
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    const SAMPLE: &str = r#"
[stats]
students = 1500
partners = 40
duration = 3.0

[[bootcamps]]
slug = "fullstack-web"
title = "Fullstack Web Development"
benefits = "<ul><li>Sertifikat</li><li> Mentoring </li></ul>"

[[bootcamps.tools]]
name = "VS Code"
icon = "tools/vscode.svg"

[[bootcamps.tools]]
name = "Git"

[[webinars]]
slug = "intro-rust"
title = "Intro to Rust"
"#;

    #[test]
    fn test_parse_sample() {
        let catalog = Catalog::from_toml_str(SAMPLE).unwrap();
        assert_eq!(catalog.stats().students, 1500);
        assert_eq!(catalog.stats().partners, 40);

        let bootcamp = catalog.bootcamp("fullstack-web").unwrap();
        assert_eq!(bootcamp.tools.len(), 2);
        assert_eq!(bootcamp.tools[1].icon, None);
        assert_eq!(bootcamp.requirements, None);

        let webinar = catalog.course(CourseKind::Webinar, "intro-rust").unwrap();
        assert!(webinar.tools.is_empty());
        assert!(catalog.webinar("fullstack-web").is_none());
        assert_eq!(catalog.courses(CourseKind::Bootcamp).len(), 1);
    }

    #[test]
    fn test_shipped_catalog() {
        let catalog = Catalog::from_toml_str(include_str!("../../../content/catalog.toml")).unwrap();
        let bootcamp = catalog.bootcamp("ui-ux-design").unwrap();
        assert_eq!(
            crate::list::parse_list(bootcamp.benefits.as_deref()),
            vec!["Sertifikat", "Mentoring", "Review portofolio oleh praktisi"]
        );
        assert_eq!(catalog.bootcamp("fullstack-web").unwrap().tools.len(), 3);
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = Catalog::from_toml_str("").unwrap();
        assert_eq!(catalog.stats().students, 0);
        assert!(catalog.courses(CourseKind::Webinar).is_empty());
    }

    #[test]
    fn test_duplicate_slug_rejected() {
        let content = r#"
[[webinars]]
slug = "a"
title = "A"

[[webinars]]
slug = "a"
title = "A again"
"#;
        let err = Catalog::from_toml_str(content).unwrap_err();
        assert_eq!(
            err.downcast_ref::<CatalogError>(),
            Some(&CatalogError::DuplicateSlug {
                kind: "Webinar",
                slug: "a".to_string()
            })
        );
    }

    #[test]
    fn test_same_slug_across_kinds_allowed() {
        let content = r#"
[[bootcamps]]
slug = "data"
title = "Data Bootcamp"

[[webinars]]
slug = "data"
title = "Data Webinar"
"#;
        assert!(Catalog::from_toml_str(content).is_ok());
    }

    #[test]
    fn test_duplicate_tool_rejected() {
        let content = r#"
[[bootcamps]]
slug = "ui-ux"
title = "UI/UX"
tools = [{ name = "Figma" }, { name = "Figma" }]
"#;
        let err = Catalog::from_toml_str(content).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CatalogError>(),
            Some(CatalogError::DuplicateTool { .. })
        ));
    }

    #[test]
    fn test_empty_slug_rejected() {
        let content = r#"
[[bootcamps]]
slug = " "
title = "Nameless"
"#;
        let err = Catalog::from_toml_str(content).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CatalogError>(),
            Some(CatalogError::EmptySlug { .. })
        ));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let catalog = Catalog::load(file.path()).unwrap();
        assert!(catalog.bootcamp("fullstack-web").is_some());
    }

    #[test]
    fn test_load_missing_file() {
        let err = Catalog::load(Path::new("does/not/exist.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read catalog file"));
    }
}
