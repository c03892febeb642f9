//! Project catalogue.
//!
//! Projects arrive as a JSON array shaped like the CMS projection of
//! `project` documents. Loading keeps featured projects only (unless asked for
//! everything), drops duplicate ids and sorts by `order`.

use crate::gallery::GalleryItem;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Motion,
    Print,
    Identite,
    BacASable,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Motion,
        Category::Print,
        Category::Identite,
        Category::BacASable,
    ];

    pub fn slug(self) -> &'static str {
        match self {
            Category::Motion => "motion",
            Category::Print => "print",
            Category::Identite => "identite",
            Category::BacASable => "bac-a-sable",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::Motion => "Motion",
            Category::Print => "Print",
            Category::Identite => "Identité",
            Category::BacASable => "Bac à sable",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
pub struct AssetRef {
    #[serde(rename = "_ref", default)]
    pub reference: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
pub struct ImageField {
    #[serde(default)]
    pub asset: Option<AssetRef>,
    #[serde(default)]
    pub alt: Option<String>,
}

impl ImageField {
    pub fn from_reference(reference: impl Into<String>) -> Self {
        Self {
            asset: Some(AssetRef {
                reference: reference.into(),
            }),
            alt: None,
        }
    }

    /// Non-empty asset reference, if any.
    pub fn reference(&self) -> Option<&str> {
        self.asset
            .as_ref()
            .map(|asset| asset.reference.trim())
            .filter(|reference| !reference.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Project {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub slug: String,
    pub category: Category,
    #[serde(default)]
    pub year: String,
    #[serde(default)]
    pub context: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub thumbnail: Option<ImageField>,
    #[serde(default)]
    pub images: Vec<ImageField>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub order: i64,
}

impl Project {
    pub fn thumbnail_ref(&self) -> Option<&str> {
        self.thumbnail.as_ref().and_then(ImageField::reference)
    }

    /// Thumbnail first, then the gallery images, without duplicates.
    pub fn detail_refs(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.thumbnail_ref()
            .into_iter()
            .chain(self.images.iter().filter_map(ImageField::reference))
            .filter(|reference| seen.insert(*reference))
            .collect()
    }
}

impl From<&Project> for GalleryItem {
    fn from(project: &Project) -> Self {
        GalleryItem {
            id: project.id.clone(),
            title: project.title.clone(),
            image_ref: project.thumbnail_ref().unwrap_or_default().to_string(),
            order: project.order,
        }
    }
}

/// Where the catalogue came from; also keys the bookmark.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    Placeholder,
    File(PathBuf),
}

impl CatalogSource {
    pub fn cache_key(&self) -> PathBuf {
        match self {
            CatalogSource::Placeholder => PathBuf::from("placeholder-catalog"),
            CatalogSource::File(path) => fs::canonicalize(path).unwrap_or_else(|_| path.clone()),
        }
    }
}

impl fmt::Display for CatalogSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogSource::Placeholder => f.write_str("built-in placeholder catalogue"),
            CatalogSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

pub fn load_catalog(source: &CatalogSource, include_all: bool) -> Result<Vec<Project>> {
    let projects = match source {
        CatalogSource::Placeholder => placeholder_projects(),
        CatalogSource::File(path) => read_catalog_file(path, include_all)?,
    };
    info!(%source, count = projects.len(), include_all, "Loaded project catalogue");
    Ok(projects)
}

fn read_catalog_file(path: &Path, include_all: bool) -> Result<Vec<Project>> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read catalogue {}", path.display()))?;
    parse_catalog(&contents, include_all)
        .with_context(|| format!("failed to parse catalogue {}", path.display()))
}

pub fn parse_catalog(contents: &str, include_all: bool) -> Result<Vec<Project>> {
    let raw: Vec<Project> =
        serde_json::from_str(contents).context("catalogue must be a JSON array of projects")?;
    Ok(prepare(raw, include_all))
}

fn prepare(raw: Vec<Project>, include_all: bool) -> Vec<Project> {
    let mut seen = HashSet::new();
    let mut projects: Vec<Project> = raw
        .into_iter()
        .filter(|project| include_all || project.featured)
        .filter(|project| {
            let fresh = seen.insert(project.id.clone());
            if !fresh {
                warn!(id = %project.id, "Dropping project with duplicate id");
            }
            fresh
        })
        .collect();

    projects.sort_by(|a, b| {
        a.order
            .cmp(&b.order)
            .then_with(|| a.title.to_lowercase().cmp(&b.title.to_lowercase()))
            .then_with(|| a.id.cmp(&b.id))
    });
    projects
}

/// Indices into `projects` that pass the category filter, in catalogue order.
pub fn visible_indices(projects: &[Project], filter: Option<Category>) -> Vec<usize> {
    projects
        .iter()
        .enumerate()
        .filter(|(_, project)| filter.is_none_or(|category| project.category == category))
        .map(|(idx, _)| idx)
        .collect()
}

const PLACEHOLDER_IMAGES: [&str; 7] = [
    "https://images.unsplash.com/photo-1618005182384-a83a8bd57fbe?w=800&q=80",
    "https://images.unsplash.com/photo-1633177317976-3f9bc45e1d1d?w=800&q=80",
    "https://images.unsplash.com/photo-1614850523459-c2f4c699c52e?w=800&q=80",
    "https://images.unsplash.com/photo-1620641788421-7a1c342ea42e?w=800&q=80",
    "https://images.unsplash.com/photo-1618172193763-c511deb635ca?w=800&q=80",
    "https://images.unsplash.com/photo-1614851099511-773084f6911d?w=800&q=80",
    "https://images.unsplash.com/photo-1620121692029-d088224ddc74?w=800&q=80",
];

/// Development catalogue used when no JSON file is given.
pub fn placeholder_projects() -> Vec<Project> {
    let entries = [
        ("Projet Un", "projet-un", Category::Motion, "2024"),
        ("Projet Deux", "projet-deux", Category::Print, "2024"),
        ("Projet Trois", "projet-trois", Category::Identite, "2023"),
        ("Projet Quatre", "projet-quatre", Category::Motion, "2023"),
        ("Projet Cinq", "projet-cinq", Category::BacASable, "2023"),
        ("Projet Six", "projet-six", Category::Print, "2022"),
        ("Projet Sept", "projet-sept", Category::Identite, "2022"),
    ];

    entries
        .iter()
        .zip(PLACEHOLDER_IMAGES)
        .enumerate()
        .map(|(idx, ((title, slug, category, year), image))| Project {
            id: (idx + 1).to_string(),
            title: title.to_string(),
            slug: slug.to_string(),
            category: *category,
            year: year.to_string(),
            context: None,
            role: None,
            link: None,
            thumbnail: Some(ImageField::from_reference(image)),
            images: Vec::new(),
            featured: true,
            order: idx as i64 + 1,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"[
        {
            "_id": "b",
            "title": "Affiches",
            "slug": "affiches",
            "category": "print",
            "year": "2023",
            "thumbnail": { "asset": { "_ref": "image-abc-800x600-jpg" } },
            "featured": true,
            "order": 2
        },
        {
            "_id": "a",
            "title": "Générique",
            "slug": "generique",
            "category": "motion",
            "year": "2024",
            "role": "Direction artistique",
            "thumbnail": { "asset": { "_ref": "image-def-1200x800-png" } },
            "images": [
                { "asset": { "_ref": "image-def-1200x800-png" } },
                { "asset": { "_ref": "image-ghi-640x480-webp" } }
            ],
            "featured": true,
            "order": 1
        },
        {
            "_id": "c",
            "title": "Brouillon",
            "category": "bac-a-sable",
            "featured": false,
            "order": 0
        },
        {
            "_id": "a",
            "title": "Doublon",
            "category": "identite",
            "featured": true,
            "order": 3
        }
    ]"#;

    fn ids(projects: &[Project]) -> Vec<&str> {
        projects.iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn keeps_featured_sorted_by_order() {
        let projects = parse_catalog(SAMPLE, false).expect("valid catalogue");
        assert_eq!(ids(&projects), ["a", "b"]);
        assert_eq!(projects[0].role.as_deref(), Some("Direction artistique"));
    }

    #[test]
    fn include_all_keeps_unfeatured_projects() {
        let projects = parse_catalog(SAMPLE, true).expect("valid catalogue");
        assert_eq!(ids(&projects), ["c", "a", "b"]);
        assert_eq!(projects[0].thumbnail_ref(), None);
    }

    #[test]
    fn equal_order_falls_back_to_title() {
        let projects = parse_catalog(
            r#"[
                {"_id": "2", "title": "zèbre", "category": "print", "featured": true, "order": 1},
                {"_id": "1", "title": "Abeille", "category": "print", "featured": true, "order": 1}
            ]"#,
            false,
        )
        .expect("valid catalogue");
        assert_eq!(ids(&projects), ["1", "2"]);
    }

    #[test]
    fn rejects_unknown_categories() {
        let err = parse_catalog(
            r#"[{"_id": "x", "title": "X", "category": "video", "featured": true}]"#,
            false,
        );
        assert!(err.is_err());
        assert!(parse_catalog("{}", false).is_err());
    }

    #[test]
    fn detail_refs_start_with_thumbnail_without_duplicates() {
        let projects = parse_catalog(SAMPLE, false).expect("valid catalogue");
        assert_eq!(
            projects[0].detail_refs(),
            ["image-def-1200x800-png", "image-ghi-640x480-webp"]
        );
    }

    #[test]
    fn gallery_items_carry_thumbnail_reference() {
        let projects = parse_catalog(SAMPLE, false).expect("valid catalogue");
        let item = GalleryItem::from(&projects[1]);
        assert_eq!(item.id, "b");
        assert_eq!(item.title, "Affiches");
        assert_eq!(item.image_ref, "image-abc-800x600-jpg");
        assert_eq!(item.order, 2);
    }

    #[test]
    fn category_filter_preserves_catalogue_order() {
        let projects = placeholder_projects();
        assert_eq!(visible_indices(&projects, None).len(), 7);
        assert_eq!(visible_indices(&projects, Some(Category::Print)), [1, 5]);
        assert_eq!(
            visible_indices(&projects, Some(Category::BacASable)),
            [4]
        );
    }

    #[test]
    fn placeholder_catalogue_is_complete() {
        let projects = placeholder_projects();
        assert_eq!(projects.len(), 7);
        assert!(projects.iter().all(|p| p.featured));
        assert!(projects
            .iter()
            .all(|p| p.thumbnail_ref().is_some_and(|r| r.starts_with("https://"))));
        assert_eq!(ids(&prepare(projects.clone(), false)), ids(&projects));
    }

    #[test]
    fn category_labels_match_slugs() {
        for category in Category::ALL {
            let json = format!("\"{}\"", category.slug());
            let parsed: Category = serde_json::from_str(&json).expect("slug parses");
            assert_eq!(parsed, category);
        }
        assert_eq!(Category::Identite.label(), "Identité");
        assert_eq!(Category::BacASable.to_string(), "Bac à sable");
    }
}
