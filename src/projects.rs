use dashmap::DashMap;
use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use thiserror::Error;

use crate::gallery::ImageSet;

#[cfg(feature = "ssr")]
use gray_matter::{engine::YAML, Matter};
#[cfg(feature = "ssr")]
use pulldown_cmark::{Options, Parser};

pub static GLOBAL_PROJECT_CACHE: LazyLock<DashMap<String, Vec<Project>>> =
    LazyLock::new(DashMap::new);

pub const ALL_PROJECTS: &str = "";

#[derive(Embed)]
#[folder = "case_studies"]
#[cfg_attr(feature = "hydrate", metadata_only = true)]
pub struct CaseStudies;

#[cfg(feature = "ssr")]
#[derive(Deserialize, Debug)]
struct FrontMatter {
    id: String,
    title: String,
    description: String,
    problem: String,
    thumbnail: String,
    case_study: Option<String>,
    order: u32,
    gallery: Vec<String>,
    #[serde(default)]
    tags: Vec<String>,
    #[serde(default)]
    stats: Vec<Stat>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stat {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    pub problem: String,
    pub thumbnail: String,
    /// Downloadable PDF write-up, if one is published.
    pub case_study: Option<String>,
    pub order: u32,
    pub gallery: ImageSet,
    pub tags: Vec<String>,
    pub stats: Vec<Stat>,
    /// Rendered HTML of the Markdown body.
    pub body: String,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProjectError {
    #[error("Project not found")]
    NotFound,
    #[error("Couldn't parse case study {0}")]
    ParseError(String),
    #[error("Case study {0} has no gallery images")]
    EmptyGallery(String),
}

#[cfg(feature = "ssr")]
pub fn parse_case_study(file: &str, content: &str) -> Result<Project, ProjectError> {
    let matter = Matter::<YAML>::new();
    let parsed = matter
        .parse_with_struct::<FrontMatter>(content)
        .ok_or_else(|| ProjectError::ParseError(file.to_string()))?;
    let fm = parsed.data;
    let gallery =
        ImageSet::new(fm.gallery).map_err(|_| ProjectError::EmptyGallery(file.to_string()))?;

    let parser = Parser::new_ext(&parsed.content, Options::all());
    let mut body = String::new();
    pulldown_cmark::html::push_html(&mut body, parser);

    Ok(Project {
        id: fm.id,
        title: fm.title,
        description: fm.description,
        problem: fm.problem,
        thumbnail: fm.thumbnail,
        case_study: fm.case_study,
        order: fm.order,
        gallery,
        tags: fm.tags,
        stats: fm.stats,
        body,
    })
}

/// All case studies in display order. Broken files are logged and skipped so
/// one bad write-up doesn't take the section down.
#[cfg(feature = "ssr")]
pub async fn get_projects() -> Vec<Project> {
    let cache = &*GLOBAL_PROJECT_CACHE;
    if let Some(r) = cache.get(ALL_PROJECTS) {
        return r.clone();
    }
    let mut projects = CaseStudies::iter()
        .filter_map(|file| {
            let content = CaseStudies::get(&file)?;
            let content = match String::from_utf8(content.data.into()) {
                Ok(s) => s,
                Err(_) => {
                    tracing::warn!(%file, "case study is not valid utf-8");
                    return None;
                }
            };
            match parse_case_study(&file, &content) {
                Ok(p) => Some(p),
                Err(e) => {
                    tracing::warn!(%file, error = %e, "skipping case study");
                    None
                }
            }
        })
        .collect::<Vec<_>>();
    projects.sort_by_key(|p| p.order);
    tracing::info!(count = projects.len(), "loaded case studies");
    cache.insert(ALL_PROJECTS.to_string(), projects.clone());
    projects
}

#[cfg(feature = "ssr")]
pub async fn get_project(id: &str) -> Result<Project, ProjectError> {
    get_projects()
        .await
        .into_iter()
        .find(|p| p.id == id)
        .ok_or(ProjectError::NotFound)
}
