use serde::Deserialize;

use crate::localizer::Localizer;
use crate::preferences::PreferenceStore;
use crate::types::{Language, LocaleNode, Resolved};

/// Locale table key holding the translated portfolio copy.
const PROJECTS_KEY: &str = "projects";

/// Language-independent facts about a portfolio project.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub slug: &'static str,
    pub date: &'static str,
    pub cover_image: &'static str,
    pub images: &'static [&'static str],
    pub live_url: Option<&'static str>,
}

/// The portfolio, in display order.
pub const PROJECTS: &[Project] = &[
    Project {
        slug: "alpine-roast",
        date: "2024",
        cover_image: "https://images.unsplash.com/photo-1495474472287-4d71bcdd2085?w=800&h=600&fit=crop",
        images: &[
            "https://images.unsplash.com/photo-1501339847302-ac426a4a7cbb?w=1200&h=800&fit=crop",
            "https://images.unsplash.com/photo-1453614512568-c4024d13c247?w=1200&h=800&fit=crop",
            "https://images.unsplash.com/photo-1442512595331-e89e73853f31?w=1200&h=800&fit=crop",
        ],
        live_url: Some("https://alpine-roast-cafe.vercel.app/"),
    },
    Project {
        slug: "voltsure",
        date: "2024",
        cover_image: "https://images.unsplash.com/photo-1473341304170-971dccb5ac1e?w=800&h=600&fit=crop",
        images: &[
            "https://images.unsplash.com/photo-1509391366360-2e959784a276?w=1200&h=800&fit=crop",
            "https://images.unsplash.com/photo-1559302504-64aae6ca6b6d?w=1200&h=800&fit=crop",
            "https://images.unsplash.com/photo-1497435334941-8c899ee9e8e9?w=1200&h=800&fit=crop",
        ],
        live_url: Some("https://volt-sure.vercel.app/"),
    },
    Project {
        slug: "gympro",
        date: "2024",
        cover_image: "https://images.unsplash.com/photo-1534438327276-14e5300c3a48?w=800&h=600&fit=crop",
        images: &[
            "https://images.unsplash.com/photo-1540497077202-7c8a3999166f?w=1200&h=800&fit=crop",
            "https://images.unsplash.com/photo-1571019613454-1cb2f99b2d8b?w=1200&h=800&fit=crop",
            "https://images.unsplash.com/photo-1593079831268-3381b0db4a77?w=1200&h=800&fit=crop",
        ],
        live_url: Some("https://gym-pro-oqwj.vercel.app/"),
    },
    Project {
        slug: "keje-stari",
        date: "2024",
        cover_image: "/projects/kejestari-cover.webp",
        images: &[
            "/projects/kejestari-1.webp",
            "/projects/kejestari-2.webp",
            "/projects/kejestari-3.webp",
        ],
        live_url: Some("https://keje-stari.vercel.app/"),
    },
];

/// Translated copy of a project, as stored under `projects` in each table.
///
/// Copy built by [`localized_project`] has any field the active table lacks
/// filled in from English.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ProjectCopy {
    pub slug: String,
    pub title: String,
    pub tag: String,
    pub client: String,
    pub expertise: Vec<String>,
    pub description: String,
    pub mission: String,
}

/// A project joined with its copy in some language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalizedProject {
    pub project: &'static Project,
    pub copy: ProjectCopy,
}

pub fn find_project(slug: &str) -> Option<&'static Project> {
    PROJECTS.iter().find(|project| project.slug == slug)
}

/// The previous and next projects for the case-study footer, wrapping
/// around at either end.
pub fn project_neighbors(slug: &str) -> Option<(&'static Project, &'static Project)> {
    let index = PROJECTS.iter().position(|project| project.slug == slug)?;
    let previous = if index == 0 {
        &PROJECTS[PROJECTS.len() - 1]
    } else {
        &PROJECTS[index - 1]
    };
    let next = PROJECTS.get(index + 1).unwrap_or(&PROJECTS[0]);
    Some((previous, next))
}

/// The project at `slug` with copy in the active language.
///
/// Each field falls back to the English copy when the active table's record
/// lacks it or leaves it empty, and the whole record does when the active
/// table has no entry for the slug. `None` if the slug is not part of the
/// portfolio or no table has copy for it.
pub fn localized_project<S: PreferenceStore>(
    localizer: &Localizer<'_, S>,
    slug: &str,
) -> Option<LocalizedProject> {
    let project = find_project(slug)?;
    let active = copy_record(localizer.list(PROJECTS_KEY), slug);
    let english = match localizer.active_locale() {
        Language::En => None,
        Language::Sl => copy_record(
            localizer
                .catalog()
                .resolve(Language::En, PROJECTS_KEY)
                .as_list()
                .unwrap_or_default(),
            slug,
        ),
    };
    if active.is_none() && english.is_none() {
        return None;
    }

    let active = active.unwrap_or_default();
    let english = english.unwrap_or_default();
    let copy = ProjectCopy {
        slug: slug.to_string(),
        title: pick_text(active.title, english.title),
        tag: pick_text(active.tag, english.tag),
        client: pick_text(active.client, english.client),
        expertise: pick_list(active.expertise, english.expertise),
        description: pick_text(active.description, english.description),
        mission: pick_text(active.mission, english.mission),
    };
    Some(LocalizedProject { project, copy })
}

/// Every portfolio project with copy in the active language, in display order.
pub fn localized_projects<S: PreferenceStore>(localizer: &Localizer<'_, S>) -> Vec<LocalizedProject> {
    PROJECTS
        .iter()
        .filter_map(|project| localized_project(localizer, project.slug))
        .collect()
}

/// A project record as stored in a table, where any field may be absent.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct CopyRecord {
    slug: Option<String>,
    title: Option<String>,
    tag: Option<String>,
    client: Option<String>,
    expertise: Option<Vec<String>>,
    description: Option<String>,
    mission: Option<String>,
}

/// The record for `slug`, read item by item so one malformed record does not
/// hide the others.
fn copy_record(records: &[LocaleNode], slug: &str) -> Option<CopyRecord> {
    records
        .iter()
        .filter_map(|node| Resolved::from_node(node).deserialize::<CopyRecord>())
        .find(|record| record.slug.as_deref() == Some(slug))
}

/// `preferred` unless it is absent or empty, then `fallback`.
fn pick_text(preferred: Option<String>, fallback: Option<String>) -> String {
    preferred
        .filter(|text| !text.is_empty())
        .or(fallback)
        .unwrap_or_default()
}

fn pick_list(preferred: Option<Vec<String>>, fallback: Option<Vec<String>>) -> Vec<String> {
    preferred
        .filter(|items| !items.is_empty())
        .or(fallback)
        .unwrap_or_default()
}
