//! The site's fixed page structure: routes, the project portfolio, per-page
//! metadata and the crawler files generated at build time.

mod error;
mod pages;
mod projects;
mod route;
mod sitemap;

pub use error::SiteError;
pub use pages::page_head;
pub use projects::{
    LocalizedProject, PROJECTS, Project, ProjectCopy, find_project, localized_project,
    localized_projects, project_neighbors,
};
pub use route::Route;
pub use sitemap::{DEFAULT_SITE_URL, SiteFiles, Sitemap, robots_txt, write_site_files};
