use std::fmt::{Display, Formatter, Result as FmtResult};

/// A page of the site.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    Work,
    /// A portfolio case study, `/work/<slug>`.
    Project(String),
    Services,
    Diy,
    Plans,
    About,
    Contact,
    Privacy,
    Terms,
}

impl Route {
    /// The pages that exist independently of the portfolio, in sitemap order.
    pub const STATIC: [Route; 9] = [
        Route::Home,
        Route::Work,
        Route::Services,
        Route::Diy,
        Route::Plans,
        Route::About,
        Route::Contact,
        Route::Privacy,
        Route::Terms,
    ];

    /// Match a request path against the route table.
    ///
    /// Query strings and fragments are ignored and a trailing slash is
    /// tolerated. Project slugs are not checked against the portfolio.
    ///
    /// ```
    /// use weft::site::Route;
    ///
    /// assert_eq!(Route::parse("/work/voltsure?lang=sl"), Some(Route::Project("voltsure".into())));
    /// assert_eq!(Route::parse("/plans/"), Some(Route::Plans));
    /// assert_eq!(Route::parse("/imprint"), None);
    /// ```
    pub fn parse(path: &str) -> Option<Route> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let trimmed = path.trim_end_matches('/');
        let route = match trimmed {
            "" => Route::Home,
            "/work" => Route::Work,
            "/services" => Route::Services,
            "/diy" => Route::Diy,
            "/plans" => Route::Plans,
            "/about" => Route::About,
            "/contact" => Route::Contact,
            "/privacy" => Route::Privacy,
            "/terms" => Route::Terms,
            other => {
                let slug = other.strip_prefix("/work/")?;
                if slug.is_empty() || slug.contains('/') {
                    return None;
                }
                Route::Project(slug.to_string())
            }
        };
        if route == Route::Home && !path.starts_with('/') {
            return None;
        }
        Some(route)
    }

    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Work => "/work".to_string(),
            Route::Project(slug) => format!("/work/{slug}"),
            Route::Services => "/services".to_string(),
            Route::Diy => "/diy".to_string(),
            Route::Plans => "/plans".to_string(),
            Route::About => "/about".to_string(),
            Route::Contact => "/contact".to_string(),
            Route::Privacy => "/privacy".to_string(),
            Route::Terms => "/terms".to_string(),
        }
    }

    /// The navigation label key for this page, if it has one.
    pub fn nav_key(&self) -> Option<&'static str> {
        match self {
            Route::Home | Route::Project(_) => None,
            Route::Work => Some("nav.work"),
            Route::Services => Some("nav.services"),
            Route::Diy => Some("nav.diy"),
            Route::Plans => Some("nav.plans"),
            Route::About => Some("nav.about"),
            Route::Contact => Some("nav.contact"),
            Route::Privacy => Some("nav.privacy"),
            Route::Terms => Some("nav.terms"),
        }
    }
}

impl Display for Route {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.path())
    }
}
