//! Route table: maps request paths to pages or redirects.
//!
//! DESIGN
//! ======
//! The table is declared as an ordered list of [`RouteEntry`]s ending in a
//! `**` catch-all, mirroring the Leptos `<Routes>` in [`crate::app`].
//! Construction validates the list and pre-resolves every redirect to the
//! page it lands on, so [`RouteTable::resolve`] and
//! [`RouteTable::navigate`] are total and never chain redirects.

/// Pattern that matches every path not matched by an earlier entry.
pub const CATCH_ALL: &str = "**";

/// Renderable pages.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Page {
    Dashboard,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RouteTarget {
    Page(Page),
    /// Redirect to another route path (unnormalized, e.g. `""`).
    Redirect(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteEntry {
    /// Path without leading/trailing `/`, or [`CATCH_ALL`].
    pub path: String,
    pub target: RouteTarget,
}

impl RouteEntry {
    pub fn page(path: &str, page: Page) -> Self {
        Self { path: path.to_owned(), target: RouteTarget::Page(page) }
    }

    pub fn redirect(path: &str, to: &str) -> Self {
        Self { path: path.to_owned(), target: RouteTarget::Redirect(to.to_owned()) }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteError {
    #[error("route table must end with a '{CATCH_ALL}' entry")]
    MissingCatchAll,
    #[error("route '{0}' can never match")]
    Unreachable(String),
    #[error("redirect from '{from}' to '{to}' does not land on a page")]
    RedirectChain { from: String, to: String },
}

/// Result of following a path to the page that finally renders.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Navigation {
    /// Final URL path, always starting with `/`.
    pub path: String,
    pub page: Page,
    /// Redirect hops taken; at most one.
    pub redirects: usize,
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum Resolution {
    Render(Page),
    Redirect { to: String, page: Page },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteTable {
    exact: Vec<(String, Resolution)>,
    fallback: Resolution,
}

// =============================================================================
// APPLICATION TABLE
// =============================================================================

/// Declared application routes: the root renders the dashboard, everything
/// else redirects to the root.
pub fn app_route_entries() -> Vec<RouteEntry> {
    vec![RouteEntry::page("", Page::Dashboard), RouteEntry::redirect(CATCH_ALL, "")]
}

/// The application table, pre-resolved. Equal to
/// `RouteTable::new(app_route_entries())`.
pub fn app_routes() -> RouteTable {
    RouteTable {
        exact: vec![(String::new(), Resolution::Render(Page::Dashboard))],
        fallback: Resolution::Redirect { to: String::new(), page: Page::Dashboard },
    }
}

// =============================================================================
// TABLE
// =============================================================================

impl RouteTable {
    /// Validate `entries` and pre-resolve redirects.
    ///
    /// # Errors
    ///
    /// Returns [`RouteError`] if the list does not end in exactly one
    /// catch-all, contains an entry shadowed by an earlier one, or has a
    /// redirect that does not land directly on a page.
    pub fn new(entries: Vec<RouteEntry>) -> Result<Self, RouteError> {
        let Some((last, rest)) = entries.split_last() else {
            return Err(RouteError::MissingCatchAll);
        };
        if last.path != CATCH_ALL {
            return Err(RouteError::MissingCatchAll);
        }

        let mut declared: Vec<(String, &RouteTarget)> = Vec::with_capacity(rest.len());
        for entry in rest {
            let path = normalize(&entry.path).to_owned();
            if entry.path == CATCH_ALL || declared.iter().any(|(p, _)| *p == path) {
                return Err(RouteError::Unreachable(entry.path.clone()));
            }
            declared.push((path, &entry.target));
        }

        let land = |from: &str, to: &str| -> Result<Resolution, RouteError> {
            let to_norm = normalize(to);
            let landing = declared
                .iter()
                .find(|(p, _)| p == to_norm)
                .map_or(&last.target, |(_, target)| *target);
            match landing {
                RouteTarget::Page(page) => Ok(Resolution::Redirect { to: to_norm.to_owned(), page: *page }),
                RouteTarget::Redirect(_) => Err(RouteError::RedirectChain { from: from.to_owned(), to: to.to_owned() }),
            }
        };
        let resolve_entry = |entry: &RouteEntry| match &entry.target {
            RouteTarget::Page(page) => Ok(Resolution::Render(*page)),
            RouteTarget::Redirect(to) => land(&entry.path, to),
        };

        let mut exact = Vec::with_capacity(rest.len());
        for entry in rest {
            exact.push((normalize(&entry.path).to_owned(), resolve_entry(entry)?));
        }
        let fallback = resolve_entry(last)?;

        Ok(Self { exact, fallback })
    }

    fn lookup(&self, path: &str) -> &Resolution {
        let path = normalize(path);
        self.exact
            .iter()
            .find(|(p, _)| p == path)
            .map_or(&self.fallback, |(_, resolution)| resolution)
    }

    /// Select the single target for `path`.
    pub fn resolve(&self, path: &str) -> RouteTarget {
        match self.lookup(path) {
            Resolution::Render(page) => RouteTarget::Page(*page),
            Resolution::Redirect { to, .. } => RouteTarget::Redirect(to.clone()),
        }
    }

    /// Follow `path` through at most one redirect to the page that renders.
    pub fn navigate(&self, path: &str) -> Navigation {
        match self.lookup(path) {
            Resolution::Render(page) => Navigation { path: to_url(path), page: *page, redirects: 0 },
            Resolution::Redirect { to, page } => Navigation { path: to_url(to), page: *page, redirects: 1 },
        }
    }
}

/// Strip query, fragment and surrounding slashes: `/a/b/?x=1` becomes `a/b`.
pub fn normalize(path: &str) -> &str {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    path[..end].trim_matches('/')
}

/// Absolute URL path for a route path: `""` becomes `/`.
pub fn to_url(path: &str) -> String {
    format!("/{}", normalize(path))
}

#[cfg(test)]
#[path = "routes_test.rs"]
mod tests;
