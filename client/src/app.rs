//! Root application component with routing.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::pages::dashboard::DashboardPage;

pub const DEFAULT_SITE_NAME: &str = "Personal Finance";

/// Document title, provided by [`shell`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SiteName(pub String);

/// HTML shell rendered on the server.
pub fn shell(site_name: String) -> impl IntoView {
    provide_context(SiteName(site_name));

    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Routes mirror [`crate::routes::app_route_entries`]: the root renders the
/// dashboard and every other path redirects to `/`.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let site_name = use_context::<SiteName>().map_or_else(|| DEFAULT_SITE_NAME.to_owned(), |s| s.0);

    view! {
        <Title text=site_name/>

        <Router>
            <Routes fallback=|| view! { <Redirect path="/"/> }>
                <Route path=StaticSegment("") view=DashboardPage/>
            </Routes>
        </Router>
    }
}
