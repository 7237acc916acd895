//! Dashboard page, the landing route.
//!
//! SYSTEM CONTEXT
//! ==============
//! Placeholder view with no state or inputs. Ingested ledger figures are not
//! wired into it yet; the currency display it will need lives in
//! `ledger::money`.

use leptos::prelude::*;

/// Text the dashboard renders; the end-to-end smoke test looks for it.
pub const DASHBOARD_TEXT: &str = "dashboard-page works!";

/// Dashboard page. Renders a fixed view.
#[component]
pub fn DashboardPage() -> impl IntoView {
    view! {
        <div class="dashboard-page">
            <p>{DASHBOARD_TEXT}</p>
        </div>
    }
}

#[cfg(all(test, feature = "ssr"))]
#[path = "dashboard_test.rs"]
mod tests;
