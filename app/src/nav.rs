//! The shared navigation bar.

use leptos::prelude::*;

use crate::routes::{NAV_PAGES, Page};

/// Site-wide navigation bar: the book title as a home link, followed by the
/// top-level pages.
///
/// Rendered by every page component, including the not-found page, so the
/// header is identical everywhere.
#[component]
pub fn NavBar() -> impl IntoView {
    let links = NAV_PAGES
        .iter()
        .map(|page| {
            view! {
                <li class="navbar-item">
                    <a class="navbar-link" href=page.path()>
                        {page.nav_label()}
                    </a>
                </li>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <nav class="navbar" aria-label="Main navigation">
            <a class="navbar-brand" href=Page::Home.path()>
                "Mastering TypeScript"
            </a>
            <ul class="navbar-links">{links}</ul>
        </nav>
    }
}
