//! Fallback page for paths outside the route table.

use leptos::prelude::*;

use crate::nav::NavBar;
use crate::routes::Page;

/// Shown whenever the router matches no registered path.
#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <NavBar />
        <div class="not-found-container">
            <h1 class="not-found-title">"Page Not Found"</h1>
            <p>"Sorry, the page you are looking for doesn't exist."</p>
            <a class="start-btn" href=Page::Home.path()>
                "Go Home"
            </a>
        </div>
    }
}
