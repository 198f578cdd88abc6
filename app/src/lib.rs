//! The "Mastering TypeScript" book site.
//!
//! Everything is client-rendered: [`App`] wires the route table in [`routes`]
//! to the page components in [`pages`], and everything those pages show comes
//! from the static records in [`content`].

pub mod content;
pub mod nav;
pub mod pages;
pub mod routes;

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{
    ChapterFourPage, ChapterIndexPage, ChapterOnePage, ChapterThreePage, ChapterTwoPage, HomePage,
    NotFoundPage,
};

/// The root component: document title, router, and the route table.
///
/// Route registrations mirror [`routes::Page::ALL`]; unmatched paths fall
/// back to [`NotFoundPage`].
#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
      // sets the document title
      <Title text="Mastering TypeScript" />

      <Router>
        <main>
          <Routes fallback=|| view! { <NotFoundPage /> }>
            <Route path=StaticSegment("") view=HomePage />
            <Route path=StaticSegment("chapters") view=ChapterIndexPage />
            <Route path=StaticSegment("chapter-1") view=ChapterOnePage />
            <Route path=StaticSegment("chapter-2") view=ChapterTwoPage />
            <Route path=StaticSegment("chapter-3") view=ChapterThreePage />
            <Route path=StaticSegment("chapter-4") view=ChapterFourPage />
          </Routes>
        </main>
      </Router>
    }
}
