//! The chapter index page.

use leptos::prelude::*;

use crate::content::{CHAPTER_INDEX, ChapterCard};
use crate::nav::NavBar;

fn chapter_card(card: &'static ChapterCard) -> impl IntoView {
    view! {
        <div class="chapter-card">
            <h2 class="chapter-title">{card.title}</h2>
            <p class="chapter-description">{card.description}</p>
            <a class="chapter-item" href=card.target>
                "Read Chapter"
            </a>
        </div>
    }
}

/// The `/chapters` page: one card per row of the chapter-index table.
#[component]
pub fn ChapterIndexPage() -> impl IntoView {
    let cards = CHAPTER_INDEX.iter().map(chapter_card).collect::<Vec<_>>();

    view! {
        <NavBar />
        <div class="chapters-container">
            <h1 class="chapters-title">"Chapters"</h1>
            <div class="chapter-list">{cards}</div>
        </div>
    }
}
