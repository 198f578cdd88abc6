//! The landing page.

use leptos::prelude::*;

use crate::nav::NavBar;
use crate::routes::Page;

/// Bullet points for the "What You'll Learn" section.
const FEATURES: [&str; 5] = [
    "Basic TypeScript Syntax and Types",
    "Interfaces and Generics",
    "TypeScript with React",
    "Advanced TypeScript Concepts",
    "Practical Applications and Projects",
];

/// Footer teasers: a few chapter highlights with their routes.
const FOOTER_CHAPTERS: [(Page, &str); 3] = [
    (Page::Chapter1, "Chapter 1: Introduction"),
    (Page::Chapter2, "Chapter 2: Basics"),
    (Page::Chapter3, "Chapter 3: Advanced Types"),
];

/// The `/` page: welcome header, feature list, and chapter teasers.
#[component]
pub fn HomePage() -> impl IntoView {
    let features = FEATURES
        .iter()
        .map(|feature| view! { <li>"✅ " {*feature}</li> })
        .collect::<Vec<_>>();

    let chapter_links = FOOTER_CHAPTERS
        .iter()
        .map(|(page, label)| {
            view! {
                <a class="chapter-link" href=page.path()>
                    {*label}
                </a>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <NavBar />
        <div class="home-container">
            <header class="home-header">
                <h1 class="book-title">
                    "Welcome to " <span class="highlight">"\"Mastering TypeScript\""</span>
                </h1>
                <p class="intro">
                    "A comprehensive guide that will take you from zero to hero in \
                     TypeScript, covering everything from the basics to advanced \
                     techniques."
                </p>
                <a class="start-btn" href=Page::ChapterIndex.path()>
                    "Start Learning"
                </a>
            </header>

            <section class="features-section">
                <h2 class="section-title">"What You'll Learn"</h2>
                <ul class="features-list">{features}</ul>
            </section>

            <footer class="home-footer">
                <p>"Explore Chapters"</p>
                <nav class="chapter-links">{chapter_links}</nav>
            </footer>
        </div>
    }
}
