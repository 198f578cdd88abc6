//! Markup-level tests over the rendered pages.
//!
//! Pages are static views, so each test renders a component to an HTML
//! string under a fresh reactive root and asserts on the markup.

use app::content::CHAPTER_INDEX;
use app::pages::{
    ChapterFourPage, ChapterIndexPage, ChapterOnePage, ChapterThreePage, ChapterTwoPage, HomePage,
    NotFoundPage,
};
use app::routes::Page;
use leptos::prelude::*;

fn render_page<V: IntoView>(make: impl FnOnce() -> V) -> String {
    let owner = Owner::new_root(None);
    owner.with(|| make().to_html())
}

fn render_route(page: Page) -> String {
    match page {
        Page::Home => render_page(HomePage),
        Page::ChapterIndex => render_page(ChapterIndexPage),
        Page::Chapter1 => render_page(ChapterOnePage),
        Page::Chapter2 => render_page(ChapterTwoPage),
        Page::Chapter3 => render_page(ChapterThreePage),
        Page::Chapter4 => render_page(ChapterFourPage),
    }
}

/// The `<h1>` fragment that appears on exactly one page.
fn distinguishing_heading(page: Page) -> &'static str {
    match page {
        Page::Home => r#"<h1 class="book-title">Welcome to "#,
        Page::ChapterIndex => r#"<h1 class="chapters-title">Chapters</h1>"#,
        Page::Chapter1 => r#"<h1 class="chapter-title">Introduction to TypeScript</h1>"#,
        Page::Chapter2 => r#"<h1 class="chapter-title">Chapter 2: TypeScript"#,
        Page::Chapter3 => r#"<h1 class="chapter-title">Chapter 3: Advanced TypeScript Features</h1>"#,
        Page::Chapter4 => r#"<h1 class="chapter-title">Chapter 4: Generics and Interfaces</h1>"#,
    }
}

fn nav_fragment(html: &str) -> &str {
    let start = html.find("<nav").expect("page should contain a <nav> element");
    let end = html[start..]
        .find("</nav>")
        .map(|i| start + i + "</nav>".len())
        .expect("nav element should be closed");
    &html[start..end]
}

#[test]
fn test_each_route_renders_its_distinguishing_heading() {
    for page in Page::ALL {
        let html = render_route(page);
        assert!(
            html.contains(distinguishing_heading(page)),
            "{} is missing its heading",
            page.path()
        );
        for other in Page::ALL {
            if other != page {
                assert!(
                    !html.contains(distinguishing_heading(other)),
                    "{} leaks the heading of {}",
                    page.path(),
                    other.path()
                );
            }
        }
    }
}

#[test]
fn test_home_page_shows_the_book_title() {
    let html = render_page(HomePage);
    assert!(html.contains(r#""Mastering TypeScript""#));
    assert!(html.contains(&format!(r#"href="{}""#, Page::ChapterIndex.path())));
}

#[test]
fn test_chapter_index_renders_one_card_per_entry() {
    let html = render_page(ChapterIndexPage);

    assert_eq!(html.matches("chapter-card").count(), CHAPTER_INDEX.len());
    assert_eq!(html.matches("Read Chapter").count(), CHAPTER_INDEX.len());

    for card in &CHAPTER_INDEX {
        assert!(html.contains(card.title), "missing card: {}", card.title);
        assert!(
            html.contains(&format!(r#"href="{}""#, card.target)),
            "missing link target for: {}",
            card.title
        );
    }
}

#[test]
fn test_navigation_bar_is_identical_on_every_page() {
    let home = render_route(Page::Home);
    let reference = nav_fragment(&home).to_string();

    assert!(reference.contains("Mastering TypeScript"));
    assert!(reference.contains(&format!(r#"href="{}""#, Page::Home.path())));
    assert!(reference.contains(&format!(r#"href="{}""#, Page::ChapterIndex.path())));

    for page in Page::ALL {
        let html = render_route(page);
        assert_eq!(nav_fragment(&html), reference, "{}", page.path());
    }

    let not_found = render_page(NotFoundPage);
    assert_eq!(nav_fragment(&not_found), reference, "not-found page");
}

#[test]
fn test_rendering_is_idempotent() {
    for page in Page::ALL {
        assert_eq!(render_route(page), render_route(page), "{}", page.path());
    }
    assert_eq!(
        render_page(NotFoundPage),
        render_page(NotFoundPage),
        "not-found page"
    );
}

#[test]
fn test_not_found_page_offers_a_way_home() {
    let html = render_page(NotFoundPage);
    assert!(html.contains("Page Not Found"));
    assert!(html.contains("Sorry, the page you are looking for"));
    assert!(html.contains(&format!(r#"href="{}""#, Page::Home.path())));
    assert!(html.contains("Go Home"));
}
