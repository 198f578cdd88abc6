//! Chapter pages: a shared article renderer over [`ChapterDoc`] records.

use leptos::either::EitherOf6;
use leptos::prelude::*;

use crate::content::{self, Block, ChapterDoc, ListItem, Section};
use crate::nav::NavBar;

fn item_view(item: &'static ListItem) -> impl IntoView {
    view! {
        <li>
            {item.lead.map(|lead| view! { <strong>{lead}</strong> " " })}
            {item.text}
            {item.code.map(|code| view! { <pre>{code}</pre> })}
        </li>
    }
}

fn table_view(
    headers: &'static [&'static str],
    rows: &'static [&'static [&'static str]],
) -> impl IntoView {
    view! {
        <table>
            <thead>
                <tr>{headers.iter().map(|header| view! { <th>{*header}</th> }).collect::<Vec<_>>()}</tr>
            </thead>
            <tbody>
                {rows
                    .iter()
                    .map(|row| {
                        view! {
                            <tr>{row.iter().map(|cell| view! { <td>{*cell}</td> }).collect::<Vec<_>>()}</tr>
                        }
                    })
                    .collect::<Vec<_>>()}
            </tbody>
        </table>
    }
}

fn block_view(block: &'static Block) -> impl IntoView {
    match *block {
        Block::Text(text) => EitherOf6::A(view! { <p>{text}</p> }),
        Block::Sub(heading) => EitherOf6::B(view! { <h3>{heading}</h3> }),
        Block::Bullets(items) => {
            EitherOf6::C(view! { <ul>{items.iter().map(item_view).collect::<Vec<_>>()}</ul> })
        }
        Block::Steps(items) => {
            EitherOf6::D(view! { <ol>{items.iter().map(item_view).collect::<Vec<_>>()}</ol> })
        }
        Block::Code(code) => EitherOf6::E(view! { <pre>{code}</pre> }),
        Block::Table { headers, rows } => EitherOf6::F(table_view(headers, rows)),
    }
}

fn section_view(section: &'static Section) -> impl IntoView {
    view! {
        <h2>{section.heading}</h2>
        {section.blocks.iter().map(block_view).collect::<Vec<_>>()}
    }
}

/// Renders one chapter document: title heading plus its sections in order.
#[component]
fn ChapterArticle(
    /// The chapter to render.
    doc: &'static ChapterDoc,
) -> impl IntoView {
    view! {
        <NavBar />
        <div class="chapter-container">
            <h1 class="chapter-title">{doc.title}</h1>
            <section class="chapter-content">
                {doc.sections.iter().map(section_view).collect::<Vec<_>>()}
            </section>
        </div>
    }
}

/// The `/chapter-1` page.
#[component]
pub fn ChapterOnePage() -> impl IntoView {
    let doc = &content::CHAPTER_ONE;
    view! { <ChapterArticle doc=doc /> }
}

/// The `/chapter-2` page.
#[component]
pub fn ChapterTwoPage() -> impl IntoView {
    let doc = &content::CHAPTER_TWO;
    view! { <ChapterArticle doc=doc /> }
}

/// The `/chapter-3` page.
#[component]
pub fn ChapterThreePage() -> impl IntoView {
    let doc = &content::CHAPTER_THREE;
    view! { <ChapterArticle doc=doc /> }
}

/// The `/chapter-4` page.
#[component]
pub fn ChapterFourPage() -> impl IntoView {
    let doc = &content::CHAPTER_FOUR;
    view! { <ChapterArticle doc=doc /> }
}
