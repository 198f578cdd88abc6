//! Book content as plain data.
//!
//! Everything the pages display lives here as `static` records: the
//! chapter-index table and one [`ChapterDoc`] per written chapter. The page
//! components in [`crate::pages`] only map these records to markup, so
//! content edits never touch routing or rendering code.

mod chapter_four;
mod chapter_one;
mod chapter_three;
mod chapter_two;

use thiserror::Error;

pub use chapter_four::CHAPTER_FOUR;
pub use chapter_one::CHAPTER_ONE;
pub use chapter_three::CHAPTER_THREE;
pub use chapter_two::CHAPTER_TWO;

use crate::routes::Page;

/// One row of the chapter-index table: a card on the `/chapters` page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChapterCard {
    /// Stable, unique card id.
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    /// Route the card's "Read Chapter" link points at.
    pub target: &'static str,
}

/// A chapter document: title plus ordered sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChapterDoc {
    pub number: u8,
    pub title: &'static str,
    pub sections: &'static [Section],
}

/// One `h2`-level section of a chapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section {
    pub heading: &'static str,
    pub blocks: &'static [Block],
}

/// One block of chapter body content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Block {
    /// A paragraph of prose.
    Text(&'static str),
    /// A sub-heading within the section.
    Sub(&'static str),
    /// Unordered list.
    Bullets(&'static [ListItem]),
    /// Numbered list, used for setup steps.
    Steps(&'static [ListItem]),
    /// A code sample, rendered verbatim.
    Code(&'static str),
    /// A small comparison table.
    Table {
        headers: &'static [&'static str],
        rows: &'static [&'static [&'static str]],
    },
}

/// A list entry, optionally with a bold lead-in and a trailing code sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListItem {
    pub lead: Option<&'static str>,
    pub text: &'static str,
    pub code: Option<&'static str>,
}

impl ListItem {
    pub const fn plain(text: &'static str) -> Self {
        Self {
            lead: None,
            text,
            code: None,
        }
    }

    pub const fn led(lead: &'static str, text: &'static str) -> Self {
        Self {
            lead: Some(lead),
            text,
            code: None,
        }
    }

    pub const fn with_code(lead: &'static str, text: &'static str, code: &'static str) -> Self {
        Self {
            lead: Some(lead),
            text,
            code: Some(code),
        }
    }
}

/// The fixed chapter-index table, one card per planned chapter.
///
/// Only the first four chapters are written; every card still links to
/// chapter 1, the placeholder target the index shipped with.
pub static CHAPTER_INDEX: [ChapterCard; 10] = [
    ChapterCard {
        id: 1,
        title: "Introduction to TypeScript",
        description: "Learn the basics of TypeScript and why it's useful.",
        target: "/chapter-1",
    },
    ChapterCard {
        id: 2,
        title: "TypeScript Types",
        description: "Understand types, interfaces, and how TypeScript handles them.",
        target: "/chapter-1",
    },
    ChapterCard {
        id: 3,
        title: "Functions in TypeScript",
        description: "Learn how to define and use functions with TypeScript.",
        target: "/chapter-1",
    },
    ChapterCard {
        id: 4,
        title: "Generics and Interfaces",
        description: "Master generics and interfaces to write flexible, reusable code.",
        target: "/chapter-1",
    },
    ChapterCard {
        id: 5,
        title: "TypeScript and React",
        description: "How to use TypeScript with React for robust web applications.",
        target: "/chapter-1",
    },
    ChapterCard {
        id: 6,
        title: "Advanced TypeScript Features",
        description: "Explore advanced concepts like mapped types and conditional types.",
        target: "/chapter-1",
    },
    ChapterCard {
        id: 7,
        title: "TypeScript with Node.js",
        description: "Using TypeScript in a Node.js environment for back-end development.",
        target: "/chapter-1",
    },
    ChapterCard {
        id: 8,
        title: "TypeScript for API Development",
        description: "Develop APIs with TypeScript for better type safety and scalability.",
        target: "/chapter-1",
    },
    ChapterCard {
        id: 9,
        title: "TypeScript Decorators",
        description: "Understand and implement decorators in TypeScript.",
        target: "/chapter-1",
    },
    ChapterCard {
        id: 10,
        title: "Testing TypeScript Applications",
        description: "Learn how to test TypeScript applications using Jest and other tools.",
        target: "/chapter-1",
    },
];

/// Violations of the chapter-index table invariants.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ContentError {
    #[error("chapter card {id} links to {target:?}, which is not a registered route")]
    UnroutedTarget { id: u32, target: &'static str },

    #[error("chapter card id {id} appears more than once")]
    DuplicateId { id: u32 },
}

/// Check the chapter-index table invariants: ids unique, every card target
/// resolving to a registered route.
///
/// The table is `static`, so this can only fail after a content edit; the
/// frontend runs it once at startup and tests run it on the shipped data.
pub fn validate() -> Result<(), ContentError> {
    validate_cards(&CHAPTER_INDEX)
}

fn validate_cards(cards: &[ChapterCard]) -> Result<(), ContentError> {
    for (i, card) in cards.iter().enumerate() {
        if Page::from_path(card.target).is_none() {
            return Err(ContentError::UnroutedTarget {
                id: card.id,
                target: card.target,
            });
        }
        if cards[..i].iter().any(|seen| seen.id == card.id) {
            return Err(ContentError::DuplicateId { id: card.id });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shipped_index_is_valid() {
        assert_eq!(validate(), Ok(()));
    }

    #[test]
    fn test_index_has_ten_cards_with_stable_ids() {
        assert_eq!(CHAPTER_INDEX.len(), 10);
        for (i, card) in CHAPTER_INDEX.iter().enumerate() {
            assert_eq!(card.id, i as u32 + 1);
        }
    }

    #[test]
    fn test_dangling_target_is_rejected() {
        let cards = [ChapterCard {
            id: 1,
            title: "Ghost",
            description: "Links nowhere.",
            target: "/chapter-9",
        }];
        assert_eq!(
            validate_cards(&cards),
            Err(ContentError::UnroutedTarget {
                id: 1,
                target: "/chapter-9",
            })
        );
    }

    #[test]
    fn test_duplicate_id_is_rejected() {
        let card = ChapterCard {
            id: 7,
            title: "Twin",
            description: "Same id twice.",
            target: "/chapter-1",
        };
        assert_eq!(
            validate_cards(&[card, card]),
            Err(ContentError::DuplicateId { id: 7 })
        );
    }

    #[test]
    fn test_chapter_docs_are_numbered_and_titled() {
        let docs = [&CHAPTER_ONE, &CHAPTER_TWO, &CHAPTER_THREE, &CHAPTER_FOUR];
        for (i, doc) in docs.iter().enumerate() {
            assert_eq!(doc.number, i as u8 + 1);
            assert!(!doc.title.is_empty());
            assert!(!doc.sections.is_empty());
        }
    }

    #[test]
    fn test_chapter_sections_have_content() {
        for doc in [&CHAPTER_ONE, &CHAPTER_TWO, &CHAPTER_THREE, &CHAPTER_FOUR] {
            for section in doc.sections {
                assert!(!section.heading.is_empty(), "chapter {}", doc.number);
                assert!(!section.blocks.is_empty(), "chapter {}", doc.number);
            }
        }
    }
}
