//! Chapter 1: Introduction to TypeScript.

use super::{Block, ChapterDoc, ListItem, Section};

pub static CHAPTER_ONE: ChapterDoc = ChapterDoc {
    number: 1,
    title: "Introduction to TypeScript",
    sections: &[
        Section {
            heading: "What is TypeScript?",
            blocks: &[
                Block::Text(
                    "TypeScript is an open-source programming language developed and \
                     maintained by Microsoft. It is a strict syntactical superset of \
                     JavaScript that adds optional static typing to the language. This \
                     means that all valid JavaScript code is also valid TypeScript, but \
                     TypeScript enhances JavaScript by providing a type system.",
                ),
                Block::Text(
                    "In essence, TypeScript improves the development experience by adding \
                     powerful features like:",
                ),
                Block::Bullets(&[
                    ListItem::plain("Static Typing"),
                    ListItem::plain("Generics"),
                    ListItem::plain("Interfaces"),
                    ListItem::plain("Enums"),
                    ListItem::plain("Type Inference"),
                ]),
            ],
        },
        Section {
            heading: "Why TypeScript?",
            blocks: &[
                Block::Text(
                    "JavaScript is a dynamic language, which is both its strength and its \
                     limitation. Dynamically typed code can lead to unforeseen bugs and \
                     make code harder to maintain. TypeScript addresses these concerns by \
                     introducing a type system that allows developers to declare types \
                     explicitly. This brings several benefits:",
                ),
                Block::Bullets(&[
                    ListItem::led(
                        "Static Typing:",
                        "TypeScript's type system ensures that the code adheres to the \
                         types specified during development, reducing bugs, especially in \
                         large codebases.",
                    ),
                    ListItem::led(
                        "Improved Tooling:",
                        "TypeScript enhances development environments with features such \
                         as code completion, intelligent refactoring, type checking, and \
                         error reporting before runtime.",
                    ),
                    ListItem::led(
                        "Code Readability and Maintainability:",
                        "Static typing forces developers to write more self-documenting \
                         code.",
                    ),
                    ListItem::led(
                        "Large-Scale Applications:",
                        "TypeScript is particularly beneficial for teams working on \
                         large-scale projects.",
                    ),
                ]),
            ],
        },
        Section {
            heading: "Key Features of TypeScript",
            blocks: &[
                Block::Text("TypeScript introduces several key features that enhance JavaScript:"),
                Block::Bullets(&[
                    ListItem::with_code(
                        "Static Typing:",
                        "You can define types for variables, function parameters, return \
                         values, and more.",
                        "let message: string = 'Hello, TypeScript';",
                    ),
                    ListItem::with_code(
                        "Interfaces:",
                        "Define contracts for objects, enforcing their structure.",
                        "interface Person { name: string; age: number; }",
                    ),
                    ListItem::with_code(
                        "Type Inference:",
                        "TypeScript can infer types based on the value assigned.",
                        "let inferredMessage = 'Hello';  // TypeScript infers this as a string",
                    ),
                    ListItem::with_code(
                        "Generics:",
                        "Allows writing reusable code that works with various types.",
                        "function identity<T>(arg: T): T { return arg; }",
                    ),
                    ListItem::with_code(
                        "Enums:",
                        "Define a set of named constants for easier management.",
                        "enum Direction { Up, Down, Left, Right }",
                    ),
                ]),
            ],
        },
        Section {
            heading: "Setting Up TypeScript",
            blocks: &[
                Block::Text(
                    "To use TypeScript, you first need to set up a development \
                     environment. Follow these steps to install and configure TypeScript:",
                ),
                Block::Steps(&[
                    ListItem::led(
                        "Install Node.js and npm:",
                        "TypeScript requires Node.js and npm. Download them from \
                         nodejs.org.",
                    ),
                    ListItem::with_code(
                        "Install TypeScript:",
                        "Use npm to install TypeScript globally.",
                        "npm install -g typescript",
                    ),
                    ListItem::with_code(
                        "Compiling TypeScript:",
                        "TypeScript files have a .ts extension. Use the TypeScript \
                         compiler to compile them to JavaScript.",
                        "tsc file.ts",
                    ),
                    ListItem::with_code(
                        "Create tsconfig.json:",
                        "Initialize the configuration file for TypeScript projects.",
                        "tsc --init",
                    ),
                ]),
            ],
        },
        Section {
            heading: "Basic TypeScript Example",
            blocks: &[Block::Code(
                r#"// TypeScript code
function add(a: number, b: number): number {
  return a + b;
}

let result = add(5, 10);  // Works perfectly
// let result = add(5, '10');  // Error: Argument of type 'string' is not assignable to parameter of type 'number'."#,
            )],
        },
        Section {
            heading: "TypeScript vs JavaScript",
            blocks: &[
                Block::Text("TypeScript differs from JavaScript in key areas:"),
                Block::Table {
                    headers: &["Feature", "JavaScript", "TypeScript"],
                    rows: &[
                        &["Typing", "Dynamic typing", "Static typing"],
                        &["Tooling", "Basic IDE support", "Enhanced IDE features"],
                        &["Errors", "Runtime errors", "Compile-time errors"],
                    ],
                },
            ],
        },
        Section {
            heading: "Learning TypeScript",
            blocks: &[
                Block::Text("To learn TypeScript:"),
                Block::Bullets(&[
                    ListItem::plain("Master JavaScript first, as TypeScript builds on JavaScript."),
                    ListItem::plain("Focus on understanding the type system."),
                    ListItem::plain(
                        "Explore advanced features like generics, decorators, and modules.",
                    ),
                ]),
            ],
        },
        Section {
            heading: "Conclusion",
            blocks: &[Block::Text(
                "TypeScript enhances JavaScript by adding static typing, making it more \
                 reliable for large-scale applications. It has become a go-to choice for \
                 modern JavaScript development, offering better tooling, error checking, \
                 and a more structured development approach.",
            )],
        },
    ],
};
