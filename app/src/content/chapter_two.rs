//! Chapter 2: TypeScript's Type System.

use super::{Block, ChapterDoc, ListItem, Section};

pub static CHAPTER_TWO: ChapterDoc = ChapterDoc {
    number: 2,
    title: "Chapter 2: TypeScript's Type System",
    sections: &[
        Section {
            heading: "Introduction to TypeScript's Type System",
            blocks: &[Block::Text(
                "TypeScript is a statically typed superset of JavaScript, meaning that \
                 it adds optional static types to JavaScript. One of its core features \
                 is its powerful type system, which ensures that your code is more \
                 predictable and easier to debug by catching errors at compile time. In \
                 this chapter, we will explore the fundamentals of TypeScript's type \
                 system and some advanced features that enable TypeScript to be one of \
                 the most powerful tools for JavaScript developers.",
            )],
        },
        Section {
            heading: "Basic Types in TypeScript",
            blocks: &[
                Block::Text(
                    "Just like in JavaScript, TypeScript includes a set of primitive \
                     data types such as string, number, boolean, and null. What makes \
                     TypeScript different is that you can explicitly declare types, \
                     ensuring that values adhere to the expected data type.",
                ),
                Block::Bullets(&[
                    ListItem::with_code(
                        "String:",
                        "Text values are represented as strings.",
                        "let greeting: string = 'Hello, TypeScript';",
                    ),
                    ListItem::with_code(
                        "Number:",
                        "Both integers and floating-point numbers are treated as number \
                         types.",
                        "let age: number = 30;",
                    ),
                    ListItem::with_code(
                        "Boolean:",
                        "Logical values, true or false.",
                        "let isValid: boolean = true;",
                    ),
                    ListItem::with_code(
                        "Array:",
                        "Arrays can hold multiple values of the same type.",
                        "let numbers: number[] = [1, 2, 3, 4];",
                    ),
                    ListItem::with_code(
                        "Tuple:",
                        "A tuple allows you to specify an array with a fixed number of \
                         elements, each with a specific type.",
                        "let tuple: [string, number] = ['Alice', 25];",
                    ),
                    ListItem::with_code(
                        "Enum:",
                        "Enums allow you to define a set of named constants.",
                        "enum Direction { Up, Down, Left, Right }\nlet dir: Direction = Direction.Left;",
                    ),
                    ListItem::with_code(
                        "Any:",
                        "A type that disables type checking, allowing any type of value.",
                        "let randomValue: any = 'This could be anything';",
                    ),
                    ListItem::with_code(
                        "Void:",
                        "Usually used to denote the absence of a return value, especially \
                         for functions.",
                        "function logMessage(): void { console.log('Logging message'); }",
                    ),
                ]),
            ],
        },
        Section {
            heading: "Type Annotations and Type Inference",
            blocks: &[
                Block::Text(
                    "TypeScript lets you annotate variables, parameters, and function \
                     return types, providing explicit type definitions. However, when \
                     you don't explicitly define a type, TypeScript infers the type \
                     based on the initial assignment.",
                ),
                Block::Sub("Type Annotations"),
                Block::Code(
                    r#"let message: string = 'TypeScript is awesome!';

function greet(name: string): string {
  return 'Hello, ' + name;
}"#,
                ),
                Block::Sub("Type Inference"),
                Block::Text(
                    "Type inference is when TypeScript automatically infers the type \
                     based on the initial value assigned to a variable. For example, if \
                     you initialize a variable with a string, TypeScript automatically \
                     knows it's a string and restricts it to that type.",
                ),
                Block::Code(
                    r#"let username = 'John';  // Inferred as string
let score = 100;  // Inferred as number
// username = 42;  // Error: Type 'number' is not assignable to type 'string'"#,
                ),
            ],
        },
        Section {
            heading: "Union and Intersection Types",
            blocks: &[
                Block::Sub("Union Types"),
                Block::Text(
                    "A union type allows you to define a variable that can hold more \
                     than one type. This is useful when you want to provide flexibility \
                     but still maintain type safety.",
                ),
                Block::Code(
                    r#"let identifier: string | number;
identifier = 'abc123';  // valid
identifier = 123;  // also valid"#,
                ),
                Block::Sub("Intersection Types"),
                Block::Text(
                    "Intersection types combine multiple types into one. This is \
                     particularly useful when you need to create a new type that has all \
                     the properties of other types.",
                ),
                Block::Code(
                    r#"interface User {
  name: string;
  age: number;
}

interface Admin {
  role: string;
}

type AdminUser = User & Admin;

let admin: AdminUser = {
  name: 'Alice',
  age: 30,
  role: 'Admin'
};"#,
                ),
            ],
        },
        Section {
            heading: "Type Aliases",
            blocks: &[
                Block::Text(
                    "Type aliases are a way to give a name to any type. This can make \
                     your code cleaner and easier to read, especially when using complex \
                     types like union types or intersections.",
                ),
                Block::Code(
                    r#"type StringOrNumber = string | number;
let id: StringOrNumber = '123';
id = 123;  // valid"#,
                ),
            ],
        },
        Section {
            heading: "Interfaces in TypeScript",
            blocks: &[
                Block::Text(
                    "An interface in TypeScript is a way to define the shape of an \
                     object. It enforces the presence of specific properties and their \
                     respective types, making it easier to structure objects predictably.",
                ),
                Block::Code(
                    r#"interface Car {
  brand: string;
  model: string;
  year: number;
}

let myCar: Car = {
  brand: 'Tesla',
  model: 'Model 3',
  year: 2021
};"#,
                ),
                Block::Text(
                    "Interfaces can also extend other interfaces, inheriting properties \
                     and adding additional ones. This is useful when dealing with more \
                     complex object structures.",
                ),
                Block::Code(
                    r#"interface ElectricCar extends Car {
  batteryCapacity: number;
}

let tesla: ElectricCar = {
  brand: 'Tesla',
  model: 'Model S',
  year: 2022,
  batteryCapacity: 100
};"#,
                ),
            ],
        },
        Section {
            heading: "Generics in TypeScript",
            blocks: &[
                Block::Text(
                    "Generics allow you to create reusable code components that can work \
                     with any type. This is particularly useful in functions, classes, \
                     or interfaces that need to be flexible and work across a range of \
                     types.",
                ),
                Block::Sub("Generic Functions"),
                Block::Text(
                    "A generic function works with any type, but maintains type safety. \
                     You define a type parameter <T> that allows the function to handle \
                     multiple types while preserving the type information.",
                ),
                Block::Code(
                    r#"function identity<T>(value: T): T {
  return value;
}

let stringIdentity = identity<string>('Hello');
let numberIdentity = identity<number>(42);"#,
                ),
                Block::Sub("Generic Interfaces"),
                Block::Text(
                    "Generics can also be applied to interfaces, allowing you to define \
                     flexible object structures.",
                ),
                Block::Code(
                    r#"interface Box<T> {
  content: T;
}

let stringBox: Box<string> = { content: 'This is a string' };
let numberBox: Box<number> = { content: 100 };"#,
                ),
            ],
        },
        Section {
            heading: "Advanced Types: Type Assertions",
            blocks: &[
                Block::Text(
                    "Type assertions allow you to tell TypeScript the specific type of a \
                     variable when TypeScript cannot infer it correctly. This is often \
                     necessary when dealing with DOM elements or when migrating \
                     JavaScript codebases to TypeScript.",
                ),
                Block::Code(
                    r#"let someValue: any = 'Hello, TypeScript';
let strLength: number = (someValue as string).length;"#,
                ),
                Block::Text(
                    "Type assertions are not the same as type casting found in other \
                     languages. They simply inform TypeScript that the developer knows \
                     more about the type than the compiler can infer.",
                ),
            ],
        },
        Section {
            heading: "Type Guards",
            blocks: &[
                Block::Text(
                    "Type guards are functions or constructs that help TypeScript narrow \
                     down types at runtime. They are useful when working with union \
                     types and when you want to ensure that certain operations are only \
                     performed on specific types.",
                ),
                Block::Code(
                    r#"function isNumber(value: any): value is number {
  return typeof value === 'number';
}

function processValue(value: string | number) {
  if (isNumber(value)) {
    console.log('It is a number:', value * 2);
  } else {
    console.log('It is a string:', value.toUpperCase());
  }
}"#,
                ),
            ],
        },
        Section {
            heading: "Mapped Types",
            blocks: &[
                Block::Text(
                    "Mapped types allow you to create new types by transforming existing \
                     types. This is useful when you want to dynamically create types \
                     based on existing ones.",
                ),
                Block::Code(
                    r#"type Readonly<T> = {
  readonly [P in keyof T]: T[P];
};

interface User {
  name: string;
  age: number;
}

const user: Readonly<User> = { name: 'Alice', age: 30 };
// user.name = 'Bob';  // Error: Cannot assign to 'name' because it is a read-only property"#,
                ),
            ],
        },
        Section {
            heading: "Utility Types",
            blocks: &[
                Block::Text(
                    "TypeScript provides several built-in utility types to help \
                     manipulate types in more complex ways. Some commonly used utility \
                     types include:",
                ),
                Block::Bullets(&[
                    ListItem::led("Partial<T>:", "Makes all properties of a type optional."),
                    ListItem::led("Readonly<T>:", "Makes all properties of a type read-only."),
                    ListItem::led(
                        "Pick<T, K>:",
                        "Creates a new type by picking specific properties from an \
                         existing type.",
                    ),
                    ListItem::led(
                        "Omit<T, K>:",
                        "Creates a new type by omitting specific properties from an \
                         existing type.",
                    ),
                ]),
                Block::Code(
                    r#"type PartialUser = Partial<User>;
let partialUser: PartialUser = { name: 'Alice' };

type ReadonlyUser = Readonly<User>;
let readonlyUser: ReadonlyUser = { name: 'Bob', age: 35 };"#,
                ),
            ],
        },
        Section {
            heading: "Conditional Types",
            blocks: &[
                Block::Text(
                    "Conditional types allow you to define types based on a condition. \
                     This can be especially powerful when dealing with advanced type \
                     transformations.",
                ),
                Block::Code(
                    r#"type IsString<T> = T extends string ? 'Yes' : 'No';

type Test1 = IsString<string>;  // 'Yes'
type Test2 = IsString<number>;  // 'No'"#,
                ),
            ],
        },
        Section {
            heading: "Conclusion",
            blocks: &[Block::Text(
                "In this chapter, we've covered a wide range of TypeScript's type \
                 system features, from basic types to more advanced features like \
                 generics, type guards, and mapped types. Mastering these concepts will \
                 help you write more robust, maintainable, and scalable code.",
            )],
        },
    ],
};
