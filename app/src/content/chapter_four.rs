//! Chapter 4: Generics and Interfaces.

use super::{Block, ChapterDoc, Section};

pub static CHAPTER_FOUR: ChapterDoc = ChapterDoc {
    number: 4,
    title: "Chapter 4: Generics and Interfaces",
    sections: &[
        Section {
            heading: "Introduction to Generics and Interfaces",
            blocks: &[Block::Text(
                "In this chapter, we will explore two important concepts in TypeScript: \
                 generics and interfaces. Understanding these concepts is crucial for \
                 writing flexible and type-safe code. We will cover the basics of \
                 interfaces, how to define and implement them, and the power of \
                 generics in creating reusable components.",
            )],
        },
        Section {
            heading: "Interfaces",
            blocks: &[
                Block::Text(
                    "Interfaces in TypeScript are used to define the structure of an \
                     object. They allow you to enforce that certain properties and \
                     methods are present in an object, making your code more predictable \
                     and easier to maintain. Interfaces are not only useful for defining \
                     object shapes but also for enforcing contracts in your code.",
                ),
                Block::Sub("Defining an Interface"),
                Block::Text(
                    "You can define an interface using the interface keyword. Here's a \
                     simple example:",
                ),
                Block::Code(
                    r#"interface Person {
    name: string;
    age: number;
}

const user: Person = {
    name: 'Alice',
    age: 30,
};"#,
                ),
                Block::Sub("Optional Properties"),
                Block::Text(
                    "You can define optional properties in an interface using the ? \
                     operator. This allows for more flexible object structures, \
                     accommodating scenarios where certain properties might not always \
                     be provided:",
                ),
                Block::Code(
                    r#"interface User {
    username: string;
    email?: string; // Optional property
}

const user: User = {
    username: 'JohnDoe',
};"#,
                ),
                Block::Sub("ReadOnly Properties"),
                Block::Text(
                    "If you want to make a property read-only, you can use the readonly \
                     modifier. This ensures that once a property is set, it cannot be \
                     changed:",
                ),
                Block::Code(
                    r#"interface Book {
    readonly title: string;
    author: string;
}

const book: Book = {
    title: '1984',
    author: 'George Orwell',
};

// book.title = 'Animal Farm'; // Error: Cannot assign to 'title' because it is a read-only property."#,
                ),
                Block::Sub("Function Types in Interfaces"),
                Block::Text(
                    "Interfaces can also define function types. This is useful when you \
                     want to specify the shape of a function:",
                ),
                Block::Code(
                    r#"interface Operation {
    (x: number, y: number): number;
}

const add: Operation = (x, y) => x + y;
const subtract: Operation = (x, y) => x - y;

console.log(add(5, 3)); // Output: 8
console.log(subtract(5, 3)); // Output: 2"#,
                ),
                Block::Sub("Extending Interfaces"),
                Block::Text(
                    "You can extend interfaces to create a new interface that inherits \
                     properties from one or more existing interfaces. This promotes \
                     reusability and a cleaner code structure:",
                ),
                Block::Code(
                    r#"interface Animal {
    name: string;
}

interface Dog extends Animal {
    breed: string;
}

const dog: Dog = {
    name: 'Buddy',
    breed: 'Golden Retriever',
};"#,
                ),
            ],
        },
        Section {
            heading: "Generics",
            blocks: &[
                Block::Text(
                    "Generics allow you to create components that can work with any data \
                     type, providing flexibility while maintaining type safety. They \
                     enable you to define functions, classes, and interfaces with type \
                     parameters, making your code more reusable and adaptable to \
                     different data types.",
                ),
                Block::Sub("Defining a Generic Function"),
                Block::Text(
                    "You can define a generic function by adding a type parameter within \
                     angle brackets. This allows the function to accept arguments of \
                     various types:",
                ),
                Block::Code(
                    r#"function identity<T>(arg: T): T {
    return arg;
}

const strIdentity = identity<string>('Hello'); // inferred as string
const numIdentity = identity<number>(42); // inferred as number"#,
                ),
                Block::Sub("Using Generics with Interfaces"),
                Block::Text(
                    "You can also use generics with interfaces to define structures that \
                     work with multiple types. This allows for greater flexibility and \
                     reusability:",
                ),
                Block::Code(
                    r#"interface Container<T> {
    value: T;
}

const stringContainer: Container<string> = { value: 'Hello' };
const numberContainer: Container<number> = { value: 42 };"#,
                ),
                Block::Sub("Generic Constraints"),
                Block::Text(
                    "Sometimes, you may want to restrict the types that can be used with \
                     generics. This can be achieved using constraints. For example, you \
                     can enforce that a type must have certain properties:",
                ),
                Block::Code(
                    r#"interface Lengthwise {
    length: number;
}

function logLength<T extends Lengthwise>(item: T): void {
    console.log(item.length);
}

logLength('Hello'); // Output: 5
logLength([1, 2, 3]); // Output: 3"#,
                ),
                Block::Sub("Using Multiple Type Parameters"),
                Block::Text(
                    "Generics can take multiple type parameters, allowing for even more \
                     flexibility. This is especially useful when you need to work with \
                     more than one type:",
                ),
                Block::Code(
                    r#"function merge<T, U>(obj1: T, obj2: U): T & U {
    return { ...obj1, ...obj2 };
}

const merged = merge({ name: 'Alice' }, { age: 30 });
console.log(merged); // Output: { name: 'Alice', age: 30 }"#,
                ),
                Block::Sub("Default Type Parameters"),
                Block::Text(
                    "TypeScript allows you to specify default types for your type \
                     parameters, which can be useful in certain scenarios:",
                ),
                Block::Code(
                    r#"function createArray<T = number>(length: number): T[] {
    return new Array<T>(length);
}

const numArray = createArray(5); // inferred as number[]
const strArray = createArray<string>(5); // explicitly specified as string[]"#,
                ),
            ],
        },
        Section {
            heading: "Combining Interfaces and Generics",
            blocks: &[
                Block::Text(
                    "You can combine interfaces and generics to create powerful data \
                     structures. This allows for more complex and reusable code:",
                ),
                Block::Code(
                    r#"interface Response<T> {
    data: T;
    error?: string;
}

const response: Response<number[]> = {
    data: [1, 2, 3],
};

const errorResponse: Response<string> = {
    error: 'Not found',
};"#,
                ),
                Block::Sub("Generic Classes"),
                Block::Text(
                    "Generics can also be used with classes. This allows you to create \
                     class definitions that can handle a variety of data types:",
                ),
                Block::Code(
                    r#"class GenericBox<T> {
    private items: T[] = [];

    add(item: T): void {
        this.items.push(item);
    }

    getItems(): T[] {
        return this.items;
    }
}

const numberBox = new GenericBox<number>();
numberBox.add(1);
numberBox.add(2);
console.log(numberBox.getItems()); // Output: [1, 2]

const stringBox = new GenericBox<string>();
stringBox.add('Hello');
stringBox.add('World');
console.log(stringBox.getItems()); // Output: ['Hello', 'World']"#,
                ),
                Block::Sub("Using Generics in React Components"),
                Block::Text(
                    "Generics are also powerful in the context of React components. You \
                     can create generic components to handle various data types and \
                     provide type safety:",
                ),
                Block::Code(
                    r#"interface ListProps<T> {
    items: T[];
    renderItem: (item: T) => React.ReactNode;
}

function List<T>({ items, renderItem }: ListProps<T>): JSX.Element {
    return (
        <ul>
            {items.map((item, index) => (
                <li key={index}>{renderItem(item)}</li>
            ))}
        </ul>
    );
}

// Usage
const numberList = [1, 2, 3];
const renderedNumberList = <List items={numberList} renderItem={(item) => <span>{item}</span>} />;

const stringList = ['Apple', 'Banana', 'Cherry'];
const renderedStringList = <List items={stringList} renderItem={(item) => <strong>{item}</strong>} />;"#,
                ),
            ],
        },
        Section {
            heading: "Conclusion",
            blocks: &[Block::Text(
                "In this chapter, we explored the concepts of generics and interfaces \
                 in TypeScript. Understanding these features will enable you to write \
                 flexible, reusable, and type-safe code. As you build more complex \
                 applications, mastering generics and interfaces will be invaluable. \
                 These concepts not only improve code maintainability but also empower \
                 developers to create libraries and frameworks that can cater to a wide \
                 variety of use cases.",
            )],
        },
    ],
};
