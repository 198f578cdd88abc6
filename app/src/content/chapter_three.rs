//! Chapter 3: Advanced TypeScript Features.

use super::{Block, ChapterDoc, Section};

pub static CHAPTER_THREE: ChapterDoc = ChapterDoc {
    number: 3,
    title: "Chapter 3: Advanced TypeScript Features",
    sections: &[
        Section {
            heading: "Introduction to Advanced TypeScript Features",
            blocks: &[Block::Text(
                "TypeScript provides a robust set of features that enable developers to \
                 write highly maintainable and scalable code. In this chapter, we will \
                 delve into some advanced concepts such as decorators, modules, \
                 namespaces, and advanced generics. We will also explore how to use \
                 TypeScript with third-party libraries and tools.",
            )],
        },
        Section {
            heading: "Decorators",
            blocks: &[
                Block::Text(
                    "Decorators are a powerful feature in TypeScript that allow you to \
                     modify the behavior of classes, methods, properties, or parameters \
                     at design time. They are similar to annotations in other \
                     programming languages like Java.",
                ),
                Block::Sub("What are Decorators?"),
                Block::Text(
                    "Decorators are special functions prefixed with @ that can be \
                     applied to classes, methods, or properties. They allow you to add \
                     additional functionality, modify behavior, or apply metadata.",
                ),
                Block::Sub("Using Decorators"),
                Block::Text(
                    "To enable decorators in TypeScript, you need to set the \
                     experimentalDecorators option in your tsconfig.json file:",
                ),
                Block::Code(
                    r#"{
  "compilerOptions": {
    "experimentalDecorators": true,
    "target": "ES6",
    "module": "commonjs"
  }
}"#,
                ),
                Block::Sub("Class Decorators"),
                Block::Text(
                    "A class decorator is applied to the constructor of the class. It \
                     can be used to modify the class definition.",
                ),
                Block::Code(
                    r#"function LogClass(constructor: Function) {
  console.log('Class created:', constructor.name);
}

@LogClass
class Person {
  constructor(public name: string) {}
}

const person = new Person('Alice');"#,
                ),
                Block::Sub("Method Decorators"),
                Block::Text("Method decorators are used to modify the behavior of class methods."),
                Block::Code(
                    r#"function LogMethod(target: any, propertyName: string, descriptor: PropertyDescriptor) {
  const originalMethod = descriptor.value;

  descriptor.value = function (...args: any[]) {
    console.log(`Calling ${propertyName} with args: ${JSON.stringify(args)}`);
    return originalMethod.apply(this, args);
  };
}

class Calculator {
  @LogMethod
  add(a: number, b: number) {
    return a + b;
  }
}

const calculator = new Calculator();
calculator.add(5, 10);"#,
                ),
                Block::Sub("Property Decorators"),
                Block::Text("Property decorators can be used to modify properties of a class."),
                Block::Code(
                    r#"function LogProperty(target: any, propertyName: string) {
  console.log(`Property ${propertyName} is defined`);
}

class User {
  @LogProperty
  public username: string;

  constructor(username: string) {
    this.username = username;
  }
}

const user = new User('JohnDoe');"#,
                ),
            ],
        },
        Section {
            heading: "Modules in TypeScript",
            blocks: &[
                Block::Text(
                    "Modules in TypeScript help organize code into separate files and \
                     namespaces, making it easier to manage large codebases. TypeScript \
                     supports both ES6-style modules and CommonJS-style modules.",
                ),
                Block::Sub("Creating Modules"),
                Block::Text(
                    "To create a module, simply use the export keyword to export \
                     variables, functions, or classes. You can then import them using \
                     the import keyword in another file.",
                ),
                Block::Code(
                    r#"// math.ts
export function add(a: number, b: number): number {
  return a + b;
}

export function subtract(a: number, b: number): number {
  return a - b;
}

// main.ts
import { add, subtract } from './math';

console.log(add(5, 10));  // Output: 15
console.log(subtract(10, 5));  // Output: 5"#,
                ),
                Block::Sub("Namespace"),
                Block::Text(
                    "Namespaces are a way to group related code together. They can help \
                     prevent naming collisions and organize your code logically.",
                ),
                Block::Code(
                    r#"namespace Geometry {
  export function areaOfCircle(radius: number): number {
    return Math.PI * radius * radius;
  }
}

console.log(Geometry.areaOfCircle(5));  // Output: 78.53981633974483"#,
                ),
            ],
        },
        Section {
            heading: "Advanced Generics",
            blocks: &[
                Block::Text(
                    "Generics allow for more flexible code by enabling types to be \
                     defined as parameters. In this section, we will explore more \
                     advanced uses of generics in TypeScript.",
                ),
                Block::Sub("Generic Constraints"),
                Block::Text(
                    "You can restrict the types that can be used with generics by using \
                     constraints. This allows you to enforce that the type passed in \
                     adheres to a specific interface or class.",
                ),
                Block::Code(
                    r#"interface Lengthwise {
  length: number;
}

function logLength<T extends Lengthwise>(item: T): void {
  console.log(item.length);
}

logLength('Hello');  // Output: 5
logLength([1, 2, 3]);  // Output: 3"#,
                ),
                Block::Sub("Using Multiple Type Parameters"),
                Block::Text(
                    "Generics can take multiple type parameters, allowing for even more \
                     flexibility.",
                ),
                Block::Code(
                    r#"function merge<T, U>(obj1: T, obj2: U): T & U {
  return { ...obj1, ...obj2 };
}

const merged = merge({ name: 'Alice' }, { age: 30 });
console.log(merged);  // Output: { name: 'Alice', age: 30 }"#,
                ),
            ],
        },
        Section {
            heading: "Type Inference with Generics",
            blocks: &[
                Block::Text(
                    "TypeScript can often infer the type parameters when calling a \
                     generic function. You don't always need to explicitly define the \
                     types when calling functions that use generics.",
                ),
                Block::Code(
                    r#"function identity<T>(value: T): T {
  return value;
}

let stringIdentity = identity('Hello');  // inferred as string
let numberIdentity = identity(42);  // inferred as number"#,
                ),
            ],
        },
        Section {
            heading: "Working with Third-Party Libraries",
            blocks: &[
                Block::Text(
                    "TypeScript allows you to integrate with third-party libraries \
                     easily. However, many libraries may not have TypeScript definitions \
                     out of the box. In this section, we will explore how to use \
                     third-party libraries in TypeScript.",
                ),
                Block::Sub("Installing Type Definitions"),
                Block::Text(
                    "Many popular libraries have corresponding type definitions \
                     available via DefinitelyTyped. You can install these definitions \
                     using npm or yarn.",
                ),
                Block::Code("npm install --save-dev @types/lodash"),
                Block::Sub("Using Libraries Without Type Definitions"),
                Block::Text(
                    "If a library does not have type definitions, you can declare a \
                     module for it yourself. This allows you to use the library with \
                     TypeScript while providing minimal type safety.",
                ),
                Block::Code(
                    r#"declare module 'my-library' {
  export function myFunction(input: string): number;
}"#,
                ),
            ],
        },
        Section {
            heading: "Mixins in TypeScript",
            blocks: &[
                Block::Text(
                    "Mixins are a way to create reusable components of behavior that can \
                     be applied to multiple classes. TypeScript allows you to define \
                     mixins using a combination of classes and interfaces.",
                ),
                Block::Sub("Creating a Mixin"),
                Block::Text(
                    "You can create a mixin by defining a function that takes a base \
                     class as an argument and returns a new class that extends it.",
                ),
                Block::Code(
                    r#"function Loggable<T extends new (...args: any[]) => {}>(Base: T) {
  return class extends Base {
    log() {
      console.log(this);
    }
  };
}

class User {
  constructor(public name: string) {}
}

const LoggableUser = Loggable(User);

const user = new LoggableUser('Alice');
user.log();  // Output: LoggableUser { name: 'Alice' }"#,
                ),
            ],
        },
        Section {
            heading: "TypeScript with React",
            blocks: &[
                Block::Text(
                    "TypeScript integrates well with React, providing strong typing for \
                     props, state, and hooks. This section will cover best practices for \
                     using TypeScript in React applications.",
                ),
                Block::Sub("Typing Props in Functional Components"),
                Block::Text(
                    "When creating a functional component, you can define the types for \
                     the props by using TypeScript interfaces or types.",
                ),
                Block::Code(
                    r#"interface GreetingProps {
  name: string;
}

const Greeting: React.FC<GreetingProps> = ({ name }) => {
  return <h1>Hello, {name}!</h1>;
};"#,
                ),
                Block::Sub("Using Generics with React Components"),
                Block::Text(
                    "You can also use generics with React components to create reusable \
                     components that accept various prop types.",
                ),
                Block::Code(
                    r#"interface ListProps<T> {
  items: T[];
  renderItem: (item: T) => React.ReactNode;
}

const List = <T,>({ items, renderItem }: ListProps<T>) => {
  return <ul>{items.map(renderItem)}</ul>;
};"#,
                ),
            ],
        },
        Section {
            heading: "Conclusion",
            blocks: &[Block::Text(
                "In this chapter, we explored advanced TypeScript features that can \
                 enhance your coding experience and help you write better, more \
                 maintainable code. From decorators to generics, and from modules to \
                 mixins, these concepts provide powerful tools for building complex \
                 applications. Understanding these features will help you leverage the \
                 full potential of TypeScript in your projects.",
            )],
        },
    ],
};
