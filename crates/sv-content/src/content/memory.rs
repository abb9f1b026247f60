//! JVM memory areas and the stages of a small program run

use crate::frames::{MemoryLayout, MemorySection, MemoryStage};

pub static JAVA_MEMORY: MemoryLayout = MemoryLayout {
    title: "Java Memory Management",
    sections: &[
        MemorySection {
            id: "heap",
            name: "Heap Memory",
            description: "The heap is used to store objects and JRE classes. It is divided into Young Generation, Old Generation, and Permanent Generation (Metaspace in Java 8+).",
            details: &[
                "Young Generation: For short-lived objects.",
                "Old Generation: For long-lived objects.",
                "Metaspace: Stores class metadata.",
            ],
        },
        MemorySection {
            id: "stack",
            name: "Stack Memory",
            description: "Each thread has its own stack memory, which stores local variables, method calls, and references to objects in the heap.",
            details: &[
                "Stores method calls and their local variables.",
                "Does not contain objects directly, only references to objects in the heap.",
            ],
        },
        MemorySection {
            id: "methodArea",
            name: "Method Area (MetaSpace)",
            description: "Stores class-related information like bytecode, static variables, and methods.",
            details: &[
                "Contains class bytecode loaded by the classloader.",
                "Holds static variables and method metadata.",
            ],
        },
        MemorySection {
            id: "pcRegister",
            name: "Program Counter (PC) Register",
            description: "A small memory section that stores the address of the currently executing JVM instruction.",
            details: &["Tracks the current program instruction."],
        },
        MemorySection {
            id: "nativeMethodStack",
            name: "Native Method Stack",
            description: "Holds the state for native methods written in C or C++ that interact with Java code.",
            details: &["Used by JVM to execute native methods."],
        },
    ],
    stages: &[
        MemoryStage {
            id: "classLoader",
            name: "Class Loading",
            description: "The ClassLoader loads bytecode into the Method Area. Static variables and metadata are prepared.",
            commands: &[
                "ClassLoader loads 'MyClass.class'.",
                "Static fields initialized: int counter = 0;",
            ],
            active_sections: &["methodArea"],
        },
        MemoryStage {
            id: "objectCreation",
            name: "Object Creation",
            description: "A new object is created in the Heap memory.",
            commands: &["MyClass obj = new MyClass();", "Heap memory allocates space for 'obj'."],
            active_sections: &["heap"],
        },
        MemoryStage {
            id: "methodInvocation",
            name: "Method Invocation",
            description: "The method is invoked, and a stack frame is created in Stack memory.",
            commands: &["obj.methodA();", "Local variables stored in the stack frame."],
            active_sections: &["stack", "pcRegister"],
        },
    ],
};
