//! Gallery catalog: categories, visualizations and their variants

use std::fmt;

use indexmap::IndexMap;
use serde::Serialize;
use sv_core::{NavigatorError, Sequence};
use tracing::debug;

use crate::content::{algorithms, flows, memory, transactions};
use crate::frames::{
    memory_walkthrough, stage_walkthrough, ArrayScanFrame, LinkedListFrame, MemoryFlowFrame,
    PalindromeFrame, Scenario, StackFrame, StageFlow, StageFlowFrame, TransactionFrame,
    TransactionPattern,
};
use crate::view::FrameView;
use crate::ContentError;

/// Any frame the gallery can show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GalleryFrame {
    ArrayScan(ArrayScanFrame),
    LinkedList(LinkedListFrame),
    Palindrome(PalindromeFrame),
    Stack(StackFrame),
    Transaction(TransactionFrame),
    StageFlow(StageFlowFrame),
    Memory(MemoryFlowFrame),
}

impl GalleryFrame {
    fn view(&self) -> &dyn FrameView {
        match self {
            GalleryFrame::ArrayScan(frame) => frame,
            GalleryFrame::LinkedList(frame) => frame,
            GalleryFrame::Palindrome(frame) => frame,
            GalleryFrame::Stack(frame) => frame,
            GalleryFrame::Transaction(frame) => frame,
            GalleryFrame::StageFlow(frame) => frame,
            GalleryFrame::Memory(frame) => frame,
        }
    }
}

impl FrameView for GalleryFrame {
    fn caption(&self) -> &str {
        self.view().caption()
    }

    fn lines(&self) -> Vec<String> {
        self.view().lines()
    }
}

macro_rules! impl_from_frame {
    ($($variant:ident($frame:ty)),* $(,)?) => {
        $(
            impl From<$frame> for GalleryFrame {
                fn from(frame: $frame) -> Self {
                    GalleryFrame::$variant(frame)
                }
            }
        )*
    };
}

impl_from_frame!(
    ArrayScan(ArrayScanFrame),
    LinkedList(LinkedListFrame),
    Palindrome(PalindromeFrame),
    Stack(StackFrame),
    Transaction(TransactionFrame),
    StageFlow(StageFlowFrame),
    Memory(MemoryFlowFrame),
);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Algorithms,
    Microservices,
    CoreJava,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Algorithms, Category::Microservices, Category::CoreJava];

    pub fn title(self) -> &'static str {
        match self {
            Category::Algorithms => "Algorithm Visualizations",
            Category::Microservices => "Microservice Patterns",
            Category::CoreJava => "Core Java Visualizations",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Category::Algorithms => {
                "Interactive visualizations of common data structures and algorithms"
            }
            Category::Microservices => {
                "Explore common microservice architecture patterns and deployments"
            }
            Category::CoreJava => "Understand Java internals and memory management",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Builds the frame sequence of a variant
pub type SequenceBuilder = fn() -> Result<Sequence<GalleryFrame>, NavigatorError>;

/// One alternative sequence of a visualization (e.g. success vs error path)
#[derive(Debug, Clone, Copy)]
pub struct Variant {
    pub key: &'static str,
    pub label: &'static str,
    pub build: SequenceBuilder,
}

impl Variant {
    pub fn sequence(&self) -> Result<Sequence<GalleryFrame>, NavigatorError> {
        (self.build)()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Visualization {
    pub slug: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub category: Category,
    /// Never empty; the first entry is the default
    pub variants: &'static [Variant],
}

impl Visualization {
    pub fn default_variant(&self) -> Option<&'static Variant> {
        let variants = self.variants;
        variants.first()
    }

    /// Variant by key, or the default one when `key` is `None`
    pub fn variant(&self, key: Option<&str>) -> Result<&'static Variant, ContentError> {
        let variants = self.variants;
        let found = match key {
            Some(key) => variants.iter().find(|variant| variant.key == key),
            None => self.default_variant(),
        };
        found.ok_or_else(|| ContentError::UnknownVariant {
            slug: self.slug.to_string(),
            key: key.unwrap_or_default().to_string(),
        })
    }

    pub fn sequence(&self, key: Option<&str>) -> Result<Sequence<GalleryFrame>, ContentError> {
        let variant = self.variant(key)?;
        debug!(slug = self.slug, variant = variant.key, "Building sequence");
        Ok(variant.sequence()?)
    }

    pub fn variant_keys(&self) -> impl Iterator<Item = &'static str> {
        let variants = self.variants;
        variants.iter().map(|variant| variant.key)
    }
}

fn collect<F>(frames: impl IntoIterator<Item = F>) -> Result<Sequence<GalleryFrame>, NavigatorError>
where
    F: Into<GalleryFrame>,
{
    Sequence::new(frames.into_iter().map(Into::into).collect())
}

fn walkthrough(flow: &'static StageFlow) -> Result<Sequence<GalleryFrame>, NavigatorError> {
    collect(stage_walkthrough(flow))
}

fn transaction(
    pattern: TransactionPattern,
    scenario: Scenario,
) -> Result<Sequence<GalleryFrame>, NavigatorError> {
    collect(transactions::frames(pattern, scenario).iter().copied())
}

fn remove_duplicates() -> Result<Sequence<GalleryFrame>, NavigatorError> {
    collect(algorithms::REMOVE_DUPLICATES)
}

fn reverse_linked_list() -> Result<Sequence<GalleryFrame>, NavigatorError> {
    collect(algorithms::REVERSE_LINKED_LIST)
}

fn palindromes() -> Result<Sequence<GalleryFrame>, NavigatorError> {
    collect(algorithms::PALINDROMES)
}

fn push_at_bottom() -> Result<Sequence<GalleryFrame>, NavigatorError> {
    collect(algorithms::PUSH_AT_BOTTOM)
}

fn choreography() -> Result<Sequence<GalleryFrame>, NavigatorError> {
    transaction(TransactionPattern::Choreography, Scenario::Success)
}

fn choreography_failure() -> Result<Sequence<GalleryFrame>, NavigatorError> {
    transaction(TransactionPattern::Choreography, Scenario::Error)
}

fn orchestration() -> Result<Sequence<GalleryFrame>, NavigatorError> {
    transaction(TransactionPattern::Orchestration, Scenario::Success)
}

fn orchestration_failure() -> Result<Sequence<GalleryFrame>, NavigatorError> {
    transaction(TransactionPattern::Orchestration, Scenario::Error)
}

fn two_phase_commit() -> Result<Sequence<GalleryFrame>, NavigatorError> {
    transaction(TransactionPattern::TwoPhaseCommit, Scenario::Success)
}

fn two_phase_commit_failure() -> Result<Sequence<GalleryFrame>, NavigatorError> {
    transaction(TransactionPattern::TwoPhaseCommit, Scenario::Error)
}

fn deployment_pipeline() -> Result<Sequence<GalleryFrame>, NavigatorError> {
    walkthrough(&flows::DEPLOYMENT_PIPELINE)
}

fn microservice_flow() -> Result<Sequence<GalleryFrame>, NavigatorError> {
    walkthrough(&flows::MICROSERVICE_FLOW)
}

fn kafka_flow() -> Result<Sequence<GalleryFrame>, NavigatorError> {
    walkthrough(&flows::KAFKA_FLOW)
}

fn spring_boot_flow() -> Result<Sequence<GalleryFrame>, NavigatorError> {
    walkthrough(&flows::SPRING_BOOT_FLOW)
}

fn spring_boot_concepts() -> Result<Sequence<GalleryFrame>, NavigatorError> {
    walkthrough(&flows::SPRING_BOOT_CONCEPTS)
}

fn hibernate_topics() -> Result<Sequence<GalleryFrame>, NavigatorError> {
    walkthrough(&flows::HIBERNATE_TOPICS)
}

fn java_memory() -> Result<Sequence<GalleryFrame>, NavigatorError> {
    collect(memory_walkthrough(&memory::JAVA_MEMORY))
}

const fn single(build: SequenceBuilder) -> [Variant; 1] {
    [Variant { key: "default", label: "Default", build }]
}

static STANDARD: &[Visualization] = &[
    Visualization {
        slug: "remove-duplicates",
        name: "Remove Duplicates",
        description: "Visualize duplicate removal from arrays",
        category: Category::Algorithms,
        variants: &single(remove_duplicates),
    },
    Visualization {
        slug: "reverse-linked-list",
        name: "Reverse Linked List",
        description: "See linked list reversal in action",
        category: Category::Algorithms,
        variants: &single(reverse_linked_list),
    },
    Visualization {
        slug: "palindrome",
        name: "Palindrome Check",
        description: "Visualize palindrome verification",
        category: Category::Algorithms,
        variants: &single(palindromes),
    },
    Visualization {
        slug: "push-at-bottom",
        name: "Stack Push at Bottom",
        description: "Learn bottom pushing in stacks",
        category: Category::Algorithms,
        variants: &single(push_at_bottom),
    },
    Visualization {
        slug: "transaction-patterns",
        name: "Transaction Patterns",
        description: "Understand distributed transactions",
        category: Category::Microservices,
        variants: &[
            Variant { key: "choreography", label: "Choreography: Success Scenario", build: choreography },
            Variant { key: "choreography-error", label: "Choreography: Error Scenario", build: choreography_failure },
            Variant { key: "orchestration", label: "Orchestration: Success Scenario", build: orchestration },
            Variant { key: "orchestration-error", label: "Orchestration: Error Scenario", build: orchestration_failure },
            Variant { key: "2pc", label: "Distributed Transaction (2PC): Success Scenario", build: two_phase_commit },
            Variant { key: "2pc-error", label: "Distributed Transaction (2PC): Error Scenario", build: two_phase_commit_failure },
        ],
    },
    Visualization {
        slug: "deployment-pipeline",
        name: "Deployment Pipeline",
        description: "See CI/CD pipeline workflow",
        category: Category::Microservices,
        variants: &single(deployment_pipeline),
    },
    Visualization {
        slug: "service-flow",
        name: "Service Flow",
        description: "Visualize microservice interactions",
        category: Category::Microservices,
        variants: &single(microservice_flow),
    },
    Visualization {
        slug: "kafka-workflow",
        name: "Kafka Workflow",
        description: "Visualize Kafka producer and consumer interactions",
        category: Category::Microservices,
        variants: &single(kafka_flow),
    },
    Visualization {
        slug: "spring-boot-workflow",
        name: "Spring Boot Workflow",
        description: "Visualize the lifecycle of a Spring Boot application",
        category: Category::Microservices,
        variants: &single(spring_boot_flow),
    },
    Visualization {
        slug: "spring-boot-annotations",
        name: "Spring Boot Annotation",
        description: "Visualize Spring Boot annotation",
        category: Category::Microservices,
        variants: &single(spring_boot_concepts),
    },
    Visualization {
        slug: "hibernate-workflow",
        name: "Hibernate Workflow",
        description: "Visualize the lifecycle of a Spring Boot with Hibernate application",
        category: Category::Microservices,
        variants: &single(hibernate_topics),
    },
    Visualization {
        slug: "java-memory",
        name: "Java Memory Management",
        description: "Visualize heap, stack, and class loading",
        category: Category::CoreJava,
        variants: &single(java_memory),
    },
];

/// All visualizations, keyed by slug in catalog order
#[derive(Debug, Clone)]
pub struct Gallery {
    entries: IndexMap<&'static str, Visualization>,
}

impl Gallery {
    pub fn new(visualizations: impl IntoIterator<Item = Visualization>) -> Self {
        let entries: IndexMap<_, _> = visualizations
            .into_iter()
            .map(|visualization| (visualization.slug, visualization))
            .collect();
        debug!("Gallery loaded with {} visualizations", entries.len());
        Self { entries }
    }

    /// The built-in catalog
    pub fn standard() -> Self {
        Self::new(STANDARD.iter().copied())
    }

    pub fn get(&self, slug: &str) -> Option<&Visualization> {
        self.entries.get(slug)
    }

    pub fn lookup(&self, slug: &str) -> Result<&Visualization, ContentError> {
        self.get(slug)
            .ok_or_else(|| ContentError::UnknownVisualization(slug.to_string()))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Visualization> {
        self.entries.values()
    }

    pub fn by_category(&self, category: Category) -> impl Iterator<Item = &Visualization> {
        self.iter().filter(move |visualization| visualization.category == category)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
