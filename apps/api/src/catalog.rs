use serde::Serialize;

/// A fixed preference-survey item with an associated career category.
/// The catalog is compiled in and read-only; it is safe for unlimited
/// concurrent readers.
#[derive(Debug, Clone, Serialize)]
pub struct Statement {
    pub id: u32,
    pub category: &'static str,
    pub text: &'static str,
}

const STATEMENTS: &[Statement] = &[
    Statement {
        id: 1,
        category: "Data",
        text: "I enjoy exploring large datasets to find meaningful patterns.",
    },
    Statement {
        id: 2,
        category: "Data Analysis",
        text: "I like using statistical tools to turn raw data into insights.",
    },
    Statement {
        id: 3,
        category: "ML Ops",
        text: "Automating model deployment and monitoring excites me.",
    },
    Statement {
        id: 4,
        category: "Building Applications",
        text: "Building end-to-end software products motivates me.",
    },
    Statement {
        id: 5,
        category: "Agents",
        text: "Designing autonomous AI agents that act without constant oversight appeals to me.",
    },
    Statement {
        id: 6,
        category: "Chatbots",
        text: "Crafting chatbots that hold natural conversations is rewarding.",
    },
    Statement {
        id: 7,
        category: "Evals & Testing",
        text: "I enjoy stress-testing AI models to measure real-world performance.",
    },
    Statement {
        id: 8,
        category: "Cost Control & Reduction",
        text: "Finding ways to cut compute costs in ML workflows motivates me.",
    },
    Statement {
        id: 9,
        category: "Fine-Tuning",
        text: "Adapting pre-trained models to niche use cases interests me.",
    },
    Statement {
        id: 10,
        category: "Guardrails",
        text: "Implementing robust safety and ethical guardrails for AI systems matters to me.",
    },
];

/// Returns the full catalog in its defined order.
pub fn statements() -> &'static [Statement] {
    STATEMENTS
}

/// Looks up a statement by id. Ids are unique and stable.
pub fn find(id: u32) -> Option<&'static Statement> {
    STATEMENTS.iter().find(|s| s.id == id)
}
