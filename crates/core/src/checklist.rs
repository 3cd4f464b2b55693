//! Device-local coding checklist.
//!
//! The catalog is fixed at build time; only the checked flags are persisted.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Storage key under which the checklist state is persisted.
pub const CHECKLIST_STORAGE_KEY: &str = "tasktracking:coding-checklist";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChecklistGroup {
    pub title: &'static str,
    pub tasks: &'static [&'static str],
}

pub const CODING_CHECKLIST: &[ChecklistGroup] = &[
    ChecklistGroup {
        title: "Math + ML",
        tasks: &[
            "Implement linear regression from scratch",
            "Implement logistic regression from scratch",
            "Implement gradient descent",
            "Implement softmax + cross-entropy manually",
        ],
    },
    ChecklistGroup {
        title: "Deep Learning",
        tasks: &[
            "Build a neural network from scratch",
            "Build a PyTorch network with custom training loop",
            "Implement dropout manually",
            "Implement layer normalization manually",
        ],
    },
    ChecklistGroup {
        title: "NLP",
        tasks: &[
            "Implement BPE tokenization",
            "Train a word-level language model",
            "Train an LSTM language model",
        ],
    },
    ChecklistGroup {
        title: "Transformers",
        tasks: &[
            "Implement attention",
            "Implement multi-head attention",
            "Implement positional encodings",
            "Implement a transformer encoder",
            "Implement a causal transformer",
            "Train on tiny dataset (Shakespeare)",
        ],
    },
    ChecklistGroup {
        title: "LLM Work",
        tasks: &[
            "Fine-tune GPT-2 using LoRA",
            "Perform 8-bit quantization",
            "Implement RAG pipeline",
            "Build a simple agent",
            "Use MCP (model context protocol)",
        ],
    },
];

/// Persisted map of exercise title to checked flag.
///
/// Serializes as a plain JSON object. Titles not present read as unchecked.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ChecklistState(BTreeMap<String, bool>);

/// Entries are decoded one by one with JavaScript truthiness, so a single odd
/// value never discards the rest of the map.
impl<'de> Deserialize<'de> for ChecklistState {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = BTreeMap::<String, Value>::deserialize(deserializer)?;
        Ok(Self(
            raw.into_iter()
                .map(|(title, value)| (title, is_truthy(&value)))
                .collect(),
        ))
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0 && !n.is_nan()),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

impl ChecklistState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_checked(&self, title: &str) -> bool {
        self.0.get(title).copied().unwrap_or(false)
    }

    /// Set exactly one entry, leaving every other key untouched.
    pub fn set(&mut self, title: impl Into<String>, checked: bool) {
        self.0.insert(title.into(), checked);
    }
}
