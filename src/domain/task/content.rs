//! Type-specific task content payloads.
//!
//! The content shape depends on the task type, modeled as a tagged union so
//! consumers get compile-time exhaustiveness instead of runtime shape checks.

use serde::{Deserialize, Serialize};

/// Pixel dimensions requested by a design brief.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

/// A customer record to be transcribed in a data-entry task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerForm {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub subscription: String,
    pub start_date: String,
}

/// Content payload of a task, keyed by task type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum TaskContent {
    /// A buggy snippet to debug, with hints and the expected outcome.
    CodeChallenge {
        code_snippet: String,
        expected_output: String,
        hints: Vec<String>,
    },
    /// A design brief with requirements and delivery constraints.
    DesignBrief {
        requirements: Vec<String>,
        dimensions: Dimensions,
        format: String,
    },
    /// A scenario with fixed options the visitor picks between.
    DecisionMaking {
        scenario: String,
        options: Vec<String>,
        constraints: Vec<String>,
    },
    /// Customer forms to transcribe under formatting instructions.
    DataEntry {
        forms: Vec<CustomerForm>,
        fields: Vec<String>,
        special_instructions: String,
    },
    /// A prompt-writing brief with context and example queries.
    PromptEngineering {
        context: String,
        requirements: Vec<String>,
        example_queries: Vec<String>,
    },
}

impl TaskContent {
    /// Returns the wire label of the content type.
    pub fn kind(&self) -> &'static str {
        match self {
            TaskContent::CodeChallenge { .. } => "code-challenge",
            TaskContent::DesignBrief { .. } => "design-brief",
            TaskContent::DecisionMaking { .. } => "decision-making",
            TaskContent::DataEntry { .. } => "data-entry",
            TaskContent::PromptEngineering { .. } => "prompt-engineering",
        }
    }

    /// Returns the selectable options for decision tasks, if any.
    ///
    /// The wizard offers these as pre-canned answers; other task types take
    /// free text.
    pub fn options(&self) -> Option<&[String]> {
        match self {
            TaskContent::DecisionMaking { options, .. } => Some(options),
            _ => None,
        }
    }
}
