//! Prompt templates and fixed customer-facing messages

use crate::retrieval::passage::RetrievedPassage;
use crate::routing::category::Category;

/// Hand-off message for out-of-scope queries.
pub const ESCALATION_MESSAGE: &str = "I'm not able to handle this request. Please contact support@techgear.com or call customer support for further assistance.";

/// Fallback message when the knowledge base has no reliable context.
pub const WEAK_CONTEXT_MESSAGE: &str = "I don't have specific information about that in TechGear's knowledge base. Please contact support@techgear.com for more details.";

/// Templates for the two model calls a turn can make
pub struct PromptTemplate;

impl PromptTemplate {
    /// System instruction that opens every answer prompt
    pub fn answer_system() -> &'static str {
        r#"You are a helpful customer support assistant for TechGear Electronics.
Use the following context to answer the customer's question accurately and professionally.
If you don't know the answer based on the context, say so politely."#
    }

    /// Prompt asking the model for exactly one category token
    pub fn classification_prompt(query: &str) -> String {
        let mut prompt = String::from(
            r#"You are a query classifier for TechGear Electronics customer support.
Classify the following customer query into EXACTLY ONE of these categories:
"#,
        );

        for category in Category::ALL {
            prompt.push_str(&format!(
                "- \"{}\": {}\n",
                category.as_str(),
                category.description()
            ));
        }

        prompt.push_str(&format!(
            r#"
Output ONLY the category name, nothing else.

Query: {}

Category:"#,
            query
        ));

        prompt
    }

    /// Answer prompt: system instruction, retrieved context, history, query.
    ///
    /// `passages` are expected in descending score order and are joined by a
    /// blank line. The history block is omitted when `history` is empty.
    pub fn answer_prompt(history: &str, passages: &[RetrievedPassage], query: &str) -> String {
        let context = passages
            .iter()
            .map(|p| p.content.as_str())
            .collect::<Vec<_>>()
            .join("\n\n");

        let mut prompt = format!("{}\n\nContext:\n{}\n\n", Self::answer_system(), context);

        if history.is_empty() {
            prompt.push_str(&format!("Question: {}\n\n", query));
        } else {
            prompt.push_str(&format!(
                "Conversation history:\n{}\n\nCurrent question: {}\n\n",
                history, query
            ));
        }

        prompt.push_str("Answer:");
        prompt
    }
}
