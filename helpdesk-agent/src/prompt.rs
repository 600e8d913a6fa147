//! Prompt text sent with each query

use crate::query::CustomerQuery;

/// Instructions given to the model ahead of every query
pub const DEFAULT_SYSTEM_PROMPT: &str = "\
You are a professional customer service agent.

Guidelines:
- Always be helpful, polite, and professional
- Provide accurate information based on company policies
- Escalate complex issues to human agents when necessary
- Suggest practical next steps for the customer
- Estimate resolution times realistically

For billing queries: Focus on account information and payment issues
For technical queries: Provide troubleshooting steps and solutions
For general queries: Address the customer's concern comprehensively";

/// Render the user turn for a query
pub fn user_prompt(query: &CustomerQuery) -> String {
    format!(
        "Customer Query: {}\n\
         Query Type: {}\n\
         Priority: {}\n\
         \n\
         Please provide a helpful response with appropriate actions and escalation assessment.",
        query.message(),
        query.query_type(),
        query.priority(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::{Priority, QueryType};

    #[test]
    fn test_user_prompt_embeds_query() {
        let query = CustomerQuery::builder(
            "CUST_002",
            QueryType::Technical,
            "My app keeps crashing when I export data.",
        )
        .priority(Priority::Low)
        .build()
        .unwrap();

        let prompt = user_prompt(&query);
        assert!(prompt.starts_with("Customer Query: My app keeps crashing when I export data.\n"));
        assert!(prompt.contains("Query Type: technical\n"));
        assert!(prompt.contains("Priority: low\n"));
        // the customer id travels as context, not prompt text
        assert!(!prompt.contains("CUST_002"));
    }

    #[test]
    fn test_system_prompt_covers_every_query_type() {
        for query_type in QueryType::ALL {
            assert!(DEFAULT_SYSTEM_PROMPT.contains(&format!("For {} queries", query_type)));
        }
    }
}
