//! # Customer Service Example
//!
//! Routes three sample support queries through the dispatcher using OpenAI.
//!
//! Requires `OPENAI_API_KEY`. `HELPDESK_MODEL`, `HELPDESK_TEMPERATURE` and
//! `HELPDESK_MAX_TOKENS` tune the request; set `RUST_LOG=helpdesk_agent=debug`
//! to watch each dispatch.

use helpdesk::agent::{CustomerQuery, Dispatcher, DispatcherConfig, RawQuery};
use helpdesk::providers::OpenAI;
use tracing_subscriber::EnvFilter;

fn sample_queries() -> Vec<RawQuery> {
    let raw = |customer_id: &str, query_type: &str, message: &str, priority: &str| RawQuery {
        customer_id: customer_id.to_string(),
        query_type: query_type.to_string(),
        message: message.to_string(),
        priority: Some(priority.to_string()),
        timestamp: None,
    };

    vec![
        raw(
            "CUST_001",
            "billing",
            "I was charged twice for my subscription this month. Can you help me understand why?",
            "high",
        ),
        raw(
            "CUST_002",
            "technical",
            "My app keeps crashing when I try to export data. I've tried restarting but it doesn't work.",
            "medium",
        ),
        raw(
            "CUST_003",
            "general",
            "I want to upgrade my plan but I'm not sure which features I need. Can you help me choose?",
            "low",
        ),
    ]
}

fn print_query(query: &CustomerQuery) {
    println!("Customer ID: {}", query.customer_id());
    println!("Query Type: {}", query.query_type());
    println!("Priority: {}", query.priority());
    println!("\nCustomer Message:\n  {}", query.message());
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let provider = OpenAI::from_env()?;
    let config = DispatcherConfig::from_env()?;
    let dispatcher = Dispatcher::with_config(provider, config);

    for (i, raw) in sample_queries().into_iter().enumerate() {
        println!("\n{}", "=".repeat(50));
        println!("Processing Query {}", i + 1);
        println!("{}", "=".repeat(50));

        let query = match CustomerQuery::from_raw(raw) {
            Ok(query) => query,
            Err(e) => {
                println!("Invalid query: {}", e);
                continue;
            }
        };
        print_query(&query);

        match dispatcher.handle(&query).await {
            Ok(response) => {
                println!("\nAgent Response:\n  {}", response.response_text());
                println!("\nConfidence Score: {:.2}", response.confidence_score());
                println!("Escalation Required: {}", response.escalation_required());

                if !response.suggested_actions().is_empty() {
                    println!("\nSuggested Actions:");
                    for action in response.suggested_actions() {
                        println!("  - {}", action);
                    }
                }

                if let Some(eta) = response.estimated_resolution_time() {
                    println!("\nEstimated Resolution Time: {}", eta);
                }

                println!("\nResponse ID: {}", response.response_id());
            }
            Err(e) => println!("Error processing query: {}", e),
        }
    }

    Ok(())
}
