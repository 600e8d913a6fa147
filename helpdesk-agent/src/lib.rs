//! Customer-support dispatch with validated structured output
//!
//! A [`CustomerQuery`] is validated on construction, turned into a prompt by
//! the [`Dispatcher`], sent to a [`Provider`](helpdesk_core::Provider) with
//! the [`CustomerResponse`] schema as its output contract, and the reply is
//! re-validated before it reaches the caller.
//!
//! ```no_run
//! use helpdesk_agent::{CustomerQuery, Dispatcher, Priority, QueryType};
//! use helpdesk_providers::OpenAI;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let dispatcher = Dispatcher::new(OpenAI::from_env()?);
//! let query = CustomerQuery::builder(
//!     "CUST_001",
//!     QueryType::Billing,
//!     "I was charged twice for my subscription this month.",
//! )
//! .priority(Priority::High)
//! .build()?;
//!
//! let response = dispatcher.handle(&query).await?;
//! println!("{} ({:.2})", response.response_text(), response.confidence_score());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod config;
pub mod dispatcher;
pub mod error;
pub mod prompt;
pub mod query;
pub mod response;

pub use config::{ConfigError, DispatcherConfig};
pub use dispatcher::Dispatcher;
pub use error::SupportError;
pub use query::{CustomerQuery, CustomerQueryBuilder, Priority, QueryType, RawQuery};
pub use response::{CustomerResponse, CustomerResponseBuilder};
