//! Helpdesk - typed customer-support dispatch over structured LLM output
//!
//! A customer query is validated when it is built, sent to a language model
//! together with the JSON Schema of the expected reply, and the reply is
//! validated again before it is handed back. Either a fully valid
//! [`agent::CustomerResponse`] comes out, or an error naming what went wrong.
//!
//! # Quick Start
//!
//! ```no_run
//! # #[cfg(all(feature = "agent", feature = "providers"))]
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use helpdesk::agent::{CustomerQuery, Dispatcher, Priority, QueryType};
//! use helpdesk::providers::OpenAI;
//!
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
//! println!("{}", response.response_text());
//! # Ok(())
//! # }
//! # #[cfg(not(all(feature = "agent", feature = "providers")))]
//! # fn main() {}
//! ```

#![warn(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

// Re-export core types
pub use helpdesk_core::*;

// Re-export feature-gated modules
#[cfg(feature = "providers")]
#[cfg_attr(docsrs, doc(cfg(feature = "providers")))]
pub mod providers {
    //! Provider implementations
    pub use helpdesk_providers::*;
}

#[cfg(feature = "client")]
#[cfg_attr(docsrs, doc(cfg(feature = "client")))]
pub mod client {
    //! High-level client API
    pub use helpdesk_client::*;
}

#[cfg(feature = "agent")]
#[cfg_attr(docsrs, doc(cfg(feature = "agent")))]
pub mod agent {
    //! Customer queries, responses and the dispatcher
    pub use helpdesk_agent::*;
}

/// Prelude module for convenient imports
pub mod prelude {
    pub use helpdesk_core::{
        Error, Message, Model, Parameters, Provider, Request, Response, ResponseFormat, Role,
        StructuredOutput, ValidationError,
    };

    #[cfg(feature = "providers")]
    pub use helpdesk_providers::{openai::OpenAIConfig, OpenAI};

    #[cfg(feature = "client")]
    pub use helpdesk_client::{Client, RequestBuilder};

    #[cfg(feature = "agent")]
    pub use helpdesk_agent::{
        CustomerQuery, CustomerResponse, Dispatcher, DispatcherConfig, Priority, QueryType,
        SupportError,
    };
}
