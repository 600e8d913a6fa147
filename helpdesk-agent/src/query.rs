//! Inbound customer queries
//!
//! A [`CustomerQuery`] only exists once every field has passed its
//! constraint; construction either yields a complete value or a
//! [`ValidationError`] listing every failing field.

use helpdesk_core::types::Context;
use helpdesk_core::{ValidationError, Violations};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

/// Minimum number of characters in a customer message
pub const MIN_MESSAGE_CHARS: usize = 10;

/// What the customer is asking about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QueryType {
    /// Account and payment questions
    Billing,
    /// Troubleshooting
    Technical,
    /// Anything else
    General,
}

impl QueryType {
    /// Every query type, in declaration order
    pub const ALL: [QueryType; 3] = [QueryType::Billing, QueryType::Technical, QueryType::General];

    /// Wire name
    pub fn as_str(self) -> &'static str {
        match self {
            QueryType::Billing => "billing",
            QueryType::Technical => "technical",
            QueryType::General => "general",
        }
    }
}

impl fmt::Display for QueryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QueryType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| {
                ValidationError::single(
                    "query_type",
                    format!("must be one of billing, technical, general (got {:?})", s),
                )
            })
    }
}

/// How urgently the query should be handled
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// Can wait
    Low,
    /// Normal handling
    #[default]
    Medium,
    /// Handle first
    High,
}

impl Priority {
    /// Every priority, lowest first
    pub const ALL: [Priority; 3] = [Priority::Low, Priority::Medium, Priority::High];

    /// Wire name
    pub fn as_str(self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| {
                ValidationError::single(
                    "priority",
                    format!("must be one of low, medium, high (got {:?})", s),
                )
            })
    }
}

/// A validated customer support request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CustomerQuery {
    customer_id: String,
    query_type: QueryType,
    message: String,
    priority: Priority,
    #[serde(with = "time::serde::rfc3339")]
    timestamp: OffsetDateTime,
}

impl CustomerQuery {
    /// Start building a query from its required fields
    pub fn builder(
        customer_id: impl Into<String>,
        query_type: QueryType,
        message: impl Into<String>,
    ) -> CustomerQueryBuilder {
        CustomerQueryBuilder {
            customer_id: customer_id.into(),
            query_type,
            message: message.into(),
            priority: Priority::default(),
            timestamp: None,
        }
    }

    /// Validate untyped input, reporting unknown enum values as field violations
    pub fn from_raw(raw: RawQuery) -> Result<Self, ValidationError> {
        let mut violations = Violations::new();

        let query_type = raw.query_type.parse::<QueryType>();
        let priority = raw
            .priority
            .as_deref()
            .map_or(Ok(Priority::default()), str::parse::<Priority>);
        record(&mut violations, &query_type);
        record(&mut violations, &priority);
        check_text_fields(&mut violations, &raw.customer_id, &raw.message);
        violations.finish()?;

        let (query_type, priority) = match (query_type, priority) {
            (Ok(query_type), Ok(priority)) => (query_type, priority),
            (Err(err), _) | (_, Err(err)) => return Err(err),
        };

        Ok(Self {
            customer_id: raw.customer_id,
            query_type,
            message: raw.message,
            priority,
            timestamp: raw.timestamp.unwrap_or_else(OffsetDateTime::now_utc),
        })
    }

    /// Customer identifier
    pub fn customer_id(&self) -> &str {
        &self.customer_id
    }

    /// Query category
    pub fn query_type(&self) -> QueryType {
        self.query_type
    }

    /// Customer's message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Handling priority
    pub fn priority(&self) -> Priority {
        self.priority
    }

    /// When the query was created
    pub fn timestamp(&self) -> OffsetDateTime {
        self.timestamp
    }

    /// Opaque key/value context handed to the model provider
    pub fn context(&self) -> Context {
        let timestamp = self
            .timestamp
            .format(&Rfc3339)
            .unwrap_or_else(|_| self.timestamp.to_string());

        Context::from([
            ("customer_id".to_string(), self.customer_id.clone()),
            ("query_type".to_string(), self.query_type.to_string()),
            ("priority".to_string(), self.priority.to_string()),
            ("timestamp".to_string(), timestamp),
        ])
    }
}

fn record<T>(violations: &mut Violations, parsed: &Result<T, ValidationError>) {
    if let Err(err) = parsed {
        for v in err.violations() {
            violations.push(v.field.clone(), v.constraint.clone());
        }
    }
}

fn check_text_fields(violations: &mut Violations, customer_id: &str, message: &str) {
    violations.check(
        !customer_id.trim().is_empty(),
        "customer_id",
        "must not be blank",
    );
    let chars = message.chars().count();
    violations.check(
        chars >= MIN_MESSAGE_CHARS,
        "message",
        format!(
            "must be at least {} characters (got {})",
            MIN_MESSAGE_CHARS, chars
        ),
    );
}

/// Builder for [`CustomerQuery`]
#[derive(Debug, Clone)]
pub struct CustomerQueryBuilder {
    customer_id: String,
    query_type: QueryType,
    message: String,
    priority: Priority,
    timestamp: Option<OffsetDateTime>,
}

impl CustomerQueryBuilder {
    /// Set the priority (defaults to medium)
    pub fn priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Set the timestamp (defaults to the moment `build` runs)
    pub fn timestamp(mut self, timestamp: OffsetDateTime) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    /// Validate and build the query
    pub fn build(self) -> Result<CustomerQuery, ValidationError> {
        let mut violations = Violations::new();
        check_text_fields(&mut violations, &self.customer_id, &self.message);
        violations.finish()?;

        Ok(CustomerQuery {
            customer_id: self.customer_id,
            query_type: self.query_type,
            message: self.message,
            priority: self.priority,
            timestamp: self.timestamp.unwrap_or_else(OffsetDateTime::now_utc),
        })
    }
}

/// Untyped query fields, as they arrive from a form or JSON payload
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RawQuery {
    /// Customer identifier
    pub customer_id: String,
    /// One of `billing`, `technical`, `general`
    pub query_type: String,
    /// Customer's message
    pub message: String,
    /// One of `low`, `medium`, `high`; medium when absent
    #[serde(default)]
    pub priority: Option<String>,
    /// Creation time; now when absent
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub timestamp: Option<OffsetDateTime>,
}
