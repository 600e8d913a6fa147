//! Structured replies produced by the model
//!
//! [`CustomerResponse::from_value`] is the trust boundary: nothing the model
//! returns reaches a caller without passing through it.

use helpdesk_core::{Error, StructuredOutput, ValidationError, Violations};
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

/// A validated structured reply to a customer query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Value")]
pub struct CustomerResponse {
    response_text: String,
    confidence_score: f64,
    suggested_actions: Vec<String>,
    escalation_required: bool,
    estimated_resolution_time: Option<String>,
    response_id: String,
}

impl CustomerResponse {
    /// Start building a response from its required fields
    pub fn builder(
        response_text: impl Into<String>,
        confidence_score: f64,
        response_id: impl Into<String>,
    ) -> CustomerResponseBuilder {
        CustomerResponseBuilder {
            response: CustomerResponse {
                response_text: response_text.into(),
                confidence_score,
                suggested_actions: Vec::new(),
                escalation_required: false,
                estimated_resolution_time: None,
                response_id: response_id.into(),
            },
        }
    }

    /// Validate a candidate value produced by the model
    ///
    /// Every field is checked and every failure is reported. `suggested_actions`
    /// defaults to empty, `escalation_required` to false and
    /// `estimated_resolution_time` to absent; `null` also counts as absent for
    /// the optional time, while `""` is kept as a present, empty value.
    /// Unknown keys are ignored.
    pub fn from_value(value: Value) -> Result<Self, ValidationError> {
        let mut fields = match value {
            Value::Object(fields) => fields,
            other => {
                return Err(ValidationError::single(
                    "response",
                    format!("must be a JSON object (got {})", kind(&other)),
                ))
            }
        };
        let mut violations = Violations::new();

        let response_text = required_string(&mut fields, &mut violations, "response_text");
        let confidence_score = match fields.remove("confidence_score") {
            None | Some(Value::Null) => {
                violations.push("confidence_score", "is required");
                None
            }
            Some(Value::Number(n)) => n.as_f64(),
            Some(other) => {
                violations.push(
                    "confidence_score",
                    format!("must be a number (got {})", kind(&other)),
                );
                None
            }
        };
        let suggested_actions = match fields.remove("suggested_actions") {
            None => Some(Vec::new()),
            Some(Value::Array(items)) => string_items(items, &mut violations),
            Some(other) => {
                violations.push(
                    "suggested_actions",
                    format!("must be an array of strings (got {})", kind(&other)),
                );
                None
            }
        };
        let escalation_required = match fields.remove("escalation_required") {
            None => Some(false),
            Some(Value::Bool(b)) => Some(b),
            Some(other) => {
                violations.push(
                    "escalation_required",
                    format!("must be a boolean (got {})", kind(&other)),
                );
                None
            }
        };
        let estimated_resolution_time = match fields.remove("estimated_resolution_time") {
            None | Some(Value::Null) => Some(None),
            Some(Value::String(s)) => Some(Some(s)),
            Some(other) => {
                violations.push(
                    "estimated_resolution_time",
                    format!("must be a string or null (got {})", kind(&other)),
                );
                None
            }
        };
        let response_id = required_string(&mut fields, &mut violations, "response_id");

        let candidate = match (
            response_text,
            confidence_score,
            suggested_actions,
            escalation_required,
            estimated_resolution_time,
            response_id,
        ) {
            (Some(text), Some(score), Some(actions), Some(escalate), Some(eta), Some(id)) => {
                Some(CustomerResponse {
                    response_text: text,
                    confidence_score: score,
                    suggested_actions: actions,
                    escalation_required: escalate,
                    estimated_resolution_time: eta,
                    response_id: id,
                })
            }
            _ => None,
        };

        if let Some(candidate) = &candidate {
            candidate.check(&mut violations);
        }
        violations.finish()?;

        candidate.ok_or_else(|| ValidationError::single("response", "is incomplete"))
    }

    /// Agent reply to the customer
    pub fn response_text(&self) -> &str {
        &self.response_text
    }

    /// Confidence in the reply, in `[0.0, 1.0]`
    pub fn confidence_score(&self) -> f64 {
        self.confidence_score
    }

    /// Recommended follow-up actions, possibly empty
    pub fn suggested_actions(&self) -> &[String] {
        &self.suggested_actions
    }

    /// Whether a human should take over
    pub fn escalation_required(&self) -> bool {
        self.escalation_required
    }

    /// Expected time to resolution, if the model gave one
    pub fn estimated_resolution_time(&self) -> Option<&str> {
        self.estimated_resolution_time.as_deref()
    }

    /// Unique identifier of this reply
    pub fn response_id(&self) -> &str {
        &self.response_id
    }

    fn check(&self, violations: &mut Violations) {
        violations.check(
            !self.response_text.trim().is_empty(),
            "response_text",
            "must not be blank",
        );
        violations.check(
            (0.0..=1.0).contains(&self.confidence_score),
            "confidence_score",
            format!(
                "must be between 0.0 and 1.0 inclusive (got {})",
                self.confidence_score
            ),
        );
        violations.check(
            !self.response_id.trim().is_empty(),
            "response_id",
            "must not be blank",
        );
    }
}

fn required_string(
    fields: &mut Map<String, Value>,
    violations: &mut Violations,
    field: &str,
) -> Option<String> {
    match fields.remove(field) {
        None | Some(Value::Null) => {
            violations.push(field, "is required");
            None
        }
        Some(Value::String(s)) => Some(s),
        Some(other) => {
            violations.push(field, format!("must be a string (got {})", kind(&other)));
            None
        }
    }
}

fn string_items(items: Vec<Value>, violations: &mut Violations) -> Option<Vec<String>> {
    let mut out = Vec::with_capacity(items.len());
    let mut ok = true;
    for (i, item) in items.into_iter().enumerate() {
        match item {
            Value::String(s) => out.push(s),
            other => {
                ok = false;
                violations.push(
                    format!("suggested_actions[{}]", i),
                    format!("must be a string (got {})", kind(&other)),
                );
            }
        }
    }
    ok.then_some(out)
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

impl TryFrom<Value> for CustomerResponse {
    type Error = ValidationError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Self::from_value(value)
    }
}

impl StructuredOutput for CustomerResponse {
    fn schema() -> Value {
        json!({
            "type": "object",
            "properties": {
                "response_text": {
                    "type": "string",
                    "description": "Agent response to customer"
                },
                "confidence_score": {
                    "type": "number",
                    "minimum": 0.0,
                    "maximum": 1.0,
                    "description": "Confidence in response accuracy"
                },
                "suggested_actions": {
                    "type": "array",
                    "items": { "type": "string" },
                    "description": "Recommended follow-up actions"
                },
                "escalation_required": {
                    "type": "boolean",
                    "description": "Whether human escalation is needed"
                },
                "estimated_resolution_time": {
                    "type": ["string", "null"],
                    "description": "Expected time to resolve issue"
                },
                "response_id": {
                    "type": "string",
                    "description": "Unique response identifier"
                }
            },
            "required": [
                "response_text",
                "confidence_score",
                "suggested_actions",
                "escalation_required",
                "estimated_resolution_time",
                "response_id"
            ],
            "additionalProperties": false
        })
    }

    fn schema_name() -> String {
        "customer_response".to_string()
    }

    fn validate(&self) -> Result<(), ValidationError> {
        let mut violations = Violations::new();
        self.check(&mut violations);
        violations.finish()
    }

    fn from_json(value: Value) -> Result<Self, Error> {
        Ok(Self::from_value(value)?)
    }
}

/// Builder for [`CustomerResponse`]
#[derive(Debug, Clone)]
pub struct CustomerResponseBuilder {
    response: CustomerResponse,
}

impl CustomerResponseBuilder {
    /// Append a suggested action
    pub fn suggested_action(mut self, action: impl Into<String>) -> Self {
        self.response.suggested_actions.push(action.into());
        self
    }

    /// Replace the suggested actions
    pub fn suggested_actions(mut self, actions: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.response.suggested_actions = actions.into_iter().map(Into::into).collect();
        self
    }

    /// Flag the query for a human
    pub fn escalation_required(mut self, required: bool) -> Self {
        self.response.escalation_required = required;
        self
    }

    /// Set the expected resolution time
    pub fn estimated_resolution_time(mut self, eta: impl Into<String>) -> Self {
        self.response.estimated_resolution_time = Some(eta.into());
        self
    }

    /// Validate and build the response
    pub fn build(self) -> Result<CustomerResponse, ValidationError> {
        self.response.validate()?;
        Ok(self.response)
    }
}
