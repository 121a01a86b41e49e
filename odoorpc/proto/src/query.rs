//! Query options and the domain filter expression.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One filter clause: field, comparison operator, operand.
///
/// Serializes as a 3-element JSON array, the shape the server expects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Clause(pub String, pub String, pub Value);

/// Ordered filter expression selecting records server-side.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Domain(pub Vec<Clause>);

impl Domain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a field/operator/value clause.
    pub fn filter(
        mut self,
        field: impl Into<String>,
        operator: impl Into<String>,
        value: impl Into<Value>,
    ) -> Self {
        self.0.push(Clause(field.into(), operator.into(), value.into()));
        self
    }
}

/// Options bag accepted by the query-flavored operations.
///
/// All fields are optional. An absent field is omitted from the outgoing
/// envelope, never defaulted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<Domain>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ids: Option<Vec<i64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub groupby: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lazy: Option<bool>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_domain(mut self, domain: Domain) -> Self {
        self.domain = Some(domain);
        self
    }

    pub fn with_ids(mut self, ids: Vec<i64>) -> Self {
        self.ids = Some(ids);
        self
    }

    pub fn with_fields(mut self, fields: Vec<String>) -> Self {
        self.fields = Some(fields);
        self
    }

    pub fn with_offset(mut self, offset: u32) -> Self {
        self.offset = Some(offset);
        self
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn with_order(mut self, order: impl Into<String>) -> Self {
        self.order = Some(order.into());
        self
    }

    pub fn with_groupby(mut self, groupby: impl Into<String>) -> Self {
        self.groupby = Some(groupby.into());
        self
    }

    pub fn with_lazy(mut self, lazy: bool) -> Self {
        self.lazy = Some(lazy);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn clauses_serialize_as_triples() {
        let domain = Domain::new()
            .filter("id", ">", 0)
            .filter("name", "ilike", "acme");

        let encoded = serde_json::to_value(&domain).unwrap();
        assert_eq!(encoded, json!([["id", ">", 0], ["name", "ilike", "acme"]]));
    }

    #[test]
    fn domains_round_trip() {
        let domain = Domain::new().filter("active", "=", true);
        let encoded = serde_json::to_string(&domain).unwrap();
        let decoded: Domain = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, domain);
    }

    #[test]
    fn params_start_empty() {
        assert_eq!(QueryParams::new(), QueryParams::default());
        let encoded = serde_json::to_value(QueryParams::new()).unwrap();
        assert_eq!(encoded, json!({}));
    }

    #[test]
    fn builders_fill_single_fields() {
        let params = QueryParams::new()
            .with_limit(10)
            .with_order("name asc")
            .with_fields(vec!["id".to_string(), "name".to_string()]);

        assert_eq!(params.limit, Some(10));
        assert_eq!(params.order.as_deref(), Some("name asc"));
        assert_eq!(params.fields.as_deref(), Some(&["id".to_string(), "name".to_string()][..]));
        assert!(params.domain.is_none());
        assert!(params.lazy.is_none());
    }
}
