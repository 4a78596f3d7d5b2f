//! Typed records returned by the Unosend API.
//!
//! Every record is built through a total `from_json` constructor: missing,
//! `null` or mistyped fields fall back to an empty string, empty list, zero or
//! `false` instead of failing. The same path backs their `Deserialize` impls.

use serde::{Deserialize, Serialize};
use serde_json::Value;

fn str_field(raw: &Value, key: &str) -> String {
    opt_str_field(raw, key).unwrap_or_default()
}

fn opt_str_field(raw: &Value, key: &str) -> Option<String> {
    raw.get(key).and_then(Value::as_str).map(str::to_string)
}

fn u64_field(raw: &Value, key: &str) -> u64 {
    raw.get(key).and_then(Value::as_u64).unwrap_or_default()
}

fn bool_field(raw: &Value, key: &str) -> bool {
    raw.get(key).and_then(Value::as_bool).unwrap_or_default()
}

/// Map a list payload through `parse`. Anything but an array is empty.
pub(crate) fn list_from_json<T>(raw: &Value, parse: fn(&Value) -> T) -> Vec<T> {
    raw.as_array()
        .map(|items| items.iter().map(parse).collect())
        .unwrap_or_default()
}

/// A sent (or queued) email.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "Value")]
pub struct Email {
    pub id: String,
    pub from: String,
    pub to: Vec<String>,
    pub subject: String,
    /// Delivery status such as `queued`, `sent` or `delivered`.
    pub status: String,
    pub created_at: String,
}

impl Email {
    pub fn from_json(raw: &Value) -> Self {
        let to = match raw.get("to") {
            Some(Value::Array(items)) => items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect(),
            Some(Value::String(addr)) => vec![addr.clone()],
            _ => Vec::new(),
        };

        Self {
            id: str_field(raw, "id"),
            from: str_field(raw, "from"),
            to,
            subject: str_field(raw, "subject"),
            status: str_field(raw, "status"),
            created_at: str_field(raw, "createdAt"),
        }
    }
}

/// A DNS entry that must be published to verify a sending domain.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Value")]
pub struct DnsRecord {
    /// Record type, e.g. `TXT`, `MX` or `CNAME`.
    #[serde(rename = "type")]
    pub record_type: String,
    pub name: String,
    pub value: String,
    pub ttl: u64,
}

impl DnsRecord {
    pub fn from_json(raw: &Value) -> Self {
        Self {
            record_type: str_field(raw, "type"),
            name: str_field(raw, "name"),
            value: str_field(raw, "value"),
            ttl: u64_field(raw, "ttl"),
        }
    }
}

/// A sending domain and the DNS records needed to verify it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "Value")]
pub struct Domain {
    pub id: String,
    pub name: String,
    pub status: String,
    pub records: Vec<DnsRecord>,
    pub created_at: String,
}

impl Domain {
    pub fn from_json(raw: &Value) -> Self {
        Self {
            id: str_field(raw, "id"),
            name: str_field(raw, "name"),
            status: str_field(raw, "status"),
            records: raw
                .get("records")
                .map(|r| list_from_json(r, DnsRecord::from_json))
                .unwrap_or_default(),
            created_at: str_field(raw, "createdAt"),
        }
    }
}

/// A named list of contacts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "Value")]
pub struct Audience {
    pub id: String,
    pub name: String,
    pub contact_count: u64,
    pub created_at: String,
}

impl Audience {
    pub fn from_json(raw: &Value) -> Self {
        Self {
            id: str_field(raw, "id"),
            name: str_field(raw, "name"),
            contact_count: u64_field(raw, "contactCount"),
            created_at: str_field(raw, "createdAt"),
        }
    }
}

/// A member of an audience.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "Value")]
pub struct Contact {
    pub id: String,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub unsubscribed: bool,
    pub created_at: String,
}

impl Contact {
    pub fn from_json(raw: &Value) -> Self {
        Self {
            id: str_field(raw, "id"),
            email: str_field(raw, "email"),
            first_name: opt_str_field(raw, "firstName"),
            last_name: opt_str_field(raw, "lastName"),
            unsubscribed: bool_field(raw, "unsubscribed"),
            created_at: str_field(raw, "createdAt"),
        }
    }
}

macro_rules! from_value {
    ($($ty:ty),*) => {
        $(
            impl From<Value> for $ty {
                fn from(raw: Value) -> Self {
                    Self::from_json(&raw)
                }
            }
        )*
    };
}

from_value!(Email, DnsRecord, Domain, Audience, Contact);

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn domain_defaults_missing_fields() {
        let domain = Domain::from_json(&json!({"id": "d1", "name": "x.com"}));
        assert_eq!(domain.id, "d1");
        assert_eq!(domain.name, "x.com");
        assert!(domain.records.is_empty());
        assert_eq!(domain.status, "");
        assert_eq!(domain.created_at, "");
    }

    #[test]
    fn domain_parses_records() {
        let domain = Domain::from_json(&json!({
            "id": "d1",
            "name": "example.com",
            "status": "pending",
            "createdAt": "2024-01-01T00:00:00Z",
            "records": [
                {"type": "TXT", "name": "_unosend", "value": "v=spf1", "ttl": 3600},
                {"type": "MX", "name": "example.com"}
            ]
        }));

        assert_eq!(domain.records.len(), 2);
        assert_eq!(domain.records[0].record_type, "TXT");
        assert_eq!(domain.records[0].ttl, 3600);
        assert_eq!(domain.records[1].value, "");
        assert_eq!(domain.records[1].ttl, 0);
    }

    #[test]
    fn every_model_tolerates_empty_object() {
        let empty = json!({});
        assert_eq!(Email::from_json(&empty), Email::default());
        assert_eq!(Domain::from_json(&empty), Domain::default());
        assert_eq!(DnsRecord::from_json(&empty), DnsRecord::default());
        assert_eq!(Audience::from_json(&empty), Audience::default());
        assert_eq!(Contact::from_json(&empty), Contact::default());
    }

    #[test]
    fn non_object_input_yields_defaults() {
        assert_eq!(Email::from_json(&Value::Null), Email::default());
        assert_eq!(Contact::from_json(&json!("nope")), Contact::default());
    }

    #[test]
    fn mistyped_fields_fall_back() {
        let audience = Audience::from_json(&json!({
            "id": 42,
            "name": "Newsletter",
            "contactCount": "many"
        }));
        assert_eq!(audience.id, "");
        assert_eq!(audience.name, "Newsletter");
        assert_eq!(audience.contact_count, 0);

        let record = DnsRecord::from_json(&json!({"ttl": -5}));
        assert_eq!(record.ttl, 0);
    }

    #[test]
    fn email_to_accepts_bare_string() {
        let email = Email::from_json(&json!({"to": "a@example.com"}));
        assert_eq!(email.to, vec!["a@example.com"]);

        let email = Email::from_json(&json!({"to": ["a@example.com", 7, "b@example.com"]}));
        assert_eq!(email.to, vec!["a@example.com", "b@example.com"]);
    }

    #[test]
    fn contact_optional_names() {
        let contact = Contact::from_json(&json!({
            "id": "c1",
            "email": "jane@example.com",
            "firstName": "Jane",
            "lastName": null,
            "unsubscribed": true
        }));
        assert_eq!(contact.first_name.as_deref(), Some("Jane"));
        assert_eq!(contact.last_name, None);
        assert!(contact.unsubscribed);
    }

    #[test]
    fn deserialize_goes_through_from_json() {
        let contact: Contact = serde_json::from_str(r#"{"id":"c1","unsubscribed":"yes"}"#).unwrap();
        assert_eq!(contact.id, "c1");
        assert!(!contact.unsubscribed);
    }

    #[test]
    fn serializes_with_wire_names() {
        let record = DnsRecord {
            record_type: "TXT".into(),
            name: "n".into(),
            value: "v".into(),
            ttl: 60,
        };
        assert_eq!(
            serde_json::to_value(&record).unwrap(),
            json!({"type": "TXT", "name": "n", "value": "v", "ttl": 60})
        );

        let audience = Audience {
            contact_count: 3,
            ..Audience::default()
        };
        let value = serde_json::to_value(&audience).unwrap();
        assert_eq!(value["contactCount"], 3);
    }

    #[test]
    fn list_from_json_ignores_non_arrays() {
        assert!(list_from_json(&json!({"data": []}), Email::from_json).is_empty());
        assert_eq!(
            list_from_json(&json!([{"id": "a"}, {"id": "b"}]), Email::from_json).len(),
            2
        );
    }
}
