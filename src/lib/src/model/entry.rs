use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::constants::TIMESTAMP_FIELD;
use crate::error::FormdropError;
use crate::util;

/// A submitted JSON object, any keys and values are accepted
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(transparent)]
pub struct Entry(Map<String, Value>);

impl Entry {
    pub fn new() -> Entry {
        Entry(Map::new())
    }

    /// Parse a JSON request body. An empty body is an empty entry, anything
    /// that is not a JSON object is rejected.
    pub fn from_json_slice(body: &[u8]) -> Result<Entry, FormdropError> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Entry::new());
        }

        match serde_json::from_slice::<Value>(body)? {
            Value::Object(fields) => Ok(Entry(fields)),
            other => Err(FormdropError::invalid_entry(format!(
                "Entry must be a JSON object, got {}",
                json_type_name(&other)
            ))),
        }
    }

    /// Decode an `application/x-www-form-urlencoded` body into string fields.
    /// A repeated key keeps its last value.
    pub fn from_form_urlencoded(body: &[u8]) -> Entry {
        let fields = url::form_urlencoded::parse(body)
            .map(|(key, value)| (key.into_owned(), Value::String(value.into_owned())))
            .collect::<Map<String, Value>>();
        Entry(fields)
    }

    /// Set the `timestamp` field, replacing whatever the client sent
    pub fn stamp(&mut self, timestamp: &DateTime<Utc>) {
        self.0.insert(
            TIMESTAMP_FIELD.to_string(),
            Value::String(util::time::iso_timestamp(timestamp)),
        );
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Two space indented JSON, the format entries are written to disk in
    pub fn to_pretty_json(&self) -> Result<String, FormdropError> {
        Ok(serde_json::to_string_pretty(&self.0)?)
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use serde_json::json;

    use crate::error::FormdropError;
    use crate::model::Entry;

    #[test]
    fn test_entry_from_json_object() -> Result<(), FormdropError> {
        let entry = Entry::from_json_slice(br#"{"name": "Ann", "age": 30}"#)?;
        assert_eq!(entry.len(), 2);
        assert_eq!(entry.get("name"), Some(&json!("Ann")));
        assert_eq!(entry.get("age"), Some(&json!(30)));
        Ok(())
    }

    #[test]
    fn test_entry_from_empty_body() -> Result<(), FormdropError> {
        let entry = Entry::from_json_slice(b"  \n")?;
        assert!(entry.is_empty());
        Ok(())
    }

    #[test]
    fn test_entry_rejects_non_objects() {
        for body in [&b"[1, 2]"[..], &b"\"text\""[..], &b"42"[..], &b"null"[..]] {
            let result = Entry::from_json_slice(body);
            assert!(matches!(result, Err(FormdropError::InvalidEntry(_))));
        }
    }

    #[test]
    fn test_entry_rejects_malformed_json() {
        let result = Entry::from_json_slice(b"{\"name\": ");
        assert!(matches!(result, Err(FormdropError::JSON(_))));
    }

    #[test]
    fn test_entry_from_form_urlencoded() {
        let entry = Entry::from_form_urlencoded(b"name=Ann+Lee&age=30&city=Gyumri&age=31");
        assert_eq!(entry.get("name"), Some(&json!("Ann Lee")));
        assert_eq!(entry.get("age"), Some(&json!("31")));
        assert_eq!(entry.get("city"), Some(&json!("Gyumri")));
    }

    #[test]
    fn test_entry_stamp_overwrites_client_timestamp() -> Result<(), FormdropError> {
        let mut entry = Entry::from_json_slice(br#"{"timestamp": "yesterday"}"#)?;
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
        entry.stamp(&now);
        assert_eq!(entry.get("timestamp"), Some(&json!("2024-01-01T12:00:00.000Z")));
        assert_eq!(entry.len(), 1);
        Ok(())
    }

    #[test]
    fn test_entry_pretty_json_uses_two_spaces() -> Result<(), FormdropError> {
        let entry = Entry::from_form_urlencoded(b"name=Ann");
        assert_eq!(entry.to_pretty_json()?, "{\n  \"name\": \"Ann\"\n}");
        Ok(())
    }
}
