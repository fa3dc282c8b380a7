use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::prompt::schema::extract_json_block;

/// Sentinel for "delivery time not mentioned".
pub const UNKNOWN_DELIVERY_DAYS: i64 = -1;

/// Fields extracted from one customer review.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewRecord {
    pub gift: bool,
    pub delivery_days: i64,
    pub price_value: Vec<String>,
}

impl Default for ReviewRecord {
    fn default() -> Self {
        Self {
            gift: false,
            delivery_days: UNKNOWN_DELIVERY_DAYS,
            price_value: Vec::new(),
        }
    }
}

impl ReviewRecord {
    /// Builds a record from model-produced fields, coercing the loose shapes models emit
    /// ("True", "3", "['a', 'b']"). Anything unusable falls back to the default.
    pub fn from_fields(fields: &Map<String, Value>) -> Self {
        Self {
            gift: fields.get("gift").map(coerce_bool).unwrap_or(false),
            delivery_days: fields
                .get("delivery_days")
                .and_then(coerce_days)
                .unwrap_or(UNKNOWN_DELIVERY_DAYS),
            price_value: fields
                .get("price_value")
                .map(coerce_list)
                .unwrap_or_default(),
        }
    }

    /// Best-effort decode of a free-form reply. `None` when the reply is not a JSON object.
    pub fn from_reply(reply: &str) -> Option<Self> {
        match serde_json::from_str::<Value>(extract_json_block(reply)) {
            Ok(Value::Object(fields)) => Some(Self::from_fields(&fields)),
            _ => None,
        }
    }
}

fn coerce_bool(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::String(s) => matches!(s.trim().to_lowercase().as_str(), "true" | "yes"),
        _ => false,
    }
}

fn coerce_days(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f.round() as i64)),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }
}

fn coerce_list(value: &Value) -> Vec<String> {
    match value {
        Value::Array(items) => items.iter().map(value_to_text).collect(),
        Value::String(s) => parse_list_literal(s),
        Value::Null => Vec::new(),
        other => vec![other.to_string()],
    }
}

fn value_to_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Accepts a JSON array, a bracketed list with quoted items, or a single sentence.
fn parse_list_literal(raw: &str) -> Vec<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }
    if let Ok(Value::Array(items)) = serde_json::from_str::<Value>(trimmed) {
        return items.iter().map(value_to_text).collect();
    }
    match trimmed.strip_prefix('[').and_then(|s| s.strip_suffix(']')) {
        Some(inner) => split_quoted_items(inner),
        None => vec![trimmed.to_string()],
    }
}

fn split_quoted_items(inner: &str) -> Vec<String> {
    let mut items = Vec::new();
    let mut current = String::new();
    let mut quote: Option<char> = None;

    for c in inner.chars() {
        match (quote, c) {
            (None, '\'' | '"') => quote = Some(c),
            (Some(q), c) if c == q => quote = None,
            (None, ',') => {
                push_item(&mut items, &mut current);
            }
            _ => current.push(c),
        }
    }
    push_item(&mut items, &mut current);
    items
}

fn push_item(items: &mut Vec<String>, current: &mut String) {
    let item = current.trim();
    if !item.is_empty() {
        items.push(item.to_string());
    }
    current.clear();
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fields(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_absent_delivery_days_is_minus_one() {
        let record = ReviewRecord::from_fields(&fields(json!({"gift": true})));
        assert_eq!(record.delivery_days, -1);
    }

    #[test]
    fn test_unparseable_delivery_days_is_minus_one() {
        let record = ReviewRecord::from_fields(&fields(json!({"delivery_days": "a few"})));
        assert_eq!(record.delivery_days, UNKNOWN_DELIVERY_DAYS);
    }

    #[test]
    fn test_string_shaped_fields_are_coerced() {
        let record = ReviewRecord::from_fields(&fields(json!({
            "gift": "True",
            "delivery_days": "2",
            "price_value": "['It cost a bit more', 'but worth it, honestly']"
        })));
        assert!(record.gift);
        assert_eq!(record.delivery_days, 2);
        assert_eq!(
            record.price_value,
            vec!["It cost a bit more", "but worth it, honestly"]
        );
    }

    #[test]
    fn test_native_json_fields() {
        let record = ReviewRecord::from_fields(&fields(json!({
            "gift": false,
            "delivery_days": 5,
            "price_value": ["Great value"]
        })));
        assert_eq!(
            record,
            ReviewRecord {
                gift: false,
                delivery_days: 5,
                price_value: vec!["Great value".to_string()],
            }
        );
    }

    #[test]
    fn test_from_reply_reads_fenced_json() {
        let reply = "```json\n{\"gift\": true, \"delivery_days\": -1, \"price_value\": []}\n```";
        let record = ReviewRecord::from_reply(reply).unwrap();
        assert!(record.gift);
        assert_eq!(record.delivery_days, -1);
        assert!(record.price_value.is_empty());
    }

    #[test]
    fn test_from_reply_prose_is_none() {
        assert!(ReviewRecord::from_reply("It was a gift.").is_none());
    }

    #[test]
    fn test_default_record() {
        let record = ReviewRecord::default();
        assert!(!record.gift);
        assert_eq!(record.delivery_days, -1);
    }
}
