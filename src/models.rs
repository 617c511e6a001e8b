use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct MenuItem {
    pub id: u32,
    pub name: String,
    pub price: f64,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub user_id: Value,
    pub username: String,
    pub password: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub user_id: Value,
    pub timestamp: String,
    pub items: Vec<Value>,
}

/// String-normalized id comparison: the stored id may be a JSON number or
/// string, the query key always arrives as a path segment.
pub fn id_matches(stored: &Value, key: &str) -> bool {
    match stored {
        Value::String(s) => s == key,
        other => other.to_string() == key,
    }
}
