//! Common utilities for output formatters

use serde::Serialize;

/// Print a value as pretty-printed JSON
pub fn print_json<T: Serialize>(value: &T) {
    println!("{}", serde_json::to_string_pretty(value).unwrap());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_print_json_value() {
        let value = serde_json::json!({"id": "dev", "deleted": false});
        // Should not panic
        print_json(&value);
    }

    #[test]
    fn test_print_json_array() {
        let value = serde_json::json!([1, 2, 3]);
        // Should not panic
        print_json(&value);
    }
}
