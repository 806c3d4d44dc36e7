// The format module organizes JSON layout helpers used by the
// pretty-print middleware and response logging.

use anyhow::Result;
use serde::Serialize;

// Convert any `Serialize` type into a two-space-indented JSON string.
pub fn to_two_space_indented_json<T: Serialize>(value: &T) -> Result<String> {
    let json_value: serde_json::Value = serde_json::to_value(value)?;
    let pretty_json: String = serde_json::to_string_pretty(&json_value)?;
    Ok(pretty_json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    #[test]
    fn reindentation_preserves_logical_content() {
        let original = json!({"b": [1, 2, 3], "a": {"nested": true}});
        let pretty: String = to_two_space_indented_json(&original).unwrap();

        assert!(pretty.contains('\n'));
        let reparsed: Value = serde_json::from_str(&pretty).unwrap();
        assert_eq!(reparsed, original);
    }
}
