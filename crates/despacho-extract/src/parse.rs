use std::sync::OnceLock;

use regex::Regex;
use serde_json::{Value, json};

/// Pull an order record out of the model's free-text completion
///
/// Finds the first `{...}` span (greedy, dot-matches-newline, not
/// nested-aware) and parses it as JSON. When no span exists or parsing
/// fails, returns a `tipo:"error"` record carrying the raw model text
/// so callers keep it for diagnostics.
pub fn parse_order_record(completion: &str) -> Value {
    static JSON_SPAN: OnceLock<Regex> = OnceLock::new();
    let re = JSON_SPAN.get_or_init(|| Regex::new(r"(?s)\{.*\}").expect("span pattern is valid"));

    let Some(span) = re.find(completion) else {
        return error_record("no JSON object found in model output", completion);
    };

    match serde_json::from_str::<Value>(span.as_str()) {
        Ok(record) => record,
        Err(e) => error_record(&format!("model output is not valid JSON: {e}"), completion),
    }
}

fn error_record(error: &str, raw: &str) -> Value {
    json!({
        "tipo": crate::ERROR_KIND,
        "error": error,
        "raw": raw,
    })
}
