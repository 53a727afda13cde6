use std::sync::OnceLock;

use regex::Regex;

/// Expand `{{ env.VAR }}` placeholders in a raw TOML string
///
/// An optional fallback can be given as `{{ env.VAR | default("value") }}`;
/// it is used when the variable is unset. A placeholder without a fallback
/// whose variable is unset is an error. Placeholders on TOML comment lines
/// are left untouched.
pub fn expand_env(input: &str) -> Result<String, String> {
    static PLACEHOLDER: OnceLock<Regex> = OnceLock::new();
    let re = PLACEHOLDER.get_or_init(|| {
        Regex::new(r#"\{\{\s*env\.([A-Za-z0-9_]+)\s*(?:\|\s*default\("([^"]*)"\))?\s*\}\}"#)
            .expect("placeholder pattern is valid")
    });

    let mut output = String::with_capacity(input.len());
    let mut last_end = 0;

    for captures in re.captures_iter(input) {
        let whole = captures.get(0).expect("match always has a full capture");
        output.push_str(&input[last_end..whole.start()]);
        last_end = whole.end();

        if on_comment_line(input, whole.start()) {
            output.push_str(whole.as_str());
            continue;
        }

        let var_name = &captures[1];
        match std::env::var(var_name) {
            Ok(value) => output.push_str(&value),
            Err(_) => match captures.get(2) {
                Some(fallback) => output.push_str(fallback.as_str()),
                None => return Err(format!("environment variable not set: `{var_name}`")),
            },
        }
    }

    output.push_str(&input[last_end..]);
    Ok(output)
}

/// Whether the byte offset sits on a line whose first non-blank byte is `#`
fn on_comment_line(input: &str, offset: usize) -> bool {
    let line_start = input[..offset].rfind('\n').map_or(0, |i| i + 1);
    input[line_start..offset].trim_start().starts_with('#')
}
