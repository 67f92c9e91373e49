use std::sync::OnceLock;

use regex::{Captures, Regex};

/// Matches `{{ env.VAR }}` and `{{ env.VAR | default("fallback") }}`
fn placeholder() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"\{\{\s*([a-zA-Z0-9_.]+)\s*(?:\|\s*default\("([^"]*)"\))?\s*\}\}"#).expect("must be valid regex")
    })
}

/// Expand `{{ env.VAR }}` placeholders in raw TOML text
///
/// `{{ env.VAR | default("x") }}` falls back to `x` when `VAR` is unset.
/// Comment lines are copied without expansion.
pub fn expand_env(input: &str) -> anyhow::Result<String> {
    let mut lines = Vec::new();

    for line in input.lines() {
        if line.trim_start().starts_with('#') {
            lines.push(line.to_owned());
        } else {
            lines.push(expand_line(line)?);
        }
    }

    let mut output = lines.join("\n");
    if input.ends_with('\n') {
        output.push('\n');
    }

    Ok(output)
}

fn expand_line(line: &str) -> anyhow::Result<String> {
    let mut expanded = String::with_capacity(line.len());
    let mut last_end = 0;

    for captures in placeholder().captures_iter(line) {
        let Some(whole) = captures.get(0) else {
            continue;
        };

        expanded.push_str(&line[last_end..whole.start()]);
        expanded.push_str(&resolve(&captures)?);
        last_end = whole.end();
    }

    expanded.push_str(&line[last_end..]);
    Ok(expanded)
}

fn resolve(captures: &Captures<'_>) -> anyhow::Result<String> {
    let key = captures.get(1).map_or("", |m| m.as_str());
    let default = captures.get(2).map(|m| m.as_str());

    let Some(var_name) = key.strip_prefix("env.").filter(|name| !name.is_empty() && !name.contains('.')) else {
        anyhow::bail!("only variables scoped with 'env.' are supported: `{key}`");
    };

    match (std::env::var(var_name), default) {
        (Ok(value), _) => Ok(value),
        (Err(_), Some(default)) => Ok(default.to_owned()),
        (Err(_), None) => anyhow::bail!("environment variable not found: `{var_name}`"),
    }
}
