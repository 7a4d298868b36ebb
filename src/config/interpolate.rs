use crate::error::{AppError, AppResult};

use super::secrets::SecretSource;

/// Expands every `${NAME}` in `raw` through `source`. A `$` that is not
/// followed by `{` is kept as-is.
pub fn expand(raw: &str, source: &dyn SecretSource) -> AppResult<String> {
    let mut out = String::with_capacity(raw.len());
    let mut rest = raw;

    while let Some(start) = rest.find("${") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let end = after.find('}').ok_or_else(|| {
            AppError::Config(format!("unterminated `${{` in `{}`", describe(raw)))
        })?;

        let name = &after[..end];
        if !is_var_name(name) {
            return Err(AppError::Config(format!(
                "invalid variable reference `${{{name}}}`"
            )));
        }

        let value = source.lookup(name)?.ok_or_else(|| {
            AppError::Config(format!("environment variable {name} is not set"))
        })?;
        out.push_str(&value);
        rest = &after[end + 1..];
    }

    out.push_str(rest);
    Ok(out)
}

/// Whether `raw` pulls at least one value from the secret source.
pub fn has_reference(raw: &str) -> bool {
    raw.find("${")
        .is_some_and(|start| raw[start + 2..].contains('}'))
}

/// Names of the well-formed `${NAME}` references in `raw`, in order.
pub fn references(raw: &str) -> Vec<&str> {
    let mut names = Vec::new();
    let mut rest = raw;

    while let Some(start) = rest.find("${") {
        let after = &rest[start + 2..];
        let Some(end) = after.find('}') else {
            break;
        };
        if is_var_name(&after[..end]) {
            names.push(&after[..end]);
        }
        rest = &after[end + 1..];
    }

    names
}

fn is_var_name(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };

    (first.is_ascii_alphabetic() || first == '_')
        && chars.all(|ch| ch.is_ascii_alphanumeric() || ch == '_')
}

// Unexpanded text only; never echo anything that came out of the source.
fn describe(raw: &str) -> String {
    if raw.len() <= 40 {
        return raw.to_string();
    }

    let mut end = 40;
    while !raw.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &raw[..end])
}
