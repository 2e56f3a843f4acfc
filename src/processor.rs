//! Variable substitution engine for ${name} placeholders

use std::collections::HashMap;
use std::sync::Arc;

use crate::types::{TemplateError, TemplateResult};

/// Literal token that opens a placeholder
pub const VARIABLE_START: &str = "${";

/// Literal token that closes a placeholder
pub const VARIABLE_END: &str = "}";

/// Substitution engine over a fixed name→value map.
///
/// The map is shared, never copied or mutated; cloning the processor clones
/// the handle, not the map. Each call scans its input once, left to right,
/// and either resolves every placeholder or fails as a whole.
#[derive(Debug, Clone)]
pub struct TemplateProcessor {
    values: Arc<HashMap<String, String>>,
}

impl TemplateProcessor {
    /// Create a processor over a shared substitution map
    pub fn new(values: Arc<HashMap<String, String>>) -> Self {
        Self { values }
    }

    /// Create a processor from a JSON object of variables.
    ///
    /// Rejects `null` and any non-object value with
    /// [`TemplateError::InvalidArgument`]. Scalar values are rendered to
    /// strings: numbers and booleans via their display form, `null` as the
    /// empty string, arrays and objects as their JSON representation.
    pub fn from_json(variables: &serde_json::Value) -> TemplateResult<Self> {
        let vars = match variables {
            serde_json::Value::Object(map) => map,
            _ => {
                return Err(TemplateError::InvalidArgument(
                    "substitution variables must be a JSON object".to_string(),
                ))
            }
        };

        let mut values = HashMap::with_capacity(vars.len());
        for (key, value) in vars {
            let rendered = match value {
                serde_json::Value::String(s) => s.clone(),
                serde_json::Value::Number(n) => n.to_string(),
                serde_json::Value::Bool(b) => b.to_string(),
                serde_json::Value::Null => String::new(),
                // For arrays and objects, use JSON representation
                _ => value.to_string(),
            };
            values.insert(key.clone(), rendered);
        }

        Ok(Self::new(Arc::new(values)))
    }

    /// Replace every ${name} placeholder in `template` with its mapped value.
    ///
    /// A start delimiter immediately followed by another start delimiter is a
    /// one-level escape: the outer `${` is emitted literally and scanning
    /// resumes at the inner one, so `${${country}}` renders as `${Spain}`.
    /// Mapped values are appended verbatim and never rescanned. Delimiter
    /// characters that do not form a complete placeholder pass through
    /// unchanged.
    ///
    /// The call is all-or-nothing: an unterminated placeholder fails with
    /// [`TemplateError::InvalidArgument`] and a name missing from the map
    /// fails with [`TemplateError::UnknownVariable`]; no partial output is
    /// returned.
    pub fn process_template(&self, template: &str) -> TemplateResult<String> {
        let mut rest = template;
        let mut out = String::with_capacity(template.len());

        while !rest.is_empty() {
            match rest.find(VARIABLE_START) {
                None => {
                    // no more placeholders, the tail is literal
                    out.push_str(rest);
                    rest = "";
                }
                Some(mut vstart) => {
                    // ${${ escapes: emit the outer start delimiter literally
                    // and rescan from the inner one
                    let after_start = vstart + VARIABLE_START.len();
                    if rest[after_start..].starts_with(VARIABLE_START) {
                        out.push_str(&rest[..after_start]);
                        rest = &rest[after_start..];
                        vstart = 0;
                    }

                    // copy everything up to the placeholder
                    out.push_str(&rest[..vstart]);
                    rest = &rest[vstart + VARIABLE_START.len()..];

                    let vend = rest.find(VARIABLE_END).ok_or_else(|| {
                        TemplateError::InvalidArgument(
                            "template has an unterminated placeholder".to_string(),
                        )
                    })?;

                    let name = &rest[..vend];
                    let value = self
                        .values
                        .get(name)
                        .ok_or_else(|| TemplateError::UnknownVariable(name.to_string()))?;
                    out.push_str(value);

                    rest = &rest[vend + VARIABLE_END.len()..];
                }
            }
        }

        Ok(out)
    }

    /// Substitute placeholders in every string of a JSON value.
    ///
    /// Object keys are substituted as well; numbers, booleans and null are
    /// passed through as-is. Any substitution error fails the whole call.
    pub fn process_value(&self, value: &serde_json::Value) -> TemplateResult<serde_json::Value> {
        match value {
            serde_json::Value::String(s) => {
                Ok(serde_json::Value::String(self.process_template(s)?))
            }
            serde_json::Value::Array(arr) => {
                let rendered: Result<Vec<_>, _> =
                    arr.iter().map(|v| self.process_value(v)).collect();
                Ok(serde_json::Value::Array(rendered?))
            }
            serde_json::Value::Object(obj) => {
                let mut rendered = serde_json::Map::new();
                for (key, val) in obj {
                    let rendered_key = self.process_template(key)?;
                    let rendered_val = self.process_value(val)?;
                    rendered.insert(rendered_key, rendered_val);
                }
                Ok(serde_json::Value::Object(rendered))
            }
            // Numbers, booleans, null are passed through as-is
            _ => Ok(value.clone()),
        }
    }
}
