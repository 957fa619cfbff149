use crate::error::GenerateError;
use regex::Regex;

/// Marker line in the stub template replaced by the type declarations.
pub const TYPES_ANCHOR: &str = "// @generated-types";

/// Prelude shipped with the crate.
pub const DEFAULT_TEMPLATE: &str = include_str!("../../templates/stub_prelude.rs.tmpl");

/// Placeholder for the path under which generated code reaches this crate.
pub const CRATE_PATH_PLACEHOLDER: &str = "$crate_path";

#[derive(Debug, Clone)]
pub(crate) struct StubTemplate {
    text: String,
}

impl StubTemplate {
    pub(crate) fn new(template: &str, crate_path: &str) -> Self {
        Self {
            text: template.replace(CRATE_PATH_PLACEHOLDER, crate_path),
        }
    }

    /// Replaces the anchor line with `region`, indenting every line to the anchor's depth.
    pub(crate) fn splice(&self, region: &str) -> Result<String, GenerateError> {
        let anchor = Regex::new(&format!(
            r"(?m)^([ \t]*){}[ \t]*\r?$",
            regex::escape(TYPES_ANCHOR)
        ))?;
        let missing = || GenerateError::TemplateAnchorMissing(TYPES_ANCHOR.to_string());
        let captures = anchor.captures(&self.text).ok_or_else(missing)?;
        let (Some(whole), Some(indent)) = (captures.get(0), captures.get(1)) else {
            return Err(missing());
        };

        let indented = region
            .trim_end()
            .lines()
            .map(|line| {
                if line.is_empty() {
                    String::new()
                } else {
                    format!("{}{}", indent.as_str(), line)
                }
            })
            .collect::<Vec<_>>()
            .join("\n");

        let mut out = String::with_capacity(self.text.len() + indented.len());
        out.push_str(&self.text[..whole.start()]);
        out.push_str(&indented);
        out.push_str(&self.text[whole.end()..]);
        Ok(out)
    }
}
