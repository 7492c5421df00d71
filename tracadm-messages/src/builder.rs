//! Template rendering for the message registry.
//!
//! Templates use `{key}` placeholders. Rendering is a single left-to-right
//! scan: substituted values are emitted verbatim and never re-expanded, so
//! a project name containing braces cannot smuggle in a second placeholder.

pub struct MessageBuilder {
    template: &'static str,
    vars: Vec<(&'static str, String)>,
}

impl MessageBuilder {
    pub fn new(template: &'static str) -> Self {
        Self {
            template,
            vars: Vec::new(),
        }
    }

    pub fn var(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.vars.push((key, value.into()));
        self
    }

    pub fn build(self) -> String {
        let mut out = String::with_capacity(self.template.len() + 16);
        let mut rest = self.template;

        while let Some(open) = rest.find('{') {
            out.push_str(&rest[..open]);
            let after = &rest[open + 1..];
            let Some(close) = after.find('}') else {
                // Unterminated brace, copy the tail as-is.
                out.push('{');
                rest = after;
                continue;
            };

            let key = &after[..close];
            match self.vars.iter().rev().find(|(k, _)| *k == key) {
                Some((_, value)) => out.push_str(value),
                None => {
                    // Unknown placeholders survive so a missing `.var()`
                    // shows up in the output instead of vanishing.
                    out.push('{');
                    out.push_str(key);
                    out.push('}');
                }
            }
            rest = &after[close + 1..];
        }

        out.push_str(rest);
        out
    }
}
