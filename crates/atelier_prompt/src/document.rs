//! Assembles prompt sections in a fixed order.

use serde_json::Value;

/// A prompt under construction.
///
/// Sections render in order: role framing, labeled context lines, free
/// instructions, the output-format directive and one worked example.
#[derive(Debug, Clone, Default)]
pub(crate) struct PromptDocument {
    role: String,
    context: Vec<(String, String)>,
    instructions: Vec<String>,
    output_fields: Vec<&'static str>,
    example: Option<Value>,
}

impl PromptDocument {
    pub(crate) fn new(role: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            ..Self::default()
        }
    }

    /// Adds a labeled context line. Absent or blank values are skipped.
    pub(crate) fn line(mut self, label: &str, value: Option<impl AsRef<str>>) -> Self {
        if let Some(value) = value {
            let value = value.as_ref().trim();
            if !value.is_empty() {
                self.context.push((label.to_string(), value.to_string()));
            }
        }
        self
    }

    pub(crate) fn instruction(mut self, text: impl Into<String>) -> Self {
        self.instructions.push(text.into());
        self
    }

    /// Requires a JSON object with `fields`, illustrated by `example`.
    pub(crate) fn json_output(mut self, fields: &[&'static str], example: Value) -> Self {
        self.output_fields = fields.to_vec();
        self.example = Some(example);
        self
    }

    pub(crate) fn render(&self) -> String {
        let mut out = String::new();
        out.push_str(&self.role);
        out.push('\n');

        if !self.context.is_empty() {
            out.push('\n');
            for (label, value) in &self.context {
                out.push_str(label);
                out.push_str(": ");
                out.push_str(value);
                out.push('\n');
            }
        }

        if !self.instructions.is_empty() {
            out.push('\n');
            for instruction in &self.instructions {
                out.push_str(instruction);
                out.push('\n');
            }
        }

        if !self.output_fields.is_empty() {
            out.push('\n');
            out.push_str(&format!(
                "输出必须是一个JSON对象，只包含以下字段: {}。不要输出JSON以外的任何文字。\n",
                self.output_fields.join(", ")
            ));
        }

        if let Some(example) = &self.example {
            out.push_str(&format!("示例: {}\n", example));
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_blank_and_absent_lines_are_skipped() {
        let rendered = PromptDocument::new("角色")
            .line("有", Some("值"))
            .line("空", Some("   "))
            .line("无", None::<&str>)
            .render();

        assert!(rendered.contains("有: 值"));
        assert!(!rendered.contains("空:"));
        assert!(!rendered.contains("无:"));
    }

    #[test]
    fn test_sections_render_in_order() {
        let rendered = PromptDocument::new("ROLE")
            .line("LABEL", Some("VALUE"))
            .instruction("INSTRUCTION")
            .json_output(&["name"], json!({"name": "EXAMPLE"}))
            .render();

        let role = rendered.find("ROLE").unwrap();
        let label = rendered.find("LABEL").unwrap();
        let instruction = rendered.find("INSTRUCTION").unwrap();
        let directive = rendered.find("JSON").unwrap();
        let example = rendered.find("EXAMPLE").unwrap();
        assert!(role < label && label < instruction && instruction < directive);
        assert!(directive < example);
    }
}
