/// Fills `{key}` placeholders in a catalog template.
///
/// Substitutions apply in the order the values were added. A placeholder
/// with no matching value is left in place so a template mismatch shows up
/// in the output instead of vanishing silently.
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
        self.vars
            .into_iter()
            .fold(self.template.to_string(), |text, (key, value)| {
                text.replace(&format!("{{{key}}}"), &value)
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fills_placeholders() {
        let rendered = MessageBuilder::new("Starting '{name}'...")
            .var("name", "api")
            .build();
        assert_eq!(rendered, "Starting 'api'...");
    }

    #[test]
    fn test_replaces_every_occurrence_of_a_key() {
        let rendered = MessageBuilder::new("{name} -> {name}")
            .var("name", "db")
            .build();
        assert_eq!(rendered, "db -> db");
    }

    #[test]
    fn test_leaves_unknown_placeholders_untouched() {
        let rendered = MessageBuilder::new("Error: {error}").build();
        assert_eq!(rendered, "Error: {error}");
    }
}
