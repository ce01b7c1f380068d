use crate::store::ContextStore;

/// Single rolling context string. Storing replaces whatever was there.
#[derive(Debug, Default)]
pub struct LatestContext {
    text: String,
}

impl LatestContext {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ContextStore for LatestContext {
    fn render(&self) -> String {
        self.text.clone()
    }

    fn store(&mut self, context: &str) {
        self.text = context.to_string();
    }
}

/// Keeps every snippet the word was seen in.
#[derive(Debug, Default)]
pub struct SnippetContext {
    snippets: Vec<String>,
}

impl SnippetContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.snippets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snippets.is_empty()
    }
}

impl ContextStore for SnippetContext {
    fn render(&self) -> String {
        self.snippets.join("; ")
    }

    fn store(&mut self, context: &str) {
        self.snippets.push(context.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latest_replaces_on_store() {
        let mut ctx = LatestContext::new();
        assert_eq!(ctx.render(), "");

        ctx.store("first sentence");
        ctx.store("second sentence");
        assert_eq!(ctx.render(), "second sentence");
    }

    #[test]
    fn snippets_accumulate_and_join() {
        let mut ctx = SnippetContext::new();
        assert!(ctx.is_empty());

        ctx.store("the cat sat");
        ctx.store("a cat ran");
        assert_eq!(ctx.len(), 2);
        assert_eq!(ctx.render(), "the cat sat; a cat ran");
    }
}
