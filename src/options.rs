/// What the walk does when a directory or entry cannot be read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ErrorPolicy {
    /// Treat the unreadable directory as having no children.
    #[default]
    Skip,
    /// Abort the walk with the first error.
    Fail,
}

#[derive(Debug, Clone)]
pub struct ListOptions {
    pub prefix: String,
    pub follow_links: bool,
    pub on_error: ErrorPolicy,
}

impl Default for ListOptions {
    fn default() -> Self {
        Self {
            prefix: String::new(),
            follow_links: true,
            on_error: ErrorPolicy::Skip,
        }
    }
}

impl ListOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn follow_links(mut self, yes: bool) -> Self {
        self.follow_links = yes;
        self
    }

    pub fn on_error(mut self, policy: ErrorPolicy) -> Self {
        self.on_error = policy;
        self
    }
}
