use colored::Colorize;

/// Decides whether diagnostic tags written to the terminal are colored
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    enabled: bool,
}

impl Default for Palette {
    fn default() -> Self {
        Self::new(true)
    }
}

impl Palette {
    pub fn new(enabled: bool) -> Self {
        Self {enabled}
    }

    /// A palette that never emits escape codes
    pub fn plain() -> Self {
        Self::new(false)
    }

    pub fn warning(&self, tag: &str) -> String {
        if self.enabled {
            tag.yellow().bold().to_string()
        } else {
            tag.to_string()
        }
    }

    pub fn error(&self, tag: &str) -> String {
        if self.enabled {
            tag.red().bold().to_string()
        } else {
            tag.to_string()
        }
    }
}
