use serde::{Deserialize, Serialize};

/// Top-level task grouping
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Personal,
    Professional,
}

impl Category {
    /// The label shown in the tab bar
    pub fn label(self) -> &'static str {
        match self {
            Category::Personal => "personal",
            Category::Professional => "professional",
        }
    }

    /// The other category (Tab key cycles between the two)
    pub fn toggle(self) -> Category {
        match self {
            Category::Personal => Category::Professional,
            Category::Professional => Category::Personal,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
