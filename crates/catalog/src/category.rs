use serde::{Deserialize, Serialize};

/// Fixed grouping applied to every catalog entry.
///
/// Declaration order is the section order presenters display, so it is part
/// of the public contract and must not be reordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    TextInputs,
    Buttons,
    Layout,
    Navigation,
    Indicators,
}

impl Category {
    /// Every category in declared display order.
    pub const ALL: [Category; 5] = [
        Category::TextInputs,
        Category::Buttons,
        Category::Layout,
        Category::Navigation,
        Category::Indicators,
    ];

    /// Section heading shown for this category.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Category::TextInputs => "Text & Inputs",
            Category::Buttons => "Buttons & Controls",
            Category::Layout => "Layout & Containers",
            Category::Navigation => "Navigation",
            Category::Indicators => "Indicators",
        }
    }
}
