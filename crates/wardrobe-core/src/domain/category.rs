//! Garment Category
//!
//! The fixed set of categories a new item can be filed under, and their
//! server-side identifiers.

use std::fmt;

/// Category selectable in the add-item wizard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Top,
    Bottom,
    Shoes,
    Accessories,
    Outerwear,
}

impl Category {
    /// Every category, in the order the wizard offers them
    pub const ALL: [Category; 5] = [
        Category::Top,
        Category::Bottom,
        Category::Shoes,
        Category::Accessories,
        Category::Outerwear,
    ];

    /// Server-side category identifier
    pub fn id(self) -> u32 {
        match self {
            Category::Top => 1,
            Category::Bottom => 2,
            Category::Shoes => 3,
            Category::Accessories => 4,
            Category::Outerwear => 5,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::Top => "Top",
            Category::Bottom => "Bottom",
            Category::Shoes => "Shoes",
            Category::Accessories => "Accessories",
            Category::Outerwear => "Outerwear",
        }
    }

    /// Parse a human-readable label. Unknown labels (including "") are `None`.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|category| category.label() == label)
    }

    pub fn from_id(id: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|category| category.id() == id)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
