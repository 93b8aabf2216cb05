use serde::{Deserialize, Serialize};

/// Project category with aggregate platform figures.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Number of projects in this category.
    pub projects: u32,
    /// Total funding collected across the category.
    pub funding: f64,
    /// Share of projects reaching their goal, 0-100.
    pub success_rate: u32,
    pub featured: bool,
    pub active: bool,
    pub display_order: u32,
    pub subcategories: Vec<Subcategory>,
}

/// Subcategory nested under a [`Category`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Subcategory {
    pub id: String,
    pub parent_id: String,
    pub name: String,
    pub description: String,
    pub projects: u32,
    pub active: bool,
    pub display_order: u32,
}

/// Fields required to create a category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategoryForCreate {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub featured: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_order: Option<u32>,
}

/// Partial category update; only provided fields change.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CategoryForUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub featured: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_order: Option<u32>,
}

impl CategoryForUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: String) -> Self {
        self.name = Some(name);
        self
    }

    pub fn featured(mut self, featured: bool) -> Self {
        self.featured = Some(featured);
        self
    }
}

/// Fields required to create a subcategory under an existing category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SubcategoryForCreate {
    pub parent_id: String,
    pub name: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_order: Option<u32>,
}
