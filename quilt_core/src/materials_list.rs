//! # Materials List
//!
//! A quilter's shopping list: an ordered list of items with a quantity and
//! price. Lists are persisted through [`crate::storage`] as JSON.
//!
//! ## Structure
//!
//! ```text
//! MaterialsList
//! ├── version: schema version (for migration compatibility)
//! ├── modified: last change timestamp
//! └── items: Vec<MaterialItem> (display order)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use quilt_core::materials_list::{Category, MaterialsList};
//!
//! let mut list = MaterialsList::new();
//! let id = list.add("Cotton Fabric - Blue Floral", "2.5 yards", 12.99, Category::Fabric);
//! assert_eq!(list.len(), 1);
//! assert_eq!(list.total_cost(), 12.99);
//!
//! list.remove(&id).unwrap();
//! assert!(list.is_empty());
//! ```

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::calculations::yardage::CalculationResult;
use crate::errors::{CalcError, CalcResult};

/// Current schema version for stored materials lists
pub const SCHEMA_VERSION: &str = "0.1.0";

/// Item category. Stored as its name; unknown names are kept as `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    Fabric,
    Batting,
    Thread,
    Other(String),
}

impl Category {
    pub fn name(&self) -> &str {
        match self {
            Category::Fabric => "Fabric",
            Category::Batting => "Batting",
            Category::Thread => "Thread",
            Category::Other(name) => name,
        }
    }
}

impl From<String> for Category {
    fn from(name: String) -> Self {
        match name.to_lowercase().as_str() {
            "fabric" => Category::Fabric,
            "batting" => Category::Batting,
            "thread" => Category::Thread,
            _ => Category::Other(name),
        }
    }
}

impl From<&str> for Category {
    fn from(name: &str) -> Self {
        Category::from(name.to_string())
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        category.name().to_string()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One line on the shopping list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialItem {
    pub id: String,
    pub name: String,
    /// Free text, e.g. "2.5 yards", "1 piece"
    pub quantity: String,
    /// Price in dollars
    pub price: f64,
    pub category: Category,
}

/// Ordered shopping list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialsList {
    /// Schema version (for migration compatibility)
    pub version: String,
    /// When the list was last changed
    pub modified: DateTime<Utc>,
    pub items: Vec<MaterialItem>,
}

impl MaterialsList {
    /// Create an empty list.
    pub fn new() -> Self {
        MaterialsList {
            version: SCHEMA_VERSION.to_string(),
            modified: Utc::now(),
            items: Vec::new(),
        }
    }

    /// Sample list shown before anything has been saved.
    pub fn demo() -> Self {
        let mut list = MaterialsList::new();
        list.items = vec![
            MaterialItem {
                id: "1".to_string(),
                name: "Cotton Fabric - Blue Floral".to_string(),
                quantity: "2.5 yards".to_string(),
                price: 12.99,
                category: Category::Fabric,
            },
            MaterialItem {
                id: "2".to_string(),
                name: "Batting - Queen Size".to_string(),
                quantity: "1 piece".to_string(),
                price: 24.99,
                category: Category::Batting,
            },
            MaterialItem {
                id: "3".to_string(),
                name: "Thread - Quilting Cotton".to_string(),
                quantity: "3 spools".to_string(),
                price: 8.99,
                category: Category::Thread,
            },
        ];
        list
    }

    /// Append an item and return its new id.
    pub fn add(
        &mut self,
        name: impl Into<String>,
        quantity: impl Into<String>,
        price: f64,
        category: impl Into<Category>,
    ) -> String {
        let id = Uuid::new_v4().to_string();
        self.items.push(MaterialItem {
            id: id.clone(),
            name: name.into(),
            quantity: quantity.into(),
            price,
            category: category.into(),
        });
        self.touch();
        id
    }

    /// Append the batting, backing and binding from a calculation, unpriced.
    ///
    /// Returns the ids of the added items.
    pub fn add_from_result(&mut self, result: &CalculationResult) -> Vec<String> {
        let batting = &result.recommended_batting;
        let batting_quantity = if batting.is_custom() {
            format!("{}\" x {}\" cut", batting.width_in, batting.height_in)
        } else {
            "1 piece".to_string()
        };
        vec![
            self.add(
                format!("Batting - {} Size", batting.name),
                batting_quantity,
                0.0,
                Category::Batting,
            ),
            self.add(
                "Backing Fabric",
                format!("{:.2} yards ({})", result.backing_yards, result.backing_layout_description),
                0.0,
                Category::Fabric,
            ),
            self.add(
                "Binding Fabric",
                format!("{:.2} yards ({} strips)", result.binding_yards, result.binding_strip_count),
                0.0,
                Category::Fabric,
            ),
        ]
    }

    /// Remove an item by id.
    ///
    /// # Errors
    ///
    /// * `CalcError::MaterialNotFound` - no item has this id
    pub fn remove(&mut self, id: &str) -> CalcResult<MaterialItem> {
        let index = self
            .items
            .iter()
            .position(|item| item.id == id)
            .ok_or_else(|| CalcError::material_not_found(id))?;
        let item = self.items.remove(index);
        self.touch();
        Ok(item)
    }

    pub fn get(&self, id: &str) -> Option<&MaterialItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn clear(&mut self) {
        self.items.clear();
        self.touch();
    }

    /// Sum of all item prices
    pub fn total_cost(&self) -> f64 {
        self.items.iter().map(|item| item.price).sum()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Update the modified timestamp.
    pub fn touch(&mut self) {
        self.modified = Utc::now();
    }
}

impl Default for MaterialsList {
    fn default() -> Self {
        MaterialsList::new()
    }
}
