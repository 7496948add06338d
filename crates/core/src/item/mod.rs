use serde::{Deserialize, Serialize};

/// A single entry on the wheel.
///
/// The color is an opaque token handed through to the presentation layer
/// untouched; the engine never interprets it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub label: String,
    pub color: String,
}

impl Item {
    pub fn new(label: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            color: color.into(),
        }
    }
}

/// Ordered set of items, fixed for the lifetime of a selector instance. An
/// item's index is its position here.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Roster {
    items: Vec<Item>,
}

impl Roster {
    pub fn new(items: Vec<Item>) -> Self {
        Self { items }
    }

    /// The default roster of seven tools used by the demo.
    pub fn default_tools() -> Self {
        Self::new(vec![
            Item::new("HTML", "#E34F26"),
            Item::new("CSS", "#1572B6"),
            Item::new("JavaScript", "#F7DF1E"),
            Item::new("React", "#61DAFB"),
            Item::new("TypeScript", "#3178C6"),
            Item::new("Python", "#3776AB"),
            Item::new("Figma", "#F24E1E"),
        ])
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn get(&self, index: usize) -> Option<&Item> {
        self.items.get(index)
    }

    /// Angular spacing between adjacent items, `360 / N` degrees. `None`
    /// below two items, so nothing downstream divides by zero.
    pub fn step_angle(&self) -> Option<f64> {
        if self.items.len() < 2 {
            None
        } else {
            Some(360.0 / self.items.len() as f64)
        }
    }

    /// Wheels with fewer than two items render as a static display and
    /// absorb every input.
    pub fn is_interactive(&self) -> bool {
        self.items.len() >= 2
    }

    pub fn last_index(&self) -> usize {
        self.items.len().saturating_sub(1)
    }
}
