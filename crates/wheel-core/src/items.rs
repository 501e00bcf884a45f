//! Ordered, editable list of wheel item labels.

use serde::{Deserialize, Serialize};

use crate::error::WheelError;

/// Minimum number of items the wheel keeps when deleting.
///
/// Only removal checks this; a list loaded with fewer items is accepted.
pub const MIN_ITEMS: usize = 2;

/// Item labels in wheel order. Index `i` owns slice `i`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemList {
    labels: Vec<String>,
}

impl ItemList {
    pub fn new<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            labels: labels.into_iter().map(Into::into).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.labels.get(index).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.labels.iter().map(String::as_str)
    }

    /// Appends a trimmed label and returns its index.
    pub fn add(&mut self, text: &str) -> Result<usize, WheelError> {
        let label = normalize(text)?;
        self.labels.push(label);
        tracing::debug!(len = self.labels.len(), "item added");
        Ok(self.labels.len() - 1)
    }

    /// Replaces the label at `index` without moving any item.
    pub fn edit(&mut self, index: usize, text: &str) -> Result<(), WheelError> {
        let len = self.labels.len();
        let slot = self
            .labels
            .get_mut(index)
            .ok_or(WheelError::IndexOutOfRange { index, len })?;
        *slot = normalize(text)?;
        tracing::debug!(index, "item edited");
        Ok(())
    }

    /// Removes the item at `index`, refusing to go below [`MIN_ITEMS`].
    ///
    /// The minimum is checked first, so a list at the minimum reports
    /// `TooFewItems` whatever the index.
    pub fn remove(&mut self, index: usize) -> Result<String, WheelError> {
        let len = self.labels.len();
        if len <= MIN_ITEMS {
            return Err(WheelError::too_few());
        }
        if index >= len {
            return Err(WheelError::IndexOutOfRange { index, len });
        }
        let removed = self.labels.remove(index);
        tracing::debug!(index, len = self.labels.len(), "item removed");
        Ok(removed)
    }
}

fn normalize(text: &str) -> Result<String, WheelError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        Err(WheelError::EmptyLabel)
    } else {
        Ok(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ItemList {
        ItemList::new(["Pizza", "Sushi", "Tacos"])
    }

    #[test]
    fn test_add_appends_trimmed_label() {
        let mut items = sample();
        let index = items.add("  Ramen ").unwrap();

        assert_eq!(index, 3);
        assert_eq!(items.len(), 4);
        assert_eq!(items.get(3), Some("Ramen"));
    }

    #[test]
    fn test_add_empty_is_noop() {
        let mut items = sample();

        assert_eq!(items.add(""), Err(WheelError::EmptyLabel));
        assert_eq!(items.add(" \t\n"), Err(WheelError::EmptyLabel));
        assert_eq!(items, sample());
    }

    #[test]
    fn test_edit_keeps_order() {
        let mut items = sample();
        items.edit(1, "Udon").unwrap();

        assert_eq!(items, ItemList::new(["Pizza", "Udon", "Tacos"]));
    }

    #[test]
    fn test_edit_rejects_bad_input() {
        let mut items = sample();

        assert_eq!(
            items.edit(5, "Udon"),
            Err(WheelError::IndexOutOfRange { index: 5, len: 3 })
        );
        assert_eq!(items.edit(0, "   "), Err(WheelError::EmptyLabel));
        assert_eq!(items, sample());
    }

    #[test]
    fn test_remove_stops_at_minimum() {
        let mut items = sample();

        assert_eq!(items.remove(0).unwrap(), "Pizza");
        assert_eq!(items.len(), 2);

        assert_eq!(items.remove(0), Err(WheelError::TooFewItems { min: 2 }));
        assert_eq!(items, ItemList::new(["Sushi", "Tacos"]));
    }

    #[test]
    fn test_remove_rejects_bad_index() {
        let mut items = sample();

        assert_eq!(
            items.remove(3),
            Err(WheelError::IndexOutOfRange { index: 3, len: 3 })
        );
        assert_eq!(items, sample());
    }

    #[test]
    fn test_remove_at_minimum_reports_too_few_first() {
        let mut items = ItemList::new(["Sushi", "Tacos"]);

        assert_eq!(items.remove(9), Err(WheelError::TooFewItems { min: 2 }));
        assert_eq!(items.len(), 2);
    }

    #[test]
    fn test_load_below_minimum_is_allowed() {
        let items = ItemList::new(["Only"]);
        assert_eq!(items.len(), 1);

        let mut items = items;
        assert_eq!(items.remove(0), Err(WheelError::TooFewItems { min: 2 }));
    }

    #[test]
    fn test_serde_is_plain_array() {
        let items = sample();
        let json = serde_json::to_string(&items).unwrap();
        assert_eq!(json, r#"["Pizza","Sushi","Tacos"]"#);
    }
}
