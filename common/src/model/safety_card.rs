//! Additional safety cards entered as editable rows under the white card.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SafetyCard {
    pub name: String,
    pub number: String,
}

/// One editable row. `id` is stable for the row's lifetime and is used as
/// the render key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardRow {
    pub id: u32,
    pub name: String,
    pub number: String,
}

impl CardRow {
    fn blank(id: u32) -> Self {
        Self {
            id,
            name: String::new(),
            number: String::new(),
        }
    }
}

/// Ordered list of card rows. Always holds at least one row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SafetyCardRows {
    rows: Vec<CardRow>,
    next_id: u32,
}

impl Default for SafetyCardRows {
    fn default() -> Self {
        Self {
            rows: vec![CardRow::blank(0)],
            next_id: 1,
        }
    }
}

impl SafetyCardRows {
    pub fn rows(&self) -> &[CardRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Remove controls are shown only while more than one row exists.
    pub fn can_remove(&self) -> bool {
        self.rows.len() > 1
    }

    /// Appends a blank row and returns its id.
    pub fn add(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        self.rows.push(CardRow::blank(id));
        id
    }

    /// Removes the row with `id`. Returns `false` without touching the list
    /// when the row is unknown or is the last one left.
    pub fn remove(&mut self, id: u32) -> bool {
        if !self.can_remove() {
            return false;
        }
        let before = self.rows.len();
        self.rows.retain(|row| row.id != id);
        self.rows.len() != before
    }

    pub fn set_name(&mut self, id: u32, name: String) {
        if let Some(row) = self.row_mut(id) {
            row.name = name;
        }
    }

    pub fn set_number(&mut self, id: u32, number: String) {
        if let Some(row) = self.row_mut(id) {
            row.number = number;
        }
    }

    /// Back to a single blank row.
    pub fn reset(&mut self) {
        let id = self.next_id;
        self.next_id += 1;
        self.rows = vec![CardRow::blank(id)];
    }

    /// Cards to submit: trimmed values, skipping rows left entirely blank.
    pub fn cards(&self) -> Vec<SafetyCard> {
        self.rows
            .iter()
            .map(|row| SafetyCard {
                name: row.name.trim().to_string(),
                number: row.number.trim().to_string(),
            })
            .filter(|card| !card.name.is_empty() || !card.number.is_empty())
            .collect()
    }

    fn row_mut(&mut self, id: u32) -> Option<&mut CardRow> {
        self.rows.iter_mut().find(|row| row.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_one_row_without_remove_control() {
        let rows = SafetyCardRows::default();
        assert_eq!(rows.len(), 1);
        assert!(!rows.can_remove());
    }

    #[test]
    fn second_row_shows_remove_controls() {
        let mut rows = SafetyCardRows::default();
        rows.add();
        assert_eq!(rows.len(), 2);
        assert!(rows.can_remove());
    }

    #[test]
    fn removing_down_to_one_row_hides_control_and_keeps_last_row() {
        let mut rows = SafetyCardRows::default();
        let second = rows.add();
        let third = rows.add();

        assert!(rows.remove(second));
        assert!(rows.remove(third));
        assert_eq!(rows.len(), 1);
        assert!(!rows.can_remove());

        let last = rows.rows()[0].id;
        assert!(!rows.remove(last));
        assert_eq!(rows.len(), 1);
    }

    #[test]
    fn unknown_id_is_ignored() {
        let mut rows = SafetyCardRows::default();
        rows.add();
        assert!(!rows.remove(99));
        assert_eq!(rows.len(), 2);
    }

    #[test]
    fn ids_are_never_reused() {
        let mut rows = SafetyCardRows::default();
        let a = rows.add();
        rows.remove(a);
        let b = rows.add();
        assert_ne!(a, b);
    }

    #[test]
    fn cards_skip_blank_rows_and_trim_values() {
        let mut rows = SafetyCardRows::default();
        let first = rows.rows()[0].id;
        rows.set_name(first, " Forklift ".to_string());
        rows.set_number(first, "LF 1234".to_string());
        rows.add();
        let third = rows.add();
        rows.set_number(third, "EWP-9".to_string());

        assert_eq!(
            rows.cards(),
            vec![
                SafetyCard {
                    name: "Forklift".to_string(),
                    number: "LF 1234".to_string()
                },
                SafetyCard {
                    name: String::new(),
                    number: "EWP-9".to_string()
                },
            ]
        );
    }

    #[test]
    fn reset_leaves_a_single_blank_row() {
        let mut rows = SafetyCardRows::default();
        let first = rows.rows()[0].id;
        rows.set_name(first, "Forklift".to_string());
        rows.add();
        rows.reset();
        assert_eq!(rows.len(), 1);
        assert!(rows.cards().is_empty());
    }
}
