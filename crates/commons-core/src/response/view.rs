//! View state for the response table.
//!
//! Pure data: projecting with a `SortFilterState` never mutates the
//! underlying responses.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use super::model::Response;
use crate::field::FieldType;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortColumn {
    CreatedAt,
    Creator,
}

impl SortColumn {
    /// Direction used when the table switches to this column.
    pub fn default_direction(self) -> SortDirection {
        match self {
            Self::CreatedAt => SortDirection::Desc,
            Self::Creator => SortDirection::Asc,
        }
    }

    /// Ascending comparison of two responses on this column.
    pub fn compare(self, a: &Response, b: &Response) -> Ordering {
        match self {
            Self::CreatedAt => a.created_at.cmp(&b.created_at),
            Self::Creator => a
                .creator_id
                .to_lowercase()
                .cmp(&b.creator_id.to_lowercase()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }

    /// Orients an ascending comparison result.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Asc => ordering,
            Self::Desc => ordering.reverse(),
        }
    }
}

/// Which field type the table shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "kind", content = "fieldType")]
pub enum FieldFilter {
    #[default]
    All,
    Only(FieldType),
}

impl FieldFilter {
    pub fn matches(self, response: &Response) -> bool {
        match self {
            Self::All => true,
            Self::Only(field_type) => response.field_type == field_type,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SortFilterState {
    pub filter: FieldFilter,
    pub sort_column: SortColumn,
    pub sort_direction: SortDirection,
}

impl Default for SortFilterState {
    /// Every type, newest first.
    fn default() -> Self {
        Self {
            filter: FieldFilter::All,
            sort_column: SortColumn::CreatedAt,
            sort_direction: SortDirection::Desc,
        }
    }
}

impl SortFilterState {
    /// Flips the direction on the current column, or switches column with
    /// that column's default direction.
    pub fn toggle_sort(&mut self, column: SortColumn) {
        if self.sort_column == column {
            self.sort_direction = self.sort_direction.flipped();
        } else {
            self.sort_column = column;
            self.sort_direction = column.default_direction();
        }
    }

    /// Orders two responses according to this state.
    pub fn compare(&self, a: &Response, b: &Response) -> Ordering {
        self.sort_direction.apply(self.sort_column.compare(a, b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state() {
        let state = SortFilterState::default();
        assert_eq!(state.filter, FieldFilter::All);
        assert_eq!(state.sort_column, SortColumn::CreatedAt);
        assert_eq!(state.sort_direction, SortDirection::Desc);
    }

    #[test]
    fn test_toggle_same_column_twice_restores_direction() {
        let mut state = SortFilterState::default();
        state.toggle_sort(SortColumn::CreatedAt);
        assert_eq!(state.sort_direction, SortDirection::Asc);
        state.toggle_sort(SortColumn::CreatedAt);
        assert_eq!(state, SortFilterState::default());
    }

    #[test]
    fn test_toggle_to_creator_defaults_ascending() {
        let mut state = SortFilterState::default();
        state.toggle_sort(SortColumn::CreatedAt);
        state.toggle_sort(SortColumn::Creator);
        assert_eq!(state.sort_column, SortColumn::Creator);
        assert_eq!(state.sort_direction, SortDirection::Asc);

        state.toggle_sort(SortColumn::CreatedAt);
        assert_eq!(state.sort_direction, SortDirection::Desc);
    }

    #[test]
    fn test_direction_apply() {
        assert_eq!(SortDirection::Asc.apply(Ordering::Less), Ordering::Less);
        assert_eq!(SortDirection::Desc.apply(Ordering::Less), Ordering::Greater);
        assert_eq!(SortDirection::Desc.apply(Ordering::Equal), Ordering::Equal);
    }
}
