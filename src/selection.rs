//! Operator filter state for the two categorical dimensions.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A categorical attribute of a trip usable for filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    CityStart,
    CityEnd,
}

impl Dimension {
    pub const ALL: [Dimension; 2] = [Dimension::CityStart, Dimension::CityEnd];

    /// Column header used in the source CSV and in the filter pane.
    pub fn label(self) -> &'static str {
        match self {
            Dimension::CityStart => "City Start",
            Dimension::CityEnd => "City End",
        }
    }
}

/// Filter for one dimension.
///
/// `Explicit` with an empty set is legal and matches nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub enum Selection {
    #[default]
    All,
    Explicit(BTreeSet<String>),
}

impl Selection {
    pub fn explicit<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Selection::Explicit(values.into_iter().map(Into::into).collect())
    }

    /// Selection for one dimension from command line input. `none` asks for
    /// an explicit empty set; otherwise any values make the selection
    /// explicit. Returns `None` when the dimension was left unspecified.
    pub fn from_cli(values: &[String], none: bool) -> Option<Self> {
        if none {
            Some(Selection::Explicit(BTreeSet::new()))
        } else if values.is_empty() {
            None
        } else {
            Some(Selection::explicit(values.iter().cloned()))
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Selection::All)
    }

    pub fn matches(&self, value: &str) -> bool {
        match self {
            Selection::All => true,
            Selection::Explicit(values) => values.contains(value),
        }
    }
}

/// The full selection across both dimensions. Built fresh from operator input
/// on every filter change.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SelectionState {
    pub city_start: Selection,
    pub city_end: Selection,
}

impl SelectionState {
    pub fn new(city_start: Selection, city_end: Selection) -> Self {
        Self {
            city_start,
            city_end,
        }
    }

    /// Both dimensions unconstrained.
    pub fn all() -> Self {
        Self::default()
    }

    /// Filter pane default: `seeded` starts with only its first option
    /// selected, every other dimension starts at `All`. With no options the
    /// seeded dimension stays `All`.
    pub fn ui_default(seeded: Dimension, options: &[String]) -> Self {
        let mut state = Self::all();
        if let Some(first) = options.first() {
            state.set(seeded, Selection::explicit([first.clone()]));
        }
        state
    }

    pub fn get(&self, dimension: Dimension) -> &Selection {
        match dimension {
            Dimension::CityStart => &self.city_start,
            Dimension::CityEnd => &self.city_end,
        }
    }

    pub fn set(&mut self, dimension: Dimension, selection: Selection) {
        match dimension {
            Dimension::CityStart => self.city_start = selection,
            Dimension::CityEnd => self.city_end = selection,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_matches_anything() {
        assert!(Selection::All.matches("York"));
        assert!(Selection::All.matches(""));
    }

    #[test]
    fn test_explicit_matches_members_only() {
        let s = Selection::explicit(["York", "Leeds"]);
        assert!(s.matches("York"));
        assert!(!s.matches("Bristol"));
    }

    #[test]
    fn test_empty_explicit_matches_nothing() {
        let s = Selection::Explicit(BTreeSet::new());
        assert!(!s.matches("York"));
        assert!(!s.is_all());
    }

    #[test]
    fn test_from_cli_unspecified_none_and_values() {
        assert_eq!(Selection::from_cli(&[], false), None);
        assert_eq!(
            Selection::from_cli(&[], true),
            Some(Selection::Explicit(BTreeSet::new()))
        );
        assert_eq!(
            Selection::from_cli(&["York".to_string()], false),
            Some(Selection::explicit(["York"]))
        );
    }

    #[test]
    fn test_from_cli_none_overrides_seeded_default() {
        let options = vec!["Bristol".to_string()];
        let mut state = SelectionState::ui_default(Dimension::CityStart, &options);
        if let Some(selection) = Selection::from_cli(&[], true) {
            state.set(Dimension::CityStart, selection);
        }
        assert!(!state.city_start.matches("Bristol"));
        assert!(!state.city_start.is_all());
    }

    #[test]
    fn test_ui_default_seeds_first_option() {
        let options = vec!["Birmingham New Street".to_string(), "York".to_string()];
        let state = SelectionState::ui_default(Dimension::CityStart, &options);

        assert_eq!(
            state.city_start,
            Selection::explicit(["Birmingham New Street"])
        );
        assert!(state.city_end.is_all());
    }

    #[test]
    fn test_ui_default_without_options_stays_all() {
        let state = SelectionState::ui_default(Dimension::CityEnd, &[]);
        assert_eq!(state, SelectionState::all());
    }
}
