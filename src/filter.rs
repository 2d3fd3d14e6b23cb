//! Applies a [`SelectionState`] to the trip table.

use crate::schema::{Dataset, TripRecord};
use crate::selection::{Dimension, Selection, SelectionState};

/// The subset of the dataset that satisfies a selection, in dataset order.
#[derive(Debug, Clone, Default)]
pub struct FilteredView<'a> {
    records: Vec<&'a TripRecord>,
}

impl<'a> FilteredView<'a> {
    pub fn records(&self) -> &[&'a TripRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a TripRecord> + '_ {
        self.records.iter().copied()
    }
}

/// Filters by every dimension with an active constraint (logical AND).
///
/// With both dimensions at [`Selection::All`] the view holds the whole dataset.
pub fn apply<'a>(dataset: &'a Dataset, selection: &SelectionState) -> FilteredView<'a> {
    let records = dataset
        .records()
        .iter()
        .filter(|r| {
            Dimension::ALL
                .iter()
                .all(|&d| selection.get(d).matches(r.dimension(d)))
        })
        .collect();

    FilteredView { records }
}

/// Filters by a single dimension, ignoring the rest of the selection.
pub fn apply_dimension<'a>(
    dataset: &'a Dataset,
    dimension: Dimension,
    selection: &Selection,
) -> FilteredView<'a> {
    let records = dataset
        .records()
        .iter()
        .filter(|r| selection.matches(r.dimension(dimension)))
        .collect();

    FilteredView { records }
}
