//! Raw month-by-year count table.

use std::collections::BTreeMap;

/// Raw observation table: one count track per month name, indexed by year
/// offset into a parallel list of years.
///
/// `tracks["Jan"][i]` is the January count for `years[i]`. A track may be
/// shorter than `years`; the missing trailing entries represent a year that
/// was still in progress when the data were collected.
///
/// Keys are kept as supplied; they are checked against the canonical month
/// abbreviations by [`crate::build_series`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MonthlyCounts {
    years: Vec<i32>,
    tracks: BTreeMap<String, Vec<u32>>,
}

impl MonthlyCounts {
    /// Creates an empty table covering `years`.
    pub fn new(years: Vec<i32>) -> Self {
        Self {
            years,
            tracks: BTreeMap::new(),
        }
    }

    /// Creates a table from month tracks, deriving the year list as
    /// `start_year..start_year + longest_track`.
    ///
    /// # Example
    ///
    /// ```
    /// use std::collections::BTreeMap;
    /// use urti_series::MonthlyCounts;
    ///
    /// let mut tracks = BTreeMap::new();
    /// tracks.insert("Jan".to_string(), vec![1, 2, 3]);
    /// tracks.insert("Feb".to_string(), vec![4, 5]);
    ///
    /// let counts = MonthlyCounts::from_tracks(2010, tracks);
    /// assert_eq!(counts.years(), &[2010, 2011, 2012]);
    /// ```
    pub fn from_tracks(start_year: i32, tracks: BTreeMap<String, Vec<u32>>) -> Self {
        let n_years = tracks.values().map(Vec::len).max().unwrap_or(0);
        let years = (0..n_years).map(|i| start_year + i as i32).collect();
        Self { years, tracks }
    }

    /// Sets the track for `month`, replacing any previous one.
    pub fn insert(&mut self, month: impl Into<String>, counts: Vec<u32>) {
        self.tracks.insert(month.into(), counts);
    }

    /// Sets the track for `month` (builder form of [`MonthlyCounts::insert`]).
    pub fn with_track(mut self, month: impl Into<String>, counts: Vec<u32>) -> Self {
        self.insert(month, counts);
        self
    }

    /// Returns the year list.
    pub fn years(&self) -> &[i32] {
        &self.years
    }

    /// Returns the month-name to counts mapping.
    pub fn tracks(&self) -> &BTreeMap<String, Vec<u32>> {
        &self.tracks
    }

    /// Total number of counts across all tracks.
    pub fn n_counts(&self) -> usize {
        self.tracks.values().map(Vec::len).sum()
    }
}
