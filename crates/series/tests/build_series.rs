//! Integration tests for series assembly.

use std::collections::BTreeMap;

use urti_calendar::{Month, YearMonth};
use urti_series::{MonthlyCounts, SeriesError, build_series};

/// Sixteen years (2010..=2025) of monthly counts; Jan-Jun carry 16 entries,
/// Jul-Dec carry 15 because the final year was still in progress.
fn urti_table() -> MonthlyCounts {
    let mut tracks = BTreeMap::new();
    let rows: [(&str, &[u32]); 12] = [
        ("Jan", &[40, 62, 45, 132, 104, 77, 96, 76, 76, 32, 68, 149, 181, 135, 34, 229]),
        ("Feb", &[250, 44, 15, 81, 111, 75, 54, 77, 86, 28, 97, 183, 68, 128, 40, 198]),
        ("Mar", &[231, 72, 47, 65, 144, 91, 27, 72, 124, 26, 134, 193, 103, 101, 250, 201]),
        ("Apr", &[18, 29, 43, 56, 55, 107, 67, 81, 145, 33, 37, 93, 116, 109, 162, 209]),
        ("May", &[17, 25, 44, 76, 99, 76, 69, 47, 97, 17, 39, 103, 168, 114, 190, 210]),
        ("Jun", &[55, 53, 46, 45, 80, 86, 57, 45, 118, 34, 117, 103, 242, 123, 175, 203]),
        ("Jul", &[46, 49, 62, 66, 105, 69, 49, 110, 122, 49, 141, 179, 87, 87, 216]),
        ("Aug", &[39, 77, 30, 16, 62, 151, 52, 67, 68, 50, 43, 66, 128, 64, 235]),
        ("Sep", &[37, 47, 18, 46, 68, 123, 57, 68, 72, 46, 83, 58, 115, 167, 211]),
        ("Oct", &[43, 39, 8, 53, 39, 141, 24, 39, 132, 37, 227, 102, 216, 192, 171]),
        ("Nov", &[29, 85, 17, 57, 39, 105, 17, 39, 69, 69, 131, 131, 235, 213, 215]),
        ("Dec", &[19, 54, 30, 49, 61, 64, 31, 26, 64, 73, 109, 79, 230, 39, 248]),
    ];
    for (name, counts) in rows {
        tracks.insert(name.to_string(), counts.to_vec());
    }
    MonthlyCounts::from_tracks(2010, tracks)
}

#[test]
fn full_table_is_a_monotonic_monthly_grid() {
    let series = build_series(&urti_table()).unwrap();

    assert_eq!(series.len(), 15 * 12 + 6);
    assert_eq!(series.first(), YearMonth::new(2010, Month::Jan));
    assert_eq!(series.last(), YearMonth::new(2025, Month::Jun));
    assert!(series.is_contiguous());
    for pair in series.timestamps().windows(2) {
        assert_eq!(pair[0].months_until(pair[1]), 1, "{} -> {}", pair[0], pair[1]);
    }
}

#[test]
fn partial_final_year_truncates() {
    let series = build_series(&urti_table()).unwrap();
    let in_2025: Vec<Month> = series
        .timestamps()
        .iter()
        .filter(|t| t.year() == 2025)
        .map(|t| t.month())
        .collect();
    assert_eq!(
        in_2025,
        vec![Month::Jan, Month::Feb, Month::Mar, Month::Apr, Month::May, Month::Jun]
    );
    assert_eq!(*series.values().last().unwrap(), 203.0);
}

#[test]
fn short_december_track_ends_at_year_index_13() {
    let mut counts = urti_table();
    let years = counts.years().to_vec();
    let mut tracks = counts.tracks().clone();
    for track in tracks.values_mut() {
        track.resize(16, 1);
    }
    tracks.get_mut("Dec").unwrap().truncate(14);
    counts = MonthlyCounts::new(years);
    for (name, track) in tracks {
        counts.insert(name, track);
    }

    let series = build_series(&counts).unwrap();

    assert_eq!(series.len(), counts.n_counts());
    assert_eq!(series.len(), 11 * 16 + 14);

    let last_december = series
        .timestamps()
        .iter()
        .filter(|t| t.month() == Month::Dec)
        .max()
        .copied()
        .unwrap();
    assert_eq!(last_december, YearMonth::new(2010 + 13, Month::Dec));
    assert_eq!(series.last(), YearMonth::new(2025, Month::Nov));
    assert_eq!(series.gaps(), vec![YearMonth::new(2024, Month::Dec)]);
}

#[test]
fn timestamps_strictly_increase_for_ragged_tables() {
    let counts = MonthlyCounts::new(vec![2000, 2001, 2002])
        .with_track("Jan", vec![1, 2, 3])
        .with_track("Jun", vec![4])
        .with_track("Dec", vec![5, 6]);
    let series = build_series(&counts).unwrap();
    assert_eq!(series.len(), 6);
    for pair in series.timestamps().windows(2) {
        assert!(pair[0] < pair[1]);
    }
}

#[test]
fn malformed_keys_are_validation_errors() {
    let mut counts = urti_table();
    counts.insert("Sept", vec![1]);
    assert!(matches!(
        build_series(&counts),
        Err(SeriesError::UnknownMonth { .. })
    ));
}

#[test]
fn points_serialize_for_plotting() {
    let counts = MonthlyCounts::new(vec![2010]).with_track("Jan", vec![40]);
    let series = build_series(&counts).unwrap();
    let points: Vec<_> = series.points().collect();
    let json = serde_json::to_string(&points).unwrap();
    assert_eq!(
        json,
        r#"[{"timestamp":{"year":2010,"month":"Jan"},"value":40.0}]"#
    );
}
