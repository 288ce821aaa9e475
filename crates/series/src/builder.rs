//! Assembly of a [`MonthlyCounts`] table into a [`TimeSeries`].

use tracing::{debug, warn};
use urti_calendar::{Month, YearMonth};

use crate::counts::MonthlyCounts;
use crate::error::SeriesError;
use crate::time_series::TimeSeries;

/// Builds a chronologically ordered series from a month-by-year table.
///
/// Walks years in order and, within each year, months from January to
/// December, emitting `tracks[month][i]` for year index `i` whenever the
/// track is long enough. Entries past the end of a track are skipped, so a
/// partially observed final year simply ends early. Months without a track
/// contribute nothing.
///
/// The resulting length always equals the total number of counts in the
/// table. If a short track sits before longer ones in calendar order (for
/// example December ending a year before January), the series has interior
/// holes; these are logged at `warn` level and reported by
/// [`TimeSeries::gaps`].
///
/// # Errors
///
/// | Variant | Trigger |
/// |---------|---------|
/// | [`SeriesError::UnknownMonth`] | a key is not a canonical month abbreviation |
/// | [`SeriesError::YearsNotIncreasing`] | the year list is not strictly increasing |
/// | [`SeriesError::TrackTooLong`] | a track has more entries than years |
/// | [`SeriesError::EmptySeries`] | no observations are produced |
#[tracing::instrument(skip_all, fields(n_years = counts.years().len()))]
pub fn build_series(counts: &MonthlyCounts) -> Result<TimeSeries, SeriesError> {
    let years = counts.years();
    if let Some(w) = years.windows(2).find(|w| w[1] <= w[0]) {
        return Err(SeriesError::YearsNotIncreasing {
            prev: w[0],
            next: w[1],
        });
    }

    let mut by_month: [Option<&[u32]>; 12] = [None; 12];
    for (name, track) in counts.tracks() {
        let month: Month = name.parse().map_err(|_| SeriesError::UnknownMonth {
            name: name.clone(),
        })?;
        if track.len() > years.len() {
            return Err(SeriesError::TrackTooLong {
                month,
                len: track.len(),
                n_years: years.len(),
            });
        }
        by_month[month.index()] = Some(track.as_slice());
    }

    let mut timestamps = Vec::with_capacity(counts.n_counts());
    let mut values = Vec::with_capacity(counts.n_counts());
    for (i, &year) in years.iter().enumerate() {
        for month in Month::ALL {
            let Some(track) = by_month[month.index()] else {
                continue;
            };
            if let Some(&count) = track.get(i) {
                timestamps.push(YearMonth::new(year, month));
                values.push(f64::from(count));
            }
        }
    }

    let series = TimeSeries::new(timestamps, values)?;

    let gaps = series.gaps();
    if !gaps.is_empty() {
        warn!(
            n_gaps = gaps.len(),
            first_gap = %gaps[0],
            "series has interior months without data"
        );
    }
    debug!(
        n_obs = series.len(),
        first = %series.first(),
        last = %series.last(),
        "series assembled"
    );

    Ok(series)
}
