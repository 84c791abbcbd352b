use crate::model::ForecastEntry;

/// Upstream slices per day, assuming fixed 3-hour granularity.
pub const SLICES_PER_DAY: usize = 8;

/// Most days shown in the forecast strip.
pub const MAX_DAYS: usize = 6;

/// Pick one slice per day: indices 0, 8, 16, ... capped at [`MAX_DAYS`].
///
/// The chosen slice's own min/max stand in for the whole day. If upstream
/// ever changes its slice width the buckets drift silently.
pub fn derive_daily_forecast(entries: &[ForecastEntry]) -> Vec<&ForecastEntry> {
    entries
        .iter()
        .step_by(SLICES_PER_DAY)
        .take(MAX_DAYS)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::fixtures::forecast_entries;

    #[test]
    fn five_days_of_slices_give_five_days() {
        let entries = forecast_entries(40);
        let daily = derive_daily_forecast(&entries);

        let picked: Vec<i64> = daily.iter().map(|e| e.dt).collect();
        let expected: Vec<i64> = [0, 8, 16, 24, 32].iter().map(|&i| entries[i].dt).collect();
        assert_eq!(picked, expected);
    }

    #[test]
    fn short_list_is_not_padded() {
        let entries = forecast_entries(3);
        let daily = derive_daily_forecast(&entries);

        assert_eq!(daily.len(), 1);
        assert_eq!(daily[0].dt, entries[0].dt);
    }

    #[test]
    fn long_list_is_capped_at_six_days() {
        let entries = forecast_entries(56);
        let daily = derive_daily_forecast(&entries);

        assert_eq!(daily.len(), MAX_DAYS);
        assert_eq!(daily[5].dt, entries[40].dt);
    }

    #[test]
    fn empty_list_gives_no_days() {
        assert!(derive_daily_forecast(&[]).is_empty());
    }
}
