//! Delivery time grid generation
//!
//! Spreads a shift's deliveries evenly between the shift start and end.
//! Slot labels come from these times; their order is the chronological
//! order the balancer relies on.

use chrono::NaiveTime;

/// Evenly spaced delivery times for one shift
///
/// The first delivery lands on the shift start; the shift end is an open
/// bound. Returns an empty grid when no deliveries are requested or the
/// shift has no positive span.
pub fn generate_slot_times(start: NaiveTime, end: NaiveTime, deliveries: u32) -> Vec<NaiveTime> {
    if deliveries == 0 || end <= start {
        return Vec::new();
    }
    let step = (end - start) / deliveries as i32;
    (0..deliveries as i32).map(|i| start + step * i).collect()
}

/// `HH:MM` labels for a time grid
pub fn slot_labels(times: &[NaiveTime]) -> Vec<String> {
    times.iter().map(|t| t.format("%H:%M").to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn time(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn test_deliveries_are_evenly_spaced_from_shift_start() {
        let times = generate_slot_times(time(6, 15), time(14, 15), 4);
        assert_eq!(
            times,
            vec![time(6, 15), time(8, 15), time(10, 15), time(12, 15)]
        );
    }

    #[test]
    fn test_single_delivery_lands_on_shift_start() {
        let times = generate_slot_times(time(15, 0), time(23, 15), 1);
        assert_eq!(times, vec![time(15, 0)]);
    }

    #[test]
    fn test_zero_deliveries_gives_empty_grid() {
        assert!(generate_slot_times(time(6, 15), time(15, 0), 0).is_empty());
    }

    #[test]
    fn test_inverted_shift_gives_empty_grid() {
        assert!(generate_slot_times(time(15, 0), time(6, 15), 3).is_empty());
    }

    #[test]
    fn test_labels_format_as_hour_minute() {
        let labels = slot_labels(&[time(6, 15), time(8, 45)]);
        assert_eq!(labels, vec!["06:15", "08:45"]);
    }
}
