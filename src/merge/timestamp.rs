/// Format a non-negative duration in seconds as `H:MM:SS.ffffff`.
///
/// Hours carry no leading zero and grow without bound; the microsecond
/// fraction is always present so millisecond detail stays visible in the
/// exported documents.
pub fn format_timestamp(seconds: f64) -> String {
    let total_micros = (seconds.max(0.0) * 1_000_000.0).round() as u64;
    let micros = total_micros % 1_000_000;
    let total_seconds = total_micros / 1_000_000;
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let secs = total_seconds % 60;
    format!("{}:{:02}:{:02}.{:06}", hours, minutes, secs, micros)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero() {
        assert_eq!(format_timestamp(0.0), "0:00:00.000000");
    }

    #[test]
    fn test_all_units_carried() {
        // 1 hour, 2 minutes, 5.25 seconds
        assert_eq!(format_timestamp(3725.25), "1:02:05.250000");
    }

    #[test]
    fn test_sub_second_precision() {
        assert_eq!(format_timestamp(0.123), "0:00:00.123000");
        assert_eq!(format_timestamp(59.9995), "0:00:59.999500");
    }

    #[test]
    fn test_rounding_carries_across_units() {
        assert_eq!(format_timestamp(3599.9999996), "1:00:00.000000");
    }

    #[test]
    fn test_negative_clamped_to_zero() {
        assert_eq!(format_timestamp(-1.0), "0:00:00.000000");
    }
}
