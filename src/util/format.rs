/// `M:SS`, seconds floored and always two digits.
pub fn format_clock(seconds: f64) -> String {
    let total = if seconds.is_finite() && seconds > 0.0 {
        seconds.floor() as u64
    } else {
        0
    };
    format!("{}:{:02}", total / 60, total % 60)
}

pub fn format_long_duration(seconds: u64) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    if hours > 0 {
        format!("{hours} hr {minutes} min")
    } else {
        format!("{minutes} min {} sec", seconds % 60)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pads_seconds_below_ten() {
        assert_eq!(format_clock(0.0), "0:00");
        assert_eq!(format_clock(9.0), "0:09");
        assert_eq!(format_clock(65.0), "1:05");
    }

    #[test]
    fn floors_fractional_seconds() {
        assert_eq!(format_clock(59.999), "0:59");
        assert_eq!(format_clock(225.0 * 0.4), "1:30");
    }

    #[test]
    fn minutes_are_not_padded_or_wrapped() {
        assert_eq!(format_clock(3600.0), "60:00");
    }

    #[test]
    fn invalid_input_reads_as_zero() {
        assert_eq!(format_clock(-3.0), "0:00");
        assert_eq!(format_clock(f64::NAN), "0:00");
    }

    #[test]
    fn long_durations() {
        assert_eq!(format_long_duration(1009), "16 min 49 sec");
        assert_eq!(format_long_duration(3900), "1 hr 5 min");
    }
}
