//! Display helpers shared by frontends.

/// Formats whole seconds as `MM:SS`, zero-padded. Minutes keep growing past 99.
pub fn format_time(seconds: u64) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pads_minutes_and_seconds() {
        assert_eq!(format_time(0), "00:00");
        assert_eq!(format_time(5), "00:05");
        assert_eq!(format_time(65), "01:05");
        assert_eq!(format_time(3600), "60:00");
        assert_eq!(format_time(6001), "100:01");
    }
}
