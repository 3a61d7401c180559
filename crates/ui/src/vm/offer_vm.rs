/// Countdown seconds as `m:ss`.
#[must_use]
pub fn format_countdown(seconds: u32) -> String {
    let minutes = seconds / 60;
    let secs = seconds % 60;
    format!("{minutes}:{secs:02}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_minutes_and_zero_padded_seconds() {
        assert_eq!(format_countdown(600), "10:00");
        assert_eq!(format_countdown(599), "9:59");
        assert_eq!(format_countdown(61), "1:01");
        assert_eq!(format_countdown(9), "0:09");
        assert_eq!(format_countdown(0), "0:00");
    }
}
