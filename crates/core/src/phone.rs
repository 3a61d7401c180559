//! Brazilian mobile phone masking for the lead-capture step.

/// Maximum digits kept from raw input (DD + 9-digit mobile number).
pub const MAX_PHONE_DIGITS: usize = 11;

/// A masked phone of at least this length satisfies the lead completion rule.
///
/// Note: 14 characters corresponds to a 10-digit `(DD) XXXX-XXXX` number, one
/// digit short of the full 11-digit mask. The historical threshold is kept.
pub const PHONE_COMPLETE_LEN: usize = 14;

/// Apply the progressive positional mask to raw input.
///
/// Non-digits are stripped first, so masking already-masked input is
/// idempotent. Digits beyond eleven are discarded.
///
/// - 0 to 2 digits: unformatted
/// - 3 to 6 digits: `(DD) XXXX`
/// - 7 to 10 digits: `(DD) XXXX-XXXX`
/// - 11 digits: `(DD) XXXXX-XXXX`
#[must_use]
pub fn format_phone(raw: &str) -> String {
    let digits: String = raw
        .chars()
        .filter(char::is_ascii_digit)
        .take(MAX_PHONE_DIGITS)
        .collect();

    match digits.len() {
        0..=2 => digits,
        3..=6 => format!("({}) {}", &digits[..2], &digits[2..]),
        7..=10 => format!("({}) {}-{}", &digits[..2], &digits[2..6], &digits[6..]),
        _ => format!("({}) {}-{}", &digits[..2], &digits[2..7], &digits[7..]),
    }
}

/// Completion rule for the lead-capture step: a non-blank name and a masked
/// phone of at least [`PHONE_COMPLETE_LEN`] characters.
#[must_use]
pub fn lead_is_complete(name: &str, phone: &str) -> bool {
    !name.trim().is_empty() && phone.len() >= PHONE_COMPLETE_LEN
}
