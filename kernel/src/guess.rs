/// Reads the integer prefix of a player entry.
///
/// Leading whitespace is skipped, an optional sign is accepted, and the
/// longest run of ASCII digits is taken; anything after it is ignored.
/// Returns `None` when no digit follows. Digit runs too long for `i64`
/// saturate, which keeps them out of any `i32` range.
pub fn parse_guess(input: &str) -> Option<i64> {
    let trimmed = input.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits = rest.bytes().take_while(u8::is_ascii_digit);
    let mut value: i64 = 0;
    let mut seen = false;
    for digit in digits {
        seen = true;
        let digit = (digit - b'0') as i64;
        value = if negative {
            value.saturating_mul(10).saturating_sub(digit)
        } else {
            value.saturating_mul(10).saturating_add(digit)
        };
    }

    seen.then_some(value)
}
