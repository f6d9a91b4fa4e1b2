use chrono::Month;

/// Resolves an English month name, its three letter abbreviation, or a
/// number in `1..=12` to the 1-based month number.
pub fn month_id(value: &str) -> Option<u8> {
    let value = value.trim();

    if let Ok(number) = value.parse::<u8>() {
        return (1..=12).contains(&number).then_some(number);
    }

    match value.parse::<Month>() {
        Ok(month) => Some(month.number_from_month() as u8),
        Err(_) => None,
    }
}
