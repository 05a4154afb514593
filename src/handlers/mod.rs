// handlers/mod.rs - one sub-module per resource, one file per route
pub mod public;
pub mod pizzas;
pub mod restaurant_pizzas;
pub mod restaurants;

/// Path ids are plain digits; anything else (signs, spaces, `abc`) cannot name a row
pub(crate) fn parse_id(raw: &str) -> Option<i64> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse().ok()
}
