//! Identifier generation for newly created entities.
//!
//! Ids are a type prefix followed by a millisecond timestamp, e.g. `C1699999999999`.
//! When the candidate is already taken the timestamp is bumped until it is free.

pub const PLAN_ID_PREFIX: &str = "P";
pub const CUSTOMER_ID_PREFIX: &str = "C";
pub const DRIVER_ID_PREFIX: &str = "D";

/// Generate an id that `is_taken` does not report as used
pub fn generate_entity_id(prefix: &str, timestamp_millis: i64, is_taken: impl Fn(&str) -> bool) -> String {
    let mut millis = timestamp_millis;
    loop {
        let candidate = format!("{}{}", prefix, millis);
        if !is_taken(&candidate) {
            return candidate;
        }
        millis += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_uses_prefix_and_timestamp() {
        let id = generate_entity_id(CUSTOMER_ID_PREFIX, 1700000000000, |_| false);
        assert_eq!(id, "C1700000000000");
    }

    #[test]
    fn test_generate_skips_taken_ids() {
        let taken = ["P1700000000000", "P1700000000001"];
        let id = generate_entity_id(PLAN_ID_PREFIX, 1700000000000, |candidate| taken.contains(&candidate));
        assert_eq!(id, "P1700000000002");
    }
}
