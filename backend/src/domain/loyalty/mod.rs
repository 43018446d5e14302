//! Loyalty ledger domain: short codes, profiles and point counters.

mod profile;
mod short_code;

pub use profile::{Points, Profile, ProfileId};
pub use short_code::{ShortCode, ShortCodeError};

/// Message shown when no single profile matches a short code.
pub const PROFILE_NOT_FOUND_MESSAGE: &str = "Nie znaleziono profilu";

/// Direction of a one-point adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointAdjustment {
    Add,
    Remove,
}

impl PointAdjustment {
    /// Counter value after applying the adjustment to `current`.
    #[must_use]
    pub fn apply(self, current: Points) -> Points {
        match self {
            Self::Add => current.added_one(),
            Self::Remove => current.removed_one(),
        }
    }

    /// Confirmation shown once the new total has been stored.
    #[must_use]
    pub fn confirmation(self, total: Points) -> String {
        match self {
            Self::Add => format!("Dodano punkt. Nowy stan: {total}"),
            Self::Remove => format!("Usunięto punkt. Nowy stan: {total}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(PointAdjustment::Add, 0, 1)]
    #[case(PointAdjustment::Add, 999_999, 1_000_000)]
    #[case(PointAdjustment::Remove, 5, 4)]
    #[case(PointAdjustment::Remove, 0, 0)]
    fn apply_moves_counter_by_one(
        #[case] adjustment: PointAdjustment,
        #[case] current: u64,
        #[case] expected: u64,
    ) {
        assert_eq!(adjustment.apply(Points::new(current)), Points::new(expected));
    }

    #[test]
    fn confirmations_report_the_new_total() {
        assert_eq!(
            PointAdjustment::Add.confirmation(Points::new(4)),
            "Dodano punkt. Nowy stan: 4"
        );
        assert_eq!(
            PointAdjustment::Remove.confirmation(Points::new(0)),
            "Usunięto punkt. Nowy stan: 0"
        );
    }
}
