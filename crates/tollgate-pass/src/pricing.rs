//! # Pricing Table
//!
//! Static lookups of price, validity duration, and use count per
//! (vehicle class, pass class). Pure functions over the closed enums —
//! every lookup is an exhaustive `match`, so a new pass or vehicle
//! class cannot ship without a price, a duration, and a use count.
//!
//! | Class     | Two-wheeler | Four-wheeler | Duration | Uses      |
//! |-----------|-------------|--------------|----------|-----------|
//! | SINGLE    | 50          | 100          | 1 hour   | 1         |
//! | RETURN    | 80          | 150          | 24 hours | 2         |
//! | SEVEN_DAY | 250         | 500          | 7 days   | unlimited |

use chrono::Duration;

use tollgate_core::{PassClass, VehicleClass};

/// Use count standing in for "unlimited" on the seven-day pass.
const UNLIMITED_USES: u32 = 999_999;

/// The fixed pricing table. Stateless; all lookups are associated
/// functions with no side effects.
#[derive(Debug, Clone, Copy)]
pub struct PriceTable;

impl PriceTable {
    /// Price in rupees for a (vehicle class, pass class) pair.
    pub fn price(vehicle_class: VehicleClass, pass_class: PassClass) -> u32 {
        match (vehicle_class, pass_class) {
            (VehicleClass::TwoWheeler, PassClass::Single) => 50,
            (VehicleClass::TwoWheeler, PassClass::Return) => 80,
            (VehicleClass::TwoWheeler, PassClass::SevenDay) => 250,
            (VehicleClass::FourWheeler, PassClass::Single) => 100,
            (VehicleClass::FourWheeler, PassClass::Return) => 150,
            (VehicleClass::FourWheeler, PassClass::SevenDay) => 500,
        }
    }

    /// Validity duration for a pass class, measured from first use.
    pub fn duration(pass_class: PassClass) -> Duration {
        match pass_class {
            PassClass::Single => Duration::hours(1),
            PassClass::Return => Duration::hours(24),
            PassClass::SevenDay => Duration::days(7),
        }
    }

    /// Maximum number of uses for a pass class.
    pub fn max_uses(pass_class: PassClass) -> u32 {
        match pass_class {
            PassClass::Single => 1,
            PassClass::Return => 2,
            PassClass::SevenDay => UNLIMITED_USES,
        }
    }

    /// Catalog description shown alongside purchase options.
    pub fn describe(pass_class: PassClass) -> &'static str {
        match pass_class {
            PassClass::Single => "Single journey pass, valid for 1 use",
            PassClass::Return => "Return journey pass, valid for 2 uses",
            PassClass::SevenDay => "Weekly pass, unlimited uses for 7 days",
        }
    }

    /// Human-readable rendering of a validity duration.
    pub fn format_duration(duration: Duration) -> String {
        if duration.num_days() == 7 {
            "7 days".to_string()
        } else if duration.num_days() == 1 {
            "24 hours".to_string()
        } else if duration.num_hours() == 1 {
            "1 hour".to_string()
        } else {
            format!("{} hours", duration.num_hours())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_wheeler_prices() {
        assert_eq!(PriceTable::price(VehicleClass::TwoWheeler, PassClass::Single), 50);
        assert_eq!(PriceTable::price(VehicleClass::TwoWheeler, PassClass::Return), 80);
        assert_eq!(PriceTable::price(VehicleClass::TwoWheeler, PassClass::SevenDay), 250);
    }

    #[test]
    fn test_four_wheeler_prices() {
        assert_eq!(PriceTable::price(VehicleClass::FourWheeler, PassClass::Single), 100);
        assert_eq!(PriceTable::price(VehicleClass::FourWheeler, PassClass::Return), 150);
        assert_eq!(PriceTable::price(VehicleClass::FourWheeler, PassClass::SevenDay), 500);
    }

    #[test]
    fn test_durations_independent_of_vehicle_class() {
        assert_eq!(PriceTable::duration(PassClass::Single), Duration::hours(1));
        assert_eq!(PriceTable::duration(PassClass::Return), Duration::hours(24));
        assert_eq!(PriceTable::duration(PassClass::SevenDay), Duration::days(7));
    }

    #[test]
    fn test_max_uses() {
        assert_eq!(PriceTable::max_uses(PassClass::Single), 1);
        assert_eq!(PriceTable::max_uses(PassClass::Return), 2);
        assert_eq!(PriceTable::max_uses(PassClass::SevenDay), UNLIMITED_USES);
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(PriceTable::format_duration(Duration::hours(1)), "1 hour");
        assert_eq!(PriceTable::format_duration(Duration::hours(24)), "24 hours");
        assert_eq!(PriceTable::format_duration(Duration::days(7)), "7 days");
        assert_eq!(PriceTable::format_duration(Duration::hours(12)), "12 hours");
    }
}
