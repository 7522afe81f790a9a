//! Ramp/bay grid math
//!
//! Ramps are numbered 1..=total across the whole yard; each bay holds
//! `ramps_per_bay` consecutive ramps.

/// Bay containing the given ramp (both 1-based)
pub fn bay_of_ramp(ramp: u32, ramps_per_bay: u32) -> u32 {
    (ramp - 1) / ramps_per_bay + 1
}

/// Ramp numbers belonging to a bay
pub fn ramps_of_bay(bay: u32, ramps_per_bay: u32) -> std::ops::RangeInclusive<u32> {
    let first = (bay - 1) * ramps_per_bay + 1;
    first..=first + ramps_per_bay - 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bay_of_ramp_default_grid() {
        assert_eq!(bay_of_ramp(1, 4), 1);
        assert_eq!(bay_of_ramp(4, 4), 1);
        assert_eq!(bay_of_ramp(5, 4), 2);
        assert_eq!(bay_of_ramp(16, 4), 4);
    }

    #[test]
    fn test_ramps_of_bay() {
        assert_eq!(ramps_of_bay(1, 4), 1..=4);
        assert_eq!(ramps_of_bay(3, 4), 9..=12);
        assert_eq!(ramps_of_bay(2, 5), 6..=10);
    }
}
