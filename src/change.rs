pub fn price_change(last: f64, current: f64) -> f64 {
    current - last
}

/// Percent change of `new` relative to `old`. A zero baseline is a
/// recognized edge case and yields positive infinity, not an error.
pub fn percentage_change(old: f64, new: f64) -> f64 {
    if old == 0.0 {
        return f64::INFINITY;
    }
    (new - old) / old * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percentage_change_up() {
        assert_eq!(percentage_change(100.0, 110.0), 10.0);
    }

    #[test]
    fn test_percentage_change_down() {
        assert_eq!(percentage_change(100.0, 90.0), -10.0);
    }

    #[test]
    fn test_percentage_change_zero_baseline() {
        assert_eq!(percentage_change(0.0, 42.0), f64::INFINITY);
        assert_eq!(percentage_change(0.0, 0.01), f64::INFINITY);
    }

    #[test]
    fn test_percentage_change_no_movement() {
        assert_eq!(percentage_change(50.0, 50.0), 0.0);
    }

    #[test]
    fn test_price_change() {
        assert_eq!(price_change(100.0, 110.0), 10.0);
        assert_eq!(price_change(110.0, 100.0), -10.0);
    }
}
