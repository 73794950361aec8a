//! Risk-budget position sizing

use rust_decimal::Decimal;

/// Position size and the money at stake at each level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositionPlan {
    /// Units of the instrument such that hitting the stop loses `loss_at_stop`
    pub position_size: Decimal,
    /// Money lost if the stop is hit; equals the risk budget modulo rounding
    pub loss_at_stop: Decimal,
    /// Money gained if the target is hit
    pub gain_at_target: Decimal,
}

/// Size a position so that a stop-out loses exactly `risk_amount`
///
/// Returns `None` when there is nothing to size: a zero/negative risk budget
/// or a zero stop distance. Callers must treat `None` as "not computed",
/// never as a zero-sized position.
pub fn size_position(
    risk_amount: Decimal,
    distance_to_stop: Decimal,
    distance_to_target: Decimal,
) -> Option<PositionPlan> {
    if risk_amount <= Decimal::ZERO || distance_to_stop <= Decimal::ZERO {
        return None;
    }
    let position_size = risk_amount / distance_to_stop;
    Some(PositionPlan {
        position_size,
        loss_at_stop: position_size * distance_to_stop,
        gain_at_target: position_size * distance_to_target,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_sizes_against_risk_budget() {
        let plan = size_position(dec!(200), dec!(2), dec!(3)).unwrap();
        assert_eq!(plan.position_size, dec!(100));
        assert_eq!(plan.loss_at_stop, dec!(200));
        assert_eq!(plan.gain_at_target, dec!(300));
    }

    #[test]
    fn test_loss_at_stop_reconstructs_budget() {
        // Holds even when the division does not come out round
        let plan = size_position(dec!(100), dec!(3), dec!(6)).unwrap();
        let diff = (plan.loss_at_stop - dec!(100)).abs();
        assert!(diff < dec!(0.000000001), "diff was {diff}");
    }

    #[test]
    fn test_zero_stop_distance_is_not_sized() {
        assert_eq!(size_position(dec!(200), dec!(0), dec!(3)), None);
    }

    #[test]
    fn test_zero_risk_budget_is_not_sized() {
        assert_eq!(size_position(dec!(0), dec!(2), dec!(3)), None);
    }

    #[test]
    fn test_fractional_position_size() {
        let plan = size_position(dec!(50), dec!(400), dec!(800)).unwrap();
        assert_eq!(plan.position_size, dec!(0.125));
        assert_eq!(plan.gain_at_target, dec!(100));
    }
}
