//! Custom test assertions
//!
//! Provides domain-specific assertions for cost breakdowns.

use freight_calc::core::cost::{CostBreakdown, PricingWarning};

/// Assertions for CostBreakdown
pub trait BreakdownAssertions {
    /// Assert the grand total equals the sum of its components
    fn assert_totals_consistent(&self);

    /// Assert no warnings were raised
    fn assert_clean(&self);

    /// Assert a specific warning was raised
    fn assert_warned(&self, warning: &PricingWarning);
}

impl BreakdownAssertions for CostBreakdown {
    fn assert_totals_consistent(&self) {
        let line_sum: f64 = self.lines.iter().map(|l| l.line_cost).sum();
        assert_eq!(
            self.total_freight_cost, line_sum,
            "Freight cost does not match the sum of its lines"
        );
        assert_eq!(
            self.subtotal,
            self.total_freight_cost + self.delivery_cost + self.clearance_cost,
            "Subtotal does not match freight + delivery + clearance"
        );
        assert_eq!(
            self.total_cost,
            self.subtotal + self.total_additional_charges,
            "Total does not match subtotal + additional charges"
        );
    }

    fn assert_clean(&self) {
        assert!(
            self.warnings.is_empty(),
            "Expected no warnings, got {:?}",
            self.warnings
        );
    }

    fn assert_warned(&self, warning: &PricingWarning) {
        assert!(
            self.warnings.contains(warning),
            "Expected warning {:?}, got {:?}",
            warning,
            self.warnings
        );
    }
}

/// Assert two values are approximately equal (for floats)
#[macro_export]
macro_rules! assert_approx_eq {
    ($left:expr, $right:expr) => {
        assert_approx_eq!($left, $right, 1e-6_f64)
    };
    ($left:expr, $right:expr, $epsilon:expr) => {
        let left_val: f64 = $left as f64;
        let right_val: f64 = $right as f64;
        let diff = (left_val - right_val).abs();
        assert!(
            diff < $epsilon,
            "assertion failed: `(left ~ right)`\n  left: `{:?}`,\n right: `{:?}`,\n  diff: `{:?}` (epsilon: `{:?}`)",
            left_val,
            right_val,
            diff,
            $epsilon
        );
    };
}
