//! Overlay drawing style

use crate::errors::{KitError, KitResult};
use crate::raster::Color;

/// Stripe and dash geometry, in target pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatternSettings {
    /// Stripe thickness measured along the `x + y` diagonal
    pub stripe_width: u32,
    /// Period of the stripe pattern
    pub stripe_spacing: u32,
    /// Boundary pixels drawn per dash
    pub dash_on_length: u32,
    /// Boundary pixels skipped between dashes
    pub dash_off_length: u32,
}

impl Default for PatternSettings {
    fn default() -> Self {
        PatternSettings {
            stripe_width: 6,
            stripe_spacing: 18,
            dash_on_length: 4,
            dash_off_length: 3,
        }
    }
}

impl PatternSettings {
    /// Length of one dash plus its gap
    pub fn dash_period(&self) -> u32 {
        self.dash_on_length + self.dash_off_length
    }

    /// Reject patterns that cannot be drawn
    pub fn validate(&self) -> KitResult<()> {
        if self.stripe_spacing == 0 && self.stripe_width > 0 {
            return Err(KitError::ConfigError(
                "stripe_spacing must be positive when stripe_width is set".to_string(),
            ));
        }
        if self.stripe_width > self.stripe_spacing {
            return Err(KitError::ConfigError(format!(
                "stripe_width {} exceeds stripe_spacing {}",
                self.stripe_width, self.stripe_spacing
            )));
        }
        Ok(())
    }
}

/// Colors and pattern for one overlaid region
///
/// Fixed for the duration of a composite call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleSpec {
    pub fill_color: Color,
    pub stripe_color: Color,
    pub boundary_color: Color,
    pub pattern: PatternSettings,
}

impl StyleSpec {
    pub fn new(fill_color: Color, stripe_color: Color, boundary_color: Color) -> Self {
        StyleSpec {
            fill_color,
            stripe_color,
            boundary_color,
            pattern: PatternSettings::default(),
        }
    }

    pub fn with_pattern(mut self, pattern: PatternSettings) -> Self {
        self.pattern = pattern;
        self
    }

    pub fn stripe_width(&self) -> u32 {
        self.pattern.stripe_width
    }

    pub fn stripe_spacing(&self) -> u32 {
        self.pattern.stripe_spacing
    }

    pub fn dash_on_length(&self) -> u32 {
        self.pattern.dash_on_length
    }

    pub fn dash_off_length(&self) -> u32 {
        self.pattern.dash_off_length
    }

    /// Whether target pixel `(tx, ty)` lies on a hatch stripe
    ///
    /// The phase depends on target coordinates only, so stripes of
    /// neighbouring regions line up.
    pub fn is_stripe(&self, tx: i64, ty: i64) -> bool {
        let spacing = self.pattern.stripe_spacing as i64;
        spacing > 0 && (tx + ty).rem_euclid(spacing) < self.pattern.stripe_width as i64
    }

    /// Whether the `index`-th boundary pixel in row-major order is drawn
    pub fn is_dash(&self, index: usize) -> bool {
        let period = self.pattern.dash_period() as usize;
        period > 0 && index % period < self.pattern.dash_on_length as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn style(pattern: PatternSettings) -> StyleSpec {
        StyleSpec::new(Color::new(1, 1, 1), Color::new(2, 2, 2), Color::new(3, 3, 3))
            .with_pattern(pattern)
    }

    #[test]
    fn test_stripe_phase_uses_diagonal() {
        let s = style(PatternSettings { stripe_width: 2, stripe_spacing: 5, ..Default::default() });
        assert!(s.is_stripe(0, 0));
        assert!(s.is_stripe(1, 0));
        assert!(!s.is_stripe(2, 0));
        assert!(s.is_stripe(3, 2));
        assert!(s.is_stripe(0, 6));
        // Same diagonal, same answer
        assert_eq!(s.is_stripe(7, 1), s.is_stripe(1, 7));
    }

    #[test]
    fn test_zero_spacing_disables_hatch() {
        let s = style(PatternSettings { stripe_width: 0, stripe_spacing: 0, ..Default::default() });
        assert!(!s.is_stripe(0, 0));
        assert!(s.pattern.validate().is_ok());
    }

    #[test]
    fn test_dash_pattern() {
        let s = style(PatternSettings { dash_on_length: 4, dash_off_length: 3, ..Default::default() });
        let drawn: Vec<bool> = (0..9).map(|i| s.is_dash(i)).collect();
        assert_eq!(drawn, vec![true, true, true, true, false, false, false, true, true]);
    }

    #[test]
    fn test_zero_period_draws_nothing() {
        let s = style(PatternSettings { dash_on_length: 0, dash_off_length: 0, ..Default::default() });
        assert!((0..10).all(|i| !s.is_dash(i)));
    }

    #[test]
    fn test_validate_rejects_wide_stripes() {
        let p = PatternSettings { stripe_width: 9, stripe_spacing: 4, ..Default::default() };
        assert!(p.validate().is_err());
        let p = PatternSettings { stripe_width: 2, stripe_spacing: 0, ..Default::default() };
        assert!(p.validate().is_err());
    }
}
