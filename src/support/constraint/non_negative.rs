use std::cmp::Ordering;

use num_traits::Zero;

use super::{Constrained, Constraint, ConstraintError};

/// Marker type enforcing that a value is non-negative (zero or greater).
///
/// Used for wall roughness and corrugation dimensions, where zero is a
/// meaningful limit (a hydraulically smooth wall, a flat corrugation).
///
/// # Examples
///
/// ```
/// use twine_hydraulics::support::constraint::NonNegative;
///
/// assert!(NonNegative::new(0.0).is_ok());
/// assert!(NonNegative::new(-0.05).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct NonNegative;

impl NonNegative {
    /// Constructs a [`Constrained<T, NonNegative>`] if the value is non-negative.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is negative or not a number (`NaN`).
    pub fn new<T: PartialOrd + Zero>(
        value: T,
    ) -> Result<Constrained<T, NonNegative>, ConstraintError> {
        Constrained::<T, NonNegative>::new(value)
    }
}

impl<T: PartialOrd + Zero> Constraint<T> for NonNegative {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::zero()) {
            Some(Ordering::Greater | Ordering::Equal) => Ok(()),
            Some(Ordering::Less) => Err(ConstraintError::Negative),
            None => Err(ConstraintError::NotANumber),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::{f64::Length, length::millimeter};

    #[test]
    fn roughness() {
        assert!(NonNegative::new(Length::new::<millimeter>(0.05)).is_ok());
        assert!(NonNegative::new(Length::new::<millimeter>(0.0)).is_ok());
        assert_eq!(
            NonNegative::new(Length::new::<millimeter>(-0.01)),
            Err(ConstraintError::Negative)
        );
        assert_eq!(
            NonNegative::new(Length::new::<millimeter>(f64::NAN)),
            Err(ConstraintError::NotANumber)
        );
    }
}
