//! Ordered transform schedule: which (scale, brightness, contrast) variants
//! to try, and in what order. First match wins, so order is policy.

use crate::models::Transform;
use thiserror::Error;

/// Schedule construction errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScheduleError {
    /// The transform list was empty. An empty schedule can never succeed,
    /// so this is rejected at construction rather than surfacing mid-scan.
    #[error("transform schedule must contain at least one transform")]
    Empty,
}

/// A non-empty, ordered sequence of transforms to try against one image.
///
/// The scan runner iterates this in order and short-circuits on the first
/// decode hit. There is no scoring across transforms: an earlier entry that
/// decodes always beats a later one.
#[derive(Debug, Clone, PartialEq)]
pub struct TransformSchedule {
    transforms: Vec<Transform>,
}

impl TransformSchedule {
    /// Build a schedule from an explicit transform list.
    ///
    /// # Errors
    ///
    /// Returns [`ScheduleError::Empty`] if the list is empty.
    pub fn new(transforms: Vec<Transform>) -> Result<Self, ScheduleError> {
        if transforms.is_empty() {
            return Err(ScheduleError::Empty);
        }
        Ok(Self { transforms })
    }

    /// A schedule with only the identity transform (single plain attempt).
    pub fn identity_only() -> Self {
        Self {
            transforms: vec![Transform::identity()],
        }
    }

    /// Number of transforms in the schedule.
    pub fn len(&self) -> usize {
        self.transforms.len()
    }

    /// Always false; empty schedules cannot be constructed.
    pub fn is_empty(&self) -> bool {
        self.transforms.is_empty()
    }

    /// The transforms in attempt order.
    pub fn transforms(&self) -> &[Transform] {
        &self.transforms
    }

    /// Iterate the transforms in attempt order.
    pub fn iter(&self) -> std::slice::Iter<'_, Transform> {
        self.transforms.iter()
    }
}

impl Default for TransformSchedule {
    /// The default retry cascade. The untouched image goes first (the common
    /// case should pay one attempt), then size variants, then brightness and
    /// contrast variants, then combined ones for washed-out or underexposed
    /// captures. The exact values are tuning constants, not contract.
    fn default() -> Self {
        Self {
            transforms: vec![
                Transform::identity(),
                Transform::scaled(1.5),
                Transform::scaled(0.5),
                Transform::brightened(30),
                Transform::brightened(-30),
                Transform::contrasted(150),
                Transform::contrasted(75),
                Transform::new(1.0, 30, 150),
                Transform::new(1.5, -20, 130),
                Transform::new(0.75, 20, 120),
            ],
        }
    }
}

impl<'a> IntoIterator for &'a TransformSchedule {
    type Item = &'a Transform;
    type IntoIter = std::slice::Iter<'a, Transform>;

    fn into_iter(self) -> Self::IntoIter {
        self.transforms.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_schedule_is_rejected() {
        assert_eq!(TransformSchedule::new(Vec::new()), Err(ScheduleError::Empty));
    }

    #[test]
    fn default_starts_with_identity() {
        let schedule = TransformSchedule::default();
        assert!(schedule.transforms()[0].is_identity());
        assert!(schedule.len() >= 7);
    }

    #[test]
    fn default_covers_every_variant_axis() {
        let schedule = TransformSchedule::default();
        let ts = schedule.transforms();
        assert!(ts.iter().any(|t| t.scale > 1.0 && t.brightness == 0));
        assert!(ts.iter().any(|t| t.scale < 1.0 && t.brightness == 0));
        assert!(ts.iter().any(|t| t.brightness > 0 && t.scale == 1.0));
        assert!(ts.iter().any(|t| t.brightness < 0 && t.scale == 1.0));
        assert!(ts.iter().any(|t| t.contrast > 100 && t.brightness == 0));
        assert!(ts.iter().any(|t| t.contrast < 100 && t.brightness == 0));
        // combined: more than one axis changed at once
        assert!(
            ts.iter()
                .any(|t| t.brightness != 0 && t.contrast != 100)
        );
    }

    #[test]
    fn iteration_preserves_order() {
        let schedule = TransformSchedule::new(vec![
            Transform::contrasted(150),
            Transform::identity(),
        ])
        .unwrap();
        let collected: Vec<_> = schedule.iter().copied().collect();
        assert_eq!(collected[0], Transform::contrasted(150));
        assert_eq!(collected[1], Transform::identity());
    }
}
