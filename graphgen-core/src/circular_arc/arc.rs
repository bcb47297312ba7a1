//! Circular arcs and the intersection predicate.

use std::cmp::Ordering;

use crate::{
    Result,
    error::{ArcEndpoint, GeneratorError},
};

/// Circumference of the circle every arc lives on.
pub const CIRCUMFERENCE: f64 = 12.0;

/// Whether an arc crosses the zero point of the circle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArcKind {
    /// `start < end`: the arc covers `[start, end]` ("type 1").
    Forward,
    /// `start > end`: the arc covers `[start, C)` and `[0, end]` ("type 2").
    Wrapping,
}

/// An arc `(start, end)` on the circle of circumference [`CIRCUMFERENCE`].
///
/// # Examples
/// ```
/// use graphgen_core::{ArcKind, CircularArc};
///
/// let arc = CircularArc::new(10.0, 2.0).expect("valid arc");
/// assert_eq!(arc.kind(), ArcKind::Wrapping);
/// assert!(CircularArc::new(4.0, 4.0).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CircularArc {
    start: f64,
    end: f64,
}

impl CircularArc {
    /// Validates and creates an arc.
    ///
    /// # Errors
    /// Returns [`GeneratorError::InvalidArcEndpoint`] when an endpoint is not
    /// finite or lies outside `[0, CIRCUMFERENCE)`, and
    /// [`GeneratorError::DegenerateArc`] when `start == end`.
    pub fn new(start: f64, end: f64) -> Result<Self> {
        validate_endpoint(ArcEndpoint::Start, start)?;
        validate_endpoint(ArcEndpoint::End, end)?;
        if start.partial_cmp(&end) == Some(Ordering::Equal) {
            return Err(GeneratorError::DegenerateArc { position: start });
        }
        Ok(Self { start, end })
    }

    /// Start of the arc.
    #[must_use]
    pub const fn start(&self) -> f64 {
        self.start
    }

    /// End of the arc.
    #[must_use]
    pub const fn end(&self) -> f64 {
        self.end
    }

    /// Classifies the arc as forward or wrapping.
    #[must_use]
    pub fn kind(&self) -> ArcKind {
        if self.start < self.end {
            ArcKind::Forward
        } else {
            ArcKind::Wrapping
        }
    }
}

impl TryFrom<(f64, f64)> for CircularArc {
    type Error = GeneratorError;

    fn try_from((start, end): (f64, f64)) -> Result<Self> {
        Self::new(start, end)
    }
}

fn validate_endpoint(endpoint: ArcEndpoint, value: f64) -> Result<()> {
    if value.is_finite() && (0.0..CIRCUMFERENCE).contains(&value) {
        Ok(())
    } else {
        Err(GeneratorError::InvalidArcEndpoint {
            endpoint,
            value,
            circumference: CIRCUMFERENCE,
        })
    }
}

/// Closed-interval overlap on the real line.
fn intervals_overlap(start1: f64, end1: f64, start2: f64, end2: f64) -> bool {
    start1 <= end2 && start2 <= end1
}

/// Forward arc against the two pieces of a wrapping arc.
///
/// The upper piece is tested against the literal circumference and the lower
/// piece against zero.
fn forward_meets_wrapping(forward: &CircularArc, wrapping: &CircularArc) -> bool {
    intervals_overlap(forward.start, forward.end, wrapping.start, CIRCUMFERENCE)
        || intervals_overlap(forward.start, forward.end, 0.0, wrapping.end)
}

/// Returns `true` when two arcs share at least one point of the circle.
///
/// Endpoints are inclusive, so arcs that touch intersect. Two wrapping arcs
/// both contain the zero point and therefore always intersect. The predicate
/// is symmetric in its arguments.
///
/// # Examples
/// ```
/// use graphgen_core::{CircularArc, arcs_intersect};
///
/// let a = CircularArc::new(1.0, 3.0).expect("valid arc");
/// let b = CircularArc::new(2.0, 5.0).expect("valid arc");
/// let c = CircularArc::new(6.0, 8.0).expect("valid arc");
/// let wrap = CircularArc::new(7.0, 1.5).expect("valid arc");
/// assert!(arcs_intersect(&a, &b));
/// assert!(!arcs_intersect(&b, &c));
/// assert!(arcs_intersect(&a, &wrap));
/// ```
#[must_use]
pub fn arcs_intersect(left: &CircularArc, right: &CircularArc) -> bool {
    match (left.kind(), right.kind()) {
        (ArcKind::Forward, ArcKind::Forward) => {
            intervals_overlap(left.start, left.end, right.start, right.end)
        }
        (ArcKind::Forward, ArcKind::Wrapping) => forward_meets_wrapping(left, right),
        (ArcKind::Wrapping, ArcKind::Forward) => forward_meets_wrapping(right, left),
        (ArcKind::Wrapping, ArcKind::Wrapping) => true,
    }
}
