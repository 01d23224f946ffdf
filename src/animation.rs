//! Transition timing: options, easing and per-frame progress.

use alloc::rc::Rc;
use core::{fmt, time::Duration};

use fade_gradient::LinearGradient;

/// A pluggable mapping from linear progress to eased progress.
///
/// Any `Fn(f64) -> f64` works. Outputs are not clamped, so overshooting
/// curves extrapolate the gradient angle while colors stay clamped by their
/// constructors. A NaN or infinite output falls back to the raw progress.
#[derive(Clone)]
pub struct Easing(Rc<dyn Fn(f64) -> f64>);

impl Easing {
    /// Wraps an easing function.
    pub fn new(easing: impl Fn(f64) -> f64 + 'static) -> Self {
        Self(Rc::new(easing))
    }

    /// The identity curve.
    #[must_use]
    pub fn linear() -> Self {
        Self::new(|progress| progress)
    }

    /// Cubic ease-in-out.
    #[must_use]
    pub fn ease_in_out() -> Self {
        Self::new(|progress| {
            if progress < 0.5 {
                4.0 * progress * progress * progress
            } else {
                1.0 - (-2.0_f64).mul_add(progress, 2.0).powi(3) / 2.0
            }
        })
    }

    /// Maps `progress` through the curve.
    #[must_use]
    pub fn apply(&self, progress: f64) -> f64 {
        let eased = (self.0)(progress);
        if eased.is_finite() { eased } else { progress }
    }
}

impl fmt::Debug for Easing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Easing").finish_non_exhaustive()
    }
}

/// Configuration for a single transition.
#[derive(Debug, Clone)]
pub struct TransitionOptions {
    /// Length of the transition, in the same unit as frame timestamps
    /// (milliseconds for browser animation frames).
    pub duration: f64,
    /// Optional easing curve applied to the linear progress.
    pub easing: Option<Easing>,
}

impl TransitionOptions {
    /// Creates options with the given duration in milliseconds and no easing.
    #[must_use]
    pub const fn new(duration: f64) -> Self {
        Self {
            duration,
            easing: None,
        }
    }

    /// Creates options from a [`Duration`].
    #[must_use]
    pub fn from_duration(duration: Duration) -> Self {
        Self::new(duration.as_secs_f64() * 1000.0)
    }

    /// Sets the easing curve.
    #[must_use]
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = Some(easing);
        self
    }
}

impl From<Duration> for TransitionOptions {
    fn from(duration: Duration) -> Self {
        Self::from_duration(duration)
    }
}

/// State of one running transition, advanced once per animation frame.
#[derive(Debug)]
pub(crate) struct Transition {
    from: LinearGradient,
    to: LinearGradient,
    duration: f64,
    easing: Option<Easing>,
    progress: f64,
    prev_timestamp: Option<f64>,
}

impl Transition {
    pub(crate) fn new(from: LinearGradient, to: LinearGradient, options: TransitionOptions) -> Self {
        Self {
            from,
            to,
            duration: options.duration,
            easing: options.easing,
            progress: 0.0,
            prev_timestamp: None,
        }
    }

    /// Moves progress forward by the time elapsed since the previous frame
    /// and returns the new linear progress.
    ///
    /// The first frame has no previous timestamp and does not move. A
    /// non-positive duration completes on the first frame with elapsed time.
    pub(crate) fn advance(&mut self, timestamp: f64) -> f64 {
        // `f64::max` drops NaN, so a NaN timestamp counts as no time passing.
        let elapsed = self
            .prev_timestamp
            .map_or(0.0, |prev| (timestamp - prev).max(0.0));

        let step = if elapsed <= 0.0 {
            0.0
        } else if self.duration > 0.0 {
            elapsed / self.duration
        } else {
            1.0
        };

        self.progress = (self.progress + step).clamp(0.0, 1.0);
        if timestamp.is_finite() {
            self.prev_timestamp = Some(timestamp);
        }
        self.progress
    }

    pub(crate) fn eased_progress(&self) -> f64 {
        self.easing
            .as_ref()
            .map_or(self.progress, |easing| easing.apply(self.progress))
    }

    /// The gradient to display at the current progress.
    pub(crate) fn gradient(&self) -> LinearGradient {
        self.from.interpolate(&self.to, self.eased_progress())
    }

    pub(crate) fn is_finished(&self) -> bool {
        self.progress >= 1.0
    }
}

#[cfg(test)]
mod tests {
    use fade_gradient::{ColorStop, Srgb};

    use super::*;

    const EPSILON: f64 = 1e-9;

    fn approx_eq(a: f64, b: f64, tol: f64) -> bool {
        (a - b).abs() <= tol
    }

    fn transition(options: TransitionOptions) -> Transition {
        let from = LinearGradient::new(0.0, [ColorStop::new(Srgb::BLACK, 0.0)]).unwrap();
        let to = LinearGradient::new(180.0, [ColorStop::new(Srgb::WHITE, 0.0)]).unwrap();
        Transition::new(from, to, options)
    }

    #[test]
    fn first_frame_does_not_advance() {
        let mut transition = transition(TransitionOptions::new(1000.0));

        assert!(approx_eq(transition.advance(5000.0), 0.0, EPSILON));
        assert!(!transition.is_finished());
    }

    #[test]
    fn progress_follows_elapsed_time() {
        let mut transition = transition(TransitionOptions::new(1000.0));

        transition.advance(100.0);
        assert!(approx_eq(transition.advance(350.0), 0.25, EPSILON));
        assert!(approx_eq(transition.advance(600.0), 0.5, EPSILON));
        assert!(approx_eq(transition.advance(2000.0), 1.0, EPSILON));
        assert!(transition.is_finished());
    }

    #[test]
    fn zero_duration_finishes_on_second_frame() {
        let mut transition = transition(TransitionOptions::new(0.0));

        assert!(approx_eq(transition.advance(10.0), 0.0, EPSILON));
        assert!(!transition.is_finished());
        assert!(approx_eq(transition.advance(26.0), 1.0, EPSILON));
        assert!(transition.is_finished());
    }

    #[test]
    fn zero_duration_waits_for_elapsed_time() {
        let mut transition = transition(TransitionOptions::new(0.0));

        transition.advance(10.0);
        assert!(approx_eq(transition.advance(10.0), 0.0, EPSILON));
        assert!(approx_eq(transition.advance(11.0), 1.0, EPSILON));
    }

    #[test]
    fn backwards_timestamps_count_as_no_time() {
        let mut transition = transition(TransitionOptions::new(100.0));

        transition.advance(50.0);
        transition.advance(75.0);
        assert!(approx_eq(transition.advance(20.0), 0.25, EPSILON));
        assert!(approx_eq(transition.advance(45.0), 0.5, EPSILON));
    }

    #[test]
    fn nan_timestamps_do_not_poison_progress() {
        let mut transition = transition(TransitionOptions::new(100.0));

        transition.advance(0.0);
        assert!(approx_eq(transition.advance(f64::NAN), 0.0, EPSILON));
        assert!(approx_eq(transition.advance(50.0), 0.5, EPSILON));
    }

    #[test]
    fn easing_remaps_progress() {
        let options = TransitionOptions::new(100.0).with_easing(Easing::new(|p| p * p));
        let mut transition = transition(options);

        transition.advance(0.0);
        transition.advance(50.0);

        assert!(approx_eq(transition.eased_progress(), 0.25, EPSILON));
        assert!(approx_eq(transition.gradient().angle(), 45.0, EPSILON));
    }

    #[test]
    fn non_finite_easing_output_falls_back() {
        let easing = Easing::new(|_| f64::NAN);

        assert!(approx_eq(easing.apply(0.3), 0.3, EPSILON));
    }

    #[test]
    fn ease_in_out_is_symmetric() {
        let easing = Easing::ease_in_out();

        assert!(approx_eq(easing.apply(0.0), 0.0, EPSILON));
        assert!(approx_eq(easing.apply(0.5), 0.5, EPSILON));
        assert!(approx_eq(easing.apply(1.0), 1.0, EPSILON));
        assert!(approx_eq(easing.apply(0.25) + easing.apply(0.75), 1.0, EPSILON));
        assert!(approx_eq(Easing::linear().apply(0.42), 0.42, EPSILON));
    }

    #[test]
    fn options_convert_durations_to_milliseconds() {
        let options = TransitionOptions::from(Duration::from_millis(1500));

        assert!(approx_eq(options.duration, 1500.0, EPSILON));
        assert!(options.easing.is_none());
    }
}
