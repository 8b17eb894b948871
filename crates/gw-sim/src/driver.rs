//! Scripted target motion.

use gw_behavior::TargetSnapshot;
use gw_core::Frame;

/// Updates the tracked target at the start of every frame.
///
/// The player (or whatever is being chased) lives outside this framework;
/// a driver is how a headless run moves it.  Closures of the matching shape
/// implement the trait directly.
pub trait TargetDriver: Send {
    fn update(&mut self, frame: Frame, dt: f32, target: &mut TargetSnapshot);
}

impl<F> TargetDriver for F
where
    F: FnMut(Frame, f32, &mut TargetSnapshot) + Send,
{
    fn update(&mut self, frame: Frame, dt: f32, target: &mut TargetSnapshot) {
        self(frame, dt, target)
    }
}
