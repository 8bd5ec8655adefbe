//! MOTION sub-builder.

use tracing::{debug, trace};

use crate::core::{Frame, Motion, SharedContext};
use crate::hierarchy::format::{format_frame_time, format_value};
use crate::util::{Error, Result};

/// Keyword opening the motion block.
pub const MOTION_KEYWORD: &str = "MOTION";

/// Accumulates frames and renders the MOTION block.
#[derive(Debug)]
pub struct MotionBuilder {
    context: SharedContext,
}

impl MotionBuilder {
    pub(crate) fn new(context: SharedContext) -> Self {
        Self { context }
    }

    /// Start the motion with `period` seconds per frame.
    ///
    /// Freezes the hierarchy. Allowed once, and only after a hierarchy
    /// has been accepted.
    pub fn init(&mut self, period: f64) -> Result<&mut Self> {
        {
            let mut ctx = self.context.borrow_mut();
            if ctx.motion.is_some() {
                return Err(Error::MotionAlreadyInitialized);
            }
            if ctx.root.is_none() {
                return Err(Error::NoHierarchyForMotion);
            }
            if !period.is_finite() || period <= 0.0 {
                return Err(Error::InvalidPeriod(period));
            }

            debug!(period, channel_count = ctx.channel_count, "motion initialized");
            ctx.motion = Some(Motion::new(period));
        }
        Ok(self)
    }

    /// Append a frame. Its length must equal the hierarchy's channel count
    /// and every value must be finite.
    pub fn add_frame(&mut self, frame: impl Into<Frame>) -> Result<&mut Self> {
        let frame = frame.into();
        {
            let mut ctx = self.context.borrow_mut();
            let expected = ctx.channel_count;
            let motion = ctx.motion.as_mut().ok_or(Error::MotionNotInitialized)?;

            if frame.len() != expected {
                return Err(Error::ArityMismatch {
                    expected,
                    actual: frame.len(),
                });
            }
            if let Some((index, &value)) = frame.values.iter().enumerate().find(|(_, v)| !v.is_finite()) {
                return Err(Error::NonNumericValue { index, value });
            }

            motion.frames.push(frame);
            trace!(frame = motion.frames.len(), "frame added");
        }
        Ok(self)
    }

    /// Render the MOTION block.
    pub fn build(&self) -> Result<String> {
        let ctx = self.context.borrow();
        let motion = ctx.motion.as_ref().ok_or(Error::MotionNotInitialized)?;
        if motion.frames.is_empty() {
            return Err(Error::NoFrames);
        }
        Ok(render_motion(motion))
    }

    /// Number of frames recorded so far (0 before `init`).
    pub fn frame_count(&self) -> usize {
        self.context
            .borrow()
            .motion
            .as_ref()
            .map_or(0, Motion::frame_count)
    }

    /// Frame period, if initialized.
    pub fn period(&self) -> Option<f64> {
        self.context.borrow().motion.as_ref().map(|m| m.period)
    }
}

fn render_motion(motion: &Motion) -> String {
    let mut out = format!(
        "{MOTION_KEYWORD}\nFrames: {}\nFrame Time: {}\n",
        motion.frames.len(),
        format_frame_time(motion.period)
    );
    for frame in &motion.frames {
        for &value in &frame.values {
            out.push_str(&format_value(value));
            out.push('\t');
        }
        out.push('\n');
    }
    out
}
