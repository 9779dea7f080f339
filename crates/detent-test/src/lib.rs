//! Testing harness for Detent seek bars.
//!
//! - [`RecordingHost`] captures every host callback as a [`HostCall`]
//! - [`Harness`] queues host events against a seek bar and offers
//!   chainable assertions
//!
//! ```
//! use detent_test::Harness;
//! use detent_core::{Key, LayoutMetrics};
//!
//! let mut harness = Harness::new().layout(LayoutMetrics::new(200, false));
//! harness.press_key(Key::Right);
//! harness.run_animation(16.0);
//! harness.assert_progress(5);
//! ```

mod harness;
mod host;

pub use harness::{Harness, MAX_ANIMATION_FRAMES};
pub use host::{HostCall, RecordingHost};
