//! The pieces of the host application which are not tied to a window: the
//! settings every demo is configured with, and the clock turning frame
//! timestamps into frame times.
//!
//! Every component copies its parameters on construction, there is no
//! reconfiguration while a demo runs.

pub mod settings;
pub use self::settings::{Settings, SettingsError};

pub mod time;
pub use self::time::{ClockParams, FrameClock};
