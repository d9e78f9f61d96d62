//! Notes UI: the notebook, its two-pane frame and the platform glue.
//!
//! The windowing toolkit plugs in through [`FrameHost`]; [`HeadlessHost`]
//! stands in for it when running without a window.

pub mod app;
pub mod capabilities;
pub mod headless;
pub mod host;
pub mod notes;
pub mod platform;

pub use app::NotesApp;
pub use capabilities::DesktopCapabilities;
pub use headless::{HeadlessHost, WidgetCall};
pub use host::FrameHost;
pub use notes::{Note, Notebook};
pub use platform::{LinkOpener, SystemOpener};
