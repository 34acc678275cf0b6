//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into three layers:
//!
//! - **[`app`]** — application state, keyboard event loop, playback control
//! - **[`panes`]** — stateless render functions for each visible pane (bars,
//!   graph, matching, narrative, status bar)
//! - **[`theme`]** — centralized color palette used by all panes
//!
//! The entry point for consumers is [`App`]: construct it with an
//! [`AlgorithmId`], the [`RunInput`] the steps were computed from, and a
//! loaded [`PlaybackController`], then call [`App::run`] to start the event
//! loop.
//!
//! [`AlgorithmId`]: crate::runners::AlgorithmId
//! [`RunInput`]: crate::runners::RunInput
//! [`PlaybackController`]: crate::playback::PlaybackController
//! [`App::run`]: app::App::run

pub mod app;
pub mod panes;
pub mod theme;

pub use app::App;
