//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! - **[`app`]** — application state, keyboard and mouse event loop, pane focus
//! - **[`panes`]** — render functions for the input field, segment chips, bit
//!   grid and status bar
//! - **[`layout`]** — chip wrapping and the click hit map
//! - **[`terminal`]** — raw-mode session guard
//! - **[`theme`]** — centralized color palette used by all panes
//!
//! Construct an [`App`] around an [`Explorer`] and call [`App::run`].
//!
//! [`Explorer`]: crate::explorer::Explorer
//! [`App::run`]: app::App::run

pub mod app;
pub mod layout;
pub mod panes;
pub mod terminal;
pub mod theme;

pub use app::App;
pub use terminal::TerminalGuard;
