//! UI rendering components for the main window panes and the splash overlay

pub mod browser_pane;
pub mod editor_pane;
pub mod splash_overlay;
