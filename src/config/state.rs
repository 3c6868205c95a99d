// src/config/state.rs
use super::options::AppOptions;

/// How the result set is laid out in the central panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ResultsLayout {
    #[default]
    Cards,
    Table,
}

#[derive(Clone, Debug)]
pub struct GuiState {
    pub window_w: u32,
    pub window_h: u32,

    /// Cards or table
    pub layout: ResultsLayout,

    /// Card width in points
    pub card_width: f32,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            window_w: 1100,
            window_h: 700,
            layout: ResultsLayout::Cards,
            card_width: 230.0,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}
