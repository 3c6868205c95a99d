// src/gui/components/mod.rs
pub mod action_buttons;
pub mod cards;
pub mod filter_bar;
pub mod results;
pub mod results_table;
pub mod status_bar;
pub mod tabs;
