//! Terminal front end: pulls render scenes from the game, draws them with
//! ratatui and maps key presses to choices.

pub mod app;
pub mod controller;
pub mod ui;
