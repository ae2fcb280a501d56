//! UI components for SampleTask
//!
//! This module contains the widgets that draw a [`crate::flow::View`].

mod screen_view;
mod task_card;

pub use screen_view::ScreenView;
pub use task_card::TaskCard;
