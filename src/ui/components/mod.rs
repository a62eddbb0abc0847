//! Reusable UI components

pub mod dialog;
pub mod project_modal;
