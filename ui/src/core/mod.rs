//! Platform-agnostic navigation data: catalog, paths and the menu view model.

pub mod catalog;
pub mod menu;
pub mod paths;
