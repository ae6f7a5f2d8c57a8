// UI module for wt-cli
//
// Console rendering only. Nothing here touches settings or time zones.

pub mod table;

pub use table::Table;
