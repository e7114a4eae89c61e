//! Terminal rendition of the Memphis console's first-run experience: the
//! get-started wizard and the SDK example viewer.

pub mod api;
pub mod config;
pub mod error;
pub mod event;
pub mod flags;
pub mod getstarted;
pub mod input;
pub mod navigation;
pub mod sdk;
pub mod terminal;
pub mod ui;
