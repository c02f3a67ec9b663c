//! Desktop-environment configuration for an X11 tiling window manager.
//!
//! The crate builds static data only: key and mouse bindings, window
//! groups, floating rules, and one status bar per detected monitor. The
//! host runtime calls [`Configuration::load`] once at startup and owns
//! everything that happens afterwards (layouts, events, rendering,
//! process spawning).

pub mod action;
pub mod bar;
pub mod commands;
pub mod config;
pub mod error;
pub mod group;
pub mod keybind;
pub mod monitor;
pub mod rules;
pub mod screen;
pub mod theme;
pub mod widget;

pub use config::Configuration;
