//! The configuration artifact handed to the host runtime, assembled once
//! at startup.

use log::info;

use crate::commands::Commands;
use crate::error::Result;
use crate::group::{self, Group, Scratchpad};
use crate::keybind::{self, Binding, MouseBinding};
use crate::monitor;
use crate::rules::{self, Match};
use crate::screen::{self, Screen};
use crate::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutKind {
    MonadTall,
    Columns,
    Tile,
    Bsp,
    Max,
}

/// One entry of the layout rotation, with the shared window styling.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutChoice {
    pub kind: LayoutKind,
    pub margin: u16,
    pub border_width: u16,
    pub border_focus: u32,
    pub border_normal: u32,
}

impl LayoutChoice {
    fn new(kind: LayoutKind) -> Self {
        Self {
            kind,
            margin: theme::LAYOUT_MARGIN,
            border_width: theme::BORDER_WIDTH,
            border_focus: theme::BORDER_FOCUS,
            border_normal: theme::BORDER_NORMAL,
        }
    }
}

pub fn layouts() -> Vec<LayoutChoice> {
    vec![
        LayoutChoice::new(LayoutKind::MonadTall),
        LayoutChoice::new(LayoutKind::Columns),
        LayoutChoice::new(LayoutKind::Tile),
        LayoutChoice::new(LayoutKind::Bsp),
        LayoutChoice::new(LayoutKind::Max),
    ]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BringFrontClick {
    Always,
    FloatingOnly,
    Never,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusOnActivation {
    Smart,
    Urgent,
    Focus,
    Never,
}

/// Top-level behavior flags the runtime consults directly.
#[derive(Debug, Clone, PartialEq)]
pub struct Policies {
    pub auto_fullscreen: bool,
    pub bring_front_click: BringFrontClick,
    pub cursor_warp: bool,
    pub focus_on_window_activation: FocusOnActivation,
    pub follow_mouse_focus: bool,
    pub reconfigure_screens: bool,
    pub auto_minimize: bool,
}

impl Default for Policies {
    fn default() -> Self {
        Self {
            auto_fullscreen: true,
            bring_front_click: BringFrontClick::FloatingOnly,
            cursor_warp: false,
            focus_on_window_activation: FocusOnActivation::Smart,
            follow_mouse_focus: false,
            reconfigure_screens: true,
            auto_minimize: true,
        }
    }
}

/// Style applied to widgets that don't override it.
#[derive(Debug, Clone, PartialEq)]
pub struct WidgetDefaults {
    pub font: &'static str,
    pub font_size: u16,
    pub padding: u16,
    pub foreground: u32,
}

impl Default for WidgetDefaults {
    fn default() -> Self {
        Self {
            font: theme::FONT_REGULAR,
            font_size: theme::FONT_SIZE,
            padding: theme::WIDGET_PADDING,
            foreground: theme::FOREGROUND,
        }
    }
}

/// Everything the runtime reads at startup. Built once, never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct Configuration {
    pub monitors: usize,
    pub screens: Vec<Screen>,
    pub keys: Vec<Binding>,
    pub mouse: Vec<MouseBinding>,
    pub groups: Vec<Group>,
    pub scratchpad: Scratchpad,
    pub float_rules: Vec<Match>,
    pub layouts: Vec<LayoutChoice>,
    pub policies: Policies,
    pub widget_defaults: WidgetDefaults,
    pub commands: Commands,
}

impl Configuration {
    /// Load the command overrides, query the display for monitors and
    /// assemble the whole artifact. The display query is the only
    /// fallible-in-practice step and it degrades to one monitor on its
    /// own; errors here come from a malformed `wmrc.toml` only.
    pub fn load() -> Result<Self> {
        let commands = Commands::load()?;
        let monitors = monitor::count_preferred_monitors();
        info!("monitors = {}", monitors);
        Ok(Self::with_monitors(commands, monitors))
    }

    /// Pure assembly for a known monitor count.
    pub fn with_monitors(commands: Commands, monitors: usize) -> Self {
        let layouts = layouts();
        let groups = group::groups(&commands);
        let keys = keybind::key_bindings(&commands, &groups, layouts.len());
        let screens = screen::assign_screens(monitors, &commands);

        Self {
            monitors,
            screens,
            keys,
            mouse: keybind::mouse_bindings(),
            scratchpad: group::scratchpad(&commands),
            groups,
            float_rules: rules::float_rules(),
            layouts,
            policies: Policies::default(),
            widget_defaults: WidgetDefaults::default(),
            commands,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bar::BarRole;

    #[test]
    fn one_screen_per_monitor() {
        let config = Configuration::with_monitors(Commands::default(), 3);
        assert_eq!(config.screens.len(), 3);
        assert_eq!(config.screens[0].top.role, BarRole::Primary);
        assert_eq!(config.screens[1].top.role, BarRole::Secondary);
        assert_eq!(config.screens[2].top.role, BarRole::Secondary);
    }

    #[test]
    fn zero_monitors_still_provision_the_first_slot() {
        let config = Configuration::with_monitors(Commands::default(), 0);
        assert_eq!(config.monitors, 0);
        assert_eq!(config.screens.len(), 1);
    }

    #[test]
    fn assembly_is_deterministic() {
        let a = Configuration::with_monitors(Commands::default(), 2);
        let b = Configuration::with_monitors(Commands::default(), 2);
        assert_eq!(a, b);
    }

    #[test]
    fn widget_defaults_match_the_theme() {
        let defaults = WidgetDefaults::default();
        assert_eq!(defaults.font_size, 11);
        assert_eq!(defaults.padding, 3);
    }

    #[test]
    fn layout_rotation_starts_with_monad_tall() {
        let layouts = layouts();
        assert_eq!(layouts.len(), 5);
        assert_eq!(layouts[0].kind, LayoutKind::MonadTall);
        assert_eq!(layouts.last().unwrap().kind, LayoutKind::Max);
    }
}
