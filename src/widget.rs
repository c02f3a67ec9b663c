//! Widget descriptors: immutable configuration records the host runtime
//! instantiates live bar widgets from. Nothing here polls, draws or spawns;
//! callbacks only name the [`Action`] the runtime should take.

use crate::action::Action;
use crate::commands::Commands;
use crate::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Middle,
    Right,
    ScrollUp,
    ScrollDown,
}

/// Per-widget style attributes. Defaults mirror the host-facing
/// [`WidgetDefaults`](crate::config::WidgetDefaults) record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Style {
    pub font: &'static str,
    pub font_size: u16,
    pub foreground: u32,
    pub background: u32,
    pub padding: u16,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            font: theme::FONT_REGULAR,
            font_size: theme::FONT_SIZE,
            foreground: theme::FOREGROUND,
            background: theme::BACKGROUND,
            padding: theme::WIDGET_PADDING,
        }
    }
}

impl Style {
    fn bold() -> Self {
        Self {
            font: theme::FONT_BOLD,
            ..Self::default()
        }
    }

    fn icon() -> Self {
        Self {
            font: theme::FONT_ICONS,
            font_size: theme::ICON_SIZE,
            ..Self::default()
        }
    }

    fn colored(mut self, fg: u32, bg: u32) -> Self {
        self.foreground = fg;
        self.background = bg;
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum WidgetKind {
    /// Blank gap. Doubles as the powerline segment boundary.
    Spacer { width: u16 },
    /// Single glyph from the icon font.
    Icon { glyph: char },
    /// Command prompt (run-anything / password entry via the runtime).
    Prompt { prompt: String },
    /// Name of the currently active key chord.
    ChordHint,
    Clock { format: String },
    LayoutIcon { scale: f32 },
    GroupBox {
        active: u32,
        inactive: u32,
        this_screen_accent: u32,
        other_screen_accent: u32,
        urgent: u32,
        highlight_method: &'static str,
    },
    WindowName,
    KeyboardLayout { layouts: Vec<String> },
    Systray,
    Volume { step: u8 },
    Thermals { threshold: u8 },
    Memory,
    Network { interface: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Widget {
    pub kind: WidgetKind,
    pub style: Style,
    pub on_click: Vec<(MouseButton, Action)>,
}

impl Widget {
    fn new(kind: WidgetKind, style: Style) -> Self {
        Self {
            kind,
            style,
            on_click: Vec::new(),
        }
    }

    fn on(mut self, button: MouseButton, action: Action) -> Self {
        self.on_click.push((button, action));
        self
    }
}

pub fn separator(width: u16) -> Widget {
    Widget::new(WidgetKind::Spacer { width }, Style::default())
}

pub fn separator_colored(width: u16, bg: u32) -> Widget {
    let style = Style::default().colored(theme::FOREGROUND, bg);
    Widget::new(WidgetKind::Spacer { width }, style)
}

pub fn prompt() -> Widget {
    let user = std::env::var("USER").unwrap_or_else(|_| "user".to_owned());
    let host = std::env::var("HOSTNAME").unwrap_or_else(|_| "localhost".to_owned());
    let style = Style::bold().colored(theme::FG_DARK, theme::PROMPT_BG);
    Widget::new(
        WidgetKind::Prompt {
            prompt: format!("{}@{}: ", user, host),
        },
        Style { padding: 10, ..style },
    )
}

pub fn chord_hint() -> Widget {
    let style = Style::bold().colored(theme::FG_DARK, theme::CHORD_BG);
    Widget::new(WidgetKind::ChordHint, Style { padding: 10, ..style })
}

pub fn clock(cmds: &Commands) -> Widget {
    Widget::new(
        WidgetKind::Clock {
            format: cmds.time_format.clone(),
        },
        Style::bold(),
    )
}

pub fn layout_icon() -> Widget {
    Widget::new(WidgetKind::LayoutIcon { scale: 0.6 }, Style::default())
        .on(MouseButton::Left, Action::NextLayout)
        .on(MouseButton::Middle, Action::ToLayout(0))
        .on(MouseButton::Right, Action::PrevLayout)
        .on(MouseButton::ScrollUp, Action::NextLayout)
        .on(MouseButton::ScrollDown, Action::PrevLayout)
}

pub fn group_box() -> Widget {
    let style = Style {
        font: theme::FONT_ICONS,
        font_size: theme::GROUP_ICON_SIZE,
        ..Style::default()
    };
    Widget::new(
        WidgetKind::GroupBox {
            active: theme::FOREGROUND,
            inactive: theme::INACTIVE,
            this_screen_accent: theme::SELECTION_ACCENT,
            other_screen_accent: theme::OTHER_SELECTION_ACCENT,
            urgent: theme::ALERT,
            highlight_method: theme::GROUP_HIGHLIGHT_METHOD,
        },
        style,
    )
}

pub fn window_name() -> Widget {
    Widget::new(
        WidgetKind::WindowName,
        Style { padding: 0, ..Style::bold() },
    )
}

pub fn keyboard_layout(cmds: &Commands) -> Widget {
    let mut widget = Widget::new(
        WidgetKind::KeyboardLayout {
            layouts: cmds.languages.clone(),
        },
        Style::bold(),
    );
    // Clicks force a specific layout instead of cycling.
    if let Some(first) = cmds.languages.first() {
        widget = widget.on(
            MouseButton::Left,
            Action::Spawn(format!("setxkbmap {}", first)),
        );
    }
    if let Some(second) = cmds.languages.get(1) {
        widget = widget.on(
            MouseButton::Right,
            Action::Spawn(format!("setxkbmap {}", second)),
        );
    }
    widget
}

pub fn sys_tray() -> Widget {
    Widget::new(WidgetKind::Systray, Style::default())
}

fn icon(glyph: char, fg: u32, bg: u32) -> Widget {
    Widget::new(WidgetKind::Icon { glyph }, Style::icon().colored(fg, bg))
}

pub fn volume(cmds: &Commands, bg: u32, fg: u32) -> Vec<Widget> {
    vec![
        icon('\u{f028}', fg, bg),
        Widget::new(
            WidgetKind::Volume {
                step: cmds.volume_step,
            },
            Style::bold().colored(fg, bg),
        )
        .on(MouseButton::Right, Action::Spawn(cmds.cli_audio())),
    ]
}

pub fn thermals(bg: u32, fg: u32) -> Vec<Widget> {
    vec![
        icon('\u{f2c9}', fg, bg),
        Widget::new(
            WidgetKind::Thermals { threshold: 80 },
            Style::bold().colored(fg, bg),
        ),
    ]
}

pub fn memory(bg: u32, fg: u32) -> Vec<Widget> {
    vec![
        icon('\u{f538}', fg, bg),
        Widget::new(WidgetKind::Memory, Style::bold().colored(fg, bg)),
    ]
}

pub fn network(cmds: &Commands, bg: u32, fg: u32) -> Vec<Widget> {
    vec![
        icon('\u{f6ff}', fg, bg),
        Widget::new(
            WidgetKind::Network {
                interface: cmds.network_interface.clone(),
            },
            Style::bold().colored(fg, bg),
        ),
    ]
}

pub fn date(cmds: &Commands, bg: u32, fg: u32) -> Vec<Widget> {
    vec![
        icon('\u{f073}', fg, bg),
        Widget::new(
            WidgetKind::Clock {
                format: cmds.date_format.clone(),
            },
            Style::bold().colored(fg, bg),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn click_handlers_accumulate_in_order() {
        let w = layout_icon();
        assert_eq!(w.on_click.len(), 5);
        assert_eq!(w.on_click[0], (MouseButton::Left, Action::NextLayout));
        assert_eq!(w.on_click[2], (MouseButton::Right, Action::PrevLayout));
    }

    #[test]
    fn sensor_pairs_lead_with_their_icon() {
        let cmds = Commands::default();
        for pair in [
            volume(&cmds, 0x111111, 0x222222),
            thermals(0x111111, 0x222222),
            memory(0x111111, 0x222222),
            network(&cmds, 0x111111, 0x222222),
            date(&cmds, 0x111111, 0x222222),
        ] {
            assert_eq!(pair.len(), 2);
            assert!(matches!(pair[0].kind, WidgetKind::Icon { .. }));
            assert_eq!(pair[0].style.background, 0x111111);
            assert_eq!(pair[0].style.foreground, 0x222222);
        }
    }

    #[test]
    fn volume_right_click_opens_mixer() {
        let cmds = Commands::default();
        let pair = volume(&cmds, 0, 0);
        assert_eq!(
            pair[1].on_click,
            vec![(MouseButton::Right, Action::Spawn(cmds.cli_audio()))]
        );
    }
}
