//! Style constants shared by bars, widgets and layouts.
//!
//! Colors are `0xRRGGBB` words, the form the X server side consumes them in.

// Palette
pub const BACKGROUND: u32 = 0x4e4b61;
pub const FOREGROUND: u32 = 0xd2ca9c;
pub const FG_DARK: u32 = 0x1a1949;
pub const INACTIVE: u32 = 0x69656d;
pub const SELECTION_ACCENT: u32 = 0x00f080;
pub const OTHER_SELECTION_ACCENT: u32 = 0x9d9784;
pub const ALERT: u32 = 0xc44536;

pub const PROMPT_BG: u32 = 0x00f080;
pub const CHORD_BG: u32 = 0xd2ca9c;

// Alternating powerline segment backgrounds.
pub const POWERLINE_EVEN: u32 = 0x3d3a4d;
pub const POWERLINE_ODD: u32 = 0x4e4b61;

// Fonts
pub const FONT_REGULAR: &str = "Ubuntu";
pub const FONT_BOLD: &str = "Ubuntu Bold";
pub const FONT_ICONS: &str = "Font Awesome 6 Free Solid";

pub const FONT_SIZE: u16 = 11;
pub const ICON_SIZE: u16 = 14;
pub const GROUP_ICON_SIZE: u16 = 16;
pub const WIDGET_PADDING: u16 = 3;

// Bar geometry
pub const BAR_HEIGHT: u16 = 24;
pub const BAR_OPACITY: f32 = 1.0;

// Tiled window styling
pub const LAYOUT_MARGIN: u16 = 4;
pub const BORDER_WIDTH: u16 = 2;
pub const BORDER_FOCUS: u32 = SELECTION_ACCENT;
pub const BORDER_NORMAL: u32 = INACTIVE;

pub const GROUP_HIGHLIGHT_METHOD: &str = "line";
