//! Bar descriptors: the ordered widget list for each screen role. Order is
//! load-bearing, it is the left-to-right placement the runtime renders.

use crate::commands::Commands;
use crate::theme;
use crate::widget::{self, Widget};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarRole {
    Primary,
    Secondary,
}

impl BarRole {
    /// Host-facing spelling. Unknown names get the secondary bar rather
    /// than an error.
    pub fn from_name(name: &str) -> Self {
        match name {
            "primary" | "main" => BarRole::Primary,
            _ => BarRole::Secondary,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub role: BarRole,
    pub widgets: Vec<Widget>,
    pub height: u16,
    pub background: u32,
    pub opacity: f32,
}

/// One powerline segment: a separator carrying the segment background,
/// then whatever `f` produces in that background/foreground. Alternating
/// the background by index gives the chevron effect.
pub fn power_line<F>(index: usize, f: F) -> Vec<Widget>
where
    F: FnOnce(u32, u32) -> Vec<Widget>,
{
    let bg = if index % 2 == 0 {
        theme::POWERLINE_EVEN
    } else {
        theme::POWERLINE_ODD
    };
    let mut segment = vec![widget::separator_colored(6, bg)];
    segment.extend(f(bg, theme::FOREGROUND));
    segment
}

pub fn build_bar(role: BarRole, cmds: &Commands) -> Bar {
    let widgets = match role {
        BarRole::Primary => primary_widgets(cmds),
        BarRole::Secondary => secondary_widgets(cmds),
    };
    Bar {
        role,
        widgets,
        height: theme::BAR_HEIGHT,
        background: theme::BACKGROUND,
        opacity: theme::BAR_OPACITY,
    }
}

fn primary_widgets(cmds: &Commands) -> Vec<Widget> {
    let mut widgets = vec![
        widget::separator(6),
        widget::prompt(),
        widget::chord_hint(),
        widget::clock(cmds),
        widget::layout_icon(),
        widget::group_box(),
        widget::separator(40),
        widget::window_name(),
    ];
    widgets.extend(power_line(1, |bg, fg| widget::network(cmds, bg, fg)));
    widgets.extend(power_line(2, |bg, fg| widget::memory(bg, fg)));
    widgets.extend(power_line(3, |bg, fg| widget::thermals(bg, fg)));
    widgets.extend(power_line(4, |bg, fg| widget::volume(cmds, bg, fg)));
    widgets.extend(power_line(5, |bg, fg| widget::date(cmds, bg, fg)));
    widgets.push(widget::keyboard_layout(cmds));
    widgets.push(widget::sys_tray());
    widgets
}

fn secondary_widgets(cmds: &Commands) -> Vec<Widget> {
    let mut widgets = vec![
        widget::separator(6),
        widget::clock(cmds),
        widget::layout_icon(),
        widget::group_box(),
        widget::separator(40),
        widget::window_name(),
    ];
    widgets.extend(power_line(1, |bg, fg| widget::network(cmds, bg, fg)));
    widgets.extend(power_line(2, |bg, fg| widget::memory(bg, fg)));
    widgets.extend(power_line(3, |bg, fg| widget::thermals(bg, fg)));
    widgets.extend(power_line(4, |bg, fg| widget::date(cmds, bg, fg)));
    widgets
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widget::WidgetKind;

    fn has_kind(bar: &Bar, pred: impl Fn(&WidgetKind) -> bool) -> bool {
        bar.widgets.iter().any(|w| pred(&w.kind))
    }

    #[test]
    fn bars_are_deterministic() {
        let cmds = Commands::default();
        assert_eq!(
            build_bar(BarRole::Primary, &cmds),
            build_bar(BarRole::Primary, &cmds)
        );
        assert_eq!(
            build_bar(BarRole::Secondary, &cmds),
            build_bar(BarRole::Secondary, &cmds)
        );
    }

    #[test]
    fn primary_has_prompt_and_tray() {
        let bar = build_bar(BarRole::Primary, &Commands::default());
        assert!(has_kind(&bar, |k| matches!(k, WidgetKind::Prompt { .. })));
        assert!(has_kind(&bar, |k| matches!(k, WidgetKind::Systray)));
    }

    #[test]
    fn secondary_has_neither_prompt_nor_tray() {
        let bar = build_bar(BarRole::Secondary, &Commands::default());
        assert!(!has_kind(&bar, |k| matches!(k, WidgetKind::Prompt { .. })));
        assert!(!has_kind(&bar, |k| matches!(k, WidgetKind::Systray)));
    }

    #[test]
    fn power_line_leads_with_a_separator() {
        for i in 0..8 {
            let segment = power_line(i, |bg, fg| widget::memory(bg, fg));
            assert!(matches!(segment[0].kind, WidgetKind::Spacer { .. }));
            // the producer's widgets follow, in its own order
            assert_eq!(segment.len(), 1 + widget::memory(0, 0).len());
        }
    }

    #[test]
    fn power_line_alternates_backgrounds() {
        let even = power_line(2, |bg, fg| widget::memory(bg, fg));
        let odd = power_line(3, |bg, fg| widget::memory(bg, fg));
        assert_ne!(even[0].style.background, odd[0].style.background);
        // the producer receives the segment background
        assert_eq!(even[0].style.background, even[1].style.background);
    }

    #[test]
    fn unknown_role_names_read_as_secondary() {
        assert_eq!(BarRole::from_name("primary"), BarRole::Primary);
        assert_eq!(BarRole::from_name("main"), BarRole::Primary);
        assert_eq!(BarRole::from_name("secondary"), BarRole::Secondary);
        assert_eq!(BarRole::from_name("hdmi-2"), BarRole::Secondary);
    }
}
