//! The key and mouse binding tables. Pure data: the runtime owns grabbing,
//! chord state and dispatch.

use crate::action::{Action, Direction};
use crate::commands::Commands;
use crate::group::Group;
use crate::widget::MouseButton;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Mod {
    Super,
    Shift,
    Control,
    Alt,
}

impl Mod {
    /// The X modifier name the runtime maps onto its modmask.
    pub fn as_str(self) -> &'static str {
        match self {
            Mod::Super => "mod4",
            Mod::Shift => "shift",
            Mod::Control => "control",
            Mod::Alt => "mod1",
        }
    }
}

use Mod::{Alt, Control, Shift, Super};

#[derive(Debug, Clone, PartialEq)]
pub struct KeyBinding {
    pub mods: Vec<Mod>,
    /// X keysym name, e.g. `"comma"`, `"F11"`, `"XF86AudioMute"`.
    pub key: &'static str,
    /// Fired in order when the binding triggers.
    pub actions: Vec<Action>,
    pub desc: &'static str,
}

/// A two-step binding: the outer key arms the chord, the inner bindings
/// fire within it. `sticky` keeps the chord armed until Escape.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyChord {
    pub mods: Vec<Mod>,
    pub key: &'static str,
    pub name: &'static str,
    pub sticky: bool,
    pub bindings: Vec<KeyBinding>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Binding {
    Key(KeyBinding),
    Chord(KeyChord),
}

fn key(mods: &[Mod], key: &'static str, action: Action, desc: &'static str) -> Binding {
    keys(mods, key, vec![action], desc)
}

fn keys(mods: &[Mod], key: &'static str, actions: Vec<Action>, desc: &'static str) -> Binding {
    Binding::Key(KeyBinding {
        mods: mods.to_vec(),
        key,
        actions,
        desc,
    })
}

fn inner(mods: &[Mod], key: &'static str, action: Action, desc: &'static str) -> KeyBinding {
    KeyBinding {
        mods: mods.to_vec(),
        key,
        actions: vec![action],
        desc,
    }
}

fn chord(
    mods: &[Mod],
    key: &'static str,
    name: &'static str,
    bindings: Vec<KeyBinding>,
) -> Binding {
    Binding::Chord(KeyChord {
        mods: mods.to_vec(),
        key,
        name,
        sticky: false,
        bindings,
    })
}

const DIGITS: [&str; 10] = ["1", "2", "3", "4", "5", "6", "7", "8", "9", "0"];

/// The complete binding list. `groups` drives the per-group digit keys and
/// `layout_count` the indexed layout keys; both are capped at the ten
/// digits available.
pub fn key_bindings(cmds: &Commands, groups: &[Group], layout_count: usize) -> Vec<Binding> {
    let mut bindings = vec![
        key(&[Super, Control], "d", Action::ToggleBar, "Debugging"),
        // wm control
        key(
            &[Super, Control, Shift],
            "r",
            Action::RestartWm,
            "Restart the window manager",
        ),
        key(
            &[Super, Control],
            "r",
            Action::ReloadConfig,
            "Reload the configuration",
        ),
        key(&[Super, Control], "q", Action::Quit, "Quit the window manager"),
        key(
            &[Shift],
            "Alt_L",
            Action::Spawn(cmds.dm("dm-lang")),
            "Language Switching",
        ),
        chord(
            &[Super],
            "t",
            "Toggle",
            vec![
                inner(&[], "z", Action::ToggleBar, "Toggle Zen Mode"),
                inner(&[], "s", Action::ToggleBar, "Toggle Statusbar"),
                inner(
                    &[],
                    "k",
                    Action::Spawn(cmds.dm("dm-keys toggle")),
                    "Toggle Key Grabber",
                ),
            ],
        ),
        // window management
        key(&[Super], "q", Action::CloseWindow, "Close focused Window"),
        key(&[Super], "F11", Action::ToggleFullscreen, "Toggle Fullscreen"),
        key(&[Super, Shift], "f", Action::ToggleFullscreen, "Toggle Fullscreen"),
        key(&[Super], "m", Action::ToggleMaximize, "Toggle Maximize"),
        key(&[Super], "f", Action::ToggleFloating, "Toggle Floating"),
        keys(
            &[Super, Alt],
            "m",
            vec![Action::ToggleMinimize, Action::MoveFocus(Direction::Down)],
            "Toggle Minimize",
        ),
        // focus movement
        key(
            &[Super],
            "slash",
            Action::SwitchNavigationLayer,
            "Switch navigation layer (Tiled vs Floating screens)",
        ),
        key(&[Alt], "Tab", Action::FocusNextWindow, "Move focus to next Window"),
        key(
            &[Alt, Shift],
            "Tab",
            Action::FocusPrevWindow,
            "Move focus to prev Window",
        ),
        key(
            &[Super],
            "h",
            Action::MoveFocus(Direction::Left),
            "Move focus to left Window",
        ),
        key(
            &[Super],
            "l",
            Action::MoveFocus(Direction::Right),
            "Move focus to right Window",
        ),
        key(
            &[Super],
            "j",
            Action::MoveFocus(Direction::Down),
            "Move focus to below Window",
        ),
        key(
            &[Super],
            "k",
            Action::MoveFocus(Direction::Up),
            "Move focus to above Window",
        ),
        // window shuffling
        key(
            &[Super, Shift],
            "h",
            Action::ShuffleWindow(Direction::Left),
            "Swap focused Window with the one to the left",
        ),
        key(
            &[Super, Shift],
            "l",
            Action::ShuffleWindow(Direction::Right),
            "Swap focused Window with the one to the right",
        ),
        key(
            &[Super, Shift],
            "j",
            Action::ShuffleWindow(Direction::Down),
            "Swap focused Window with the one below",
        ),
        key(
            &[Super, Shift],
            "k",
            Action::ShuffleWindow(Direction::Up),
            "Swap focused Window with the one above",
        ),
        // window resizing
        key(
            &[Super, Control],
            "h",
            Action::GrowWindow(Direction::Left),
            "Grow focused Window left",
        ),
        key(
            &[Super, Control],
            "l",
            Action::GrowWindow(Direction::Right),
            "Grow focused Window right",
        ),
        key(
            &[Super, Control],
            "j",
            Action::GrowWindow(Direction::Down),
            "Grow focused Window down",
        ),
        key(
            &[Super, Control],
            "k",
            Action::GrowWindow(Direction::Up),
            "Grow focused Window up",
        ),
        // screens
        key(&[Super], "comma", Action::PrevScreen, "Move focus to prev Screen"),
        key(&[Super], "period", Action::NextScreen, "Move focus to next Screen"),
        key(&[Super], "F1", Action::ToScreen(0), "Move focus to 1st Screen"),
        key(&[Super], "F2", Action::ToScreen(1), "Move focus to 2nd Screen"),
        key(
            &[Super, Shift],
            "comma",
            Action::MoveWindowToScreen(0),
            "Move window to 1st Screen",
        ),
        key(
            &[Super, Shift],
            "period",
            Action::MoveWindowToScreen(1),
            "Move window to 2nd Screen",
        ),
        // layouts
        key(&[Super], "space", Action::NextLayout, "Switch Layouts"),
        key(&[Super, Shift], "space", Action::PrevLayout, "Switch Layouts"),
        key(
            &[Super, Alt],
            "space",
            Action::ToLayout(0),
            "Switch to default Layout",
        ),
        key(
            &[Super],
            "equal",
            Action::NormalizeWindows,
            "Reset all window sizes",
        ),
        key(
            &[Super, Shift],
            "Return",
            Action::ToggleSplit,
            "Toggle between Split and Unsplit stack",
        ),
    ];

    // Switch to another layout with Super + Alt + #
    for (i, digit) in DIGITS.iter().copied().enumerate().take(layout_count.min(10)) {
        bindings.push(key(
            &[Super, Alt],
            digit,
            Action::ToLayout(i),
            "Switch to Layout by index",
        ));
    }

    bindings.extend([
        key(&[Super], "Tab", Action::ToggleGroup, "Toggle Workspace"),
        keys(
            &[Super],
            "F12",
            vec![Action::ToScreen(1), Action::SwitchToGroup("coding")],
            "Bring the coding group to the 2nd Screen",
        ),
        chord(
            &[Super],
            "g",
            "Groups",
            vec![
                inner(&[], "h", Action::PrevGroup, "Move to the group on the left"),
                inner(&[], "l", Action::NextGroup, "Move to the group on the right"),
            ],
        ),
    ]);

    // Switch to another group with Super + #
    // Send current window to another group with Super + Shift + #
    for (group, digit) in groups.iter().zip(DIGITS.iter().copied()) {
        bindings.push(key(
            &[Super],
            digit,
            Action::SwitchToGroup(group.name),
            "Switch to Group",
        ));
        bindings.push(key(
            &[Super, Shift],
            digit,
            Action::MoveWindowToGroup(group.name),
            "Send window to Group",
        ));
    }

    bindings.extend([
        // scratchpads
        key(
            &[Super],
            "grave",
            Action::ToggleDropdown("terminal"),
            "Terminal Scratchpad",
        ),
        key(
            &[Super],
            "e",
            Action::ToggleDropdown("files"),
            "File Manager Scratchpad",
        ),
        key(
            &[Control, Alt],
            "Delete",
            Action::ToggleDropdown("htop"),
            "Htop Scratchpad",
        ),
        chord(
            &[Super],
            "s",
            "Scratchpads",
            vec![
                inner(&[], "a", Action::ToggleDropdown("anki"), "Anki Scratchpad"),
                inner(&[], "c", Action::ToggleDropdown("calc"), "Calculator Scratchpad"),
                inner(&[], "d", Action::ToggleDropdown("discord"), "Discord Scratchpad"),
                inner(&[], "h", Action::ToggleDropdown("htop"), "Htop Scratchpad"),
                inner(&[], "m", Action::ToggleDropdown("music"), "Music Scratchpad"),
                inner(&[], "t", Action::ToggleDropdown("torrent"), "Torrent Scratchpad"),
                inner(
                    &[],
                    "v",
                    Action::ToggleDropdown("virtmanager"),
                    "VirtManager Scratchpad",
                ),
                inner(&[], "w", Action::ToggleDropdown("whatsapp"), "WhatsApp Scratchpad"),
            ],
        ),
        // volume and media
        key(
            &[],
            "XF86AudioRaiseVolume",
            Action::Spawn(cmds.script(&format!("set-volume.sh + {}", cmds.volume_step))),
            "Increase System Volume",
        ),
        key(
            &[],
            "XF86AudioLowerVolume",
            Action::Spawn(cmds.script(&format!("set-volume.sh - {}", cmds.volume_step))),
            "Decrease System Volume",
        ),
        key(
            &[],
            "XF86AudioMute",
            Action::Spawn(cmds.script("toggle-mute.sh")),
            "Mute",
        ),
        key(
            &[Control],
            "XF86AudioRaiseVolume",
            Action::Spawn("mpc volume +2".to_owned()),
            "Increase Player Volume",
        ),
        key(
            &[Control],
            "XF86AudioLowerVolume",
            Action::Spawn("mpc volume -2".to_owned()),
            "Decrease Player Volume",
        ),
        key(
            &[],
            "XF86AudioPrev",
            Action::Spawn("mpc prev".to_owned()),
            "Prev Song",
        ),
        key(
            &[],
            "XF86AudioNext",
            Action::Spawn("mpc next".to_owned()),
            "Next Song",
        ),
        key(
            &[],
            "XF86AudioPlay",
            Action::Spawn("mpc toggle".to_owned()),
            "Play/Pause Music",
        ),
        key(
            &[],
            "XF86AudioStop",
            Action::Spawn("mpc stop".to_owned()),
            "Stop Music",
        ),
        // dm-scripts
        chord(
            &[Super],
            "d",
            "dm-scripts",
            vec![
                inner(&[Super], "d", Action::Spawn(cmds.dm("dm-master")), "DM Master"),
                inner(&[], "w", Action::Spawn(cmds.dm("dm-wallpaper")), "DM Wallpaper"),
                inner(&[], "r", Action::Spawn(cmds.dm("dm-record")), "DM Record"),
                inner(&[], "p", Action::Spawn(cmds.dm("dm-power")), "DM Power"),
                inner(&[], "t", Action::Spawn(cmds.dm("dm-theme")), "DM Theme"),
                inner(&[], "s", Action::Spawn(cmds.dm("dm-screenshot")), "DM Screenshot"),
                inner(&[], "b", Action::Spawn(cmds.dm("dm-bookman")), "DM Bookman"),
                inner(&[], "n", Action::Spawn(cmds.dm("dm-notify")), "DM Notify"),
                inner(&[], "backslash", Action::Spawn(cmds.dm("dm-notify")), "DM Notify"),
                inner(&[], "k", Action::Spawn(cmds.dm("dm-keys")), "DM Keys"),
            ],
        ),
        // power
        key(&[Alt], "F4", Action::Spawn(cmds.dm("dm-power")), "Logout Menu"),
        chord(
            &[Super],
            "z",
            "(l)ock, (s)uspend, (p)oweroff, (r)eboot, (w)indows",
            vec![
                inner(&[], "z", Action::Spawn(cmds.dm("dm-power")), "dm-power"),
                inner(&[], "l", Action::Spawn(cmds.dm("dm-power lock")), "Lock Screen"),
                inner(
                    &[],
                    "s",
                    Action::Spawn(cmds.dm("dm-power suspend")),
                    "Suspend System",
                ),
                inner(
                    &[],
                    "p",
                    Action::Spawn(cmds.dm("dm-power poweroff")),
                    "Shutdown System",
                ),
                inner(
                    &[],
                    "r",
                    Action::Spawn(cmds.dm("dm-power reboot")),
                    "Reboot System",
                ),
                inner(
                    &[],
                    "w",
                    Action::Spawn(cmds.dm("dm-power windows")),
                    "Reboot to Windows",
                ),
            ],
        ),
        // screenshots
        key(
            &[],
            "Print",
            Action::Spawn(cmds.dm("dm-screenshot screen")),
            "Fullscreen Screenshot",
        ),
        key(
            &[Super, Shift],
            "Print",
            Action::Spawn(cmds.dm("dm-screenshot area")),
            "Selection Area Screenshot",
        ),
        key(
            &[Alt],
            "Print",
            Action::Spawn(cmds.dm("dm-screenshot window")),
            "Active Window Screenshot",
        ),
        key(
            &[Super],
            "Print",
            Action::Spawn(cmds.dm("dm-screenshot full")),
            "Full Desktop Screenshot",
        ),
        // notifications; the chord stays armed for repeated use
        Binding::Chord(KeyChord {
            mods: vec![Super],
            key: "backslash",
            name: "Notifications",
            sticky: true,
            bindings: vec![
                inner(
                    &[],
                    "backslash",
                    Action::Spawn(cmds.dm("dm-notify recent")),
                    "Show most recent Notifications",
                ),
                inner(
                    &[Super],
                    "backslash",
                    Action::Spawn(cmds.dm("dm-notify recent")),
                    "Show most recent Notifications",
                ),
                inner(
                    &[Shift],
                    "backslash",
                    Action::Spawn(cmds.dm("dm-notify recents")),
                    "Show few recent Notifications",
                ),
                inner(
                    &[],
                    "r",
                    Action::Spawn(cmds.dm("dm-notify recents")),
                    "Show few recent Notifications",
                ),
                inner(
                    &[Shift],
                    "c",
                    Action::Spawn(cmds.dm("dm-notify clear")),
                    "Clear all Notifications",
                ),
                inner(
                    &[],
                    "c",
                    Action::Spawn(cmds.dm("dm-notify close")),
                    "Clear last Notification",
                ),
                inner(
                    &[],
                    "a",
                    Action::Spawn(cmds.dm("dm-notify context")),
                    "Open last Notification",
                ),
            ],
        }),
        // launchers
        key(
            &[Control, Alt],
            "t",
            Action::Spawn(cmds.terminal.clone()),
            "Launch Terminal",
        ),
        key(
            &[Super],
            "Return",
            Action::Spawn(cmds.terminal.clone()),
            "Launch Terminal",
        ),
        key(&[Super], "c", Action::Spawn(cmds.ide.clone()), "Launch IDE"),
        key(
            &[Super],
            "b",
            Action::Spawn(cmds.web_browser.clone()),
            "Launch Web Browser",
        ),
        key(
            &[Super],
            "i",
            Action::Spawn(cmds.incognito_browser.clone()),
            "Launch Web Browser in Incognito Mode",
        ),
        key(
            &[Super],
            "p",
            Action::Spawn(cmds.pass_manager.clone()),
            "Autofill Passwords",
        ),
        key(
            &[Super],
            "r",
            Action::Spawn(cmds.launcher.clone()),
            "Launch Launcher",
        ),
        key(
            &[Super, Shift],
            "r",
            Action::Spawn(cmds.dmenu.clone()),
            "Launch dmenu",
        ),
        chord(
            &[Super],
            "o",
            "Launch",
            vec![
                inner(
                    &[],
                    "t",
                    Action::Spawn(cmds.tor_browser.clone()),
                    "Launch Tor Browser",
                ),
                inner(&[], "s", Action::Spawn(cmds.steam.clone()), "Launch Steam"),
            ],
        ),
        chord(
            &[Control, Alt],
            "o",
            "Launch Secondary",
            vec![
                inner(&[], "t", Action::Spawn(cmds.cli_text()), "Launch Text Editor"),
                inner(
                    &[],
                    "p",
                    Action::Spawn(cmds.photo_library.clone()),
                    "Launch Photo Library",
                ),
                inner(
                    &[],
                    "g",
                    Action::Spawn(cmds.image_editor.clone()),
                    "Launch Image Editor",
                ),
                inner(
                    &[],
                    "r",
                    Action::Spawn(cmds.vector_editor.clone()),
                    "Launch Vector Editor",
                ),
                inner(
                    &[],
                    "v",
                    Action::Spawn(cmds.video_editor.clone()),
                    "Launch Video Editor",
                ),
            ],
        ),
    ]);

    bindings
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseAction {
    MoveFloating,
    ResizeFloating,
    BringToFront,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MouseBinding {
    pub mods: Vec<Mod>,
    pub button: MouseButton,
    pub action: MouseAction,
    /// Drag bindings track the pointer for their whole press.
    pub drag: bool,
}

pub fn mouse_bindings() -> Vec<MouseBinding> {
    vec![
        MouseBinding {
            mods: vec![Super],
            button: MouseButton::Left,
            action: MouseAction::MoveFloating,
            drag: true,
        },
        MouseBinding {
            mods: vec![Super],
            button: MouseButton::Right,
            action: MouseAction::ResizeFloating,
            drag: true,
        },
        MouseBinding {
            mods: vec![Super],
            button: MouseButton::Middle,
            action: MouseAction::BringToFront,
            drag: false,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::group;
    use std::collections::HashSet;

    fn fixture() -> Vec<Binding> {
        let cmds = Commands::default();
        let groups = group::groups(&cmds);
        key_bindings(&cmds, &groups, 5)
    }

    #[test]
    fn top_level_combos_are_unique() {
        let mut seen = HashSet::new();
        for binding in fixture() {
            let (mut mods, key) = match binding {
                Binding::Key(k) => (k.mods, k.key),
                Binding::Chord(c) => (c.mods, c.key),
            };
            mods.sort_unstable();
            assert!(seen.insert((mods, key)), "duplicate binding on {:?}", key);
        }
    }

    #[test]
    fn every_group_gets_switch_and_send_keys() {
        let cmds = Commands::default();
        let groups = group::groups(&cmds);
        let bindings = key_bindings(&cmds, &groups, 5);

        let switches = bindings
            .iter()
            .filter(|b| {
                matches!(b, Binding::Key(k) if k.actions.iter().any(|a| matches!(a, Action::SwitchToGroup(_))))
            })
            .count();
        let sends = bindings
            .iter()
            .filter(|b| {
                matches!(b, Binding::Key(k) if k.actions.iter().any(|a| matches!(a, Action::MoveWindowToGroup(_))))
            })
            .count();

        // 9 groups -> 9 switch keys; +1 switch inside the F12 binding
        assert_eq!(switches, groups.len() + 1);
        assert_eq!(sends, groups.len());
    }

    #[test]
    fn layout_keys_never_exceed_the_digits() {
        let cmds = Commands::default();
        let groups = group::groups(&cmds);
        let bindings = key_bindings(&cmds, &groups, 30);
        let layout_keys = bindings
            .iter()
            .filter(|b| {
                matches!(b, Binding::Key(k) if k.mods == vec![Super, Alt]
                    && k.actions.iter().any(|a| matches!(a, Action::ToLayout(_))))
            })
            .count();
        // ten digit keys plus M-A-space resetting to the default layout
        assert_eq!(layout_keys, 11);
    }

    #[test]
    fn chords_are_never_empty() {
        for binding in fixture() {
            if let Binding::Chord(chord) = binding {
                assert!(!chord.bindings.is_empty(), "empty chord {:?}", chord.name);
            }
        }
    }

    #[test]
    fn only_the_notification_chord_is_sticky() {
        let sticky: Vec<_> = fixture()
            .into_iter()
            .filter_map(|b| match b {
                Binding::Chord(c) if c.sticky => Some(c.name),
                _ => None,
            })
            .collect();
        assert_eq!(sticky, vec!["Notifications"]);
    }

    #[test]
    fn media_keys_are_modifierless() {
        for binding in fixture() {
            if let Binding::Key(k) = binding {
                if k.key.starts_with("XF86Audio") && !k.mods.is_empty() {
                    assert_eq!(k.mods, vec![Control], "only mpc variants take a modifier");
                }
            }
        }
    }

    #[test]
    fn drag_bindings_use_super() {
        let mouse = mouse_bindings();
        assert_eq!(mouse.len(), 3);
        assert!(mouse.iter().all(|m| m.mods == vec![Super]));
        assert_eq!(mouse.iter().filter(|m| m.drag).count(), 2);
    }
}
