//! Window groups (workspaces) and the scratchpad with its dropdowns.

use crate::commands::Commands;
use crate::rules::Match;

#[derive(Debug, Clone, PartialEq)]
pub struct Group {
    pub name: &'static str,
    /// Icon-font glyph name shown in the group box.
    pub label: &'static str,
    /// Layout override; `None` means the first configured layout.
    pub layout: Option<&'static str>,
    /// Command spawned when the group is first activated.
    pub spawn: Option<String>,
    /// Windows claimed by this group.
    pub matches: Vec<Match>,
}

impl Group {
    fn new(name: &'static str, label: &'static str, matches: Vec<Match>) -> Self {
        Self {
            name,
            label,
            layout: None,
            spawn: None,
            matches,
        }
    }
}

pub fn groups(cmds: &Commands) -> Vec<Group> {
    vec![
        Group::new(
            "internet",
            "globe",
            vec![Match::class(&[
                "firefox",
                "Tor Browser",
                "Chromium",
                "Google-chrome",
                "Brave-browser",
                "vivaldi-stable",
                "qutebrowser",
                "nyxt",
            ])],
        ),
        Group {
            layout: Some("max"),
            ..Group::new(
                "gaming",
                "gamepad",
                vec![
                    Match::class(&[
                        "Wine",
                        "dolphin-emu",
                        "Lutris",
                        "Citra",
                        "SuperTuxKart",
                        "Steam",
                        "battle.net.exe",
                    ]),
                    Match::title(&["Steam", "Battle.net"]),
                ],
            )
        },
        Group::new(
            "coding",
            "keyboard",
            vec![Match::class(&[
                "Geany",
                "Atom",
                "Subl3",
                "code-oss",
                "Emacs",
                "Oomox",
                "Unity",
                "UnityHub",
                "jetbrains-studio",
            ])],
        ),
        Group::new(
            "computer",
            "folder",
            vec![Match::class(&[
                "dolphin",
                "ark",
                "Nemo",
                "pcmanfm",
                "File-roller",
                "googledocs",
                "keep",
                "calendar",
            ])],
        ),
        Group {
            spawn: Some(cmds.cli_music()),
            ..Group::new(
                "music",
                "headphones",
                vec![Match::class(&["Spotify", "youtubemusic-nativefier-040164"])],
            )
        },
        Group::new(
            "graphics",
            "camera",
            vec![Match::class(&[
                "Gimp-2.10",
                "Gimp",
                "Inkscape",
                "Flowblade",
                "digikam",
            ])],
        ),
        Group::new(
            "chat",
            "sms",
            vec![Match::class(&[
                "whatsapp-for-linux",
                "Slack",
                "discord",
                "signal",
            ])],
        ),
        Group::new(
            "sandbox",
            "layer-group",
            vec![
                Match::title(&["Celluloid"]),
                Match::class(&["vlc", "obs", "kdenlive"]),
            ],
        ),
        Group {
            spawn: Some(cmds.cli_monitor()),
            ..Group::new(
                "monitor",
                "chart-bar",
                vec![Match::class(&[
                    "virt-manager",
                    "VirtualBox Manager",
                    "VirtualBox Machine",
                    "Cypress",
                ])],
            )
        },
    ]
}

pub const SCRATCHPAD_NAME: &str = "NSP";

const DROPDOWN_WIDTH: f32 = 0.8;
const DROPDOWN_HEIGHT: f32 = 0.8;

/// A named floating window summoned and hidden by keybinding.
#[derive(Debug, Clone, PartialEq)]
pub struct Dropdown {
    pub name: &'static str,
    pub command: String,
    // fractions of the screen
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub warp_pointer: bool,
    pub on_focus_lost_hide: bool,
}

fn dropdown(name: &'static str, command: String) -> Dropdown {
    Dropdown {
        name,
        command,
        x: (1.0 - DROPDOWN_WIDTH) / 2.0,
        y: (1.0 - DROPDOWN_HEIGHT) / 2.0,
        width: DROPDOWN_WIDTH,
        height: DROPDOWN_HEIGHT,
        warp_pointer: false,
        on_focus_lost_hide: false,
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Scratchpad {
    pub name: &'static str,
    pub dropdowns: Vec<Dropdown>,
}

pub fn scratchpad(cmds: &Commands) -> Scratchpad {
    Scratchpad {
        name: SCRATCHPAD_NAME,
        dropdowns: vec![
            dropdown("terminal", cmds.terminal.clone()),
            dropdown("htop", cmds.cli_tasks()),
            dropdown("files", cmds.cli_files()),
            dropdown("music", cmds.cli_music()),
            dropdown("virtmanager", cmds.virt_manager.clone()),
            dropdown("torrent", cmds.torrent.clone()),
            dropdown("calc", cmds.calculator.clone()),
            dropdown("whatsapp", cmds.whatsapp.clone()),
            dropdown("discord", cmds.discord.clone()),
            dropdown("anki", cmds.anki.clone()),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nine_groups_with_unique_names() {
        let groups = groups(&Commands::default());
        assert_eq!(groups.len(), 9);
        let mut names: Vec<_> = groups.iter().map(|g| g.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 9);
    }

    #[test]
    fn gaming_uses_max_layout() {
        let groups = groups(&Commands::default());
        let gaming = groups.iter().find(|g| g.name == "gaming").unwrap();
        assert_eq!(gaming.layout, Some("max"));
    }

    #[test]
    fn dropdowns_are_centered() {
        let pad = scratchpad(&Commands::default());
        assert_eq!(pad.name, "NSP");
        assert_eq!(pad.dropdowns.len(), 10);
        for d in &pad.dropdowns {
            assert!((d.x - (1.0 - d.width) / 2.0).abs() < f32::EPSILON);
            assert!((d.y - (1.0 - d.height) / 2.0).abs() < f32::EPSILON);
            assert!(!d.on_focus_lost_hide);
        }
    }
}
