use log::info;
use serde::Deserialize;

use crate::error::{Error, Result};

const DEFAULT: &str = r#"
terminal = "alacritty"
web_browser = "qutebrowser"
incognito_browser = "qutebrowser --target private-window"
tor_browser = "torbrowser-launcher"
ide = "emacsclient -c -a 'emacs'"
file_manager = "pcmanfm"
steam = "/usr/bin/steam-runtime %U"

launcher = "rofi -show drun"
dmenu = "dmenu_run"
pass_manager = "rofi-pass"
virt_manager = "virt-manager"
torrent = "transmission-gtk"
calculator = "gnome-calculator"
anki = "anki"

photo_library = "digikam"
image_editor = "gimp"
vector_editor = "inkscape"
video_editor = "kdenlive"

whatsapp = "whatsapp-for-linux"
discord = "discord"

script_dir = "~/.local/bin/"
dm_script_dir = "~/.local/bin/dm-scripts/"

volume_step = 3
languages = ["us", "ru"]
time_format = "%l:%M %p"
date_format = "%a, %d %b %Y"
network_interface = "eno1"
"#;

/// External programs and per-user knobs referenced by bindings, groups and
/// widgets. Loaded from `wmrc.toml` in the working directory when present,
/// otherwise the built-in defaults above are used.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Commands {
    pub terminal: String,
    pub web_browser: String,
    pub incognito_browser: String,
    pub tor_browser: String,
    pub ide: String,
    pub file_manager: String,
    pub steam: String,

    pub launcher: String,
    pub dmenu: String,
    pub pass_manager: String,
    pub virt_manager: String,
    pub torrent: String,
    pub calculator: String,
    pub anki: String,

    pub photo_library: String,
    pub image_editor: String,
    pub vector_editor: String,
    pub video_editor: String,

    pub whatsapp: String,
    pub discord: String,

    pub script_dir: String,
    pub dm_script_dir: String,

    pub volume_step: u8,
    pub languages: Vec<String>,
    pub time_format: String,
    pub date_format: String,
    pub network_interface: String,
}

impl Commands {
    pub fn load() -> Result<Self> {
        const FILE: &str = "wmrc.toml";
        let commands = match std::fs::read(FILE) {
            Ok(bytes) => {
                info!("use {}", FILE);
                let s = String::from_utf8(bytes).map_err(|_| Error::InvalidConfig {
                    reason: "ill-formed UTF-8".to_owned(),
                })?;
                toml::from_str(&s).map_err(|e| Error::InvalidConfig {
                    reason: format!("{}", e),
                })?
            }
            Err(_) => Self::default(),
        };
        Ok(commands)
    }

    /// A program run inside the configured terminal.
    pub fn in_terminal(&self, program: &str) -> String {
        format!("{} -e {}", self.terminal, program)
    }

    pub fn cli_files(&self) -> String {
        self.in_terminal("vifmrun")
    }
    pub fn cli_music(&self) -> String {
        self.in_terminal("ncmpcpp")
    }
    pub fn cli_text(&self) -> String {
        self.in_terminal("vim")
    }
    pub fn cli_audio(&self) -> String {
        self.in_terminal("alsamixer")
    }
    pub fn cli_monitor(&self) -> String {
        self.in_terminal("btop")
    }
    pub fn cli_tasks(&self) -> String {
        self.in_terminal("htop")
    }

    /// Full command line for one of the user's helper scripts.
    pub fn script(&self, name_and_args: &str) -> String {
        format!("{}{}", expand_user(&self.script_dir), name_and_args)
    }

    /// Full command line for one of the dm-scripts menus.
    pub fn dm(&self, name_and_args: &str) -> String {
        format!("{}{}", expand_user(&self.dm_script_dir), name_and_args)
    }
}

impl Default for Commands {
    fn default() -> Self {
        info!("default commands are used");
        toml::from_str(DEFAULT).expect("Default commands are wrong")
    }
}

/// Replace a leading `~/` with `$HOME/`. Paths are kept verbatim when HOME
/// is unset; the shell spawning the command gets to deal with them then.
fn expand_user(path: &str) -> String {
    match path.strip_prefix("~/") {
        Some(rest) => match std::env::var("HOME") {
            Ok(home) => format!("{}/{}", home, rest),
            Err(_) => path.to_owned(),
        },
        None => path.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_commands_parse() {
        let cmds = Commands::default();
        assert_eq!(cmds.volume_step, 3);
        assert_eq!(cmds.languages, vec!["us".to_owned(), "ru".to_owned()]);
        assert_eq!(cmds.dmenu, "dmenu_run");
    }

    #[test]
    fn terminal_wrapping() {
        let cmds = Commands::default();
        assert_eq!(cmds.cli_tasks(), "alacritty -e htop");
    }

    #[test]
    fn script_paths_expand_home() {
        let cmds = Commands::default();
        let cmd = cmds.dm("dm-power lock");
        assert!(cmd.ends_with("/.local/bin/dm-scripts/dm-power lock") || cmd.starts_with("~/"));
    }
}
