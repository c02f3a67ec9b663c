//! Window matchers and the floating-window ruleset.

/// Matches a window by class, title and/or EWMH window type. Lists within
/// one field are alternatives; fields present together must all match.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Match {
    pub wm_class: Vec<&'static str>,
    pub title: Vec<&'static str>,
    pub wm_type: Vec<&'static str>,
}

impl Match {
    pub fn class(classes: &[&'static str]) -> Self {
        Self {
            wm_class: classes.to_vec(),
            ..Self::default()
        }
    }

    pub fn title(titles: &[&'static str]) -> Self {
        Self {
            title: titles.to_vec(),
            ..Self::default()
        }
    }

    pub fn wm_type(types: &[&'static str]) -> Self {
        Self {
            wm_type: types.to_vec(),
            ..Self::default()
        }
    }

    pub fn class_and_title(class: &'static str, title: &'static str) -> Self {
        Self {
            wm_class: vec![class],
            title: vec![title],
            ..Self::default()
        }
    }
}

/// Windows the runtime should float instead of tiling. The first two
/// entries are the conventional defaults; the rest are app-specific.
pub fn float_rules() -> Vec<Match> {
    vec![
        Match::wm_type(&["utility", "notification", "toolbar", "splash", "dialog"]),
        Match::class(&["file_progress", "confirm", "download", "error"]),
        Match::class(&["ssh-askpass"]),
        // gitk
        Match::class(&["confirmreset"]),
        Match::class(&["makebranch"]),
        Match::class(&["maketag"]),
        Match::title(&["branchdialog"]),
        // GPG key password entry
        Match::title(&["pinentry"]),
        // Steam
        Match::class_and_title("Steam", "Friends List"),
        Match::class_and_title("Steam", "News"),
        Match::class_and_title("Steam", "Guard"),
        Match::class_and_title("Steam", "Screenshot Uploader"),
        Match::class(&["Nitrogen"]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_come_first() {
        let rules = float_rules();
        assert!(!rules[0].wm_type.is_empty());
        assert!(rules[0].wm_type.contains(&"dialog"));
    }

    #[test]
    fn pinentry_floats_by_title() {
        let rules = float_rules();
        assert!(rules
            .iter()
            .any(|m| m.title.contains(&"pinentry") && m.wm_class.is_empty()));
    }

    #[test]
    fn steam_dialogs_need_class_and_title() {
        let rules = float_rules();
        let steam: Vec<_> = rules
            .iter()
            .filter(|m| m.wm_class.contains(&"Steam"))
            .collect();
        assert_eq!(steam.len(), 4);
        assert!(steam.iter().all(|m| !m.title.is_empty()));
    }
}
