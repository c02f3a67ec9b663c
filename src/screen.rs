use crate::bar::{build_bar, Bar, BarRole};
use crate::commands::Commands;

/// One screen slot handed to the runtime: its top bar and nothing else.
#[derive(Debug, Clone, PartialEq)]
pub struct Screen {
    pub top: Bar,
}

/// Screens for `count` detected monitors. The first slot always exists and
/// carries the primary bar; every further monitor gets a secondary one.
/// A count of 0 (nothing flagged preferred) still provisions the first
/// slot, so the result is never empty.
pub fn assign_screens(count: usize, cmds: &Commands) -> Vec<Screen> {
    let mut screens = vec![Screen {
        top: build_bar(BarRole::Primary, cmds),
    }];

    if count > 1 {
        for _ in 0..count - 1 {
            screens.push(Screen {
                top: build_bar(BarRole::Secondary, cmds),
            });
        }
    }

    screens
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn always_at_least_one_screen() {
        let cmds = Commands::default();
        for n in 0..6 {
            assert_eq!(assign_screens(n, &cmds).len(), std::cmp::max(1, n));
        }
    }

    #[test]
    fn zero_and_one_both_give_a_single_primary() {
        let cmds = Commands::default();
        for n in [0, 1] {
            let screens = assign_screens(n, &cmds);
            assert_eq!(screens.len(), 1);
            assert_eq!(screens[0].top.role, BarRole::Primary);
        }
    }

    #[test]
    fn extra_monitors_get_secondary_bars() {
        let cmds = Commands::default();
        let screens = assign_screens(4, &cmds);
        assert_eq!(screens[0].top.role, BarRole::Primary);
        for screen in &screens[1..] {
            assert_eq!(screen.top.role, BarRole::Secondary);
        }
        // secondaries are structurally identical to each other
        assert_eq!(screens[1], screens[2]);
        assert_eq!(screens[2], screens[3]);
    }
}
