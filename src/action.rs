/// Things the host runtime can be asked to do when a key, button or widget
/// fires. The configuration only describes the request; interpretation is
/// entirely the runtime's.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Spawn(String),

    CloseWindow,
    ToggleFullscreen,
    ToggleMaximize,
    ToggleMinimize,
    ToggleFloating,

    FocusNextWindow,
    FocusPrevWindow,
    MoveFocus(Direction),
    ShuffleWindow(Direction),
    GrowWindow(Direction),
    NormalizeWindows,
    ToggleSplit,

    NextLayout,
    PrevLayout,
    ToLayout(usize),

    NextScreen,
    PrevScreen,
    ToScreen(usize),
    MoveWindowToScreen(usize),

    ToggleGroup,
    NextGroup,
    PrevGroup,
    SwitchToGroup(&'static str),
    MoveWindowToGroup(&'static str),
    ToggleDropdown(&'static str),

    ToggleBar,
    SwitchNavigationLayer,

    RestartWm,
    ReloadConfig,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}
