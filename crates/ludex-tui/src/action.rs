/// Every user-facing operation the TUI can perform. Input events are mapped
/// to actions by [`crate::input::map_event`]; the reducer in `app::update`
/// is the only consumer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Quit,
    MoveUp,
    MoveDown,
    PageUp,
    PageDown,
    GoTop,
    GoBottom,
    /// Open the detail view for the item under the cursor.
    DrillIn,
    /// Back out of the current screen / cancel the active search.
    NavigateBack,
    StartSearch,
    /// A character typed in search mode (`'\x08'` is the backspace sentinel).
    SearchInput(char),
    SearchConfirm,
    SearchCancel,
    /// Move filter focus to the next dimension.
    CycleFilterDim,
    /// Step the focused filter to the previous selectable value.
    FilterPrevValue,
    /// Step the focused filter to the next selectable value.
    FilterNextValue,
    /// Clear filters, search, and the accumulated catalog; refetch page 1.
    ResetSession,
    /// Request the next catalog page.
    LoadMore,
    ToggleTheme,
    ToggleHelp,
    Resize(u16, u16),
    Tick,
    None,
}
