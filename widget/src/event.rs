use crate::options::OptionItem;

/// Everything that can happen to the widget, translated from whatever the
/// frontend's native events are.
#[derive(Clone, Debug, PartialEq)]
pub enum SelectEvent {
    /// The search input was clicked. Toggles the dropdown.
    InputClicked,
    /// A click landed outside the widget's container.
    OutsideClicked,
    /// The search text changed; fires on every keystroke.
    QueryChanged(String),
    /// Raw Backspace keydown in the search input. Only acts when the
    /// search text is empty.
    BackspacePressed,
    /// A dropdown row was clicked.
    OptionToggled(String),
    /// A selected tag was clicked.
    TagRemoved(String),
    /// The "select all matching" checkbox changed.
    BulkToggled(bool),
    /// A fetch issued by [`Effect::FetchOptions`] came back.
    OptionsLoaded {
        token: u64,
        options: Vec<OptionItem>,
    },
    /// A fetch issued by [`Effect::FetchOptions`] failed; rendered as zero
    /// results.
    FetchFailed { token: u64 },
}

/// Work the frontend must perform on the widget's behalf.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    /// Call `GET /options?search=<query>` and feed the outcome back with
    /// the same token.
    FetchOptions { token: u64, query: String },
    /// Move keyboard focus into the search input.
    FocusInput,
}
