//! Pure render step: state in, view model out. Frontends draw the
//! [`ViewModel`] and never touch [`SelectState`] internals, so rendering
//! the same state twice produces identical output.

use crate::state::SelectState;

pub const PLACEHOLDER: &str = "Please select or search...";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ViewModel {
    pub dropdown_open: bool,
    pub bulk_checked: bool,
    /// Empty when anything is selected.
    pub placeholder: Option<&'static str>,
    /// Removable tags for the selection, in insertion order.
    pub tags: Vec<Tag>,
    /// Dropdown rows for the latest accepted batch, in service order.
    pub rows: Vec<Row>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tag {
    pub label: String,
    pub value: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Row {
    pub label: String,
    pub value: String,
    pub selected: bool,
}

pub fn render(state: &SelectState) -> ViewModel {
    let tags = state
        .selected_values()
        .map(|value| Tag {
            label: state.label_for(value).to_string(),
            value: value.to_string(),
        })
        .collect::<Vec<_>>();

    let rows = state
        .options()
        .iter()
        .map(|option| Row {
            label: option.label.clone(),
            value: option.value.clone(),
            selected: state.is_selected(&option.value),
        })
        .collect();

    ViewModel {
        dropdown_open: state.dropdown_open(),
        bulk_checked: state.bulk_checked(),
        placeholder: if tags.is_empty() {
            Some(PLACEHOLDER)
        } else {
            None
        },
        tags,
        rows,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        event::{Effect, SelectEvent},
        options::OptionItem,
        state::DEFAULT_BULK_TAG,
    };

    fn batch() -> Vec<OptionItem> {
        vec![
            OptionItem {
                label: "alert1".into(),
                value: "News_Alerts1".into(),
                tags: vec!["alert".into()],
            },
            OptionItem {
                label: "hiii".into(),
                value: "hi_breaking_newsletter".into(),
                tags: vec!["newsletter".into()],
            },
        ]
    }

    fn loaded_state() -> SelectState {
        let mut state = SelectState::new(DEFAULT_BULK_TAG);
        for effect in state.update(SelectEvent::InputClicked) {
            if let Effect::FetchOptions { token, .. } = effect {
                state.update(SelectEvent::OptionsLoaded {
                    token,
                    options: batch(),
                });
            }
        }
        state
    }

    #[test]
    fn render_is_idempotent_for_unchanged_state() {
        let mut state = loaded_state();
        state.update(SelectEvent::OptionToggled("hi_breaking_newsletter".into()));

        assert_eq!(render(&state), render(&state));
    }

    #[test]
    fn placeholder_shows_only_when_nothing_is_selected() {
        let mut state = loaded_state();
        assert_eq!(render(&state).placeholder, Some(PLACEHOLDER));

        state.update(SelectEvent::OptionToggled("News_Alerts1".into()));
        assert_eq!(render(&state).placeholder, None);
    }

    #[test]
    fn selected_rows_are_highlighted_and_tagged_with_labels() {
        let mut state = loaded_state();
        state.update(SelectEvent::OptionToggled("hi_breaking_newsletter".into()));

        let view = render(&state);

        assert_eq!(view.rows.len(), 2);
        assert!(!view.rows[0].selected);
        assert!(view.rows[1].selected);

        assert_eq!(
            view.tags,
            vec![Tag {
                label: "hiii".into(),
                value: "hi_breaking_newsletter".into(),
            }]
        );
    }
}
