//! Reducer for the multi-select widget.
//!
//! All mutation goes through [`SelectState::update`]; rendering reads the
//! state through accessors and never mutates. Fetches are fenced by a
//! monotonically increasing token so stale responses cannot clobber newer
//! ones.

use std::collections::HashMap;

use indexmap::IndexSet;
use tracing::debug;

use crate::{
    event::{Effect, SelectEvent},
    options::OptionItem,
};

/// Tag the bulk checkbox keys off unless the embedder configures another.
pub const DEFAULT_BULK_TAG: &str = "newsletter";

pub struct SelectState {
    query: String,
    dropdown_open: bool,
    /// Selected values in insertion order; backspace-on-empty pops the back.
    selected: IndexSet<String>,
    /// Latest accepted batch, in service order.
    options: Vec<OptionItem>,
    /// value -> label, accumulated over every accepted batch so tags keep
    /// their labels after the dropdown filter changes.
    labels: HashMap<String, String>,
    /// Token of the most recently issued fetch. Completions carrying any
    /// other token are stale and dropped.
    latest_token: u64,
    bulk_tag: String,
    bulk_checked: bool,
    /// Exactly the values the last bulk check inserted; unchecking removes
    /// these and nothing else.
    bulk_applied: IndexSet<String>,
}

impl SelectState {
    pub fn new(bulk_tag: impl Into<String>) -> Self {
        Self {
            query: String::new(),
            dropdown_open: false,
            selected: IndexSet::new(),
            options: Vec::new(),
            labels: HashMap::new(),
            latest_token: 0,
            bulk_tag: bulk_tag.into(),
            bulk_checked: false,
            bulk_applied: IndexSet::new(),
        }
    }

    pub fn update(&mut self, event: SelectEvent) -> Vec<Effect> {
        match event {
            SelectEvent::InputClicked => {
                if self.dropdown_open {
                    self.dropdown_open = false;
                    return Vec::new();
                }

                self.dropdown_open = true;
                vec![self.issue_fetch(), Effect::FocusInput]
            }

            SelectEvent::OutsideClicked => {
                self.dropdown_open = false;
                Vec::new()
            }

            SelectEvent::QueryChanged(query) => {
                self.query = query;
                vec![self.issue_fetch()]
            }

            SelectEvent::BackspacePressed => {
                if !self.query.is_empty() {
                    return Vec::new();
                }

                match self.selected.pop() {
                    Some(value) => {
                        self.bulk_applied.shift_remove(&value);
                        vec![self.issue_fetch()]
                    }
                    None => Vec::new(),
                }
            }

            SelectEvent::OptionToggled(value) => {
                if self.selected.shift_remove(&value) {
                    self.bulk_applied.shift_remove(&value);
                } else {
                    self.selected.insert(value);
                }

                vec![self.issue_fetch()]
            }

            SelectEvent::TagRemoved(value) => {
                if !self.selected.shift_remove(&value) {
                    return Vec::new();
                }

                self.bulk_applied.shift_remove(&value);
                vec![self.issue_fetch()]
            }

            SelectEvent::BulkToggled(checked) => {
                self.bulk_checked = checked;

                if checked {
                    for option in &self.options {
                        if option.has_tag(&self.bulk_tag) {
                            self.selected.insert(option.value.clone());
                            self.bulk_applied.insert(option.value.clone());
                        }
                    }
                } else {
                    for value in self.bulk_applied.drain(..) {
                        self.selected.shift_remove(&value);
                    }
                }

                vec![self.issue_fetch()]
            }

            SelectEvent::OptionsLoaded { token, options } => {
                if token != self.latest_token {
                    debug!(token, latest = self.latest_token, "Dropping stale options response");
                    return Vec::new();
                }

                for option in &options {
                    self.labels
                        .insert(option.value.clone(), option.label.clone());
                }
                self.options = options;
                Vec::new()
            }

            SelectEvent::FetchFailed { token } => {
                if token != self.latest_token {
                    return Vec::new();
                }

                // A failed fetch only empties the current render pass.
                self.options.clear();
                Vec::new()
            }
        }
    }

    fn issue_fetch(&mut self) -> Effect {
        self.latest_token += 1;

        Effect::FetchOptions {
            token: self.latest_token,
            query: self.query.clone(),
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn dropdown_open(&self) -> bool {
        self.dropdown_open
    }

    pub fn bulk_checked(&self) -> bool {
        self.bulk_checked
    }

    /// Selected values in insertion order.
    pub fn selected_values(&self) -> impl Iterator<Item = &str> {
        self.selected.iter().map(String::as_str)
    }

    pub fn is_selected(&self, value: &str) -> bool {
        self.selected.contains(value)
    }

    pub fn options(&self) -> &[OptionItem] {
        &self.options
    }

    /// Label for a previously fetched value, falling back to the value
    /// itself if it was never seen in a batch.
    pub fn label_for<'a>(&'a self, value: &'a str) -> &'a str {
        self.labels.get(value).map(String::as_str).unwrap_or(value)
    }
}
