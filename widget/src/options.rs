use serde::{Deserialize, Serialize};

/// One selectable record as served by the options service. `tags` is
/// category membership assigned by the data source; the bulk checkbox
/// keys off it instead of pattern-matching on `value`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionItem {
    pub label: String,
    pub value: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl OptionItem {
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|candidate| candidate == tag)
    }
}
