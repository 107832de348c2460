//! # Catalog
//!
//! Read-only source of selectable options.
//!
//! The option list is injected behind the [`Catalog`] trait so the filter
//! logic never cares where the records come from. Two sources exist today:
//! the builtin list and a JSON file named by `OPTIONS_PATH`. Swapping in a
//! real backing store later means implementing the trait, nothing else.
//!
//! ## Schema
//! - Fields: label (**string**, what the user searches), value (**string**,
//!   what the widget submits), tags (**list of strings**, category
//!   membership decided here at the data level)
//!
//! Uniqueness is by value. Not enforced, assumed.

use std::fs;

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// One selectable record. `tags` carries category membership so clients
/// never have to infer categories by string-matching on `value`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionItem {
    pub label: String,
    pub value: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

pub const TAG_NEWSLETTER: &str = "newsletter";
pub const TAG_ALERT: &str = "alert";

pub trait Catalog: Send + Sync {
    /// Every record, in catalog order.
    fn all(&self) -> &[OptionItem];

    /// Case-insensitive substring match against each label, preserving
    /// catalog order. The empty query matches everything.
    fn filter(&self, query: &str) -> Vec<OptionItem> {
        let query = query.to_lowercase();

        self.all()
            .iter()
            .filter(|option| option.label.to_lowercase().contains(&query))
            .cloned()
            .collect()
    }
}

pub struct StaticCatalog {
    options: Vec<OptionItem>,
}

impl StaticCatalog {
    pub fn new(options: Vec<OptionItem>) -> Self {
        Self { options }
    }

    pub fn builtin() -> Self {
        Self::new(vec![
            item("alert1", "News_Alerts1", &[TAG_ALERT]),
            item("breaking1hello", "hello_breaking_newsletter", &[TAG_NEWSLETTER]),
            item("hiii", "hi_breaking_newsletter", &[TAG_NEWSLETTER]),
            item("extra", "exta_breakding_newsletter", &[TAG_NEWSLETTER]),
            item("dasjf", "News_Alerts2", &[TAG_ALERT]),
            item("testsdf1", "News_Alerts23", &[TAG_ALERT]),
            item("checksdf2", "check_breakding_newsletter", &[TAG_NEWSLETTER]),
            item("vinay_news", "vinay_breaking_newsletter", &[TAG_NEWSLETTER]),
        ])
    }

    pub fn from_json_file(path: &str) -> Result<Self, AppError> {
        let data = fs::read_to_string(path)?;
        let options: Vec<OptionItem> = serde_json::from_str(&data)?;

        Ok(Self::new(options))
    }
}

impl Catalog for StaticCatalog {
    fn all(&self) -> &[OptionItem] {
        &self.options
    }
}

fn item(label: &str, value: &str, tags: &[&str]) -> OptionItem {
    OptionItem {
        label: label.to_string(),
        value: value.to_string(),
        tags: tags.iter().map(|tag| tag.to_string()).collect(),
    }
}
