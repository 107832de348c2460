//! # Multi-select widget core
//!
//! The state-transition logic of a tag-style multi-select, with no display
//! surface attached. A frontend (DOM, TUI, test harness) drives it by:
//!
//! 1. translating its native events into [`SelectEvent`]s and feeding them
//!    to [`SelectState::update`],
//! 2. executing the returned [`Effect`]s — for
//!    [`Effect::FetchOptions`] that means calling the options service (see
//!    [`client::OptionsClient`]) and feeding the outcome back in as
//!    [`SelectEvent::OptionsLoaded`] or [`SelectEvent::FetchFailed`],
//! 3. drawing [`view::render`]'s [`view::ViewModel`] however it likes.
//!
//! Every fetch carries a token; responses whose token is not the latest
//! issued are discarded, so a slow response for an old query can never
//! overwrite a fresher render.

pub mod client;
pub mod event;
pub mod options;
pub mod state;
pub mod view;

pub use event::{Effect, SelectEvent};
pub use options::OptionItem;
pub use state::{DEFAULT_BULK_TAG, SelectState};
pub use view::{ViewModel, render};
