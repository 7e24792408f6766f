//! Terminal typeahead for picking one record out of a catalog.
//!
//! [`Typeahead`] holds the interaction state (open flag, highlight, focus) and
//! filters its candidates against a query owned by the host. [`TypeaheadInput`]
//! renders it with ratatui and reports the geometry the host needs for mouse
//! hit-testing. Outside clicks reach the typeahead through a [`PointerHub`].

pub mod candidate;
pub mod config;
pub mod controller;
pub mod error;
pub mod filter;
pub mod input;
pub mod pointer;
pub mod theme;
pub mod view;
pub mod widget;

pub use candidate::{Candidate, FieldSelectors, Price, Record};
pub use config::TypeaheadConfig;
pub use controller::{KeyResponse, Typeahead, TypeaheadEvent};
pub use error::TypeaheadError;
pub use filter::filter_candidates;
pub use input::{Key, KeyEvent, Modifiers};
pub use pointer::{PointerHub, Subscription};
pub use view::{SuggestionRow, TypeaheadView};
pub use widget::{Region, RowHit, TypeaheadInput, TypeaheadLayout};
