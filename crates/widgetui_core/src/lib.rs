//! Headless core for the `widgetui` component library.
//!
//! Everything a component needs before it touches the DOM lives here: design tokens, the
//! style resolvers that turn props into class lists and inline declarations, the small state
//! machines behind interactive controls, calendar and chart math, and form payload collection.
//! The crate is target-independent and has no Leptos dependency, so every rule is unit-tested
//! natively.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod action;
pub mod badge;
pub mod button;
pub mod calendar;
pub mod chart;
pub mod choice;
pub mod field;
pub mod form;
pub mod icon;
pub mod image;
pub mod layout;
pub mod markdown;
pub mod select;
pub mod style;
pub mod theme;
pub mod tokens;
pub mod transition;
pub mod typography;

pub use action::{Action, LOADING_ACTION};
pub use style::{ClassList, InlineStyle, Rgb, StyleRecord};
pub use theme::{ColorPair, LoadingTimings, Palette, ThemeConfig, ThemeError};
pub use tokens::{Color, IconSize, ParseTokenError, Size, StylePreset, Variant};
