//! Column decoration: alias- and predicate-based styling overrides.
//!
//! A [`DecorationRule`] pairs a match target with visual overrides. Rules
//! are kept in an ordered list inside a [`Decorator`]; resolution is a
//! linear scan and the first matching rule wins. Multiple matches are not
//! an error: first-in-list order is the documented tie-break, so
//! resolution is deterministic for a fixed rule list.
//!
//! The match target is a tagged variant rather than duck-typed fields: a
//! rule matches either by column alias equality or by evaluating a
//! predicate against the column descriptor. A rule without a target cannot
//! be constructed.
//!
//! # Examples
//!
//! ```rust
//! use bubbletea_datatable::column::Column;
//! use bubbletea_datatable::decoration::{Decorator, DecorationRule};
//! use lipgloss_extras::prelude::*;
//!
//! #[derive(Clone)]
//! struct Row;
//!
//! let decorator: Decorator<Row> = Decorator::new(vec![
//!     DecorationRule::for_alias("status").with_width(10),
//!     DecorationRule::for_predicate(|c: &Column<Row>| c.id.starts_with("meta_"))
//!         .with_cell_style(Style::new().faint(true)),
//! ]);
//!
//! let status = Column::new("status", "Status");
//! assert!(decorator.resolve(&status).is_some());
//! ```

use std::fmt;
use std::sync::Arc;

use lipgloss_extras::prelude::*;

use crate::column::Column;

/// How a decoration rule selects the columns it applies to.
pub enum DecorationTarget<R> {
    /// Matches columns whose alias equals the given string.
    Alias(String),
    /// Matches columns for which the predicate returns `true`.
    Predicate(Arc<dyn Fn(&Column<R>) -> bool + Send + Sync>),
}

impl<R> Clone for DecorationTarget<R> {
    fn clone(&self) -> Self {
        match self {
            Self::Alias(a) => Self::Alias(a.clone()),
            Self::Predicate(f) => Self::Predicate(f.clone()),
        }
    }
}

impl<R> fmt::Debug for DecorationTarget<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Alias(a) => f.debug_tuple("Alias").field(a).finish(),
            Self::Predicate(_) => f.write_str("Predicate(..)"),
        }
    }
}

/// A styling override applied to every column its target matches.
pub struct DecorationRule<R> {
    target: DecorationTarget<R>,
    /// Style override for the column's header cell.
    pub header_style: Option<Style>,
    /// Style override for the column's body cells.
    pub cell_style: Option<Style>,
    /// Width override for the column.
    pub width: Option<usize>,
}

impl<R> DecorationRule<R> {
    /// Creates a rule matching columns by alias.
    pub fn for_alias(alias: impl Into<String>) -> Self {
        Self::new(DecorationTarget::Alias(alias.into()))
    }

    /// Creates a rule matching columns by predicate.
    pub fn for_predicate<F>(f: F) -> Self
    where
        F: Fn(&Column<R>) -> bool + Send + Sync + 'static,
    {
        Self::new(DecorationTarget::Predicate(Arc::new(f)))
    }

    fn new(target: DecorationTarget<R>) -> Self {
        Self {
            target,
            header_style: None,
            cell_style: None,
            width: None,
        }
    }

    /// Sets the header style override.
    pub fn with_header_style(mut self, style: Style) -> Self {
        self.header_style = Some(style);
        self
    }

    /// Sets the body cell style override.
    pub fn with_cell_style(mut self, style: Style) -> Self {
        self.cell_style = Some(style);
        self
    }

    /// Sets the column width override.
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = Some(width);
        self
    }

    /// Whether this rule applies to the given column.
    pub fn matches(&self, column: &Column<R>) -> bool {
        match &self.target {
            DecorationTarget::Alias(alias) => alias == &column.alias,
            DecorationTarget::Predicate(f) => f(column),
        }
    }
}

impl<R> Clone for DecorationRule<R> {
    fn clone(&self) -> Self {
        Self {
            target: self.target.clone(),
            header_style: self.header_style.clone(),
            cell_style: self.cell_style.clone(),
            width: self.width,
        }
    }
}

impl<R> fmt::Debug for DecorationRule<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DecorationRule")
            .field("target", &self.target)
            .field("width", &self.width)
            .finish()
    }
}

/// An ordered list of decoration rules with first-match resolution.
#[derive(Debug, Clone)]
pub struct Decorator<R> {
    rules: Vec<DecorationRule<R>>,
}

impl<R> Decorator<R> {
    /// Creates a decorator from an ordered rule list.
    pub fn new(rules: Vec<DecorationRule<R>>) -> Self {
        Self { rules }
    }

    /// A decorator with no rules; `resolve` always returns `None`.
    pub fn empty() -> Self {
        Self { rules: Vec::new() }
    }

    /// Returns the first rule in list order matching the column.
    pub fn resolve(&self, column: &Column<R>) -> Option<&DecorationRule<R>> {
        self.rules.iter().find(|rule| rule.matches(column))
    }

    /// Whether the decorator holds no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl<R> Default for Decorator<R> {
    fn default() -> Self {
        Self::empty()
    }
}
