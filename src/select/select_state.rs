//! Select widget state
//!
//! Closed --toggle--> Open --select(v)--> Closed (value = v, callback fires)
//! Open --toggle--> Closed (value unchanged)

use std::fmt;

/// A single choice in the dropdown
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: &str, label: &str) -> Self {
        Self {
            value: value.to_string(),
            label: label.to_string(),
        }
    }
}

type ValueChangeFn = Box<dyn FnMut(&str)>;

pub struct SelectState {
    options: Vec<SelectOption>,
    value: Option<String>,
    open: bool,
    highlighted: usize,
    on_value_change: Option<ValueChangeFn>,
}

impl fmt::Debug for SelectState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectState")
            .field("options", &self.options)
            .field("value", &self.value)
            .field("open", &self.open)
            .field("highlighted", &self.highlighted)
            .field("on_value_change", &self.on_value_change.is_some())
            .finish()
    }
}

impl SelectState {
    /// Create a closed select. The option list is fixed for the widget's lifetime.
    pub fn new(options: Vec<SelectOption>, default_value: Option<&str>) -> Self {
        Self {
            options,
            value: default_value.map(str::to_string),
            open: false,
            highlighted: 0,
            on_value_change: None,
        }
    }

    /// Register the callback invoked once per committed selection
    pub fn set_on_value_change(&mut self, callback: impl FnMut(&str) + 'static) {
        self.on_value_change = Some(Box::new(callback));
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    pub fn options(&self) -> &[SelectOption] {
        &self.options
    }

    pub fn highlighted(&self) -> usize {
        self.highlighted
    }

    /// Label of the current value, if it names one of the options
    pub fn selected_label(&self) -> Option<&str> {
        let value = self.value.as_deref()?;
        self.options
            .iter()
            .find(|o| o.value == value)
            .map(|o| o.label.as_str())
    }

    pub fn open(&mut self) {
        if self.open {
            return;
        }
        self.open = true;
        self.highlighted = self
            .value
            .as_deref()
            .and_then(|v| self.options.iter().position(|o| o.value == v))
            .unwrap_or(0);
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Trigger activation
    pub fn toggle(&mut self) {
        if self.open {
            self.close();
        } else {
            self.open();
        }
    }

    /// Commit `value` and close. Re-selecting the current value still
    /// fires the callback. Returns false when closed or `value` is unknown.
    pub fn select(&mut self, value: &str) -> bool {
        if !self.open || !self.options.iter().any(|o| o.value == value) {
            return false;
        }

        self.value = Some(value.to_string());
        self.open = false;

        if let Some(callback) = self.on_value_change.as_mut() {
            callback(value);
        }
        true
    }

    pub fn highlight_next(&mut self) {
        if self.open && !self.options.is_empty() {
            self.highlighted = (self.highlighted + 1) % self.options.len();
        }
    }

    pub fn highlight_previous(&mut self) {
        if self.open && !self.options.is_empty() {
            self.highlighted = self
                .highlighted
                .checked_sub(1)
                .unwrap_or(self.options.len() - 1);
        }
    }

    /// Commit the highlighted option
    pub fn select_highlighted(&mut self) -> bool {
        match self.options.get(self.highlighted) {
            Some(option) => {
                let value = option.value.clone();
                self.select(&value)
            }
            None => false,
        }
    }
}

#[cfg(test)]
#[path = "select_state_tests.rs"]
mod select_state_tests;
