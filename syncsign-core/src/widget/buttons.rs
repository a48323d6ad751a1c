//! Bottom button-row labels (`BOTTOM_CUSTOM_BUTTONS`).

use serde::{Deserialize, Serialize};

use crate::{LayoutError, LayoutResult};

/// Number of hardware buttons under the panel.
pub const BUTTON_SLOTS: usize = 4;
/// Longest label that fits above a button.
pub const MAX_LABEL_CHARS: usize = 17;

/// How a button label is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ButtonStyle {
    /// Dark text on the page background.
    Enabled,
    /// Light text on a filled tab.
    Reversed,
    /// Slot left blank.
    Disabled,
}

/// Labels for the bottom button row.
///
/// Slots without a label are disabled. A labelled slot is reversed when its
/// flag is set and enabled otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ButtonLabels {
    labels: Vec<String>,
    reversed: Vec<bool>,
}

impl ButtonLabels {
    /// Create labels for up to four buttons, left to right.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::TooManyButtons`] for more than four labels and
    /// [`LayoutError::LabelTooLong`] for a label over seventeen characters.
    pub fn new<I, S>(labels: I) -> LayoutResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let labels: Vec<String> = labels.into_iter().map(Into::into).collect();
        if labels.len() > BUTTON_SLOTS {
            return Err(LayoutError::TooManyButtons {
                what: "labels",
                count: labels.len(),
                max: BUTTON_SLOTS,
            });
        }
        for label in &labels {
            let len = label.chars().count();
            if len > MAX_LABEL_CHARS {
                return Err(LayoutError::LabelTooLong {
                    label: label.clone(),
                    len,
                    max: MAX_LABEL_CHARS,
                });
            }
        }
        Ok(Self {
            labels,
            reversed: Vec::new(),
        })
    }

    /// Set per-slot reversed flags, left to right.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::TooManyButtons`] for more than four flags.
    pub fn with_reversed(mut self, reversed: &[bool]) -> LayoutResult<Self> {
        if reversed.len() > BUTTON_SLOTS {
            return Err(LayoutError::TooManyButtons {
                what: "style flags",
                count: reversed.len(),
                max: BUTTON_SLOTS,
            });
        }
        self.reversed = reversed.to_vec();
        Ok(self)
    }

    /// Label and style of each of the four slots.
    #[must_use]
    pub fn slots(&self) -> [ButtonLabel; BUTTON_SLOTS] {
        std::array::from_fn(|idx| match self.labels.get(idx) {
            Some(title) => ButtonLabel {
                title: title.clone(),
                style: if self.reversed.get(idx).copied().unwrap_or(false) {
                    ButtonStyle::Reversed
                } else {
                    ButtonStyle::Enabled
                },
            },
            None => ButtonLabel {
                title: String::new(),
                style: ButtonStyle::Disabled,
            },
        })
    }

    pub(crate) fn to_data(&self) -> ButtonLabelsData {
        ButtonLabelsData {
            list: self.slots().to_vec(),
        }
    }
}

/// One button slot on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ButtonLabel {
    /// Label text.
    pub title: String,
    /// Drawing style.
    pub style: ButtonStyle,
}

/// Wire payload of a `BOTTOM_CUSTOM_BUTTONS` item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ButtonLabelsData {
    /// Always four slots.
    pub list: Vec<ButtonLabel>,
}
