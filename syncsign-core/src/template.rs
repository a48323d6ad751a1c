//! Templates and the wire document they compile to.

use serde::{Deserialize, Serialize};

use crate::widget::{Widget, WireItem};
use crate::{Color, LayoutResult};

/// Default interval between node polls of the hub, in milliseconds.
pub const DEFAULT_POLL_RATE_MS: u32 = 10_000;

/// Page background as sent on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Background {
    /// Page colour.
    pub bg_color: Color,
    /// Reserve the bottom strip for button labels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enable_button_zone: Option<bool>,
}

impl Default for Background {
    fn default() -> Self {
        Self {
            bg_color: Color::White,
            enable_button_zone: None,
        }
    }
}

/// Page-level render options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutOptions {
    /// Node to hub polling interval in milliseconds.
    pub poll_rate: u32,
}

/// The `layout` object of a render request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    /// Absent for partial updates, which keep the current screen content.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<Background>,
    /// Widgets in drawing order.
    pub items: Vec<WireItem>,
    /// Page options.
    pub options: LayoutOptions,
}

/// Top-level render request body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutDocument {
    /// The layout.
    pub layout: Layout,
}

/// An ordered, append-only list of widgets plus page options.
///
/// Widget order is drawing order: later widgets paint over earlier ones.
#[derive(Debug, Clone, PartialEq)]
pub struct Template {
    items: Vec<Widget>,
    background: Background,
    poll_rate: u32,
}

impl Default for Template {
    fn default() -> Self {
        Self::new()
    }
}

impl Template {
    /// Create an empty template on a white page.
    #[must_use]
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            background: Background::default(),
            poll_rate: DEFAULT_POLL_RATE_MS,
        }
    }

    /// Set the page colour.
    #[must_use]
    pub fn with_background(mut self, color: Color) -> Self {
        self.background.bg_color = color;
        self
    }

    /// Include the button-zone flag in the background.
    ///
    /// This does not add or check a [`crate::ButtonLabels`] widget; keeping
    /// the two consistent is up to the caller.
    #[must_use]
    pub fn with_button_zone(mut self, enabled: bool) -> Self {
        self.background.enable_button_zone = Some(enabled);
        self
    }

    /// Set the poll interval in milliseconds.
    #[must_use]
    pub fn with_poll_rate(mut self, poll_rate: u32) -> Self {
        self.poll_rate = poll_rate;
        self
    }

    /// Add a widget on top of everything already placed.
    pub fn append(&mut self, widget: impl Into<Widget>) {
        self.items.push(widget.into());
    }

    /// Builder form of [`Template::append`].
    #[must_use]
    pub fn with_widget(mut self, widget: impl Into<Widget>) -> Self {
        self.append(widget);
        self
    }

    /// Widgets in drawing order.
    #[must_use]
    pub fn items(&self) -> &[Widget] {
        &self.items
    }

    /// Mutable access to a placed widget, for recolouring.
    pub fn item_mut(&mut self, index: usize) -> Option<&mut Widget> {
        self.items.get_mut(index)
    }

    /// Page background.
    #[must_use]
    pub fn background(&self) -> Background {
        self.background
    }

    /// Poll interval in milliseconds.
    #[must_use]
    pub fn poll_rate(&self) -> u32 {
        self.poll_rate
    }

    /// Number of widgets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if no widgets have been placed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Build the wire document. A partial document leaves out the
    /// background so the panel keeps what it is showing.
    #[must_use]
    pub fn to_document(&self, partial: bool) -> LayoutDocument {
        LayoutDocument {
            layout: Layout {
                background: (!partial).then_some(self.background),
                items: self.items.iter().map(Widget::to_wire).collect(),
                options: LayoutOptions {
                    poll_rate: self.poll_rate,
                },
            },
        }
    }

    /// Serialize the wire document to JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn serialize(&self, partial: bool) -> LayoutResult<String> {
        tracing::trace!(items = self.items.len(), partial, "serializing template");
        Ok(serde_json::to_string(&self.to_document(partial))?)
    }
}

impl Extend<Widget> for Template {
    fn extend<T: IntoIterator<Item = Widget>>(&mut self, iter: T) {
        self.items.extend(iter);
    }
}

impl FromIterator<Widget> for Template {
    fn from_iter<T: IntoIterator<Item = Widget>>(iter: T) -> Self {
        let mut template = Self::new();
        template.extend(iter);
        template
    }
}
