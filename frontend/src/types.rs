/// Filter control values, re-read from the page on every invocation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterCriteria {
    pub property_type: String,
    pub location: String,
    /// `min-max` or `min+`; anything else only demands a listed price.
    pub price: String,
    /// `N` or `N+`, both meaning at least N.
    pub bedrooms: String,
    pub bathrooms: String,
    /// Square metres, same shape as `price`.
    pub area: String,
    pub amenities: Vec<String>,
}

/// What a property card exposes to the filter.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CardFacts {
    pub property_type: String,
    pub location: String,
    pub price: String,
    pub bedrooms: Option<u32>,
    pub bathrooms: Option<u32>,
    pub area: Option<f64>,
    /// `None` when the card does not advertise amenities at all.
    pub amenities: Option<Vec<String>>,
}

/// A property to share: its title and canonical URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SharePayload {
    pub title: String,
    pub url: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NotificationKind {
    #[default]
    Info,
    Success,
}

impl NotificationKind {
    pub fn as_str(self) -> &'static str {
        match self {
            NotificationKind::Info => "info",
            NotificationKind::Success => "success",
        }
    }

    /// Font Awesome glyph shown next to the message.
    pub fn icon(self) -> &'static str {
        match self {
            NotificationKind::Success => "fa-check-circle",
            NotificationKind::Info => "fa-info-circle",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationRequest {
    pub message: String,
    pub kind: NotificationKind,
}

impl NotificationRequest {
    pub fn new(message: impl Into<String>, kind: NotificationKind) -> Self {
        Self {
            message: message.into(),
            kind,
        }
    }
}
