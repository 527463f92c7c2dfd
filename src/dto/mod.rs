//! Page documents returned by the dashboard loaders and the query strings
//! they accept.
//!
//! Every page carries an optional `error`. When it is set the entity lists
//! are empty and any pagination block is zeroed, so the UI can render the
//! page frame and a banner without special cases.

pub mod account;
pub mod reports;
pub mod services;
pub mod settings;
pub mod tenants;

/// Behaviour shared by all page documents.
pub trait PageData: Default + serde::Serialize {
    /// Empty page reporting `message` as its load error.
    fn failed(message: impl Into<String>) -> Self;

    /// Load error carried by the page, if any.
    fn error(&self) -> Option<&str>;
}

macro_rules! page_data {
    ($($name:ty),+ $(,)?) => {
        $(
            impl $crate::dto::PageData for $name {
                fn failed(message: impl Into<String>) -> Self {
                    Self {
                        error: Some(message.into()),
                        ..Default::default()
                    }
                }

                fn error(&self) -> Option<&str> {
                    self.error.as_deref()
                }
            }
        )+
    };
}

pub(crate) use page_data;
