// SPDX-License-Identifier: MPL-2.0
//! Localizable toast message.

use crate::i18n::fluent::I18n;

/// The text displayed by a toast.
///
/// Keys are resolved through [`I18n`] at render time, so a locale switch
/// relabels a toast that is already on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToastText {
    /// Fluent message key plus interpolation arguments.
    Key {
        key: String,
        args: Vec<(String, String)>,
    },
    /// Already-localized text, displayed as is.
    Literal(String),
}

impl ToastText {
    /// Creates a message resolved from the i18n key `key`.
    pub fn key(key: impl Into<String>) -> Self {
        Self::Key {
            key: key.into(),
            args: Vec::new(),
        }
    }

    /// Creates a message displayed verbatim.
    pub fn literal(text: impl Into<String>) -> Self {
        Self::Literal(text.into())
    }

    /// Adds an argument for message interpolation.
    ///
    /// Has no effect on literal text.
    #[must_use]
    pub fn with_arg(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        if let Self::Key { args, .. } = &mut self {
            args.push((name.into(), value.into()));
        }
        self
    }

    /// Resolves the text for display in the current locale.
    #[must_use]
    pub fn resolve(&self, i18n: &I18n) -> String {
        match self {
            Self::Key { key, args } if args.is_empty() => i18n.tr(key),
            Self::Key { key, args } => {
                let args: Vec<(&str, &str)> = args
                    .iter()
                    .map(|(k, v)| (k.as_str(), v.as_str()))
                    .collect();
                i18n.tr_with_args(key, &args)
            }
            Self::Literal(text) => text.clone(),
        }
    }
}

impl Default for ToastText {
    fn default() -> Self {
        Self::Literal(String::new())
    }
}

impl From<&str> for ToastText {
    fn from(text: &str) -> Self {
        Self::literal(text)
    }
}

impl From<String> for ToastText {
    fn from(text: String) -> Self {
        Self::Literal(text)
    }
}
