// SPDX-License-Identifier: MPL-2.0
//! Inline status line at the bottom of the window.
//!
//! The status is sticky: it always reflects the current application state
//! or the outcome of the last operation, with no auto-dismiss timer.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::typography;
use crate::ui::theming;
use iced::widget::text;
use iced::{Color, Element};

/// Tone of a status message, selecting its color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Neutral,
    Success,
    Error,
}

impl Severity {
    fn color(self) -> Color {
        match self {
            Severity::Neutral => theming::muted_text_color(),
            Severity::Success => theming::success_text_color(),
            Severity::Error => theming::error_text_color(),
        }
    }
}

/// A localized status message with its severity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    severity: Severity,
    key: &'static str,
    args: Vec<(&'static str, String)>,
}

impl StatusMessage {
    pub fn neutral(key: &'static str) -> Self {
        Self {
            severity: Severity::Neutral,
            key,
            args: Vec::new(),
        }
    }

    pub fn success(key: &'static str) -> Self {
        Self {
            severity: Severity::Success,
            key,
            args: Vec::new(),
        }
    }

    pub fn error(key: &'static str) -> Self {
        Self {
            severity: Severity::Error,
            key,
            args: Vec::new(),
        }
    }

    /// Attaches Fluent arguments (e.g. the saved file path).
    pub fn with_args(mut self, args: Vec<(&'static str, String)>) -> Self {
        self.args = args;
        self
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn key(&self) -> &'static str {
        self.key
    }

    /// Resolves the message through the i18n layer.
    pub fn resolve(&self, i18n: &I18n) -> String {
        if self.args.is_empty() {
            i18n.tr(self.key)
        } else {
            let refs: Vec<(&str, &str)> = self
                .args
                .iter()
                .map(|(name, value)| (*name, value.as_str()))
                .collect();
            i18n.tr_with_args(self.key, &refs)
        }
    }
}

impl Default for StatusMessage {
    fn default() -> Self {
        Self::neutral("status-empty-prompt")
    }
}

/// Contextual data needed to render the status line.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub status: &'a StatusMessage,
}

/// Render the status line.
pub fn view<'a, Message: 'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    text(ctx.status.resolve(ctx.i18n))
        .size(typography::BODY_SM)
        .color(ctx.status.severity().color())
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_status_is_the_neutral_prompt() {
        let status = StatusMessage::default();
        assert_eq!(status.severity(), Severity::Neutral);
        assert_eq!(status.key(), "status-empty-prompt");
    }

    #[test]
    fn constructors_set_severity() {
        assert_eq!(
            StatusMessage::success("status-generated").severity(),
            Severity::Success
        );
        assert_eq!(
            StatusMessage::error("status-save-failed").severity(),
            Severity::Error
        );
    }

    #[test]
    fn resolve_substitutes_arguments() {
        let i18n = I18n::default();
        let status = StatusMessage::success("status-saved")
            .with_args(vec![("path", "/tmp/qr_code_example.com.png".to_string())]);
        assert!(status.resolve(&i18n).contains("/tmp/qr_code_example.com.png"));
    }

    #[test]
    fn severity_colors_are_distinct() {
        assert_ne!(Severity::Neutral.color(), Severity::Error.color());
        assert_ne!(Severity::Success.color(), Severity::Error.color());
    }
}
