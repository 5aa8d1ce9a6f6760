//! Error alerts shown to users when an HTMX request fails.
//!
//! Alerts are swapped into the `#alert-container` element of the page by the
//! htmx response-targets extension.

use maud::{Markup, html};

/// An error message with an optional explanation of how to fix it.
#[derive(Debug, Clone)]
pub struct ErrorAlert<'a> {
    pub message: &'a str,
    pub details: &'a str,
}

impl<'a> ErrorAlert<'a> {
    pub fn new(message: &'a str, details: &'a str) -> Self {
        Self { message, details }
    }

    pub fn into_html(self) -> Markup {
        html! {
            div
                role="alert"
                class="p-4 mb-4 text-sm text-red-800 rounded-lg bg-red-50
                    dark:bg-gray-800 dark:text-red-400 shadow"
            {
                p class="font-medium" { (self.message) }

                @if !self.details.is_empty() {
                    p { (self.details) }
                }

                button
                    type="button"
                    class="mt-2 underline"
                    onclick="this.parentElement.remove()"
                {
                    "Dismiss"
                }
            }
        }
    }
}
