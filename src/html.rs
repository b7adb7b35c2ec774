//! Shared HTML layout for server-rendered pages.

use maud::{DOCTYPE, Markup, html};

/// The name shown in page titles and the header.
pub const APP_NAME: &str = "Finos";

pub const LINK_STYLE: &str = "text-white/70 hover:text-white font-medium transition";

pub const LINK_CURRENT_STYLE: &str = "text-white font-medium underline underline-offset-4";

/// Wrap `content` in a full HTML document titled `title`.
pub fn base(title: &str, content: &Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en"
        {
            head
            {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " - " (APP_NAME) }
            }

            body class="min-h-screen bg-slate-50"
            {
                (content)
            }
        }
    }
}
