use itertools::Itertools;
use crate::user::User;

/// The regions a [`UserFetchWidget`](crate::widget::UserFetchWidget) draws into. \
/// The trigger itself lives with the caller, which calls [`on_trigger()`](crate::widget::UserFetchWidget::on_trigger).
///
/// Every operation may fail, e.g. when the target writes through to a file or socket.
/// Such failures are caught by the widget and reported as an unexpected error.
pub trait RenderTarget {

    /// Shows or hides the loading indicator
    fn set_loading(&mut self, loading: bool) -> anyhow::Result<()>;

    /// Puts a message into the error region, replacing any previous one
    fn show_error(&mut self, message: &str) -> anyhow::Result<()>;

    fn clear_error(&mut self) -> anyhow::Result<()>;

    /// Empties the results container
    fn clear_cards(&mut self) -> anyhow::Result<()>;

    /// Appends one user card to the results container
    fn push_card(&mut self, user: &User) -> anyhow::Result<()>;

}

impl<T: RenderTarget + ?Sized> RenderTarget for &mut T {
    fn set_loading(&mut self, loading: bool) -> anyhow::Result<()> {
        (**self).set_loading(loading)
    }

    fn show_error(&mut self, message: &str) -> anyhow::Result<()> {
        (**self).show_error(message)
    }

    fn clear_error(&mut self) -> anyhow::Result<()> {
        (**self).clear_error()
    }

    fn clear_cards(&mut self) -> anyhow::Result<()> {
        (**self).clear_cards()
    }

    fn push_card(&mut self, user: &User) -> anyhow::Result<()> {
        (**self).push_card(user)
    }
}

/// An in memory page, that can be serialized to a standalone HTML document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HtmlPage {
    pub loading: bool,
    pub error: Option<String>,
    pub cards: Vec<User>,
}

impl HtmlPage {

    pub fn new() -> Self {
        Self::default()
    }

    /// Renders a single user card
    pub fn card_html(user: &User) -> String {
        format!(
            "<div class=\"user-card\"><h3>{}</h3><p>Email: {}</p><p>City: {}</p></div>",
            escape_html(&user.name),
            escape_html(&user.email),
            escape_html(user.city())
        )
    }

    /// Serializes the current state of every region
    pub fn to_html(&self) -> String {
        let loading_style = if self.loading { "" } else { " style=\"display: none\"" };
        let error = self.error.as_deref().map(escape_html).unwrap_or_default();
        let error_style = if self.error.is_some() { "" } else { " style=\"display: none\"" };
        let cards = self.cards.iter().map(Self::card_html).join("\n");
        format!(
            "<!DOCTYPE html>\n<html>\n<head><meta charset=\"utf-8\"><title>Users</title></head>\n<body>\n\
             <div id=\"loading\"{loading_style}>Loading...</div>\n\
             <div id=\"error\"{error_style}>{error}</div>\n\
             <div id=\"users\">\n{cards}\n</div>\n\
             </body>\n</html>\n"
        )
    }

}

impl RenderTarget for HtmlPage {
    fn set_loading(&mut self, loading: bool) -> anyhow::Result<()> {
        self.loading = loading;
        Ok(())
    }

    fn show_error(&mut self, message: &str) -> anyhow::Result<()> {
        self.error = Some(message.to_string());
        Ok(())
    }

    fn clear_error(&mut self) -> anyhow::Result<()> {
        self.error = None;
        Ok(())
    }

    fn clear_cards(&mut self) -> anyhow::Result<()> {
        self.cards.clear();
        Ok(())
    }

    fn push_card(&mut self, user: &User) -> anyhow::Result<()> {
        self.cards.push(user.clone());
        Ok(())
    }
}

// Escapes text for use in element content and quoted attributes
fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
