//! Console markup in task descriptions.
//!
//! Descriptions may carry style tags in square brackets, the way rich-style
//! consoles write them: `[red]Downloading...` or `[bold green]Processing...[/]`.
//! Opening tags at the start of the description set the style; closing tags
//! (`[/]`, `[/red]`) at the end are dropped. Brackets that do not form a tag
//! are kept as text.
//!
//! # Examples
//!
//! ```rust
//! use lockstep::progress::Markup;
//!
//! let markup = Markup::parse("[bold red]Downloading...[/]");
//! assert_eq!(markup.plain(), "Downloading...");
//! assert_eq!(markup.styles(), ["bold", "red"]);
//!
//! // `on <colour>` sets the background.
//! let markup = Markup::parse("[bold red on white]Downloading...");
//! assert_eq!(markup.styles(), ["bold", "red", "on_white"]);
//!
//! let literal = Markup::parse("[1/3] Processing");
//! assert_eq!(literal.plain(), "[1/3] Processing");
//! ```

use console::Style;

/// A description split into its style words and its plain text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Markup {
    styles: Vec<String>,
    text: String,
}

impl Markup {
    /// Parse a description.
    pub fn parse(input: &str) -> Self {
        let mut styles = Vec::new();
        let mut rest = input;

        while let Some((tag, after)) = split_tag(rest) {
            if tag.starts_with('/') {
                rest = after;
                continue;
            }
            push_style_words(&mut styles, tag);
            rest = after;
        }

        let mut text = rest;
        while let Some(stripped) = strip_closing_tag(text) {
            text = stripped;
        }

        Self {
            styles,
            text: text.to_string(),
        }
    }

    /// Get the text without markup.
    pub fn plain(&self) -> &str {
        &self.text
    }

    /// Get the style words, in the order they appeared.
    pub fn styles(&self) -> &[String] {
        &self.styles
    }

    /// Build the [`Style`] described by the tags.
    ///
    /// Words console does not know are ignored. The style targets stderr,
    /// where the bars are drawn.
    pub fn style(&self) -> Style {
        Style::from_dotted_str(&self.styles.join(".")).for_stderr()
    }

    /// Render the text with its style applied.
    ///
    /// Colours are only emitted when console detects support for them on stderr.
    pub fn render(&self) -> String {
        if self.styles.is_empty() {
            return self.text.clone();
        }
        self.style().apply_to(&self.text).to_string()
    }
}

/// Append the words of one tag, turning `on <colour>` into `on_<colour>`.
fn push_style_words(styles: &mut Vec<String>, tag: &str) {
    let mut words = tag.split_whitespace().map(str::to_lowercase);
    while let Some(word) = words.next() {
        if word == "on" {
            // A dangling `on` has no colour to apply.
            if let Some(colour) = words.next() {
                styles.push(format!("on_{colour}"));
            }
            continue;
        }
        styles.push(word);
    }
}

/// Split a leading `[tag]` from `input`, returning the tag body and the rest.
fn split_tag(input: &str) -> Option<(&str, &str)> {
    let body = input.strip_prefix('[')?;
    let end = body.find(']')?;
    let tag = &body[..end];
    if !is_tag(tag) {
        return None;
    }
    Some((tag.trim(), &body[end + 1..]))
}

/// Strip a trailing `[/...]` closing tag from `input`.
fn strip_closing_tag(input: &str) -> Option<&str> {
    let body = input.strip_suffix(']')?;
    let start = body.rfind("[/")?;
    let tag = &body[start + 1..];
    if !is_tag(tag) {
        return None;
    }
    Some(&input[..start])
}

fn is_tag(tag: &str) -> bool {
    let words = tag.strip_prefix('/').unwrap_or(tag);
    if tag.starts_with('/') && words.trim().is_empty() {
        return true;
    }
    let mut chars = words.trim().chars();
    // Tags start with a letter, which keeps counters such as `[1/3]` as text.
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == ' ')
}
