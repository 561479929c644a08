//! ANSI color highlighting with an exact inverse.

use std::fmt;
use std::str::FromStr;

use crate::{Error, Result};

/// A named terminal style, backed by one literal ANSI control sequence.
///
/// Wrapping text in a style always terminates it with the [`Style::End`] sequence, so that
/// [`clear()`] can remove every sequence the wrap introduced.
///
/// Styles can be parsed from their lowercase names. The aliases `red` (for [`Style::Fail`])
/// and `success` (for [`Style::Green`]) are also accepted.
///
/// # Examples
///
/// ```
/// use lap_log::Style;
///
/// let style: Style = "success".parse().unwrap();
/// assert_eq!(style, Style::Green);
/// assert_eq!(style.wrap("ok"), "\x1b[92mok\x1b[0m");
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub enum Style {
    /// Bright magenta, used for headers.
    Header,

    /// Bright blue, used for measurement values.
    Blue,

    /// Bright yellow.
    Warning,

    /// Bright red, used for error lines.
    Fail,

    /// Bold weight.
    Bold,

    /// Underlined text.
    Underline,

    /// Bright green, used for the final summary.
    Green,

    /// Resets all attributes. Appended after every wrap.
    End,
}

impl Style {
    /// Every recognized style, in table order.
    pub const ALL: [Self; 8] = [
        Self::Header,
        Self::Blue,
        Self::Warning,
        Self::Fail,
        Self::Bold,
        Self::Underline,
        Self::Green,
        Self::End,
    ];

    /// The literal control sequence this style emits.
    #[must_use]
    pub const fn sequence(self) -> &'static str {
        match self {
            Self::Header => "\x1b[95m",
            Self::Blue => "\x1b[94m",
            Self::Warning => "\x1b[93m",
            Self::Fail => "\x1b[91m",
            Self::Bold => "\x1b[1m",
            Self::Underline => "\x1b[4m",
            Self::Green => "\x1b[92m",
            Self::End => "\x1b[0m",
        }
    }

    /// The canonical lowercase name of this style.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Header => "header",
            Self::Blue => "blue",
            Self::Warning => "warning",
            Self::Fail => "fail",
            Self::Bold => "bold",
            Self::Underline => "underline",
            Self::Green => "green",
            Self::End => "end",
        }
    }

    /// Wraps `text` in this style. Equivalent to [`wrap(self, text)`](wrap).
    #[must_use]
    pub fn wrap(self, text: &str) -> String {
        wrap(self, text)
    }
}

impl FromStr for Style {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "header" => Ok(Self::Header),
            "blue" => Ok(Self::Blue),
            "warning" => Ok(Self::Warning),
            "fail" | "red" => Ok(Self::Fail),
            "bold" => Ok(Self::Bold),
            "underline" => Ok(Self::Underline),
            "green" | "success" => Ok(Self::Green),
            "end" => Ok(Self::End),
            _ => Err(Error::UnknownStyle { name: s.to_owned() }),
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returns `text` preceded by the sequence of `style` and followed by the [`Style::End`]
/// sequence.
#[must_use]
pub fn wrap(style: Style, text: &str) -> String {
    let mut wrapped = String::with_capacity(
        style
            .sequence()
            .len()
            .saturating_add(text.len())
            .saturating_add(Style::End.sequence().len()),
    );

    wrapped.push_str(style.sequence());
    wrapped.push_str(text);
    wrapped.push_str(Style::End.sequence());
    wrapped
}

/// Wraps `text` in the style with the given name.
///
/// # Errors
///
/// Returns [`Error::UnknownStyle`] if `style_name` is not a recognized style name.
///
/// # Examples
///
/// ```
/// use lap_log::wrap_named;
///
/// assert!(wrap_named("blue", "value").is_ok());
/// assert!(wrap_named("mauve", "value").is_err());
/// ```
pub fn wrap_named(style_name: &str, text: &str) -> Result<String> {
    let style: Style = style_name.parse()?;
    Ok(wrap(style, text))
}

/// Removes every recognized style sequence from `text`, leaving other content in order.
///
/// Removal repeats until no recognized sequence remains, so the result never contains a
/// sequence even if removing one sequence joined the halves of another. This makes the
/// function idempotent.
///
/// # Examples
///
/// ```
/// use lap_log::{Style, clear};
///
/// let line = format!("{} done", Style::Blue.wrap("12:00:00"));
/// assert_eq!(clear(&line), "12:00:00 done");
/// ```
#[must_use]
pub fn clear(text: &str) -> String {
    let mut cleared = text.to_owned();

    loop {
        let mut removed_any = false;

        for style in Style::ALL {
            if cleared.contains(style.sequence()) {
                cleared = cleared.replace(style.sequence(), "");
                removed_any = true;
            }
        }

        if !removed_any {
            return cleared;
        }
    }
}
