use std::{borrow::Cow, fmt};

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref ATX_HEADING: Regex = Regex::new(r"^(#+) (.*)$").unwrap();
}

/// Unicode whitespace plus the ASCII separators U+001C..U+001F, which
/// `char::is_whitespace` leaves out.
fn is_trailing_whitespace(c: char) -> bool {
    c.is_whitespace() || ('\x1c'..='\x1f').contains(&c)
}

/// An ATX heading: a run of `#` at column 0, one space, then the text.
///
/// The level is the number of `#` and is not clamped, so `#######` gives
/// an `<h7>`. The text is emitted verbatim, without HTML escaping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Heading<'a> {
    pub level: usize,
    pub text: &'a str,
}

impl fmt::Display for Heading<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "<h{0}>{1}</h{0}>", self.level, self.text)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line<'a> {
    Heading(Heading<'a>),
    /// Anything else, with trailing whitespace removed
    Plain(&'a str),
}

impl<'a> Line<'a> {
    /// Classifies a single line. `line` must not contain its terminator.
    pub fn parse(line: &'a str) -> Self {
        match ATX_HEADING.captures(line) {
            Some(caps) => Line::Heading(Heading {
                level: caps.get(1).map_or(0, |m| m.as_str().len()),
                text: caps.get(2).map_or("", |m| m.as_str()),
            }),
            None => Line::Plain(line.trim_end_matches(is_trailing_whitespace)),
        }
    }

    pub fn is_heading(&self) -> bool {
        matches!(self, Line::Heading(_))
    }

    #[must_use]
    pub fn render(&self) -> Cow<'a, str> {
        match *self {
            Line::Heading(heading) => Cow::Owned(heading.to_string()),
            Line::Plain(text) => Cow::Borrowed(text),
        }
    }
}

impl fmt::Display for Line<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Line::Heading(heading) => heading.fmt(f),
            Line::Plain(text) => f.write_str(text),
        }
    }
}

/// Converts one line of markdown to its html counterpart.
#[must_use]
pub fn convert_line(line: &str) -> Cow<'_, str> {
    Line::parse(line).render()
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    macro_rules! convert_line_tests {
      ($($name:ident $line:expr => $expected:expr)*) => {
      $(
          #[test]
          fn $name() {
              assert_eq!($expected, convert_line($line));
          }
      )*
      }
    }

    convert_line_tests! {
      heading_level_one "# Title" => "<h1>Title</h1>"
      heading_level_three "### Sub Title" => "<h3>Sub Title</h3>"
      heading_level_seven_is_not_clamped "####### Deep" => "<h7>Deep</h7>"
      heading_with_empty_text "# " => "<h1></h1>"
      heading_keeps_extra_spaces "#  Title" => "<h1> Title</h1>"
      heading_keeps_trailing_whitespace "# Title  " => "<h1>Title  </h1>"
      heading_keeps_trailing_hashes "## Two ## hashes" => "<h2>Two ## hashes</h2>"
      heading_is_not_escaped "# a < b & c > d" => "<h1>a < b & c > d</h1>"
      heading_with_unicode_text "## Überschrift ✓" => "<h2>Überschrift ✓</h2>"
      plain_text "Just text" => "Just text"
      plain_text_trailing_whitespace "Just text \t " => "Just text"
      plain_trailing_unit_separator "text\x1f" => "text"
      plain_trailing_separators_and_feeds "text \x1c\x1d\x1e\x0c\x0b" => "text"
      plain_trailing_next_line "text\u{85}" => "text"
      plain_keeps_internal_separator "a\x1fb" => "a\x1fb"
      plain_no_space_after_hash "#NoSpace" => "#NoSpace"
      plain_only_hashes "###" => "###"
      plain_tab_after_hash "#\tTabbed" => "#\tTabbed"
      plain_leading_whitespace "  # Title  " => "  # Title"
      plain_blank "" => ""
      plain_whitespace_only "   " => ""
      plain_html_passthrough "<h1>Title</h1>" => "<h1>Title</h1>"
    }

    #[test]
    fn parse_heading() {
        assert_eq!(
            Line::Heading(Heading {
                level: 4,
                text: "Four"
            }),
            Line::parse("#### Four")
        );
    }

    #[test]
    fn parse_plain_borrows() {
        let line = Line::parse("text   ");
        assert_eq!(Line::Plain("text"), line);
        assert!(!line.is_heading());
        assert!(matches!(line.render(), Cow::Borrowed("text")));
    }

    #[test]
    fn heading_text_keeps_separators() {
        assert_eq!("<h1>a\x1f</h1>", convert_line("# a\x1f"));
    }

    #[test]
    fn display_matches_render() {
        for input in ["# One", "plain", "#nope", "###### Six"] {
            let line = Line::parse(input);
            assert_eq!(line.render(), line.to_string());
        }
    }

    proptest! {
        #[test]
        fn hashes_and_space_always_make_a_heading(level in 1usize..32, text in "[^\r\n]*") {
            let line = format!("{} {}", "#".repeat(level), text);
            prop_assert_eq!(
                convert_line(&line),
                format!("<h{level}>{text}</h{level}>")
            );
        }

        #[test]
        fn lines_without_leading_hash_are_trimmed(line in "[^#\r\n][^\r\n]*") {
            prop_assert_eq!(
                convert_line(&line),
                line.trim_end_matches(is_trailing_whitespace)
            );
        }
    }
}
