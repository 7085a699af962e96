use crate::heading::Line;

/// Iterator over the lines of a document, split on `\n`, `\r\n` or a lone
/// `\r`. Terminators are not included, and a terminator at the very end of
/// the document does not produce a trailing empty line.
pub struct Lines<'a> {
    rest: &'a str,
}

pub fn lines(source: &str) -> Lines<'_> {
    Lines { rest: source }
}

impl<'a> Iterator for Lines<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        if self.rest.is_empty() {
            return None;
        }

        let (line, rest) = match self.rest.find(['\n', '\r']) {
            Some(end) => {
                let terminator = if self.rest[end..].starts_with("\r\n") {
                    2
                } else {
                    1
                };
                (&self.rest[..end], &self.rest[end + terminator..])
            }
            None => (self.rest, ""),
        };

        self.rest = rest;
        Some(line)
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Stats {
    pub lines: usize,
    pub headings: usize,
}

/// Converts a whole markdown document, one output line per input line,
/// joined by `\n` without a trailing newline.
#[must_use]
pub fn convert(source: &str) -> String {
    convert_with_stats(source).0
}

#[must_use]
pub fn convert_with_stats(source: &str) -> (String, Stats) {
    let mut stats = Stats::default();
    let mut html = String::with_capacity(source.len());

    for line in lines(source).map(Line::parse) {
        if stats.lines > 0 {
            html.push('\n');
        }
        stats.lines += 1;
        if line.is_heading() {
            stats.headings += 1;
        }
        html.push_str(&line.render());
    }

    (html, stats)
}
