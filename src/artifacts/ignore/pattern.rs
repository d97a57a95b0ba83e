//! Shell-style glob patterns
//!
//! A pattern is split on `/` into segments and each segment is compiled to an
//! anchored regex matching a single path component:
//!
//! - `*` matches any run of characters
//! - `?` matches exactly one character
//! - `[abc]`, `[a-z]`, `[!abc]` match one character from (or outside) a class
//!
//! A pattern that cannot be compiled (e.g. an unterminated `[` or a reversed
//! range) is kept but never matches anything.

use regex::Regex;

#[derive(Debug, Clone)]
pub struct GlobPattern {
    raw: String,
    segments: Option<Vec<Regex>>,
    anchored: bool,
}

impl GlobPattern {
    /// Parse one rule line. Blank lines and `#` comments yield `None`.
    pub fn parse(line: &str) -> Option<Self> {
        let raw = line.trim();
        if raw.is_empty() || raw.starts_with('#') {
            return None;
        }

        let anchored = raw.starts_with('/');
        let body = raw.trim_start_matches('/').trim_end_matches('/');
        if body.is_empty() {
            return None;
        }

        let segments = body
            .split('/')
            .filter(|segment| !segment.is_empty())
            .map(|segment| Self::translate(segment).and_then(|re| Regex::new(&re).ok()))
            .collect::<Option<Vec<_>>>();

        Some(GlobPattern {
            raw: raw.to_string(),
            segments,
            anchored,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Whether the pattern could be compiled at all
    pub fn is_valid(&self) -> bool {
        self.segments.is_some()
    }

    /// Match against the components of a relative path.
    ///
    /// The pattern matches if it matches the path or any of its ancestors,
    /// right-aligned: `b.txt` matches `a/b.txt`, `a/*` matches `a/b.txt` and
    /// `a/b/c.txt` (through the ancestor `a/b`). An anchored pattern (`/a`)
    /// only matches starting at the root.
    pub fn matches(&self, components: &[&str]) -> bool {
        let Some(segments) = &self.segments else {
            return false;
        };

        let width = segments.len();
        if components.len() < width {
            return false;
        }

        let last_end = if self.anchored { width } else { components.len() };

        (width..=last_end).any(|end| {
            components[end - width..end]
                .iter()
                .zip(segments)
                .all(|(component, segment)| segment.is_match(component))
        })
    }

    fn translate(segment: &str) -> Option<String> {
        let chars = segment.chars().collect::<Vec<_>>();
        let mut re = String::from("(?s)^");
        let mut i = 0;

        while i < chars.len() {
            match chars[i] {
                '*' => re.push_str(".*"),
                '?' => re.push('.'),
                '[' => {
                    let (class, end) = Self::translate_class(&chars, i + 1)?;
                    re.push_str(&class);
                    i = end;
                }
                c => re.push_str(&regex::escape(c.encode_utf8(&mut [0; 4]))),
            }
            i += 1;
        }

        re.push('$');
        Some(re)
    }

    // Returns the regex class and the index of the closing bracket
    fn translate_class(chars: &[char], start: usize) -> Option<(String, usize)> {
        let mut class = String::from("[");
        let mut j = start;

        if j < chars.len() && (chars[j] == '!' || chars[j] == '^') {
            class.push('^');
            j += 1;
        }

        // a leading ']' is a literal member of the class
        if j < chars.len() && chars[j] == ']' {
            class.push_str("\\]");
            j += 1;
        }

        while j < chars.len() && chars[j] != ']' {
            match chars[j] {
                '-' => class.push('-'),
                c @ ('\\' | '[' | '&' | '~' | '^') => {
                    class.push('\\');
                    class.push(c);
                }
                c => class.push(c),
            }
            j += 1;
        }

        if j >= chars.len() {
            return None;
        }

        class.push(']');
        Some((class, j))
    }
}
