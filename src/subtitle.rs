use once_cell::sync::Lazy;
use regex::Regex;

static SEQUENCE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]+$").expect("sequence pattern is valid"));

static TIMECODE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{2}:[0-9]{2}:[0-9]{2},[0-9]{3} --> [0-9]{2}:[0-9]{2}:[0-9]{2},[0-9]{3}$")
        .expect("timecode pattern is valid")
});

/// A line of the subtitle file together with its position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineRecord {
    pub index: usize,
    pub text: String,
}

/// Translated text for one line, keyed by the line's original index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationResult {
    pub index: usize,
    pub text: String,
    /// The translator failed and `text` is the untranslated original
    pub fell_back: bool,
}

impl TranslationResult {
    /// Translated text holding a line break, which adds lines on output
    pub fn spans_lines(&self) -> bool {
        self.text.contains('\n')
    }
}

/// Subtitle file content as an ordered list of lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubtitleDocument {
    lines: Vec<String>,
}

impl SubtitleDocument {
    /// Split content on `\n` or `\r\n`. A trailing line break produces a
    /// trailing empty line, so `render` reproduces it.
    pub fn parse(content: &str) -> Self {
        let lines = content
            .split('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line).to_string())
            .collect();
        Self { lines }
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Lines carrying caption text, in file order
    pub fn translatable_lines(&self) -> Vec<LineRecord> {
        self.lines
            .iter()
            .enumerate()
            .filter(|(_, text)| is_translatable(text))
            .map(|(index, text)| LineRecord {
                index,
                text: text.clone(),
            })
            .collect()
    }

    /// Substitute results back by index. Completion order does not matter.
    pub fn apply<I>(&mut self, results: I)
    where
        I: IntoIterator<Item = TranslationResult>,
    {
        for result in results {
            if let Some(slot) = self.lines.get_mut(result.index) {
                *slot = result.text;
            }
        }
    }

    pub fn render(&self) -> String {
        self.lines.join("\n")
    }
}

/// Whether a line is caption text, as opposed to a blank line, a sequence
/// index or a timecode range. A leading byte order mark counts as whitespace.
pub fn is_translatable(line: &str) -> bool {
    let trimmed = line.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}');
    !trimmed.is_empty() && !SEQUENCE_RE.is_match(trimmed) && !TIMECODE_RE.is_match(trimmed)
}
