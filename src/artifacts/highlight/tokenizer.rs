use anyhow::Context;
use regex::Regex;

/// Alternatives are tried left to right at every position:
///
/// 1. a backslash command such as `\tan` stays one literal word
/// 2. a single Han, Hiragana or Katakana character is a word of its own
/// 3. a run of horizontal whitespace
/// 4. a run of letters, digits, marks and underscores
/// 5. any other single character
pub const TOKEN_REGEX: &str = r"(?P<command>\\[A-Za-z]+)|(?P<ideograph>[\p{Han}\p{Hiragana}\p{Katakana}])|(?P<space>[\p{Zs}\t]+)|(?P<word>[[\p{Alphabetic}\p{N}\p{M}_]--[\p{Han}\p{Hiragana}\p{Katakana}]]+)|(?P<other>(?s:.))";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Word,
    Whitespace,
    Other,
}

/// Slice of a line with its position counted in characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'l> {
    text: &'l str,
    kind: TokenKind,
    start: usize,
    end: usize,
}

impl<'l> Token<'l> {
    pub fn text(&self) -> &'l str {
        self.text
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.end
    }

    pub fn is_whitespace(&self) -> bool {
        self.kind == TokenKind::Whitespace
    }
}

#[derive(Debug, Clone)]
pub struct Tokenizer {
    regex: Regex,
}

impl Tokenizer {
    pub fn try_new() -> anyhow::Result<Self> {
        let regex = Regex::new(TOKEN_REGEX)
            .with_context(|| format!("invalid token regex: {TOKEN_REGEX}"))?;

        Ok(Self { regex })
    }

    /// Split `line` into tokens that cover it without gaps or overlaps.
    ///
    /// Backslashes are plain characters here: `\t` followed by letters is the
    /// start of a word, never a tab.
    pub fn tokenize<'l>(&self, line: &'l str) -> Vec<Token<'l>> {
        let mut tokens = Vec::new();
        let mut byte_end = 0;
        let mut char_end = 0;

        for captures in self.regex.captures_iter(line) {
            let Some(whole) = captures.get(0) else {
                continue;
            };
            debug_assert_eq!(whole.start(), byte_end, "gap before token at byte {byte_end}");

            let kind = if captures.name("space").is_some() {
                TokenKind::Whitespace
            } else if captures.name("other").is_some() {
                TokenKind::Other
            } else {
                TokenKind::Word
            };

            let start = char_end;
            char_end += whole.as_str().chars().count();
            byte_end = whole.end();

            tokens.push(Token {
                text: whole.as_str(),
                kind,
                start,
                end: char_end,
            });
        }

        debug_assert_eq!(byte_end, line.len(), "tokens do not cover the line");
        tokens
    }
}
