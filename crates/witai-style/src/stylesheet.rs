//! Stylesheet parsing for the document's style engine.
//!
//! This is a structural scan, not a CSS parser: it follows comments, quoted
//! strings, escapes and bracket nesting, and recovers from malformed input
//! the way CSS error handling does. Open blocks are closed at end of input,
//! stray or mismatched closers are ignored, and an unterminated comment or
//! string runs to the end. Almost any text parses; treat a successful parse
//! as "not obviously broken", never as "valid CSS".

/// A parse fault. Offsets are byte positions into the stylesheet text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseFault {
    #[error("NUL character at byte {offset}")]
    NulCharacter { offset: usize },
}

/// Stylesheet text that has been accepted by the style engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleSheet {
    text: String,
    blocks: usize,
    at_rules: usize,
    recovered: usize,
}

impl StyleSheet {
    /// Parse `text` into a stylesheet.
    pub fn parse(text: &str) -> Result<Self, ParseFault> {
        let mut stack: Vec<char> = Vec::new();
        let mut blocks = 0;
        let mut at_rules = 0;
        let mut recovered = 0;

        let bytes = text.as_bytes();
        let mut chars = text.char_indices().peekable();

        while let Some((offset, ch)) = chars.next() {
            match ch {
                '\0' => return Err(ParseFault::NulCharacter { offset }),
                '\\' => {
                    // Escaped code point; whatever follows is literal.
                    chars.next();
                }
                '/' if bytes.get(offset + 1) == Some(&b'*') => {
                    let body = offset + 2;
                    let resume = match text[body..].find("*/") {
                        Some(end) => body + end + 2,
                        None => {
                            recovered += 1;
                            text.len()
                        }
                    };
                    while chars.next_if(|&(i, _)| i < resume).is_some() {}
                }
                '"' | '\'' => {
                    if !skip_string(&mut chars, ch) {
                        recovered += 1;
                    }
                }
                '@' => at_rules += 1,
                '{' | '(' | '[' => {
                    if ch == '{' {
                        blocks += 1;
                    }
                    stack.push(ch);
                }
                '}' | ')' | ']' => {
                    if stack.last().is_some_and(|&open| closer(open) == ch) {
                        stack.pop();
                    } else {
                        // Stray or mismatched closer: an ordinary token
                        // inside the current block.
                        recovered += 1;
                    }
                }
                _ => {}
            }
        }

        // Blocks still open are closed at end of input.
        recovered += stack.len();

        Ok(Self {
            text: text.to_string(),
            blocks,
            at_rules,
            recovered,
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn into_text(self) -> String {
        self.text
    }

    /// Number of `{ ... }` blocks, nested ones included.
    pub fn blocks(&self) -> usize {
        self.blocks
    }

    pub fn at_rules(&self) -> usize {
        self.at_rules
    }

    /// Number of places where error recovery kicked in.
    pub fn recovered(&self) -> usize {
        self.recovered
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

fn closer(open: char) -> char {
    match open {
        '{' => '}',
        '(' => ')',
        _ => ']',
    }
}

/// Consume a quoted string after its opening `quote`. Returns `false` when
/// an unescaped newline or end of input ends the string early.
fn skip_string(chars: &mut std::iter::Peekable<std::str::CharIndices<'_>>, quote: char) -> bool {
    while let Some((_, c)) = chars.next() {
        match c {
            '\\' => {
                chars.next();
            }
            '\n' => return false,
            c if c == quote => return true,
            _ => {}
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_simple_rule() {
        let sheet = StyleSheet::parse("body { color: red; }").unwrap();
        assert_eq!(sheet.text(), "body { color: red; }");
        assert_eq!(sheet.blocks(), 1);
        assert_eq!(sheet.at_rules(), 0);
    }

    #[test]
    fn parses_empty_text() {
        let sheet = StyleSheet::parse("").unwrap();
        assert!(sheet.is_empty());
        assert_eq!(sheet.blocks(), 0);
    }

    #[test]
    fn counts_nested_blocks_and_at_rules() {
        let css = "@keyframes spin { 0% { opacity: 0; } 100% { opacity: 1; } }\n\
                   @media (max-width: 600px) { .a { color: blue; } }";
        let sheet = StyleSheet::parse(css).unwrap();
        assert_eq!(sheet.blocks(), 5);
        assert_eq!(sheet.at_rules(), 2);
    }

    #[test]
    fn braces_inside_comments_and_strings_are_ignored() {
        let css = "/* } */ a::before { content: \"}{)\"; } b { content: '\\'}'; }";
        let sheet = StyleSheet::parse(css).unwrap();
        assert_eq!(sheet.blocks(), 2);
    }

    #[test]
    fn at_sign_in_string_is_not_an_at_rule() {
        let sheet = StyleSheet::parse("a::after { content: \"@\"; }").unwrap();
        assert_eq!(sheet.at_rules(), 0);
    }

    #[test]
    fn escaped_brace_is_literal() {
        assert!(StyleSheet::parse(".a\\} { color: red; }").is_ok());
    }

    #[test]
    fn well_formed_text_needs_no_recovery() {
        let sheet = StyleSheet::parse("a { color: rgb(0, 0, 0); } [data-x] { }").unwrap();
        assert_eq!(sheet.recovered(), 0);
    }

    #[test]
    fn unterminated_string_at_end_is_tolerated() {
        let sheet = StyleSheet::parse("a { color: red; } /* ok */ 'dangling").unwrap();
        assert_eq!(sheet.recovered(), 1);
    }

    #[test]
    fn unterminated_string_swallows_closing_brace() {
        let sheet = StyleSheet::parse("a { content: \"open }").unwrap();
        // The string and the block it hides the closer of.
        assert_eq!(sheet.recovered(), 2);
    }

    #[test]
    fn newline_ends_string() {
        let css = "a { content: \"broken\n; } b { color: red; }";
        let sheet = StyleSheet::parse(css).unwrap();
        assert_eq!(sheet.blocks(), 2);
        assert_eq!(sheet.recovered(), 1);
    }

    #[test]
    fn unclosed_block_is_closed_at_end_of_input() {
        let sheet = StyleSheet::parse("a { color: red;").unwrap();
        assert_eq!(sheet.text(), "a { color: red;");
        assert_eq!(sheet.blocks(), 1);
        assert_eq!(sheet.recovered(), 1);
    }

    #[test]
    fn stray_close_is_ignored() {
        let sheet = StyleSheet::parse("a { color: red; } }").unwrap();
        assert_eq!(sheet.blocks(), 1);
        assert_eq!(sheet.recovered(), 1);
    }

    #[test]
    fn mismatched_close_is_ignored() {
        let sheet = StyleSheet::parse(".x { width: calc(1px + 2px; }").unwrap();
        // `}` stays inside the paren, then both are closed at end of input.
        assert_eq!(sheet.recovered(), 3);
    }

    #[test]
    fn unterminated_comment_runs_to_end() {
        let sheet = StyleSheet::parse("a { color: red; } /* never closed { (").unwrap();
        assert_eq!(sheet.blocks(), 1);
        assert_eq!(sheet.recovered(), 1);
    }

    #[test]
    fn rejects_nul() {
        let fault = StyleSheet::parse("a { color: red;\0 }").unwrap_err();
        assert_eq!(fault, ParseFault::NulCharacter { offset: 15 });
    }

    #[test]
    fn handles_multibyte_text() {
        let css = ".café::after { content: \"→ ✓\"; } /* ünïcödé */";
        let sheet = StyleSheet::parse(css).unwrap();
        assert_eq!(sheet.blocks(), 1);
    }

    #[test]
    fn fault_display() {
        let fault = ParseFault::NulCharacter { offset: 7 };
        assert_eq!(fault.to_string(), "NUL character at byte 7");
    }
}
