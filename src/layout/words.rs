/// A whitespace-delimited word with the character indices it occupies in the full text.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct WordSpan {
    pub text: String,
    /// Index (in `char`s) of the word's first character.
    pub start_char_index: usize,
    /// Index (in `char`s) of the word's last character, inclusive.
    pub end_char_index: usize,
}

impl WordSpan {
    pub fn char_len(&self) -> usize {
        self.end_char_index - self.start_char_index + 1
    }
}

/// Split `text` on runs of Unicode whitespace. Indices count every `char`, whitespace included.
pub fn split_words(text: &str) -> Vec<WordSpan> {
    let mut spans = Vec::new();
    let mut current: Option<WordSpan> = None;
    for (i, ch) in text.chars().enumerate() {
        if ch.is_whitespace() {
            if let Some(span) = current.take() {
                spans.push(span);
            }
            continue;
        }
        match current.as_mut() {
            Some(span) => {
                span.text.push(ch);
                span.end_char_index = i;
            }
            None => {
                current = Some(WordSpan {
                    text: ch.to_string(),
                    start_char_index: i,
                    end_char_index: i,
                });
            }
        }
    }
    if let Some(span) = current {
        spans.push(span);
    }
    spans
}
