use crate::loader::WordEntry;

const SEPARATORS: [char; 2] = ['—', '-'];

/// Split `word — hint` (or `word - hint`) into its parts.
///
/// The em dash takes precedence so hyphenated words survive when it is used.
pub fn parse_line(text: &str) -> WordEntry {
    let text = text.trim();

    for separator in SEPARATORS {
        if let Some((word, hint)) = text.split_once(separator) {
            return WordEntry::new(word.trim(), Some(hint));
        }
    }

    WordEntry::new(text, None)
}
