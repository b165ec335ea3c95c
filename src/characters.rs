use crate::coloriser::ToneColoriser;
use crate::tone::ToneColorSource;

/// Wrap every character in the color of its tone. Characters outside the
/// BMP count as one unit, punctuation such as "，" is kept uncolored.
pub fn colorize_characters(
    tone_nums: &str,
    characters: &str,
    colors: &impl ToneColorSource,
) -> String {
    if !colors.tone_colors_enabled() || tone_nums.is_empty() {
        return characters.to_owned();
    }
    let mut coloriser = ToneColoriser::new(tone_nums, colors);
    let mut colored = String::with_capacity(characters.len() * 8);
    for (i, c) in characters.char_indices() {
        colored.push_str(&coloriser.colorise_unit(&characters[i..i + c.len_utf8()]));
    }
    colored
}

/// Same as [`colorize_characters`] for text stored as UTF-16. A surrogate
/// pair is one character, an unpaired surrogate becomes one U+FFFD.
pub fn colorize_characters_utf16(
    tone_nums: &str,
    units: &[u16],
    colors: &impl ToneColorSource,
) -> String {
    let characters: String = char::decode_utf16(units.iter().copied())
        .map(|r| r.unwrap_or(char::REPLACEMENT_CHARACTER))
        .collect();
    colorize_characters(tone_nums, &characters, colors)
}
