use std::sync::LazyLock;

use itertools::Itertools;
use regex::Regex;

use crate::coloriser::ToneColoriser;
use crate::separator::is_separator;
use crate::tone::{Tone, ToneColorSource};

/// Wrap every pinyin word (split on single spaces) in the color of its tone.
///
/// Each word is followed by a single space in the output, including the last
/// one. Separators such as "," or "·" and single letters keep their place
/// without using up a tone number, words beyond the last tone number stay
/// uncolored.
pub fn colorize_pinyin(tone_nums: &str, pinyin: &str, colors: &impl ToneColorSource) -> String {
    if !colors.tone_colors_enabled() || tone_nums.is_empty() {
        return pinyin.to_owned();
    }
    let mut coloriser = ToneColoriser::new(tone_nums, colors);
    let mut colored = String::with_capacity(pinyin.len() * 4);
    for word in pinyin.split(' ') {
        colored.push_str(&coloriser.colorise_unit(word));
        colored.push(' ');
    }
    colored
}

/// Pinyin of a CC-CEDICT entry (e.g. "ni3 hao3") prepared for display
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CedictPinyin {
    /// Tone marked pinyin, e.g. "nǐ hǎo"
    pub display: String,
    /// Comma separated tone numbers of all syllables, e.g. "3,3"
    pub tone_numbers: String,
    /// One tone number per word of `display` that takes a color
    pub display_tone_numbers: String,
    /// One tone number per syllable that stands for a colored character
    pub character_tone_numbers: String,
    /// Lowercase tone marked syllables
    pub syllables: Vec<String>,
    /// Lowercase tone marked pinyin without spaces, e.g. "nǐhǎo"
    pub tone_marked_search: String,
    /// Lowercase pinyin without tones or spaces, ü written as u
    pub toneless_search: String,
}

/// One space separated word of the display pinyin. Glued single letters
/// ("USB") share the tone of their first syllable.
#[derive(Debug, Default)]
struct DisplayWord {
    text: String,
    tone: Option<Tone>,
}

pub fn parse_cedict_pinyin(source: &str) -> CedictPinyin {
    let mut words: Vec<DisplayWord> = vec![];
    let mut tones = vec![];
    let mut character_tones = vec![];
    let mut syllables = vec![];
    let mut toneless_search = String::new();
    for raw in source.split(' ').filter(|s| !s.is_empty()) {
        let (syllable, tone) = split_tone_number(raw);
        let syllable = normalize_u(syllable);
        match syllable.as_str() {
            "·" => {
                // keeps the leading space of a display starting with ·
                if words.is_empty() {
                    words.push(DisplayWord::default());
                }
                words.push(DisplayWord {
                    text: "·".to_owned(),
                    tone: None,
                });
            }
            "," => match words.last_mut() {
                Some(word) => word.text.push(','),
                None => words.push(DisplayWord {
                    text: ",".to_owned(),
                    tone: None,
                }),
            },
            _ => {
                let marked = mark_syllable(&syllable, tone);
                match words.last_mut() {
                    // single chars are letters or digits of abbreviations and stay together
                    Some(word) if syllable.chars().count() == 1 => {
                        word.text.push_str(&marked);
                        word.tone.get_or_insert(tone);
                    }
                    _ => words.push(DisplayWord {
                        text: marked.clone(),
                        tone: Some(tone),
                    }),
                }
                // a Latin letter among the characters is never colored
                if !is_separator(&syllable) {
                    character_tones.push(tone);
                }
                toneless_search.push_str(&syllable.to_lowercase().replace('ü', "u"));
                syllables.push(marked.to_lowercase());
                tones.push(tone);
            }
        }
    }
    let display_tones = words
        .iter()
        .filter(|word| !is_separator(&word.text))
        .map(|word| word.tone.unwrap_or(Tone::Neutral));
    CedictPinyin {
        display: words.iter().map(|word| word.text.as_str()).join(" "),
        tone_numbers: join_tone_numbers(tones),
        display_tone_numbers: join_tone_numbers(display_tones),
        character_tone_numbers: join_tone_numbers(character_tones),
        tone_marked_search: syllables.concat(),
        syllables,
        toneless_search,
    }
}

fn join_tone_numbers(tones: impl IntoIterator<Item = Tone>) -> String {
    tones.into_iter().map(Tone::number).join(",")
}

/// Matches a syllable with optional tone number in pinyin written with or
/// without spaces, e.g. "bei3" in "bei1bei3"
static SEARCH_SYLLABLE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([0-9]|[a-zA-Z\u{00C0}-\u{024F}:]+)([1-5])?")
        .expect("search syllable pattern is valid")
});

/// Lowercase tone marked pinyin for searching, e.g. "ni3hao3" is "nǐhǎo"
pub fn make_tone_marked_search_pinyin(words: &str) -> String {
    search_pinyin(words, true)
}

/// Lowercase pinyin without tones for searching, ü and u are not distinguished
pub fn make_toneless_search_pinyin(words: &str) -> String {
    search_pinyin(words, false)
}

fn search_pinyin(words: &str, with_tone_marks: bool) -> String {
    let mut result = String::new();
    for caps in SEARCH_SYLLABLE_RE.captures_iter(words) {
        let tone = caps
            .get(2)
            .map_or(Tone::Neutral, |m| Tone::from_token(m.as_str()));
        let syllable = normalize_u(&caps[1].to_lowercase());
        if with_tone_marks {
            result.push_str(&mark_syllable(&syllable, tone));
        } else {
            result.push_str(&syllable.replace('ü', "u"));
        }
    }
    result
}

fn split_tone_number(raw: &str) -> (&str, Tone) {
    let mut chars = raw.chars();
    match chars.next_back() {
        Some(last @ '1'..='5') if !chars.as_str().is_empty() => (
            chars.as_str(),
            Tone::from_number(i64::from(last.to_digit(10).unwrap_or(5))),
        ),
        _ => (raw, Tone::Neutral),
    }
}

fn normalize_u(syllable: &str) -> String {
    let syllable = syllable.replace("u:", "ü").replace("U:", "Ü");
    // a single v is a letter, e.g. in "V C D"
    if syllable.chars().count() > 1 {
        syllable.replace('v', "ü").replace('V', "Ü")
    } else {
        syllable
    }
}

/// Put the tone mark of `tone` on the right letter of a single syllable
pub fn mark_syllable(syllable: &str, tone: Tone) -> String {
    let tone_idx = match tone {
        Tone::First => 0,
        Tone::Second => 1,
        Tone::Third => 2,
        Tone::Fourth => 3,
        Tone::Neutral => return syllable.to_owned(),
    };
    let chars: Vec<char> = syllable.chars().collect();
    let lower: Vec<char> = chars.iter().map(|&c| lowercase(c)).collect();

    let Some(pos) = tone_mark_position(&lower) else {
        return syllable.to_owned();
    };
    let Some(marked) = tone_mark_char(chars[pos], tone_idx) else {
        return syllable.to_owned();
    };
    let mut s = String::with_capacity(syllable.len() + 4);
    s.extend(&chars[..pos]);
    s.push_str(marked);
    s.extend(&chars[pos + 1..]);
    s
}

fn lowercase(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

/// a, e and ê always take the mark, in "ou" the o, otherwise the last vowel.
/// Syllabic nasals (ng, m) are marked on the consonant.
fn tone_mark_position(lower: &[char]) -> Option<usize> {
    let find = |target: char| lower.iter().position(|&c| c == target);
    find('a')
        .or_else(|| find('e'))
        .or_else(|| find('ê'))
        .or_else(|| lower.windows(2).position(|w| w == ['o', 'u']))
        .or_else(|| {
            lower
                .iter()
                .rposition(|&c| matches!(c, 'i' | 'o' | 'u' | 'ü'))
        })
        .or_else(|| find('n'))
        .or_else(|| find('m'))
}

fn tone_mark_char(ch: char, tone_idx: usize) -> Option<&'static str> {
    let marks = match ch {
        'a' => ["ā", "á", "ǎ", "à"],
        'A' => ["Ā", "Á", "Ǎ", "À"],
        'e' => ["ē", "é", "ě", "è"],
        'E' => ["Ē", "É", "Ě", "È"],
        'ê' => ["ê̄", "ế", "ê̌", "ề"],
        'Ê' => ["Ê̄", "Ế", "Ê̌", "Ề"],
        'i' => ["ī", "í", "ǐ", "ì"],
        'I' => ["Ī", "Í", "Ǐ", "Ì"],
        'o' => ["ō", "ó", "ǒ", "ò"],
        'O' => ["Ō", "Ó", "Ǒ", "Ò"],
        'u' => ["ū", "ú", "ǔ", "ù"],
        'U' => ["Ū", "Ú", "Ǔ", "Ù"],
        'ü' => ["ǖ", "ǘ", "ǚ", "ǜ"],
        'Ü' => ["Ǖ", "Ǘ", "Ǚ", "Ǜ"],
        'm' => ["m̄", "ḿ", "m̌", "m̀"],
        'M' => ["M̄", "Ḿ", "M̌", "M̀"],
        'n' => ["n̄", "ń", "ň", "ǹ"],
        'N' => ["N̄", "Ń", "Ň", "Ǹ"],
        _ => return None,
    };
    marks.get(tone_idx).copied()
}
