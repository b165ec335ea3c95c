use std::sync::LazyLock;

use regex::Regex;

/// How a search query is written
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextFormat {
    Hanzi,
    PinyinNoTones,
    PinyinNumbers,
    PinyinToneMarks,
}

static HANZI_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\p{Han}").expect("hanzi pattern is valid"));

static TONE_MARK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new("[āōēīūǖáóéíúǘǎǒěǐǔǚàòèìùǜĀŌĒĪŪǕÁÓÉÍÚǗǍǑĚǏǓǙÀÒÈÌÙǛ]")
        .expect("tone mark pattern is valid")
});

/// A syllable followed by at least one tone number, e.g. "wei2"
static NUMBERED_SYLLABLE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new("(?:[0-9]|[A-Za-zÜü:]+)[1-5]").expect("numbered syllable pattern is valid")
});

/// Contains at least one Chinese character
pub fn is_hanzi(text: &str) -> bool {
    HANZI_RE.is_match(text)
}

/// Any Chinese character makes the text hanzi, any tone mark makes it tone
/// marked pinyin, then numbered pinyin, everything else is pinyin without tones.
pub fn determine_text_format(text: &str) -> TextFormat {
    if is_hanzi(text) {
        TextFormat::Hanzi
    } else if TONE_MARK_RE.is_match(text) {
        TextFormat::PinyinToneMarks
    } else if NUMBERED_SYLLABLE_RE.is_match(text) {
        TextFormat::PinyinNumbers
    } else {
        TextFormat::PinyinNoTones
    }
}
