use tonecolor::config::{Settings, ToneColors};
use tonecolor::markup::{count_font_tags, strip_font_tags};
use tonecolor::{Tone, ToneColorSource, colorize_characters, colorize_pinyin};

fn settings() -> Settings {
    Settings {
        tone_colors_enabled: true,
        colors: ToneColors {
            tone1: "red".to_owned(),
            tone2: "orange".to_owned(),
            tone3: "green".to_owned(),
            tone4: "blue".to_owned(),
            tone5: "grey".to_owned(),
        },
    }
}

/// Settings source which is not the bundled `Settings` type
#[derive(Debug)]
struct Monochrome(bool);

impl ToneColorSource for Monochrome {
    fn tone_colors_enabled(&self) -> bool {
        self.0
    }

    fn color_for(&self, tone: Tone) -> &str {
        if tone == Tone::Neutral { "grey" } else { "black" }
    }
}

#[test]
fn test_color_lookup() {
    let settings = settings();
    assert_eq!(settings.color_for_tone(1), "red");
    assert_eq!(settings.color_for_tone(2), "orange");
    assert_eq!(settings.color_for_tone(3), "green");
    assert_eq!(settings.color_for_tone(4), "blue");
    for n in [0, 5, -1, 999] {
        assert_eq!(settings.color_for_tone(n), "grey");
    }
    assert_eq!(settings.color_for(Tone::from_token("NaN")), "grey");
}

#[test]
fn test_disabled_is_identity() {
    let mut settings = settings();
    settings.tone_colors_enabled = false;
    assert_eq!(colorize_pinyin("3,3", "nǐ hǎo", &settings), "nǐ hǎo");
    assert_eq!(colorize_characters("3,3", "你好", &settings), "你好");
    assert_eq!(colorize_pinyin("whatever", "nǐ hǎo", &Monochrome(false)), "nǐ hǎo");
    assert_eq!(colorize_characters("1", "你好", &Monochrome(false)), "你好");
}

#[test]
fn test_separator_preserved() {
    let colored = colorize_characters("1,2", "你，好", &settings());
    assert_eq!(colored, "<font color='red'>你</font>，<font color='orange'>好</font>");
}

#[test]
fn test_exhaustion() {
    let colored = colorize_characters("1", "你好", &settings());
    assert_eq!(colored, "<font color='red'>你</font>好");
    let colored = colorize_pinyin("1", "nǐ hǎo", &settings());
    assert_eq!(colored, "<font color='red'>nǐ</font> hǎo ");
}

#[test]
fn test_astral_character_is_one_unit() {
    let characters = "好𪚥好";
    assert_eq!(characters.encode_utf16().count(), 4);
    let colored = colorize_characters("1,2,3", characters, &settings());
    assert_eq!(
        colored,
        "<font color='red'>好</font><font color='orange'>𪚥</font><font color='green'>好</font>"
    );
}

#[test]
fn test_custom_color_source() {
    assert_eq!(
        colorize_characters("4,5", "是的", &Monochrome(true)),
        "<font color='black'>是</font><font color='grey'>的</font>"
    );
}

#[test]
fn test_markup_is_additive() {
    let pinyin = "Kǎ ěr · Mǎ kè sī";
    let colored = colorize_pinyin("3,3,3,4,1", pinyin, &settings());
    assert_eq!(count_font_tags(&colored), 5);
    assert_eq!(strip_font_tags(&colored), format!("{pinyin} "));

    let characters = "卡尔·马克思";
    let colored = colorize_characters("3,3,3,4,1", characters, &settings());
    assert_eq!(count_font_tags(&colored), 5);
    assert_eq!(strip_font_tags(&colored), characters);
}
