pub mod characters;
pub mod coloriser;
pub mod config;
pub mod markup;
pub mod pinyin;
pub mod separator;
pub mod text_format;
pub mod tone;

pub use characters::{colorize_characters, colorize_characters_utf16};
pub use config::{Settings, ToneColors};
pub use pinyin::{
    colorize_pinyin, make_tone_marked_search_pinyin, make_toneless_search_pinyin,
    parse_cedict_pinyin,
};
pub use text_format::{TextFormat, determine_text_format};
pub use tone::{Tone, ToneColorSource, ToneNumbers};
