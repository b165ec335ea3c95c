use nom::{
    IResult, Parser,
    character::complete::{digit1, multispace0, one_of},
    combinator::{opt, recognize},
    sequence::{pair, preceded},
};

/// Mandarin tone of one syllable, `Neutral` doubles as the fallback for
/// anything that is not a tone from 1 to 4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tone {
    First,
    Second,
    Third,
    Fourth,
    Neutral,
}

impl Tone {
    pub const fn from_number(tone_number: i64) -> Self {
        match tone_number {
            1 => Self::First,
            2 => Self::Second,
            3 => Self::Third,
            4 => Self::Fourth,
            _ => Self::Neutral,
        }
    }

    /// Tone of a single token of a tone number list, e.g. "3" or " 4".
    /// Only the integer prefix counts ("2x" is the second tone), tokens
    /// without one fall back to the neutral tone.
    pub fn from_token(token: &str) -> Self {
        match leading_int(token) {
            Ok((_, digits)) => digits.parse().map_or(Self::Neutral, Self::from_number),
            Err(_) => Self::Neutral,
        }
    }

    pub const fn number(self) -> u8 {
        match self {
            Self::First => 1,
            Self::Second => 2,
            Self::Third => 3,
            Self::Fourth => 4,
            Self::Neutral => 5,
        }
    }
}

fn leading_int(input: &str) -> IResult<&str, &str> {
    preceded(multispace0, recognize(pair(opt(one_of("+-")), digit1))).parse(input)
}

/// Tone numbers of a dictionary entry, parsed from a comma separated list
/// such as "3,3" for 你好.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ToneNumbers {
    tones: Vec<Tone>,
}

impl ToneNumbers {
    pub fn parse(tone_nums: &str) -> Self {
        if tone_nums.is_empty() {
            return Self::default();
        }
        Self {
            tones: tone_nums.split(',').map(Tone::from_token).collect(),
        }
    }

    pub fn get(&self, index: usize) -> Option<Tone> {
        self.tones.get(index).copied()
    }

    pub fn len(&self) -> usize {
        self.tones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tones.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Tone> + '_ {
        self.tones.iter().copied()
    }
}

/// Read-only access to the tone color settings used by the colorizers.
pub trait ToneColorSource {
    fn tone_colors_enabled(&self) -> bool;

    fn color_for(&self, tone: Tone) -> &str;

    /// Color for a raw tone number, everything outside 1 to 4 gets the
    /// fifth (neutral) color.
    fn color_for_tone(&self, tone_number: i64) -> &str {
        self.color_for(Tone::from_number(tone_number))
    }
}
