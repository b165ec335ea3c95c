use std::borrow::Cow;

use tracing::{debug, trace};

use crate::markup::push_font_tag;
use crate::separator::is_separator;
use crate::tone::{ToneColorSource, ToneNumbers};

/// Hands out the tone numbers of one entry to its units, left to right.
/// Separators are passed through without using up a tone number, once the
/// tone numbers run out all further units are passed through as well.
///
/// A coloriser belongs to exactly one colorization pass.
#[derive(Debug)]
pub struct ToneColoriser<'a, C: ?Sized> {
    tones: ToneNumbers,
    next_tone: usize,
    reported_exhausted: bool,
    colors: &'a C,
}

impl<'a, C: ToneColorSource + ?Sized> ToneColoriser<'a, C> {
    pub fn new(tone_nums: &str, colors: &'a C) -> Self {
        Self {
            tones: ToneNumbers::parse(tone_nums),
            next_tone: 0,
            reported_exhausted: false,
            colors,
        }
    }

    pub fn colorise_unit<'u>(&mut self, unit: &'u str) -> Cow<'u, str> {
        if is_separator(unit) {
            trace!(unit, "skipping separator");
            return Cow::Borrowed(unit);
        }
        let Some(tone) = self.tones.get(self.next_tone) else {
            if !self.reported_exhausted {
                debug!(unit, available = self.tones.len(), "ran out of tone numbers");
                self.reported_exhausted = true;
            }
            return Cow::Borrowed(unit);
        };
        self.next_tone += 1;
        let mut colored = String::new();
        push_font_tag(&mut colored, self.colors.color_for(tone), unit);
        Cow::Owned(colored)
    }

    /// Number of tone numbers handed out so far
    pub fn consumed(&self) -> usize {
        self.next_tone
    }
}
