//! English vocabulary

use super::{Dictionary, Locale};
use crate::scene::lexing::tokens::{Keyword, Numeral};

pub static DICTIONARY: Dictionary = Dictionary {
    locale: Locale::EnUs,
    numerals: &[
        (Numeral::Zero, &["zero"]),
        (Numeral::One, &["one"]),
        (Numeral::Two, &["two"]),
        (Numeral::Three, &["three"]),
        (Numeral::Four, &["four"]),
        (Numeral::Five, &["five"]),
        (Numeral::Six, &["six"]),
        (Numeral::Seven, &["seven"]),
        (Numeral::Eight, &["eight"]),
        (Numeral::Nine, &["nine"]),
        (Numeral::Ten, &["ten"]),
        (Numeral::Eleven, &["eleven"]),
        (Numeral::Twelve, &["twelve"]),
    ],
    keywords: &[
        (Keyword::Page, &["page:", "screen:"]),
        (Keyword::Mobile, &["mobile"]),
        (Keyword::Tablet, &["tablet", "laptop"]),
        (Keyword::Widescreen, &["widescreen", "desktop"]),
        (Keyword::Block, &["block:"]),
        (Keyword::Blocks, &["blocks"]),
        (Keyword::Header, &["header"]),
        (Keyword::Field, &["input", "field"]),
        (Keyword::Button, &["button", "link to", "link"]),
        (Keyword::List, &["list"]),
        (Keyword::Image, &["image"]),
        (Keyword::Space, &["empty space", "spacer", "space"]),
        (Keyword::ConsistsOf, &["consists of"]),
        (Keyword::Aligned, &["aligned in", "aligned"]),
        (Keyword::WithIcon, &["with an icon", "with icon"]),
        (Keyword::Rows, &["rows", "row"]),
        (Keyword::Columns, &["columns", "column"]),
        // Multi-word forms only: bare "top" or "left" are too common at the start of captions
        (Keyword::Top, &["at the top", "on top"]),
        (Keyword::Bottom, &["at the bottom", "on the bottom"]),
        (Keyword::Left, &["on the left"]),
        (Keyword::Right, &["on the right"]),
        (Keyword::Center, &["in the center", "centered"]),
    ],
    letter_equivalents: &[],
};
