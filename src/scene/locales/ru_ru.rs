//! Russian vocabulary
//!
//! Russian inflects nouns and numerals. The listed forms cover the case a count noun takes after
//! each number word, as in "три столбца" and "пять столбцов". A preposition in front of a
//! direction is not part of the vocabulary, so "в три столбца" reads as free text.

use super::{Dictionary, Locale};
use crate::scene::lexing::tokens::{Keyword, Numeral};

pub static DICTIONARY: Dictionary = Dictionary {
    locale: Locale::RuRu,
    numerals: &[
        (Numeral::Zero, &["ноль", "ноля", "нолю"]),
        (Numeral::One, &["один", "одна", "одного", "одну", "одним", "одной"]),
        (Numeral::Two, &["два", "две", "двум", "двумя"]),
        (Numeral::Three, &["три", "трём", "тремя"]),
        (Numeral::Four, &["четыре", "четырём", "четырьмя"]),
        (Numeral::Five, &["пять", "пяти", "пятью"]),
        (Numeral::Six, &["шесть", "шести", "шестью"]),
        (Numeral::Seven, &["семь", "семи", "семью"]),
        (Numeral::Eight, &["восемь", "восьми", "восемью"]),
        (Numeral::Nine, &["девять", "девяти", "девятью"]),
        (Numeral::Ten, &["десять", "десяти", "десятью"]),
        (Numeral::Eleven, &["одиннадцать", "одиннадцати", "одиннадцатью"]),
        (Numeral::Twelve, &["двенадцать", "двенадцати", "двенадцатью"]),
    ],
    keywords: &[
        (Keyword::Page, &["страница:", "экран:"]),
        (Keyword::Mobile, &["мобильный", "мобильная"]),
        (
            Keyword::Tablet,
            &["планшетный", "планшетная", "ноутбучный", "ноутбучная"],
        ),
        (Keyword::Widescreen, &["широкоформатный", "широкоформатная"]),
        (Keyword::Block, &["блок:"]),
        (Keyword::Blocks, &["блоки"]),
        (Keyword::Header, &["заголовок"]),
        (Keyword::Field, &["поле ввода", "поле"]),
        (Keyword::Button, &["кнопка", "ссылка"]),
        (Keyword::List, &["список"]),
        (Keyword::Image, &["картинка"]),
        (Keyword::Space, &["пустота", "пустое пространство"]),
        (Keyword::ConsistsOf, &["включает в себя"]),
        (Keyword::Aligned, &["расположены в", "расположены"]),
        (Keyword::WithIcon, &["с иконкой"]),
        (
            Keyword::Rows,
            &[
                "строка", "строку", "строчка", "строчку", "строки", "строк", "строкой",
                "строчкой", "строками", "строчками",
            ],
        ),
        (
            Keyword::Columns,
            &["столбец", "столбца", "столбцов", "столбцом", "столбцы", "столбцами"],
        ),
        (Keyword::Top, &["верхний", "сверху"]),
        (Keyword::Bottom, &["нижний", "снизу"]),
        (Keyword::Left, &["левый", "слева"]),
        (Keyword::Right, &["правый", "справа"]),
        (Keyword::Center, &["по центру"]),
    ],
    letter_equivalents: &[&['е', 'ё']],
};
