//! The predefined counter styles of CSS Counter Styles Level 3.
//!
//! Every style is a process-wide static built on first use from a symbol
//! table in [`tables`] plus the ranges and decorators the CSS definition
//! prescribes. Styles are looked up by their CSS name with [`lookup`], or
//! collected into a [`CounterStyles`](crate::CounterStyles) registry with
//! [`CounterStyles::predefined`](crate::CounterStyles::predefined).
//!
//! # Example
//!
//! ```rust
//! use counterstyle::predefined::{self, LOWER_ROMAN};
//!
//! assert_eq!(LOWER_ROMAN.format(14), "xiv");
//! assert_eq!(LOWER_ROMAN.format(4000), "4000");
//! assert_eq!(predefined::lookup("upper-latin").unwrap().format(28), "AB");
//! ```

mod tables;

use std::collections::BTreeMap;
use std::sync::Arc;

use once_cell::sync::Lazy;

use crate::style::CounterStyle;
use crate::template::Template;

const JAPANESE_MINUS: &str = "マイナス";
const KOREAN_MINUS: &str = "마이너스 ";
const CJK_ITEM_SUFFIX: &str = "、";
const KOREAN_ITEM_SUFFIX: &str = ",";

fn symbols(table: &[&str]) -> Arc<[String]> {
    table.iter().map(|symbol| symbol.to_string()).collect()
}

fn weights(table: &[(u64, &str)]) -> BTreeMap<u64, String> {
    table
        .iter()
        .map(|(weight, symbol)| (*weight, symbol.to_string()))
        .collect()
}

fn numeric(table: &[&str]) -> CounterStyle {
    CounterStyle::numeric_from(symbols(table))
}

fn alphabetic(table: &[&str]) -> CounterStyle {
    CounterStyle::alphabetic_from(symbols(table))
}

fn additive(table: &[(u64, &str)], min: i64, max: i64) -> CounterStyle {
    CounterStyle::additive_from(weights(table)).range(min, max)
}

/// Additive East Asian systems: signed, limited to four digits.
fn east_asian(table: &[(u64, &str)], minus: &str) -> CounterStyle {
    CounterStyle::additive_from(weights(table))
        .negative(minus, "")
        .range(-9999, 9999)
}

fn item(style: &CounterStyle, suffix: &str) -> CounterStyle {
    Template::new().counter(style.clone()).text(suffix).into_style()
}

pub static DECIMAL: Lazy<CounterStyle> = Lazy::new(CounterStyle::decimal);
pub static DECIMAL_LEADING_ZERO: Lazy<CounterStyle> =
    Lazy::new(|| DECIMAL.pad_left(2, "0").negative("-", ""));

pub static ARABIC_INDIC: Lazy<CounterStyle> = Lazy::new(|| numeric(tables::ARABIC_INDIC));
pub static BENGALI: Lazy<CounterStyle> = Lazy::new(|| numeric(tables::BENGALI));
pub static CAMBODIAN: Lazy<CounterStyle> = Lazy::new(|| numeric(tables::CAMBODIAN));
pub static CJK_DECIMAL: Lazy<CounterStyle> = Lazy::new(|| numeric(tables::CJK_DECIMAL));
pub static DEVANAGARI: Lazy<CounterStyle> = Lazy::new(|| numeric(tables::DEVANAGARI));
pub static GUJARATI: Lazy<CounterStyle> = Lazy::new(|| numeric(tables::GUJARATI));
pub static GURMUKHI: Lazy<CounterStyle> = Lazy::new(|| numeric(tables::GURMUKHI));
pub static KANNADA: Lazy<CounterStyle> = Lazy::new(|| numeric(tables::KANNADA));
pub static LAO: Lazy<CounterStyle> = Lazy::new(|| numeric(tables::LAO));
pub static MALAYALAM: Lazy<CounterStyle> = Lazy::new(|| numeric(tables::MALAYALAM));
pub static MONGOLIAN: Lazy<CounterStyle> = Lazy::new(|| numeric(tables::MONGOLIAN));
pub static MYANMAR: Lazy<CounterStyle> = Lazy::new(|| numeric(tables::MYANMAR));
pub static ORIYA: Lazy<CounterStyle> = Lazy::new(|| numeric(tables::ORIYA));
pub static PERSIAN: Lazy<CounterStyle> = Lazy::new(|| numeric(tables::PERSIAN));
pub static TAMIL: Lazy<CounterStyle> = Lazy::new(|| numeric(tables::TAMIL));
pub static TELUGU: Lazy<CounterStyle> = Lazy::new(|| numeric(tables::TELUGU));
pub static THAI: Lazy<CounterStyle> = Lazy::new(|| numeric(tables::THAI));
pub static TIBETAN: Lazy<CounterStyle> = Lazy::new(|| numeric(tables::TIBETAN));

pub static ARMENIAN: Lazy<CounterStyle> = Lazy::new(|| additive(tables::ARMENIAN, 1, 9999));
pub static LOWER_ARMENIAN: Lazy<CounterStyle> =
    Lazy::new(|| additive(tables::LOWER_ARMENIAN, 1, 9999));
pub static GEORGIAN: Lazy<CounterStyle> = Lazy::new(|| additive(tables::GEORGIAN, 1, 19999));
pub static HEBREW: Lazy<CounterStyle> = Lazy::new(|| additive(tables::HEBREW, 1, 10999));
pub static LOWER_ROMAN: Lazy<CounterStyle> =
    Lazy::new(|| additive(tables::LOWER_ROMAN, 1, 3999));
pub static UPPER_ROMAN: Lazy<CounterStyle> =
    Lazy::new(|| additive(tables::UPPER_ROMAN, 1, 3999));

pub static LOWER_ALPHA: Lazy<CounterStyle> = Lazy::new(|| alphabetic(tables::LOWER_ALPHA));
pub static UPPER_ALPHA: Lazy<CounterStyle> = Lazy::new(|| alphabetic(tables::UPPER_ALPHA));
pub static LOWER_GREEK: Lazy<CounterStyle> = Lazy::new(|| alphabetic(tables::LOWER_GREEK));
pub static HIRAGANA: Lazy<CounterStyle> = Lazy::new(|| alphabetic(tables::HIRAGANA));
pub static HIRAGANA_IROHA: Lazy<CounterStyle> =
    Lazy::new(|| alphabetic(tables::HIRAGANA_IROHA));
pub static KATAKANA: Lazy<CounterStyle> = Lazy::new(|| alphabetic(tables::KATAKANA));
pub static KATAKANA_IROHA: Lazy<CounterStyle> =
    Lazy::new(|| alphabetic(tables::KATAKANA_IROHA));

pub static DISC: Lazy<CounterStyle> = Lazy::new(|| CounterStyle::cyclic_from(symbols(tables::DISC)));
pub static CIRCLE: Lazy<CounterStyle> =
    Lazy::new(|| CounterStyle::cyclic_from(symbols(tables::CIRCLE)));
pub static SQUARE: Lazy<CounterStyle> =
    Lazy::new(|| CounterStyle::cyclic_from(symbols(tables::SQUARE)));

pub static CJK_EARTHLY_BRANCH: Lazy<CounterStyle> =
    Lazy::new(|| CounterStyle::fixed_from(symbols(tables::CJK_EARTHLY_BRANCH)));
pub static CJK_HEAVENLY_STEM: Lazy<CounterStyle> =
    Lazy::new(|| CounterStyle::fixed_from(symbols(tables::CJK_HEAVENLY_STEM)));

pub static JAPANESE_INFORMAL: Lazy<CounterStyle> = Lazy::new(|| {
    east_asian(tables::JAPANESE_INFORMAL, JAPANESE_MINUS)
        .fallback(CJK_DECIMAL.negative(JAPANESE_MINUS, ""))
});
pub static JAPANESE_FORMAL: Lazy<CounterStyle> = Lazy::new(|| {
    east_asian(tables::JAPANESE_FORMAL, JAPANESE_MINUS)
        .fallback(CJK_DECIMAL.negative(JAPANESE_MINUS, ""))
});
pub static KOREAN_HANGUL_FORMAL: Lazy<CounterStyle> =
    Lazy::new(|| east_asian(tables::KOREAN_HANGUL_FORMAL, KOREAN_MINUS));
pub static KOREAN_HANJA_INFORMAL: Lazy<CounterStyle> =
    Lazy::new(|| east_asian(tables::KOREAN_HANJA_INFORMAL, KOREAN_MINUS));
pub static KOREAN_HANJA_FORMAL: Lazy<CounterStyle> =
    Lazy::new(|| east_asian(tables::KOREAN_HANJA_FORMAL, KOREAN_MINUS));

pub static CJK_DECIMAL_ITEM: Lazy<CounterStyle> =
    Lazy::new(|| item(&CJK_DECIMAL, CJK_ITEM_SUFFIX));
pub static HIRAGANA_ITEM: Lazy<CounterStyle> = Lazy::new(|| item(&HIRAGANA, CJK_ITEM_SUFFIX));
pub static HIRAGANA_IROHA_ITEM: Lazy<CounterStyle> =
    Lazy::new(|| item(&HIRAGANA_IROHA, CJK_ITEM_SUFFIX));
pub static KATAKANA_ITEM: Lazy<CounterStyle> = Lazy::new(|| item(&KATAKANA, CJK_ITEM_SUFFIX));
pub static KATAKANA_IROHA_ITEM: Lazy<CounterStyle> =
    Lazy::new(|| item(&KATAKANA_IROHA, CJK_ITEM_SUFFIX));
pub static CJK_EARTHLY_BRANCH_ITEM: Lazy<CounterStyle> =
    Lazy::new(|| item(&CJK_EARTHLY_BRANCH, CJK_ITEM_SUFFIX));
pub static CJK_HEAVENLY_STEM_ITEM: Lazy<CounterStyle> =
    Lazy::new(|| item(&CJK_HEAVENLY_STEM, CJK_ITEM_SUFFIX));
pub static JAPANESE_INFORMAL_ITEM: Lazy<CounterStyle> =
    Lazy::new(|| item(&JAPANESE_INFORMAL, CJK_ITEM_SUFFIX));
pub static JAPANESE_FORMAL_ITEM: Lazy<CounterStyle> =
    Lazy::new(|| item(&JAPANESE_FORMAL, CJK_ITEM_SUFFIX));
pub static KOREAN_HANGUL_FORMAL_ITEM: Lazy<CounterStyle> =
    Lazy::new(|| item(&KOREAN_HANGUL_FORMAL, KOREAN_ITEM_SUFFIX));
pub static KOREAN_HANJA_INFORMAL_ITEM: Lazy<CounterStyle> =
    Lazy::new(|| item(&KOREAN_HANJA_INFORMAL, KOREAN_ITEM_SUFFIX));
pub static KOREAN_HANJA_FORMAL_ITEM: Lazy<CounterStyle> =
    Lazy::new(|| item(&KOREAN_HANJA_FORMAL, KOREAN_ITEM_SUFFIX));

/// Predefined styles by CSS name.
pub(crate) static CATALOG: &[(&str, &Lazy<CounterStyle>)] = &[
    ("decimal", &DECIMAL),
    ("decimal-leading-zero", &DECIMAL_LEADING_ZERO),
    ("arabic-indic", &ARABIC_INDIC),
    ("armenian", &ARMENIAN),
    ("lower-armenian", &LOWER_ARMENIAN),
    ("bengali", &BENGALI),
    ("cambodian", &CAMBODIAN),
    ("cjk-decimal", &CJK_DECIMAL),
    ("devanagari", &DEVANAGARI),
    ("georgian", &GEORGIAN),
    ("gujarati", &GUJARATI),
    ("gurmukhi", &GURMUKHI),
    ("hebrew", &HEBREW),
    ("kannada", &KANNADA),
    ("lao", &LAO),
    ("malayalam", &MALAYALAM),
    ("mongolian", &MONGOLIAN),
    ("myanmar", &MYANMAR),
    ("oriya", &ORIYA),
    ("persian", &PERSIAN),
    ("lower-roman", &LOWER_ROMAN),
    ("upper-roman", &UPPER_ROMAN),
    ("tamil", &TAMIL),
    ("telugu", &TELUGU),
    ("thai", &THAI),
    ("tibetan", &TIBETAN),
    ("lower-alpha", &LOWER_ALPHA),
    ("upper-alpha", &UPPER_ALPHA),
    ("lower-greek", &LOWER_GREEK),
    ("hiragana", &HIRAGANA),
    ("hiragana-iroha", &HIRAGANA_IROHA),
    ("katakana", &KATAKANA),
    ("katakana-iroha", &KATAKANA_IROHA),
    ("disc", &DISC),
    ("circle", &CIRCLE),
    ("square", &SQUARE),
    ("cjk-earthly-branch", &CJK_EARTHLY_BRANCH),
    ("cjk-heavenly-stem", &CJK_HEAVENLY_STEM),
    ("japanese-informal", &JAPANESE_INFORMAL),
    ("japanese-formal", &JAPANESE_FORMAL),
    ("korean-hangul-formal", &KOREAN_HANGUL_FORMAL),
    ("korean-hanja-informal", &KOREAN_HANJA_INFORMAL),
    ("korean-hanja-formal", &KOREAN_HANJA_FORMAL),
    ("cjk-decimal-item", &CJK_DECIMAL_ITEM),
    ("hiragana-item", &HIRAGANA_ITEM),
    ("hiragana-iroha-item", &HIRAGANA_IROHA_ITEM),
    ("katakana-item", &KATAKANA_ITEM),
    ("katakana-iroha-item", &KATAKANA_IROHA_ITEM),
    ("cjk-earthly-branch-item", &CJK_EARTHLY_BRANCH_ITEM),
    ("cjk-heavenly-stem-item", &CJK_HEAVENLY_STEM_ITEM),
    ("japanese-informal-item", &JAPANESE_INFORMAL_ITEM),
    ("japanese-formal-item", &JAPANESE_FORMAL_ITEM),
    ("korean-hangul-formal-item", &KOREAN_HANGUL_FORMAL_ITEM),
    ("korean-hanja-informal-item", &KOREAN_HANJA_INFORMAL_ITEM),
    ("korean-hanja-formal-item", &KOREAN_HANJA_FORMAL_ITEM),
];

/// Alternative CSS names, mapped to the style they stand for.
pub const ALIASES: &[(&str, &str)] = &[
    ("lower-latin", "lower-alpha"),
    ("upper-latin", "upper-alpha"),
    ("upper-armenian", "armenian"),
    ("khmer", "cambodian"),
];

/// Returns the predefined style with the given CSS name or alias.
pub fn lookup(name: &str) -> Option<&'static CounterStyle> {
    let name = ALIASES
        .iter()
        .find(|(alias, _)| *alias == name)
        .map_or(name, |(_, target)| *target);

    CATALOG
        .iter()
        .find(|(candidate, _)| *candidate == name)
        .map(|(_, style)| Lazy::force(style))
}

/// Names of all predefined styles, aliases last.
pub fn names() -> impl Iterator<Item = &'static str> {
    CATALOG
        .iter()
        .map(|(name, _)| *name)
        .chain(ALIASES.iter().map(|(alias, _)| *alias))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(style: &CounterStyle, indices: &[i64]) -> Vec<String> {
        indices.iter().map(|i| style.format(*i)).collect()
    }

    #[test]
    fn test_decimal_leading_zero() {
        assert_eq!(
            labels(&DECIMAL_LEADING_ZERO, &[-5, 0, 7, 10, 123]),
            vec!["-5", "00", "07", "10", "123"]
        );
    }

    #[test]
    fn test_roman() {
        assert_eq!(
            labels(&LOWER_ROMAN, &[1, 4, 9, 14, 40, 90, 400, 1994, 3999]),
            vec!["i", "iv", "ix", "xiv", "xl", "xc", "cd", "mcmxciv", "mmmcmxcix"]
        );
        assert_eq!(UPPER_ROMAN.format(2024), "MMXXIV");
    }

    #[test]
    fn test_roman_out_of_range_uses_decimal() {
        assert_eq!(UPPER_ROMAN.format(0), "0");
        assert_eq!(UPPER_ROMAN.format(4000), "4000");
        assert_eq!(UPPER_ROMAN.format(-3), "-3");
    }

    #[test]
    fn test_native_digits() {
        assert_eq!(ARABIC_INDIC.format(1905), "١٩٠٥");
        assert_eq!(DEVANAGARI.format(42), "४२");
        assert_eq!(THAI.format(0), "๐");
        assert_eq!(CJK_DECIMAL.format(2025), "二〇二五");
    }

    #[test]
    fn test_native_digits_negative_falls_back() {
        assert_eq!(PERSIAN.format(-12), "-12");
    }

    #[test]
    fn test_alphabetic_styles() {
        assert_eq!(labels(&LOWER_ALPHA, &[1, 26, 27, 52]), vec!["a", "z", "aa", "az"]);
        assert_eq!(UPPER_ALPHA.format(3), "C");
        assert_eq!(LOWER_GREEK.format(25), "αα");
        assert_eq!(HIRAGANA.format(1), "あ");
        assert_eq!(KATAKANA_IROHA.format(2), "ロ");
    }

    #[test]
    fn test_bullets() {
        assert_eq!(DISC.format(1), "•");
        assert_eq!(DISC.format(99), "•");
        assert_eq!(CIRCLE.format(-1), "◦");
        assert_eq!(SQUARE.format(0), "◾");
    }

    #[test]
    fn test_fixed_stems_and_branches() {
        assert_eq!(CJK_HEAVENLY_STEM.format(1), "甲");
        assert_eq!(CJK_HEAVENLY_STEM.format(10), "癸");
        assert_eq!(CJK_HEAVENLY_STEM.format(11), "11");
        assert_eq!(CJK_EARTHLY_BRANCH.format(12), "亥");
        assert_eq!(CJK_EARTHLY_BRANCH.format(13), "13");
    }

    #[test]
    fn test_armenian_and_georgian() {
        assert_eq!(ARMENIAN.format(1), "Ա");
        assert_eq!(ARMENIAN.format(11), "ԺԱ");
        assert_eq!(LOWER_ARMENIAN.format(11), "ժա");
        assert_eq!(ARMENIAN.format(10000), "10000");
        assert_eq!(GEORGIAN.format(19999), "ჵჰშჟთ");
        assert_eq!(GEORGIAN.format(20000), "20000");
    }

    #[test]
    fn test_hebrew_avoids_divine_names() {
        assert_eq!(HEBREW.format(15), "טו");
        assert_eq!(HEBREW.format(16), "טז");
        assert_eq!(HEBREW.format(11), "יא");
        assert_eq!(HEBREW.format(11000), "11000");
    }

    #[test]
    fn test_japanese() {
        assert_eq!(JAPANESE_INFORMAL.format(0), "〇");
        assert_eq!(JAPANESE_INFORMAL.format(1234), "千二百三十四");
        assert_eq!(JAPANESE_INFORMAL.format(-15), "マイナス十五");
        assert_eq!(JAPANESE_FORMAL.format(11), "壱拾壱");
    }

    #[test]
    fn test_japanese_falls_back_to_cjk_decimal() {
        assert_eq!(JAPANESE_INFORMAL.format(10000), "一〇〇〇〇");
        assert_eq!(JAPANESE_INFORMAL.format(-10000), "マイナス一〇〇〇〇");
    }

    #[test]
    fn test_korean() {
        assert_eq!(KOREAN_HANGUL_FORMAL.format(0), "영");
        assert_eq!(KOREAN_HANGUL_FORMAL.format(21), "이십일");
        assert_eq!(KOREAN_HANGUL_FORMAL.format(-3), "마이너스 삼");
        assert_eq!(KOREAN_HANJA_INFORMAL.format(105), "百五");
        assert_eq!(KOREAN_HANJA_FORMAL.format(2000), "貳仟");
        assert_eq!(KOREAN_HANJA_FORMAL.format(10000), "10000");
    }

    #[test]
    fn test_item_styles() {
        assert_eq!(CJK_DECIMAL_ITEM.format(3), "三、");
        assert_eq!(HIRAGANA_ITEM.format(2), "い、");
        assert_eq!(JAPANESE_INFORMAL_ITEM.format(-1), "マイナス一、");
        assert_eq!(KOREAN_HANGUL_FORMAL_ITEM.format(1), "일,");
    }

    #[test]
    fn test_lookup_by_name_and_alias() {
        assert_eq!(lookup("lower-roman").unwrap().format(3), "iii");
        assert_eq!(lookup("lower-latin").unwrap().format(3), "c");
        assert_eq!(lookup("upper-armenian").unwrap().format(2), "Բ");
        assert_eq!(lookup("khmer").unwrap().format(1), "១");
        assert!(lookup("klingon").is_none());
    }

    #[test]
    fn test_names_cover_catalog_and_aliases() {
        let all: Vec<&str> = names().collect();
        assert_eq!(all.len(), CATALOG.len() + ALIASES.len());
        for name in all {
            assert!(lookup(name).is_some(), "{} should resolve", name);
        }
    }

    #[test]
    fn test_alias_targets_exist() {
        for (alias, target) in ALIASES {
            assert!(
                CATALOG.iter().any(|(name, _)| name == target),
                "alias {} points at missing {}",
                alias,
                target
            );
        }
    }
}
