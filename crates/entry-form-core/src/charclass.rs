//! Codepoint classes for Japanese name and address fields

use std::ops::RangeInclusive;

use crate::legacy::LegacyCharset;

/// ぁ..ん
pub const HIRAGANA: RangeInclusive<char> = '\u{3041}'..='\u{3093}';
/// ァ..ヶ
pub const KATAKANA: RangeInclusive<char> = '\u{30A1}'..='\u{30F6}';
/// ー
pub const PROLONGED_SOUND_MARK: char = '\u{30FC}';
/// 一..龠
pub const CJK_IDEOGRAPHS: RangeInclusive<char> = '\u{4E00}'..='\u{9FA0}';
/// 々
pub const IDEOGRAPHIC_ITERATION_MARK: char = '\u{3005}';
/// Full-width space
pub const IDEOGRAPHIC_SPACE: char = '\u{3000}';

/// Which blanks a class admits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Blanks {
    None,
    /// U+0020 and U+3000 only
    Spaces,
    /// ASCII whitespace (tab, newline, ...) and U+3000
    Whitespace,
}

/// A set of admitted codepoints built from named ranges.
///
/// `legacy` marks classes where a codepoint outside the primary ranges is
/// still admitted when it belongs to the [`LegacyCharset`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharClass {
    pub hiragana: bool,
    pub katakana: bool,
    pub prolonged_sound_mark: bool,
    pub kanji: bool,
    pub ascii_digits: bool,
    pub ascii_letters: bool,
    pub hyphen: bool,
    pub blanks: Blanks,
    pub legacy: bool,
}

const EMPTY: CharClass = CharClass {
    hiragana: false,
    katakana: false,
    prolonged_sound_mark: false,
    kanji: false,
    ascii_digits: false,
    ascii_letters: false,
    hyphen: false,
    blanks: Blanks::None,
    legacy: false,
};

impl CharClass {
    /// Names: hiragana, katakana, kanji (with legacy forms) and whitespace
    pub const NAME: Self = Self {
        hiragana: true,
        katakana: true,
        prolonged_sound_mark: true,
        kanji: true,
        blanks: Blanks::Whitespace,
        legacy: true,
        ..EMPTY
    };

    /// Readings: hiragana, the prolonged sound mark and whitespace
    pub const KANA: Self = Self {
        hiragana: true,
        prolonged_sound_mark: true,
        blanks: Blanks::Whitespace,
        ..EMPTY
    };

    /// Prefectures are written in kanji only
    pub const PREFECTURE: Self = Self {
        kanji: true,
        legacy: true,
        ..EMPTY
    };

    pub const CITY_TOWN: Self = Self {
        hiragana: true,
        katakana: true,
        prolonged_sound_mark: true,
        kanji: true,
        ascii_digits: true,
        hyphen: true,
        blanks: Blanks::Spaces,
        legacy: true,
        ..EMPTY
    };

    pub const BUILDING: Self = Self {
        ascii_letters: true,
        ..Self::CITY_TOWN
    };

    /// Whether `c` falls in one of the primary ranges of this class.
    /// The legacy set is not consulted here.
    pub fn admits(&self, c: char) -> bool {
        (self.hiragana && HIRAGANA.contains(&c))
            || (self.katakana && KATAKANA.contains(&c))
            || (self.prolonged_sound_mark && c == PROLONGED_SOUND_MARK)
            || (self.kanji && is_kanji(c))
            || (self.ascii_digits && c.is_ascii_digit())
            || (self.ascii_letters && c.is_ascii_alphabetic())
            || (self.hyphen && c == '-')
            || match self.blanks {
                Blanks::None => false,
                Blanks::Spaces => c == ' ' || c == IDEOGRAPHIC_SPACE,
                Blanks::Whitespace => is_blank_char(c),
            }
    }
}

pub fn is_kanji(c: char) -> bool {
    CJK_IDEOGRAPHS.contains(&c) || c == IDEOGRAPHIC_ITERATION_MARK
}

fn is_blank_char(c: char) -> bool {
    c.is_ascii_whitespace() || c == IDEOGRAPHIC_SPACE
}

/// Checks every codepoint of `value` against `class`.
///
/// The whole string is tried against the primary ranges first. Only when
/// that fails, and the class admits legacy forms, is each codepoint looked
/// up in `legacy`; a single codepoint found in neither rejects the value.
pub fn conforms(value: &str, class: &CharClass, legacy: &LegacyCharset) -> bool {
    if value.chars().all(|c| class.admits(c)) {
        return true;
    }

    class.legacy && value.chars().all(|c| class.admits(c) || legacy.contains(c))
}

/// Empty, or nothing but half-width / full-width blanks
pub fn is_blank(value: &str) -> bool {
    value.chars().all(is_blank_char)
}

pub fn has_leading_space(value: &str) -> bool {
    matches!(value.chars().next(), Some(' ') | Some(IDEOGRAPHIC_SPACE))
}

/// Length in Unicode codepoints
pub fn char_len(value: &str) -> usize {
    value.chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_legacy() -> LegacyCharset {
        LegacyCharset::default()
    }

    #[test]
    fn test_blank_mixes_half_and_full_width() {
        assert!(is_blank(""));
        assert!(is_blank("   "));
        assert!(is_blank("\u{3000}\u{3000}"));
        assert!(is_blank(" \u{3000} \t"));
        assert!(!is_blank(" a"));
    }

    #[test]
    fn test_leading_space() {
        assert!(has_leading_space(" 山田"));
        assert!(has_leading_space("\u{3000}山田"));
        assert!(!has_leading_space("山田 太郎"));
        assert!(!has_leading_space(""));
    }

    #[test]
    fn test_char_len_counts_codepoints() {
        assert_eq!(char_len("山田太郎"), 4);
        assert_eq!("山田太郎".len(), 12);
        assert_eq!(char_len("\u{20BB7}"), 1);
    }

    #[test]
    fn test_name_class() {
        let legacy = no_legacy();
        assert!(conforms("山田 太郎", &CharClass::NAME, &legacy));
        assert!(conforms("やまだ　タロー", &CharClass::NAME, &legacy));
        assert!(conforms("佐々木", &CharClass::NAME, &legacy));
        assert!(!conforms("Yamada", &CharClass::NAME, &legacy));
        assert!(!conforms("山田1", &CharClass::NAME, &legacy));
    }

    #[test]
    fn test_kana_class_rejects_katakana_and_kanji() {
        let legacy = no_legacy();
        assert!(conforms("やまだ たろー", &CharClass::KANA, &legacy));
        assert!(!conforms("ヤマダ", &CharClass::KANA, &legacy));
        assert!(!conforms("山田", &CharClass::KANA, &legacy));
    }

    #[test]
    fn test_kana_class_ignores_legacy_set() {
        let legacy: LegacyCharset = ['\u{FA11}'].into_iter().collect();
        assert!(!conforms("\u{FA11}", &CharClass::KANA, &legacy));
    }

    #[test]
    fn test_prefecture_class_is_kanji_only() {
        let legacy = no_legacy();
        assert!(conforms("東京都", &CharClass::PREFECTURE, &legacy));
        assert!(!conforms("とうきょう", &CharClass::PREFECTURE, &legacy));
        assert!(!conforms("東京 都", &CharClass::PREFECTURE, &legacy));
    }

    #[test]
    fn test_city_town_and_building_classes() {
        let legacy = no_legacy();
        assert!(conforms("千代田区1-1", &CharClass::CITY_TOWN, &legacy));
        assert!(!conforms("千代田区１－１", &CharClass::CITY_TOWN, &legacy));
        assert!(!conforms("Chiyoda", &CharClass::CITY_TOWN, &legacy));
        assert!(conforms("Aビル 101", &CharClass::BUILDING, &legacy));
        assert!(!conforms("ビル#101", &CharClass::BUILDING, &legacy));
    }

    #[test]
    fn test_legacy_codepoints_extend_class() {
        let legacy: LegacyCharset = ['\u{FA11}', '\u{20BB7}'].into_iter().collect();
        // 﨑 and 𠮷 fall outside the unified range
        assert!(!conforms("山\u{FA11}", &CharClass::NAME, &no_legacy()));
        assert!(conforms("山\u{FA11}", &CharClass::NAME, &legacy));
        assert!(conforms("\u{20BB7}\u{FA11}", &CharClass::NAME, &legacy));
        assert!(conforms("\u{20BB7}野家", &CharClass::PREFECTURE, &legacy));
    }

    #[test]
    fn test_one_bad_codepoint_rejects_whole_value() {
        let legacy: LegacyCharset = ['\u{FA11}'].into_iter().collect();
        assert!(!conforms("山\u{FA11}@", &CharClass::NAME, &legacy));
    }
}
