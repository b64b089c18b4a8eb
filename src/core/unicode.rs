//! 유니코드 한글 조합/분해 테이블

use crate::core::jamo::{Choseong, Jongseong, Jungseong, Phoneme, JUNGSEONG_COUNT};

/// 한글 음절 시작 코드포인트 (가)
const HANGUL_SYLLABLE_BASE: u32 = 0xAC00;

/// 종성 개수 (종성 없음 포함)
const JONGSEONG_SLOTS: u32 = 28;

/// 초성/중성/종성으로 표시할 문자 생성
/// - 초성+중성: 완성형 음절 (0xAC00 + (초성 * 21 + 중성) * 28 + 종성)
/// - 초성 또는 중성 하나만: 호환용 자모
/// - 둘 다 없음: None
pub fn compose_syllable(
    choseong: Option<Choseong>,
    jungseong: Option<Jungseong>,
    jongseong: Option<Jongseong>,
) -> Option<char> {
    match (choseong, jungseong) {
        (Some(cho), Some(jung)) => {
            let jong = jongseong.map_or(0, |j| j.0 as u32);
            let code = HANGUL_SYLLABLE_BASE
                + (cho.0 as u32 * JUNGSEONG_COUNT as u32 + jung.0 as u32) * JONGSEONG_SLOTS
                + jong;
            char::from_u32(code)
        }
        (Some(cho), None) => Some(compatibility_form(Phoneme::Initial(cho))),
        (None, Some(jung)) => Some(compatibility_form(Phoneme::Medial(jung))),
        (None, None) => None,
    }
}

/// 단독으로 표시할 호환용 자모 (U+3131 ~ U+3163)
pub fn compatibility_form(phoneme: Phoneme) -> char {
    // 호환용 자모는 초성/종성 순서와 다르므로 직접 매핑
    #[rustfmt::skip]
    const CHOSEONG_COMPAT: [char; 19] = [
        'ㄱ', 'ㄲ', 'ㄴ', 'ㄷ', 'ㄸ', 'ㄹ', 'ㅁ', 'ㅂ', 'ㅃ', 'ㅅ',
        'ㅆ', 'ㅇ', 'ㅈ', 'ㅉ', 'ㅊ', 'ㅋ', 'ㅌ', 'ㅍ', 'ㅎ',
    ];
    #[rustfmt::skip]
    const JONGSEONG_COMPAT: [char; 27] = [
        'ㄱ', 'ㄲ', 'ㄳ', 'ㄴ', 'ㄵ', 'ㄶ', 'ㄷ', 'ㄹ', 'ㄺ', 'ㄻ',
        'ㄼ', 'ㄽ', 'ㄾ', 'ㄿ', 'ㅀ', 'ㅁ', 'ㅂ', 'ㅄ', 'ㅅ', 'ㅆ',
        'ㅇ', 'ㅈ', 'ㅊ', 'ㅋ', 'ㅌ', 'ㅍ', 'ㅎ',
    ];

    match phoneme {
        Phoneme::Initial(cho) => CHOSEONG_COMPAT[cho.0 as usize],
        // 모음은 중성 순서 그대로 ㅏ(0x314F) ~ ㅣ(0x3163)
        Phoneme::Medial(jung) => char::from_u32(0x314F + jung.0 as u32).unwrap_or('ㅏ'),
        Phoneme::Final(jong) => JONGSEONG_COMPAT[jong.0 as usize - 1],
    }
}

/// 초성을 같은 자음의 종성으로 변환
/// ㄸ, ㅃ, ㅉ 는 종성이 될 수 없으므로 None
pub fn initial_to_final(cho: Choseong) -> Option<Jongseong> {
    let jong = match cho.0 {
        0 => 1,   // ㄱ
        1 => 2,   // ㄲ
        2 => 4,   // ㄴ
        3 => 7,   // ㄷ
        5 => 8,   // ㄹ
        6 => 16,  // ㅁ
        7 => 17,  // ㅂ
        9 => 19,  // ㅅ
        10 => 20, // ㅆ
        11 => 21, // ㅇ
        12 => 22, // ㅈ
        14 => 23, // ㅊ
        15 => 24, // ㅋ
        16 => 25, // ㅌ
        17 => 26, // ㅍ
        18 => 27, // ㅎ
        _ => return None,
    };
    Some(Jongseong(jong))
}

/// 단일 종성을 초성으로 변환
/// 종성이 다음 글자의 초성으로 이동할 때 사용. 겹받침은 None (split_final 사용)
pub fn final_to_initial(jong: Jongseong) -> Option<Choseong> {
    let cho = match jong.0 {
        1 => 0,   // ㄱ
        2 => 1,   // ㄲ
        4 => 2,   // ㄴ
        7 => 3,   // ㄷ
        8 => 5,   // ㄹ
        16 => 6,  // ㅁ
        17 => 7,  // ㅂ
        19 => 9,  // ㅅ
        20 => 10, // ㅆ
        21 => 11, // ㅇ
        22 => 12, // ㅈ
        23 => 14, // ㅊ
        24 => 15, // ㅋ
        25 => 16, // ㅌ
        26 => 17, // ㅍ
        27 => 18, // ㅎ
        _ => return None,
    };
    Some(Choseong(cho))
}

/// 복합 모음 테이블: (앞 모음, 뒤 모음, 복합 모음)
const MEDIAL_COMPOUNDS: [(u8, u8, u8); 7] = [
    (8, 0, 9),    // ㅗ + ㅏ = ㅘ
    (8, 1, 10),   // ㅗ + ㅐ = ㅙ
    (8, 20, 11),  // ㅗ + ㅣ = ㅚ
    (13, 4, 14),  // ㅜ + ㅓ = ㅝ
    (13, 5, 15),  // ㅜ + ㅔ = ㅞ
    (13, 20, 16), // ㅜ + ㅣ = ㅟ
    (18, 20, 19), // ㅡ + ㅣ = ㅢ
];

/// 복합 종성(겹받침) 테이블: (앞 종성, 뒤 종성, 겹받침)
const FINAL_COMPOUNDS: [(u8, u8, u8); 11] = [
    (1, 19, 3),   // ㄱ + ㅅ = ㄳ
    (4, 22, 5),   // ㄴ + ㅈ = ㄵ
    (4, 27, 6),   // ㄴ + ㅎ = ㄶ
    (8, 1, 9),    // ㄹ + ㄱ = ㄺ
    (8, 16, 10),  // ㄹ + ㅁ = ㄻ
    (8, 17, 11),  // ㄹ + ㅂ = ㄼ
    (8, 19, 12),  // ㄹ + ㅅ = ㄽ
    (8, 25, 13),  // ㄹ + ㅌ = ㄾ
    (8, 26, 14),  // ㄹ + ㅍ = ㄿ
    (8, 27, 15),  // ㄹ + ㅎ = ㅀ
    (17, 19, 18), // ㅂ + ㅅ = ㅄ
];

/// 두 중성을 복합 모음으로 조합 (실패 시 None)
pub fn combine_medial(first: Jungseong, second: Jungseong) -> Option<Jungseong> {
    MEDIAL_COMPOUNDS
        .iter()
        .find(|&&(a, b, _)| a == first.0 && b == second.0)
        .map(|&(_, _, c)| Jungseong(c))
}

/// 복합 모음을 분리
/// 단일 모음은 (자기 자신, None)
pub fn split_medial(jung: Jungseong) -> (Jungseong, Option<Jungseong>) {
    match MEDIAL_COMPOUNDS.iter().find(|&&(_, _, c)| c == jung.0) {
        Some(&(a, b, _)) => (Jungseong(a), Some(Jungseong(b))),
        None => (jung, None),
    }
}

/// 두 종성을 겹받침으로 조합 (실패 시 None)
pub fn combine_final(first: Jongseong, second: Jongseong) -> Option<Jongseong> {
    FINAL_COMPOUNDS
        .iter()
        .find(|&&(a, b, _)| a == first.0 && b == second.0)
        .map(|&(_, _, c)| Jongseong(c))
}

/// 겹받침을 분리
/// 단일 종성은 (자기 자신, None)
pub fn split_final(jong: Jongseong) -> (Jongseong, Option<Jongseong>) {
    match FINAL_COMPOUNDS.iter().find(|&&(_, _, c)| c == jong.0) {
        Some(&(a, b, _)) => (Jongseong(a), Some(Jongseong(b))),
        None => (jong, None),
    }
}
