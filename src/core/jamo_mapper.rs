//! 두벌식 자판 영문 키 -> 한글 자모 매핑

use crate::core::jamo::{Choseong, Jungseong, Phoneme};

/// 영문 문자 하나를 자모로 변환
/// 매핑에 없는 문자(숫자, 특수문자 등)는 None 반환
///
/// 대문자(Shift) 입력은 물리 자판을 그대로 따른다:
/// - q/w/e/r/t 는 쌍자음 (ㅃ ㅉ ㄸ ㄲ ㅆ)
/// - o/p 는 짝이 되는 모음 (ㅒ ㅖ)
/// - 나머지 키는 소문자와 같은 자모
pub fn key_to_phoneme(c: char) -> Option<Phoneme> {
    // 초성 인덱스: ㄱ(0) ㄲ(1) ㄴ(2) ㄷ(3) ㄸ(4) ㄹ(5) ㅁ(6) ㅂ(7) ㅃ(8) ㅅ(9)
    //            ㅆ(10) ㅇ(11) ㅈ(12) ㅉ(13) ㅊ(14) ㅋ(15) ㅌ(16) ㅍ(17) ㅎ(18)
    // 중성 인덱스: ㅏ(0) ㅐ(1) ㅑ(2) ㅒ(3) ㅓ(4) ㅔ(5) ㅕ(6) ㅖ(7) ㅗ(8) ㅘ(9)
    //            ㅙ(10) ㅚ(11) ㅛ(12) ㅜ(13) ㅝ(14) ㅞ(15) ㅟ(16) ㅠ(17) ㅡ(18) ㅢ(19) ㅣ(20)
    let cho = |i| Some(Phoneme::Initial(Choseong(i)));
    let jung = |i| Some(Phoneme::Medial(Jungseong(i)));

    match c {
        // 윗줄 자음 (Shift 시 쌍자음)
        'q' => cho(7),  // ㅂ
        'Q' => cho(8),  // ㅃ
        'w' => cho(12), // ㅈ
        'W' => cho(13), // ㅉ
        'e' => cho(3),  // ㄷ
        'E' => cho(4),  // ㄸ
        'r' => cho(0),  // ㄱ
        'R' => cho(1),  // ㄲ
        't' => cho(9),  // ㅅ
        'T' => cho(10), // ㅆ

        // 윗줄 모음
        'y' | 'Y' => jung(12), // ㅛ
        'u' | 'U' => jung(6),  // ㅕ
        'i' | 'I' => jung(2),  // ㅑ
        'o' => jung(1),        // ㅐ
        'O' => jung(3),        // ㅒ
        'p' => jung(5),        // ㅔ
        'P' => jung(7),        // ㅖ

        // 가운데 줄
        'a' | 'A' => cho(6),   // ㅁ
        's' | 'S' => cho(2),   // ㄴ
        'd' | 'D' => cho(11),  // ㅇ
        'f' | 'F' => cho(5),   // ㄹ
        'g' | 'G' => cho(18),  // ㅎ
        'h' | 'H' => jung(8),  // ㅗ
        'j' | 'J' => jung(4),  // ㅓ
        'k' | 'K' => jung(0),  // ㅏ
        'l' | 'L' => jung(20), // ㅣ

        // 아랫줄
        'z' | 'Z' => cho(15),  // ㅋ
        'x' | 'X' => cho(16),  // ㅌ
        'c' | 'C' => cho(14),  // ㅊ
        'v' | 'V' => cho(17),  // ㅍ
        'b' | 'B' => jung(17), // ㅠ
        'n' | 'N' => jung(13), // ㅜ
        'm' | 'M' => jung(18), // ㅡ

        _ => None,
    }
}

/// 영문 키가 자음인지 확인
pub fn is_consonant_key(c: char) -> bool {
    matches!(key_to_phoneme(c), Some(Phoneme::Initial(_)))
}

/// 영문 키가 모음인지 확인
pub fn is_vowel_key(c: char) -> bool {
    matches!(key_to_phoneme(c), Some(Phoneme::Medial(_)))
}
