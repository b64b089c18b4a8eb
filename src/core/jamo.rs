//! 한글 자모 타입 (초성/중성/종성)
//!
//! 각 자모는 유니코드 한글 자모 블록 안의 인덱스로 표현한다.
//! - 초성: U+1100 ~ U+1112 (19개)
//! - 중성: U+1161 ~ U+1175 (21개)
//! - 종성: U+11A8 ~ U+11C2 (27개, "종성 없음"은 `Option::None`)

/// 초성 코드포인트 시작 (ㄱ)
const CHOSEONG_BASE: u32 = 0x1100;
/// 중성 코드포인트 시작 (ㅏ)
const JUNGSEONG_BASE: u32 = 0x1161;
/// 종성 코드포인트 시작 (ㄱ)
const JONGSEONG_BASE: u32 = 0x11A8;

/// 초성 개수
pub const CHOSEONG_COUNT: u8 = 19;
/// 중성 개수
pub const JUNGSEONG_COUNT: u8 = 21;
/// 종성 개수 (종성 없음 제외)
pub const JONGSEONG_COUNT: u8 = 27;

/// 초성
///
/// 인덱스 순서: ㄱ(0) ㄲ(1) ㄴ(2) ㄷ(3) ㄸ(4) ㄹ(5) ㅁ(6) ㅂ(7) ㅃ(8) ㅅ(9)
/// ㅆ(10) ㅇ(11) ㅈ(12) ㅉ(13) ㅊ(14) ㅋ(15) ㅌ(16) ㅍ(17) ㅎ(18)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Choseong(pub(crate) u8);

/// 중성
///
/// 인덱스 순서: ㅏ(0) ㅐ(1) ㅑ(2) ㅒ(3) ㅓ(4) ㅔ(5) ㅕ(6) ㅖ(7) ㅗ(8) ㅘ(9)
/// ㅙ(10) ㅚ(11) ㅛ(12) ㅜ(13) ㅝ(14) ㅞ(15) ㅟ(16) ㅠ(17) ㅡ(18) ㅢ(19) ㅣ(20)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Jungseong(pub(crate) u8);

/// 종성
///
/// 인덱스는 음절 조합 공식의 종성 인덱스와 같다 (1부터 시작, 0 = 종성 없음).
/// ㄱ(1) ㄲ(2) ㄳ(3) ㄴ(4) ㄵ(5) ㄶ(6) ㄷ(7) ㄹ(8) ㄺ(9) ㄻ(10) ㄼ(11) ㄽ(12)
/// ㄾ(13) ㄿ(14) ㅀ(15) ㅁ(16) ㅂ(17) ㅄ(18) ㅅ(19) ㅆ(20) ㅇ(21) ㅈ(22) ㅊ(23)
/// ㅋ(24) ㅌ(25) ㅍ(26) ㅎ(27)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Jongseong(pub(crate) u8);

impl Choseong {
    pub fn new(index: u8) -> Option<Self> {
        (index < CHOSEONG_COUNT).then_some(Self(index))
    }

    pub fn index(self) -> u8 {
        self.0
    }

    /// 첫가끝 초성 문자 (U+1100 블록)
    pub fn to_char(self) -> char {
        char::from_u32(CHOSEONG_BASE + self.0 as u32).unwrap_or('\u{1100}')
    }
}

impl Jungseong {
    pub fn new(index: u8) -> Option<Self> {
        (index < JUNGSEONG_COUNT).then_some(Self(index))
    }

    pub fn index(self) -> u8 {
        self.0
    }

    /// 첫가끝 중성 문자 (U+1161 블록)
    pub fn to_char(self) -> char {
        char::from_u32(JUNGSEONG_BASE + self.0 as u32).unwrap_or('\u{1161}')
    }
}

impl Jongseong {
    /// 종성 인덱스(1~27)로 생성
    pub fn new(index: u8) -> Option<Self> {
        (1..=JONGSEONG_COUNT).contains(&index).then_some(Self(index))
    }

    pub fn index(self) -> u8 {
        self.0
    }

    /// 첫가끝 종성 문자 (U+11A8 블록)
    pub fn to_char(self) -> char {
        char::from_u32(JONGSEONG_BASE + self.0 as u32 - 1).unwrap_or('\u{11A8}')
    }
}

/// 분류된 자모
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phoneme {
    /// 초성
    Initial(Choseong),
    /// 중성
    Medial(Jungseong),
    /// 종성
    Final(Jongseong),
}

impl Phoneme {
    /// 첫가끝 자모 문자
    pub fn to_char(self) -> char {
        match self {
            Phoneme::Initial(cho) => cho.to_char(),
            Phoneme::Medial(jung) => jung.to_char(),
            Phoneme::Final(jong) => jong.to_char(),
        }
    }
}

/// 첫가끝 자모 문자를 블록 소속에 따라 분류
/// 세 블록(초성/중성/종성)에 속하지 않으면 None
pub fn classify(c: char) -> Option<Phoneme> {
    let code = c as u32;
    match code {
        0x1100..=0x1112 => Some(Phoneme::Initial(Choseong((code - CHOSEONG_BASE) as u8))),
        0x1161..=0x1175 => Some(Phoneme::Medial(Jungseong((code - JUNGSEONG_BASE) as u8))),
        0x11A8..=0x11C2 => Some(Phoneme::Final(Jongseong((code - JONGSEONG_BASE) as u8 + 1))),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_bounds() {
        assert!(Choseong::new(18).is_some());
        assert!(Choseong::new(19).is_none());
        assert!(Jungseong::new(20).is_some());
        assert!(Jungseong::new(21).is_none());
        assert!(Jongseong::new(0).is_none()); // 종성 없음은 None으로 표현
        assert!(Jongseong::new(27).is_some());
        assert!(Jongseong::new(28).is_none());
    }

    #[test]
    fn test_to_char() {
        assert_eq!(Choseong(0).to_char(), '\u{1100}'); // ㄱ
        assert_eq!(Choseong(18).to_char(), '\u{1112}'); // ㅎ
        assert_eq!(Jungseong(0).to_char(), '\u{1161}'); // ㅏ
        assert_eq!(Jungseong(20).to_char(), '\u{1175}'); // ㅣ
        assert_eq!(Jongseong(1).to_char(), '\u{11A8}'); // ㄱ
        assert_eq!(Jongseong(27).to_char(), '\u{11C2}'); // ㅎ
    }

    #[test]
    fn test_classify() {
        assert_eq!(classify('\u{1100}'), Some(Phoneme::Initial(Choseong(0))));
        assert_eq!(classify('\u{1112}'), Some(Phoneme::Initial(Choseong(18))));
        assert_eq!(classify('\u{1161}'), Some(Phoneme::Medial(Jungseong(0))));
        assert_eq!(classify('\u{1175}'), Some(Phoneme::Medial(Jungseong(20))));
        assert_eq!(classify('\u{11A8}'), Some(Phoneme::Final(Jongseong(1))));
        assert_eq!(classify('\u{11C2}'), Some(Phoneme::Final(Jongseong(27))));

        // 블록 밖 (옛한글 영역, 호환용 자모, 완성형, 라틴)
        assert_eq!(classify('\u{1113}'), None);
        assert_eq!(classify('\u{1176}'), None);
        assert_eq!(classify('\u{11C3}'), None);
        assert_eq!(classify('ㄱ'), None);
        assert_eq!(classify('가'), None);
        assert_eq!(classify('a'), None);
    }

    #[test]
    fn test_classify_round_trip() {
        for i in 0..CHOSEONG_COUNT {
            let p = Phoneme::Initial(Choseong(i));
            assert_eq!(classify(p.to_char()), Some(p));
        }
        for i in 0..JUNGSEONG_COUNT {
            let p = Phoneme::Medial(Jungseong(i));
            assert_eq!(classify(p.to_char()), Some(p));
        }
        for i in 1..=JONGSEONG_COUNT {
            let p = Phoneme::Final(Jongseong(i));
            assert_eq!(classify(p.to_char()), Some(p));
        }
    }
}
