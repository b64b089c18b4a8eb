//! 한글 조합 엔진 (키 입력 단위 상태 기계)

use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::core::buffer::{CompositionBuffer, Syllable};
use crate::core::jamo::{Choseong, Jungseong, Phoneme};
use crate::core::jamo_mapper::key_to_phoneme;
use crate::core::unicode::{
    combine_final, combine_medial, final_to_initial, initial_to_final, split_final, split_medial,
};

/// 백스페이스 동작 방식
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackspaceMode {
    /// 자모 하나씩 지움 (종성 -> 중성 -> 초성)
    #[default]
    Jamo,
    /// 조합 중인 음절 전체를 지움
    Syllable,
}

/// 한글 조합 엔진
///
/// 입력 세션 하나가 엔진 하나를 독점한다. 모든 연산은 동기적이며
/// 호출자가 키 입력을 한 번에 하나씩 전달해야 한다.
#[derive(Debug, Clone)]
pub struct HangulEngine {
    buffer: CompositionBuffer,
    /// 모아치기: 자음보다 먼저 입력된 모음을 뒤따르는 자음과 한 음절로 묶음
    moa_jjiki_enabled: bool,
    backspace_mode: BackspaceMode,
}

impl HangulEngine {
    /// 새 엔진 생성 (모아치기 켜짐, 자모 단위 백스페이스)
    pub fn new() -> Self {
        Self {
            buffer: CompositionBuffer::new(),
            moa_jjiki_enabled: true,
            backspace_mode: BackspaceMode::default(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        let mut engine = Self::new();
        engine.moa_jjiki_enabled = config.moa_jjiki;
        engine.backspace_mode = config.backspace_mode;
        engine
    }

    pub fn set_moa_jjiki_enabled(&mut self, enabled: bool) {
        self.moa_jjiki_enabled = enabled;
    }

    pub fn moa_jjiki_enabled(&self) -> bool {
        self.moa_jjiki_enabled
    }

    pub fn set_backspace_mode(&mut self, mode: BackspaceMode) {
        self.backspace_mode = mode;
    }

    pub fn backspace_mode(&self) -> BackspaceMode {
        self.backspace_mode
    }

    /// 현재 조합 중인 음절
    pub fn syllable(&self) -> Syllable {
        self.buffer.syllable()
    }

    /// 영문 키 하나를 처리
    ///
    /// 매핑되지 않는 키는 조합 중인 음절을 확정한 뒤 false를 반환한다.
    /// 호출자는 이 경우 원래 키를 그대로 통과시켜야 한다.
    ///
    /// `key`는 문자 하나여야 한다 (여러 글자 입력은 호출자 책임).
    pub fn process_key(&mut self, key: char) -> bool {
        match key_to_phoneme(key) {
            Some(phoneme) => {
                self.feed(phoneme);
                true
            }
            None => {
                self.buffer.finalize();
                false
            }
        }
    }

    /// 분류된 자모를 입력하여 상태 전이
    pub fn feed(&mut self, phoneme: Phoneme) {
        match phoneme {
            Phoneme::Initial(cho) => self.feed_initial(cho),
            Phoneme::Medial(jung) => self.feed_medial(jung),
            Phoneme::Final(jong) => {
                // 종성은 같은 자음(겹받침이면 두 자음)을 차례로 입력한 것으로 취급
                let (first, second) = split_final(jong);
                for part in std::iter::once(first).chain(second) {
                    if let Some(cho) = final_to_initial(part) {
                        self.feed_initial(cho);
                    }
                }
            }
        }
    }

    /// 자음 입력 처리
    fn feed_initial(&mut self, cho: Choseong) {
        let next = match self.buffer.syllable {
            Syllable::Idle => Syllable::Initial(cho),
            Syllable::Initial(_) => {
                // 자음 두 개가 연속되면 앞 자음은 낱자로 확정
                self.buffer.finalize();
                Syllable::Initial(cho)
            }
            Syllable::MedialOnly(jung) => {
                if self.moa_jjiki_enabled {
                    // 먼저 입력된 모음에 초성을 붙임
                    Syllable::InitialMedial(cho, jung)
                } else {
                    self.buffer.finalize();
                    Syllable::Initial(cho)
                }
            }
            Syllable::InitialMedial(c, j) => match initial_to_final(cho) {
                Some(jong) => Syllable::Full(c, j, jong),
                None => {
                    // 종성 불가 자음 (ㄸ, ㅃ, ㅉ)
                    self.buffer.finalize();
                    Syllable::Initial(cho)
                }
            },
            Syllable::Full(c, j, jong) => {
                match initial_to_final(cho).and_then(|f| combine_final(jong, f)) {
                    Some(combined) => Syllable::Full(c, j, combined),
                    None => {
                        self.buffer.finalize();
                        Syllable::Initial(cho)
                    }
                }
            }
        };
        self.buffer.syllable = next;
    }

    /// 모음 입력 처리
    fn feed_medial(&mut self, jung: Jungseong) {
        let next = match self.buffer.syllable {
            Syllable::Idle => Syllable::MedialOnly(jung),
            Syllable::Initial(c) => Syllable::InitialMedial(c, jung),
            Syllable::MedialOnly(j) => match combine_medial(j, jung) {
                Some(combined) => Syllable::MedialOnly(combined),
                None => {
                    self.buffer.finalize();
                    Syllable::MedialOnly(jung)
                }
            },
            Syllable::InitialMedial(c, j) => match combine_medial(j, jung) {
                Some(combined) => Syllable::InitialMedial(c, combined),
                None => {
                    // 앞 음절을 확정하고 모음만 새로 시작 (초성은 넘기지 않음)
                    self.buffer.finalize();
                    Syllable::MedialOnly(jung)
                }
            },
            Syllable::Full(c, j, jong) => {
                // 종성을 다음 초성으로 분리
                // 겹받침이면 뒤 자음만, 단일 종성이면 전체를 넘김
                let moved = match split_final(jong) {
                    (first, Some(second)) => {
                        self.buffer.syllable = Syllable::Full(c, j, first);
                        second
                    }
                    (single, None) => {
                        self.buffer.syllable = Syllable::InitialMedial(c, j);
                        single
                    }
                };
                self.buffer.finalize();
                match final_to_initial(moved) {
                    Some(next_cho) => Syllable::InitialMedial(next_cho, jung),
                    // 도달 불가: 종성으로 들어온 자음은 모두 초성 짝이 있음
                    None => Syllable::MedialOnly(jung),
                }
            }
        };
        self.buffer.syllable = next;
    }

    /// 백스페이스 처리
    /// 조합 중인 음절이 바뀌었으면 true, Idle이면 false (호출자가 직접 지워야 함)
    pub fn backspace(&mut self) -> bool {
        let current = self.buffer.syllable;
        if current.is_idle() {
            return false;
        }

        self.buffer.syllable = match self.backspace_mode {
            BackspaceMode::Syllable => Syllable::Idle,
            BackspaceMode::Jamo => match current {
                Syllable::Idle => Syllable::Idle,
                Syllable::Initial(_) => Syllable::Idle,
                Syllable::MedialOnly(j) => match split_medial(j) {
                    (first, Some(_)) => Syllable::MedialOnly(first),
                    (_, None) => Syllable::Idle,
                },
                Syllable::InitialMedial(c, j) => match split_medial(j) {
                    (first, Some(_)) => Syllable::InitialMedial(c, first),
                    (_, None) => Syllable::Initial(c),
                },
                Syllable::Full(c, j, jong) => match split_final(jong) {
                    (first, Some(_)) => Syllable::Full(c, j, first),
                    (_, None) => Syllable::InitialMedial(c, j),
                },
            },
        };
        true
    }

    /// 조합 중인 음절을 확정 큐로 옮김
    pub fn flush(&mut self) {
        self.buffer.finalize();
    }

    /// 조합 중인 음절과 확정 큐를 모두 버림
    pub fn reset(&mut self) {
        self.buffer.clear();
    }

    /// 조합 중인 음절 미리보기 (Idle이면 빈 문자열)
    pub fn peek_composed(&self) -> String {
        self.buffer.peek()
    }

    /// 확정된 문자를 꺼내고 큐를 비움
    pub fn drain_committed(&mut self) -> String {
        self.buffer.drain_committed()
    }
}

impl Default for HangulEngine {
    fn default() -> Self {
        Self::new()
    }
}
