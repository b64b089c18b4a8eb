//! 조합 버퍼: 조합 중인 음절과 확정된 문자 큐

use crate::core::jamo::{Choseong, Jongseong, Jungseong};
use crate::core::unicode::compose_syllable;

/// 조합 중인 음절
///
/// 가능한 다섯 가지 상태만 표현한다. 중성 없이 종성만 있는 조합은 만들 수 없다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Syllable {
    /// 아무것도 없음
    #[default]
    Idle,
    /// 초성만 입력됨
    Initial(Choseong),
    /// 중성만 입력됨 (모아치기 대기 또는 재음절화 직후)
    MedialOnly(Jungseong),
    /// 초성+중성
    InitialMedial(Choseong, Jungseong),
    /// 초성+중성+종성
    Full(Choseong, Jungseong, Jongseong),
}

impl Syllable {
    pub fn is_idle(&self) -> bool {
        matches!(self, Syllable::Idle)
    }

    pub fn choseong(&self) -> Option<Choseong> {
        match *self {
            Syllable::Initial(cho)
            | Syllable::InitialMedial(cho, _)
            | Syllable::Full(cho, _, _) => Some(cho),
            Syllable::Idle | Syllable::MedialOnly(_) => None,
        }
    }

    pub fn jungseong(&self) -> Option<Jungseong> {
        match *self {
            Syllable::MedialOnly(jung)
            | Syllable::InitialMedial(_, jung)
            | Syllable::Full(_, jung, _) => Some(jung),
            Syllable::Idle | Syllable::Initial(_) => None,
        }
    }

    pub fn jongseong(&self) -> Option<Jongseong> {
        match *self {
            Syllable::Full(_, _, jong) => Some(jong),
            _ => None,
        }
    }

    /// (초성, 중성, 종성) 세 칸
    pub fn triple(&self) -> (Option<Choseong>, Option<Jungseong>, Option<Jongseong>) {
        (self.choseong(), self.jungseong(), self.jongseong())
    }

    /// 현재 상태로 표시할 문자 (Idle이면 None)
    pub fn compose(&self) -> Option<char> {
        compose_syllable(self.choseong(), self.jungseong(), self.jongseong())
    }
}

/// 확정된 문자 큐 (입력 순서 유지)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommitQueue {
    text: String,
}

impl CommitQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, c: char) {
        self.text.push(c);
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// 쌓인 문자를 꺼내고 큐를 비움
    pub fn drain(&mut self) -> String {
        std::mem::take(&mut self.text)
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }
}

/// 조합 중인 음절 + 확정 큐
#[derive(Debug, Clone, Default)]
pub struct CompositionBuffer {
    pub(crate) syllable: Syllable,
    pub(crate) committed: CommitQueue,
}

impl CompositionBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn syllable(&self) -> Syllable {
        self.syllable
    }

    /// 조합 중인 음절을 확정 큐로 옮기고 Idle로 초기화
    pub fn finalize(&mut self) {
        if let Some(c) = self.syllable.compose() {
            log::trace!("음절 확정: {}", c);
            self.committed.push(c);
        }
        self.syllable = Syllable::Idle;
    }

    pub fn peek(&self) -> String {
        self.syllable.compose().map(String::from).unwrap_or_default()
    }

    pub fn drain_committed(&mut self) -> String {
        self.committed.drain()
    }

    /// 조합 중인 음절과 확정 큐를 모두 버림
    pub fn clear(&mut self) {
        self.syllable = Syllable::Idle;
        self.committed.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_triple() {
        let s = Syllable::Full(Choseong(0), Jungseong(0), Jongseong(4));
        assert_eq!(
            s.triple(),
            (Some(Choseong(0)), Some(Jungseong(0)), Some(Jongseong(4)))
        );
        assert_eq!(Syllable::Idle.triple(), (None, None, None));
        assert_eq!(
            Syllable::MedialOnly(Jungseong(0)).triple(),
            (None, Some(Jungseong(0)), None)
        );
    }

    #[test]
    fn test_compose() {
        assert_eq!(Syllable::Idle.compose(), None);
        assert_eq!(Syllable::Initial(Choseong(0)).compose(), Some('ㄱ'));
        assert_eq!(Syllable::MedialOnly(Jungseong(0)).compose(), Some('ㅏ'));
        assert_eq!(
            Syllable::InitialMedial(Choseong(0), Jungseong(0)).compose(),
            Some('가')
        );
        assert_eq!(
            Syllable::Full(Choseong(0), Jungseong(0), Jongseong(4)).compose(),
            Some('간')
        );
    }

    #[test]
    fn test_commit_queue_drain() {
        let mut q = CommitQueue::new();
        q.push('가');
        q.push('ㄴ');
        assert_eq!(q.drain(), "가ㄴ");
        assert!(q.is_empty());
        assert_eq!(q.drain(), "");
    }

    #[test]
    fn test_finalize() {
        let mut buf = CompositionBuffer::new();
        buf.syllable = Syllable::InitialMedial(Choseong(2), Jungseong(0));
        buf.finalize();
        assert!(buf.syllable().is_idle());
        assert_eq!(buf.peek(), "");
        assert_eq!(buf.drain_committed(), "나");

        // Idle 확정은 아무것도 쌓지 않음
        buf.finalize();
        assert_eq!(buf.drain_committed(), "");
    }

    #[test]
    fn test_clear_discards_queue() {
        let mut buf = CompositionBuffer::new();
        buf.committed.push('가');
        buf.syllable = Syllable::Initial(Choseong(0));
        buf.clear();
        assert!(buf.syllable().is_idle());
        assert_eq!(buf.drain_committed(), "");
    }
}
