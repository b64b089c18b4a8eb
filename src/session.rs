//! 입력 세션: 호스트 입력기 프레임워크와 조합 엔진 사이의 얇은 어댑터
//!
//! 플랫폼 키 코드는 호스트 쪽에서 [`KeyEvent`]로 바꿔서 넘긴다.
//! 세션은 엔진의 공개 연산만 호출하고, 호스트가 반영할 결과를 [`KeyOutcome`]으로 돌려준다.

use crate::config::Config;
use crate::core::engine::HangulEngine;

/// 입력 모드
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// 한글 조합
    Hangul,
    /// 영문 그대로 통과
    Latin,
}

/// 호스트가 전달하는 키 입력
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyEvent {
    /// 출력 가능한 문자 키 (Shift 반영된 문자)
    Char(char),
    Backspace,
    Space,
    Enter,
    /// 한/영 전환 (Shift+Space, 한/영 키)
    ToggleMode,
    /// 수정 키 단독 입력 (Shift, Ctrl, Alt, Super, CapsLock)
    Modifier,
    /// Ctrl/Alt/Super가 함께 눌린 단축키
    Shortcut,
}

/// 키 처리 결과
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyOutcome {
    /// 세션이 키를 소비했는지 (false면 호스트가 원래 키를 처리)
    pub consumed: bool,
    /// 호스트 앱에 확정할 문자열
    pub commit: String,
    /// 조합 중 표시 문자열 (밑줄 등은 호스트 책임)
    pub preedit: String,
}

/// 포커스된 입력 필드 하나에 대응하는 세션
#[derive(Debug, Clone)]
pub struct Session {
    engine: HangulEngine,
    mode: InputMode,
}

impl Session {
    pub fn new() -> Self {
        Self {
            engine: HangulEngine::new(),
            mode: InputMode::Hangul,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self {
            engine: HangulEngine::from_config(config),
            mode: InputMode::Hangul,
        }
    }

    pub fn mode(&self) -> InputMode {
        self.mode
    }

    pub fn engine(&self) -> &HangulEngine {
        &self.engine
    }

    /// 키 입력 하나 처리
    pub fn handle(&mut self, event: KeyEvent) -> KeyOutcome {
        match event {
            KeyEvent::Modifier => self.outcome(false, String::new()),
            KeyEvent::ToggleMode => {
                let commit = self.commit_all();
                self.mode = match self.mode {
                    InputMode::Hangul => InputMode::Latin,
                    InputMode::Latin => InputMode::Hangul,
                };
                log::debug!("입력 모드 전환: {:?}", self.mode);
                self.outcome(true, commit)
            }
            KeyEvent::Shortcut | KeyEvent::Space | KeyEvent::Enter => {
                // 조합 확정 후 키는 호스트가 처리
                let commit = self.commit_all();
                self.outcome(false, commit)
            }
            _ if self.mode == InputMode::Latin => self.outcome(false, String::new()),
            KeyEvent::Backspace => {
                let changed = self.engine.backspace();
                self.outcome(changed, String::new())
            }
            KeyEvent::Char(c) => {
                let consumed = self.engine.process_key(c);
                let commit = if consumed {
                    self.engine.drain_committed()
                } else {
                    // 매핑 없는 키에서 엔진이 이미 확정했으므로 큐만 비우면 됨
                    self.commit_all()
                };
                self.outcome(consumed, commit)
            }
        }
    }

    /// 포커스 해제: 조합 중인 글자까지 확정
    pub fn focus_out(&mut self) -> String {
        self.commit_all()
    }

    /// 조합 취소: 확정하지 않고 버림
    pub fn cancel(&mut self) {
        self.engine.reset();
    }

    /// 현재 조합 표시 문자열
    pub fn preedit(&self) -> String {
        self.engine.peek_composed()
    }

    fn commit_all(&mut self) -> String {
        self.engine.flush();
        self.engine.drain_committed()
    }

    fn outcome(&self, consumed: bool, commit: String) -> KeyOutcome {
        KeyOutcome {
            consumed,
            commit,
            preedit: self.engine.peek_composed(),
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
