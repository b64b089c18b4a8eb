//! 통합 테스트 - 공개 API로 조합 동작 검증

use hanmoa::core::unicode::{combine_final, combine_medial, compose_syllable, split_final, split_medial};
use hanmoa::{
    convert, key_to_phoneme, BackspaceMode, Choseong, HangulEngine, Jongseong, Jungseong,
    KeyEvent, Phoneme, Session, Syllable,
};

fn engine_with(keys: &str) -> HangulEngine {
    let mut engine = HangulEngine::new();
    for c in keys.chars() {
        engine.process_key(c);
    }
    engine
}

#[test]
fn test_composition_formula() {
    let g = Choseong::new(0).unwrap();
    let a = Jungseong::new(0).unwrap();
    assert_eq!(compose_syllable(Some(g), Some(a), None), Some('\u{AC00}'));
}

#[test]
fn test_basic_sequence() {
    let mut engine = engine_with("rk");
    assert_eq!(engine.peek_composed(), "가");
    assert_eq!(engine.drain_committed(), "");

    engine.process_key('s');
    assert_eq!(engine.peek_composed(), "간");

    engine.process_key('r');
    assert_eq!(engine.drain_committed(), "간");
    assert_eq!(engine.peek_composed(), "ㄱ");
}

#[test]
fn test_diphthong() {
    assert_eq!(engine_with("dhk").peek_composed(), "와");
}

#[test]
fn test_combine_split_laws() {
    for a in 0..21 {
        for b in 0..21 {
            let (a, b) = (Jungseong::new(a).unwrap(), Jungseong::new(b).unwrap());
            if let Some(c) = combine_medial(a, b) {
                assert_eq!(split_medial(c), (a, Some(b)));
            }
        }
    }

    let mut clusters = 0;
    for a in 1..=27 {
        for b in 1..=27 {
            let (a, b) = (Jongseong::new(a).unwrap(), Jongseong::new(b).unwrap());
            if let Some(c) = combine_final(a, b) {
                assert_eq!(split_final(c), (a, Some(b)));
                clusters += 1;
            }
        }
    }
    assert_eq!(clusters, 11);
}

#[test]
fn test_moa_jjiki() {
    let mut on = HangulEngine::new();
    on.set_moa_jjiki_enabled(true);
    on.process_key('k');
    on.process_key('r');
    assert_eq!(on.peek_composed(), "가");

    let mut off = HangulEngine::new();
    off.set_moa_jjiki_enabled(false);
    off.process_key('k');
    off.process_key('r');
    assert_eq!(off.drain_committed(), "ㅏ");
    assert_eq!(off.peek_composed(), "ㄱ");
}

#[test]
fn test_backspace_then_replay_restores_state() {
    for keys in ["gks", "dlfr", "dhk", "rhkd", "qnpf", "k"] {
        let mut engine = engine_with(keys);
        let before = engine.syllable();
        assert!(engine.backspace());
        engine.process_key(keys.chars().last().unwrap());
        assert_eq!(engine.syllable(), before, "{}", keys);
    }
}

#[test]
fn test_idle_backspace() {
    let mut engine = HangulEngine::new();
    assert!(!engine.backspace());
    assert_eq!(engine.syllable(), Syllable::Idle);
}

#[test]
fn test_syllable_backspace_mode() {
    let mut engine = engine_with("gks");
    engine.set_backspace_mode(BackspaceMode::Syllable);
    assert!(engine.backspace());
    assert_eq!(engine.peek_composed(), "");
}

#[test]
fn test_key_table_shift_asymmetry() {
    // 쌍자음
    assert_ne!(key_to_phoneme('r'), key_to_phoneme('R'));
    // o/p 는 다른 모음
    assert_ne!(key_to_phoneme('o'), key_to_phoneme('O'));
    // 나머지 모음은 같음
    assert_eq!(key_to_phoneme('k'), key_to_phoneme('K'));
    assert!(matches!(key_to_phoneme('K'), Some(Phoneme::Medial(_))));
}

#[test]
fn test_convert_sentences() {
    assert_eq!(convert("dkssudgktpdy"), "안녕하세요");
    assert_eq!(convert("gksrmf thtm"), "한글 소스");
    assert_eq!(convert("zjavbxj"), "컴퓨터");
    assert_eq!(convert("vmfhrmfoa"), "프로그램");
    assert_eq!(convert("rk!sk"), "가!나");
    assert_eq!(convert("dlfrdj"), "읽어");
}

#[test]
fn test_session_typing() {
    let mut session = Session::new();
    let mut text = String::new();
    for c in "gksrmf".chars() {
        text.push_str(&session.handle(KeyEvent::Char(c)).commit);
    }
    assert_eq!(session.preedit(), "글");
    let out = session.handle(KeyEvent::Space);
    text.push_str(&out.commit);
    assert!(!out.consumed);
    assert_eq!(text, "한글");
    assert!(session.engine().syllable().is_idle());
}
