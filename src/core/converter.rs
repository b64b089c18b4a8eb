//! 영문 키 문자열 -> 한글 일괄 변환기

use crate::core::engine::HangulEngine;

/// 영문 문자열을 한글 문자열로 변환 (기본 설정 엔진 사용)
/// 변환할 수 없는 문자(숫자, 특수문자, 공백)는 제자리에 그대로 유지
pub fn convert(input: &str) -> String {
    let mut engine = HangulEngine::new();
    convert_with(&mut engine, input)
}

/// 주어진 엔진으로 문자열 변환
/// 엔진의 모아치기/백스페이스 설정이 그대로 적용되며, 끝나면 엔진은 Idle 상태
pub fn convert_with(engine: &mut HangulEngine, input: &str) -> String {
    let mut output = String::with_capacity(input.len());

    for c in input.chars() {
        if !engine.process_key(c) {
            // 매핑 없는 키: 앞 음절이 확정된 뒤에 원래 문자를 그대로 둠
            output.push_str(&engine.drain_committed());
            output.push(c);
        }
    }

    engine.flush();
    output.push_str(&engine.drain_committed());
    output
}
