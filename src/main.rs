//! hanmoa - 표준 입력의 두벌식 영문 키를 한글로 조합하는 CLI

use hanmoa::config::load_config;
use hanmoa::{BackspaceMode, KeyEvent, Session};
use std::io::{self, BufRead, Write};

/// 한 줄을 세션에 키 단위로 입력하고 화면에 남을 문자열을 반환
fn compose_line(session: &mut Session, line: &str) -> String {
    let mut out = String::with_capacity(line.len());

    for c in line.chars() {
        let event = if c == ' ' {
            KeyEvent::Space
        } else {
            KeyEvent::Char(c)
        };
        let outcome = session.handle(event);
        out.push_str(&outcome.commit);
        if !outcome.consumed {
            // 소비되지 않은 키는 호스트가 그대로 입력
            out.push(c);
        }
    }

    out.push_str(&session.handle(KeyEvent::Enter).commit);
    out
}

fn main() {
    // 로깅 초기화 (error/warn만 출력)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    // 설정 로드 후 명령행 옵션으로 덮어쓰기
    let mut config = load_config();
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--no-moa" => config.moa_jjiki = false,
            "--syllable-backspace" => config.backspace_mode = BackspaceMode::Syllable,
            other => log::warn!("알 수 없는 옵션 무시: {}", other),
        }
    }
    log::debug!("설정: {:?}", config);

    let mut session = Session::from_config(&config);
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut stdout = stdout.lock();

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                log::error!("입력 읽기 실패: {}", e);
                break;
            }
        };
        let composed = compose_line(&mut session, &line);
        if let Err(e) = writeln!(stdout, "{}", composed) {
            log::error!("출력 실패: {}", e);
            break;
        }
    }
}
