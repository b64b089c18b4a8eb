pub mod config;
pub mod core;
pub mod session;

pub use config::{load_config, Config, ConfigError};
pub use crate::core::buffer::Syllable;
pub use crate::core::converter::{convert, convert_with};
pub use crate::core::engine::{BackspaceMode, HangulEngine};
pub use crate::core::jamo::{classify, Choseong, Jongseong, Jungseong, Phoneme};
pub use crate::core::jamo_mapper::key_to_phoneme;
pub use session::{InputMode, KeyEvent, KeyOutcome, Session};
