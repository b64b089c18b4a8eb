//! 한글 조합 핵심 모듈

pub mod buffer;
pub mod converter;
pub mod engine;
pub mod jamo;
pub mod jamo_mapper;
pub mod unicode;
