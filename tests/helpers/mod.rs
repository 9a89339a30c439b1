// ==========================================
// 통합 테스트 공용 도우미
// ==========================================

#![allow(dead_code)]

pub mod fixtures;
pub mod mock_config;
pub mod test_data_builder;
