//! # Configuration Module
//!
//! 레지스트리의 설정 관리를 담당하는 모듈입니다.
//! 환경 변수 기반의 설정값들을 한곳에서 관리합니다.
//!
//! ## 모듈 구성
//!
//! - [`registry_config`] - 실행 환경, 로그 접두어, 상세도, 진단 보관 한도
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use entity_registry::config::{Environment, RegistryConfig};
//! use entity_registry::core::Registry;
//!
//! let env = Environment::current();
//! log::info!("Current environment: {:?}", env);
//!
//! let registry = Registry::with_config(RegistryConfig::from_env());
//! ```
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! export ENVIRONMENT="development"      # development, test, staging, production
//! export REGISTRY_LOG_PREFIX="Registry"
//! export REGISTRY_VERBOSITY="50"         # 0-255
//! export REGISTRY_MAX_DIAGNOSTICS="256"
//! ```
//!
//! 데모 바이너리는 `PROFILE` 값에 맞는 `.env.<profile>` 파일을 먼저 읽습니다.

pub mod registry_config;

pub use registry_config::*;
