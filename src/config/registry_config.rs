//! 레지스트리 설정 관리 모듈
//!
//! 실행 환경 감지와 레지스트리 로그/진단 설정을 관리합니다.

use std::env;

/// 애플리케이션 실행 환경
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    /// 개발 환경 - 상세 로그 출력
    Development,
    /// 테스트 환경 - 자동화된 테스트용 설정
    Test,
    /// 스테이징 환경 - 프로덕션 유사 환경
    Staging,
    /// 프로덕션 환경 - 경고와 에러 위주의 출력
    Production,
}

impl Environment {
    /// 현재 실행 환경을 감지합니다.
    ///
    /// `ENVIRONMENT` 또는 `NODE_ENV` 환경 변수를 확인하며,
    /// 설정되지 않은 경우 `Production`을 기본값으로 사용합니다.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let env = Environment::current();
    /// if env == Environment::Development {
    ///     log::info!("verbose registry output enabled");
    /// }
    /// ```
    pub fn current() -> Self {
        let name = env::var("ENVIRONMENT")
            .or_else(|_| env::var("NODE_ENV"))
            .unwrap_or_else(|_| "production".to_string());
        Self::from_str(&name)
    }

    /// 문자열에서 Environment를 생성합니다.
    ///
    /// # Arguments
    ///
    /// * `s` - 환경 이름 문자열 (대소문자 무관)
    ///
    /// # Returns
    ///
    /// 해당하는 Environment 값. 알 수 없는 값인 경우 `Production`을 반환합니다.
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }
}

/// 레지스트리 로그 및 진단 설정
///
/// # Environment Variables
///
/// - `REGISTRY_LOG_PREFIX`: 로그 줄 앞에 붙는 접두어 (기본값 `Registry`)
/// - `REGISTRY_VERBOSITY`: 상세 로그 임계값 (0-255)
/// - `REGISTRY_MAX_DIAGNOSTICS`: 보관할 최대 진단 수
#[derive(Debug, Clone, PartialEq)]
pub struct RegistryConfig {
    pub log_prefix: String,
    /// 이 값 이하의 레벨을 가진 상세 메시지만 `debug!`로 출력됩니다.
    pub verbosity: u8,
    pub max_diagnostics: usize,
}

impl RegistryConfig {
    pub const DEFAULT_PREFIX: &'static str = "Registry";
    pub const DEFAULT_MAX_DIAGNOSTICS: usize = 256;

    /// 현재 환경 변수에서 설정을 읽습니다.
    ///
    /// 값이 없거나 파싱에 실패하면 현재 환경의 기본값을 사용합니다.
    pub fn from_env() -> Self {
        let environment = Environment::current();

        let log_prefix = env::var("REGISTRY_LOG_PREFIX")
            .ok()
            .filter(|prefix| !prefix.trim().is_empty())
            .unwrap_or_else(|| Self::DEFAULT_PREFIX.to_string());

        let verbosity = env::var("REGISTRY_VERBOSITY")
            .ok()
            .and_then(|value| value.parse::<u8>().ok())
            .unwrap_or_else(|| Self::verbosity_for_env(&environment));

        let max_diagnostics = env::var("REGISTRY_MAX_DIAGNOSTICS")
            .ok()
            .and_then(|value| value.parse::<usize>().ok())
            .filter(|max| *max > 0)
            .unwrap_or(Self::DEFAULT_MAX_DIAGNOSTICS);

        Self {
            log_prefix,
            verbosity,
            max_diagnostics,
        }
    }

    /// 특정 환경에 대한 기본 상세도를 반환합니다.
    ///
    /// # Environment Defaults
    ///
    /// - Development/Test: 50 (생성자 후보 거절까지 출력)
    /// - Staging: 10 (바인딩과 resolve 단계)
    /// - Production: 2
    pub fn verbosity_for_env(env: &Environment) -> u8 {
        match env {
            Environment::Development => 50,
            Environment::Test => 50,
            Environment::Staging => 10,
            Environment::Production => 2,
        }
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.log_prefix = prefix.into();
        self
    }

    pub fn with_verbosity(mut self, verbosity: u8) -> Self {
        self.verbosity = verbosity;
        self
    }

    pub fn with_max_diagnostics(mut self, max: usize) -> Self {
        self.max_diagnostics = max.max(1);
        self
    }
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            log_prefix: Self::DEFAULT_PREFIX.to_string(),
            verbosity: Self::verbosity_for_env(&Environment::Production),
            max_diagnostics: Self::DEFAULT_MAX_DIAGNOSTICS,
        }
    }
}
