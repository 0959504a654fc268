use std::env;

/// Runtime environment, selected by the `ENVIRONMENT` variable.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Environment {
    #[default]
    Development,
    Production,
}

impl Environment {
    pub fn is_development(self) -> bool {
        self == Self::Development
    }

    pub fn is_production(self) -> bool {
        self == Self::Production
    }

    fn from_env() -> Self {
        match env::var("ENVIRONMENT").as_deref() {
            Ok("production" | "prod") => Self::Production,
            _ => Self::Development,
        }
    }
}

/// Application configuration read from environment variables.
///
/// Everything has a development default: a bare `serv` starts listening on
/// localhost with the bundled content and permissive CORS.
#[derive(Clone, Debug)]
pub struct ApiConfig {
    pub env: Environment,
    /// Address the server binds to
    pub bind_addr: String,
    /// Origins allowed by CORS; empty means very permissive (development)
    pub allowed_origins: Vec<String>,
    /// Number of questions in a generated level test
    pub level_test_questions: usize,
}

impl ApiConfig {
    pub fn from_env() -> Self {
        let allowed_origins = env::var("ALLOWED_ORIGINS")
            .map(|raw| {
                raw.split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(String::from)
                    .collect()
            })
            .unwrap_or_default();

        let level_test_questions = env::var("LEVEL_TEST_QUESTIONS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(10);

        Self {
            env: Environment::from_env(),
            bind_addr: env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string()),
            allowed_origins,
            level_test_questions,
        }
    }
}
