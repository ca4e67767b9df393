use std::env;

#[derive(Clone)]
pub struct Config {
    pub base_url: String,
    pub port: u16,
    pub static_dir: String,
    pub default_per_page: usize,
    pub testing_mode: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, env::VarError> {
        Ok(Self {
            base_url: env::var("BASE_URL").unwrap_or_else(|_| "http://localhost:3000".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .unwrap_or(3000),
            static_dir: env::var("STATIC_DIR").unwrap_or_else(|_| "./static".to_string()),
            default_per_page: env::var("DEFAULT_PER_PAGE")
                .unwrap_or_else(|_| "10".to_string())
                .parse()
                .unwrap_or(10),
            testing_mode: env::var("TESTING_MODE")
                .unwrap_or_else(|_| "false".to_string())
                .to_lowercase() == "true",
        })
    }
}
