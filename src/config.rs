use std::env;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub port: u16,
    pub admin_token: String,
    pub business_name: String,
    pub business_phone: String,
    pub service_area: String,
    pub intake_provider: String,
    pub intake_url: String,
    pub intake_delay_ms: u64,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
            admin_token: env::var("ADMIN_TOKEN").unwrap_or_else(|_| "changeme".to_string()),
            business_name: env::var("BUSINESS_NAME")
                .unwrap_or_else(|_| "Evergreen Cleaners".to_string()),
            business_phone: env::var("BUSINESS_PHONE")
                .unwrap_or_else(|_| "425-244-1310".to_string()),
            service_area: env::var("SERVICE_AREA").unwrap_or_else(|_| "Everett, WA".to_string()),
            intake_provider: env::var("INTAKE_PROVIDER")
                .unwrap_or_else(|_| "simulated".to_string()),
            intake_url: env::var("INTAKE_URL").unwrap_or_default(),
            intake_delay_ms: env::var("INTAKE_DELAY_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(900),
        }
    }
}
