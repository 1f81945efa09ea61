// src/config/consts.rs

// Source page
pub const PAGE_URL: &str = "https://escaramuza.com.uy/agenda/actividades-en-escaramuza";

// Where announced activities show up in the page DOM.
// Headings plus the class hooks the site has used across redesigns.
pub const SELECTORS: &[&str] = &["h2", "h3", ".event-title", ".activity-title"];

// Snapshot of the last successful fetch
pub const SNAPSHOT_FILE: &str = "actividades.json";

// Mail endpoints
pub const SMTP_HOST: &str = "smtp.gmail.com";
pub const BREVO_ENDPOINT: &str = "https://api.brevo.com/v3/smtp/email";

pub const EMAIL_SENDER: &str = "escaramuzascrap@gmail.com";
pub const EMAIL_SENDER_NAME: &str = "Escaramuza Watch";
pub const EMAIL_RECIPIENT: &str = "santimar200404@gmail.com";
pub const EMAIL_SUBJECT: &str = "🆕 Nuevas actividades en Escaramuza";

// Environment
pub const ENV_EMAIL_PASSWORD: &str = "EMAIL_PASSWORD";
pub const ENV_BREVO_API_KEY: &str = "BREVO_API_KEY";
pub const ENV_PORT: &str = "PORT";

// Defaults
pub const DEFAULT_TIMEOUT_SECS: u64 = 5;
pub const DEFAULT_PORT: u16 = 3000;
