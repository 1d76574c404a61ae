use log::Level;

#[cfg(debug_assertions)]
pub fn get_log_level() -> Level {
    Level::Debug  // Consent toggles are logged at debug while developing
}

#[cfg(not(debug_assertions))]
pub fn get_log_level() -> Level {
    Level::Info
}

pub const PRACTITIONER_NAME: &str = "Dr. [Name]";
pub const CLINIC_EMAIL: &str = "clinic@dr[name].com.my";
pub const CLINIC_PHONE: &str = "+603 XXXX XXXX";
pub const CLINIC_LOCATION: &str = "Kuala Lumpur, Malaysia";

// Template accent, used by the inquiry page for the consent pair
pub const ACCENT_COLOR: &str = "#dc2626";
pub const ACCENT_TEXT_COLOR: &str = "#fff";

/// How long the "inquiry prepared" confirmation stays visible, in ms.
pub const CONFIRMATION_TIMEOUT_MS: u32 = 6_000;
