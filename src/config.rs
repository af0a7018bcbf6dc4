use log::Level;

pub const BUSINESS_NAME: &str = "Davidoff Real Estate Solutions";

/// Local dialing form used by the call button.
pub const PHONE_LOCAL: &str = "0543210002";
pub const PHONE_INTERNATIONAL: &str = "+972543210002";
pub const WHATSAPP_NUMBER: &str = "972543210002";
pub const CONTACT_EMAIL: &str = "davidoffpm@gmail.com";
pub const SMS_GREETING: &str = "Hi, I have a property in Israel I need help with.";

/// Fraction of a section that must be visible before it becomes active.
pub const SECTION_VISIBILITY_THRESHOLD: f64 = 0.2;
/// Fraction of a block that must be visible before it is revealed.
pub const REVEAL_THRESHOLD: f64 = 0.1;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
