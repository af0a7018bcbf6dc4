//! Contact actions. Every action ends as a URI handed to the browser;
//! nothing is sent by the site itself.

use log::{info, warn};
use web_sys::window;

use crate::config;
use crate::error::SiteError;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuoteRequest {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub service: String,
    pub message: String,
}

impl QuoteRequest {
    pub fn subject(&self) -> String {
        format!("Quote Request - {}", self.name)
    }

    pub fn body(&self) -> String {
        [
            format!("Name: {}", self.name),
            format!("Phone: {}", self.phone),
            format!("Email: {}", self.email),
            format!("Service Needed: {}", self.service),
            String::new(),
            "Message:".to_string(),
            self.message.clone(),
        ]
        .join("\r\n")
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ContactAction {
    Call,
    Sms,
    Email,
    WhatsApp,
    Quote(QuoteRequest),
}

/// Browsing context the URI is opened in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Target {
    SameTab,
    NewTab,
}

impl Target {
    pub fn as_str(self) -> &'static str {
        match self {
            Target::SameTab => "_self",
            Target::NewTab => "_blank",
        }
    }
}

impl ContactAction {
    pub fn uri(&self) -> String {
        match self {
            ContactAction::Call => format!("tel:{}", config::PHONE_LOCAL),
            ContactAction::Sms => format!(
                "sms:{}?body={}",
                config::PHONE_INTERNATIONAL,
                urlencoding::encode(config::SMS_GREETING)
            ),
            ContactAction::Email => format!("mailto:{}", config::CONTACT_EMAIL),
            ContactAction::WhatsApp => format!("https://wa.me/{}", config::WHATSAPP_NUMBER),
            ContactAction::Quote(request) => format!(
                "mailto:{}?subject={}&body={}",
                config::CONTACT_EMAIL,
                urlencoding::encode(&request.subject()),
                urlencoding::encode(&request.body())
            ),
        }
    }

    pub fn target(&self) -> Target {
        match self {
            ContactAction::WhatsApp => Target::NewTab,
            _ => Target::SameTab,
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            ContactAction::Call => "call",
            ContactAction::Sms => "sms",
            ContactAction::Email => "email",
            ContactAction::WhatsApp => "whatsapp",
            ContactAction::Quote(_) => "quote",
        }
    }
}

/// Whatever can take a URI off our hands.
pub trait UriLauncher {
    fn launch(&self, uri: &str, target: Target) -> Result<(), SiteError>;
}

pub struct WindowLauncher;

impl UriLauncher for WindowLauncher {
    fn launch(&self, uri: &str, target: Target) -> Result<(), SiteError> {
        let window = window().ok_or(SiteError::NoWindow)?;
        window
            .open_with_url_and_target(uri, target.as_str())
            .map(|_| ())
            .map_err(|e| SiteError::HandoffRejected {
                uri: uri.to_string(),
                reason: SiteError::describe(&e),
            })
    }
}

/// Hands the action off exactly once. Failures are logged, never surfaced.
pub fn dispatch_with(launcher: &impl UriLauncher, action: &ContactAction) {
    let uri = action.uri();
    info!("Contact handoff: {}", action.kind());
    if let Err(e) = launcher.launch(&uri, action.target()) {
        warn!("Contact handoff failed: {}", e);
    }
}

pub fn dispatch(action: &ContactAction) {
    dispatch_with(&WindowLauncher, action);
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    pub(crate) struct RecordingLauncher {
        pub launched: RefCell<Vec<(String, Target)>>,
        pub fail: bool,
    }

    impl UriLauncher for RecordingLauncher {
        fn launch(&self, uri: &str, target: Target) -> Result<(), SiteError> {
            self.launched.borrow_mut().push((uri.to_string(), target));
            if self.fail {
                return Err(SiteError::HandoffRejected {
                    uri: uri.to_string(),
                    reason: "no handler".to_string(),
                });
            }
            Ok(())
        }
    }

    fn jane() -> QuoteRequest {
        QuoteRequest {
            name: "Jane Doe".to_string(),
            phone: "555-1234".to_string(),
            email: "jane@x.com".to_string(),
            service: "Renovations".to_string(),
            message: "Leak in bathroom".to_string(),
        }
    }

    fn query_param(uri: &str, key: &str) -> String {
        let query = uri.split_once('?').map(|(_, q)| q).unwrap_or_default();
        let raw = query
            .split('&')
            .find_map(|pair| pair.strip_prefix(&format!("{}=", key)))
            .unwrap_or_default();
        urlencoding::decode(raw).unwrap().into_owned()
    }

    #[test]
    fn fixed_contact_uris() {
        assert_eq!(ContactAction::Call.uri(), "tel:0543210002");
        assert_eq!(ContactAction::Email.uri(), "mailto:davidoffpm@gmail.com");
        assert_eq!(ContactAction::WhatsApp.uri(), "https://wa.me/972543210002");
        let sms = ContactAction::Sms.uri();
        assert!(sms.starts_with("sms:+972543210002?body="));
        assert_eq!(query_param(&sms, "body"), config::SMS_GREETING);
    }

    #[test]
    fn only_whatsapp_opens_a_new_tab() {
        assert_eq!(ContactAction::WhatsApp.target(), Target::NewTab);
        assert_eq!(ContactAction::Call.target(), Target::SameTab);
        assert_eq!(ContactAction::Quote(jane()).target(), Target::SameTab);
    }

    #[test]
    fn quote_draft_carries_fields_in_order() {
        let uri = ContactAction::Quote(jane()).uri();
        assert!(uri.starts_with("mailto:davidoffpm@gmail.com?subject="));

        let subject = query_param(&uri, "subject");
        assert!(subject.contains("Jane Doe"));

        let body = query_param(&uri, "body");
        let positions: Vec<usize> = ["Jane Doe", "555-1234", "jane@x.com", "Renovations", "Leak in bathroom"]
            .iter()
            .map(|value| body.find(value).expect("field missing from body"))
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn quote_body_uses_crlf_lines() {
        let body = jane().body();
        assert_eq!(
            body,
            "Name: Jane Doe\r\nPhone: 555-1234\r\nEmail: jane@x.com\r\nService Needed: Renovations\r\n\r\nMessage:\r\nLeak in bathroom"
        );
        assert!(ContactAction::Quote(jane()).uri().contains("%0D%0A"));
    }

    #[test]
    fn whatsapp_dispatch_issues_one_handoff() {
        let launcher = RecordingLauncher::default();
        dispatch_with(&launcher, &ContactAction::WhatsApp);
        assert_eq!(
            *launcher.launched.borrow(),
            vec![("https://wa.me/972543210002".to_string(), Target::NewTab)]
        );
    }

    #[test]
    fn failed_handoff_is_swallowed() {
        let launcher = RecordingLauncher { fail: true, ..Default::default() };
        dispatch_with(&launcher, &ContactAction::Call);
        assert_eq!(launcher.launched.borrow().len(), 1);
    }
}
