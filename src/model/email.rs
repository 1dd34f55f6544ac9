use percent_encoding::percent_decode_str;
use url::Url;

pub const COPY_EMAIL_SELECTOR: &str = "[data-copy-email]";
pub const MAIL_LINK_SELECTOR: &str = "a[href^=\"mailto:\"]";
pub const EMAIL_ATTRIBUTE: &str = "data-email";

/// Address for the copy control: explicit `data-email`, else the mailto target.
pub fn resolve_email(data_email: Option<&str>, href: Option<&str>) -> Option<String> {
    if let Some(explicit) = data_email.map(str::trim).filter(|value| !value.is_empty()) {
        return Some(explicit.to_string());
    }

    href.and_then(mailto_address)
}

/// Address part of a `mailto:` link, without any query string.
pub fn mailto_address(href: &str) -> Option<String> {
    let url = Url::parse(href.trim()).ok()?;
    if url.scheme() != "mailto" {
        return None;
    }

    let address = percent_decode(url.path());
    let address = address.trim();
    (!address.is_empty()).then(|| address.to_string())
}

/// Where to navigate after a successful copy.
pub fn mail_link(href: Option<&str>, email: &str) -> String {
    href.filter(|value| mailto_address(value).is_some())
        .map(ToString::to_string)
        .unwrap_or_else(|| format!("mailto:{email}"))
}

fn percent_decode(value: &str) -> String {
    percent_decode_str(value).decode_utf8_lossy().into_owned()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CopyOutcome {
    Copied,
    Failed,
}

impl CopyOutcome {
    pub fn toast_message(self, email: &str) -> String {
        match self {
            Self::Copied => format!("Email copied: {email}"),
            Self::Failed => "Couldn't copy email address".to_string(),
        }
    }

    /// Successful copies still open the mail client.
    pub fn navigates(self) -> bool {
        matches!(self, Self::Copied)
    }
}
