//! Input sanitisation for contact fields.
//!
//! Strips markup and script patterns from raw keystrokes before they are
//! stored. Surrounding whitespace is kept; trimming happens at validation
//! and submission time. Consumers rendering the value must still encode it.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref ANGLE_BRACKETS: Regex = Regex::new(r"[<>]").unwrap();
    static ref JAVASCRIPT_PROTOCOL: Regex = Regex::new(r"(?i)javascript\s*:").unwrap();
    static ref EVENT_HANDLER: Regex = Regex::new(r"(?i)\bon[a-z]+=").unwrap();
}

/// Return the input with angle brackets, `javascript:` protocols and inline
/// event-handler attributes removed.
///
pub fn sanitize_input(input: &str) -> String {
    let mut result = ANGLE_BRACKETS.replace_all(input, "").into_owned();
    // Removing one match can join the halves of another, so repeat until stable.
    loop {
        let next = EVENT_HANDLER
            .replace_all(&JAVASCRIPT_PROTOCOL.replace_all(&result, ""), "")
            .into_owned();
        if next == result {
            return result;
        }
        result = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_script_tag_loses_angle_brackets() {
        let result = sanitize_input("<script>alert(1)</script>");
        assert!(!result.contains('<'));
        assert!(!result.contains('>'));
        assert_eq!(result, "scriptalert(1)/script");
    }

    #[test]
    fn test_javascript_protocol_removed() {
        assert_eq!(sanitize_input("javascript:doEvil()"), "doEvil()");
        assert_eq!(sanitize_input("JavaScript :doEvil()"), "doEvil()");
    }

    #[test]
    fn test_nested_protocol_removed() {
        assert_eq!(sanitize_input("javajavascript:script:x()"), "x()");
    }

    #[test]
    fn test_event_handlers_removed() {
        assert_eq!(
            sanitize_input("img src=x onerror=alert(1)"),
            "img src=x alert(1)"
        );
        assert_eq!(sanitize_input("div ONCLICK=go()"), "div go()");
    }

    #[test]
    fn test_plain_text_untouched() {
        let text = "  Hello, I'd like to talk about online work = fun  ";
        // "online work" is not an attribute because of the space before "=".
        assert_eq!(sanitize_input(text), text);
        assert_eq!(sanitize_input("Mary-Jane O'Neil"), "Mary-Jane O'Neil");
    }

    #[test]
    fn test_prose_with_spaced_equals_untouched() {
        let text = "Pick option one = the cheaper plan";
        assert_eq!(sanitize_input(text), text);
        assert_eq!(sanitize_input("ongoing = yes"), "ongoing = yes");
    }

    #[test]
    fn test_whitespace_preserved() {
        assert_eq!(sanitize_input("  padded  "), "  padded  ");
    }
}
