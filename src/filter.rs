/// Strip the echoed prompt and user input from a generated response.
///
/// Hosted text-generation backends usually return the full input followed by
/// the completion. The prompt prefix is removed first, then the user input is
/// removed from what remains. Each strip is a single exact prefix match and is
/// followed by a trim of whitespace and any byte-order mark; text that matches neither is returned untouched.
///
/// # Examples
///
/// ```
/// use personal_copilot::filter::filter_response;
///
/// let out = filter_response("SYS:print(1)\nresult=1", "SYS:", "print(1)");
/// assert_eq!(out, "result=1");
///
/// // Only one prompt echo is removed.
/// let raw = "SYS:SYS:print(1) result=1";
/// assert_eq!(filter_response(raw, "SYS:", "print(1)"), "SYS:print(1) result=1");
/// ```
pub fn filter_response(generated: &str, prompt: &str, user_input: &str) -> String {
    let mut filtered = generated;

    if let Some(rest) = filtered.strip_prefix(prompt) {
        filtered = trim_echo(rest);
    }

    if let Some(rest) = filtered.strip_prefix(user_input) {
        filtered = trim_echo(rest);
    }

    filtered.to_string()
}

fn trim_echo(text: &str) -> &str {
    text.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_prompt_then_input() {
        assert_eq!(filter_response("p u ans", "p", "u"), "ans");
    }

    #[test]
    fn prompt_elsewhere_is_not_stripped() {
        let raw = "answer mentions SYS: later";
        assert_eq!(filter_response(raw, "SYS:", "x"), raw);
    }

    #[test]
    fn empty_generation_stays_empty() {
        assert_eq!(filter_response("", "SYS:", "print(1)"), "");
    }

    #[test]
    fn untouched_text_keeps_whitespace() {
        assert_eq!(filter_response("  ans \n", "SYS:", "in"), "  ans \n");
    }

    #[test]
    fn input_without_prompt_is_still_stripped() {
        assert_eq!(filter_response("print(1)\n  1", "SYS:", "print(1)"), "1");
    }

    #[test]
    fn double_prompt_echo_only_strips_once() {
        assert_eq!(filter_response("SYS:SYS:ans", "SYS:", "in"), "SYS:ans");
    }

    #[test]
    fn case_sensitive_match() {
        assert_eq!(filter_response("sys:ans", "SYS:", "in"), "sys:ans");
    }

    #[test]
    fn byte_order_mark_is_trimmed_after_strip() {
        assert_eq!(filter_response("SYS:\u{feff}ans", "SYS:", "x"), "ans");
        assert_eq!(filter_response("SYS:u\u{feff} ans\u{feff}", "SYS:", "u"), "ans");
    }

    #[test]
    fn byte_order_mark_on_untouched_text_is_kept() {
        assert_eq!(filter_response("\u{feff}ans", "SYS:", "x"), "\u{feff}ans");
    }
}
