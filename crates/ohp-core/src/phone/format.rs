use once_cell::sync::Lazy;
use regex::Regex;

/// Up to three groups of 3, 3 and 4 digits, matched once from the left.
static PHONE_GROUPS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([0-9]{1,3})([0-9]{1,3})?([0-9]{1,4})?").expect("phone group pattern is valid")
});

/// Format raw input into a grouped display string (`ddd ddd dddd`).
///
/// Every non-digit character is dropped, the remaining digits are grouped
/// greedily as 3/3/4 and joined with single spaces. Digits past the tenth
/// are discarded.
///
/// 将原始输入格式化为分组显示的号码。
pub fn format_phone_number(raw: &str) -> String {
    let cleaned: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
    if cleaned.is_empty() {
        return String::new();
    }

    match PHONE_GROUPS.captures(&cleaned) {
        Some(caps) => caps
            .iter()
            .skip(1)
            .flatten()
            .map(|group| group.as_str())
            .collect::<Vec<_>>()
            .join(" "),
        // Unreachable for non-empty digit strings; keep the input untouched.
        None => raw.to_string(),
    }
}
