//! # Display Utilities
//!
//! Shortening `0x` addresses and hashes for headers and badges.
//!
//! ```rust
//! use shared::utils::format_address;
//!
//! let address = "0x52908400098527886E0F7030069857D2E4169EE7";
//! assert_eq!(format_address(address, 4, 4), "0x5290...9EE7");
//! ```

const ELLIPSIS: &str = "...";

/// Keep `head` and `tail` characters of the hex body around an ellipsis.
///
/// The `0x` prefix is not counted and always kept. Input that would not get
/// shorter comes back unchanged.
pub fn format_address(address: &str, head: usize, tail: usize) -> String {
    let (prefix, body) = match address.strip_prefix("0x") {
        Some(body) => ("0x", body),
        None => ("", address),
    };

    let chars: Vec<char> = body.chars().collect();
    if chars.len() <= head + tail + ELLIPSIS.len() {
        return address.to_string();
    }

    let start: String = chars[..head].iter().collect();
    let end: String = chars[chars.len() - tail..].iter().collect();
    format!("{prefix}{start}{ELLIPSIS}{end}")
}

/// Four hex characters either side, e.g. `0x5290...9EE7`.
pub fn truncate_address(address: &str) -> String {
    format_address(address, 4, 4)
}
