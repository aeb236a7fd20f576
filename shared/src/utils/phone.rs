//! Phone number utilities

/// Whether the number already carries an international `+` prefix
pub fn has_country_code(phone: &str) -> bool {
    phone.starts_with('+')
}

/// Mask a phone number for logs, keeping the last four characters
///
/// ```
/// use sc_shared::phone::mask_phone_number;
/// assert_eq!(mask_phone_number("+919876543210"), "+********3210");
/// ```
pub fn mask_phone_number(phone: &str) -> String {
    let chars: Vec<char> = phone.chars().collect();
    if chars.len() <= 4 {
        return "*".repeat(chars.len());
    }

    let visible = 4;
    let last: String = chars[chars.len() - visible..].iter().collect();

    if has_country_code(phone) {
        format!("+{}{}", "*".repeat(chars.len() - visible - 1), last)
    } else {
        format!("{}{}", "*".repeat(chars.len() - visible), last)
    }
}
