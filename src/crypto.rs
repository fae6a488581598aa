// src/crypto.rs
use sha1::{Digest, Sha1};
use std::collections::HashSet;

/// Length of the hash prefix sent to the range endpoint.
pub const HASH_PREFIX_LEN: usize = 5;

// Uppercase hex SHA-1 of the password, always 40 characters
pub fn sha1_hex(password: &str) -> String {
    let digest = Sha1::digest(password.as_bytes());
    hex::encode_upper(digest)
}

/// Split a hex digest into the range prefix and the suffix matched locally.
pub fn split_hash(hash: &str) -> (&str, &str) {
    hash.split_at(HASH_PREFIX_LEN.min(hash.len()))
}

pub fn is_valid_prefix(prefix: &str) -> bool {
    prefix.len() == HASH_PREFIX_LEN && prefix.chars().all(|c| c.is_ascii_hexdigit())
}

// Analyze password strength
pub fn analyze_password_strength(password: &str) -> u8 {
    let mut score: i32 = 0;

    // Length contribution (up to 40 points)
    score += (password.chars().count() * 2).min(40) as i32;

    // Character variety
    if password.chars().any(|c| c.is_ascii_lowercase()) {
        score += 15;
    }
    if password.chars().any(|c| c.is_ascii_uppercase()) {
        score += 15;
    }
    if password.chars().any(|c| c.is_ascii_digit()) {
        score += 15;
    }
    if password.chars().any(|c| !c.is_alphanumeric()) {
        score += 15;
    }

    // Repeated characters
    let len = password.chars().count();
    if password.chars().collect::<HashSet<_>>().len() < len / 2 {
        score -= 10;
    }

    score.clamp(0, 100) as u8
}

pub fn strength_feedback(password: &str) -> Vec<String> {
    let strength = analyze_password_strength(password);
    let length = password.chars().count();
    let mut feedback = Vec::new();

    if strength < 40 {
        feedback.push("Weak password".to_string());
    } else if strength < 60 {
        feedback.push("Moderate password".to_string());
    } else if strength < 80 {
        feedback.push("Strong password".to_string());
    } else {
        feedback.push("Very strong password".to_string());
    }

    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        feedback.push("Add uppercase letters for better security".to_string());
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        feedback.push("Add numbers for better security".to_string());
    }
    if !password.chars().any(|c| !c.is_alphanumeric()) {
        feedback.push("Add symbols for better security".to_string());
    }
    if length < 12 {
        feedback.push("Increase password length to at least 12 characters".to_string());
    } else if length < 16 && strength >= 60 {
        feedback.push("For maximum security, consider 16+ characters".to_string());
    }

    feedback
}
