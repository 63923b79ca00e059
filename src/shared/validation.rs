use crate::shared::error::AppError;

/// Trims post or reply content and rejects blank or oversized input.
pub fn normalize_content(content: &str, max_chars: usize) -> Result<String, AppError> {
    let trimmed = content.trim();
    if trimmed.is_empty() {
        return Err(AppError::validation("Content cannot be empty"));
    }
    if trimmed.chars().count() > max_chars {
        return Err(AppError::validation(format!(
            "Content is too long (max {max_chars} characters)"
        )));
    }
    Ok(trimmed.to_string())
}

pub fn normalize_display_name(display_name: &str, max_chars: usize) -> Result<String, AppError> {
    let trimmed = display_name.trim();
    if trimmed.is_empty() {
        return Err(AppError::validation("Display name is required."));
    }
    if trimmed.chars().count() > max_chars {
        return Err(AppError::validation(format!(
            "Display name is too long (max {max_chars} characters)"
        )));
    }
    Ok(trimmed.to_string())
}

pub fn normalize_bio(bio: Option<&str>) -> String {
    bio.map(str::trim).unwrap_or_default().to_string()
}

/// Trims tags, drops blanks and duplicates, keeps first-seen order.
pub fn normalize_interests<I, S>(interests: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut normalized: Vec<String> = Vec::new();
    for interest in interests {
        let tag = interest.as_ref().trim();
        if tag.is_empty() || normalized.iter().any(|existing| existing == tag) {
            continue;
        }
        normalized.push(tag.to_string());
    }
    normalized
}
