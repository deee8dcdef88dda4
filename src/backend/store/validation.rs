/**
 * Store-level Field Validation
 *
 * Constraints enforced by the credential store before a record is written:
 *
 * - User name: required, 2-30 characters
 * - Avatar: required, a valid http(s) URL
 * - Email: required, valid email syntax
 * - Card title, description, image, url, source: required, non-blank
 */

use url::Url;

use crate::backend::auth::users::{NewUser, UserUpdate};
use crate::backend::cards::model::NewCard;
use crate::shared::SharedError;

/// Minimum user name length, in characters
pub const NAME_MIN_LEN: usize = 2;

/// Maximum user name length, in characters
pub const NAME_MAX_LEN: usize = 30;

/// Validate a user name
pub fn validate_name(name: &str) -> Result<(), SharedError> {
    let len = name.chars().count();
    if len < NAME_MIN_LEN || len > NAME_MAX_LEN {
        return Err(SharedError::validation(
            "name",
            format!("must be between {NAME_MIN_LEN} and {NAME_MAX_LEN} characters"),
        ));
    }
    Ok(())
}

/// Validate an avatar URL
pub fn validate_avatar(avatar: &str) -> Result<(), SharedError> {
    if is_valid_url(avatar) {
        Ok(())
    } else {
        Err(SharedError::validation("avatar", "You must enter a valid URL"))
    }
}

/// Validate an email address
pub fn validate_email(email: &str) -> Result<(), SharedError> {
    if is_valid_email(email) {
        Ok(())
    } else {
        Err(SharedError::validation("email", "Invalid email"))
    }
}

/// Validate every field of a user about to be created
pub fn validate_new_user(user: &NewUser) -> Result<(), SharedError> {
    validate_name(&user.name)?;
    validate_avatar(&user.avatar)?;
    validate_email(&user.email)?;
    require("password", &user.password_hash)
}

/// Validate the fields present in a partial update
pub fn validate_user_update(update: &UserUpdate) -> Result<(), SharedError> {
    if let Some(name) = &update.name {
        validate_name(name)?;
    }
    if let Some(avatar) = &update.avatar {
        validate_avatar(avatar)?;
    }
    Ok(())
}

/// Validate a card about to be created
pub fn validate_new_card(card: &NewCard) -> Result<(), SharedError> {
    require("title", &card.title)?;
    require("description", &card.description)?;
    require("image", &card.image)?;
    require("url", &card.url)?;
    require("source", &card.source)
}

fn require(field: &str, value: &str) -> Result<(), SharedError> {
    if value.trim().is_empty() {
        return Err(SharedError::validation(field, "is required"));
    }
    Ok(())
}

/// URLs must use http or https and name a host with a top-level domain or
/// an IP address. A missing scheme is read as http.
fn is_valid_url(value: &str) -> bool {
    if value.is_empty() || value.chars().any(char::is_whitespace) {
        return false;
    }

    let parsed = match Url::parse(value) {
        Ok(url) => url,
        Err(url::ParseError::RelativeUrlWithoutBase) => match Url::parse(&format!("http://{value}")) {
            Ok(url) => url,
            Err(_) => return false,
        },
        Err(_) => return false,
    };

    if !matches!(parsed.scheme(), "http" | "https") {
        return false;
    }

    match parsed.host() {
        Some(url::Host::Domain(domain)) => has_top_level_domain(domain),
        Some(url::Host::Ipv4(_)) | Some(url::Host::Ipv6(_)) => true,
        None => false,
    }
}

fn has_top_level_domain(domain: &str) -> bool {
    let mut labels = domain.split('.');
    let Some(tld) = domain.rsplit('.').next() else {
        return false;
    };
    domain.contains('.')
        && tld.len() >= 2
        && tld.chars().all(|c| c.is_ascii_alphabetic())
        && labels.all(is_valid_label)
}

fn is_valid_label(label: &str) -> bool {
    !label.is_empty()
        && label.len() <= 63
        && !label.starts_with('-')
        && !label.ends_with('-')
        && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
}

fn is_valid_email(email: &str) -> bool {
    if email.len() > 254 || email.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = email.rsplit_once('@') else {
        return false;
    };

    if local.is_empty() || local.len() > 64 || local.contains('@') {
        return false;
    }
    if local.starts_with('.') || local.ends_with('.') || local.contains("..") {
        return false;
    }

    let local_ok = local
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || "!#$%&'*+-/=?^_`{|}~.".contains(c));

    local_ok && has_top_level_domain(&domain.to_ascii_lowercase())
}
