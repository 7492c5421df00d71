//! Centralized validation for operator-supplied project names and types.
//!
//! Every remote command embeds the project name in a path or a user/group
//! name, so the name pattern is the only thing standing between the CLI
//! and shell-meaningful characters. Keep it strict.

use std::sync::OnceLock;

use regex::Regex;

use crate::error::{Result, TracError};

/// The four supported version-control backends.
pub const PROJECT_TYPES: [&str; 4] = ["git", "svn", "bzr", "hg"];

/// Alphanumeric endpoints, with hyphens, periods and underscores allowed
/// in between. Minimum three characters.
const NAME_PATTERN: &str = "^[A-Za-z0-9][A-Za-z0-9._-]+[A-Za-z0-9]$";

fn name_regex() -> &'static Regex {
    static NAME_RE: OnceLock<Regex> = OnceLock::new();
    NAME_RE.get_or_init(|| Regex::new(NAME_PATTERN).expect("static pattern is valid"))
}

/// Validate a project name against the appliance naming rules.
///
/// Returns `Ok(())` if valid, `Err(TracError::Validation)` with an
/// operator-facing message otherwise. Pure, no side effects.
pub fn validate_project_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(TracError::Validation(
            "You must provide a project name.".to_string(),
        ));
    }

    if !name_regex().is_match(name) {
        return Err(TracError::Validation(
            "Valid project names contain only letters and numbers. Hyphens, \
             periods and underscores are allowed, but not as a first or last \
             character."
                .to_string(),
        ));
    }

    Ok(())
}

/// Validate the (name, type) pair as a unit.
///
/// The type must be exactly one of `git`, `svn`, `bzr`, `hg`; prefixes or
/// case variants are rejected.
pub fn validate_project(name: &str, project_type: &str) -> Result<()> {
    validate_project_name(name)?;

    if !PROJECT_TYPES.contains(&project_type) {
        return Err(TracError::Validation(format!(
            "Valid project types are: {}",
            PROJECT_TYPES.join(", ")
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_names() {
        assert!(validate_project_name("abc").is_ok());
        assert!(validate_project_name("my-project").is_ok());
        assert!(validate_project_name("web.site").is_ok());
        assert!(validate_project_name("a_b_c").is_ok());
        assert!(validate_project_name("0ab9").is_ok());
        assert!(validate_project_name("Project-2.0").is_ok());
    }

    #[test]
    fn test_invalid_names() {
        // Empty / too short
        assert!(validate_project_name("").is_err());
        assert!(validate_project_name("a").is_err());
        assert!(validate_project_name("ab").is_err());

        // Bad endpoints
        assert!(validate_project_name("-abc").is_err());
        assert!(validate_project_name("abc-").is_err());
        assert!(validate_project_name(".abc").is_err());
        assert!(validate_project_name("abc.").is_err());

        // Shell-meaningful characters
        assert!(validate_project_name("a b c").is_err());
        assert!(validate_project_name("abc;rm").is_err());
        assert!(validate_project_name("a/b").is_err());
        assert!(validate_project_name("a$b").is_err());
    }

    #[test]
    fn test_valid_types() {
        for t in PROJECT_TYPES {
            assert!(validate_project("abc", t).is_ok());
        }
    }

    #[test]
    fn test_invalid_types() {
        assert!(validate_project("abc", "cvs").is_err());
        assert!(validate_project("abc", "gti").is_err());
        assert!(validate_project("abc", "gitsvn").is_err());
        assert!(validate_project("abc", "").is_err());
    }

    #[test]
    fn test_validation_messages_are_nonempty() {
        let err = validate_project("", "git").unwrap_err();
        assert!(!err.to_string().is_empty());

        let err = validate_project("abc", "cvs").unwrap_err();
        assert!(err.to_string().contains("git"));
        assert!(err.to_string().contains("hg"));
    }
}
