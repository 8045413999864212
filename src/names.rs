//! Project name normalization.
//!
//! A raw project name is turned into two forms:
//!
//! - **kebab** (`my-project`) - lowercase, spaces and underscores become hyphens.
//!   Used for the directory name.
//! - **CMake identifier** (`my_project`) - the kebab form with hyphens turned into
//!   underscores, since CMake project identifiers must not contain hyphens.
//!
//! No other characters are touched.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectNames {
    /// Directory-safe name
    pub kebab: String,
    /// Name substituted for the template placeholder
    pub cmake_ident: String,
}

impl ProjectNames {
    pub fn new(raw: &str) -> Self {
        let kebab = to_kebab(raw);
        let cmake_ident = to_cmake_ident(&kebab);
        Self { kebab, cmake_ident }
    }
}

impl fmt::Display for ProjectNames {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.kebab, self.cmake_ident)
    }
}

pub fn to_kebab(raw: &str) -> String {
    raw.to_lowercase().replace([' ', '_'], "-")
}

pub fn to_cmake_ident(kebab: &str) -> String {
    kebab.replace('-', "_")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spaces_become_hyphens() {
        let names = ProjectNames::new("My Project");
        assert_eq!(names.kebab, "my-project");
        assert_eq!(names.cmake_ident, "my_project");
    }

    #[test]
    fn test_underscores_become_hyphens() {
        assert_eq!(to_kebab("Sample_App"), "sample-app");
        assert_eq!(to_kebab("a_b c-d"), "a-b-c-d");
    }

    #[test]
    fn test_kebab_is_idempotent() {
        for raw in ["Sample App", "my_cool lib", "  lead_trail  ", "x__y"] {
            let once = to_kebab(raw);
            assert_eq!(to_kebab(&once), once);
            assert!(!once.contains(' '));
            assert!(!once.contains('_'));
        }
    }

    #[test]
    fn test_cmake_ident_has_no_hyphens() {
        for raw in ["a-b-c", "--", "Hello World-2", "plain"] {
            let ident = to_cmake_ident(&to_kebab(raw));
            assert!(!ident.contains('-'), "{ident}");
        }
    }

    #[test]
    fn test_other_characters_pass_through() {
        let names = ProjectNames::new("Proj.v2+Extra");
        assert_eq!(names.kebab, "proj.v2+extra");
        assert_eq!(names.cmake_ident, "proj.v2+extra");
    }

    #[test]
    fn test_display() {
        assert_eq!(
            ProjectNames::new("Sample App").to_string(),
            "sample-app (sample_app)"
        );
    }
}
