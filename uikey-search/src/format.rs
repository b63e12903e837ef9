//! Formatting suffixes for `{{ui:KEY|spec}}` templates.
//!
//! [`FORMATTING_OPTIONS`] is the fixed list offered after the pipe.
//! [`FormatSpec`] applies a comma-separated spec to resolved text.

use std::fmt;

/// One suggestion for the formatting suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct FormattingOption {
    pub label: &'static str,
    pub description: &'static str,
}

/// Every suffix offered for completion, in presentation order.
pub const FORMATTING_OPTIONS: &[FormattingOption] = &[
    FormattingOption {
        label: "bold",
        description: "Bold text: **text**",
    },
    FormattingOption {
        label: "italic",
        description: "Italic text: *text*",
    },
    FormattingOption {
        label: "code",
        description: "Code text: `text`",
    },
    FormattingOption {
        label: "upper",
        description: "UPPERCASE",
    },
    FormattingOption {
        label: "lower",
        description: "lowercase",
    },
    FormattingOption {
        label: "upper,bold",
        description: "UPPERCASE and bold",
    },
    FormattingOption {
        label: "upper,code",
        description: "UPPERCASE and code",
    },
];

/// Suggestions for the formatting suffix.
///
/// The list is short and fixed, so no filtering is applied: every option is
/// returned whatever the query.
pub fn formatting_options(_query: &str) -> &'static [FormattingOption] {
    FORMATTING_OPTIONS
}

/// A single directive in a formatting spec.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatDirective {
    Upper,
    Lower,
    Bold,
    Italic,
    Code,
    /// Not recognised; ignored when applying.
    Unknown(String),
}

impl FormatDirective {
    fn parse(token: &str) -> Self {
        match token {
            "upper" => Self::Upper,
            "lower" => Self::Lower,
            "bold" => Self::Bold,
            "italic" => Self::Italic,
            "code" => Self::Code,
            other => Self::Unknown(other.to_string()),
        }
    }
}

impl fmt::Display for FormatDirective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Upper => f.write_str("upper"),
            Self::Lower => f.write_str("lower"),
            Self::Bold => f.write_str("bold"),
            Self::Italic => f.write_str("italic"),
            Self::Code => f.write_str("code"),
            Self::Unknown(raw) => f.write_str(raw),
        }
    }
}

/// A parsed comma-separated formatting spec such as `upper,bold`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormatSpec {
    directives: Vec<FormatDirective>,
}

impl FormatSpec {
    /// Split on commas and trim each part. Empty parts are dropped.
    pub fn parse(spec: &str) -> Self {
        let directives = spec
            .split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(FormatDirective::parse)
            .collect();
        Self { directives }
    }

    pub fn directives(&self) -> &[FormatDirective] {
        &self.directives
    }

    pub fn is_empty(&self) -> bool {
        self.directives.is_empty()
    }

    /// Apply case changes first, then markdown wrappers, each in spec order.
    ///
    /// `upper,bold` and `bold,upper` both give `**TEXT**`.
    pub fn apply(&self, text: &str) -> String {
        let mut out = text.to_string();

        for directive in &self.directives {
            match directive {
                FormatDirective::Upper => out = out.to_uppercase(),
                FormatDirective::Lower => out = out.to_lowercase(),
                _ => {}
            }
        }

        for directive in &self.directives {
            match directive {
                FormatDirective::Bold => out = format!("**{out}**"),
                FormatDirective::Italic => out = format!("*{out}*"),
                FormatDirective::Code => out = format!("`{out}`"),
                FormatDirective::Unknown(raw) => {
                    tracing::warn!(directive = %raw, "unknown formatting directive ignored");
                }
                FormatDirective::Upper | FormatDirective::Lower => {}
            }
        }

        out
    }
}

impl fmt::Display for FormatSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, directive) in self.directives.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{directive}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn options_returned_regardless_of_query() {
        assert_eq!(formatting_options("").len(), 7);
        assert_eq!(formatting_options("zzz").len(), 7);
        assert_eq!(formatting_options("bo")[0].label, "bold");
    }

    #[test]
    fn option_labels_parse_without_unknowns() {
        for option in FORMATTING_OPTIONS {
            let spec = FormatSpec::parse(option.label);
            assert!(
                !spec
                    .directives()
                    .iter()
                    .any(|d| matches!(d, FormatDirective::Unknown(_))),
                "{} should parse cleanly",
                option.label
            );
        }
    }

    #[test]
    fn single_wrappers() {
        assert_eq!(FormatSpec::parse("bold").apply("Deploy"), "**Deploy**");
        assert_eq!(FormatSpec::parse("italic").apply("Deploy"), "*Deploy*");
        assert_eq!(FormatSpec::parse("code").apply("Deploy"), "`Deploy`");
    }

    #[test]
    fn case_transforms() {
        assert_eq!(FormatSpec::parse("upper").apply("Deploy"), "DEPLOY");
        assert_eq!(FormatSpec::parse("lower").apply("Deploy"), "deploy");
    }

    #[test]
    fn case_applied_before_wrapping_whatever_the_order() {
        assert_eq!(FormatSpec::parse("upper,bold").apply("deploy"), "**DEPLOY**");
        assert_eq!(FormatSpec::parse("bold,upper").apply("deploy"), "**DEPLOY**");
    }

    #[test]
    fn wrappers_nest_in_spec_order() {
        assert_eq!(FormatSpec::parse("italic,bold").apply("x"), "***x***");
        assert_eq!(FormatSpec::parse("code,bold").apply("x"), "**`x`**");
    }

    #[test]
    fn parts_are_trimmed() {
        let spec = FormatSpec::parse(" upper , code ");
        assert_eq!(spec.directives(), &[FormatDirective::Upper, FormatDirective::Code]);
        assert_eq!(spec.to_string(), "upper,code");
    }

    #[test]
    fn unknown_directive_ignored() {
        let spec = FormatSpec::parse("sparkle,bold");
        assert_eq!(spec.directives()[0], FormatDirective::Unknown("sparkle".into()));
        assert_eq!(spec.apply("OK"), "**OK**");
    }

    #[test]
    fn empty_spec_is_identity() {
        let spec = FormatSpec::parse("");
        assert!(spec.is_empty());
        assert_eq!(spec.apply("Deploy"), "Deploy");
    }
}
