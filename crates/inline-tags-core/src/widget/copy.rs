//! Copy-to-clipboard widget builder.

use crate::args::ParsedArgs;
use std::time::{SystemTime, UNIX_EPOCH};

/// A copy-to-clipboard box: a readonly input holding the payload plus a copy button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyWidget {
    /// The literal text the copy button puts on the clipboard.
    pub payload: String,
    /// Optional label shown beside the copy control.
    pub prefix: Option<String>,
    /// Unique element id (`copy_<millis>`) letting the button target its sibling input.
    pub element_id: String,
}

impl CopyWidget {
    /// Parse the tag arguments into a copy payload.
    ///
    /// With a `git` field the free text is treated as an `owner/repo` path (one leading `/`
    /// stripped) and rewritten as an SSH clone URL (`git:ssh`), a GH-CLI command (`git:gh`),
    /// or an HTTPS clone URL (any other value).
    pub fn build(args: &str) -> Self {
        let parsed = ParsedArgs::parse(args);
        let text = parsed.free_text();

        let payload = match parsed.field("git") {
            Some(git) => {
                let path = text.strip_prefix('/').unwrap_or(&text);
                match git {
                    "ssh" => format!("git@github.com:{path}.git"),
                    "gh" => format!("gh repo clone {path}"),
                    _ => format!("https://github.com/{path}.git"),
                }
            }
            None => text,
        };

        Self {
            payload,
            prefix: parsed.field_owned("prefix"),
            element_id: format!("copy_{}", unix_millis()),
        }
    }
}

fn unix_millis() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_git_ssh_rewrites_to_clone_url() {
        let widget = CopyWidget::build("git:ssh /octocat/Hello-World");
        assert_eq!(widget.payload, "git@github.com:octocat/Hello-World.git");
    }

    #[test]
    fn test_git_gh_rewrites_to_cli_command() {
        let widget = CopyWidget::build("git:gh octocat/Hello-World");
        assert_eq!(widget.payload, "gh repo clone octocat/Hello-World");
    }

    #[test]
    fn test_git_other_value_rewrites_to_https() {
        let widget = CopyWidget::build("git:https octocat/Hello-World");
        assert_eq!(widget.payload, "https://github.com/octocat/Hello-World.git");
    }

    #[test]
    fn test_without_git_field_payload_is_literal() {
        let widget = CopyWidget::build("octocat/Hello-World");
        assert_eq!(widget.payload, "octocat/Hello-World");
    }

    #[test]
    fn test_prefix_field_and_element_id() {
        let widget = CopyWidget::build("prefix:Repo octocat/Hello-World");
        assert_eq!(widget.prefix.as_deref(), Some("Repo"));
        assert!(widget.element_id.starts_with("copy_"));
    }
}
