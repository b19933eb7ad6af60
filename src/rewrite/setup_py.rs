//! `setup.py` metadata and package path references

use super::rule::{apply_all, escape_replacement, Rule};
use super::{FileRewriter, RewriteContext};
use crate::config::SetupConfig;
use crate::constants::{targets, PLACEHOLDER_PACKAGE};
use crate::error::Result;
use std::path::{Path, PathBuf};

const NAME: &str = r#"\bname\s*=\s*"[^"]*""#;
const DESCRIPTION: &str = r#"\bdescription\s*=\s*"[^"]*""#;
const AUTHOR: &str = r#"\bauthor\s*=\s*"[^"]*""#;
const AUTHOR_EMAIL: &str = r#"\bauthor_email\s*=\s*"[^"]*""#;
const AUTHOR_EMAIL_KEY: &str = r"\bauthor_email\s*=";
const AUTHOR_LINE: &str = r#"(?m)^(?P<indent>[ \t]*)(?P<line>author\s*=\s*"[^"]*",[ \t]*\r?\n)"#;
const URL: &str = r#"\burl\s*=\s*"[^"]*""#;
const PYTHON_REQUIRES: &str = r#"\bpython_requires\s*=\s*"[^"]*""#;

pub struct SetupPy;

/// Metadata rules that always apply, in order.
pub fn rules(config: &SetupConfig) -> Result<Vec<Rule>> {
    Ok(vec![
        Rule::new("name", NAME, format!(r#"name="{}""#, config.distribution_name))?,
        Rule::new("description", DESCRIPTION, format!(r#"description="{}""#, config.description))?,
        Rule::new("author", AUTHOR, format!(r#"author="{}""#, config.author))?,
        Rule::new("url", URL, format!(r#"url="{}""#, config.url))?,
        Rule::new(
            "python_requires",
            PYTHON_REQUIRES,
            format!(r#"python_requires=">={}""#, config.python_min_version),
        )?,
        Rule::literal(
            "requirements path",
            &format!(r#""{PLACEHOLDER_PACKAGE}/requirements.txt""#),
            format!(r#""{}/requirements.txt""#, config.import_name),
        )?,
        Rule::literal(
            "init path",
            &format!(r#""{PLACEHOLDER_PACKAGE}/__init__.py""#),
            format!(r#""{}/__init__.py""#, config.import_name),
        )?,
    ])
}

/// Replaces an existing `author_email` in place, or adds one right below the
/// `author=` line. Does nothing without a configured email.
pub fn apply_author_email(text: &str, email: Option<&str>) -> Result<String> {
    let Some(email) = email else {
        return Ok(text.to_string());
    };

    let present = Rule::new("author_email key", AUTHOR_EMAIL_KEY, "")?;
    let rule = if present.is_match(text) {
        Rule::new("author_email", AUTHOR_EMAIL, format!(r#"author_email="{email}""#))?
    } else {
        let email = escape_replacement(email);
        Rule::with_template(
            "author_email insert",
            AUTHOR_LINE,
            format!("${{indent}}${{line}}${{indent}}author_email=\"{email}\",\n"),
        )?
    };
    Ok(rule.apply(text).into_owned())
}

impl FileRewriter for SetupPy {
    fn name(&self) -> &'static str {
        "setup.py"
    }

    fn targets(&self, _context: &RewriteContext<'_>) -> Vec<PathBuf> {
        vec![PathBuf::from(targets::SETUP_PY)]
    }

    fn rewrite(&self, _target: &Path, text: &str, context: &RewriteContext<'_>) -> Result<String> {
        let config = context.config;
        let rules = rules(config)?;
        // Name through author first, so the insert anchor is already normalised.
        let (head, tail) = rules.split_at(3);
        let text = apply_all(head, text);
        let text = apply_author_email(&text, config.author_email.as_deref())?;
        Ok(apply_all(tail, &text))
    }
}
