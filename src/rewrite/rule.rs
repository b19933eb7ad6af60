use crate::error::{Error, Result};
use regex::{NoExpand, Regex};
use std::borrow::Cow;

/// How the matched text is replaced.
#[derive(Debug, Clone)]
enum Replacement {
    /// Inserted verbatim; `$` has no special meaning.
    Literal(String),
    /// May reference named capture groups (`${indent}`); user values must go
    /// through [`escape_replacement`] first.
    Template(String),
}

/// A named substitution: one anchored pattern and what it becomes.
#[derive(Debug, Clone)]
pub struct Rule {
    name: &'static str,
    pattern: Regex,
    replacement: Replacement,
}

impl Rule {
    /// Regex pattern replaced by a literal string.
    pub fn new(name: &'static str, pattern: &str, replacement: impl Into<String>) -> Result<Self> {
        Ok(Self {
            name,
            pattern: compile(name, pattern)?,
            replacement: Replacement::Literal(replacement.into()),
        })
    }

    /// Regex pattern replaced by a template that expands capture groups.
    pub fn with_template(
        name: &'static str,
        pattern: &str,
        template: impl Into<String>,
    ) -> Result<Self> {
        Ok(Self {
            name,
            pattern: compile(name, pattern)?,
            replacement: Replacement::Template(template.into()),
        })
    }

    /// Exact text replaced by exact text.
    pub fn literal(
        name: &'static str,
        needle: &str,
        replacement: impl Into<String>,
    ) -> Result<Self> {
        Self::new(name, &regex::escape(needle), replacement)
    }

    /// Like [`Rule::literal`], but text already equal to `replacement` is
    /// matched first and left as is, so a replacement that contains the
    /// needle is not rewritten again on the next run.
    pub fn placeholder(name: &'static str, needle: &str, replacement: &str) -> Result<Self> {
        let pattern = format!("(?:{})|{}", regex::escape(replacement), regex::escape(needle));
        Self::new(name, &pattern, replacement)
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.pattern.is_match(text)
    }

    /// Replaces every match. Borrows the input when nothing matched.
    pub fn apply<'t>(&self, text: &'t str) -> Cow<'t, str> {
        let result = match &self.replacement {
            Replacement::Literal(value) => self.pattern.replace_all(text, NoExpand(value)),
            Replacement::Template(template) => self.pattern.replace_all(text, template.as_str()),
        };
        if let Cow::Owned(_) = result {
            log::trace!("Rule '{}' matched", self.name);
        }
        result
    }
}

/// Applies `rules` in order.
pub fn apply_all(rules: &[Rule], text: &str) -> String {
    rules.iter().fold(text.to_string(), |acc, rule| rule.apply(&acc).into_owned())
}

/// Makes a user value safe to embed in a [`Rule::with_template`] replacement.
pub fn escape_replacement(value: &str) -> String {
    value.replace('$', "$$")
}

fn compile(name: &'static str, pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|e| Error::RuleError { rule: name.to_string(), e })
}
