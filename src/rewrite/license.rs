//! `LICENSE` copyright line

use super::rule::{apply_all, Rule};
use super::{FileRewriter, RewriteContext};
use crate::config::SetupConfig;
use crate::constants::targets;
use crate::error::Result;
use std::path::{Path, PathBuf};

const COPYRIGHT: &str = r"Copyright \(c\) [0-9]+ .*";

pub struct License;

pub fn rules(config: &SetupConfig) -> Result<Vec<Rule>> {
    Ok(vec![Rule::new(
        "copyright",
        COPYRIGHT,
        format!("Copyright (c) {} {}", config.year, config.author),
    )?])
}

impl FileRewriter for License {
    fn name(&self) -> &'static str {
        "LICENSE"
    }

    fn targets(&self, _context: &RewriteContext<'_>) -> Vec<PathBuf> {
        vec![PathBuf::from(targets::LICENSE)]
    }

    fn rewrite(&self, _target: &Path, text: &str, context: &RewriteContext<'_>) -> Result<String> {
        Ok(apply_all(&rules(context.config)?, text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::types::sample_config;

    #[test]
    fn rewrites_only_the_copyright_line() {
        let config = SetupConfig {
            year: "2025".to_string(),
            author: "New Author".to_string(),
            ..sample_config()
        };
        let context = RewriteContext { config: &config, package_dir: Path::new("acme_widgets") };
        let text = "MIT License\n\nCopyright (c) 2020 Old Author\n\nPermission is granted.\n";
        let out = License.rewrite(Path::new("LICENSE"), text, &context).unwrap();
        assert_eq!(out, "MIT License\n\nCopyright (c) 2025 New Author\n\nPermission is granted.\n");
    }

    #[test]
    fn license_without_copyright_is_unchanged() {
        let config = sample_config();
        let context = RewriteContext { config: &config, package_dir: Path::new("acme_widgets") };
        let text = "Public domain.\n";
        assert_eq!(License.rewrite(Path::new("LICENSE"), text, &context).unwrap(), text);
    }
}
