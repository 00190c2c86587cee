use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::error::{FilterError, FilterResult};

/// On-disk configuration, merged with command-line flags.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    #[serde(default)]
    pub defines: Vec<String>,
    #[serde(default)]
    pub strict: bool,
}

impl FileConfig {
    /// Load a JSON config file: `{"defines": [...], "strict": bool}`,
    /// both fields optional.
    pub fn load(path: &Path) -> FilterResult<Self> {
        let text = fs::read_to_string(path)
            .map_err(|e| FilterError::Config(format!("{}: {}", path.display(), e)))?;
        let config: Self = serde_json::from_str(&text)
            .map_err(|e| FilterError::Config(format!("{}: {}", path.display(), e)))?;
        debug!(
            "loaded config {}: {} define(s), strict={}",
            path.display(),
            config.defines.len(),
            config.strict
        );
        Ok(config)
    }
}

/// A define name is one bare token: non-empty, no whitespace.
pub fn validate_define_name(name: &str) -> FilterResult<()> {
    if name.is_empty() || name.chars().any(char::is_whitespace) {
        return Err(FilterError::InvalidDefineName(name.to_string()));
    }
    Ok(())
}

/// Union command-line `-D` names and config-file names into the
/// defined-name set, validating each.
pub fn build_defines(cli_names: &[String], file_names: &[String]) -> FilterResult<HashSet<String>> {
    let mut defines = HashSet::new();
    for name in cli_names.iter().chain(file_names) {
        validate_define_name(name)?;
        defines.insert(name.clone());
    }
    debug!("defined-name set has {} entry(ies)", defines.len());
    Ok(defines)
}

/// Replace every `@file` argument with the shell-quoted tokens (shlex
/// rules) read from that file. Expansion is one level deep: a `@` token
/// inside a response file is an error, as is an unreadable file.
pub fn expand_response_files<I>(args: I) -> FilterResult<Vec<String>>
where
    I: IntoIterator<Item = String>,
{
    let mut out = Vec::new();
    for arg in args {
        match arg.strip_prefix('@') {
            Some(path) if !path.is_empty() => {
                let text = fs::read_to_string(path)
                    .map_err(|e| FilterError::ResponseFile(format!("{}: {}", path, e)))?;
                let tokens = shlex::split(&text).ok_or_else(|| {
                    FilterError::ResponseFile(format!("{}: unbalanced quoting", path))
                })?;
                debug!("expanded response file {} into {} token(s)", path, tokens.len());
                for token in tokens {
                    if token.starts_with('@') {
                        return Err(FilterError::ResponseFile(format!(
                            "{}: nested response file \"{}\"",
                            path, token
                        )));
                    }
                    out.push(token);
                }
            }
            _ => out.push(arg),
        }
    }
    Ok(out)
}
