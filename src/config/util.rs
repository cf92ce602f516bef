//! Configuration utility functions.

use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

/// `${name}` placeholder, or `$$` standing for a literal `$`.
static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\$|\$\{([^}]*)\}").expect("valid placeholder regex"));

/// UnoCSS-style icon class, e.g. `i-ri-camera-ai-line`.
static ICON_CLASS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^i-[a-z0-9]+(?:-[a-z0-9]+)+$").expect("valid icon regex"));

/// GitHub `owner/repo` slug.
static REPO_SLUG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?/[A-Za-z0-9._-]+$")
        .expect("valid repo regex")
});

/// Extract path component from a URL string, without surrounding slashes.
///
/// Returns `None` if the URL is invalid
///
/// # Examples
/// ```ignore
/// extract_url_path("https://example.github.io/my-project/") -> Some("my-project")
/// extract_url_path("https://example.com")                   -> Some("")
/// extract_url_path("invalid")                               -> None
/// ```
pub fn extract_url_path(url_str: &str) -> Option<String> {
    let parsed = url::Url::parse(url_str).ok()?;
    Some(parsed.path().trim_matches('/').to_string())
}

/// Find config file by searching upward from current directory
///
/// Starts from cwd and walks up parent directories until finding `config_name`
/// Returns the absolute path to the config file if found
///
/// # Example
/// ```text
/// /home/user/blog/src/content/  ← cwd
/// /home/user/blog/theme.toml    ← found!
/// ```
pub fn find_config_file(config_name: &Path) -> Option<PathBuf> {
    if config_name.is_absolute() {
        return config_name.exists().then(|| config_name.to_path_buf());
    }

    let cwd = std::env::current_dir().ok()?;
    let mut current = cwd.as_path();
    loop {
        let candidate = current.join(config_name);
        if candidate.exists() {
            return Some(candidate);
        }
        current = current.parent()?;
    }
}

/// Check that `path` is a site-relative path like `/blog` or `/feeds/`.
///
/// Returns the reason when it is not.
pub fn check_site_path(path: &str) -> Result<(), &'static str> {
    if !path.starts_with('/') {
        return Err("must start with '/'");
    }
    if path.starts_with("//") {
        return Err("'//' starts a protocol-relative URL, not a site path");
    }
    if path.contains("://") {
        return Err("must be a path, not an absolute URL");
    }
    if path.chars().any(|c| c.is_whitespace()) {
        return Err("must not contain whitespace");
    }
    if path.contains(['?', '#']) {
        return Err("must not contain a query or fragment");
    }
    Ok(())
}

/// Check that `host` is a bare hostname suitable for an allow-list.
pub fn check_hostname(host: &str) -> Result<(), String> {
    if host.is_empty() {
        return Err("must not be empty".into());
    }
    if host.contains("://") || host.contains('/') {
        return Err("must be a bare hostname without scheme or path".into());
    }
    match url::Host::parse(host) {
        Ok(url::Host::Domain(domain)) if domain.contains('.') || domain == "localhost" => Ok(()),
        Ok(url::Host::Domain(_)) => Err("must be a fully qualified domain".into()),
        Ok(_) => Err("IP addresses are not allowed, use a domain name".into()),
        Err(e) => Err(format!("invalid hostname: {e}")),
    }
}

#[inline]
pub fn is_icon_class(icon: &str) -> bool {
    ICON_CLASS.is_match(icon)
}

#[inline]
pub fn is_repo_slug(slug: &str) -> bool {
    REPO_SLUG.is_match(slug)
}

/// Substitute `${name}` placeholders using `lookup`; `$$` yields `$`.
///
/// Returns the first unknown placeholder name on failure.
pub fn interpolate<'a>(
    template: &str,
    lookup: impl Fn(&str) -> Option<&'a str>,
) -> Result<String, String> {
    let mut out = String::with_capacity(template.len());
    let mut last = 0;
    for caps in PLACEHOLDER.captures_iter(template) {
        let Some(whole) = caps.get(0) else {
            continue;
        };
        out.push_str(&template[last..whole.start()]);
        match caps.get(1) {
            Some(name) => {
                let name = name.as_str().trim();
                out.push_str(lookup(name).ok_or_else(|| name.to_string())?);
            }
            None => out.push('$'),
        }
        last = whole.end();
    }
    out.push_str(&template[last..]);
    Ok(out)
}

/// Inverse of [`interpolate`] for text that must come back unchanged.
pub fn escape_template(text: &str) -> String {
    text.replace('$', "$$")
}

// ============================================================================
// tests
// ============================================================================
