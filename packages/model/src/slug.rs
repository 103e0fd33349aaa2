/// Normalize a title into a URL slug.
///
/// Lowercases, keeps ASCII alphanumerics, collapses every other run of
/// characters into a single `-`, and trims leading/trailing dashes.
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_dash = false;

    for c in title.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }

    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_title() {
        assert_eq!(slugify("Hello, World!"), "hello-world");
    }

    #[test]
    fn test_collapses_separator_runs() {
        assert_eq!(slugify("API  --  Design Notes"), "api-design-notes");
    }

    #[test]
    fn test_trims_edges() {
        assert_eq!(slugify("  (draft) release plan  "), "draft-release-plan");
    }

    #[test]
    fn test_empty_and_symbol_only() {
        assert_eq!(slugify(""), "");
        assert_eq!(slugify("!!!"), "");
    }
}
