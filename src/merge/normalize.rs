//! Title normalization: `"Matrix, The"` becomes `"The Matrix"`.

/// Articles that may trail a catalog title after a comma. Matched ASCII case-insensitively.
pub const TRAILING_ARTICLES: [&str; 6] = ["The", "A", "An", "La", "Le", "Les"];

/// Moves a trailing `", <Article>"` to the front and trims the result.
///
/// The whole (trimmed) title must be `<base>,<one whitespace char><article>`. The article
/// keeps its original casing. Rewriting repeats until no trailing article is left, so the
/// function is idempotent for every input.
pub fn normalize_title(raw: &str) -> String {
    let mut title = raw.trim().to_string();
    while let Some(rewritten) = move_trailing_article(&title) {
        title = rewritten;
    }
    title
}

fn move_trailing_article(title: &str) -> Option<String> {
    let (base, tail) = title.rsplit_once(',')?;
    let mut chars = tail.chars();
    if !chars.next()?.is_whitespace() {
        return None;
    }
    let article = chars.as_str();
    if !TRAILING_ARTICLES
        .iter()
        .any(|candidate| candidate.eq_ignore_ascii_case(article))
    {
        return None;
    }
    let base = base.trim();
    if base.is_empty() {
        return Some(article.to_string());
    }
    Some(format!("{article} {base}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn moves_known_articles_to_front() {
        assert_eq!(normalize_title("Matrix, The"), "The Matrix");
        assert_eq!(normalize_title("Vie, La"), "La Vie");
        assert_eq!(normalize_title("Beautiful Mind, A"), "A Beautiful Mind");
        assert_eq!(normalize_title("American in Paris, An"), "An American in Paris");
        assert_eq!(normalize_title("Samourai, Le"), "Le Samourai");
        assert_eq!(normalize_title("Miserables, Les"), "Les Miserables");
    }

    #[test]
    fn article_keeps_original_casing() {
        assert_eq!(normalize_title("Matrix, THE"), "THE Matrix");
        assert_eq!(normalize_title("Matrix, the"), "the Matrix");
    }

    #[test]
    fn non_matching_titles_are_only_trimmed() {
        assert_eq!(normalize_title("Inception"), "Inception");
        assert_eq!(normalize_title("  Inception \t"), "Inception");
        assert_eq!(normalize_title("Matrix,The"), "Matrix,The");
        assert_eq!(normalize_title("Matrix,  The"), "Matrix,  The");
        assert_eq!(normalize_title("Matrix, Them"), "Matrix, Them");
        assert_eq!(normalize_title("Good, the Bad and the Ugly"), "Good, the Bad and the Ugly");
        assert_eq!(normalize_title(""), "");
    }

    #[test]
    fn base_whitespace_is_trimmed() {
        assert_eq!(normalize_title("Matrix   , The"), "The Matrix");
        assert_eq!(normalize_title(", The"), "The");
    }

    #[test]
    fn only_the_last_comma_is_considered() {
        assert_eq!(
            normalize_title("Good, the Bad and the Ugly, The"),
            "The Good, the Bad and the Ugly"
        );
    }

    #[test]
    fn normalization_is_idempotent() {
        let samples = [
            "Matrix, The",
            "The Matrix",
            "Inception",
            " Vie, La ",
            "Odd, The, A",
            "Matrix, The ",
            ", Les",
            "Amélie, L'",
            "",
        ];
        for sample in samples {
            let once = normalize_title(sample);
            assert_eq!(normalize_title(&once), once, "not idempotent for {sample:?}");
        }
        assert_eq!(normalize_title("Odd, The, A"), "The A Odd");
    }
}
