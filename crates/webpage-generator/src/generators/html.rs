//! HTML body assembly.

use super::pick;
use crate::content::ContentGenerator;
use crate::error::ContentError;
use rand::Rng;

/// Tags whose body is a sentence rather than a paragraph.
const HEADING_TAGS: &[&str] = &["h2", "h3"];

/// Build a complete HTML document around `title`.
///
/// The body holds an `<h1>` with the title, 2 to 5 paragraphs, a list of
/// 3 to 7 words and 1 to 3 trailing elements whose tags come from `tags`.
pub fn render_page<R: Rng, C: ContentGenerator + ?Sized>(
    rng: &mut R,
    content: &mut C,
    title: &str,
    tags: &[String],
) -> Result<String, ContentError> {
    let mut paragraphs = String::new();
    for _ in 0..rng.gen_range(2..=5) {
        paragraphs.push_str(&format!("<p>{}</p>", content.paragraph()?));
    }

    let mut list_items = String::new();
    for _ in 0..rng.gen_range(3..=7) {
        list_items.push_str(&format!("<li>{}</li>", content.word()?));
    }

    let mut extra_elements = String::new();
    for _ in 0..rng.gen_range(1..=3) {
        let tag = pick(rng, tags);
        let body = if HEADING_TAGS.contains(&tag.as_str()) {
            content.sentence()?
        } else {
            content.paragraph()?
        };
        extra_elements.push_str(&format!("<{tag}>{body}</{tag}>"));
    }

    Ok(format!(
        r#"<!DOCTYPE html>
<html>
    <head><title>{title}</title><meta charset="utf-8"></head>
    <body>
        <h1>{title}</h1>
        {paragraphs}
        <ul>{list_items}</ul>
        {extra_elements}
    </body>
</html>"#
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Utc};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    struct Fixed;

    impl ContentGenerator for Fixed {
        fn sentence(&mut self) -> Result<String, ContentError> {
            Ok("Heading text.".to_string())
        }
        fn paragraph(&mut self) -> Result<String, ContentError> {
            Ok("Body text.".to_string())
        }
        fn word(&mut self) -> Result<String, ContentError> {
            Ok("word".to_string())
        }
        fn uri_path(&mut self) -> Result<String, ContentError> {
            Ok("app".to_string())
        }
        fn date_time_between(
            &mut self,
            start: DateTime<Utc>,
            _end: DateTime<Utc>,
        ) -> Result<DateTime<Utc>, ContentError> {
            Ok(start)
        }
    }

    #[test]
    fn test_document_structure() {
        let tags = vec!["div".to_string()];
        let mut rng = StdRng::seed_from_u64(42);
        let html = render_page(&mut rng, &mut Fixed, "My Page", &tags).unwrap();

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.ends_with("</html>"));
        assert!(html.contains("<head><title>My Page</title><meta charset=\"utf-8\"></head>"));
        assert!(html.contains("<h1>My Page</h1>"));

        let paragraphs = html.matches("<p>").count();
        assert!((2..=5).contains(&paragraphs));
        let items = html.matches("<li>").count();
        assert!((3..=7).contains(&items));
        let extras = html.matches("<div>Body text.</div>").count();
        assert!((1..=3).contains(&extras));
    }

    #[test]
    fn test_headings_use_sentences() {
        let tags = vec!["h2".to_string()];
        let mut rng = StdRng::seed_from_u64(3);
        let html = render_page(&mut rng, &mut Fixed, "T", &tags).unwrap();

        assert!(html.contains("<h2>Heading text.</h2>"));
        assert!(!html.contains("<h2>Body text.</h2>"));
    }

    #[test]
    fn test_other_headings_use_paragraphs() {
        let tags = vec!["h4".to_string()];
        let mut rng = StdRng::seed_from_u64(3);
        let html = render_page(&mut rng, &mut Fixed, "T", &tags).unwrap();

        assert!(html.contains("<h4>Body text.</h4>"));
        assert!(!html.contains("<h4>Heading text.</h4>"));
    }
}
