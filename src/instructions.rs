//! Converts puzzle instruction pages into per-day Markdown READMEs.
//!
//! The instruction page wraps each puzzle part in an `<article>` block using
//! a small, stable set of tags. Those blocks are converted to Markdown;
//! `<pre>` blocks are kept as HTML so emphasis inside sample input survives.

use std::{iter::Peekable, str::Chars};

use regex::Regex;

use crate::error::{Error, Result};

/// Extracts the `<article>` blocks from an instruction page and converts
/// them to Markdown. The day title becomes a link back to `day_url`.
pub fn to_markdown(html: &str, day_url: &str) -> Result<String> {
    let article = Regex::new("(?s)<article.*?>(.+?)</article>")
        .map_err(|e| Error::InstructionsError(e.to_string()))?;

    let Some(parts) = article
        .captures_iter(html)
        .map(|caps| caps.get(1).map(|capture| capture.as_str()))
        .collect::<Option<Vec<&str>>>()
    else {
        return Err(Error::InstructionsError(
            "failed to extract parts from instructions page".to_string(),
        ));
    };
    if parts.is_empty() {
        return Err(Error::InstructionsError(
            "failed to extract parts from instructions page".to_string(),
        ));
    }

    let mut markdown = String::new();
    for part in parts {
        let mut chars = part.chars().peekable();
        while chars.peek().is_some() {
            markdown.push_str(&convert_element(day_url, &mut chars, false)?);
        }
        markdown.push('\n');
    }

    Ok(markdown)
}

/// Converts a single element, recursing into nested tags.
///
/// Expects the iterator to sit at the start of an opening tag (leading
/// whitespace before the `<` is tolerated).
fn convert_element(
    day_url: &str,
    chars: &mut Peekable<Chars<'_>>,
    preformatted: bool,
) -> Result<String> {
    let whole_tag = chars.take_while(|char| char.ne(&'>')).collect::<String>();

    let raw_tag =
        whole_tag.chars().take_while(|&char| char.ne(&' ')).collect::<String>();

    let mut tag = raw_tag.trim();
    if let Some(stripped_tag) = tag.strip_prefix('<') {
        tag = stripped_tag;
    }

    let mut pre = preformatted;
    let mut output = String::new();

    match tag {
        "h2" => output.push_str("\n## "),
        "em" if preformatted => output.push_str("<b>"),
        "code" if preformatted => output.push_str("<code>"),
        "em" => output.push_str("**"),
        "code" => output.push('`'),
        "pre" => {
            output.push_str("\n\n<pre>");
            pre = true;
        }
        "p" => output.push_str("\n\n"),
        "ul" => output.push('\n'),
        "li" => output.push_str("  - "),
        "a" => output.push('['),
        "span" => {}
        "" if chars.peek().is_none() => {}
        _ => {
            return Err(Error::InstructionsError(format!("unknown tag: {tag}")));
        }
    }

    loop {
        let Some(char) = chars.next() else {
            return Ok(output);
        };
        match char {
            '<' => {
                if chars.peek() == Some(&'/') {
                    let _closing =
                        chars.take_while(|char| char.ne(&'>')).collect::<String>();
                    break;
                }
                output.push_str(&convert_element(day_url, chars, pre)?);
            }
            '>' => break,
            char => {
                output.push(char);
            }
        }
    }

    match tag {
        "h2" if output.contains(" --- Day") => {
            output = output.replace("\n## ", "# [");
            output.push_str(&format!("]({day_url})"));
        }
        "em" if preformatted => output.push_str("</b>"),
        "code" if preformatted => output.push_str("</code>"),
        "em" => output.push_str("**"),
        "code" => output.push('`'),
        "pre" => output.push_str("</pre>"),
        "a" => {
            let href = Regex::new(r#"href="(.+?)""#)
                .map_err(|e| Error::InstructionsError(e.to_string()))?;
            let Some(link) = href
                .captures(&whole_tag)
                .and_then(|caps| caps.get(1).map(|cap| cap.as_str()))
            else {
                return Err(Error::InstructionsError(
                    "failed to find link following anchor".to_string(),
                ));
            };
            output.push_str(&format!("]({link})"));
        }
        "p" | "span" | "h2" | "ul" | "li" => {}
        _ => {
            return Err(Error::InstructionsError(format!("unknown tag: {tag}")));
        }
    }

    let mut output = output.trim_end().to_owned();

    // hack to ensure emphasised code blocks have the correct operation order
    if output.starts_with('`') && output.contains("**") {
        output = format!("**{}**", &output.replace("**", ""));
    }

    if !preformatted {
        output = output.replace("&gt;", ">");
        output = output.replace("&lt;", "<");
    }

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    const DAY_URL: &str = "https://adventofcode.com/2024/day/5";

    #[test]
    fn day_title_becomes_a_linked_heading() {
        let html = r#"<article class="day-desc"><h2>--- Day 5: Print Queue ---</h2>
<p>Safety first.</p>
</article>"#;

        let markdown = to_markdown(html, DAY_URL).unwrap();
        assert!(markdown
            .starts_with("# [--- Day 5: Print Queue ---](https://adventofcode.com/2024/day/5)"));
        assert!(markdown.contains("\n\nSafety first."));
    }

    #[test]
    fn part_two_heading_stays_a_subheading() {
        let html = "<article><h2>--- Day 5 ---</h2></article>\
                    <article><h2 id=\"part2\">--- Part Two ---</h2></article>";

        let markdown = to_markdown(html, DAY_URL).unwrap();
        assert!(markdown.contains("## --- Part Two ---"));
    }

    #[test]
    fn emphasis_and_code_are_converted() {
        let html =
            "<article><p>press <em>the</em> <code>big red</code> button</p></article>";

        let markdown = to_markdown(html, DAY_URL).unwrap();
        assert!(markdown.contains("press **the** `big red` button"));
    }

    #[test]
    fn preformatted_blocks_are_kept_as_html() {
        let html = "<article><pre><code>1 &gt; 2\n3 &lt; 4</code></pre></article>";

        let markdown = to_markdown(html, DAY_URL).unwrap();
        assert!(markdown.contains("<pre><code>1 &gt; 2\n3 &lt; 4</code></pre>"));
    }

    #[test]
    fn entities_are_unescaped_outside_pre() {
        let html = "<article><p>a &gt; b and c &lt; d</p></article>";

        let markdown = to_markdown(html, DAY_URL).unwrap();
        assert!(markdown.contains("a > b and c < d"));
    }

    #[test]
    fn anchors_become_links() {
        let html = r#"<article><p>see <a href="https://example.com/page">the docs</a></p></article>"#;

        let markdown = to_markdown(html, DAY_URL).unwrap();
        assert!(markdown.contains("[the docs](https://example.com/page)"));
    }

    #[test]
    fn list_items_become_bullets() {
        let html = "<article><ul>\n<li>one</li>\n<li>two</li>\n</ul></article>";

        let markdown = to_markdown(html, DAY_URL).unwrap();
        assert!(markdown.contains("  - one"));
        assert!(markdown.contains("  - two"));
    }

    #[test]
    fn pages_without_articles_are_rejected() {
        let result = to_markdown("<html><body>404</body></html>", DAY_URL);
        assert!(matches!(result, Err(Error::InstructionsError(_))));
    }

    #[test]
    fn unknown_tags_are_rejected() {
        let html = "<article><table><tr></tr></table></article>";
        let result = to_markdown(html, DAY_URL);
        assert!(matches!(result, Err(Error::InstructionsError(_))));
    }
}
