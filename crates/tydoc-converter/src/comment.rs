//! Doc-comment parsing.
//!
//! Extracts the structured form of a `/** ... */` comment: the first
//! paragraph becomes the short text, the remaining paragraphs the long text,
//! and `@tag` lines become tags. Parsing an already-parsed (tag-stripped)
//! body a second time is a no-op: no new tags, identical short/long text.

use tydoc_model::{Comment, CommentTag};

/// Strip comment delimiters and the leading `*` of each line.
fn strip_delimiters(raw: &str) -> String {
    let trimmed = raw.trim();
    let inner = if trimmed.starts_with("/**") && trimmed.ends_with("*/") {
        &trimmed[3..trimmed.len() - 2]
    } else {
        trimmed
    };
    inner
        .lines()
        .map(|line| {
            let stripped = line.trim_start();
            if let Some(rest) = stripped.strip_prefix('*') {
                rest.strip_prefix(' ').unwrap_or(rest)
            } else {
                stripped
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}

/// Parse a raw doc comment into its structured form.
pub fn parse_comment(raw: &str) -> Comment {
    let content = strip_delimiters(raw);
    let mut comment = Comment::default();
    let mut body: Vec<String> = Vec::new();
    let mut current_tag: Option<CommentTag> = None;

    for line in content.lines() {
        let trimmed = line.trim_start();
        if let Some(rest) = trimmed.strip_prefix('@') {
            if let Some(tag) = current_tag.take() {
                push_tag(&mut comment, tag);
            }
            let mut words = rest.splitn(2, char::is_whitespace);
            let tag_name = words.next().unwrap_or("").to_lowercase();
            let remainder = words.next().unwrap_or("").trim();
            let (param_name, text) = if tag_name == "param" {
                let mut parts = remainder.splitn(2, char::is_whitespace);
                let param = parts.next().unwrap_or("").to_string();
                let text = parts.next().unwrap_or("").trim().to_string();
                (Some(param).filter(|p| !p.is_empty()), text)
            } else {
                (None, remainder.to_string())
            };
            current_tag = Some(CommentTag::new(tag_name, param_name, text));
        } else if let Some(tag) = current_tag.as_mut() {
            // Continuation line of the current tag.
            if !tag.text.is_empty() {
                tag.text.push('\n');
            }
            tag.text.push_str(line.trim_end());
        } else {
            body.push(line.trim_end().to_string());
        }
    }
    if let Some(tag) = current_tag.take() {
        push_tag(&mut comment, tag);
    }

    let body = body.join("\n");
    let body = body.trim();
    if !body.is_empty() {
        match body.split_once("\n\n") {
            Some((short, rest)) => {
                comment.short_text = Some(short.trim().to_string());
                let rest = rest.trim();
                if !rest.is_empty() {
                    comment.text = Some(rest.to_string());
                }
            }
            None => comment.short_text = Some(body.to_string()),
        }
    }
    comment
}

fn push_tag(comment: &mut Comment, mut tag: CommentTag) {
    tag.text = tag.text.trim().to_string();
    if tag.tag_name == "returns" || tag.tag_name == "return" {
        comment.returns = Some(tag.text);
    } else {
        comment.tags.push(tag);
    }
}
