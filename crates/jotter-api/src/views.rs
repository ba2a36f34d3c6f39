//! Minimal server-rendered views.
//!
//! The browser surface is a listing, an editor form, and an error
//! page. The markup is deliberately plain; styling and editor
//! scripting live outside this service.

use jotter_core::{Note, NoteSummary};

/// Escape text for interpolation into HTML.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

fn layout(title: &str, body: &str) -> String {
    format!(
        "<!doctype html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{} · jotter</title>\n</head>\n<body>\n{}</body>\n</html>\n",
        escape_html(title),
        body
    )
}

/// The listing view: search form, tag links, note rows with previews.
pub fn index_page(
    notes: &[NoteSummary],
    query: Option<&str>,
    tag: Option<&str>,
    tags: &[String],
) -> String {
    let mut body = String::new();
    body.push_str("<h1>Notes</h1>\n");
    body.push_str("<p><a href=\"/note/new\">New note</a></p>\n");

    body.push_str(&format!(
        "<form method=\"get\" action=\"/\">\n\
         <input type=\"text\" name=\"q\" value=\"{}\" placeholder=\"Search titles\">\n\
         <input type=\"text\" name=\"tag\" value=\"{}\" placeholder=\"Tag\">\n\
         <button type=\"submit\">Filter</button>\n\
         </form>\n",
        escape_html(query.unwrap_or("")),
        escape_html(tag.unwrap_or(""))
    ));

    if !tags.is_empty() {
        body.push_str("<ul class=\"tags\">\n");
        for t in tags {
            body.push_str(&format!(
                "<li><a href=\"/?tag={}\">{}</a></li>\n",
                urlencoding::encode(t),
                escape_html(t)
            ));
        }
        body.push_str("</ul>\n");
    }

    if notes.is_empty() {
        body.push_str("<p>No notes yet.</p>\n");
    } else {
        body.push_str("<ul class=\"notes\">\n");
        for note in notes {
            body.push_str(&format!(
                "<li>\n\
                 <a href=\"/note/{id}/edit\">{title}</a>\n\
                 <small>{updated}</small>\n\
                 <p>{preview}</p>\n\
                 <form method=\"post\" action=\"/note/{id}/delete\">\
                 <button type=\"submit\">Delete</button></form>\n\
                 </li>\n",
                id = note.id,
                title = escape_html(&note.title),
                updated = note.updated_at.format("%Y-%m-%d %H:%M"),
                preview = escape_html(&note.preview),
            ));
        }
        body.push_str("</ul>\n");
    }

    layout("Notes", &body)
}

/// The editor view; `note` is `None` for a new note.
pub fn edit_page(note: Option<&Note>) -> String {
    let (heading, id, title, content, tags) = match note {
        Some(n) => (
            "Edit note",
            n.id.to_string(),
            n.title.as_str(),
            n.content.as_str(),
            n.tags.as_str(),
        ),
        None => ("New note", String::new(), "", "", ""),
    };

    let body = format!(
        "<h1>{heading}</h1>\n\
         <form method=\"post\" action=\"/note/save\">\n\
         <input type=\"hidden\" name=\"id\" value=\"{id}\">\n\
         <input type=\"text\" name=\"title\" value=\"{title}\" placeholder=\"Title\">\n\
         <input type=\"text\" name=\"tags\" value=\"{tags}\" placeholder=\"tag, another\">\n\
         <textarea name=\"content\" rows=\"20\">{content}</textarea>\n\
         <button type=\"submit\">Save</button>\n\
         </form>\n\
         <p><a href=\"/\">Back to notes</a></p>\n",
        heading = heading,
        id = escape_html(&id),
        title = escape_html(title),
        tags = escape_html(tags),
        content = escape_html(content),
    );

    layout(heading, &body)
}

/// The error page with a human-readable message.
pub fn error_page(status: u16, message: &str) -> String {
    let body = format!(
        "<h1>{status}</h1>\n<p>{message}</p>\n<p><a href=\"/\">Back to notes</a></p>\n",
        status = status,
        message = escape_html(message),
    );
    layout("Error", &body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn summary(id: i64, title: &str, preview: &str) -> NoteSummary {
        NoteSummary {
            id,
            title: title.to_string(),
            preview: preview.to_string(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html("<script>\"a\" & 'b'</script>"),
            "&lt;script&gt;&quot;a&quot; &amp; &#39;b&#39;&lt;/script&gt;"
        );
        assert_eq!(escape_html("plain"), "plain");
    }

    #[test]
    fn test_index_page_escapes_titles() {
        let notes = vec![summary(1, "<b>bold</b>", "preview")];
        let page = index_page(&notes, None, None, &[]);
        assert!(page.contains("&lt;b&gt;bold&lt;/b&gt;"));
        assert!(!page.contains("<b>bold</b>"));
    }

    #[test]
    fn test_index_page_links_edit_and_delete() {
        let notes = vec![summary(7, "t", "p")];
        let page = index_page(&notes, None, None, &[]);
        assert!(page.contains("/note/7/edit"));
        assert!(page.contains("/note/7/delete"));
    }

    #[test]
    fn test_index_page_empty_state() {
        let page = index_page(&[], None, None, &[]);
        assert!(page.contains("No notes yet."));
    }

    #[test]
    fn test_index_page_url_encodes_tag_links() {
        let tags = vec!["deep work".to_string()];
        let page = index_page(&[], None, None, &tags);
        assert!(page.contains("/?tag=deep%20work"));
        assert!(page.contains(">deep work<"));
    }

    #[test]
    fn test_edit_page_empty_editor() {
        let page = edit_page(None);
        assert!(page.contains("New note"));
        assert!(page.contains("name=\"id\" value=\"\""));
    }

    #[test]
    fn test_edit_page_populates_fields() {
        let note = Note {
            id: 3,
            title: "Groceries".to_string(),
            content: "- eggs".to_string(),
            tags: "errands".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        let page = edit_page(Some(&note));
        assert!(page.contains("Edit note"));
        assert!(page.contains("value=\"3\""));
        assert!(page.contains("value=\"Groceries\""));
        assert!(page.contains(">- eggs</textarea>"));
    }

    #[test]
    fn test_error_page_carries_status_and_message() {
        let page = error_page(404, "Note 9 not found");
        assert!(page.contains("404"));
        assert!(page.contains("Note 9 not found"));
    }
}
