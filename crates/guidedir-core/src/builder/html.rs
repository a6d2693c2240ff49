//! HTML generation for guide pages.
//!
//! Block text is emitted verbatim, so authors can use inline markup.

use super::block::{Block, GuideDraft};
use crate::config::SiteConfig;
use crate::effects::sidebar_entrance;

/// Append `line` and a newline.
fn push_line(html: &mut String, line: &str) {
    html.push_str(line);
    html.push('\n');
}

/// Tracks whether a `<section>` is currently open while blocks are emitted.
struct Sections {
    html: String,
    sidebar: Vec<(String, String)>,
    open: bool,
}

impl Sections {
    fn new() -> Self {
        Self {
            html: String::new(),
            sidebar: vec![("#intro".to_string(), "Introduction".to_string())],
            open: false,
        }
    }

    fn close(&mut self) {
        if self.open {
            self.html.push_str("</section>\n");
            self.open = false;
        }
    }

    fn open(&mut self, id: &str) {
        push_line(
            &mut self.html,
            &format!("<section id=\"{id}\" class=\"guide-section\">"),
        );
        self.open = true;
    }

    /// Open `fallback_id` unless a section is already open.
    fn ensure_open(&mut self, fallback_id: &str) {
        if !self.open {
            self.open(fallback_id);
        }
    }

    fn push(&mut self, block: &Block) {
        match block {
            Block::Header { text, id } => {
                self.close();
                self.open(id);
                push_line(&mut self.html, &format!("    <h2>{text}</h2>"));
                self.sidebar.push((format!("#{id}"), text.clone()));
            }
            Block::Paragraph { text } => {
                self.ensure_open("intro");
                push_line(&mut self.html, &format!("    <p>{text}</p>"));
            }
            Block::Code { language, code } => {
                self.ensure_open("example");
                push_line(
                    &mut self.html,
                    &format!("    <pre><code class=\"language-{language}\">{code}</code></pre>"),
                );
            }
            Block::Alert { level, text } => {
                self.ensure_open("info");
                push_line(
                    &mut self.html,
                    &format!("    <div class=\"{level}\"><p>{text}</p></div>"),
                );
            }
            Block::List { items } => {
                self.ensure_open("list");
                self.html.push_str("    <ul>\n");
                for item in items.split('\n').map(str::trim).filter(|i| !i.is_empty()) {
                    push_line(&mut self.html, &format!("        <li>{item}</li>"));
                }
                self.html.push_str("    </ul>\n");
            }
        }
    }
}

fn sidebar_links(links: &[(String, String)], back_label: &str) -> String {
    let mut html = String::new();
    for (index, (href, label)) in links.iter().enumerate() {
        let active = if index == 0 { " class=\"active\"" } else { "" };
        let style = sidebar_entrance(index);
        push_line(
            &mut html,
            &format!("            <li><a href=\"{href}\"{active} style=\"{style}\">{label}</a></li>"),
        );
    }
    let style = sidebar_entrance(links.len());
    push_line(
        &mut html,
        &format!("            <li><a href=\"../index.html\" style=\"{style}\">{back_label}</a></li>"),
    );
    html
}

/// Render the complete HTML document for `draft`.
pub fn render_page(draft: &GuideDraft, site: &SiteConfig) -> String {
    let mut sections = Sections::new();
    for block in &draft.blocks {
        sections.push(block);
    }
    sections.close();

    let title = &draft.title;
    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("    <meta charset=\"UTF-8\">\n");
    html.push_str(
        "    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n",
    );
    push_line(&mut html, &format!("    <title>{title}</title>"));
    push_line(
        &mut html,
        &format!("    <link rel=\"stylesheet\" href=\"{}\">", site.stylesheet),
    );
    if let Some(font) = &site.font_stylesheet {
        push_line(&mut html, &format!("    <link href=\"{font}\" rel=\"stylesheet\">"));
    }
    for script in &site.head_scripts {
        push_line(&mut html, &format!("    <script src=\"{script}\" defer></script>"));
    }
    html.push_str("</head>\n<body class=\"guide-page\">\n\n");

    html.push_str("    <nav id=\"sidebar\">\n");
    push_line(&mut html, &format!("        <h2>{title}</h2>"));
    html.push_str("        <ul>\n");
    html.push_str(&sidebar_links(&sections.sidebar, &site.back_link_label));
    html.push_str("        </ul>\n    </nav>\n\n");

    html.push_str("    <div id=\"main-content\">\n        <header>\n");
    push_line(&mut html, &format!("            <h1>{title}</h1>"));
    push_line(&mut html, &format!("            <p>{}</p>", draft.description));
    html.push_str("        </header>\n\n");
    html.push_str(&sections.html);
    html.push_str("\n        <footer>\n");
    let footer = match &site.footer_href {
        Some(href) => format!("            <a href=\"{href}\">{}</a>", site.footer_text),
        None => format!("            <p>{}</p>", site.footer_text),
    };
    push_line(&mut html, &footer);
    html.push_str("        </footer>\n    </div>\n\n");
    push_line(&mut html, &format!("    <script src=\"{}\"></script>", site.body_script));
    html.push_str("</body>\n</html>\n");

    html
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(blocks: Vec<Block>) -> String {
        let mut draft = GuideDraft::new("Docker", "docker").with_description("Containers");
        draft.blocks = blocks;
        render_page(&draft, &SiteConfig::default())
    }

    #[test]
    fn test_paragraph_opens_intro_section() {
        let html = render(vec![Block::Paragraph {
            text: "Hello".to_string(),
        }]);
        assert!(html.contains("<section id=\"intro\" class=\"guide-section\">\n    <p>Hello</p>\n</section>"));
    }

    #[test]
    fn test_header_closes_previous_section_and_links_sidebar() {
        let html = render(vec![
            Block::paragraph(),
            Block::Header {
                text: "Install".to_string(),
                id: "install".to_string(),
            },
            Block::code(),
        ]);
        assert!(html.contains("</section>\n<section id=\"install\" class=\"guide-section\">\n    <h2>Install</h2>\n    <pre><code class=\"language-bash\"># Command here</code></pre>\n</section>"));
        assert!(html.contains("<a href=\"#install\" style=\"opacity: 0; animation: textCreation 0.5s ease-out forwards 50ms;\">Install</a>"));
        assert_eq!(html.matches("<section").count(), 2);
    }

    #[test]
    fn test_first_sidebar_link_is_active_intro() {
        let html = render(Vec::new());
        assert!(html.contains("<a href=\"#intro\" class=\"active\" style=\"opacity: 0; animation: textCreation 0.5s ease-out forwards 0ms;\">Introduction</a>"));
        assert!(html.contains("<a href=\"../index.html\""));
        assert!(!html.contains("<section"));
    }

    #[test]
    fn test_list_skips_blank_items() {
        let html = render(vec![Block::List {
            items: " one \n\n two\n".to_string(),
        }]);
        assert!(html.contains("<section id=\"list\" class=\"guide-section\">\n    <ul>\n        <li>one</li>\n        <li>two</li>\n    </ul>\n</section>"));
    }

    #[test]
    fn test_alert_uses_level_as_class() {
        let html = render(vec![Block::Alert {
            level: "warning".to_string(),
            text: "Careful".to_string(),
        }]);
        assert!(html.contains("<section id=\"info\""));
        assert!(html.contains("<div class=\"warning\"><p>Careful</p></div>"));
    }

    #[test]
    fn test_page_chrome() {
        let html = render(Vec::new());
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Docker</title>"));
        assert!(html.contains("<h1>Docker</h1>"));
        assert!(html.contains("<p>Containers</p>"));
        assert!(html.contains("<link rel=\"stylesheet\" href=\"../style.css\">"));
        assert!(html.contains("<script src=\"../script.js\"></script>"));
    }

    #[test]
    fn test_lines_are_newline_terminated() {
        let mut html = String::new();
        push_line(&mut html, "<p>a</p>");
        push_line(&mut html, "<p>b</p>");
        assert_eq!(html, "<p>a</p>\n<p>b</p>\n");

        let page = render(vec![]);
        assert!(page.contains("    <title>Docker</title>\n"));
        assert!(page.contains("            <p>Legal Notice</p>\n"));
        assert!(page.ends_with("</body>\n</html>\n"));

        let site = SiteConfig {
            footer_href: Some("../legal.html".to_string()),
            ..SiteConfig::default()
        };
        let page = render_page(&GuideDraft::new("Docker", "docker"), &site);
        assert!(page.contains("            <a href=\"../legal.html\">Legal Notice</a>\n"));
    }
}
