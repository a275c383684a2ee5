//! HTML rendering of a [`PanelView`].

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use serde_json::Value;
use tinytemplate::TinyTemplate;

use crate::conversation::ConversationEntry;
use crate::view::PanelView;

static CODE_FENCE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)```(.*?)```").expect("code fence pattern is valid")
});

const STYLE: &str = r#"
        body { font-family: Arial, sans-serif; padding: 10px; }
        .user-input { color: #007acc; font-weight: bold; }
        .ai-response { background-color: #f4f4f4; padding: 10px; border-radius: 5px; margin-top: 20px; color: black; }
        .loading { font-size: 16px; color: #888888; margin-top: 20px; }
        .spinner {
            margin-left: 10px;
            display: inline-block;
            width: 16px;
            height: 16px;
            border: 2px solid rgba(0, 0, 0, .3);
            border-radius: 50%;
            border-top-color: #007acc;
            animation: spin 1s ease-in-out infinite;
        }
        @keyframes spin {
            to { transform: rotate(360deg); }
        }
        pre { background: #2d2d2d; color: #ffffff; padding: 10px; border-radius: 5px; }
        .text-section { margin-bottom: 20px; }
"#;

const PAGE: &str = r#"<html>
<head>
    <style>{style | unescaped}    </style>
</head>
<body>
    <h1>Personal Co-Pilot</h1>
    {{ for entry in entries }}
        <div class="text-section">
            <h2>User Input</h2>
            <p class="user-input">{entry.userInput | fenced}</p>
            <h2>AI Response</h2>
            <div class="ai-response">
                {entry.aiResponse | fenced}
            </div>
        </div>{{ endfor }}
    {{ if loading }}<div class="loading">Loading response... <div class="spinner"></div></div>{{ endif }}
</body>
</html>"#;

#[derive(Serialize)]
struct PageContext<'a> {
    style: &'static str,
    entries: &'a [ConversationEntry],
    loading: bool,
}

/// Turn plain response text into panel markup.
///
/// Text is escaped first, then fenced code becomes a `pre` block and every
/// remaining newline becomes a `<br>`.
///
/// ```
/// use personal_copilot::render::format_text;
///
/// assert_eq!(format_text("a\n```x<y```"), "a<br><pre class=\"code-block\">x&lt;y</pre>");
/// ```
pub fn format_text(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    tinytemplate::escape(text, &mut escaped);
    let fenced = CODE_FENCE.replace_all(&escaped, r#"<pre class="code-block">$1</pre>"#);
    fenced.replace('\n', "<br>")
}

fn format_fenced(value: &Value, output: &mut String) -> tinytemplate::error::Result<()> {
    let mut raw = String::new();
    tinytemplate::format_unescaped(value, &mut raw)?;
    output.push_str(&format_text(&raw));
    Ok(())
}

/// Render the whole panel page.
pub fn render_html(view: &PanelView) -> Result<String, tinytemplate::error::Error> {
    let mut tt = TinyTemplate::new();
    tt.add_formatter("fenced", format_fenced);
    tt.add_template("page", PAGE)?;
    tt.render(
        "page",
        &PageContext {
            style: STYLE,
            entries: &view.entries,
            loading: view.loading,
        },
    )
}
