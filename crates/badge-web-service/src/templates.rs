//! 结果页渲染

use crate::last_badge::LastBadge;

/// 样式下拉框选项
const STYLE_OPTIONS: [&str; 5] = ["flat", "flat-square", "plastic", "for-the-badge", "social"];

/// 转义插入 HTML 的文本与属性值
pub fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// 渲染结果页：最近的徽章图片、地址和生成表单
pub fn render_main_page(badge: &LastBadge) -> String {
    let url = escape_html(&badge.url);
    let generated = match badge.generated_at {
        Some(at) => format!("<p class=\"generated-at\">生成于 {}</p>", at.to_rfc3339()),
        None => String::new(),
    };
    let style_options: String = STYLE_OPTIONS
        .iter()
        .map(|style| format!("<option value=\"{style}\">{style}</option>"))
        .collect();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Kaggle Badge</title>
</head>
<body>
<h1>Kaggle Badge</h1>
<div class="badge">
<img src="{url}" alt="Kaggle badge">
<pre><code>{url}</code></pre>
{generated}
</div>
<form action="/generate" method="post">
<label>Username <input type="text" name="username"></label>
<label>Style <select name="style_options">{style_options}</select></label>
<label>Logo <select name="logo_options"><option value="Off">Off</option><option value="On">On</option></select></label>
<button type="submit">Generate</button>
</form>
</body>
</html>
"#
    )
}
