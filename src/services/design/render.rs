use base64::Engine;

use crate::services::design::types::DesignInfo;

pub fn svg_data_url(svg: &str) -> String {
    format!(
        "data:image/svg+xml;base64,{}",
        base64::engine::general_purpose::STANDARD.encode(svg.as_bytes())
    )
}

/// Lowercased product id with every non-alphanumeric character turned into `-`.
pub fn safe_file_stem(product_id: &str) -> String {
    let stem: String = product_id
        .chars()
        .map(|ch| if ch.is_alphanumeric() { ch } else { '-' })
        .collect::<String>()
        .trim_matches('-')
        .to_lowercase();

    if stem.is_empty() {
        "design".to_string()
    } else {
        stem
    }
}

pub fn download_file_name(design: &DesignInfo) -> String {
    format!("{}-{}.svg", safe_file_stem(&design.product_id), design.code)
}

pub fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

pub fn render_viewer_page(design: &DesignInfo) -> String {
    let code = escape_html(&design.code);
    let product = escape_html(&design.product_id);
    let created = design.created_at.format("%Y-%m-%d %H:%M:%S");
    let preview_src = svg_data_url(&design.svg);
    let file_name = escape_html(&download_file_name(design));

    format!(
        r#"<!doctype html>
<html>
  <head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>Design {code}</title>
    <style>
      body {{ font-family: Arial, Helvetica, sans-serif; margin: 16px; }}
      .wrap {{ max-width: 980px; margin: 0 auto; }}
      .meta {{ color: #666; font-size: 13px; margin-bottom: 8px; }}
      .preview {{ border: 1px solid #ddd; border-radius: 8px; overflow: auto; background: #fafafa; padding: 8px; }}
      .actions {{ margin-top: 12px; display: flex; gap: 8px; }}
      .btn {{ border: 1px solid #ddd; background: #fff; padding: 8px 10px; border-radius: 6px; text-decoration: none; color: #111; }}
    </style>
  </head>
  <body>
    <div class="wrap">
      <h2>Design code: {code}</h2>
      <div class="meta">Product: {product} &middot; Created: {created} UTC</div>
      <div class="preview">
        <img src="{preview_src}" alt="SVG preview" style="max-width: 100%; height: auto; display: block;">
      </div>
      <div class="actions">
        <a class="btn" href="{code}/download" download="{file_name}">Download SVG</a>
      </div>
    </div>
  </body>
</html>
"#
    )
}
