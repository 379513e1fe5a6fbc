//! Trailer playback hand-off
//!
//! The Player screen does not decode video. It produces the fixed-layout
//! embed document hosting the third-party iframe (parameterized only by the
//! playback key) and the plain watch URL shown in the terminal.

/// Full HTML page with a single viewport-filling YouTube embed iframe.
///
/// This is the document a hosting webview would load; the only variable is
/// the playback key.
pub fn embed_document(video_key: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
  <head>
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <style>
      * {{ margin: 0; padding: 0; }}
      body {{ background: #000; overflow: hidden; }}
      .container {{
        width: 100vw;
        height: 100vh;
        display: flex;
        align-items: center;
        justify-content: center;
      }}
      iframe {{
        width: 100%;
        height: 100%;
        border: none;
      }}
    </style>
  </head>
  <body>
    <div class="container">
      <iframe
        src="{}"
        allow="accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture"
        allowfullscreen>
      </iframe>
    </div>
  </body>
</html>
"#,
        embed_url(video_key)
    )
}

/// The iframe src URL for a playback key
pub fn embed_url(video_key: &str) -> String {
    format!(
        "https://www.youtube.com/embed/{}?autoplay=1&playsinline=1&controls=1&modestbranding=1",
        video_key
    )
}

/// Browser-openable watch URL for a playback key
pub fn watch_url(video_key: &str) -> String {
    format!("https://www.youtube.com/watch?v={}", video_key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embed_url_is_parameterized_by_key_only() {
        let url = embed_url("dQw4w9WgXcQ");
        assert_eq!(
            url,
            "https://www.youtube.com/embed/dQw4w9WgXcQ?autoplay=1&playsinline=1&controls=1&modestbranding=1"
        );
    }

    #[test]
    fn test_embed_document_contains_single_iframe() {
        let html = embed_document("abc123");
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains(&embed_url("abc123")));
        assert_eq!(html.matches("<iframe").count(), 1);
        assert!(html.contains("allowfullscreen"));
    }

    #[test]
    fn test_watch_url() {
        assert_eq!(
            watch_url("abc123"),
            "https://www.youtube.com/watch?v=abc123"
        );
    }
}
