use axum::response::Html;
use axum::{routing::get, Router};

use crate::state::AppState;

/// Browser shell for the live view. Opens `/ws` on the serving host and
/// renders each pushed snapshot, turning newlines into line breaks.
pub const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <title>Host Monitor (Real-Time)</title>
    <style>
        body { font-family: monospace; margin: 2em; }
        .alert { color: #b00020; font-weight: bold; }
        .normal { color: #1b5e20; }
    </style>
</head>
<body>
    <h1>Real-Time Host Monitoring</h1>
    <div id="data"></div>

    <script>
        var ws = new WebSocket("ws://" + window.location.host + "/ws");
        ws.onmessage = function(event) {
            document.getElementById('data').innerHTML = event.data.replace(/\n/g, '<br>');
        };
    </script>
</body>
</html>
"#;

/// GET / -- the live view page.
async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(index))
}
