//! Static viewer page.
//!
//! The relay's only page: connects to `/ws` and renders every
//! `screen_update` frame into an `<img>` tile per sender.

use axum::response::Html;
use axum::routing::get;
use axum::Router;

use crate::app_state::AppState;

/// Embedded viewer page markup.
const VIEWER_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>Screen Broadcast</title>
  <style>
    body { margin: 0; background: #111; color: #eee; font-family: sans-serif; }
    h1 { font-size: 1rem; padding: 0.5rem 1rem; margin: 0; background: #1b1b1b; }
    #screens { display: flex; flex-wrap: wrap; gap: 8px; padding: 8px; }
    .screen { max-width: 640px; }
    .screen img { width: 100%; display: block; background: #000; }
    .screen .label { font-size: 0.8rem; padding: 2px 4px; color: #9c9; }
  </style>
</head>
<body>
  <h1>Screen Broadcast</h1>
  <div id="screens"></div>
  <script>
    const screens = document.getElementById('screens');
    const tiles = new Map();
    const proto = location.protocol === 'https:' ? 'wss' : 'ws';
    const ws = new WebSocket(`${proto}://${location.host}/ws`);
    ws.onmessage = (msg) => {
      const data = JSON.parse(msg.data);
      if (data.event !== 'screen_update') return;
      let tile = tiles.get(data.user);
      if (!tile) {
        tile = document.createElement('div');
        tile.className = 'screen';
        const img = document.createElement('img');
        const label = document.createElement('div');
        label.className = 'label';
        label.textContent = data.user;
        tile.appendChild(img);
        tile.appendChild(label);
        screens.appendChild(tile);
        tiles.set(data.user, tile);
      }
      const img = tile.querySelector('img');
      img.src = data.image.startsWith('data:')
        ? data.image
        : `data:image/jpeg;base64,${data.image}`;
    };
  </script>
</body>
</html>
"#;

/// `GET /` — Serves the viewer page.
pub async fn viewer_handler() -> Html<&'static str> {
    Html(VIEWER_PAGE)
}

/// Viewer page route.
pub fn routes() -> Router<AppState> {
    Router::new().route("/", get(viewer_handler))
}
