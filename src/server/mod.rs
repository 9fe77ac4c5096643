//! Development server with live reload

use anyhow::Result;
use axum::{
    body::Body,
    extract::{
        ws::{Message, WebSocket},
        State, WebSocketUpgrade,
    },
    http::{Request, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::get,
    Router,
};
use notify_debouncer_mini::{new_debouncer, notify::RecursiveMode};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::broadcast;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::Blog;

/// Live reload script injected into HTML pages
const LIVE_RELOAD_SCRIPT: &str = r#"
<script>
(function() {
    var ws = new WebSocket('ws://' + location.host + '/__livereload');
    ws.onmessage = function(msg) {
        if (msg.data === 'reload') {
            location.reload();
        }
    };
    ws.onclose = function() {
        setTimeout(function() { location.reload(); }, 1000);
    };
})();
</script>
</body>
"#;

/// Server state
struct ServerState {
    public_dir: PathBuf,
    reload_tx: broadcast::Sender<()>,
    live_reload: bool,
}

/// Start the development server
pub async fn start(blog: &Blog, ip: &str, port: u16, watch: bool, open: bool) -> Result<()> {
    let (reload_tx, _) = broadcast::channel::<()>(16);

    let state = Arc::new(ServerState {
        public_dir: blog.public_dir.clone(),
        reload_tx: reload_tx.clone(),
        live_reload: watch,
    });

    let app = Router::new()
        .route("/__livereload", get(livereload_handler))
        .fallback(fallback_handler)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let bind_ip = if ip == "localhost" { "127.0.0.1" } else { ip };
    let addr: SocketAddr = format!("{}:{}", bind_ip, port).parse()?;

    let url = format!("http://{}:{}", ip, port);
    println!("Server running at {}", url);
    if watch {
        println!("Live reload enabled. Watching for changes...");
    }
    println!("Press Ctrl+C to stop.");

    if open {
        if let Err(e) = open_browser(&url) {
            tracing::warn!("Failed to open browser: {}", e);
        }
    }

    if watch {
        let blog = blog.clone();
        // The debouncer blocks on a std channel, keep it off the async workers
        tokio::task::spawn_blocking(move || {
            if let Err(e) = watch_and_reload(blog, reload_tx) {
                tracing::error!("File watcher error: {}", e);
            }
        });
    }

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Watch for file changes, regenerate and trigger reload
fn watch_and_reload(blog: Blog, reload_tx: broadcast::Sender<()>) -> Result<()> {
    let (tx, rx) = std::sync::mpsc::channel();

    let mut debouncer = new_debouncer(Duration::from_millis(500), tx)?;

    for dir in [&blog.content_dir, &blog.static_dir] {
        if dir.exists() {
            debouncer.watcher().watch(dir, RecursiveMode::Recursive)?;
            tracing::debug!("Watching: {:?}", dir);
        }
    }

    let config_path = blog.config_path();
    if config_path.exists() {
        debouncer
            .watcher()
            .watch(&config_path, RecursiveMode::NonRecursive)?;
        tracing::debug!("Watching: {:?}", config_path);
    }

    loop {
        match rx.recv() {
            Ok(Ok(events)) => {
                let relevant: Vec<_> = events.iter().filter(|e| is_relevant(&e.path)).collect();
                if relevant.is_empty() {
                    continue;
                }

                for event in &relevant {
                    tracing::info!("File changed: {}", event.path.display());
                }

                // Config edits can move directories, so start from a fresh Blog
                match Blog::new(&blog.base_dir).and_then(|b| b.generate()) {
                    Ok(report) => {
                        tracing::info!("Regenerated {} pages", report.pages);
                        let _ = reload_tx.send(());
                    }
                    Err(e) => {
                        tracing::error!("Generation failed: {:#}", e);
                    }
                }
            }
            Ok(Err(e)) => {
                tracing::error!("Watch error: {:?}", e);
            }
            Err(e) => {
                tracing::error!("Channel error: {:?}", e);
                break;
            }
        }
    }

    Ok(())
}

/// Editor droppings and VCS internals never trigger a rebuild
fn is_relevant(path: &Path) -> bool {
    let path_str = path.to_string_lossy();
    !path_str.contains(".git")
        && !path_str.contains(".DS_Store")
        && !path_str.ends_with('~')
        && !path_str.ends_with(".swp")
}

/// WebSocket handler for live reload
async fn livereload_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<ServerState>>,
) -> impl IntoResponse {
    let reload_rx = state.reload_tx.subscribe();
    ws.on_upgrade(move |socket| handle_livereload_socket(socket, reload_rx))
}

/// Handle WebSocket connection for live reload
async fn handle_livereload_socket(mut socket: WebSocket, mut reload_rx: broadcast::Receiver<()>) {
    tracing::debug!("Live reload client connected");

    loop {
        tokio::select! {
            result = reload_rx.recv() => {
                match result {
                    Ok(_) => {
                        if socket.send(Message::Text("reload".to_string())).await.is_err() {
                            break;
                        }
                    }
                    Err(broadcast::error::RecvError::Closed) => break,
                    Err(broadcast::error::RecvError::Lagged(_)) => continue,
                }
            }
            msg = socket.recv() => {
                match msg {
                    Some(Ok(Message::Ping(data))) => {
                        if socket.send(Message::Pong(data)).await.is_err() {
                            break;
                        }
                    }
                    Some(Ok(Message::Close(_))) | None => break,
                    _ => {}
                }
            }
        }
    }

    tracing::debug!("Live reload client disconnected");
}

/// Serve files from the public directory, injecting the live reload script
/// into HTML and falling back to the generated 404 page
async fn fallback_handler(
    State(state): State<Arc<ServerState>>,
    request: Request<Body>,
) -> Response {
    let file_path = resolve_path(&state.public_dir, request.uri().path());

    let is_html = file_path
        .as_ref()
        .and_then(|p| p.extension())
        .map(|ext| ext == "html" || ext == "htm")
        .unwrap_or(false);

    match file_path {
        Some(path) if is_html => match tokio::fs::read_to_string(&path).await {
            Ok(content) => {
                let content = if state.live_reload {
                    inject_live_reload(&content)
                } else {
                    content
                };
                Html(content).into_response()
            }
            Err(_) => (StatusCode::NOT_FOUND, "Not found").into_response(),
        },
        Some(_) => {
            let mut service = ServeDir::new(&state.public_dir);
            match service.try_call(request).await {
                Ok(response) => response.into_response(),
                Err(_) => (StatusCode::INTERNAL_SERVER_ERROR, "Server error").into_response(),
            }
        }
        None => {
            let body = tokio::fs::read_to_string(state.public_dir.join("404.html"))
                .await
                .map(|content| {
                    if state.live_reload {
                        inject_live_reload(&content)
                    } else {
                        content
                    }
                })
                .unwrap_or_else(|_| "Not found".to_string());
            (StatusCode::NOT_FOUND, Html(body)).into_response()
        }
    }
}

/// Map a request path to a file in the public directory
fn resolve_path(public_dir: &Path, request_path: &str) -> Option<PathBuf> {
    let clean_path = request_path.trim_start_matches('/');
    if clean_path.split('/').any(|part| part == "..") {
        return None;
    }

    let candidate = public_dir.join(clean_path);
    if candidate.is_dir() {
        let index = candidate.join("index.html");
        return index.exists().then_some(index);
    }
    if candidate.is_file() {
        return Some(candidate);
    }

    let with_html = public_dir.join(format!("{}.html", clean_path.trim_end_matches('/')));
    with_html.is_file().then_some(with_html)
}

/// Inject live reload script into HTML content
fn inject_live_reload(html: &str) -> String {
    if html.contains("</body>") {
        html.replacen("</body>", LIVE_RELOAD_SCRIPT, 1)
    } else {
        format!("{}{}", html, LIVE_RELOAD_SCRIPT)
    }
}

/// Open a URL in the default browser
fn open_browser(url: &str) -> Result<()> {
    #[cfg(target_os = "macos")]
    {
        std::process::Command::new("open").arg(url).spawn()?;
    }

    #[cfg(target_os = "linux")]
    {
        std::process::Command::new("xdg-open").arg(url).spawn()?;
    }

    #[cfg(target_os = "windows")]
    {
        std::process::Command::new("cmd")
            .args(["/c", "start", url])
            .spawn()?;
    }

    Ok(())
}
