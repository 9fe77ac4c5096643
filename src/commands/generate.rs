//! Generate static files

use anyhow::Result;
use notify::Watcher;
use std::sync::mpsc::channel;
use std::time::{Duration, Instant};

use crate::content::ContentLoader;
use crate::generator::{BuildReport, Generator};
use crate::Blog;

/// Load every post and write the site
pub fn run(blog: &Blog) -> Result<BuildReport> {
    let start = Instant::now();

    let posts = ContentLoader::new(blog).load_posts()?;
    tracing::info!("Loaded {} posts from {:?}", posts.len(), blog.content_dir);

    let report = Generator::new(blog).generate(posts)?;

    tracing::info!("Generated in {:.2}s", start.elapsed().as_secs_f64());
    Ok(report)
}

/// Watch content, static files and config, regenerating on change
pub fn watch(blog: &Blog) -> Result<()> {
    let (tx, rx) = channel();

    let mut watcher = notify::recommended_watcher(move |res| {
        if let Ok(event) = res {
            let _ = tx.send(event);
        }
    })?;

    for dir in [&blog.content_dir, &blog.static_dir] {
        if dir.exists() {
            watcher.watch(dir, notify::RecursiveMode::Recursive)?;
            tracing::debug!("Watching: {:?}", dir);
        }
    }

    let config_path = blog.config_path();
    if config_path.exists() {
        watcher.watch(&config_path, notify::RecursiveMode::NonRecursive)?;
    }

    tracing::info!("Watching for changes. Press Ctrl+C to stop.");

    let mut last_rebuild = Instant::now();

    loop {
        match rx.recv_timeout(Duration::from_millis(100)) {
            Ok(_event) => {
                // Coalesce bursts of events from a single save
                if last_rebuild.elapsed() > Duration::from_millis(500) {
                    tracing::info!("File changed, regenerating...");
                    if let Err(e) = Blog::new(&blog.base_dir).and_then(|b| run(&b)) {
                        tracing::error!("Generation failed: {:#}", e);
                    }
                    last_rebuild = Instant::now();
                }
            }
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    Ok(())
}
