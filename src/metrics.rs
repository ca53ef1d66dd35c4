// Hit counter
// Counts requests served by the static file handler

use axum::{
    body::Body,
    extract::State,
    http::Request,
    middleware::Next,
    response::Response,
};
use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc,
};

/// Process-lifetime request counter shared through the application state.
#[derive(Debug, Default)]
pub struct HitCounter {
    hits: AtomicU64,
}

impl HitCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one hit and return the new total.
    pub fn increment(&self) -> u64 {
        self.hits.fetch_add(1, Ordering::Relaxed) + 1
    }

    pub fn get(&self) -> u64 {
        self.hits.load(Ordering::Relaxed)
    }

    pub fn reset(&self) {
        self.hits.store(0, Ordering::Relaxed);
    }
}

/// Middleware counting every request before handing it to the wrapped service.
/// The count goes up whatever the inner service answers.
pub async fn count_hits(
    State(hits): State<Arc<HitCounter>>,
    request: Request<Body>,
    next: Next,
) -> Response {
    let total = hits.increment();
    tracing::debug!(total, path = %request.uri().path(), "Static file hit");

    next.run(request).await
}

/// Admin page showing the current hit count.
pub fn render_metrics_page(hits: u64) -> String {
    format!(
        r#"<html>
  <body>
    <h1>Welcome, Chirpy Admin</h1>
    <p>Chirpy has been visited {} times!</p>
  </body>
</html>"#,
        hits
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_increment_and_reset() {
        let counter = HitCounter::new();
        assert_eq!(counter.get(), 0);

        assert_eq!(counter.increment(), 1);
        assert_eq!(counter.increment(), 2);
        assert_eq!(counter.get(), 2);

        counter.reset();
        assert_eq!(counter.get(), 0);
        assert_eq!(counter.increment(), 1);
    }

    #[test]
    fn test_concurrent_increments_are_not_lost() {
        let counter = Arc::new(HitCounter::new());

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let counter = Arc::clone(&counter);
                std::thread::spawn(move || {
                    for _ in 0..1000 {
                        counter.increment();
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(counter.get(), 8000);
    }

    #[test]
    fn test_metrics_page() {
        let page = render_metrics_page(42);
        assert!(page.contains("<h1>Welcome, Chirpy Admin</h1>"));
        assert!(page.contains("<p>Chirpy has been visited 42 times!</p>"));
    }
}
