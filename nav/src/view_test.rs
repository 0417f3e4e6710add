use super::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use types::err;

fn counting(calls: Arc<AtomicUsize>) -> LazyView<&'static str> {
    LazyView::new(move || {
        calls.fetch_add(1, Ordering::SeqCst);
        async { Ok("patients") }
    })
}

#[tokio::test]
async fn loader_does_not_run_until_loaded() {
    let calls = Arc::new(AtomicUsize::new(0));
    let view = counting(calls.clone());

    assert_eq!(calls.load(Ordering::SeqCst), 0);
    assert!(!view.is_loaded());

    assert_eq!(view.load().await.unwrap(), "patients");
    assert!(view.is_loaded());
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn loaded_view_is_cached_across_clones() {
    let calls = Arc::new(AtomicUsize::new(0));
    let view = counting(calls.clone());
    let other = view.clone();

    view.load().await.unwrap();
    other.load().await.unwrap();
    view.load().await.unwrap();

    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert!(other.is_loaded());
}

#[tokio::test]
async fn failed_load_is_reported_and_not_cached() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = calls.clone();
    let view: LazyView<&'static str> = LazyView::new(move || {
        let attempt = counter.fetch_add(1, Ordering::SeqCst);
        async move {
            if attempt == 0 {
                Err(err!("chunk failed to load"))
            } else {
                Ok("treatments")
            }
        }
    });

    let err = view.load().await.unwrap_err();
    assert!(err.to_string().contains("chunk failed to load"));
    assert!(!view.is_loaded());
    assert_eq!(calls.load(Ordering::SeqCst), 1);

    assert_eq!(view.load().await.unwrap(), "treatments");
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn ready_view_loads_immediately() {
    let view = LazyView::ready(7u8);
    assert_eq!(view.load().await.unwrap(), 7);
}
