use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

use async_trait::async_trait;
use database_traits::{
    Condition, Filter, ListSource, Scalar, StoreError, StoreQuery,
};

struct NumberSource {
    calls: AtomicUsize,
}

#[async_trait]
impl ListSource<i64> for NumberSource {
    async fn fetch(&self, query: &StoreQuery) -> Result<Vec<i64>, StoreError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let start = match query.filter("from").map(|f| &f.condition) {
            Some(Condition::Exact(Scalar::Int(n))) => *n,
            _ => 0,
        };
        Ok((start..start + query.limit as i64).collect())
    }
}

struct BrokenSource;

#[async_trait]
impl ListSource<i64> for BrokenSource {
    async fn fetch(&self, _query: &StoreQuery) -> Result<Vec<i64>, StoreError> {
        Err(StoreError::Unavailable("connection refused".into()))
    }
}

#[tokio::test]
async fn test_arc_source_forwards_to_inner() {
    let inner = Arc::new(NumberSource {
        calls: AtomicUsize::new(0),
    });
    let source: Arc<dyn ListSource<i64>> = inner.clone();

    let query = StoreQuery::new(3).with_filters(vec![Filter::new(
        "from",
        "from_col",
        Condition::Exact(Scalar::Int(10)),
    )]);
    let rows = source.fetch(&query).await.unwrap();

    assert_eq!(rows, vec![10, 11, 12]);
    assert_eq!(inner.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_store_error_surfaces_as_value() {
    let source: Arc<dyn ListSource<i64>> = Arc::new(BrokenSource);
    let err = source.fetch(&StoreQuery::new(5)).await.unwrap_err();

    assert!(matches!(err, StoreError::Unavailable(_)));
    assert_eq!(
        err.to_string(),
        "Backing store unavailable: connection refused"
    );
}
