use std::sync::Arc;

use httpmock::Method::GET;

use stockfeed_rs::{FeedError, Ingestor, MemoryRepository, NewsRepository};

use crate::common;

#[tokio::test]
async fn ingest_inserts_then_second_pass_is_noop() {
    let server = common::setup_server();
    let client = common::test_client(&server);
    let repo = Arc::new(MemoryRepository::new());
    let ingestor = Ingestor::new(&client, repo.clone());

    let stock = common::seed_stock(&repo, "AAPL").await;
    let posted = common::days_ago(1);

    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/stock-news")
            .query_param("symbol", "AAPL");
        then.status(200)
            .header("content-type", "application/json")
            .body(common::stock_news_body(&[
                common::stock_news_item("Apple ships new thing", "http://news.example/a", posted),
                common::stock_news_item("Supplier update", "http://news.example/b", posted),
            ]));
    });

    // lowercase input resolves the tracked stock
    let report = ingestor.ingest_symbol_news("aapl").await.unwrap();
    assert_eq!(report.count, 2);

    let stored = repo.all_articles().await;
    assert_eq!(stored.len(), 2);
    assert!(stored.iter().all(|a| a.stock_id == Some(stock.id)));
    assert!(stored.iter().all(|a| a.topic == "Stock News"));

    // unchanged provider payload: everything is a duplicate now
    let report = ingestor.ingest_symbol_news("AAPL").await.unwrap();
    assert_eq!(report.count, 0);
    assert_eq!(repo.all_articles().await.len(), 2);

    mock.assert_hits(2);
}

#[tokio::test]
async fn url_match_alone_excludes_a_candidate() {
    let server = common::setup_server();
    let client = common::test_client(&server);
    let repo = Arc::new(MemoryRepository::new());
    let ingestor = Ingestor::new(&client, repo.clone());

    let stock = common::seed_stock(&repo, "AAPL").await;
    repo.insert_articles(&[common::seed_article(
        Some(stock.id),
        "Completely different headline",
        "http://news.example/a",
        common::days_ago(3),
    )])
    .await
    .unwrap();

    let mock = server.mock(|when, then| {
        when.method(GET).path("/stock-news");
        then.status(200)
            .header("content-type", "application/json")
            .body(common::stock_news_body(&[common::stock_news_item(
                "Fed raises rates",
                "http://news.example/a",
                common::days_ago(1),
            )]));
    });

    let report = ingestor.ingest_symbol_news("AAPL").await.unwrap();

    mock.assert();
    assert_eq!(report.count, 0);
    assert_eq!(repo.all_articles().await.len(), 1);
}

#[tokio::test]
async fn title_match_with_different_url_excludes_a_candidate() {
    let server = common::setup_server();
    let client = common::test_client(&server);
    let repo = Arc::new(MemoryRepository::new());
    let ingestor = Ingestor::new(&client, repo.clone());

    let stock = common::seed_stock(&repo, "AAPL").await;
    repo.insert_articles(&[common::seed_article(
        Some(stock.id),
        "Fed raises rates",
        "http://a/1",
        common::days_ago(3),
    )])
    .await
    .unwrap();

    let mock = server.mock(|when, then| {
        when.method(GET).path("/stock-news");
        then.status(200)
            .header("content-type", "application/json")
            .body(common::stock_news_body(&[common::stock_news_item(
                "Fed raises rates",
                "http://a/2",
                common::days_ago(1),
            )]));
    });

    let report = ingestor.ingest_symbol_news("AAPL").await.unwrap();

    mock.assert();
    assert_eq!(report.count, 0);
}

#[tokio::test]
async fn stale_duplicate_outside_the_window_reinserts() {
    let server = common::setup_server();
    let client = common::test_client(&server);
    let repo = Arc::new(MemoryRepository::new());
    let ingestor = Ingestor::new(&client, repo.clone());

    let stock = common::seed_stock(&repo, "AAPL").await;
    let stale = common::days_ago(8);
    repo.insert_articles(&[common::seed_article(
        Some(stock.id),
        "Fed raises rates",
        "http://a/1",
        stale,
    )])
    .await
    .unwrap();

    let mock = server.mock(|when, then| {
        when.method(GET).path("/stock-news");
        then.status(200)
            .header("content-type", "application/json")
            .body(common::stock_news_body(&[common::stock_news_item(
                "Fed raises rates",
                "http://a/1",
                stale,
            )]));
    });

    // the 8-day-old twin is not consulted, so the byte-identical candidate
    // counts as new
    let report = ingestor.ingest_symbol_news("AAPL").await.unwrap();

    mock.assert();
    assert_eq!(report.count, 1);
    assert_eq!(repo.all_articles().await.len(), 2);
}

#[tokio::test]
async fn mixed_batch_inserts_only_the_genuinely_new_article() {
    let server = common::setup_server();
    let client = common::test_client(&server);
    let repo = Arc::new(MemoryRepository::new());
    let ingestor = Ingestor::new(&client, repo.clone());

    common::seed_stock(&repo, "AAPL").await;
    // a topic-path article with no stock association still blocks the
    // syndicated twin
    repo.insert_articles(&[common::seed_article(
        None,
        "Fed raises rates",
        "http://a/1",
        common::days_ago(3),
    )])
    .await
    .unwrap();

    let mock = server.mock(|when, then| {
        when.method(GET).path("/stock-news");
        then.status(200)
            .header("content-type", "application/json")
            .body(common::stock_news_body(&[
                common::stock_news_item("Fed raises rates", "http://a/2", common::days_ago(3)),
                common::stock_news_item("New IPO filing", "http://b/9", common::days_ago(0)),
            ]));
    });

    let report = ingestor.ingest_symbol_news("AAPL").await.unwrap();

    mock.assert();
    assert_eq!(report.count, 1);

    let stored = repo.all_articles().await;
    assert_eq!(stored.len(), 2);
    assert_eq!(stored[1].title, "New IPO filing");
    assert_eq!(stored[1].url, "http://b/9");
}

#[tokio::test]
async fn untracked_stock_fails_before_calling_the_provider() {
    let server = common::setup_server();
    let client = common::test_client(&server);
    let repo = Arc::new(MemoryRepository::new());
    let ingestor = Ingestor::new(&client, repo);

    let mock = server.mock(|when, then| {
        when.method(GET).path("/stock-news");
        then.status(200).body("{}");
    });

    let err = ingestor.ingest_symbol_news("AAPL").await.unwrap_err();

    assert!(matches!(err, FeedError::NotFound(_)), "got {err:?}");
    mock.assert_hits(0);
}

#[tokio::test]
async fn a_shorter_window_lets_recent_duplicates_back_in() {
    let server = common::setup_server();
    let client = common::test_client(&server);
    let repo = Arc::new(MemoryRepository::new());
    let ingestor = Ingestor::new(&client, repo.clone()).dedup_window(chrono::Duration::days(2));

    let stock = common::seed_stock(&repo, "AAPL").await;
    let posted = common::days_ago(3);
    repo.insert_articles(&[common::seed_article(
        Some(stock.id),
        "Fed raises rates",
        "http://a/1",
        posted,
    )])
    .await
    .unwrap();

    let mock = server.mock(|when, then| {
        when.method(GET).path("/stock-news");
        then.status(200)
            .header("content-type", "application/json")
            .body(common::stock_news_body(&[common::stock_news_item(
                "Fed raises rates",
                "http://a/1",
                posted,
            )]));
    });

    // 3-day-old article falls outside a 2-day window
    let report = ingestor.ingest_symbol_news("AAPL").await.unwrap();

    mock.assert();
    assert_eq!(report.count, 1);
}
