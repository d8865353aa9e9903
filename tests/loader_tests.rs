//! Tests for the public loading and inspection surface.
//!
//! The live tests need a reachable PostgreSQL and are ignored by default;
//! point `PGBULK_TEST_DSN` at a scratch database to run them.

use pgbulk::{values_literal, BulkError, Grid, SqlValue};

#[test]
fn values_literal_matches_documented_examples() {
    let numbers = Grid::from_rows(vec![
        vec![1, 2],
        vec![3, 4],
        vec![5, 6],
        vec![7, 8],
    ])
    .unwrap();
    assert_eq!(
        values_literal(&numbers, false),
        "(1, 2), (3, 4), (5, 6), (7, 8)"
    );

    let strings = Grid::from_rows(vec![vec!["a", "b"]]).unwrap();
    assert_eq!(values_literal(&strings, true), "('a', 'b')");
}

#[test]
fn grid_rejects_non_rectangles() {
    assert!(matches!(
        Grid::<i32>::from_rows(vec![]),
        Err(BulkError::Shape(_))
    ));
    assert!(matches!(
        Grid::from_rows(vec![vec![1, 2], vec![3]]),
        Err(BulkError::Shape(_))
    ));
}

#[test]
fn sql_value_grid_renders_previewable_text() {
    let grid = Grid::from_rows(vec![vec![SqlValue::from(1i64), SqlValue::Null]]).unwrap();
    assert_eq!(values_literal(&grid, false), "(1, NULL)");
}

fn init_logging() {
    use tracing_subscriber::EnvFilter;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init();
}

fn test_dsn() -> String {
    std::env::var("PGBULK_TEST_DSN").expect("PGBULK_TEST_DSN not set")
}

#[tokio::test]
#[ignore = "needs a live PostgreSQL; set PGBULK_TEST_DSN"]
async fn live_load_and_describe() {
    init_logging();
    let dsn = test_dsn();

    let (client, connection) = tokio_postgres::connect(&dsn, tokio_postgres::NoTls)
        .await
        .unwrap();
    tokio::spawn(async move {
        let _ = connection.await;
    });
    client
        .batch_execute(
            "DROP TABLE IF EXISTS pgbulk_live_test;
             CREATE TABLE pgbulk_live_test (id bigint, label text)",
        )
        .await
        .unwrap();

    let grid = Grid::from_rows(vec![
        vec![SqlValue::from(1i64), SqlValue::from("low")],
        vec![SqlValue::from(9i64), SqlValue::from("high")],
    ])
    .unwrap();

    let inserted = pgbulk::insert_rows_checked(&dsn, "pgbulk_live_test", &grid)
        .await
        .unwrap();
    assert_eq!(inserted, 2);

    pgbulk::dry_run(&dsn, "pgbulk_live_test", &grid).await.unwrap();

    let report = pgbulk::describe_table(&dsn, "pgbulk_live_test", "id")
        .await
        .unwrap();
    assert!(report.contains("Table summary: pgbulk_live_test"));
    assert!(report.contains("With 2 entries"));
    // boundary rows: minimum first, maximum second
    let low = report.find("low").unwrap();
    let high = report.find("high").unwrap();
    assert!(low < high);

    let missing = pgbulk::dry_run(&dsn, "pgbulk_live_test_missing", &grid).await;
    assert!(matches!(missing, Err(BulkError::MissingTable(_))));

    let narrow = Grid::from_rows(vec![vec![SqlValue::from(1i64)]]).unwrap();
    let mismatch = pgbulk::dry_run(&dsn, "pgbulk_live_test", &narrow).await;
    assert!(matches!(
        mismatch,
        Err(BulkError::ColumnMismatch {
            expected: 2,
            found: 1,
            ..
        })
    ));

    client
        .batch_execute("DROP TABLE pgbulk_live_test")
        .await
        .unwrap();
}

#[tokio::test]
#[ignore = "needs a live PostgreSQL; set PGBULK_TEST_DSN"]
async fn live_literal_insert() {
    init_logging();
    let dsn = test_dsn();

    let (client, connection) = tokio_postgres::connect(&dsn, tokio_postgres::NoTls)
        .await
        .unwrap();
    tokio::spawn(async move {
        let _ = connection.await;
    });
    client
        .batch_execute(
            "DROP TABLE IF EXISTS pgbulk_live_labels;
             CREATE TABLE pgbulk_live_labels (name text, code text)",
        )
        .await
        .unwrap();

    let labels = Grid::from_rows(vec![vec!["alpha", "a1"], vec!["beta", "b2"]]).unwrap();
    let inserted = pgbulk::insert_rows(&dsn, "pgbulk_live_labels", &labels, true)
        .await
        .unwrap();
    assert_eq!(inserted, 2);

    let row = client
        .query_one("SELECT COUNT(*) FROM pgbulk_live_labels", &[])
        .await
        .unwrap();
    assert_eq!(row.get::<_, i64>(0), 2);

    client
        .batch_execute("DROP TABLE pgbulk_live_labels")
        .await
        .unwrap();
}
