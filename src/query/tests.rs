//! Query Module Tests
//!
//! Validates the lookup operations against a small fixture and the bundled data.
//!
//! ## Test Scopes
//! - **Listing**: order, copies, distinct values, sorted entities.
//! - **Filtering**: case-insensitive substring per column, `all` dispatch, bad selectors.
//! - **Search**: any-column matching, one result per job.
//! - **HTTP**: status codes and bodies of the Axum handlers.

#[cfg(test)]
mod tests {
    use crate::error::JobDataError;
    use crate::loader::TextSource;
    use crate::model::{Column, DimensionKind, Job};
    use crate::query::handlers::router;
    use crate::query::types::{
        ErrorResponse, JobView, JobsResponse, ListPageResponse, SearchPageResponse,
        ValuesResponse,
    };
    use crate::query::{ColumnSelector, QueryEngine, column_choices};
    use crate::store::JobStore;

    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode};
    use serde::de::DeserializeOwned;
    use std::sync::Arc;
    use tower::ServiceExt;

    const FIXTURE: &str = "name,employer,location,position type,core competency\n\
        Web Developer,Acme Corp,St. Louis,Full Time,Java\n\
        Data Analyst,Acme Corp,Chicago,Contract,SQL\n\
        Support Tech,Globex,St. Louis,Full Time,Java\n";

    fn row1() -> Job {
        Job::new("Web Developer", "Acme Corp", "St. Louis", "Full Time", "Java")
    }

    fn row2() -> Job {
        Job::new("Data Analyst", "Acme Corp", "Chicago", "Contract", "SQL")
    }

    fn row3() -> Job {
        Job::new("Support Tech", "Globex", "St. Louis", "Full Time", "Java")
    }

    fn engine_with(csv: &str) -> QueryEngine {
        QueryEngine::new(Arc::new(JobStore::new(TextSource::new(csv))))
    }

    fn fixture_engine() -> QueryEngine {
        engine_with(FIXTURE)
    }

    fn bundled_engine() -> QueryEngine {
        QueryEngine::new(Arc::new(JobStore::bundled()))
    }

    // ============================================================
    // LISTING TESTS
    // ============================================================

    #[tokio::test]
    async fn test_list_all_jobs_in_source_order() {
        let jobs = fixture_engine().list_all_jobs().await.unwrap();
        assert_eq!(jobs, vec![row1(), row2(), row3()]);
    }

    #[tokio::test]
    async fn test_list_all_jobs_returns_copy() {
        let engine = fixture_engine();

        let mut jobs = engine.list_all_jobs().await.unwrap();
        jobs.clear();

        assert_eq!(engine.list_all_jobs().await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_list_distinct_employers() {
        let values = fixture_engine()
            .list_distinct_values("employer")
            .await
            .unwrap();
        assert_eq!(values, vec!["Acme Corp", "Globex"]);
    }

    #[tokio::test]
    async fn test_distinct_values_strictly_ascending() {
        let engine = bundled_engine();

        for kind in DimensionKind::ALL {
            let values = engine.distinct_values(kind).await.unwrap();
            assert!(!values.is_empty());
            assert!(
                values.windows(2).all(|w| w[0] < w[1]),
                "{} values not strictly ascending: {:?}",
                kind,
                values
            );
        }
    }

    #[tokio::test]
    async fn test_distinct_values_case_sensitive_order() {
        let csv = "name,employer,location,position type,core competency\n\
            A,beta,X,Full Time,SQL\n\
            B,Alpha,X,Full Time,SQL\n\
            C,alpha,X,Full Time,SQL\n\
            D,Alpha,X,Full Time,SQL\n";
        let values = engine_with(csv)
            .list_distinct_values("employer")
            .await
            .unwrap();
        assert_eq!(values, vec!["Alpha", "alpha", "beta"]);
    }

    #[tokio::test]
    async fn test_list_dimension_entities_sorted() {
        let entities = fixture_engine()
            .list_dimension_entities("location")
            .await
            .unwrap();

        let values: Vec<&str> = entities.iter().map(|e| e.value()).collect();
        assert_eq!(values, vec!["Chicago", "St. Louis"]);
        assert!(entities.iter().all(|e| e.kind() == DimensionKind::Location));
    }

    #[tokio::test]
    async fn test_every_job_reference_is_listed() {
        let engine = bundled_engine();
        let jobs = engine.list_all_jobs().await.unwrap();

        for kind in DimensionKind::ALL {
            let entities = engine.dimension_entities(kind).await.unwrap();
            for job in &jobs {
                assert!(entities.contains(job.dimension(kind)));
            }
        }
    }

    #[tokio::test]
    async fn test_list_operations_reject_bad_kind() {
        let engine = fixture_engine();

        assert!(matches!(
            engine.list_distinct_values("bogus").await,
            Err(JobDataError::InvalidDimensionKind(_))
        ));
        assert!(matches!(
            engine.list_dimension_entities("name").await,
            Err(JobDataError::InvalidDimensionKind(_))
        ));
    }

    // ============================================================
    // FILTER TESTS
    // ============================================================

    #[tokio::test]
    async fn test_filter_location_ignores_case() {
        let jobs = fixture_engine()
            .filter_by_column("location", "st. louis")
            .await
            .unwrap();
        assert_eq!(jobs, vec![row1(), row3()]);
    }

    #[tokio::test]
    async fn test_filter_matches_substring() {
        let jobs = fixture_engine()
            .filter_by_column("employer", "acme")
            .await
            .unwrap();
        assert_eq!(jobs, vec![row1(), row2()]);
    }

    #[tokio::test]
    async fn test_filter_empty_term_matches_all() {
        let engine = fixture_engine();

        let filtered = engine.filter_by_column("employer", "").await.unwrap();
        let all = engine.list_all_jobs().await.unwrap();
        assert_eq!(filtered, all);
    }

    #[tokio::test]
    async fn test_filter_by_name() {
        let jobs = fixture_engine()
            .filter_by_column("name", "TECH")
            .await
            .unwrap();
        assert_eq!(jobs, vec![row3()]);
    }

    #[tokio::test]
    async fn test_filter_no_match_is_empty() {
        let jobs = fixture_engine()
            .filter_by_column("coreCompetency", "cobol")
            .await
            .unwrap();
        assert!(jobs.is_empty());
    }

    #[tokio::test]
    async fn test_filter_all_runs_search() {
        let engine = fixture_engine();

        let via_filter = engine.filter_by_column("all", "java").await.unwrap();
        let via_search = engine.search_all("java").await.unwrap();
        assert_eq!(via_filter, via_search);
    }

    #[tokio::test]
    async fn test_filter_bogus_column_is_rejected() {
        let engine = fixture_engine();

        let err = engine.filter_by_column("bogus", "java").await.unwrap_err();
        assert!(matches!(err, JobDataError::InvalidDimensionKind(ref k) if k == "bogus"));
        // Rejected before any load
        assert!(!engine.store().is_loaded());
    }

    // ============================================================
    // SEARCH TESTS
    // ============================================================

    #[tokio::test]
    async fn test_search_all_fixture() {
        let jobs = fixture_engine().search_all("java").await.unwrap();
        assert_eq!(jobs, vec![row1(), row3()]);
    }

    #[tokio::test]
    async fn test_search_all_case_insensitive() {
        let csv = "name,employer,location,position type,core competency\n\
            One,A,X,Full Time,sql\n\
            Two,A,X,Full Time,Sql\n\
            Three,A,X,Full Time,SQL\n\
            Four,A,X,Full Time,Java\n";
        let jobs = engine_with(csv).search_all("SQL").await.unwrap();

        let names: Vec<&str> = jobs.iter().map(|j| j.name()).collect();
        assert_eq!(names, vec!["One", "Two", "Three"]);
    }

    #[tokio::test]
    async fn test_search_all_includes_job_once() {
        // "acme" appears in name, employer and location of the same job
        let csv = "name,employer,location,position type,core competency\n\
            Acme Tester,Acme Corp,Acme Town,Full Time,QA\n";
        let jobs = engine_with(csv).search_all("acme").await.unwrap();
        assert_eq!(jobs.len(), 1);
    }

    #[tokio::test]
    async fn test_search_all_covers_every_column() {
        let engine = fixture_engine();

        assert_eq!(engine.search_all("analyst").await.unwrap(), vec![row2()]);
        assert_eq!(engine.search_all("globex").await.unwrap(), vec![row3()]);
        assert_eq!(engine.search_all("chicago").await.unwrap(), vec![row2()]);
        assert_eq!(engine.search_all("contract").await.unwrap(), vec![row2()]);
    }

    #[tokio::test]
    async fn test_search_surfaces_load_failure() {
        let engine = engine_with("name,employer\nBroken,Acme\n");

        let err = engine.search_all("x").await.unwrap_err();
        assert!(matches!(err, JobDataError::MalformedRecord { line: 2, .. }));
        assert!(!engine.store().is_loaded());
    }

    // ============================================================
    // LIST PAGE TESTS
    // ============================================================

    #[tokio::test]
    async fn test_list_jobs_by_column_all() {
        let listing = fixture_engine()
            .list_jobs_by_column("All", "ignored")
            .await
            .unwrap();

        assert_eq!(listing.title, "All Jobs");
        assert_eq!(listing.jobs.len(), 3);
    }

    #[tokio::test]
    async fn test_list_jobs_by_column_title() {
        let listing = fixture_engine()
            .list_jobs_by_column("positionType", "Full Time")
            .await
            .unwrap();

        assert_eq!(listing.title, "Jobs with Position Type: Full Time");
        assert_eq!(listing.jobs, vec![row1(), row3()]);
    }

    #[test]
    fn test_column_choices_order() {
        let keys: Vec<&str> = column_choices().iter().map(|c| c.key).collect();
        assert_eq!(
            keys,
            vec!["all", "employer", "location", "positionType", "coreCompetency"]
        );
        assert_eq!(column_choices()[4].label, "Skill");
    }

    #[test]
    fn test_column_selector_parse() {
        assert_eq!("all".parse::<ColumnSelector>().unwrap(), ColumnSelector::All);
        assert_eq!(
            "name".parse::<ColumnSelector>().unwrap(),
            ColumnSelector::Column(Column::Name)
        );
        assert!("ALL".parse::<ColumnSelector>().is_err());
    }

    // ============================================================
    // HTTP HANDLER TESTS
    // ============================================================

    async fn get_json<T: DeserializeOwned>(engine: QueryEngine, uri: &str) -> (StatusCode, T) {
        let app = router(Arc::new(engine));
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: T = serde_json::from_slice(&bytes).expect("Invalid JSON body");
        (status, body)
    }

    #[tokio::test]
    async fn test_http_list_page() {
        let (status, body): (_, ListPageResponse) = get_json(fixture_engine(), "/list").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.columns.len(), 5);
        assert_eq!(body.employers, vec!["Acme Corp", "Globex"]);
        assert_eq!(body.positions, vec!["Contract", "Full Time"]);
        assert_eq!(body.skills, vec!["Java", "SQL"]);
    }

    #[tokio::test]
    async fn test_http_list_jobs() {
        let (status, body): (_, JobsResponse) = get_json(
            fixture_engine(),
            "/list/jobs?column=location&value=Chicago",
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.title, "Jobs with Location: Chicago");
        assert_eq!(body.count, 1);
        assert_eq!(body.jobs[0], JobView::from(&row2()));
    }

    #[tokio::test]
    async fn test_http_list_values() {
        let (status, body): (_, ValuesResponse) =
            get_json(fixture_engine(), "/list/values?column=coreCompetency").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.label, "Skill");
        assert_eq!(body.values, vec!["Java", "SQL"]);
    }

    #[tokio::test]
    async fn test_http_search_page() {
        let (status, body): (_, SearchPageResponse) = get_json(fixture_engine(), "/search").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.columns[0].label, "All");
    }

    #[tokio::test]
    async fn test_http_search_results() {
        let (status, body): (_, JobsResponse) = get_json(
            fixture_engine(),
            "/search/results?searchType=all&searchTerm=java",
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.title, "Jobs with All: java");
        let names: Vec<&str> = body.jobs.iter().map(|j| j.name.as_str()).collect();
        assert_eq!(names, vec!["Web Developer", "Support Tech"]);
    }

    #[tokio::test]
    async fn test_http_bad_selector_is_400() {
        let (status, body): (_, ErrorResponse) = get_json(
            fixture_engine(),
            "/search/results?searchType=bogus&searchTerm=java",
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.error.contains("bogus"));
    }

    #[tokio::test]
    async fn test_http_load_failure_is_500() {
        let (status, body): (_, ErrorResponse) =
            get_json(engine_with(""), "/list/jobs?column=all").await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body.error.contains("malformed"));
    }
}
