use assert_json_diff::assert_json_eq;
use chrono::NaiveDate;
use serde_json::json;
use timesolv_client::error::AppError;
use timesolv_client::model::requests::{Criterion, Operator, SearchEndpoint, SearchQuery};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_endpoint_paths_and_collections() {
    let cases = [
        (SearchEndpoint::FirmUsers, "firmUserSearch", "FirmUsers"),
        (SearchEndpoint::TimeCards, "timecardSearch", "TimeCards"),
        (SearchEndpoint::TaskCodes, "taskcodeSearch", "TaskCodes"),
        (SearchEndpoint::Abbreviations, "abbreviationSearch", "Abbreviations"),
        (SearchEndpoint::Clients, "clientSearch", "Clients"),
    ];
    for (endpoint, path, collection) in cases {
        assert_eq!(endpoint.path(), path);
        assert_eq!(endpoint.collection(), collection);
    }
}

#[test]
fn test_firm_users_page_body() {
    let body = serde_json::to_value(SearchQuery::active_firm_users().page(1, 100)).unwrap();
    assert_json_eq!(
        body,
        json!({
            "OrderBy": "LastName",
            "SortOrderAscending": true,
            "PageSize": 100,
            "PageNumber": 1,
            "Criteria": [
                {"FieldName": "UserStatus", "Operator": "=", "Value": "Active"}
            ]
        })
    );
}

#[test]
fn test_lookup_queries_filter_on_active() {
    let task_codes = serde_json::to_value(SearchQuery::active_task_codes().page(2, 100)).unwrap();
    assert_json_eq!(
        task_codes["Criteria"],
        json!([{"FieldName": "IsActive", "Operator": "=", "Value": 1}])
    );
    assert_eq!(task_codes["PageNumber"], json!(2));

    let abbreviations = SearchQuery::active_abbreviations();
    assert_eq!(abbreviations.endpoint, SearchEndpoint::Abbreviations);
    assert_eq!(abbreviations.criteria, vec![Criterion::equals("IsActive", 1)]);

    let clients = SearchQuery::active_clients();
    assert_eq!(clients.endpoint, SearchEndpoint::Clients);
    assert_eq!(
        clients.criteria,
        vec![Criterion::equals("ClientStatus", "Active")]
    );
}

#[test]
fn test_timecard_range_criteria() {
    let query = SearchQuery::timecards(date(2024, 1, 1), date(2024, 1, 31)).unwrap();
    let body = serde_json::to_value(query.page(1, 100)).unwrap();
    assert_json_eq!(
        body["Criteria"],
        json!([
            {"FieldName": "Date", "Operator": ">=", "Value": "2024-01-01"},
            {"FieldName": "Date", "Operator": "<=", "Value": "2024-01-31"}
        ])
    );
    assert_eq!(body["OrderBy"], json!("Date"));
}

#[test]
fn test_single_day_range_is_valid() {
    assert!(SearchQuery::timecards(date(2024, 2, 29), date(2024, 2, 29)).is_ok());
}

#[test]
fn test_user_timecards_adds_owner_filter() {
    let query = SearchQuery::user_timecards("1234", date(2024, 1, 1), date(2024, 1, 7)).unwrap();
    assert_eq!(query.criteria.len(), 3);
    assert_eq!(
        query.criteria[2],
        Criterion::new("UserId", Operator::Equals, "1234")
    );
}

#[test]
fn test_reversed_range_is_rejected() {
    match SearchQuery::timecards(date(2024, 2, 1), date(2024, 1, 1)) {
        Err(AppError::InvalidInput(msg)) => assert!(msg.contains("2024-02-01")),
        other => panic!("Unexpected result: {other:?}"),
    }
}

#[test]
fn test_custom_query() {
    let query = SearchQuery::new(SearchEndpoint::Clients, "ClientName", false)
        .with_criterion(Criterion::new("ClientName", Operator::Contains, "Smith"));
    let body = serde_json::to_value(query.page(1, 100)).unwrap();
    assert_eq!(body["SortOrderAscending"], json!(false));
    assert_eq!(body["Criteria"][0]["Operator"], json!("Contains"));
}
