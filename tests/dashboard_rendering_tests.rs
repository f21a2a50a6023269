use chrono::NaiveDate;
use f1_dashboard::{
    config::Config,
    data_fetcher::F1Client,
    ui::{Dashboard, DashboardView, RenderOptions, ViewState},
};
use serde_json::{Value, json};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path},
};

fn race(season: i32, round: u32, date: &str) -> Value {
    json!({
        "season": season.to_string(),
        "round": round.to_string(),
        "raceName": format!("Round {round} Grand Prix"),
        "date": date,
        "Circuit": {
            "circuitId": format!("circuit_{round}"),
            "circuitName": format!("Circuit {round}"),
            "Location": {"locality": "Town", "country": "Country"}
        }
    })
}

fn standing(position: u32, family_name: &str, points: &str) -> Value {
    json!({
        "position": position.to_string(),
        "points": points,
        "wins": "1",
        "Driver": {"driverId": family_name.to_lowercase(), "givenName": "Test", "familyName": family_name},
        "Constructors": [{"constructorId": "team", "name": "Team"}]
    })
}

fn result(position: u32, family_name: &str, points: &str) -> Value {
    json!({
        "position": position.to_string(),
        "points": points,
        "Driver": {"driverId": family_name.to_lowercase(), "givenName": "Test", "familyName": family_name},
        "Constructor": {"constructorId": "team", "name": "Team"},
        "grid": position.to_string(),
        "laps": "58",
        "status": "Finished"
    })
}

async fn mount_json(server: &MockServer, route: &str, body: Value) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

/// Pre-season: every view is served from last season and says so
async fn preseason_server() -> MockServer {
    let server = MockServer::start().await;

    mount_json(
        &server,
        "/f1/2025/driverStandings.json",
        json!({"MRData": {"StandingsTable": {"season": "2025", "StandingsLists": []}}}),
    )
    .await;
    mount_json(
        &server,
        "/f1/2024/driverStandings.json",
        json!({"MRData": {"StandingsTable": {"season": "2024", "StandingsLists": [{
            "season": "2024",
            "DriverStandings": (1..=7)
                .map(|p| standing(p, &format!("Driver{p}"), &(400 - p * 10).to_string()))
                .collect::<Vec<_>>()
        }]}}}),
    )
    .await;

    mount_json(
        &server,
        "/f1/2025.json",
        json!({"MRData": {"RaceTable": {"season": "2025", "Races": []}}}),
    )
    .await;
    mount_json(
        &server,
        "/f1/2024.json",
        json!({"MRData": {"RaceTable": {"season": "2024", "Races": [
            race(2024, 1, "2024-11-24"),
            race(2024, 2, "2024-12-08")
        ]}}}),
    )
    .await;

    let mut results = race(2024, 2, "2024-12-08");
    results["Results"] = json!([
        result(1, "Norris", "25"),
        result(2, "Sainz", "18"),
        result(3, "Leclerc", "15"),
        result(4, "Hamilton", "12")
    ]);
    mount_json(
        &server,
        "/f1/2024/2/results.json",
        json!({"MRData": {"RaceTable": {"season": "2024", "Races": [results]}}}),
    )
    .await;

    server
}

fn plain_options(show_all: bool) -> RenderOptions {
    RenderOptions {
        show_all,
        plain: true,
        today: NaiveDate::from_ymd_opt(2024, 12, 1).unwrap(),
    }
}

#[tokio::test]
async fn test_preseason_dashboard_renders_last_season() {
    let server = preseason_server().await;
    let client = F1Client::new(Config {
        api_base_url: server.uri(),
        ..Config::default()
    })
    .unwrap()
    .with_current_season(2025);

    let mut dashboard = Dashboard::new(DashboardView::All, None);
    dashboard.refresh(&client).await;

    let mut buffer = Vec::new();
    dashboard.render(&mut buffer, &plain_options(false)).unwrap();
    let output = String::from_utf8(buffer).unwrap();

    assert_eq!(output.matches("Showing data from 2024 season").count(), 3);
    assert!(output.contains("Driver5"));
    assert!(!output.contains("Driver6"));
    assert!(output.contains("2 more (use --all)"));
    assert!(output.contains("Podium: P1 Norris (Team) P2 Sainz (Team) P3 Leclerc (Team)"));
    assert!(output.contains("Next race: Round 2 Grand Prix in 7 days"));
    assert!(!output.contains('\x1b'));
}

#[tokio::test]
async fn test_single_view_refresh_leaves_other_views_loading() {
    let server = preseason_server().await;
    let client = F1Client::new(Config {
        api_base_url: server.uri(),
        ..Config::default()
    })
    .unwrap()
    .with_current_season(2025);

    let mut dashboard = Dashboard::new(DashboardView::Standings, None);
    dashboard.refresh(&client).await;

    assert!(matches!(
        dashboard.standings().state(),
        ViewState::Ready { .. }
    ));
    assert!(matches!(dashboard.results().state(), ViewState::Loading));

    let mut buffer = Vec::new();
    dashboard.render(&mut buffer, &plain_options(true)).unwrap();
    let output = String::from_utf8(buffer).unwrap();

    assert!(output.contains("Driver7"));
    assert!(!output.contains("LAST RACE RESULTS"));
}

#[tokio::test]
async fn test_outage_renders_unavailable_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let client = F1Client::new(Config {
        api_base_url: server.uri(),
        ..Config::default()
    })
    .unwrap()
    .with_current_season(2025);

    let mut dashboard = Dashboard::new(DashboardView::Results, Some(2022));
    dashboard.refresh(&client).await;

    let mut buffer = Vec::new();
    dashboard.render(&mut buffer, &plain_options(false)).unwrap();
    let output = String::from_utf8(buffer).unwrap();

    assert!(output.contains("Data unavailable for the 2022 season"));
}
