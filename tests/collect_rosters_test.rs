//! Integration tests for the roster collection command

use nba_rosters::{
    commands::collect_rosters::{handle_collect_rosters, CollectParams},
    ReportFormat,
};
use std::{path::Path, time::Duration};
use wiremock::{
    matchers::{method, path},
    Mock, MockServer, ResponseTemplate,
};

const TEAMS_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<FantasyBasketballNerd service="teams">
  <!-- Data provided by FantasyBasketballNerd.com -->
  <Team><code>BOS</code><name>Boston Celtics</name><conference>Eastern</conference><division>Atlantic</division></Team>
  <Team><code>GSW</code><name>Golden State Warriors</name><conference>Western</conference><division>Pacific</division></Team>
</FantasyBasketballNerd>"#;

const PLAYERS_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<FantasyBasketballNerd service="players">
  <!-- Data provided by FantasyBasketballNerd.com -->
  <Player><playerId>201939</playerId><name>Stephen Curry</name><team>GSW</team><position>PG</position><height>6-2</height><weight>185</weight><dob>1988-03-14</dob><school>Davidson</school></Player>
  <Player><playerId>1628369</playerId><name>Jayson Tatum</name><team>BOS</team><position>SF</position><height>6-8</height><weight>210</weight><dob>1998-03-03</dob><school>Duke</school></Player>
  <Player><playerId>9</playerId><name>Unsigned Prospect</name><team>FA</team><position>G</position><height></height><weight></weight><dob></dob><school>Nowhere State</school></Player>
  <Player><playerId>1626172</playerId><name>Kevon Looney</name><team>GSW</team><position>C</position><height>6-9</height><weight>222</weight><dob>1996-02-06</dob><school>UCLA</school></Player>
</FantasyBasketballNerd>"#;

fn xml(body: &str) -> ResponseTemplate {
    ResponseTemplate::new(200)
        .insert_header("content-type", "text/xml; charset=utf-8")
        .set_body_string(body)
}

async fn mount(server: &MockServer, endpoint: &str, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path(endpoint))
        .respond_with(response)
        .mount(server)
        .await;
}

fn params(server: &MockServer, output: &Path) -> CollectParams {
    CollectParams {
        base_url: Some(server.uri()),
        output: output.to_path_buf(),
        format: ReportFormat::Text,
        timeout: None,
    }
}

#[tokio::test]
async fn test_full_run_writes_text_report() {
    let server = MockServer::start().await;
    mount(&server, "/service/teams", xml(TEAMS_XML)).await;
    mount(&server, "/service/players", xml(PLAYERS_XML)).await;

    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("nba_teams.txt");

    let rosters = handle_collect_rosters(params(&server, &output)).await.unwrap();

    assert_eq!(rosters.len(), 2);
    assert_eq!(rosters[0].players.len(), 1);
    assert_eq!(rosters[1].players.len(), 2);

    let expected = concat!(
        "Boston Celtics\n",
        "\tName                     Pos College\n",
        "\tJayson Tatum             SF  Duke\n",
        "\n\n",
        "Golden State Warriors\n",
        "\tName                     Pos College\n",
        "\tStephen Curry            PG  Davidson\n",
        "\tKevon Looney             C   UCLA\n",
        "\n\n",
    );
    assert_eq!(std::fs::read_to_string(&output).unwrap(), expected);
}

#[tokio::test]
async fn test_player_without_team_is_never_reported() {
    let server = MockServer::start().await;
    mount(&server, "/service/teams", xml(TEAMS_XML)).await;
    mount(&server, "/service/players", xml(PLAYERS_XML)).await;

    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("report.txt");

    let rosters = handle_collect_rosters(params(&server, &output)).await.unwrap();

    assert!(rosters
        .iter()
        .flat_map(|r| &r.players)
        .all(|p| p.name != "Unsigned Prospect"));
    assert!(!std::fs::read_to_string(&output)
        .unwrap()
        .contains("Unsigned Prospect"));
}

#[tokio::test]
async fn test_json_report() {
    let server = MockServer::start().await;
    mount(&server, "/service/teams", xml(TEAMS_XML)).await;
    mount(&server, "/service/players", xml(PLAYERS_XML)).await;

    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("rosters.json");

    handle_collect_rosters(CollectParams {
        format: ReportFormat::Json,
        ..params(&server, &output)
    })
    .await
    .unwrap();

    let value: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(value.as_array().unwrap().len(), 2);
    assert_eq!(value[1]["team"]["name"], "Golden State Warriors");
    assert_eq!(value[1]["players"][0]["birth_date"], "1988-03-14");
}

#[tokio::test]
async fn test_failed_players_fetch_still_writes_team_blocks() {
    let server = MockServer::start().await;
    mount(&server, "/service/teams", xml(TEAMS_XML)).await;
    mount(&server, "/service/players", ResponseTemplate::new(500)).await;

    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("nba_teams.txt");

    let rosters = handle_collect_rosters(params(&server, &output)).await.unwrap();

    assert_eq!(rosters.len(), 2);
    assert!(rosters.iter().all(|r| r.players.is_empty()));
    let report = std::fs::read_to_string(&output).unwrap();
    assert!(report.starts_with("Boston Celtics\n\tName"));
    assert!(report.contains("Golden State Warriors\n"));
}

#[tokio::test]
async fn test_failed_teams_fetch_writes_empty_report() {
    let server = MockServer::start().await;
    mount(&server, "/service/teams", xml("<FantasyBasketballNerd><Team><code>")).await;
    mount(&server, "/service/players", xml(PLAYERS_XML)).await;

    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("nba_teams.txt");

    let rosters = handle_collect_rosters(params(&server, &output)).await.unwrap();

    assert!(rosters.is_empty());
    assert_eq!(std::fs::read_to_string(&output).unwrap(), "");
}

#[tokio::test]
async fn test_unreachable_host_is_not_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("nba_teams.txt");

    let rosters = handle_collect_rosters(CollectParams {
        base_url: Some("http://127.0.0.1:1".to_string()),
        output: output.clone(),
        format: ReportFormat::Text,
        timeout: Some(Duration::from_secs(5)),
    })
    .await
    .unwrap();

    assert!(rosters.is_empty());
    assert!(output.exists());
}

#[tokio::test]
async fn test_unwritable_output_is_not_fatal() {
    let server = MockServer::start().await;
    mount(&server, "/service/teams", xml(TEAMS_XML)).await;
    mount(&server, "/service/players", xml(PLAYERS_XML)).await;

    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("missing").join("nba_teams.txt");

    let rosters = handle_collect_rosters(params(&server, &output)).await.unwrap();

    assert_eq!(rosters.len(), 2);
    assert!(!output.exists());
}

#[tokio::test]
async fn test_both_endpoints_hit_exactly_once() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/service/teams"))
        .respond_with(xml(TEAMS_XML))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/service/players"))
        .respond_with(xml(PLAYERS_XML))
        .expect(1)
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    handle_collect_rosters(params(&server, &dir.path().join("r.txt")))
        .await
        .unwrap();

    server.verify().await;
}

#[tokio::test]
async fn test_blank_player_id_keeps_every_player() {
    let players = r#"<FantasyBasketballNerd service="players">
  <Player><playerId></playerId><name>Two-Way Signee</name><team>BOS</team><position>G</position><school>Kansas</school></Player>
  <Player><playerId>1628369</playerId><name>Jayson Tatum</name><team>BOS</team><position>SF</position><school>Duke</school></Player>
</FantasyBasketballNerd>"#;

    let server = MockServer::start().await;
    mount(&server, "/service/teams", xml(TEAMS_XML)).await;
    mount(&server, "/service/players", xml(players)).await;

    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("nba_teams.txt");

    let rosters = handle_collect_rosters(params(&server, &output)).await.unwrap();

    let names: Vec<&str> = rosters[0].players.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Two-Way Signee", "Jayson Tatum"]);
    assert!(std::fs::read_to_string(&output)
        .unwrap()
        .contains("\tTwo-Way Signee           G   Kansas\n"));
}
