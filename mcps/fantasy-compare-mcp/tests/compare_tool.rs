//! Tool-level tests for fantasy-compare-mcp
//!
//! These drive the server in-process through `EmbeddableMcp`, the same path a
//! host agent uses when it embeds the server instead of spawning it.

use fantasy_compare_mcp::{Config, EmbeddableError, EmbeddableMcp, FantasyCompareMcpServer};
use mcp_common::text_of;
use serde_json::{json, Value};

fn server() -> FantasyCompareMcpServer {
    FantasyCompareMcpServer::with_config(Config::default())
}

fn jokic() -> Value {
    json!({
        "name": "Nikola Jokic", "team": "DEN", "position": "C",
        "ppg": 26.4, "rpg": 12.4, "apg": 9.0, "spg": 1.4, "bpg": 0.9,
        "fg_pct": 58.3, "ft_pct": 81.7, "three_pm": 0.9, "tov": 3.0, "gp": 79
    })
}

fn embiid() -> Value {
    json!({
        "name": "Joel Embiid", "team": "PHI", "position": "C",
        "ppg": 34.7, "rpg": 11.0, "apg": 5.6, "spg": 1.2, "bpg": 1.7,
        "fg_pct": 52.9, "ft_pct": 88.3, "three_pm": 1.3, "tov": 3.4, "gp": 66
    })
}

async fn call(name: &str, params: Value) -> Value {
    let result = server()
        .call_tool(name, params)
        .await
        .expect("tool call failed");
    assert!(!result.is_error.unwrap_or(false));
    serde_json::from_str(text_of(&result).expect("no text content")).expect("not JSON")
}

#[tokio::test]
async fn compare_jokic_and_embiid() {
    let artifact = call(
        "compare_players",
        json!({ "player1": jokic(), "player2": embiid() }),
    )
    .await;

    assert_eq!(artifact["content_type"], "application/vnd.ant.react");
    assert_eq!(artifact["title"], "Nikola Jokic vs Joel Embiid Fantasy Comparison");

    let data = &artifact["data"];
    assert_eq!(data["season"], "2024-25");
    assert_eq!(data["scores"]["player1"]["display"], "59.6");
    assert_eq!(data["scores"]["player2"]["display"], "62.9");

    // Embiid wins on score even though Jokic takes more categories
    assert_eq!(data["winner"]["outcome"], "second");
    assert_eq!(data["winner"]["name"], "Joel Embiid");
    assert_eq!(data["tally"]["player1"], 5);
    assert_eq!(data["tally"]["player2"], 4);

    let tov = data["categories"]
        .as_array()
        .unwrap()
        .iter()
        .find(|c| c["category"] == "tov")
        .unwrap();
    assert_eq!(tov["winner"], "first");

    assert_eq!(data["radar"].as_array().unwrap().len(), 6);
    let bars = data["head_to_head"].as_array().unwrap();
    assert_eq!(bars.len(), 6);
    assert_eq!(bars[0]["stat"], "PTS");
    assert_eq!(bars[0]["Joel Embiid"], 34.7);
}

#[tokio::test]
async fn compare_uses_requested_season() {
    let artifact = call(
        "compare_players",
        json!({ "player1": jokic(), "player2": embiid(), "season": "2023-24" }),
    )
    .await;
    assert_eq!(artifact["data"]["season"], "2023-24");
}

#[tokio::test]
async fn compare_is_deterministic() {
    let params = json!({ "player1": jokic(), "player2": embiid() });
    let a = call("compare_players", params.clone()).await;
    let b = call("compare_players", params).await;
    assert_eq!(a, b);
}

#[tokio::test]
async fn missing_stat_names_record_and_field() {
    let mut p2 = embiid();
    p2.as_object_mut().unwrap().remove("bpg");

    let result = server()
        .call_tool("compare_players", json!({ "player1": jokic(), "player2": p2 }))
        .await;

    match result {
        Err(EmbeddableError::McpError { message, data }) => {
            assert!(message.contains("player2.bpg is missing"), "{message}");
            assert_eq!(
                data.unwrap(),
                json!([{ "record": "player2", "field": "bpg", "problem": "missing" }])
            );
        }
        other => panic!("expected a validation error, got {other:?}"),
    }
}

#[tokio::test]
async fn oversized_stat_is_rejected() {
    let mut p1 = jokic();
    p1["rpg"] = json!(1.6e308);

    let result = server()
        .call_tool("compare_players", json!({ "player1": p1, "player2": embiid() }))
        .await;

    match result {
        Err(EmbeddableError::McpError { message, data }) => {
            assert!(message.contains("player1.rpg is too large"), "{message}");
            assert_eq!(
                data.unwrap(),
                json!([{ "record": "player1", "field": "rpg", "problem": "too_large" }])
            );
        }
        other => panic!("expected a validation error, got {other:?}"),
    }
}

#[tokio::test]
async fn player_named_stat_keeps_the_label() {
    let mut p1 = jokic();
    p1["name"] = json!("stat");

    let artifact = call(
        "compare_players",
        json!({ "player1": p1, "player2": embiid() }),
    )
    .await;

    let data = &artifact["data"];
    assert_eq!(data["series_keys"], json!(["stat (1)", "Joel Embiid"]));
    let bars = data["head_to_head"].as_array().unwrap();
    assert_eq!(bars[0]["stat"], "PTS");
    assert_eq!(bars[0]["stat (1)"], 26.4);
}

#[tokio::test]
async fn configured_weights_change_the_winner() {
    let mut config = Config::default();
    // Value assists and boards more heavily than scoring
    config.weights.ppg = 0.5;
    config.weights.apg = 3.0;
    config.season.default = "2025-26".to_string();
    let server = FantasyCompareMcpServer::with_config(config);

    let result = server
        .call_tool(
            "compare_players",
            json!({ "player1": jokic(), "player2": embiid() }),
        )
        .await
        .unwrap();
    let artifact: Value = serde_json::from_str(text_of(&result).unwrap()).unwrap();

    assert_eq!(artifact["data"]["season"], "2025-26");
    assert_eq!(artifact["data"]["winner"]["name"], "Nikola Jokic");
}

#[tokio::test]
async fn score_player_breakdown() {
    let report = call("score_player", json!({ "player": jokic() })).await;

    assert_eq!(report["player"]["name"], "Nikola Jokic");
    assert_eq!(report["score"]["display"], "59.6");

    let breakdown = report["breakdown"].as_array().unwrap();
    assert_eq!(breakdown.len(), 7);
    assert_eq!(breakdown[6]["category"], "tov");
    assert_eq!(breakdown[6]["points"], -3.0);
}

#[tokio::test]
async fn scoring_weights_report() {
    let report = call("get_scoring_weights", json!({})).await;

    assert_eq!(report["default_season"], "2024-25");
    assert_eq!(report["weights"]["rpg"], 1.2);
    assert_eq!(report["weights"]["tov"], -1.0);
    assert!(report["formula"].as_str().unwrap().ends_with("- 1*tov"));
}
