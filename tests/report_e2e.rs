use actix_web::{test, web, App};
use potager::api::routes::configure;

fn build_app() -> actix_web::App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new().configure(configure).app_data(
        web::JsonConfig::default().error_handler(|err, _req| {
            let message = format!("{err}");
            actix_web::error::InternalError::from_response(
                err,
                actix_web::HttpResponse::BadRequest()
                    .json(serde_json::json!({ "error": message })),
            )
            .into()
        }),
    )
}

fn config(people: u64, target: u64) -> serde_json::Value {
    serde_json::json!({
        "peopleCount": people,
        "sufficiencyTarget": target,
        "terrainWidth": 20.0,
        "terrainHeight": 15.0
    })
}

fn entry_for<'a>(body: &'a serde_json::Value, culture_id: &str) -> &'a serde_json::Value {
    body["payload"]["entries"]
        .as_array()
        .unwrap()
        .iter()
        .find(|e| e["cultureId"] == culture_id)
        .unwrap_or_else(|| panic!("No report entry for '{culture_id}'"))
}

// ---------------------------------------------------------------------------
// Scenario 1: a tomato bed large enough for the household removes tomato
// from the suggestion list but leaves the rest of the catalog in deficit.
// ---------------------------------------------------------------------------
#[actix_web::test]
async fn scenario_covered_tomato_bed() {
    let app = test::init_service(build_app()).await;
    // Catalog tomato: 50x70 cm spacing, 4 plants/person.
    // Needs ceil(4 * 2 * 0.5) = 4; a 2.0m x 1.4m bed holds 4 * 2 = 8.
    let payload = serde_json::json!({
        "plots": [{
            "kind": "culture",
            "x": 1.0, "y": 1.0, "width": 2.0, "height": 1.4,
            "plantedCultureId": "tomato"
        }],
        "config": config(2, 50)
    });

    let req = test::TestRequest::post()
        .uri("/api/report")
        .set_json(&payload)
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    let tomato = entry_for(&body, "tomato");
    assert_eq!(tomato["neededPlants"], 4);
    assert_eq!(tomato["existingPlants"], 8);
    assert_eq!(tomato["missingPlants"], 0);
    // 8 plants at 8 L/week
    assert_eq!(tomato["wateringLitersPerWeek"], 64.0);

    let req = test::TestRequest::post()
        .uri("/api/suggestions")
        .set_json(&payload)
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    let ids: Vec<&str> = body["payload"]["suggestions"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|s| s["cultureId"].as_str())
        .collect();
    assert!(!ids.contains(&"tomato"), "Covered culture must not be suggested");
    assert!(ids.contains(&"carrot"), "Unplanted cultures stay in deficit");
}

// ---------------------------------------------------------------------------
// Scenario 2: plants inside a greenhouse count toward sufficiency; the
// greenhouse's own cultureId (invalid by construction) must not double count.
// ---------------------------------------------------------------------------
#[actix_web::test]
async fn scenario_greenhouse_interior_counts() {
    let app = test::init_service(build_app()).await;
    let payload = serde_json::json!({
        "plots": [{
            "kind": "greenhouse",
            "x": 1.0, "y": 1.0, "width": 5.0, "height": 4.0,
            "plantedCultureId": "tomato",
            "subPlots": [{
                "kind": "culture",
                "x": 0.5, "y": 0.5, "width": 1.0, "height": 0.7,
                "plantedCultureId": "tomato"
            }]
        }],
        "config": config(2, 50)
    });

    let req = test::TestRequest::post()
        .uri("/api/report")
        .set_json(&payload)
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    // Sub-plot only: floor(100/50) * floor(70/70) = 2.
    assert_eq!(entry_for(&body, "tomato")["existingPlants"], 2);
}

// ---------------------------------------------------------------------------
// Scenario 3: generate suggestions for an empty garden, place them all, and
// verify the returned layout is collision-free and consistent.
// ---------------------------------------------------------------------------
#[actix_web::test]
async fn scenario_batch_placement_round_trip() {
    let app = test::init_service(build_app()).await;
    let report_payload = serde_json::json!({ "plots": [], "config": config(2, 50) });

    let req = test::TestRequest::post()
        .uri("/api/suggestions")
        .set_json(&report_payload)
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    let suggestions = body["payload"]["suggestions"].as_array().unwrap().clone();
    assert!(!suggestions.is_empty());
    let suggestion_count = suggestions.len();

    let place_payload = serde_json::json!({
        "plots": [],
        "config": config(2, 50),
        "suggestions": suggestions
    });
    let req = test::TestRequest::post()
        .uri("/api/suggestions/place")
        .set_json(&place_payload)
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

    let placed = body["payload"]["outcome"]["placed"].as_array().unwrap();
    let unplaced = body["payload"]["outcome"]["unplaced"].as_array().unwrap();
    let plots = body["payload"]["plots"].as_array().unwrap();
    assert_eq!(placed.len() + unplaced.len(), suggestion_count);
    assert_eq!(plots.len(), placed.len());
    assert!(!placed.is_empty(), "A 20x15 terrain must fit at least one bed");

    // No pair of placed plots may overlap.
    let rect = |p: &serde_json::Value| {
        (
            p["x"].as_f64().unwrap(),
            p["y"].as_f64().unwrap(),
            p["width"].as_f64().unwrap(),
            p["height"].as_f64().unwrap(),
        )
    };
    for (i, a) in plots.iter().enumerate() {
        for b in &plots[i + 1..] {
            let (ax, ay, aw, ah) = rect(a);
            let (bx, by, bw, bh) = rect(b);
            let overlap = ax < bx + bw && ax + aw > bx && ay < by + bh && ay + ah > by;
            assert!(!overlap, "Placed plots overlap: {a} / {b}");
        }
    }

    // Every placed plot carries its culture and a unique id.
    for (i, a) in plots.iter().enumerate() {
        assert!(a["plantedCultureId"].is_string());
        for b in &plots[i + 1..] {
            assert_ne!(a["id"], b["id"], "Plot ids must be unique");
        }
    }
}

// ---------------------------------------------------------------------------
// Scenario 4: a terrain with no free space reports every suggestion as
// unplaced instead of failing.
// ---------------------------------------------------------------------------
#[actix_web::test]
async fn scenario_full_terrain_reports_unplaced() {
    let app = test::init_service(build_app()).await;
    let tiny_config = serde_json::json!({
        "peopleCount": 2,
        "sufficiencyTarget": 50,
        "terrainWidth": 2.0,
        "terrainHeight": 2.0
    });
    let place_payload = serde_json::json!({
        "plots": [{ "kind": "building", "x": 0.0, "y": 0.0, "width": 2.0, "height": 2.0 }],
        "config": tiny_config,
        "suggestions": [{
            "cultureId": "carrot",
            "cultureName": "Carrot",
            "missingPlants": 30,
            "suggestedWidth": 1.2,
            "suggestedHeight": 1.0,
            "selected": true
        }]
    });

    let req = test::TestRequest::post()
        .uri("/api/suggestions/place")
        .set_json(&place_payload)
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["payload"]["outcome"]["placed"].as_array().unwrap().len(), 0);
    assert_eq!(body["payload"]["outcome"]["unplaced"][0], "carrot");
    assert_eq!(
        body["payload"]["plots"].as_array().unwrap().len(),
        1,
        "Layout must be returned unchanged"
    );
}
