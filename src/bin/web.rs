//! Single binary web server: HTML from templates/, static from /static, API via REST.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default.
//! Override with env: HOST (e.g. 0.0.0.0), PORT (e.g. 8080).

use actix_files::Files;
use actix_web::{
    delete, get, post,
    web::{self, Data, Json, Path},
    App, HttpResponse, HttpServer, Responder,
};
use beauty_contest_web::{
    advance_round, resolve_round, GameError, GameId, GameMode, GameSession, GameSettings,
    MAX_NUMBER,
};
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::RwLock;
use std::time::{Duration, Instant};

/// Per-game entry: session data + last activity time (for auto-cleanup).
struct GameEntry {
    game: GameSession,
    last_activity: Instant,
}

/// In-memory state: many games by ID (sessioned). Entries are removed after 12h inactivity.
type AppState = Data<RwLock<HashMap<GameId, GameEntry>>>;

/// Inactivity threshold: games not accessed for this long are removed.
const INACTIVITY_TIMEOUT: Duration = Duration::from_secs(12 * 3600);

#[derive(serde::Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

#[derive(Deserialize)]
struct SubmitNumberBody {
    number: i64,
}

/// Path segment: game id (e.g. /api/games/{id})
#[derive(Deserialize)]
struct GamePath {
    id: GameId,
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "beauty-contest-web",
    })
}

/// Avoid 404 in browser tab: favicon not required for app logic.
#[get("/favicon.ico")]
async fn favicon() -> HttpResponse {
    HttpResponse::NoContent().finish()
}

/// Create a new game (returns it with id; client stores id for subsequent requests).
/// Body fields are optional; missing ones take the setup defaults.
#[post("/api/games")]
async fn api_create_game(state: AppState, body: Option<Json<GameSettings>>) -> HttpResponse {
    let settings = body.map(|b| b.into_inner()).unwrap_or_default();
    if settings.mode == GameMode::Multiplayer {
        return HttpResponse::BadRequest()
            .json(serde_json::json!({ "error": GameError::UnsupportedMode.to_string() }));
    }
    let game = GameSession::new(settings);
    let id = game.id;
    log::info!(
        "Created game {} ({} players, factor {}, threshold {})",
        id,
        settings.player_count,
        settings.base_factor,
        settings.elimination_threshold
    );
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    g.insert(
        id,
        GameEntry {
            game,
            last_activity: Instant::now(),
        },
    );
    HttpResponse::Ok().json(&g[&id].game)
}

/// Get a game by id (404 if not found). Touching it refreshes last_activity.
#[get("/api/games/{id}")]
async fn api_get_game(state: AppState, path: Path<GamePath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match g.get_mut(&path.id) {
        Some(entry) => {
            entry.last_activity = Instant::now();
            HttpResponse::Ok().json(&entry.game)
        }
        None => HttpResponse::NotFound().json(serde_json::json!({ "error": "No game" })),
    }
}

/// Submit the human's number and resolve the round (game must be Submitting).
#[post("/api/games/{id}/number")]
async fn api_submit_number(
    state: AppState,
    path: Path<GamePath>,
    body: Json<SubmitNumberBody>,
) -> HttpResponse {
    let number = body.number;
    if !(0..=i64::from(MAX_NUMBER)).contains(&number) {
        return HttpResponse::BadRequest()
            .json(serde_json::json!({ "error": GameError::NumberOutOfRange(number).to_string() }));
    }
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get_mut(&path.id) {
        Some(e) => e,
        None => return HttpResponse::NotFound().json(serde_json::json!({ "error": "No game" })),
    };
    entry.last_activity = Instant::now();
    match resolve_round(&mut entry.game, number as u8, &mut rand::thread_rng()) {
        Ok(()) => HttpResponse::Ok().json(&entry.game),
        Err(e) => HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() })),
    }
}

/// Advance past the results: eliminate, then next round or finish.
#[post("/api/games/{id}/advance")]
async fn api_advance_round(state: AppState, path: Path<GamePath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get_mut(&path.id) {
        Some(e) => e,
        None => return HttpResponse::NotFound().json(serde_json::json!({ "error": "No game" })),
    };
    entry.last_activity = Instant::now();
    match advance_round(&mut entry.game) {
        Ok(()) => HttpResponse::Ok().json(&entry.game),
        Err(e) => HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() })),
    }
}

/// Restart the game with the same settings ("Play Again").
#[post("/api/games/{id}/restart")]
async fn api_restart_game(state: AppState, path: Path<GamePath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get_mut(&path.id) {
        Some(e) => e,
        None => return HttpResponse::NotFound().json(serde_json::json!({ "error": "No game" })),
    };
    entry.last_activity = Instant::now();
    entry.game.restart();
    HttpResponse::Ok().json(&entry.game)
}

/// End a game: remove it from the store.
#[delete("/api/games/{id}")]
async fn api_delete_game(state: AppState, path: Path<GamePath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match g.remove(&path.id) {
        Some(_) => HttpResponse::Ok().json(serde_json::json!({ "ok": true })),
        None => HttpResponse::NotFound().json(serde_json::json!({ "error": "No game" })),
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let host = std::env::var("HOST").unwrap_or_else(|_| default_host());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or_else(default_port);
    let bind = (host.as_str(), port);
    log::info!("Starting server at http://{}:{}", bind.0, bind.1);

    let state = Data::new(RwLock::new(HashMap::<GameId, GameEntry>::new()));

    // Background task: every 30 minutes, remove games inactive for 12+ hours
    let state_cleanup = state.clone();
    actix_web::rt::spawn(async move {
        let mut interval = actix_web::rt::time::interval(Duration::from_secs(30 * 60));
        loop {
            interval.tick().await;
            let mut g = match state_cleanup.write() {
                Ok(guard) => guard,
                Err(_) => continue,
            };
            let before = g.len();
            g.retain(|_, entry| entry.last_activity.elapsed() < INACTIVITY_TIMEOUT);
            let removed = before - g.len();
            if removed > 0 {
                log::info!("Cleaned up {} inactive game(s) (no activity for 12h)", removed);
            }
        }
    });

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .route("/", web::get().to(serve_index_async))
            .service(api_health)
            .service(favicon)
            .service(api_create_game)
            .service(api_get_game)
            .service(api_submit_number)
            .service(api_advance_round)
            .service(api_restart_game)
            .service(api_delete_game)
            .service(Files::new("/static", "static"))
    })
    .bind(bind)?
    .run()
    .await
}

async fn serve_index_async() -> HttpResponse {
    let html = include_str!("../../templates/index.html");
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(html)
}
