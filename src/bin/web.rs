//! Single binary web server exposing the tournament operations as a JSON API.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default.
//! Override with env: HOST, PORT. Set TOURNAMENT_DB to persist to a SQLite file.

use actix_web::{
    delete, get, post,
    web::{Data, Json},
    App, HttpResponse, HttpServer, Responder,
};
use serde::{Deserialize, Serialize};
use std::sync::Mutex;
use swiss_tournament::{
    clear_matches, clear_players, count_players, player_standings, register_player, report_match,
    swiss_pairings, top_players, tournament_state, Config, Player, PlayerId, SqliteStore,
    TournamentError, TournamentState, CHAMPION_COUNT,
};

/// One store shared by all workers; the mutex serializes every operation.
type AppState = Data<Mutex<SqliteStore>>;

#[derive(Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

#[derive(Serialize)]
struct PlayersResponse {
    state: TournamentState,
    players: Vec<Player>,
}

#[derive(Deserialize)]
struct RegisterPlayerBody {
    name: String,
}

#[derive(Deserialize)]
struct ReportMatchBody {
    winner: PlayerId,
    loser: PlayerId,
}

fn error_response(e: TournamentError) -> HttpResponse {
    let body = serde_json::json!({ "error": e.to_string() });
    match e {
        TournamentError::UnknownPlayer(_) => HttpResponse::NotFound().json(body),
        TournamentError::StorageUnavailable(_) => {
            log::error!("{}", e);
            HttpResponse::InternalServerError().json(body)
        }
        _ => HttpResponse::BadRequest().json(body),
    }
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "swiss-tournament",
    })
}

/// List registered players in standings order, with the tournament state.
#[get("/api/players")]
async fn api_list_players(state: AppState) -> HttpResponse {
    let store = match state.lock() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let result = tournament_state(&*store).and_then(|s| {
        let players = player_standings(&*store)?.iter().map(|p| p.player()).collect();
        Ok(PlayersResponse { state: s, players })
    });
    match result {
        Ok(body) => HttpResponse::Ok().json(body),
        Err(e) => error_response(e),
    }
}

#[get("/api/players/count")]
async fn api_count_players(state: AppState) -> HttpResponse {
    let store = match state.lock() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match count_players(&*store) {
        Ok(count) => HttpResponse::Ok().json(serde_json::json!({ "count": count })),
        Err(e) => error_response(e),
    }
}

/// Register a player; returns it with its assigned id.
#[post("/api/players")]
async fn api_register_player(state: AppState, body: Json<RegisterPlayerBody>) -> HttpResponse {
    let mut store = match state.lock() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match register_player(&mut *store, &body.name) {
        Ok(player) => HttpResponse::Ok().json(player),
        Err(e) => error_response(e),
    }
}

/// Remove every player (back to an empty tournament).
#[delete("/api/players")]
async fn api_clear_players(state: AppState) -> HttpResponse {
    let mut store = match state.lock() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match clear_players(&mut *store) {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(e) => error_response(e),
    }
}

#[get("/api/standings")]
async fn api_standings(state: AppState) -> HttpResponse {
    let store = match state.lock() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match player_standings(&*store) {
        Ok(standings) => HttpResponse::Ok().json(standings),
        Err(e) => error_response(e),
    }
}

/// Pairings for the next round (400 if the pool is odd).
#[get("/api/pairings")]
async fn api_pairings(state: AppState) -> HttpResponse {
    let store = match state.lock() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match swiss_pairings(&*store) {
        Ok(pairings) => HttpResponse::Ok().json(pairings),
        Err(e) => error_response(e),
    }
}

/// Report one match result; returns the updated standings.
#[post("/api/matches")]
async fn api_report_match(state: AppState, body: Json<ReportMatchBody>) -> HttpResponse {
    let mut store = match state.lock() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let result = report_match(&mut *store, body.winner, body.loser)
        .and_then(|()| player_standings(&*store));
    match result {
        Ok(standings) => HttpResponse::Ok().json(standings),
        Err(e) => error_response(e),
    }
}

/// Zero all records, keeping the players; returns the standings.
#[delete("/api/matches")]
async fn api_clear_matches(state: AppState) -> HttpResponse {
    let mut store = match state.lock() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let result = clear_matches(&mut *store).and_then(|()| player_standings(&*store));
    match result {
        Ok(standings) => HttpResponse::Ok().json(standings),
        Err(e) => error_response(e),
    }
}

#[get("/api/champions")]
async fn api_champions(state: AppState) -> HttpResponse {
    let store = match state.lock() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match top_players(&*store, CHAMPION_COUNT) {
        Ok(players) => HttpResponse::Ok().json(players),
        Err(e) => error_response(e),
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = Config::from_env();
    let store = config
        .open_store()
        .map_err(|e| std::io::Error::other(format!("could not open tournament store: {}", e)))?;
    match &config.database {
        Some(path) => log::info!("Using tournament database {}", path.display()),
        None => log::info!("Using in-memory tournament database"),
    }

    let bind = (config.host.clone(), config.port);
    log::info!("Starting server at http://{}:{}", bind.0, bind.1);

    let state = Data::new(Mutex::new(store));

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .service(api_health)
            .service(api_list_players)
            .service(api_count_players)
            .service(api_register_player)
            .service(api_clear_players)
            .service(api_standings)
            .service(api_pairings)
            .service(api_report_match)
            .service(api_clear_matches)
            .service(api_champions)
    })
    .bind(bind)?
    .run()
    .await
}
