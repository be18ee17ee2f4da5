//! Single binary web server: index page from templates/, static from /static, API via REST.
//! Run with: cargo run --bin web
//! Settings come from the environment, see `team_record_web::config`.

use actix_files::Files;
use actix_session::{storage::CookieSessionStore, Session, SessionMiddleware};
use actix_web::{
    cookie::Key,
    get, middleware, post, put,
    web::{self, Data, Json, Path},
    App, HttpResponse, HttpServer, Responder,
};
use serde::Deserialize;
use std::sync::RwLock;
use team_record_web::{
    game_detail, player_detail, player_rows, players_csv, record_game, rival_detail, rival_rows,
    update_game, AppConfig, ErrorKind, GameForm, GameUpdateForm, PlayerForm, RecordBook,
    RecordError, RivalForm, StatsEntry,
};
use uuid::Uuid;

/// All records, behind one lock. A write request holds it for validate-then-store.
type AppState = Data<RwLock<RecordBook>>;

type Settings = Data<AppConfig>;

/// Session key holding the logged-in username.
const SESSION_USER: &str = "user";

#[derive(serde::Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

#[derive(Deserialize)]
struct LoginBody {
    username: String,
    password: String,
}

/// New game: the game fields plus its stats lines (blank slots allowed).
#[derive(Deserialize)]
struct CreateGameBody {
    #[serde(default)]
    game: GameForm,
    #[serde(default)]
    stats: Vec<StatsEntry>,
}

/// Path segment: record id (e.g. /api/rivals/{id})
#[derive(Deserialize)]
struct IdPath {
    id: Uuid,
}

/// Map a record error to a status code: 404 for unknown references, 400 for bad input.
fn error_response(e: &RecordError) -> HttpResponse {
    let body = serde_json::json!({
        "error": e.to_string(),
        "kind": e.kind(),
        "field": e.field(),
        "entry": e.entry(),
    });
    match e.kind() {
        ErrorKind::ReferenceNotFound => HttpResponse::NotFound().json(body),
        ErrorKind::Export => HttpResponse::InternalServerError().json(body),
        ErrorKind::Field | ErrorKind::DuplicatePlayer => HttpResponse::BadRequest().json(body),
    }
}

fn lock_error() -> HttpResponse {
    HttpResponse::InternalServerError().body("lock error")
}

/// `Some(401)` when credentials are configured and the session has no user.
fn require_login(settings: &AppConfig, session: &Session) -> Option<HttpResponse> {
    settings.credentials.as_ref()?;
    match session.get::<String>(SESSION_USER) {
        Ok(Some(_)) => None,
        _ => Some(HttpResponse::Unauthorized().json(serde_json::json!({ "error": "Login required" }))),
    }
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "team-record-web",
    })
}

/// Avoid 404 in browser tab: favicon not required for app logic.
#[get("/favicon.ico")]
async fn favicon() -> HttpResponse {
    HttpResponse::NoContent().finish()
}

#[post("/api/login")]
async fn api_login(settings: Settings, session: Session, body: Json<LoginBody>) -> HttpResponse {
    let Some(credentials) = settings.credentials.as_ref() else {
        return HttpResponse::Ok().json(serde_json::json!({ "user": body.username }));
    };
    if !credentials.matches(&body.username, &body.password) {
        log::warn!("Failed login for {}", body.username);
        return HttpResponse::Unauthorized().json(serde_json::json!({ "error": "Invalid login" }));
    }
    match session.insert(SESSION_USER, &body.username) {
        Ok(()) => HttpResponse::Ok().json(serde_json::json!({ "user": body.username })),
        Err(_) => HttpResponse::InternalServerError().body("session error"),
    }
}

#[post("/api/logout")]
async fn api_logout(session: Session) -> HttpResponse {
    session.purge();
    HttpResponse::NoContent().finish()
}

/// Rivals with their win/loss record.
#[get("/api/rivals")]
async fn api_list_rivals(state: AppState) -> HttpResponse {
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    HttpResponse::Ok().json(rival_rows(&g))
}

#[post("/api/rivals")]
async fn api_create_rival(
    state: AppState,
    settings: Settings,
    session: Session,
    body: Json<RivalForm>,
) -> HttpResponse {
    if let Some(denied) = require_login(&settings, &session) {
        return denied;
    }
    let params = match body.into_inner().validate() {
        Ok(p) => p,
        Err(e) => return error_response(&e),
    };
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    match g.add_rival(params) {
        Ok(rival) => HttpResponse::Created().json(rival),
        Err(e) => error_response(&e),
    }
}

/// Rival with its games (newest first) and record (404 if not found).
#[get("/api/rivals/{id}")]
async fn api_get_rival(state: AppState, path: Path<IdPath>) -> HttpResponse {
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    match rival_detail(&g, path.id) {
        Ok(detail) => HttpResponse::Ok().json(detail),
        Err(e) => error_response(&e),
    }
}

#[put("/api/rivals/{id}")]
async fn api_update_rival(
    state: AppState,
    settings: Settings,
    session: Session,
    path: Path<IdPath>,
    body: Json<RivalForm>,
) -> HttpResponse {
    if let Some(denied) = require_login(&settings, &session) {
        return denied;
    }
    let params = match body.into_inner().validate() {
        Ok(p) => p,
        Err(e) => return error_response(&e),
    };
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    match g.update_rival(path.id, params) {
        Ok(rival) => HttpResponse::Ok().json(rival),
        Err(e) => error_response(&e),
    }
}

/// Players with their cumulative stats.
#[get("/api/players")]
async fn api_list_players(state: AppState) -> HttpResponse {
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    HttpResponse::Ok().json(player_rows(&g))
}

#[post("/api/players")]
async fn api_create_player(
    state: AppState,
    settings: Settings,
    session: Session,
    body: Json<PlayerForm>,
) -> HttpResponse {
    if let Some(denied) = require_login(&settings, &session) {
        return denied;
    }
    let params = match body.into_inner().validate() {
        Ok(p) => p,
        Err(e) => return error_response(&e),
    };
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    match g.add_player(params) {
        Ok(player) => HttpResponse::Created().json(player),
        Err(e) => error_response(&e),
    }
}

#[get("/api/players/{id}")]
async fn api_get_player(state: AppState, path: Path<IdPath>) -> HttpResponse {
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    match player_detail(&g, path.id) {
        Ok(detail) => HttpResponse::Ok().json(detail),
        Err(e) => error_response(&e),
    }
}

#[put("/api/players/{id}")]
async fn api_update_player(
    state: AppState,
    settings: Settings,
    session: Session,
    path: Path<IdPath>,
    body: Json<PlayerForm>,
) -> HttpResponse {
    if let Some(denied) = require_login(&settings, &session) {
        return denied;
    }
    let params = match body.into_inner().validate() {
        Ok(p) => p,
        Err(e) => return error_response(&e),
    };
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    match g.update_player(path.id, params) {
        Ok(player) => HttpResponse::Ok().json(player),
        Err(e) => error_response(&e),
    }
}

#[get("/api/export/players.csv")]
async fn api_export_players(state: AppState) -> HttpResponse {
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    match players_csv(&g) {
        Ok(csv) => HttpResponse::Ok()
            .content_type("text/csv; charset=utf-8")
            .body(csv),
        Err(e) => error_response(&e),
    }
}

/// Games, most recently recorded first.
#[get("/api/games")]
async fn api_list_games(state: AppState) -> HttpResponse {
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    HttpResponse::Ok().json(g.games_newest_first())
}

/// Everything the "new game" form needs: rivals, players and blank stats slots.
#[get("/api/games/new")]
async fn api_new_game_form(
    state: AppState,
    settings: Settings,
    session: Session,
) -> HttpResponse {
    if let Some(denied) = require_login(&settings, &session) {
        return denied;
    }
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    HttpResponse::Ok().json(serde_json::json!({
        "rivals": g.rivals,
        "players": g.players,
        "stats": settings.batch.blank_batch(),
    }))
}

/// Record a game and its stats lines. Nothing is stored unless the whole submission is valid.
#[post("/api/games")]
async fn api_create_game(
    state: AppState,
    settings: Settings,
    session: Session,
    body: Json<CreateGameBody>,
) -> HttpResponse {
    if let Some(denied) = require_login(&settings, &session) {
        return denied;
    }
    let CreateGameBody { game, stats } = body.into_inner();
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    let id = match record_game(&mut g, game, stats) {
        Ok(id) => id,
        Err(e) => return error_response(&e),
    };
    match game_detail(&g, id) {
        Ok(detail) => HttpResponse::Created().json(detail),
        Err(e) => error_response(&e),
    }
}

/// Game with outcome, score, stats lines and team totals (404 if not found).
#[get("/api/games/{id}")]
async fn api_get_game(state: AppState, path: Path<IdPath>) -> HttpResponse {
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    match game_detail(&g, path.id) {
        Ok(detail) => HttpResponse::Ok().json(detail),
        Err(e) => error_response(&e),
    }
}

#[put("/api/games/{id}")]
async fn api_update_game(
    state: AppState,
    settings: Settings,
    session: Session,
    path: Path<IdPath>,
    body: Json<GameUpdateForm>,
) -> HttpResponse {
    if let Some(denied) = require_login(&settings, &session) {
        return denied;
    }
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    match update_game(&mut g, path.id, body.into_inner()) {
        Ok(game) => HttpResponse::Ok().json(game),
        Err(e) => error_response(&e),
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = AppConfig::from_env();
    if config.credentials.is_none() {
        log::warn!("RECORD_PASSWORD is not set: anyone can create and edit records");
    }
    log::info!(
        "Starting server at http://{}:{} ({} stats slots per new game)",
        config.host,
        config.port,
        config.batch.extra_slots
    );
    let bind = (config.host.clone(), config.port);

    let state = Data::new(RwLock::new(RecordBook::new()));
    let settings = Data::new(config);
    let session_key = Key::generate();

    HttpServer::new(move || {
        App::new()
            .wrap(
                SessionMiddleware::builder(CookieSessionStore::default(), session_key.clone())
                    .cookie_secure(false)
                    .build(),
            )
            .wrap(middleware::Logger::default())
            .app_data(state.clone())
            .app_data(settings.clone())
            .route("/", web::get().to(serve_index_async))
            .service(api_health)
            .service(favicon)
            .service(api_login)
            .service(api_logout)
            .service(api_list_rivals)
            .service(api_create_rival)
            .service(api_get_rival)
            .service(api_update_rival)
            .service(api_list_players)
            .service(api_create_player)
            .service(api_get_player)
            .service(api_update_player)
            .service(api_export_players)
            .service(api_list_games)
            // before /api/games/{id} so "new" is not parsed as an id
            .service(api_new_game_form)
            .service(api_create_game)
            .service(api_get_game)
            .service(api_update_game)
            .service(Files::new("/static", "static").show_files_listing())
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
