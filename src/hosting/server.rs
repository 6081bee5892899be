use super::*;
use crate::dto::ApiRound;
use crate::dto::PlayRound;
use crate::game::Throw;
use actix_cors::Cors;
use actix_web::App;
use actix_web::HttpResponse;
use actix_web::HttpServer;
use actix_web::Responder;
use actix_web::middleware::Logger;
use actix_web::web;

pub struct Server;

impl Server {
    pub async fn run(bind: &str, order: usize, capacity: usize) -> Result<(), std::io::Error> {
        let state = web::Data::new(Arcade::new(order, capacity));
        log::info!("starting arcade server on {}", bind);
        HttpServer::new(move || {
            App::new()
                .wrap(Logger::new("%r %s %Ts"))
                .wrap(
                    Cors::default()
                        .allow_any_origin()
                        .allow_any_method()
                        .allow_any_header(),
                )
                .app_data(state.clone())
                .route("/play", web::post().to(play))
                .route("/reset", web::post().to(reset))
                .route("/health", web::get().to(health))
        })
        .workers(4)
        .bind(bind)?
        .run()
        .await
    }
}

/// One round: the throw is validated at this boundary, the core only ever
/// sees well-typed input.
async fn play(arcade: web::Data<Arcade>, req: web::Json<PlayRound>) -> impl Responder {
    match Throw::try_from(req.user_move.as_str()) {
        Err(_) => HttpResponse::BadRequest().body("invalid move format"),
        Ok(throw) => HttpResponse::Ok().json(ApiRound::from(arcade.play(throw).await)),
    }
}

async fn reset(arcade: web::Data<Arcade>) -> impl Responder {
    arcade.reset().await;
    HttpResponse::Ok().json(serde_json::json!({ "ok": true, "message": "model reset" }))
}

async fn health() -> impl Responder {
    HttpResponse::Ok().body("ok")
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test;

    macro_rules! app {
        ($state:expr) => {
            test::init_service(
                App::new()
                    .app_data($state.clone())
                    .route("/play", web::post().to(play))
                    .route("/reset", web::post().to(reset))
                    .route("/health", web::get().to(health)),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn play_round_trip() {
        let state = web::Data::new(Arcade::new(3, 50));
        let app = app!(state);
        let req = test::TestRequest::post()
            .uri("/play")
            .set_json(PlayRound {
                user_move: "rock".to_string(),
            })
            .to_request();
        let round: ApiRound = test::call_and_read_body_json(&app, req).await;
        assert!(round.user_move == "rock");
        assert!(round.model_info.history_len == 1);
        assert!(round.model_info.learned_states == 0);
        let ai = Throw::try_from(round.ai_move.as_str()).unwrap();
        let predicted = Throw::try_from(round.predicted_next_user_move.as_str()).unwrap();
        assert!(ai.beats(&predicted));
    }

    #[actix_web::test]
    async fn play_rejects_bad_symbols() {
        let state = web::Data::new(Arcade::new(3, 50));
        let app = app!(state);
        let req = test::TestRequest::post()
            .uri("/play")
            .set_json(PlayRound {
                user_move: "lizard".to_string(),
            })
            .to_request();
        let res = test::call_service(&app, req).await;
        assert!(res.status() == actix_web::http::StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn reset_empties_the_model() {
        let state = web::Data::new(Arcade::new(3, 50));
        let app = app!(state);
        for _ in 0..4 {
            let req = test::TestRequest::post()
                .uri("/play")
                .set_json(PlayRound {
                    user_move: "paper".to_string(),
                })
                .to_request();
            test::call_service(&app, req).await;
        }
        let req = test::TestRequest::post().uri("/reset").to_request();
        let res = test::call_service(&app, req).await;
        assert!(res.status().is_success());
        let (history_len, learned_states) = state.snapshot().await;
        assert!(history_len == 0);
        assert!(learned_states == 0);
    }

    #[actix_web::test]
    async fn health_is_stateless() {
        let state = web::Data::new(Arcade::new(3, 50));
        let app = app!(state);
        let req = test::TestRequest::get().uri("/health").to_request();
        let res = test::call_service(&app, req).await;
        assert!(res.status().is_success());
        let (history_len, learned_states) = state.snapshot().await;
        assert!(history_len == 0);
        assert!(learned_states == 0);
    }
}
