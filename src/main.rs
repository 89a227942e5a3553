use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};

use brightcode_server::{
    app_state::AppState,
    auth::{AuthMiddleware, JwtService},
    config::Config,
    handlers,
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = Config::from_env();
    if std::env::var("APP_ENV").as_deref() == Ok("production") {
        config.validate_for_production();
    }

    let jwt_service = JwtService::new(&config.jwt_secret, config.jwt_expiration_hours);

    let state = AppState::new(config.clone())
        .await
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e.to_string()))?;

    log::info!(
        "starting HTTP server on {}:{}",
        config.web_server_host,
        config.web_server_port
    );

    HttpServer::new(move || {
        let cors = Cors::default()
            .allowed_origin(&state.config.cors_allowed_origin)
            .allow_any_method()
            .allow_any_header()
            .max_age(3600);

        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(jwt_service.clone()))
            .wrap(Logger::default())
            .wrap(cors)
            .service(handlers::health_handler::health_check)
            .service(handlers::health_handler::health_check_live)
            .service(handlers::health_handler::health_check_ready)
            .service(handlers::catalog_handler::list_quizzes)
            .service(handlers::catalog_handler::start_quiz)
            .service(handlers::access_handler::verify_access)
            .service(
                web::scope("/api/me")
                    .wrap(AuthMiddleware)
                    .service(handlers::profile_handler::me),
            )
            .service(
                web::scope("/api/admin")
                    .wrap(AuthMiddleware)
                    .service(handlers::admin_handler::set_quiz_access_code)
                    .service(handlers::admin_handler::rotate_access_codes),
            )
    })
    .bind((config.web_server_host.as_str(), config.web_server_port))?
    .run()
    .await
}
