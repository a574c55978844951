//! HTTP handlers and route configuration.

mod auth;
mod health;
mod notifications;
mod posts;
mod users;

use actix_web::web;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            // Public routes
            .route("/health", web::get().to(health::health_check))
            // Auth routes
            .service(
                web::scope("/auth")
                    .route("/register", web::post().to(auth::register))
                    .route("/login", web::post().to(auth::login))
                    .route("/oauth", web::post().to(auth::federated_login))
                    .route("/me", web::get().to(auth::me)),
            )
            // User routes ("/me" before "/{user_id}" so it matches first)
            .service(
                web::scope("/users")
                    .route("/me", web::put().to(users::update_profile))
                    .route("/me", web::delete().to(users::delete_account))
                    .route("/me/picture", web::post().to(users::upload_picture))
                    .route("/{user_id}", web::get().to(users::get_user))
                    .route("/{user_id}/posts", web::get().to(posts::list_by_author))
                    .route(
                        "/{user_id}/subscription",
                        web::post().to(users::toggle_subscription),
                    ),
            )
            // Post and comment routes
            .service(
                web::scope("/posts")
                    .route("", web::post().to(posts::create))
                    .route("/{post_id}", web::get().to(posts::get))
                    .route("/{post_id}", web::put().to(posts::edit))
                    .route("/{post_id}", web::delete().to(posts::delete))
                    .route("/{post_id}/like", web::post().to(posts::toggle_like))
                    .route("/{post_id}/comments", web::get().to(posts::list_comments))
                    .route("/{post_id}/comments", web::post().to(posts::add_comment)),
            )
            .route("/comments/{comment_id}", web::delete().to(posts::delete_comment))
            // Content assist
            .route("/grammar/check", web::post().to(posts::grammar_check))
            // Notification feed
            .service(
                web::scope("/notifications")
                    .route("", web::get().to(notifications::list))
                    .route("/read", web::post().to(notifications::mark_all_read)),
            ),
    );
}
