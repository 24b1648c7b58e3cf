use crate::{
    api::{leave_request, person, reports},
    auth::{handlers, middleware::auth_middleware},
    config::Config,
};
use actix_governor::{
    Governor, GovernorConfigBuilder, PeerIpKeyExtractor, governor::middleware::NoOpMiddleware,
};
use actix_web::{middleware::from_fn, web};
use std::sync::Arc;

pub fn configure(cfg: &mut web::ServiceConfig, config: Config) {
    // Helper to build per-route limiter
    fn build_limiter(requests_per_min: u32) -> Governor<PeerIpKeyExtractor, NoOpMiddleware> {
        let per_ms = if requests_per_min == 0 {
            1
        } else {
            60_000 / requests_per_min as u64
        };
        let cfg = GovernorConfigBuilder::default()
            .per_millisecond(per_ms)
            .burst_size(requests_per_min)
            .key_extractor(PeerIpKeyExtractor)
            .finish()
            .unwrap();
        Governor::new(&cfg)
    }

    let login_limiter = Arc::new(build_limiter(config.rate_login_per_min));
    let protected_limiter = Arc::new(build_limiter(config.rate_protected_per_min));

    // Public routes
    cfg.service(
        web::scope("/auth").service(
            web::resource("/login")
                .wrap(login_limiter.clone())
                .route(web::post().to(handlers::login)),
        ),
    );

    // Protected routes
    cfg.service(
        web::scope(&config.api_prefix)
            .wrap(from_fn(auth_middleware)) // authentication
            .wrap(protected_limiter) // rate limiting
            .service(
                web::scope("/personnel")
                    // /personnel
                    .service(
                        web::resource("")
                            .route(web::post().to(person::create_person))
                            .route(web::get().to(person::list_personnel)),
                    )
                    // /personnel/import
                    .service(
                        web::resource("/import").route(web::post().to(person::import_personnel)),
                    )
                    // /personnel/{id}
                    .service(
                        web::resource("/{id}").route(web::delete().to(person::delete_person)),
                    ),
            )
            .service(
                web::scope("/leave")
                    // /leave
                    .service(
                        web::resource("")
                            .route(web::get().to(leave_request::leave_list))
                            .route(web::post().to(leave_request::create_leave)),
                    )
                    // literal paths must precede /{id}
                    .service(web::resource("/my").route(web::get().to(leave_request::my_leaves)))
                    .service(
                        web::resource("/pending")
                            .route(web::get().to(leave_request::pending_approvals)),
                    )
                    .service(
                        web::resource("/export").route(web::get().to(reports::export_leaves)),
                    )
                    .service(
                        web::resource("/delete")
                            .route(web::put().to(leave_request::bulk_delete_leaves)),
                    )
                    // /leave/{id}
                    .service(
                        web::resource("/{id}")
                            .route(web::get().to(leave_request::get_leave))
                            .route(web::put().to(leave_request::update_leave))
                            .route(web::delete().to(leave_request::delete_leave)),
                    )
                    // /leave/{id}/approve
                    .service(
                        web::resource("/{id}/approve")
                            .route(web::put().to(leave_request::approve_leave)),
                    )
                    // /leave/{id}/reject
                    .service(
                        web::resource("/{id}/reject")
                            .route(web::put().to(leave_request::reject_leave)),
                    )
                    // /leave/{id}/document
                    .service(
                        web::resource("/{id}/document")
                            .route(web::get().to(reports::leave_document)),
                    ),
            ),
    );
}
