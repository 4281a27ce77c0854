use crate::{api::absensi, config::Config};
use actix_governor::{
    Governor, GovernorConfigBuilder, PeerIpKeyExtractor, governor::middleware::NoOpMiddleware,
};
use actix_web::web;

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

    let absensi_limiter = build_limiter(config.rate_absensi_per_min);

    cfg.service(
        web::scope("/absensi")
            .wrap(absensi_limiter)
            // /absensi
            .service(
                web::resource("")
                    .route(web::post().to(absensi::create_absensi))
                    .route(web::get().to(absensi::list_absensi)),
            )
            // /absensi/{id}
            .service(
                web::resource("/{id}")
                    .route(web::put().to(absensi::update_absensi))
                    .route(web::delete().to(absensi::delete_absensi)),
            ),
    );
}
