use crate::{
    api::{geofence, reconciliation},
    config::Config,
};
use actix_governor::{
    Governor, GovernorConfig, GovernorConfigBuilder, PeerIpKeyExtractor,
    governor::middleware::NoOpMiddleware,
};
use actix_web::web;

pub fn configure(cfg: &mut web::ServiceConfig, config: Config) {
    // Helper to build per-route limiter config
    fn build_limiter(requests_per_min: u32) -> GovernorConfig<PeerIpKeyExtractor, NoOpMiddleware> {
        let per_ms = if requests_per_min == 0 {
            1
        } else {
            60_000 / requests_per_min as u64
        };
        GovernorConfigBuilder::default()
            .per_millisecond(per_ms)
            .burst_size(requests_per_min)
            .key_extractor(PeerIpKeyExtractor)
            .finish()
            .unwrap()
    }

    let validate_limiter = build_limiter(config.rate_validate_per_min);
    let report_limiter = build_limiter(config.rate_report_per_min);

    cfg.service(
        web::scope(&config.api_prefix)
            .service(
                web::scope("/geofence")
                    // /geofence/validate
                    .service(
                        web::resource("/validate")
                            .wrap(Governor::new(&validate_limiter))
                            .route(web::post().to(geofence::validate_check_in)),
                    ),
            )
            .service(
                web::scope("/reconciliation")
                    // /reconciliation/report
                    .service(
                        web::resource("/report")
                            .wrap(Governor::new(&report_limiter))
                            .route(web::post().to(reconciliation::reconciliation_report)),
                    )
                    // /reconciliation/auto-resolve
                    .service(
                        web::resource("/auto-resolve")
                            .wrap(Governor::new(&report_limiter))
                            .route(web::post().to(reconciliation::auto_resolve_preview)),
                    ),
            ),
    );
}

// CHECK-IN
//  ├─ client sends GPS fix + assigned locations
//  └─ verdict: within range → PRESENT, out of range → PENDING_APPROVAL
//
// RECONCILIATION
//  ├─ report: discrepancy list, severity descending
//  └─ auto-resolve: draft timesheet entries for the mechanical subset
