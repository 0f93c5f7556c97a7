use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use anyhow::Context;
use aws_secrets::{PaymentCredentials, RtcAppConfig, SecretManager};
use fcm_shared::FcmClient;
use firestore_client::FirestoreClient;
use gcp_auth::ServiceAccountKey;
use meeting_service::{
    handlers::{register_events, register_payments, register_rtc},
    Config, FcmPushGateway, FirestoreUserDirectory, NotificationDispatcher, PaymentGateway,
    RazorpayClient,
};
use rtc_token::RtcTokenIssuer;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting meeting service");

    let config = Config::from_env()
        .map_err(|e| anyhow::anyhow!("invalid configuration: {e}"))?;

    // All credential material comes from the secret store; config only
    // carries secret names
    let secrets = SecretManager::new()
        .await
        .context("failed to initialize secret manager")?;

    let service_account_json = secrets
        .get_secret(&config.secrets.service_account_key)
        .await
        .context("failed to resolve service account key")?;
    let service_account = Arc::new(
        ServiceAccountKey::from_json(&service_account_json)
            .context("malformed service account key secret")?,
    );

    let rtc_app = RtcAppConfig::from_json(
        &secrets
            .get_secret(&config.secrets.rtc_app_config)
            .await
            .context("failed to resolve RTC app config")?,
    )?;

    let payment_credentials = PaymentCredentials::from_json(
        &secrets
            .get_secret(&config.secrets.payment_credentials)
            .await
            .context("failed to resolve payment credentials")?,
    )?;

    // Construct every external client once; handlers share them for the
    // process lifetime (all are stateless apart from OAuth token caches)
    let store = Arc::new(FirestoreClient::new(
        config.firestore.project_id.clone(),
        service_account.clone(),
    ));
    let fcm = Arc::new(FcmClient::new(
        config.fcm.project_id.clone(),
        service_account,
    ));

    let dispatcher = Arc::new(NotificationDispatcher::new(
        Arc::new(FirestoreUserDirectory::new(store)),
        Arc::new(FcmPushGateway::new(fcm)),
    ));
    let token_issuer = Arc::new(RtcTokenIssuer::new(rtc_app.app_id, &rtc_app.app_certificate));
    let payment_gateway: Arc<dyn PaymentGateway> = Arc::new(RazorpayClient::new(
        config.payments.base_url.clone(),
        payment_credentials,
    ));

    let addr = format!("0.0.0.0:{}", config.app.port);
    tracing::info!(env = %config.app.env, "Starting HTTP server on {}", addr);

    HttpServer::new(move || {
        // Endpoints are called from browser clients on other origins
        let cors = Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header()
            .max_age(3600);

        App::new()
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .app_data(web::Data::new(dispatcher.clone()))
            .app_data(web::Data::new(token_issuer.clone()))
            .app_data(web::Data::new(payment_gateway.clone()))
            .route("/health", web::get().to(|| async { "OK" }))
            .configure(|cfg| {
                register_events(cfg);
                register_rtc(cfg);
                register_payments(cfg);
            })
    })
    .bind(&addr)?
    .run()
    .await?;

    Ok(())
}
