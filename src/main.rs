use app::{ForecastSettings, create_app};
use axum_server::tls_rustls::RustlsConfig;
use clap::Parser;
use error::ServerError;
use std::net::SocketAddr;

mod app;
mod error;
mod forecast;
mod forecast_routes;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, env = "PORT", default_value_t = 3000)]
    port: u16,

    /// Text attached to every forecast record.
    #[arg(short, long, env = "FORECAST_DESCRIPTION")]
    description: Option<String>,

    #[arg(short, long, env = "KEY_FILE_PATH")]
    key_file_path: Option<String>,

    #[arg(short, long, env = "CERT_FILE_PATH")]
    cert_file_path: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    env_logger::init();

    let args = Args::parse();

    let addr = SocketAddr::from(([0, 0, 0, 0], args.port));

    let app = create_app(ForecastSettings {
        description: args.description,
    });

    log::info!("listening on {}", addr);
    if let Some(key_file_path) = args.key_file_path {
        let cert_file_path = args.cert_file_path.ok_or(ServerError::MissingCertificate)?;
        log::info!(
            "using tls with key file {} and cert file {}",
            key_file_path,
            cert_file_path
        );
        let tls = RustlsConfig::from_pem_file(cert_file_path, key_file_path)
            .await
            .map_err(|source| ServerError::TlsConfig { source })?;
        axum_server::bind_rustls(addr, tls)
            .serve(app.into_make_service())
            .await?;
    } else {
        axum_server::bind(addr)
            .serve(app.into_make_service())
            .await?;
    }
    Ok(())
}
