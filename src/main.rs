//! Login form - entry point
//!
//! `serve` runs the form endpoint; `submit` drives one submission through the
//! form controller and prints the resulting form.

use clap::Parser;
use env_logger::Env;
use log::info;
use std::path::Path;
use std::process::ExitCode;

use login_form::cli::{Cli, Commands};
use login_form::client::view;
use login_form::config::AppConfig;
use login_form::error::AppError;
use login_form::error::handlers::handle_app_error;
use login_form::{FormController, HttpTransport, Server};

#[tokio::main]
async fn main() -> ExitCode {
    // RUST_LOG overrides the default level
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Serve => serve(cli.config.as_deref()).await.map(|()| true),
        Commands::Submit {
            email,
            password,
            endpoint,
        } => submit(cli.config.as_deref(), email, password, endpoint).await,
    };

    match result {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            handle_app_error(&e);
            ExitCode::FAILURE
        }
    }
}

async fn serve(config_path: Option<&Path>) -> Result<(), AppError> {
    let config = AppConfig::load(config_path)?;

    info!("Launching login form server...");
    let server = Server::bind(&config.server).await?;
    server.start().await
}

async fn submit(
    config_path: Option<&Path>,
    email: String,
    password: String,
    endpoint: Option<String>,
) -> Result<bool, AppError> {
    let config = AppConfig::load(config_path)?;
    let endpoint = endpoint.unwrap_or(config.client.endpoint);

    let mut controller = FormController::new(HttpTransport::new(endpoint));
    controller.set_email(email);
    controller.set_password(password);

    let outcome = controller.submit().await;
    print!("{}", view::render(controller.state()));

    Ok(outcome.is_accepted())
}
