use anyhow::{bail, Context};
use tracing_subscriber::EnvFilter;

use yoga_frontend::{config::ClientConfig, App};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("yoga_frontend=info")),
        )
        .init();

    let mut args = std::env::args().skip(1);
    let (Some(email), Some(password)) = (args.next(), args.next()) else {
        bail!("usage: yoga-frontend <email> <password>");
    };

    let config = ClientConfig::load();
    tracing::info!("Using API at {}", config.api_base_url);
    let app = App::new(&config);

    let mut login = app.login();
    login.set_email(email);
    login.set_password(password);
    login.submit().await.context("login failed")?;

    let identity = app
        .store()
        .identity()
        .context("login did not record an identity")?;
    tracing::info!(
        "Logged in as {} {} (admin: {})",
        identity.first_name,
        identity.last_name,
        identity.is_admin
    );

    let mut sessions = app.session_list();
    sessions.load().await.context("failed to load sessions")?;
    for session in &sessions.sessions {
        tracing::info!(
            "#{} {} on {} ({} participants)",
            session.id.unwrap_or_default(),
            session.name,
            yoga_frontend::utils::time::format_form_date(&session.date),
            session.users.len()
        );
    }

    app.shell().logout();
    tracing::info!("Logged out, now at {}", app.router().current());
    Ok(())
}
