/**
 * User Provisioning Tool
 *
 * Creates a user in the configured database so that it can sign in.
 *
 * ```text
 * tokengate-add-user <username> <password>
 * ```
 *
 * The username and password must satisfy the same rules the sign-in
 * endpoint enforces. The password is hashed with `PASSWORD_COST`.
 */

use tokengate::backend::auth::password::PasswordHasher;
use tokengate::backend::auth::users::provision_user;
use tokengate::backend::server::config::connect_database;
use tokengate::shared::AppConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let mut args = std::env::args().skip(1);
    let (Some(username), Some(password), None) = (args.next(), args.next(), args.next()) else {
        eprintln!("Usage: tokengate-add-user <username> <password>");
        std::process::exit(2);
    };

    let config = AppConfig::from_env()?;
    let pool = connect_database(&config.database_url, config.request_timeout).await?;
    let hasher = PasswordHasher::new(config.password_cost);

    let result = provision_user(&pool, &hasher, &username, &password).await;
    pool.close().await;

    let user = result?;
    tracing::info!("Created user {} ({})", user.username, user.id);
    Ok(())
}
