use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_DB_HOST: &str = "localhost";
const DEFAULT_DB_PORT: u16 = 3306;
const DEFAULT_DB_USER: &str = "root";
const DEFAULT_DB_NAME: &str = "server";
const DEFAULT_POOL_SIZE: u32 = 10;

pub struct Config {
    /// Connection string of the game server database.
    pub database_url: String,
    /// Maximum number of pooled connections.
    pub pool_size: u32,
}

impl Config {
    /// Reads configuration from the environment.
    ///
    /// `DATABASE_URL` takes precedence. Without it a MySQL URL is composed from
    /// `DB_HOST`, `DB_PORT`, `DB_USER`, `DB_PASS` and `DB_NAME`, each with a default.
    ///
    /// # Returns
    /// - `Ok(Config)` - Configuration ready for startup
    /// - `Err(AppError::ConfigErr)` - A numeric variable could not be parsed
    pub fn from_env() -> Result<Self, AppError> {
        let database_url = match std::env::var("DATABASE_URL") {
            Ok(url) if !url.is_empty() => url,
            _ => {
                let host = env_or("DB_HOST", DEFAULT_DB_HOST);
                let port: u16 = parse_env("DB_PORT", DEFAULT_DB_PORT)?;
                let user = env_or("DB_USER", DEFAULT_DB_USER);
                let pass = env_or("DB_PASS", "");
                let name = env_or("DB_NAME", DEFAULT_DB_NAME);

                mysql_url(&host, port, &user, &pass, &name)
            }
        };

        Ok(Self {
            database_url,
            pool_size: parse_env("DB_POOL_SIZE", DEFAULT_POOL_SIZE)?,
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn parse_env<T: std::str::FromStr>(key: &str, default: T) -> Result<T, ConfigError> {
    match std::env::var(key) {
        Ok(value) => value.trim().parse().map_err(|_| ConfigError::InvalidEnvVar {
            name: key.to_string(),
            value,
        }),
        Err(_) => Ok(default),
    }
}

fn mysql_url(host: &str, port: u16, user: &str, pass: &str, name: &str) -> String {
    if pass.is_empty() {
        format!("mysql://{}@{}:{}/{}", user, host, port, name)
    } else {
        format!("mysql://{}:{}@{}:{}/{}", user, pass, host, port, name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn composes_mysql_url_with_password() {
        assert_eq!(
            mysql_url("db", 3307, "minecraft", "secret", "server"),
            "mysql://minecraft:secret@db:3307/server"
        );
    }

    #[test]
    fn composes_mysql_url_without_password() {
        assert_eq!(
            mysql_url("localhost", 3306, "root", "", "server"),
            "mysql://root@localhost:3306/server"
        );
    }

    #[test]
    fn missing_numeric_variable_uses_default() {
        let value: u32 = parse_env("HYPEMC_TEST_UNSET_POOL", 10).unwrap();

        assert_eq!(value, 10);
    }
}
