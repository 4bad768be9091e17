use anyhow::Result;
use std::env;

pub struct AppConfig {
    pub database: DatabaseConfig,
}

impl AppConfig {
    pub fn new() -> Result<Self> {
        let database = DatabaseConfig {
            host: env::var("DATABASE_HOST").unwrap_or_else(|_| "localhost".into()),
            port: env::var("DATABASE_PORT")
                .unwrap_or_else(|_| "5432".into())
                .parse()?,
            username: env::var("DATABASE_USERNAME").unwrap_or_else(|_| "app".into()),
            password: env::var("DATABASE_PASSWORD").unwrap_or_else(|_| "passwd".into()),
            database: env::var("DATABASE_NAME").unwrap_or_else(|_| "app".into()),
        };
        Ok(Self { database })
    }
}

pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub database: String,
}
