// src/config.rs
use crate::error::AppError;
use crate::types::{ApiKey, DatabaseId, ValidatedUrl, ValidationError};
use clap::{Parser, ValueEnum};
use serde::Serialize;
use std::net::SocketAddr;

pub const TOKEN_ENV: &str = "NOTION_TOKEN";
pub const DATABASE_ID_ENV: &str = "NOTION_DATABASE_ID";

/// How many pages of children to read per block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ChildrenPaging {
    /// Only the first 100 children of each block; the rest are dropped.
    #[default]
    FirstPage,
    /// Follow cursors until every child is read.
    AllPages,
}

/// Parsed command-line input.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct ServerArgs {
    /// Address to bind
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, default_value_t = 3000)]
    pub port: u16,

    /// Enable verbose logging (debug level)
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,

    /// How deep to page through block children
    #[arg(long, value_enum, default_value_t = ChildrenPaging::FirstPage)]
    pub children_paging: ChildrenPaging,

    /// Site name shown in the header
    #[arg(long)]
    pub site_name: Option<String>,

    /// Title of the post index
    #[arg(long)]
    pub site_title: Option<String>,

    /// Author credited in page metadata
    #[arg(long)]
    pub author: Option<String>,

    /// Meta description
    #[arg(long)]
    pub description: Option<String>,

    /// Public URL of the site (e.g., "https://blog.example.com")
    #[arg(long)]
    pub site_url: Option<String>,
}

/// Metadata every layout renders with.
#[derive(Debug, Clone, Serialize)]
pub struct SiteMeta {
    pub name: String,
    pub title: String,
    pub author: String,
    pub description: String,
    pub language: String,
    pub locale: String,
    pub site_url: ValidatedUrl,
}

impl Default for SiteMeta {
    fn default() -> Self {
        Self {
            name: "Utopian".to_string(),
            title: "Notion Blogger".to_string(),
            author: "Utopian".to_string(),
            description: "A blog written in Notion".to_string(),
            language: "en-us".to_string(),
            locale: "en-US".to_string(),
            site_url: default_site_url(),
        }
    }
}

fn default_site_url() -> ValidatedUrl {
    ValidatedUrl::parse("http://127.0.0.1:3000").expect("Default site url should be valid")
}

impl SiteMeta {
    /// Applies command-line overrides, rejecting empty values.
    fn with_overrides(mut self, args: &ServerArgs) -> Result<Self, ValidationError> {
        fn non_empty(value: &str, field: &'static str) -> Result<String, ValidationError> {
            let trimmed = value.trim();
            if trimmed.is_empty() {
                Err(ValidationError::EmptyField(field))
            } else {
                Ok(trimmed.to_string())
            }
        }

        if let Some(name) = &args.site_name {
            self.name = non_empty(name, "site name")?;
        }
        if let Some(title) = &args.site_title {
            self.title = non_empty(title, "site title")?;
        }
        if let Some(author) = &args.author {
            self.author = non_empty(author, "author")?;
        }
        if let Some(description) = &args.description {
            self.description = non_empty(description, "description")?;
        }
        if let Some(url) = &args.site_url {
            self.site_url = ValidatedUrl::parse(url)?;
        }
        Ok(self)
    }
}

/// Resolved server configuration, validated and ready to serve.
#[derive(Debug, Clone)]
pub struct BlogConfig {
    pub api_key: ApiKey,
    pub database_id: DatabaseId,
    pub bind_addr: SocketAddr,
    pub children_paging: ChildrenPaging,
    pub site: SiteMeta,
    pub verbose: bool,
}

impl BlogConfig {
    /// Resolves a complete configuration from CLI input and environment.
    pub fn resolve(args: ServerArgs) -> Result<Self, AppError> {
        Self::resolve_with(args, |key| std::env::var(key).ok())
    }

    /// Same as [`BlogConfig::resolve`] with an explicit variable lookup.
    pub fn resolve_with(
        args: ServerArgs,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, AppError> {
        let api_key = env(TOKEN_ENV).ok_or_else(|| {
            AppError::MissingConfiguration(format!("{} environment variable not set", TOKEN_ENV))
        })?;
        let database_id = env(DATABASE_ID_ENV).ok_or_else(|| {
            AppError::MissingConfiguration(format!(
                "{} environment variable not set",
                DATABASE_ID_ENV
            ))
        })?;

        let bind_addr = format!("{}:{}", args.host, args.port)
            .parse::<SocketAddr>()
            .map_err(|e| {
                AppError::MissingConfiguration(format!(
                    "Invalid bind address {}:{}: {}",
                    args.host, args.port, e
                ))
            })?;

        Ok(BlogConfig {
            api_key: ApiKey::new(api_key)?,
            database_id: DatabaseId::parse(&database_id)?,
            bind_addr,
            children_paging: args.children_paging,
            site: SiteMeta::default().with_overrides(&args)?,
            verbose: args.verbose,
        })
    }
}
