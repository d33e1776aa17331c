use async_trait::async_trait;
use std::env;
use std::path::PathBuf;

#[derive(Clone)]
pub struct AppContext {
    pub host: String,
    pub port: u32,
    pub url: String,
}

#[derive(Clone)]
pub struct StorageContext {
    pub upload_dir: PathBuf,
    pub public_url: String,
}

#[derive(Clone)]
pub struct Context {
    pub app: AppContext,
    pub storage: StorageContext,
}

#[derive(Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u32,
    pub url: String,
}

#[derive(Clone)]
pub struct StorageConfig {
    pub upload_dir: PathBuf,
}

#[derive(Clone)]
pub struct Config {
    pub app: AppConfig,
    pub storage: StorageConfig,
}

impl Default for Config {
    fn default() -> Self {
        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = env::var("PORT")
            .unwrap_or_else(|_| "8000".to_string())
            .parse::<u32>()
            .expect("Invalid PORT number");
        let url = env::var("URL").unwrap_or_else(|_| format!("http://{}:{}", host, port));
        let upload_dir = env::var("UPLOAD_DIR")
            .unwrap_or_else(|_| "public/uploads".to_string())
            .into();

        Self {
            app: AppConfig { host, port, url },
            storage: StorageConfig { upload_dir },
        }
    }
}

#[async_trait]
pub trait ToContext {
    async fn to_context(self) -> Context;
}

#[async_trait]
impl ToContext for Config {
    async fn to_context(self) -> Context {
        tokio::fs::create_dir_all(&self.storage.upload_dir)
            .await
            .expect("Failed to create the upload directory");

        let public_url = format!("{}/api/media", self.app.url);

        Context {
            app: AppContext {
                host: self.app.host,
                port: self.app.port,
                url: self.app.url,
            },
            storage: StorageContext {
                upload_dir: self.storage.upload_dir,
                public_url,
            },
        }
    }
}
