pub trait ConnectionConfig: Send + Sync {
    fn database_url(&self) -> Option<&str>;
    fn redis_url(&self) -> Option<&str>;
}
