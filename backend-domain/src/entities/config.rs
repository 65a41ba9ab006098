// Runtime configuration handed from infrastructure to the other layers

#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub bind_addr: String,
    pub nft_image_base_url: String,
    pub nft_image_pool_size: u32,
    pub nft_fallback_name: String,
    pub upstream_timeout_seconds: u64,
    pub request_timeout_seconds: u64,
    pub max_body_bytes: u64,
}

#[derive(Debug, Clone)]
pub struct DbConfig {
    pub database_url: String,
    pub max_connections: u32,
}
