use aws_config::BehaviorVersion;
use aws_sdk_s3::Client;

/// Build an S3 client from the ambient AWS configuration (env, profile,
/// or instance role).
pub async fn build_client() -> Client {
    let config = aws_config::defaults(BehaviorVersion::latest()).load().await;
    Client::new(&config)
}
