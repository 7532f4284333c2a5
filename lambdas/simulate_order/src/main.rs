use crate::http_handler::HandlerDeps;
use http_handler::function_handler;
use lambda_http::{run, service_fn, tracing, Error};
use shared::adapters::DynamoDbOrderRepository;
use shared::configuration::Config;
use shared::core::{LocalClock, UuidGenerator};

mod http_handler;

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing::init_default_subscriber();
    let aws_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
    let dynamodb_client = aws_sdk_dynamodb::Client::new(&aws_config);
    let config = Config::load()?;
    if config.table_name.is_none() {
        tracing::warn!("TABLE_NAME is not set, every order will fail");
    }
    let deps = HandlerDeps {
        id_generator: UuidGenerator::new(),
        clock: LocalClock::new(),
        order_repo: DynamoDbOrderRepository::new(config.table_name, dynamodb_client),
    };

    run(service_fn(|event| function_handler(&deps, event))).await
}
