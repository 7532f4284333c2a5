use lambda_http::{http::StatusCode, tracing, Error, IntoResponse, Request};
use shared::core::{Clock, IdGenerator, OrderRecord, OrderRepository};
use shared::utils::{error_response, json_response, OrderResponse};

pub(crate) struct HandlerDeps<I: IdGenerator, C: Clock, R: OrderRepository> {
    pub id_generator: I,
    pub clock: C,
    pub order_repo: R,
}

/// Records a placeholder order without looking at the request body.
pub(crate) async fn function_handler<I: IdGenerator, C: Clock, R: OrderRepository>(
    deps: &HandlerDeps<I, C, R>,
    event: Request,
) -> Result<impl IntoResponse, Error> {
    tracing::info!("Received event: {:?}", event);

    let order = OrderRecord::simulated(deps.id_generator.generate_id(), deps.clock.now());

    match deps.order_repo.put_order(&order).await {
        Ok(()) => {
            tracing::info!("Stored simulated order {}", order.id);
            json_response(
                &StatusCode::OK,
                &OrderResponse::new("Pedido realizado con exito!", order.id),
            )
        }
        Err(e) => {
            tracing::error!("Failed to store simulated order: {}", e);
            error_response(&e)
        }
    }
}
