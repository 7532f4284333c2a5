use lambda_http::{http::StatusCode, tracing, Error, IntoResponse, Request};
use shared::core::{Clock, IdGenerator, OrderRecord, OrderRepository};
use shared::error::OrderError;
use shared::order_request::OrderRequest;
use shared::utils::{error_response, json_response, OrderResponse};

pub(crate) struct HandlerDeps<I: IdGenerator, C: Clock, R: OrderRepository> {
    pub id_generator: I,
    pub clock: C,
    pub order_repo: R,
}

pub(crate) async fn function_handler<I: IdGenerator, C: Clock, R: OrderRepository>(
    deps: &HandlerDeps<I, C, R>,
    event: Request,
) -> Result<impl IntoResponse, Error> {
    tracing::info!("Received event: {:?}", event);

    match submit_order(deps, &event).await {
        Ok(order) => {
            tracing::info!("Stored order {}", order.id);
            let product_name = order.product_name.unwrap_or_default();
            json_response(
                &StatusCode::OK,
                &OrderResponse::new(format!("¡Compraste {}!", product_name), order.id),
            )
        }
        Err(e) => {
            tracing::error!("Failed to submit order: {}", e);
            error_response(&e)
        }
    }
}

async fn submit_order<I: IdGenerator, C: Clock, R: OrderRepository>(
    deps: &HandlerDeps<I, C, R>,
    event: &Request,
) -> Result<OrderRecord, OrderError> {
    let request = OrderRequest::from_body(event.body())?;
    let order = OrderRecord::web(
        deps.id_generator.generate_id(),
        deps.clock.now(),
        request.product_name,
        request.price,
    );
    deps.order_repo.put_order(&order).await?;
    Ok(order)
}
