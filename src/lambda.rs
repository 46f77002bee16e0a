#[cfg(feature = "lambda")]
use hanoi_api::core::handler;
#[cfg(feature = "lambda")]
use hanoi_api::domain::model::{ApiGatewayEvent, ApiResponse};
#[cfg(feature = "lambda")]
use hanoi_api::utils::logger;
#[cfg(feature = "lambda")]
use lambda_runtime::{run, service_fn, Error, LambdaEvent};

#[cfg(feature = "lambda")]
async fn function_handler(event: LambdaEvent<ApiGatewayEvent>) -> Result<ApiResponse, Error> {
    tracing::info!(
        method = event.payload.http_method.as_deref().unwrap_or(""),
        "Handling Tower of Hanoi request"
    );

    let response = handler::handle(&event.payload);
    tracing::info!(status = response.status_code, "Request served");
    Ok(response)
}

#[cfg(feature = "lambda")]
#[tokio::main]
async fn main() -> Result<(), Error> {
    logger::init_lambda_logger();

    run(service_fn(function_handler)).await
}
