use trivia_relay::config::Config;
use trivia_relay::handlers;
use vercel_runtime::{run, Body, Error, Request, Response};

#[tokio::main]
async fn main() -> Result<(), Error> {
    trivia_relay::logging::init();
    run(handler).await
}

/// GET /api/models — List the models available to the configured key.
pub async fn handler(req: Request) -> Result<Response<Body>, Error> {
    handlers::models::handle(req.method(), Config::from_env).await
}
