use trivia_relay::config::Config;
use trivia_relay::handlers;
use vercel_runtime::{run, Body, Error, Request, Response};

#[tokio::main]
async fn main() -> Result<(), Error> {
    trivia_relay::logging::init();
    run(handler).await
}

/// POST /api/trivia — Ask Gemini for a trivia question and return it validated.
pub async fn handler(req: Request) -> Result<Response<Body>, Error> {
    handlers::trivia::handle(req.method(), Config::from_env).await
}
