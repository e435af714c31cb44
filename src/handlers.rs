use axum::Json;
use crate::logger;
use crate::models::Greeting;

pub async fn root() -> &'static str {

    logger::log_request("GET", "/", 200);

    "Hello, World!"

}

pub async fn greet() -> Json<Greeting> {

    logger::log_request("GET", "/api/greet", 200);

    Json(Greeting { message: "Greetings from the API!".to_string() })

}
