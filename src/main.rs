use solved_badge::error::BadgeError;

#[tokio::main]
async fn main() -> Result<(), BadgeError> {
    solved_badge::app::run().await
}
