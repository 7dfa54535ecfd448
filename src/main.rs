#[tokio::main]
async fn main() {
    wedding_rsvp::run().await;
}
