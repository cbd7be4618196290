#[tokio::main]
async fn main() -> anyhow::Result<()> {
    skillsvc::tracing::init();
    skillsvc::app::run().await
}
