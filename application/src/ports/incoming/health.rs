use crate::health::HealthReport;

#[async_trait::async_trait]
pub trait HealthQueryUseCase: Send + Sync {
    async fn check(&self) -> HealthReport;
}
