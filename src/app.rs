use crate::{
    config::Settings, model_service::ModelService, ort_service::OrtModelService,
    server::HttpServer,
};
use std::{error::Error, sync::Arc};

pub async fn start_app(config: Settings) -> Result<(), Box<dyn Error>> {
    // Model load failure is fatal: the listener never binds without a model.
    let model_service: Arc<dyn ModelService> = match OrtModelService::new(&config.model) {
        Ok(service) => Arc::new(service),
        Err(e) => {
            tracing::error!("Failed to initialize model service: {:?}", e);
            return Err(e);
        }
    };

    let server = HttpServer::new(model_service, &config.server).await?;
    server.run().await?;

    Ok(())
}
