use crate::{config::ModelSettings, error::PredictionError, model_service::ModelService};
use ndarray::Array2;
use ort::{
    session::{builder::GraphOptimizationLevel, Session},
    value::TensorRef,
};
use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc, Mutex,
};

/// ONNX Runtime implementation of [`ModelService`].
///
/// The artifact is an ONNX graph taking a float32 `[N, 42]` input and
/// producing an int64 `label` output with the predicted class index per row
/// (the shape a scikit-learn classifier exports to with zipmap disabled).
/// Holds a pool of sessions dispatched round-robin so concurrent requests
/// do not serialize on a single session mutex.
#[derive(Clone)]
pub struct OrtModelService {
    sessions: Arc<Vec<Arc<Mutex<Session>>>>,
    counter: Arc<AtomicUsize>,
}

impl OrtModelService {
    pub fn new(model_config: &ModelSettings) -> Result<Self, Box<dyn std::error::Error>> {
        ort::init().commit()?;

        let num_instances = model_config.num_instances;
        let artifact_path = model_config.get_artifact_path();
        let sessions = (0..num_instances)
            .map(|_| {
                let session = Session::builder()?
                    .with_optimization_level(GraphOptimizationLevel::Level3)?
                    .commit_from_file(&artifact_path)?;
                Ok(Arc::new(Mutex::new(session)))
            })
            .collect::<Result<Vec<_>, ort::Error>>()?;

        tracing::info!(
            "Created {} ONNX sessions from {:?}",
            num_instances,
            artifact_path
        );

        Ok(Self {
            counter: Arc::new(AtomicUsize::new(0)),
            sessions: Arc::new(sessions),
        })
    }
}

impl ModelService for OrtModelService {
    fn predict(&self, input: Array2<f32>) -> Result<i64, PredictionError> {
        let index = self.counter.fetch_add(1, Ordering::SeqCst) % self.sessions.len();
        let session_arc = &self.sessions[index];
        let mut session = session_arc
            .lock()
            .map_err(|e| PredictionError::Inference(format!("session mutex poisoned: {}", e)))?;

        tracing::debug!("Handling request with session {}", index);

        let tensor_ref = TensorRef::from_array_view(input.view())
            .map_err(|e| PredictionError::Inference(format!("failed to build tensor: {}", e)))?;

        let outputs = session
            .run(ort::inputs![tensor_ref])
            .map_err(|e| PredictionError::Inference(format!("inference failed: {}", e)))?;

        let (_, labels) = outputs["label"]
            .try_extract_tensor::<i64>()
            .map_err(|e| PredictionError::Inference(format!("failed to extract label: {}", e)))?;

        labels
            .first()
            .copied()
            .ok_or_else(|| PredictionError::Inference("model returned no label".to_string()))
    }
}
