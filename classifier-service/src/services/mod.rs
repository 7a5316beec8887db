pub mod classifier;
pub mod discovery;
pub mod onnx;
pub mod preprocess;

pub use classifier::{ImageClassifier, InferenceError};
pub use discovery::{find_model_file, load_classifier};
pub use onnx::OnnxClassifier;
pub use preprocess::ImageTensor;
