pub mod preprocess;
pub mod remote_classifier;

pub use remote_classifier::RemoteClassifier;
