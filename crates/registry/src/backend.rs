//! Execution backends.

identifier_set! {
	/// An execution engine that runs a model.
	pub enum BackendType: "backend" {
		/// TensorFlow Lite interpreter.
		TfLite = 0 => "TFLITE" as "Tensorflow Lite",
	}
}
