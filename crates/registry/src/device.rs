//! Hardware device classes.

identifier_set! {
	/// A class of processing unit a backend can execute on.
	pub enum Device: "device" {
		Cpu = 0 => "CPU",
		Gpu = 1 => "GPU",
		/// Digital signal processor.
		Dsp = 2 => "DSP",
		/// Neural processing unit.
		Npu = 3 => "NPU",
	}
}
