//! CPU cluster masks for pinning worker threads.

identifier_set! {
	/// Which cores of a heterogeneous CPU a thread may run on.
	#[derive(Default)]
	pub enum CpuMask: "cpu_mask" {
		/// Every online core.
		#[default]
		All = 0 => "ALL",
		/// The efficiency cluster.
		Little = 1 => "LITTLE",
		/// The performance cluster.
		Big = 2 => "BIG",
		/// The single fastest core.
		Primary = 3 => "PRIMARY",
	}
}
