use tokio_util::sync::CancellationToken;

/// Shared request to stop the root session.
///
/// Clones observe the same state. Nested sessions hold a clone of the root's
/// token so an `exit` at any depth reaches the root, while sessions between
/// the two keep their own running state.
#[derive(Debug, Clone, Default)]
pub struct StopToken {
	cancel: CancellationToken,
}

impl StopToken {
	pub fn new() -> Self {
		Self::default()
	}

	/// Requests that the root session stop at its next loop check.
	pub fn request_stop(&self) {
		self.cancel.cancel();
	}

	pub fn is_stop_requested(&self) -> bool {
		self.cancel.is_cancelled()
	}
}
