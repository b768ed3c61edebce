/// Why two components could not share a logical name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConflictKind {
	/// Both the incoming component and the occupant declare an eviction.
	Eviction,
	/// Neither component declares an eviction.
	Unmarked,
}

/// Two components claim the same logical name and the claim cannot be settled.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{}", self.message())]
pub struct ConflictError {
	/// Which rule rejected the claim.
	pub kind: ConflictKind,
	/// Kind of component being resolved.
	pub type_label: String,
	/// Contested logical name.
	pub key: String,
	/// Component being indexed when the conflict was found.
	pub incoming: String,
	/// Component already holding `key`.
	pub existing: String,
}

impl ConflictError {
	fn message(&self) -> String {
		let Self {
			type_label,
			key,
			incoming,
			existing,
			..
		} = self;
		match self.kind {
			ConflictKind::Eviction => {
				format!("{type_label} {key} has an eviction conflict between {incoming} and {existing}")
			}
			ConflictKind::Unmarked => {
				format!("{type_label} {key}: neither {incoming} nor {existing} declares an eviction")
			}
		}
	}
}

/// Errors returned by indexing and sorting.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
	#[error(transparent)]
	Conflict(#[from] ConflictError),

	#[error("invalid argument '{argument}': {reason}")]
	InvalidArgument {
		argument: &'static str,
		reason: &'static str,
	},
}
