//! Standard checks

// Imports
use crate::check::{Check, Expect};

/// Name of the build check
pub const BUILD: &str = "build";

/// Name of the clean check
pub const CLEAN: &str = "clean";

/// Name of the phony clean check
pub const PHONY_CLEAN: &str = "phony-clean";

/// Returns the standard checks, in the order they must run.
///
/// `artifact` is the file the default build produces, `clean_target`
/// the target that removes it.
#[must_use]
pub fn standard(artifact: &str, clean_target: &str) -> Vec<Check> {
	vec![
		self::build(artifact),
		self::clean(artifact, clean_target),
		self::phony_clean(artifact, clean_target),
	]
}

/// Default build creates the artifact
fn build(artifact: &str) -> Check {
	Check::new(BUILD, "Default build produces the artifact")
		.invoke(Vec::<String>::new())
		.expect(artifact, Expect::File, "artifact not created")
}

/// Clean removes the artifact
fn clean(artifact: &str, clean_target: &str) -> Check {
	Check::new(CLEAN, "Clean target removes the artifact")
		.invoke(Vec::<String>::new())
		.expect(artifact, Expect::File, "artifact not created before clean")
		.invoke([clean_target])
		.expect(artifact, Expect::Missing, "artifact not removed by clean")
}

/// Clean target runs even when a file with its name exists
fn phony_clean(artifact: &str, clean_target: &str) -> Check {
	Check::new(PHONY_CLEAN, "Clean target is phony, not a file")
		.invoke(Vec::<String>::new())
		.expect(artifact, Expect::File, "artifact not created before clean")
		.touch(clean_target)
		.invoke_or_fail([clean_target], "file incorrectly removed")
		.expect(clean_target, Expect::Contents(String::new()), "file incorrectly removed")
		.expect(artifact, Expect::Missing, "artifact not removed by clean")
}
