//! The no-op strategy.

use crate::outcome::ResolverOutcome ;
use crate::request::PluginRequest ;
use crate::resolver::PluginResolver ;



/// Strategy that never resolves anything.
///
/// Returns `NotFound` unconditionally and has no side effects. Kept first in
/// every assembled chain so an empty or disabled-external configuration still
/// yields a valid, non-empty chain, and useful as a deterministic placeholder
/// when testing chain machinery.
#[derive( Debug, Default, Clone, Copy )]
pub struct NoopResolver ;

impl PluginResolver for NoopResolver {

	fn resolve( &self, _request: &PluginRequest ) -> ResolverOutcome {
		ResolverOutcome::NotFound
	}

	fn description( &self ) -> &str { "nowhere (placeholder resolver)" }

}
