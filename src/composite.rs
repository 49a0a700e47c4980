//! First-match-wins aggregation of resolver strategies.

use itertools::Itertools ;

use crate::chain::ResolverChain ;
use crate::outcome::ResolverOutcome ;
use crate::request::PluginRequest ;
use crate::resolver::PluginResolver ;



/// Short-circuiting priority chain of resolver strategies.
///
/// Tries each strategy in the chain's fixed order. The first `Found` wins and
/// later strategies never run, so order encodes precedence. A `Failed` is
/// propagated from the point of occurrence and never masked by continuing to
/// a later strategy: a transport error from one resolver must not be hidden
/// behind a coincidental match further down the chain. Only `NotFound` moves
/// the walk along; an exhausted chain is itself `NotFound`, which is a
/// legitimate result and not an error.
///
/// This is not a "collect all candidates and pick the best" resolver; the
/// chain order is the whole policy.
#[derive( Debug )]
pub struct CompositeResolver {
	chain: ResolverChain,
	description: String,
}

impl CompositeResolver {

	/// Creates a composite over a frozen chain.
	pub fn new( chain: ResolverChain ) -> Self {
		let description = chain.iter()
			.map(| strategy | strategy.description() )
			.join( ", then " );
		Self { chain, description }
	}

	/// Returns the underlying chain.
	pub fn chain( &self ) -> &ResolverChain { &self.chain }

}

impl PluginResolver for CompositeResolver {

	fn resolve( &self, request: &PluginRequest ) -> ResolverOutcome {
		for strategy in self.chain.iter() {
			match strategy.resolve( request ) {
				ResolverOutcome::NotFound => {},
				outcome => return outcome,
			}
		}
		ResolverOutcome::NotFound
	}

	fn description( &self ) -> &str { &self.description }

}
