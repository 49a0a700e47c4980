//! Ordered, frozen sequences of resolver strategies.
//!
//! Order is significant: it encodes precedence (e.g. bundled-core before
//! external-repository) and is fixed at construction. The builder is
//! append-only; freezing it yields a read-only chain that is non-empty by
//! construction, so chain machinery never has to handle a zero-strategy case.

use nonempty_collections::NEVec ;

use crate::resolver::PluginResolver ;



/// Append-only accumulator of resolver strategies.
///
/// Seeded with its first strategy so an empty chain is unrepresentable;
/// [`freeze`]( Self::freeze ) turns the accumulated order into an immutable
/// [`ResolverChain`]. No strategy is added or removed after freezing.
#[must_use = "call .freeze() to obtain the chain"]
pub struct ResolverChainBuilder {
	strategies: NEVec<Box<dyn PluginResolver>>,
}

impl ResolverChainBuilder {

	/// Starts a chain with its first (highest-precedence) strategy.
	pub fn first( strategy: impl PluginResolver + 'static ) -> Self {
		Self { strategies: NEVec::new( Box::new( strategy )) }
	}

	/// Appends a strategy after all previously added ones.
	pub fn then( mut self, strategy: impl PluginResolver + 'static ) -> Self {
		self.strategies.push( Box::new( strategy ));
		self
	}

	/// Appends an already boxed strategy after all previously added ones.
	pub fn then_boxed( mut self, strategy: Box<dyn PluginResolver> ) -> Self {
		self.strategies.push( strategy );
		self
	}

	/// Freezes the accumulated strategies into an immutable chain.
	pub fn freeze( self ) -> ResolverChain {
		ResolverChain { strategies: self.strategies }
	}

}

impl std::fmt::Debug for ResolverChainBuilder {
	fn fmt( &self, f: &mut std::fmt::Formatter<'_> ) -> std::fmt::Result {
		f.debug_struct( "ResolverChainBuilder" )
			.field( "strategies", &self.strategies.len() )
			.finish_non_exhaustive()
	}
}

/// Fixed-order, read-only, non-empty sequence of resolver strategies.
pub struct ResolverChain {
	strategies: NEVec<Box<dyn PluginResolver>>,
}

impl ResolverChain {

	/// Returns the number of strategies in the chain (always at least one).
	pub fn len( &self ) -> std::num::NonZeroUsize {
		self.strategies.len()
	}

	/// Iterates the strategies in precedence order.
	pub fn iter( &self ) -> impl Iterator<Item = &dyn PluginResolver> {
		( &self.strategies ).into_iter().map(| strategy | strategy.as_ref() )
	}

}

impl std::fmt::Debug for ResolverChain {
	fn fmt( &self, f: &mut std::fmt::Formatter<'_> ) -> std::fmt::Result {
		f.debug_struct( "ResolverChain" )
			.field( "strategies", &self.strategies.len() )
			.finish_non_exhaustive()
	}
}
