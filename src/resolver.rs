//! The resolver contract.

use crate::outcome::ResolverOutcome ;
use crate::request::PluginRequest ;



/// One pluggable algorithm for answering a [`PluginRequest`].
///
/// Implemented by every strategy, by the
/// [`CompositeResolver`]( crate::CompositeResolver ) that chains them, and by
/// the [`ClasspathGuardResolver`]( crate::ClasspathGuardResolver ) that wraps
/// the chain; callers are polymorphic over this one capability.
///
/// Resolution is a synchronous, blocking call per request. Implementations
/// hold no mutable shared state across requests except explicitly scoped,
/// thread-safe caches.
pub trait PluginResolver: Send + Sync {

	/// Attempts to resolve `request`.
	///
	/// `NotFound` means "this strategy does not know the plugin" and lets the
	/// chain keep trying; `Failed` means a hard failure that must abort the
	/// chain rather than be silently skipped.
	fn resolve( &self, request: &PluginRequest ) -> ResolverOutcome ;

	/// Describes where this resolver searches, for not-found diagnostics.
	fn description( &self ) -> &str ;

}

impl<T: PluginResolver + ?Sized> PluginResolver for std::sync::Arc<T> {
	fn resolve( &self, request: &PluginRequest ) -> ResolverOutcome { T::resolve( self, request )}
	fn description( &self ) -> &str { T::description( self )}
}
