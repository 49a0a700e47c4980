//! Assembly of the resolver used by a script evaluation.

use std::sync::Arc ;
use pipe_trait::Pipe ;

use crate::chain::ResolverChainBuilder ;
use crate::composite::CompositeResolver ;
use crate::core_registry::{ CorePluginResolver, PluginRegistry };
use crate::external::{ DependencyResolutionBackend, DescriptorCache, ExternalResolver };
use crate::guard::{ ClasspathGuardResolver, DescriptorLocator };
use crate::noop::NoopResolver ;
use crate::resolver::PluginResolver ;



/// Builds one guarded resolver per script-evaluation context.
///
/// The assembly order is fixed: `[ NoopResolver, CorePluginResolver ]`, then
/// the external strategy when one is configured, then the whole chain wrapped
/// with the classpath guard. Core plugins therefore always take precedence
/// over externally resolved ones sharing the same id, and the no-op entry
/// keeps the chain valid and non-empty even with externals disabled.
///
/// External resolution is off unless [`with_external`]( Self::with_external )
/// is called. The external strategy (and with it the descriptor cache and its
/// one-fetch-per-key guarantee) is built once and shared by every resolver
/// this factory creates, so concurrent script evaluations never duplicate a
/// backend fetch.
pub struct PluginResolverFactory {
	registry: Arc<dyn PluginRegistry>,
	external: Option<Arc<dyn PluginResolver>>,
}

impl PluginResolverFactory {

	/// Creates a factory resolving against the given registry of bundled
	/// plugins, with external resolution disabled.
	pub fn new( registry: impl PluginRegistry + 'static ) -> Self {
		Self {
			registry: Arc::new( registry ),
			external: None,
		}
	}

	/// Enables the external strategy over the given backend and cache.
	pub fn with_external(
		mut self,
		backend: impl DependencyResolutionBackend + 'static,
		cache: impl DescriptorCache + 'static,
	) -> Self {
		self.external = Some( Arc::new( ExternalResolver::new( backend, cache )));
		self
	}

	/// Assembles the resolver for one script-evaluation context.
	///
	/// `locator` must be bound to that script's own loader; it is what the
	/// guard queries before any strategy runs.
	pub fn create_resolver<L: DescriptorLocator>( &self, locator: L ) -> ClasspathGuardResolver<L> {
		ResolverChainBuilder::first( NoopResolver )
			.then( CorePluginResolver::new( Arc::clone( &self.registry )))
			.pipe(| builder | match &self.external {
				None => builder,
				Some( external ) => builder.then( Arc::clone( external )),
			})
			.freeze()
			.pipe( CompositeResolver::new )
			.pipe(| composite | ClasspathGuardResolver::new( locator, composite ))
	}

}

impl std::fmt::Debug for PluginResolverFactory {
	fn fmt( &self, f: &mut std::fmt::Formatter<'_> ) -> std::fmt::Result {
		f.debug_struct( "PluginResolverFactory" )
			.field( "external", &self.external.is_some() )
			.finish_non_exhaustive()
	}
}
