//! Resolution of plugins bundled with the engine.

use std::collections::HashMap ;

use crate::descriptor::{ CompatibilityWarning, ModuleDescriptor, PluginResolution };
use crate::outcome::ResolverOutcome ;
use crate::request::{ PluginId, PluginRequest };
use crate::resolver::PluginResolver ;



/// Lookup table describing the plugins bundled with the engine.
///
/// Implement this over whatever holds the engine's plugin metadata; the
/// resolver only needs id-keyed lookup.
pub trait PluginRegistry: Send + Sync {
	/// Returns the bundled descriptor for `id`, if the engine ships one.
	fn lookup( &self, id: &PluginId ) -> Option<ModuleDescriptor> ;
}

impl<R: PluginRegistry + ?Sized> PluginRegistry for std::sync::Arc<R> {
	fn lookup( &self, id: &PluginId ) -> Option<ModuleDescriptor> { R::lookup( self, id )}
}

/// In-memory [`PluginRegistry`] backed by a `HashMap`.
#[derive( Debug, Default )]
pub struct MemoryPluginRegistry {
	plugins: HashMap<PluginId, ModuleDescriptor>,
}

impl MemoryPluginRegistry {

	/// Creates an empty registry.
	pub fn new() -> Self { Self::default() }

	/// Registers a bundled plugin, replacing any previous entry for its id.
	pub fn register( &mut self, descriptor: ModuleDescriptor ) -> &mut Self {
		self.plugins.insert( descriptor.id().clone(), descriptor );
		self
	}

}

impl PluginRegistry for MemoryPluginRegistry {
	fn lookup( &self, id: &PluginId ) -> Option<ModuleDescriptor> {
		self.plugins.get( id ).cloned()
	}
}

impl FromIterator<ModuleDescriptor> for MemoryPluginRegistry {
	fn from_iter<I: IntoIterator<Item = ModuleDescriptor>>( descriptors: I ) -> Self {
		let mut registry = Self::new();
		for descriptor in descriptors {
			registry.register( descriptor );
		}
		registry
	}
}

/// Strategy that resolves requests against the engine's bundled plugins.
///
/// Resolves iff the requested id is a registry key. Bundled plugins are
/// versioned with the engine itself, so the requested version is ignored: a
/// request pinning a different version still resolves, with a
/// [`CompatibilityWarning`] attached to the resolution instead of failing.
/// Never performs I/O.
#[derive( Debug )]
pub struct CorePluginResolver<R> {
	registry: R,
}

impl<R: PluginRegistry> CorePluginResolver<R> {

	/// Creates a resolver over the given registry of bundled plugins.
	pub fn new( registry: R ) -> Self {
		Self { registry }
	}

}

impl<R: PluginRegistry> PluginResolver for CorePluginResolver<R> {

	fn resolve( &self, request: &PluginRequest ) -> ResolverOutcome {
		let Some( descriptor ) = self.registry.lookup( request.id() ) else {
			return ResolverOutcome::NotFound ;
		};
		let resolution = match request.version() {
			Some( requested ) if Some( requested ) != descriptor.version() => {
				let warning = CompatibilityWarning::version_ignored( request.id().clone(), requested );
				PluginResolution::of( descriptor ).with_warning( warning )
			},
			_ => PluginResolution::of( descriptor ),
		};
		ResolverOutcome::Found( resolution )
	}

	fn description( &self ) -> &str { "the plugins bundled with this engine" }

}
