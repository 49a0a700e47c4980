//! Pre-resolution guard against plugins the script can already see.
//!
//! Re-resolving a plugin that is already on the invoking script's own loader
//! would risk confusing the already-loaded version with a freshly resolved
//! one, so the guard rejects such requests before any strategy runs - before
//! registry lookups and before the external resolver's cache is consulted.

use std::collections::HashSet ;

use crate::composite::CompositeResolver ;
use crate::outcome::{ ResolveError, ResolverOutcome };
use crate::request::{ PluginId, PluginRequest };
use crate::resolver::PluginResolver ;



/// Capability to ask whether a plugin descriptor is already visible in a
/// given runtime context.
///
/// Consumed only by the guard. Implement it per target environment; no
/// reflection is required - a scoped snapshot of visible ids works just as
/// well as a live classloader query.
pub trait DescriptorLocator: Send + Sync {
	/// Returns `true` when a descriptor for `id` is already present.
	fn has_descriptor( &self, id: &PluginId ) -> bool ;
}

/// Set-backed [`DescriptorLocator`] over an explicit snapshot of the ids
/// visible to the script's loader.
#[derive( Debug, Default )]
pub struct SnapshotDescriptorLocator {
	visible: HashSet<PluginId>,
}

impl SnapshotDescriptorLocator {
	/// Creates a locator over the given snapshot of visible plugin ids.
	pub fn new( visible: impl IntoIterator<Item = PluginId> ) -> Self {
		Self { visible: visible.into_iter().collect() }
	}
}

impl DescriptorLocator for SnapshotDescriptorLocator {
	fn has_descriptor( &self, id: &PluginId ) -> bool {
		self.visible.contains( id )
	}
}

/// Wraps the composite chain with a classpath presence check.
///
/// When the locator reports a descriptor for the requested id, resolution
/// fails fast with [`ResolveError::AlreadyOnClasspath`] - a usage error that
/// the caller must not retry or silently ignore. Otherwise the wrapped
/// composite's outcome is returned unchanged.
#[derive( Debug )]
pub struct ClasspathGuardResolver<L> {
	locator: L,
	delegate: CompositeResolver,
}

impl<L: DescriptorLocator> ClasspathGuardResolver<L> {

	/// Wraps `delegate` with a presence check against `locator`.
	pub fn new( locator: L, delegate: CompositeResolver ) -> Self {
		Self { locator, delegate }
	}

}

impl<L: DescriptorLocator> PluginResolver for ClasspathGuardResolver<L> {

	fn resolve( &self, request: &PluginRequest ) -> ResolverOutcome {
		if self.locator.has_descriptor( request.id() ) {
			return ResolverOutcome::Failed( ResolveError::AlreadyOnClasspath {
				id: request.id().clone(),
			});
		}
		self.delegate.resolve( request )
	}

	fn description( &self ) -> &str { self.delegate.description() }

}
