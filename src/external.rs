//! Resolution of plugins published as versioned artifacts.
//!
//! The actual download machinery lives behind the
//! [`DependencyResolutionBackend`] trait; this module only sequences it with a
//! [`DescriptorCache`] so that a cache hit never touches the network and
//! concurrent requests for the same `( id, version )` never duplicate a fetch.

use std::collections::HashMap ;
use std::sync::{ Arc, Mutex, PoisonError };

use crate::descriptor::{ ModuleDescriptor, PluginResolution };
use crate::outcome::{ BackendError, ResolveError, ResolverOutcome };
use crate::request::{ PluginId, PluginRequest };
use crate::resolver::PluginResolver ;



/// Cache key for externally resolved descriptors: `( id, version )`.
///
/// A request without a version is a distinct key from any pinned version,
/// since "latest" may move between fetches.
#[derive( Clone, Debug, Eq, Hash, PartialEq )]
pub struct CacheKey {
	id: PluginId,
	version: Option<String>,
}

impl CacheKey {

	/// Returns the plugin id component of the key.
	#[inline] pub fn id( &self ) -> &PluginId { &self.id }
	/// Returns the version component of the key, if pinned.
	#[inline] pub fn version( &self ) -> Option<&str> { self.version.as_deref() }

}

impl From<&PluginRequest> for CacheKey {
	fn from( request: &PluginRequest ) -> Self {
		Self {
			id: request.id().clone(),
			version: request.version().map( str::to_owned ),
		}
	}
}

/// Backend that resolves `id[:version]` to a retrievable plugin artifact.
///
/// `Ok( None )` means the backend found no matching artifact; an `Err` is a
/// hard failure ([`BackendError`]) that aborts the whole chain. Timeouts and
/// cancellation are the backend's responsibility and surface as
/// [`BackendError::Timeout`] / [`BackendError::Cancelled`].
pub trait DependencyResolutionBackend: Send + Sync {
	/// Resolves the artifact for `id` at `version` (or the latest when `None`).
	///
	/// # Errors
	/// Returns a [`BackendError`] on transport failure, malformed descriptor,
	/// checksum mismatch, timeout, or cancellation.
	fn resolve_artifact( &self, id: &PluginId, version: Option<&str> ) -> Result<Option<ModuleDescriptor>, BackendError> ;
}

/// Key-addressed store of previously resolved descriptors.
///
/// Implementations must be safe under concurrent access from multiple
/// simultaneous build evaluations.
pub trait DescriptorCache: Send + Sync {
	/// Returns the cached descriptor for `key`, if present.
	fn get( &self, key: &CacheKey ) -> Option<ModuleDescriptor> ;
	/// Stores `descriptor` unless an entry already exists; returns the entry
	/// that ended up in the cache.
	fn put_if_absent( &self, key: CacheKey, descriptor: ModuleDescriptor ) -> ModuleDescriptor ;
}

impl<B: DependencyResolutionBackend + ?Sized> DependencyResolutionBackend for Arc<B> {
	fn resolve_artifact( &self, id: &PluginId, version: Option<&str> ) -> Result<Option<ModuleDescriptor>, BackendError> {
		B::resolve_artifact( self, id, version )
	}
}

impl<C: DescriptorCache + ?Sized> DescriptorCache for Arc<C> {
	fn get( &self, key: &CacheKey ) -> Option<ModuleDescriptor> { C::get( self, key )}
	fn put_if_absent( &self, key: CacheKey, descriptor: ModuleDescriptor ) -> ModuleDescriptor { C::put_if_absent( self, key, descriptor )}
}

/// Thread-safe in-memory [`DescriptorCache`].
#[derive( Debug, Default )]
pub struct MemoryDescriptorCache {
	entries: Mutex<HashMap<CacheKey, ModuleDescriptor>>,
}

impl MemoryDescriptorCache {
	/// Creates an empty cache.
	pub fn new() -> Self { Self::default() }
}

impl DescriptorCache for MemoryDescriptorCache {

	fn get( &self, key: &CacheKey ) -> Option<ModuleDescriptor> {
		self.entries.lock()
			.unwrap_or_else( PoisonError::into_inner )
			.get( key )
			.cloned()
	}

	fn put_if_absent( &self, key: CacheKey, descriptor: ModuleDescriptor ) -> ModuleDescriptor {
		self.entries.lock()
			.unwrap_or_else( PoisonError::into_inner )
			.entry( key )
			.or_insert( descriptor )
			.clone()
	}

}

/// Strategy that resolves plugins through an external repository backend.
///
/// The cache is consulted before any backend access; a hit short-circuits the
/// network entirely. On a miss, a per-key fetch lock guarantees at most one
/// in-flight backend fetch per distinct `( id, version )`: a concurrent
/// request for the same key blocks behind the fetch, then finds the freshly
/// cached descriptor on its post-lock re-check. Failed fetches are not
/// cached, so a waiter behind a failure retries the backend itself.
pub struct ExternalResolver<B, C> {
	backend: B,
	cache: C,
	fetch_locks: Mutex<HashMap<CacheKey, Arc<Mutex<()>>>>,
}

impl<B, C> ExternalResolver<B, C>
where
	B: DependencyResolutionBackend,
	C: DescriptorCache,
{

	/// Creates a resolver over the given backend and cache.
	pub fn new( backend: B, cache: C ) -> Self {
		Self {
			backend,
			cache,
			fetch_locks: Mutex::new( HashMap::new() ),
		}
	}

	fn fetch_lock( &self, key: &CacheKey ) -> Arc<Mutex<()>> {
		self.fetch_locks.lock()
			.unwrap_or_else( PoisonError::into_inner )
			.entry( key.clone() )
			.or_default()
			.clone()
	}

	fn release_fetch_lock( &self, key: &CacheKey ) {
		self.fetch_locks.lock()
			.unwrap_or_else( PoisonError::into_inner )
			.remove( key );
	}

}

impl<B, C> PluginResolver for ExternalResolver<B, C>
where
	B: DependencyResolutionBackend,
	C: DescriptorCache,
{

	fn resolve( &self, request: &PluginRequest ) -> ResolverOutcome {
		let key = CacheKey::from( request );
		if let Some( descriptor ) = self.cache.get( &key ) {
			return ResolverOutcome::Found( PluginResolution::of( descriptor ));
		}

		let lock = self.fetch_lock( &key );
		let _in_flight = lock.lock().unwrap_or_else( PoisonError::into_inner );

		// A fetch for this key may have completed while we waited.
		if let Some( descriptor ) = self.cache.get( &key ) {
			return ResolverOutcome::Found( PluginResolution::of( descriptor ));
		}

		match self.backend.resolve_artifact( request.id(), request.version() ) {
			Ok( Some( descriptor )) => {
				let cached = self.cache.put_if_absent( key.clone(), descriptor );
				self.release_fetch_lock( &key );
				ResolverOutcome::Found( PluginResolution::of( cached ))
			},
			Ok( None ) => ResolverOutcome::NotFound,
			Err( source ) => ResolverOutcome::Failed( ResolveError::Backend {
				id: request.id().clone(),
				source,
			}),
		}
	}

	fn description( &self ) -> &str { "the configured external plugin repositories" }

}

impl<B, C> std::fmt::Debug for ExternalResolver<B, C> {
	fn fmt( &self, f: &mut std::fmt::Formatter<'_> ) -> std::fmt::Result {
		f.debug_struct( "ExternalResolver" )
			.field( "backend", &"<backend>" )
			.field( "cache", &"<cache>" )
			.finish_non_exhaustive()
	}
}
